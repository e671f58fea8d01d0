use frontdesk_core::time::long_date;
use frontdesk_core::{DayRecord, SearchHit, Section};
use chrono::NaiveDate;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Section")]
    section: String,
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Entry")]
    text: String,
}

#[derive(Tabled)]
struct HitRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    section: String,
    #[tabled(rename = "Entry")]
    text: String,
}

fn styled(mut table: Table) -> Table {
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table
}

pub fn show_day(title: &str, record: &DayRecord) {
    println!("\x1b[1;36m{}\x1b[0m", title);

    if record.is_empty() {
        println!("No records for this day.");
        return;
    }

    let mut rows = Vec::new();
    for section in Section::ALL {
        let entries = record.entries(section);
        for (i, text) in entries.iter().enumerate() {
            // Section name only on the first row of its group
            let label = if i == 0 {
                format!("{} ({})", section, entries.len())
            } else {
                String::new()
            };
            rows.push(EntryRow {
                section: label,
                number: i + 1,
                text: text.clone(),
            });
        }
    }

    println!("{}", styled(Table::new(rows)));
}

pub fn show_search(query: &str, hits: &[SearchHit]) {
    if hits.is_empty() {
        println!("No results for '{}'.", query);
        return;
    }

    println!("\x1b[1;36m{} result(s) for '{}'\x1b[0m", hits.len(), query);
    let rows: Vec<HitRow> = hits
        .iter()
        .map(|hit| HitRow {
            date: NaiveDate::parse_from_str(&hit.date, "%Y-%m-%d")
                .map(long_date)
                .unwrap_or_else(|_| hit.date.clone()),
            section: hit.section.to_string(),
            text: hit.text.clone(),
        })
        .collect();

    println!("{}", styled(Table::new(rows)));
}
