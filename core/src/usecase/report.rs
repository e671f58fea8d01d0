use chrono::NaiveDate;

use crate::model::day_record::DayRecord;
use crate::model::section::Section;
use crate::time::{date_key, long_date};

/// Plain-text summary of one day, suitable for saving or mailing.
pub fn render_report(hotel_name: &str, date: NaiveDate, record: &DayRecord) -> String {
    let mut out = format!("{} - REPORT\nDate: {}\n\n", hotel_name, long_date(date));

    if record.is_empty() {
        out.push_str("No records for this day\n");
        return out;
    }

    for section in Section::ALL {
        let entries = record.entries(section);
        if entries.is_empty() {
            continue;
        }
        out.push_str(&format!("{} ({})\n", section, entries.len()));
        for entry in entries {
            out.push_str(&format!("- {}\n", entry));
        }
        out.push('\n');
    }
    out
}

pub fn report_file_name(date: NaiveDate) -> String {
    format!("report-{}.txt", date_key(date))
}
