use crate::error::{Error, Result};
use crate::model::day_record::Ledger;
use crate::model::section::Section;
use crate::service::dto::SearchHit;

/// Case-insensitive substring search over every entry of every day.
/// Days come out in date order, and within a day check-ins, then staying,
/// then check-outs.
pub fn search(ledger: &Ledger, query: &str) -> Result<Vec<SearchHit>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Err(Error::validation("search query is empty"));
    }

    let mut hits = Vec::new();
    for (date, record) in ledger {
        for section in Section::ALL {
            for text in record.entries(section) {
                if text.to_lowercase().contains(&needle) {
                    hits.push(SearchHit {
                        date: date.clone(),
                        section,
                        text: text.clone(),
                    });
                }
            }
        }
    }
    Ok(hits)
}
