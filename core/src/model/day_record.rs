use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::section::Section;

/// Everything logged at the desk for one calendar day.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DayRecord {
    #[serde(default)]
    pub checkins: Vec<String>,
    // Older backups call this list `sequeda`.
    #[serde(default, alias = "sequeda")]
    pub staying: Vec<String>,
    #[serde(default)]
    pub checkouts: Vec<String>,
}

/// All day records keyed by `YYYY-MM-DD`.
pub type Ledger = BTreeMap<String, DayRecord>;

impl DayRecord {
    pub fn entries(&self, section: Section) -> &[String] {
        match section {
            Section::Checkin => &self.checkins,
            Section::Staying => &self.staying,
            Section::Checkout => &self.checkouts,
        }
    }

    pub fn entries_mut(&mut self, section: Section) -> &mut Vec<String> {
        match section {
            Section::Checkin => &mut self.checkins,
            Section::Staying => &mut self.staying,
            Section::Checkout => &mut self.checkouts,
        }
    }

    pub fn occupied(&self) -> usize {
        self.checkins.len() + self.staying.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkins.is_empty() && self.staying.is_empty() && self.checkouts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_key_and_missing_lists() {
        let json = r#"{"checkins":["101 / A / 1 PAX"],"sequeda":["204"]}"#;
        let record: DayRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.staying, vec!["204".to_string()]);
        assert!(record.checkouts.is_empty());
        assert_eq!(record.occupied(), 2);
    }

    #[test]
    fn test_serializes_with_current_keys() {
        let record = DayRecord {
            staying: vec!["204".to_string()],
            ..DayRecord::default()
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"checkins":[],"staying":["204"],"checkouts":[]}"#);
    }
}
