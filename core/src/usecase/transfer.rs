use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::model::day_record::Ledger;
use crate::time::date_key;

/// Encodes the whole ledger. The file store writes exactly these bytes, so
/// a backup is identical to what is on disk.
pub fn export_all(ledger: &Ledger) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(ledger)?)
}

/// Parses a backup produced by `export_all`. Legacy `sequeda` keys load as
/// the staying list.
pub fn import_all(bytes: &[u8]) -> Result<Ledger> {
    serde_json::from_slice(bytes).map_err(Error::InvalidFormat)
}

pub fn backup_file_name(today: NaiveDate) -> String {
    format!("hotel-backup-{}.json", date_key(today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::day_record::DayRecord;

    #[test]
    fn test_export_then_import_is_identity() {
        let mut ledger = Ledger::new();
        ledger.insert(
            "2024-01-01".to_string(),
            DayRecord {
                checkins: vec!["101 / JOHN DOE / 2 PAX / VIP".to_string()],
                staying: vec!["204".to_string()],
                checkouts: vec!["305".to_string()],
            },
        );
        ledger.insert("2024-02-29".to_string(), DayRecord::default());

        let bytes = export_all(&ledger).unwrap();
        let restored = import_all(&bytes).unwrap();
        assert_eq!(restored, ledger);
        assert_eq!(export_all(&restored).unwrap(), bytes);
    }

    #[test]
    fn test_import_rejects_non_json() {
        let err = import_all(b"hotel backup").unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(_)));
    }

    #[test]
    fn test_import_legacy_backup() {
        let legacy = br#"{"2023-12-31":{"checkins":["101 / A / 1 PAX"],"sequeda":["204"],"checkouts":[]}}"#;
        let ledger = import_all(legacy).unwrap();
        assert_eq!(ledger["2023-12-31"].staying, vec!["204".to_string()]);
    }

    #[test]
    fn test_backup_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(backup_file_name(date), "hotel-backup-2024-03-09.json");
    }
}
