use chrono::NaiveDate;
use tracing::info;

use crate::error::{Error, Result};
use crate::model::day_record::{DayRecord, Ledger};
use crate::model::entry::EntryFields;
use crate::model::section::Section;
use crate::model::stats::DayStats;
use crate::repository::LedgerRepository;
use crate::service::dto::{OccupancyPoint, RoomCount, SearchHit};
use crate::time::date_key;
use crate::usecase::{search, stats, transfer};

/// Whether a room can take a new check-in today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomStatus {
    Available,
    Occupied,
}

/// The desk for one working day: owns the whole ledger and today's record,
/// and writes the ledger back after every change.
pub struct FrontDesk<R: LedgerRepository> {
    repo: R,
    today: NaiveDate,
    ledger: Ledger,
    record: DayRecord,
}

impl<R: LedgerRepository> FrontDesk<R> {
    /// Loads the ledger and today's record (empty if none was stored).
    pub fn open(repo: R, today: NaiveDate) -> Self {
        let ledger = repo.load();
        let record = ledger.get(&date_key(today)).cloned().unwrap_or_default();
        Self {
            repo,
            today,
            ledger,
            record,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn record(&self) -> &DayRecord {
        &self.record
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn add(&mut self, section: Section, fields: &EntryFields) -> Result<String> {
        let text = fields.normalize(section)?;

        if section == Section::Checkin {
            let room = fields.room.trim().to_uppercase();
            let taken = self
                .record
                .checkins
                .iter()
                .any(|c| c.to_uppercase().contains(&room));
            if taken {
                return Err(Error::DuplicateRoom { room });
            }
        }

        let mut record = self.record.clone();
        record.entries_mut(section).push(text.clone());
        self.commit(record)?;
        info!(%section, entry = %text, "entry added");
        Ok(text)
    }

    pub fn update(&mut self, section: Section, index: usize, fields: &EntryFields) -> Result<String> {
        self.check_index(section, index)?;
        let text = fields.normalize(section)?;

        let mut record = self.record.clone();
        record.entries_mut(section)[index] = text.clone();
        self.commit(record)?;
        info!(%section, index, entry = %text, "entry updated");
        Ok(text)
    }

    /// Removes one entry. Asking the user to confirm is up to the caller.
    pub fn remove(&mut self, section: Section, index: usize) -> Result<String> {
        self.check_index(section, index)?;

        let mut record = self.record.clone();
        let removed = record.entries_mut(section).remove(index);
        self.commit(record)?;
        info!(%section, index, entry = %removed, "entry removed");
        Ok(removed)
    }

    pub fn entry(&self, section: Section, index: usize) -> Result<&str> {
        self.check_index(section, index)?;
        Ok(self.record.entries(section)[index].as_str())
    }

    /// The stored entry split back into editable fields.
    pub fn entry_fields(&self, section: Section, index: usize) -> Result<EntryFields> {
        Ok(EntryFields::from_stored(section, self.entry(section, index)?))
    }

    /// Occupied when a check-in mentions the room or the room is staying on.
    /// Check-ins match by substring, staying entries must match exactly.
    pub fn room_status(&self, room: &str) -> RoomStatus {
        let room = room.trim().to_uppercase();
        let checked_in = self.record.checkins.iter().any(|c| c.to_uppercase().contains(&room));
        let staying = self.record.staying.iter().any(|s| s.to_uppercase() == room);
        if checked_in || staying {
            RoomStatus::Occupied
        } else {
            RoomStatus::Available
        }
    }

    pub fn stats(&self) -> DayStats {
        stats::day_stats(&self.record)
    }

    pub fn historical_occupancy(&self, days: u32) -> Vec<OccupancyPoint> {
        stats::historical_occupancy(&self.ledger, self.today, days)
    }

    pub fn top_rooms(&self, limit: usize) -> Vec<RoomCount> {
        stats::top_rooms(&self.ledger, limit)
    }

    pub fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        search::search(&self.ledger, query)
    }

    /// Records stored for any date. Today only has an entry once something
    /// has been saved for it.
    pub fn day(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.ledger.get(&date_key(date))
    }

    pub fn export_all(&self) -> Result<Vec<u8>> {
        transfer::export_all(&self.ledger)
    }

    /// Replaces the whole ledger with a backup and reloads today's record.
    pub fn import_all(&mut self, bytes: &[u8]) -> Result<usize> {
        let ledger = transfer::import_all(bytes)?;
        self.repo.save(&ledger)?;
        self.record = ledger.get(&date_key(self.today)).cloned().unwrap_or_default();
        self.ledger = ledger;
        info!(days = self.ledger.len(), "ledger imported");
        Ok(self.ledger.len())
    }

    fn check_index(&self, section: Section, index: usize) -> Result<()> {
        let len = self.record.entries(section).len();
        if index >= len {
            return Err(Error::IndexOutOfRange {
                section,
                index,
                len,
            });
        }
        Ok(())
    }

    /// Saves the ledger with `record` as today's entry. Nothing in memory
    /// changes unless the save succeeds.
    fn commit(&mut self, record: DayRecord) -> Result<()> {
        let key = date_key(self.today);
        let previous = self.ledger.insert(key.clone(), record.clone());
        if let Err(e) = self.repo.save(&self.ledger) {
            match previous {
                Some(old) => self.ledger.insert(key, old),
                None => self.ledger.remove(&key),
            };
            return Err(e);
        }
        self.record = record;
        Ok(())
    }
}
