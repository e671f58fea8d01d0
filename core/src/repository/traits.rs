use crate::error::Result;
use crate::model::day_record::Ledger;

pub trait LedgerRepository {
    /// Returns the stored ledger, or an empty one when nothing usable is
    /// stored. Loading never fails.
    fn load(&self) -> Ledger;
    /// Replaces everything stored with `ledger`.
    fn save(&self, ledger: &Ledger) -> Result<()>;
}
