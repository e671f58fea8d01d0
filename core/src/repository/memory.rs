use std::cell::{Cell, RefCell};

use crate::error::Result;
use crate::model::day_record::Ledger;
use crate::repository::traits::LedgerRepository;

/// Keeps the ledger in memory. Used for dry runs and tests.
#[derive(Debug, Default)]
pub struct InMemoryLedgerRepository {
    ledger: RefCell<Ledger>,
    saves: Cell<usize>,
}

impl InMemoryLedgerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ledger(ledger: Ledger) -> Self {
        Self {
            ledger: RefCell::new(ledger),
            saves: Cell::new(0),
        }
    }

    pub fn snapshot(&self) -> Ledger {
        self.ledger.borrow().clone()
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl LedgerRepository for InMemoryLedgerRepository {
    fn load(&self) -> Ledger {
        self.ledger.borrow().clone()
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        *self.ledger.borrow_mut() = ledger.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
