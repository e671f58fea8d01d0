pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use config::Config;
pub use error::{Error, Result};
pub use input::{apply_args, parse_args, Field, FieldArgs};
pub use logging::{init_logging, Verbosity};
pub use model::day_record::{DayRecord, Ledger};
pub use model::entry::{CheckinEntry, EntryFields};
pub use model::section::Section;
pub use model::stats::{DayStats, TOTAL_ROOMS};
pub use repository::{FileLedgerRepository, InMemoryLedgerRepository, LedgerRepository};
pub use service::desk_service::{FrontDesk, RoomStatus};
pub use service::dto::{OccupancyPoint, RoomCount, SearchHit};
pub use time::{parse_day, today};
