pub mod day_record;
pub mod entry;
pub mod section;
pub mod stats;
