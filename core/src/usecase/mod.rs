pub mod report;
pub mod search;
pub mod stats;
pub mod transfer;
