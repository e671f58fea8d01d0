use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::section::Section;

/// One point of the trailing occupancy chart.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OccupancyPoint {
    pub date: NaiveDate,
    pub label: String, // DD/MM
    pub pct: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoomCount {
    pub room: String,
    pub count: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub date: String,
    pub section: Section,
    pub text: String,
}
