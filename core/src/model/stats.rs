use serde::{Deserialize, Serialize};

/// Number of rooms the hotel rents out.
pub const TOTAL_ROOMS: usize = 25;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DayStats {
    pub occupancy_pct: f64,
    pub checkin_count: usize,
    pub checkout_count: usize,
    pub total_guests: u64,
    pub occupied: usize,
    pub available: usize,
}
