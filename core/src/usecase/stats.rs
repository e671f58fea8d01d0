use chrono::{Duration, NaiveDate};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::model::day_record::{DayRecord, Ledger};
use crate::model::entry::room_token;
use crate::model::stats::{DayStats, TOTAL_ROOMS};
use crate::service::dto::{OccupancyPoint, RoomCount};
use crate::time::date_key;

pub const DEFAULT_HISTORY_DAYS: u32 = 7;
pub const DEFAULT_TOP_ROOMS: usize = 5;

static PAX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+) PAX").expect("static pattern"));

/// Percentage of `TOTAL_ROOMS` taken, rounded to one decimal.
pub fn occupancy_pct(occupied: usize) -> f64 {
    let pct = occupied as f64 / TOTAL_ROOMS as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}

/// Guests declared on a check-in entry, 0 when the entry has no pax count.
/// Counts too large for a `u64` saturate.
pub fn guests_in(entry: &str) -> u64 {
    PAX_PATTERN
        .captures(entry)
        .map(|c| c[1].parse().unwrap_or(u64::MAX))
        .unwrap_or(0)
}

pub fn day_stats(record: &DayRecord) -> DayStats {
    let occupied = record.occupied();
    DayStats {
        occupancy_pct: occupancy_pct(occupied),
        checkin_count: record.checkins.len(),
        checkout_count: record.checkouts.len(),
        total_guests: record
            .checkins
            .iter()
            .fold(0u64, |total, c| total.saturating_add(guests_in(c))),
        occupied,
        available: TOTAL_ROOMS.saturating_sub(occupied),
    }
}

/// Occupancy for the `days` days ending on `today`, oldest first.
pub fn historical_occupancy(ledger: &Ledger, today: NaiveDate, days: u32) -> Vec<OccupancyPoint> {
    (0..i64::from(days))
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            let pct = ledger
                .get(&date_key(date))
                .map(|r| occupancy_pct(r.occupied()))
                .unwrap_or(0.0);
            OccupancyPoint {
                date,
                label: date.format("%d/%m").to_string(),
                pct,
            }
        })
        .collect()
}

/// Rooms checked into most often across the whole ledger. Ties keep the
/// order in which rooms first appear.
pub fn top_rooms(ledger: &Ledger, limit: usize) -> Vec<RoomCount> {
    let mut counts: Vec<RoomCount> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for record in ledger.values() {
        for checkin in &record.checkins {
            let room = room_token(checkin);
            match positions.get(room) {
                Some(&pos) => counts[pos].count += 1,
                None => {
                    positions.insert(room.to_string(), counts.len());
                    counts.push(RoomCount {
                        room: room.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }

    // Stable sort preserves first-seen order among equal counts.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(checkins: &[&str], staying: &[&str], checkouts: &[&str]) -> DayRecord {
        let owned = |v: &[&str]| v.iter().map(|s| s.to_string()).collect();
        DayRecord {
            checkins: owned(checkins),
            staying: owned(staying),
            checkouts: owned(checkouts),
        }
    }

    #[test]
    fn test_day_stats_example() {
        let stats = day_stats(&record(&["101 / JOHN DOE / 2 PAX"], &[], &[]));
        assert_eq!(stats.occupancy_pct, 4.0);
        assert_eq!(stats.checkin_count, 1);
        assert_eq!(stats.checkout_count, 0);
        assert_eq!(stats.total_guests, 2);
        assert_eq!(stats.available, 24);
    }

    #[test]
    fn test_occupancy_counts_staying_not_checkouts() {
        let stats = day_stats(&record(
            &["101 / A / 1 PAX", "102 / B / 3 PAX / VIP"],
            &["204"],
            &["305", "306"],
        ));
        assert_eq!(stats.occupied, 3);
        assert_eq!(stats.occupancy_pct, 12.0);
        assert_eq!(stats.total_guests, 4);
        assert_eq!(stats.checkout_count, 2);
    }

    #[test]
    fn test_occupancy_pct_values() {
        assert_eq!(occupancy_pct(0), 0.0);
        assert_eq!(occupancy_pct(1), 4.0);
        assert_eq!(occupancy_pct(7), 28.0);
        assert_eq!(occupancy_pct(25), 100.0);
        // Overbooking is reported as is.
        assert_eq!(occupancy_pct(30), 120.0);
    }

    #[test]
    fn test_unparsable_pax_counts_zero() {
        assert_eq!(guests_in("101 / A / ? PAX"), 0);
        assert_eq!(guests_in("101"), 0);
        assert_eq!(guests_in("101 / A / 12 PAX / NOTE"), 12);
    }

    #[test]
    fn test_guest_total_does_not_overflow() {
        let stats = day_stats(&record(
            &["101 / A / 4000000000 PAX", "202 / B / 4000000000 PAX"],
            &[],
            &[],
        ));
        assert_eq!(stats.total_guests, 8_000_000_000);

        assert_eq!(guests_in("101 / A / 99999999999999999999999 PAX"), u64::MAX);
        let stats = day_stats(&record(
            &["101 / A / 99999999999999999999999 PAX", "202 / B / 3 PAX"],
            &[],
            &[],
        ));
        assert_eq!(stats.total_guests, u64::MAX);
    }

    #[test]
    fn test_historical_occupancy_fills_missing_days() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let mut ledger = Ledger::new();
        ledger.insert("2024-01-02".into(), record(&["101 / A / 1 PAX"], &["102"], &[]));
        ledger.insert("2024-01-03".into(), record(&[], &[], &["101"]));

        let series = historical_occupancy(&ledger, today, 7);
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].label, "28/12");
        assert_eq!(series[5].label, "02/01");
        assert_eq!(series[5].pct, 8.0);
        assert_eq!(series[6].date, today);
        assert_eq!(series[6].pct, 0.0);
        assert!(series[..5].iter().all(|p| p.pct == 0.0));
    }

    #[test]
    fn test_top_rooms_orders_by_count_then_first_seen() {
        let mut ledger = Ledger::new();
        ledger.insert(
            "2024-01-01".into(),
            record(&["201 / A / 1 PAX", "101 / B / 2 PAX"], &[], &[]),
        );
        ledger.insert(
            "2024-01-02".into(),
            record(&["101 / C / 1 PAX", "305 / D / 1 PAX"], &[], &[]),
        );
        ledger.insert("2024-01-03".into(), record(&["305 / E / 2 PAX"], &[], &[]));

        let top = top_rooms(&ledger, 5);
        let rooms: Vec<(&str, usize)> = top.iter().map(|r| (r.room.as_str(), r.count)).collect();
        assert_eq!(rooms, vec![("101", 2), ("305", 2), ("201", 1)]);

        assert_eq!(top_rooms(&ledger, 1).len(), 1);
    }
}
