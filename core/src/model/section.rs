use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// One of the three lists kept for every day.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Checkin,
    Staying,
    Checkout,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Checkin, Section::Staying, Section::Checkout];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Checkin => "Check-In",
            Section::Staying => "Staying",
            Section::Checkout => "Check-Out",
        }
    }

    /// Fields the section cannot be saved without.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            Section::Checkin => &["room", "guest", "pax"],
            Section::Staying | Section::Checkout => &["room"],
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "").as_str() {
            "checkin" | "in" => Ok(Section::Checkin),
            "staying" | "stay" => Ok(Section::Staying),
            "checkout" | "out" => Ok(Section::Checkout),
            other => Err(Error::validation(format!(
                "unknown section '{}' (expected checkin, staying or checkout)",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("checkin".parse::<Section>().unwrap(), Section::Checkin);
        assert_eq!("Check-In".parse::<Section>().unwrap(), Section::Checkin);
        assert_eq!("in".parse::<Section>().unwrap(), Section::Checkin);
        assert_eq!("stay".parse::<Section>().unwrap(), Section::Staying);
        assert_eq!("OUT".parse::<Section>().unwrap(), Section::Checkout);
        assert!("lobby".parse::<Section>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Section::Checkin.to_string(), "Check-In");
        assert_eq!(Section::Staying.to_string(), "Staying");
        assert_eq!(Section::Checkout.to_string(), "Check-Out");
    }
}
