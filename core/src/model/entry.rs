use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::section::Section;

const FIELD_SEPARATOR: &str = " / ";
const PAX_SUFFIX: &str = " PAX";

/// Raw values as typed at the desk, before validation.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct EntryFields {
    pub room: String,
    pub guest: String,
    pub pax: String,
    pub note: String,
}

impl EntryFields {
    pub fn room(room: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            ..Self::default()
        }
    }

    pub fn checkin(
        room: impl Into<String>,
        guest: impl Into<String>,
        pax: impl Into<String>,
    ) -> Self {
        Self {
            room: room.into(),
            guest: guest.into(),
            pax: pax.into(),
            note: String::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Splits a stored entry back into editable fields. Missing segments
    /// come back empty, and a pax is kept as written so a value that is not
    /// a number still fails validation instead of turning into 0.
    pub fn from_stored(section: Section, text: &str) -> Self {
        if section != Section::Checkin {
            return Self::room(text);
        }
        let mut parts = text.split(FIELD_SEPARATOR);
        let room = parts.next().unwrap_or_default().to_string();
        let guest = parts.next().unwrap_or_default().to_string();
        let pax = parts
            .next()
            .map(|p| p.strip_suffix(PAX_SUFFIX).unwrap_or(p).trim().to_string())
            .unwrap_or_default();
        let note = parts.collect::<Vec<_>>().join(FIELD_SEPARATOR);
        Self {
            room,
            guest,
            pax,
            note,
        }
    }

    fn value(&self, field: &str) -> &str {
        match field {
            "room" => self.room.trim(),
            "guest" => self.guest.trim(),
            "pax" => self.pax.trim(),
            "note" => self.note.trim(),
            _ => "",
        }
    }

    /// Checks the required fields for `section` and returns the string that
    /// is stored in the day's list.
    pub fn normalize(&self, section: Section) -> Result<String> {
        let missing: Vec<&str> = section
            .required_fields()
            .iter()
            .copied()
            .filter(|f| self.value(f).is_empty())
            .collect();
        if !missing.is_empty() {
            return Err(Error::validation(format!(
                "{} requires {}",
                section,
                missing.join(", ")
            )));
        }

        match section {
            Section::Checkin => Ok(CheckinEntry::try_from(self)?.encode()),
            Section::Staying | Section::Checkout => Ok(self.room.trim().to_uppercase()),
        }
    }
}

/// A structured check-in. Stored as `ROOM / GUEST / N PAX[ / NOTE]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckinEntry {
    pub room: String,
    pub guest: String,
    pub pax: u32,
    pub note: Option<String>,
}

impl CheckinEntry {
    pub fn encode(&self) -> String {
        let mut text = format!(
            "{}{sep}{}{sep}{}{}",
            self.room.to_uppercase(),
            self.guest.to_uppercase(),
            self.pax,
            PAX_SUFFIX,
            sep = FIELD_SEPARATOR
        );
        if let Some(note) = self.note.as_deref().filter(|n| !n.is_empty()) {
            text.push_str(FIELD_SEPARATOR);
            text.push_str(&note.to_uppercase());
        }
        text
    }
}

impl TryFrom<&EntryFields> for CheckinEntry {
    type Error = Error;

    fn try_from(fields: &EntryFields) -> Result<Self> {
        let pax_str = fields.pax.trim();
        let pax = pax_str.parse::<u32>().map_err(|_| {
            Error::validation(format!("pax must be a whole number, got '{}'", pax_str))
        })?;
        let note = Some(fields.note.trim())
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        Ok(Self {
            room: fields.room.trim().to_string(),
            guest: fields.guest.trim().to_string(),
            pax,
            note,
        })
    }
}

/// First segment of a stored entry, which is the room for every section.
pub fn room_token(text: &str) -> &str {
    text.split(FIELD_SEPARATOR).next().unwrap_or(text)
}
