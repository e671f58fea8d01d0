use std::fmt;

use crate::error::{Error, Result};
use crate::model::entry::EntryFields;

/// Entry fields that can be given on the command line as `key:value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Room,
    Guest,
    Pax,
    Note,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Room, Field::Guest, Field::Pax, Field::Note];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Room => "room",
            Field::Guest => "guest",
            Field::Pax => "pax",
            Field::Note => "note",
        }
    }

    /// Any unique prefix of a field name resolves to it: `g`, `gu` and
    /// `guest` all mean `Guest`.
    pub fn resolve(key: &str) -> Result<Field> {
        let key = key.to_lowercase();
        let matches: Vec<Field> = Self::ALL
            .iter()
            .copied()
            .filter(|f| f.name().starts_with(&key))
            .collect();

        match matches.as_slice() {
            [field] => Ok(*field),
            [] => Err(Error::validation(format!(
                "unknown field '{}' (expected room, guest, pax or note)",
                key
            ))),
            _ => Err(Error::validation(format!(
                "ambiguous field '{}' matches {:?}",
                key, matches
            ))),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Command-line words split into bare words and `key:value` fields.
#[derive(Debug, Default, PartialEq)]
pub struct FieldArgs {
    /// Bare words joined by spaces; they name the room.
    pub words: String,
    /// Fields in the order they were typed.
    pub fields: Vec<(Field, String)>,
}

// `guest:Ana` is a field, `10:30` is not.
fn split_field(arg: &str) -> Option<(&str, &str)> {
    let (key, value) = arg.split_once(':')?;
    let is_key = !key.is_empty() && key.chars().all(|c| c.is_ascii_alphabetic());
    is_key.then_some((key, value))
}

fn given_twice(field: Field) -> Error {
    Error::validation(format!("{} given more than once", field))
}

/// Splits the arguments and resolves every field key. A field may appear
/// once; bare words count as the room.
pub fn parse_args(args: &[String]) -> Result<FieldArgs> {
    let mut words = Vec::new();
    let mut fields: Vec<(Field, String)> = Vec::new();

    for arg in args {
        let Some((key, value)) = split_field(arg) else {
            words.push(arg.as_str());
            continue;
        };
        let field = Field::resolve(key)?;
        if fields.iter().any(|(f, _)| *f == field) {
            return Err(given_twice(field));
        }
        fields.push((field, value.to_string()));
    }

    let words = words.join(" ");
    if !words.is_empty() && fields.iter().any(|(f, _)| *f == Field::Room) {
        return Err(given_twice(Field::Room));
    }

    Ok(FieldArgs { words, fields })
}

/// Overlays the fields given on the command line onto `base`.
pub fn apply_args(base: EntryFields, args: &[String]) -> Result<EntryFields> {
    let parsed = parse_args(args)?;
    let mut fields = base;

    if !parsed.words.is_empty() {
        fields.room = parsed.words;
    }

    for (field, value) in parsed.fields {
        match field {
            Field::Room => fields.room = value,
            Field::Guest => fields.guest = value,
            Field::Pax => fields.pax = value,
            Field::Note => fields.note = value,
        }
    }
    Ok(fields)
}
