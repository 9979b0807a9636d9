use arrayvec::ArrayVec;
use itertools::Itertools;
use serde::{Serialize, Serializer};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::player_file::parser::PlayerRecord;
use crate::player_file::traits::PlayerId;

/// Upstream marker for an unknown playing hand.
pub const UNKNOWN_HAND: &str = "U";
/// Upstream marker for an unknown date of birth.
pub const UNKNOWN_BIRTHDATE: &str = "00000000";

/// Declaration order is the order labels appear in the report.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Ord, PartialOrd, Hash, Display, EnumIter)]
pub enum MissingField {
    Hand,
    Birthdate,
}

impl MissingField {
    pub fn is_missing(self, record: &PlayerRecord) -> bool {
        match self {
            Self::Hand => is_blank_or(&record.hand, UNKNOWN_HAND),
            Self::Birthdate => is_blank_or(&record.birthdate, UNKNOWN_BIRTHDATE),
        }
    }
}

fn is_blank_or(value: &str, sentinel: &str) -> bool {
    value.is_empty() || value == sentinel
}

pub type MissingFields = ArrayVec<MissingField, 2>;

pub fn missing_fields(record: &PlayerRecord) -> MissingFields {
    MissingField::iter()
        .filter(|field| field.is_missing(record))
        .collect()
}

fn join_labels<S: Serializer>(fields: &MissingFields, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&fields.iter().join(", "))
}

#[derive(Debug, Eq, PartialEq, Clone, Serialize)]
pub struct MissingFieldReport {
    pub player_id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    #[serde(serialize_with = "join_labels")]
    pub missing_fields: MissingFields,
}

impl MissingFieldReport {
    /// `None` when the record has everything the audit checks for.
    pub fn new(record: &PlayerRecord) -> Option<Self> {
        let missing_fields = missing_fields(record);
        if missing_fields.is_empty() {
            return None;
        }
        Some(Self {
            player_id: record.id.clone(),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            missing_fields,
        })
    }

    pub fn labels(&self) -> String {
        self.missing_fields.iter().join(", ")
    }
}
