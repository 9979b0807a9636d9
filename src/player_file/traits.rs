use anyhow::{anyhow, Error, Result};
use csv::StringRecord;

pub type PlayerFileRecord = StringRecord;

pub type PlayerId = String;

/// Number of leading columns the audit needs; narrower rows are skipped.
pub const MIN_FIELDS: usize = 5;

/// Column positions in the ATP player file. Country (5) and anything after it are ignored.
pub const ID: usize = 0;
pub const FIRST_NAME: usize = 1;
pub const LAST_NAME: usize = 2;
pub const HAND: usize = 3;
pub const BIRTHDATE: usize = 4;

pub trait FromPlayerRecord {
    fn new(record: &PlayerFileRecord) -> Result<Self>
    where
        Self: Sized;

    fn error(msg: &str, record: &PlayerFileRecord) -> Error {
        anyhow!("{}\nRecord: {:?}", msg, record)
    }
}
