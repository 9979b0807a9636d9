use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{bail, Context, Error, Result};
use csv::{Reader, ReaderBuilder, StringRecord};
use tracing::debug;

use crate::player_file::traits::{
    FromPlayerRecord, PlayerFileRecord, PlayerId, BIRTHDATE, FIRST_NAME, HAND, ID, LAST_NAME,
    MIN_FIELDS,
};

/// The leading biographical columns of one line of the player file.
/// Values are kept exactly as read; no trimming or case folding.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub hand: String,
    pub birthdate: String,
}

impl FromPlayerRecord for PlayerRecord {
    fn new(record: &PlayerFileRecord) -> Result<Self> {
        if record.len() < MIN_FIELDS {
            return Err(Self::error("Too few fields for a player record", record));
        }
        let field = |i: usize| {
            record
                .get(i)
                .map(String::from)
                .ok_or_else(|| Self::error("Missing field", record))
        };
        Ok(Self {
            id: field(ID)?,
            first_name: field(FIRST_NAME)?,
            last_name: field(LAST_NAME)?,
            hand: field(HAND)?,
            birthdate: field(BIRTHDATE)?,
        })
    }
}

pub type PlayerFileReader = PlayerReader<BufReader<File>>;

/// Iterates the headerless player file in order, skipping rows too narrow to audit.
pub struct PlayerReader<R> {
    reader: Reader<R>,
    current_record: StringRecord,
}

impl<R: Read> PlayerReader<R> {
    pub fn new(rdr: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(rdr);
        Self {
            reader,
            current_record: StringRecord::new(),
        }
    }
}

impl<R: Read> Iterator for PlayerReader<R> {
    type Item = Result<PlayerRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.reader.read_record(&mut self.current_record) {
                Ok(false) => return None,
                Ok(true) if self.current_record.len() < MIN_FIELDS => {
                    let line = self.current_record.position().map(csv::Position::line);
                    debug!(
                        "Skipping line {:?} with {} fields",
                        line,
                        self.current_record.len()
                    );
                }
                Ok(true) => return Some(PlayerRecord::new(&self.current_record)),
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

impl TryFrom<&Path> for PlayerFileReader {
    type Error = Error;

    fn try_from(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open player file {}", path.display()))?;
        // Directories open fine on Linux and only fail on the first read.
        let metadata = file
            .metadata()
            .with_context(|| format!("Failed to stat player file {}", path.display()))?;
        if !metadata.is_file() {
            bail!("Player file {} is not a regular file", path.display());
        }
        Ok(Self::new(BufReader::new(file)))
    }
}
