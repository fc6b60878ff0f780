//! Participant roster loading
//!
//! Turns an uploaded CSV export (header row `name,email,mobile`) into the
//! participant list used by the lucky draw. Rows missing any of the three
//! required fields are dropped; only the count is logged.

mod encoding;

use csv::{ReaderBuilder, StringRecord};
use rand::Rng;

pub use encoding::decode_upload;

/// Columns every usable row must carry (case-sensitive)
pub const REQUIRED_COLUMNS: [&str; 3] = ["name", "email", "mobile"];

/// Optional column supplying stable participant ids
const ID_COLUMN: &str = "_id";

/// A single draw participant, immutable once loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
}

/// Why an upload produced no participants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// No data rows at all
    Empty,
    /// Header is missing a required column
    MissingHeader(&'static str),
    /// Rows exist but none has all required fields
    NoValidParticipants,
    /// The CSV reader rejected the file
    Malformed(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Empty => write!(f, "CSV file is empty"),
            LoadError::MissingHeader(column) => {
                write!(f, "CSV header is missing the '{}' column", column)
            }
            LoadError::NoValidParticipants => write!(f, "No valid participants found in CSV"),
            LoadError::Malformed(e) => write!(f, "Failed to parse CSV file: {}", e),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        LoadError::Malformed(e.to_string())
    }
}

/// Load participants from raw upload bytes
pub fn load_participants(bytes: &[u8]) -> Result<Vec<Participant>, LoadError> {
    let content = decode_upload(bytes);
    parse_participants(&content)
}

/// Parse participants from decoded CSV text
pub fn parse_participants(content: &str) -> Result<Vec<Participant>, LoadError> {
    // Rows may be shorter or longer than the header; missing cells count as empty
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let header: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let rows = reader
        .records()
        .collect::<Result<Vec<StringRecord>, _>>()?;
    if rows.is_empty() {
        return Err(LoadError::Empty);
    }

    let column = |name: &str| header.iter().position(|h| h == name);
    let mut indices = [0usize; 3];
    for (slot, name) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = column(name).ok_or(LoadError::MissingHeader(name))?;
    }
    let [name_idx, email_idx, mobile_idx] = indices;
    let id_idx = column(ID_COLUMN);

    let mut rng = rand::rng();
    let participants: Vec<Participant> = rows
        .iter()
        .filter_map(|row| {
            let field = |idx: usize| {
                row.get(idx)
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            };
            let name = field(name_idx)?;
            let email = field(email_idx)?;
            let mobile = field(mobile_idx)?;
            let id = id_idx
                .and_then(field)
                .unwrap_or_else(|| format!("{:032x}", rng.random::<u128>()));
            Some(Participant {
                id,
                name,
                email,
                mobile,
            })
        })
        .collect();

    let dropped = rows.len() - participants.len();
    if dropped > 0 {
        tracing::info!(
            "Dropped {} incomplete row(s) out of {} from participant upload",
            dropped,
            rows.len()
        );
    }

    if participants.is_empty() {
        return Err(LoadError::NoValidParticipants);
    }

    tracing::info!("Loaded {} participants", participants.len());
    Ok(participants)
}
