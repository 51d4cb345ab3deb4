/// Who wrote a log line.
///
/// Role words are not validated by the grammar; anything alphabetic that is
/// not one of the known roles is kept as [`Role::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Foreman,
    Worker,
    Lorry,
    Ferry,
    Other(String),
}

impl Role {
    pub fn from_word(word: &str) -> Self {
        match word {
            "Foreman" => Role::Foreman,
            "Worker" => Role::Worker,
            "Lorry" => Role::Lorry,
            "Ferry" => Role::Ferry,
            other => Role::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Foreman => "Foreman",
            Role::Worker => "Worker",
            Role::Lorry => "Lorry",
            Role::Ferry => "Ferry",
            Role::Other(word) => word,
        }
    }
}

/// The mandatory first line of a log, written by the foreman once the input
/// file has been analysed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEvent {
    pub timestamp: i64,
    /// Not consumed by the statistics; kept so callers can cross-check totals.
    pub blocks_total: u64,
    pub resources_total: u64,
}

/// Every line after the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralEvent {
    pub timestamp: i64,
    pub role: Role,
    /// Thread id of the writer; `-1` for the foreman and the ferry.
    pub entity_id: i64,
    /// Free text, always ending in a period.
    pub message: String,
    pub duration: u64,
}
