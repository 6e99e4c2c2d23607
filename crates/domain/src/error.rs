#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no data source")]
    NoDataSource,
    #[error("corrupt record: {0}")]
    CorruptRecord(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PolicyError {
    #[error("invalid policy document: {0}")]
    Parse(String),
    #[error("{field} must be in the range {min} to {max}")]
    OutOfRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
    #[error("{lower} must not exceed {upper}")]
    Inverted {
        lower: &'static str,
        upper: &'static str,
    },
}

impl From<serde_json::Error> for PolicyError {
    fn from(value: serde_json::Error) -> Self {
        PolicyError::Parse(value.to_string())
    }
}
