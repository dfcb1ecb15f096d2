use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),

    #[error("Row {row} has {found} values, but the first row has {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}
