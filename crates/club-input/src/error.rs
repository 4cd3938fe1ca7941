use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    /// A header or event line failed validation.  `Display` is the raw line
    /// exactly as it appeared in the file.
    #[error("{line}")]
    Malformed { line: String, number: usize },

    /// The file ended before all three header lines were read.
    #[error("day file ends inside the configuration header")]
    MissingConfig,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type InputResult<T> = Result<T, InputError>;
