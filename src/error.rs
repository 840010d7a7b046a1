use thiserror::Error;

// ---------------------------------------------------------------------------
// Fatal conditions of a day-assembly run
// ---------------------------------------------------------------------------

/// Errors that abort an assembly run. Everything else (a single file that
/// fails to download or decode, a malformed table row) is recovered locally
/// by skipping the offending item.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssembleError {
    /// A time token did not split into 2 or 3 numeric fields.
    #[error("malformed time token '{0}'")]
    MalformedTime(String),

    /// Neither recognized filename timestamp pattern matched any file.
    #[error("no matching time format in any filename at {url}")]
    NoTimestampPattern { url: String },

    /// Nothing to assemble for the requested station/day.
    #[error("no files found for {0}")]
    NoFiles(String),

    /// Every listed file failed to decode.
    #[error("no valid spectrogram data decoded from {0}")]
    NoValidData(String),
}
