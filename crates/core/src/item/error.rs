use thiserror::Error;

/// Client-side failures detected before the store is ever called.
///
/// The display strings are part of the wire contract: they become the
/// `errorMessage` of the 400 envelope.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Request malformed: body element missing.")]
    MissingBody,
    #[error("Request malformed: body is not valid JSON.")]
    MalformedBody,
    #[error("Request malformed: unsupported method {0}.")]
    UnsupportedMethod(String),
    #[error("Please provide the year of the movie.")]
    MissingYear,
    #[error("Please provide the title of the movie.")]
    MissingTitle,
    #[error("Please provide a valid numeric year for the movie.")]
    InvalidYear,
    #[error("Please provide the title of the movie as a string.")]
    InvalidTitle,
}
