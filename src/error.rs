use thiserror::Error;

/// Errors surfaced by the data layer.
///
/// Validation failures are raised before any SQL is issued. Referential
/// integrity (dangling foreign keys, NOT NULL violations) is enforced by
/// SQLite and comes back untouched as [`Error::Sqlite`].
#[derive(Debug, Error)]
pub enum Error {
    /// A power description was empty or shorter than 20 characters.
    #[error("Description must be present and at least 20 characters long.")]
    InvalidDescription,

    /// A hero-power strength was outside the allowed set.
    #[error("Strength must be one of the following: 'Strong', 'Weak', 'Average'.")]
    InvalidStrength,

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// No home directory to place the default database in.
    #[error("could not determine a data directory for the database")]
    NoHomeDir,
}

pub type Result<T> = std::result::Result<T, Error>;
