use thiserror::Error;

/// Failures that abort a seed run.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("lookup failed ({what})")]
    Lookup {
        what: String,
        #[source]
        source: rusqlite::Error,
    },
    #[error("write failed ({what})")]
    Write {
        what: String,
        #[source]
        source: rusqlite::Error,
    },
    #[error("constraint violation ({what})")]
    ConstraintViolation {
        what: String,
        #[source]
        source: rusqlite::Error,
    },
    #[error("category \"{category}\" not found for user {user_id}")]
    ReferenceNotFound { category: String, user_id: String },
    #[error("invalid fixture: {0}")]
    InvalidFixture(String),
    #[error("password hashing failed")]
    Hash(#[from] bcrypt::BcryptError),
}

impl SeedError {
    pub fn lookup(what: impl Into<String>, source: rusqlite::Error) -> Self {
        SeedError::Lookup {
            what: what.into(),
            source,
        }
    }

    /// Classify a failed write, separating constraint rejections from I/O failures.
    pub fn write(what: impl Into<String>, source: rusqlite::Error) -> Self {
        let what = what.into();
        match &source {
            rusqlite::Error::SqliteFailure(err, _)
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                SeedError::ConstraintViolation { what, source }
            }
            _ => SeedError::Write { what, source },
        }
    }
}

/// Invalid environment configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got \"{value}\"")]
    InvalidValue {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}
