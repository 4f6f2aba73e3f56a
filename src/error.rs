use camino::Utf8PathBuf as PathBuf;

use crate::range::RangeError;

#[derive(thiserror::Error, Debug)]
pub enum GenerateError {
    #[error("The Unicode version could not be determined from '{file}'")]
    VersionNotFound { file: &'static str },
    #[error("The {table} width pattern did not match anything")]
    NoMatches { table: &'static str },
    #[error("Invalid entry '{line}'")]
    InvalidRange {
        line: String,
        #[source]
        source: RangeError,
    },
    #[error("Couldn't serialize table")]
    Serialize(#[from] serde_json::Error),
    #[error("The '{path}' file could not be written")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Fetch(#[from] anyhow::Error),
}
