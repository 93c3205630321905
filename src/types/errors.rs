use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("unsupported extension '{0}'")]
    UnsupportedType(String),
    #[error("zip-slip: entry '{0}' resolves outside target directory")]
    ZipSlip(String),
    #[error("archive error: {0}")]
    Archive(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("move failed: {0}")]
    Move(String),
}

impl From<std::io::Error> for InstallError {
    fn from(error: std::io::Error) -> Self {
        InstallError::Io(error.to_string())
    }
}

impl From<zip::result::ZipError> for InstallError {
    fn from(error: zip::result::ZipError) -> Self {
        InstallError::Archive(error.to_string())
    }
}

pub type InstallerResult<T> = Result<T, InstallError>;
