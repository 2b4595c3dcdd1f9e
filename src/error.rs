pub type Result<T> = core::result::Result<T, Error>;

use std::io::Error as IOError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that end the whole run, or that callers report without failing it.
#[derive(Error, Debug)]
pub enum Error {
    #[error("'{}' is neither a file nor a directory.", .0.display())]
    InvalidRootPath(PathBuf),

    #[error("Error saving link to file '{}': {source}", .path.display())]
    SidecarWrite { path: PathBuf, source: IOError },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("io error: `{0}`")]
    IOError(#[from] IOError),
}

/// Failure of a single file. The run reports it and moves on.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("File '{}' does not exist.", .0.display())]
    FileNotFound(PathBuf),

    #[error("File '{}' is empty.", .0.display())]
    EmptyFile(PathBuf),

    #[error("Upload failed with status code: {status}\nResponse: {body}")]
    Rejected { status: u16, body: String },

    #[error("Error during upload: {0}")]
    Io(String),

    #[error("Malformed upload response: {0}")]
    MalformedResponse(String),
}

impl From<IOError> for UploadError {
    fn from(err: IOError) -> Self {
        UploadError::Io(err.to_string())
    }
}

impl From<reqwest::Error> for UploadError {
    fn from(err: reqwest::Error) -> Self {
        UploadError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_message_carries_status_and_body() {
        let err = UploadError::Rejected {
            status: 500,
            body: "server error".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("server error"));
    }

    #[test]
    fn io_errors_become_upload_io() {
        let err: UploadError = IOError::new(std::io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, UploadError::Io(ref m) if m.contains("pipe closed")));
    }
}
