// Error types: typed errors for the purger, the translate operation and
// the DeepL client. The binary wraps these in `anyhow` at the top level.
// Purge errors render their I/O cause inline and do not chain it as a
// source, so a report prints it once.

use std::{io, path::PathBuf};

/// Errors raised while purging images from a folder.
#[derive(thiserror::Error, Debug)]
pub enum PurgeError {
    /// The folder could not be listed. Nothing was deleted.
    #[error("error reading directory '{path}': {error}")]
    DirectoryRead {
        /// The folder that could not be read.
        path: PathBuf,
        /// The underlying I/O error, rendered in the message.
        error: io::Error,
    },

    /// A single file could not be deleted.
    #[error("error deleting file {path}: {error}")]
    FileDelete {
        /// The file that was not deleted.
        path: PathBuf,
        /// The underlying I/O error, rendered in the message.
        error: io::Error,
    },
}

/// Errors raised by the `translate` operation.
#[derive(thiserror::Error, Debug)]
pub enum TranslateError {
    /// An argument was empty. Raised before the provider is called.
    #[error("Invalid {argument} input. Please provide a non-empty value.")]
    InvalidInput {
        /// Which argument was rejected: `text` or `target language`.
        argument: &'static str,
    },

    /// The provider rejected the call.
    #[error("Error translating text: {message}")]
    TranslationFailed {
        /// The provider's message.
        message: String,
    },
}

/// Errors raised by a translation provider.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// No API key was configured.
    #[error("environment variable {0} is not set")]
    MissingApiKey(&'static str),

    /// The API key cannot be sent as an HTTP header.
    #[error("API key contains characters that are not allowed in a header")]
    InvalidApiKey,

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response, or the body was unreadable.
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{message} (status {status})")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response.
        message: String,
    },

    /// The response body was not the expected JSON.
    #[error("failed to parse response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The server answered successfully but returned no translation.
    #[error("response contained no translations")]
    EmptyResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_read_report_names_cause_once() {
        let err = PurgeError::DirectoryRead {
            path: PathBuf::from("images"),
            error: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert!(std::error::Error::source(&err).is_none());

        let report = anyhow::Error::from(err);
        assert_eq!(report.chain().count(), 1);
        assert_eq!(
            report.to_string(),
            "error reading directory 'images': No such file or directory"
        );
    }

    #[test]
    fn test_file_delete_message() {
        let err = PurgeError::FileDelete {
            path: PathBuf::from("images/a.png"),
            error: io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
        };
        assert_eq!(
            err.to_string(),
            "error deleting file images/a.png: Permission denied"
        );
        assert!(std::error::Error::source(&err).is_none());
    }
}
