//! Error types for the StatsBomb data crate.

use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, DataError>;

#[derive(Error, Debug)]
pub enum DataError {
    /// A raw scalar did not match the shape its codec expects.
    #[error("malformed scalar {value:?}: expected {expected}")]
    MalformedScalar {
        value: String,
        expected: &'static str,
    },

    /// A non-defaulted field was absent (or null) in the wire input.
    #[error("missing required field {field:?}")]
    MissingRequiredField { field: String },

    /// Encode was attempted on a record with no defined encode rule.
    #[error("no encode rule defined for {kind}")]
    UnsupportedEncoding { kind: &'static str },

    /// An event populated more than one metadata variant.
    #[error("event {event_id} populates conflicting metadata: {populated:?}")]
    MetadataConflict {
        event_id: Uuid,
        populated: Vec<&'static str>,
    },

    /// A local-store read addressed a key with no existing entry.
    ///
    /// Recoverable: this is what drives the cache-miss fallback in the
    /// caching repository proxy.
    #[error("no local entry for {key}")]
    NotFound { key: String },

    /// A remote read came back with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Transport { url: String, status: u16 },

    /// Decoding a resource payload failed.
    #[error("failed to decode {resource} payload: {source}")]
    Decode {
        resource: &'static str,
        #[source]
        source: Box<DataError>,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary serialization failed: {0}")]
    Binary(#[from] bincode::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DataError {
    /// Wrap a decode failure with the resource it belongs to.
    pub fn for_resource(self, resource: &'static str) -> Self {
        match self {
            // Adapter-level failures already identify themselves.
            e @ (DataError::NotFound { .. }
            | DataError::Transport { .. }
            | DataError::Http(_)
            | DataError::Io(_)) => e,
            other => DataError::Decode {
                resource,
                source: Box::new(other),
            },
        }
    }
}
