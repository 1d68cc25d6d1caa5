use std::path::PathBuf;

use thiserror::Error;

/// Why a single capability string was not turned into a grant.
///
/// Rejections are never fatal: the offending string is reported and skipped,
/// and the rest of the capability set is still evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("wildcards are not allowed")]
    Wildcard,

    #[error("format must be '{prefix}MATERIAL/ENTITY-TYPE.NUMBER' (found {found} segments)")]
    WrongSegmentCount { prefix: String, found: usize },

    #[error("the last part MUST be a number")]
    NonNumericLimit,

    #[error("the last part is not a valid limit")]
    LimitOutOfRange,

    #[error("{key} is not a valid material or entity type")]
    UnknownResource { key: String },

    #[error("entity type {key} is not supported")]
    UnsupportedEntity { key: String },
}

/// A capability string together with the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("capability '{raw}' rejected: {reason}")]
pub struct Rejection {
    pub raw: String,
    pub reason: RejectReason,
}

impl Rejection {
    pub fn new(raw: impl Into<String>, reason: RejectReason) -> Self {
        Self {
            raw: raw.into(),
            reason,
        }
    }
}

/// Errors from override store adapters (used by the port in islimits-core).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced by the lifecycle controller.
///
/// Only store failures escape a handler; everything else is either a skipped
/// capability or a skipped recompute.
#[derive(Debug, Error)]
pub enum LimitsError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors loading configuration or scenario files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_resource_display() {
        let err = RejectReason::UnknownResource {
            key: "BANANA".to_string(),
        };
        assert_eq!(err.to_string(), "BANANA is not a valid material or entity type");
    }

    #[test]
    fn test_segment_count_display_names_format() {
        let err = RejectReason::WrongSegmentCount {
            prefix: "bskyblock.island.limit.".to_string(),
            found: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("bskyblock.island.limit.MATERIAL/ENTITY-TYPE.NUMBER"));
        assert!(msg.contains("4 segments"));
    }

    #[test]
    fn test_rejection_display_includes_raw() {
        let rejection = Rejection::new("bskyblock.island.limit.*", RejectReason::Wildcard);
        assert_eq!(
            rejection.to_string(),
            "capability 'bskyblock.island.limit.*' rejected: wildcards are not allowed"
        );
    }

    #[test]
    fn test_limits_error_is_transparent() {
        let err = LimitsError::from(StoreError::Unavailable("offline".to_string()));
        assert_eq!(err.to_string(), "store unavailable: offline");
    }
}
