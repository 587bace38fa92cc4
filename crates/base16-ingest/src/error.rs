use std::path::PathBuf;

use base16_model::{Base, ColorError};
use thiserror::Error;

/// Errors raised while loading a scheme. Any of these blocks derivation.
#[derive(Debug, Error)]
pub enum SchemeError {
    #[error("scheme file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read scheme file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scheme YAML in {path}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("scheme {path} is not a key/value mapping")]
    NotAMapping { path: PathBuf },

    #[error("scheme {path} is missing required colors: {}", join_slots(.missing))]
    MissingColors { path: PathBuf, missing: Vec<Base> },

    #[error("scheme {path} has an invalid color for {slot}")]
    InvalidColor {
        path: PathBuf,
        slot: Base,
        #[source]
        source: ColorError,
    },
}

impl SchemeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// True for errors about scheme contents rather than file access.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NotAMapping { .. } | Self::MissingColors { .. } | Self::InvalidColor { .. }
        )
    }
}

fn join_slots(slots: &[Base]) -> String {
    slots
        .iter()
        .map(Base::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, SchemeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_colors_lists_every_slot() {
        let err = SchemeError::MissingColors {
            path: PathBuf::from("ocean.yaml"),
            missing: vec![Base::Base0E, Base::Base0F],
        };
        assert_eq!(
            err.to_string(),
            "scheme ocean.yaml is missing required colors: base0E, base0F"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn not_found_is_split_from_other_io() {
        let err = SchemeError::io(
            "gone.yaml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, SchemeError::NotFound { .. }));
        assert_eq!(err.to_string(), "scheme file not found: gone.yaml");

        let err = SchemeError::io(
            "locked.yaml",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, SchemeError::Io { .. }));
        assert!(!err.is_validation());
    }
}
