use std::io;

use thiserror::Error;

use crate::domain::unit_content::UnitParseError;

/// Library-wide error type for cloud-init generation.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The cloud-init template asset could not be read or compiled.
    #[error("Failed to load template '{template}': {details}")]
    TemplateLoad { template: String, details: String },

    /// Rendering the compiled template failed.
    #[error("Failed to render template '{template}': {details}")]
    TemplateRender { template: String, details: String },

    /// A unit's content is not valid unit-file syntax.
    #[error("Could not deserialize content of unit '{unit}': {source}")]
    UnitContent {
        unit: String,
        #[source]
        source: UnitParseError,
    },

    /// The operating system config document could not be decoded.
    #[error("Failed to parse {what}: {details}")]
    InputParse { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::UnitContent { .. }
            | AppError::InputParse { .. }
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::TemplateLoad { .. } => io::ErrorKind::NotFound,
            AppError::TemplateRender { .. } => io::ErrorKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_content_error_names_the_unit() {
        let err = AppError::UnitContent {
            unit: "kubelet.service".to_string(),
            source: UnitParseError::OptionOutsideSection {
                line: 1,
                content: "ExecStart=/bin/true".to_string(),
            },
        };

        let message = err.to_string();
        assert!(message.contains("kubelet.service"));
        assert!(message.contains("line 1"));
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn template_load_maps_to_not_found() {
        let err = AppError::TemplateLoad {
            template: "cloud-init".to_string(),
            details: "missing".to_string(),
        };
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
