use leon::{ParseError, RenderError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid parameter name: {}", .0)]
    UnknownParameter(String),

    #[error("Missing required value for --{} parameter", .0)]
    MissingRequiredValue(String),

    #[error("{}", .0)]
    ValidationRejected(String),

    #[error(
        "Option --{} expects an array of values, but received \"{}\"; check to ensure the command has provided a valid default.",
        .name,
        .found
    )]
    InvalidArrayValue { name: String, found: String },

    #[error("Parameter `{}` is not in the format key=value", .0)]
    ParameterFormat(String),

    #[error("Found a non-unique parameter ID: `{}`", .0)]
    NonUniqueParameterId(String),

    #[error("Invalid ID: ID may not be empty")]
    EmptyId,

    #[error("Invalid ID `{}`: ID may not contain spaces", .0)]
    IdWithSpace(String),

    #[error("No parameters were found in the catalog YAML. Is `{}` empty?", .path)]
    EmptyCatalog { path: String },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error parsing question template: {}", .0)]
    Parse(#[from] ParseError),

    #[error("Error rendering question template: {}", .0)]
    Render(#[from] RenderError),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::ValidationRejected(message.into())
    }

    pub fn invalid_array_value(name: &str, found: &str) -> Self {
        Self::InvalidArrayValue {
            name: name.to_string(),
            found: found.to_string(),
        }
    }

    pub fn empty_catalog(path: String) -> Self {
        Self::EmptyCatalog { path }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
