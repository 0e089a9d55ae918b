use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationInvalidArgument,
    ValidationInvalidJson,

    IconAlreadyExists,
    IconNotFound,

    MetadataInvalidJson,
    MetadataInvalidValue,

    GitCommandFailed,

    InternalIoError,
    InternalJsonError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",
            ErrorCode::ValidationInvalidJson => "validation.invalid_json",

            ErrorCode::IconAlreadyExists => "icon.already_exists",
            ErrorCode::IconNotFound => "icon.not_found",

            ErrorCode::MetadataInvalidJson => "metadata.invalid_json",
            ErrorCode::MetadataInvalidValue => "metadata.invalid_value",

            ErrorCode::GitCommandFailed => "git.command_failed",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
        }
    }
}

/// Which half of an icon a file-level error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconFileKind {
    Artwork,
    Metadata,
}

impl IconFileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconFileKind::Artwork => "artwork",
            IconFileKind::Metadata => "metadata",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconFileDetails {
    pub kind: IconFileKind,
    pub path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataInvalidJsonDetails {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataInvalidValueDetails {
    pub path: String,
    pub key: String,
    pub problem: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalJsonErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
        id: Option<String>,
    ) -> Self {
        let problem = problem.into();
        let details = to_details(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.clone(),
            id,
        });

        Self::new(
            ErrorCode::ValidationInvalidArgument,
            format!("Invalid argument: {}", problem),
            details,
        )
    }

    pub fn validation_invalid_json(err: serde_json::Error, context: Option<String>) -> Self {
        let details = serde_json::json!({
            "error": err.to_string(),
            "context": context,
        });

        Self::new(ErrorCode::ValidationInvalidJson, "Invalid JSON", details)
    }

    /// Rename target is already taken.
    pub fn icon_already_exists(kind: IconFileKind, path: impl Into<String>) -> Self {
        let path = path.into();
        let message = format!("New {} file already exists: {}", kind.as_str(), path);
        Self::new(
            ErrorCode::IconAlreadyExists,
            message,
            to_details(IconFileDetails { kind, path }),
        )
        .with_hint("Pick a different new name, or remove the existing icon first")
    }

    /// Rename source is missing.
    pub fn icon_not_found(kind: IconFileKind, path: impl Into<String>) -> Self {
        let path = path.into();
        let message = format!("Old {} file does not exist: {}", kind.as_str(), path);
        Self::new(
            ErrorCode::IconNotFound,
            message,
            to_details(IconFileDetails { kind, path }),
        )
        .with_hint("Run 'iconforge list' to see available icons")
    }

    pub fn metadata_invalid_json(path: impl Into<String>, error: impl Into<String>) -> Self {
        let path = path.into();
        let message = format!("Metadata is not a valid JSON object: {}", path);
        Self::new(
            ErrorCode::MetadataInvalidJson,
            message,
            to_details(MetadataInvalidJsonDetails {
                path,
                error: error.into(),
            }),
        )
    }

    pub fn metadata_invalid_value(
        path: impl Into<String>,
        key: impl Into<String>,
        problem: impl Into<String>,
    ) -> Self {
        let path = path.into();
        let key = key.into();
        let message = format!("Invalid '{}' in metadata {}", key, path);
        Self::new(
            ErrorCode::MetadataInvalidValue,
            message,
            to_details(MetadataInvalidValueDetails {
                path,
                key,
                problem: problem.into(),
            }),
        )
    }

    pub fn git_command_failed(message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::GitCommandFailed,
            message,
            Value::Object(serde_json::Map::new()),
        )
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalIoErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalJsonErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_exists_names_kind_and_path() {
        let err = Error::icon_already_exists(IconFileKind::Artwork, "icons/b.svg");
        assert_eq!(err.code.as_str(), "icon.already_exists");
        assert!(err.message.contains("artwork"));
        assert!(err.message.contains("icons/b.svg"));
        assert_eq!(err.details["kind"], "artwork");
        assert_eq!(err.details["path"], "icons/b.svg");
        assert_eq!(err.hints.len(), 1);
    }

    #[test]
    fn not_found_serializes_metadata_kind() {
        let err = Error::icon_not_found(IconFileKind::Metadata, "icons/a.json");
        assert_eq!(err.code, ErrorCode::IconNotFound);
        assert_eq!(err.details["kind"], "metadata");
    }

    #[test]
    fn invalid_argument_omits_missing_id() {
        let err = Error::validation_invalid_argument("new_name", "must not be empty", None);
        assert!(err.details.get("id").is_none());
        assert_eq!(err.details["field"], "new_name");
    }
}
