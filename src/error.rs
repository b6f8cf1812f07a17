use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
}

/// Failure of a single accounts API operation.
///
/// Every operation funnels its outcome through one normalizer, so callers can
/// branch on the variant instead of matching message text.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection, DNS, timeout or request construction failure.
    #[error("{source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// Error status with an `error_message` in the body. Displays the
    /// server's message verbatim.
    #[error("{message}")]
    Api {
        status: u16,
        endpoint: String,
        message: String,
    },
    /// Error status whose body is not an `error_message` envelope.
    #[error("HTTP {status}: {raw_body}")]
    DecodeFailure {
        status: u16,
        endpoint: String,
        raw_body: String,
    },
    /// Success status with a body that does not match the expected envelope.
    #[error("Failed to parse response from {endpoint}: {message}")]
    InvalidResponse {
        status: u16,
        endpoint: String,
        message: String,
    },
    #[error("Failed to encode request for {endpoint}: {message}")]
    Serialization { endpoint: String, message: String },
    /// Rejected before sending, e.g. an account id that cannot name a resource.
    #[error("Invalid request for {endpoint}: {message}")]
    InvalidRequest { endpoint: String, message: String },
}

impl ApiError {
    /// HTTP status of the failed call, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            ApiError::Api { status, .. }
            | ApiError::DecodeFailure { status, .. }
            | ApiError::InvalidResponse { status, .. } => Some(*status),
            ApiError::Serialization { .. } | ApiError::InvalidRequest { .. } => None,
        }
    }

    pub fn endpoint(&self) -> &str {
        match self {
            ApiError::Transport { endpoint, .. }
            | ApiError::Api { endpoint, .. }
            | ApiError::DecodeFailure { endpoint, .. }
            | ApiError::InvalidResponse { endpoint, .. }
            | ApiError::Serialization { endpoint, .. }
            | ApiError::InvalidRequest { endpoint, .. } => endpoint,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ApiError::Api { status: 404, .. } | ApiError::DecodeFailure { status: 404, .. }
        )
    }

    /// Version mismatch on delete.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            ApiError::Api { status: 409, .. } | ApiError::DecodeFailure { status: 409, .. }
        )
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Transport { source, .. } if source.is_timeout())
    }
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Output formatting failed: {0}")]
    Output(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value for '{field}': {value}: {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "critical",
            ErrorSeverity::High => "error",
            ErrorSeverity::Medium => "error",
            ErrorSeverity::Low => "warning",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Api(api_error) => match api_error {
                ApiError::Transport { .. } => ErrorSeverity::High,
                ApiError::Api { status, .. } | ApiError::DecodeFailure { status, .. }
                    if *status >= 500 =>
                {
                    ErrorSeverity::High
                }
                ApiError::InvalidResponse { .. } | ApiError::Serialization { .. } => {
                    ErrorSeverity::Critical
                }
                ApiError::InvalidRequest { .. } => ErrorSeverity::Low,
                _ => ErrorSeverity::Medium,
            },
            AppError::Cli(_) => ErrorSeverity::Low,
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(_) => ErrorSeverity::Medium,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Api(ApiError::Transport { .. }) => Some(
                "Check that the accounts API is reachable, or point to it with --url / FORM3_API_URL"
                    .to_string(),
            ),
            AppError::Api(err) if err.is_not_found() => {
                Some("'form3-accounts accounts list' to see existing accounts".to_string())
            }
            AppError::Api(err) if err.is_conflict() => {
                Some("Fetch the account again and retry with its current version".to_string())
            }
            AppError::Storage(StorageError::ConfigParseError { .. }) => {
                Some("'form3-accounts config set --url <url>' to rewrite the configuration".to_string())
            }
            _ => None,
        }
    }
}
