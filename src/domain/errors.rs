/// Panel text used when the service gives no usable reason
pub const GENERIC_FETCH_ERROR: &str =
    "Ocorreu um erro ao buscar os dados. Por favor, tente novamente.";

/// Simplified error system - one enum for every layer
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Input rejected before any request was made
    Validation(String),
    /// Request never produced a response (offline, CORS, DNS)
    Network(String),
    /// Service answered with a non-2xx status
    Http { status: u16, message: Option<String> },
    /// Body could not be read as JSON
    Decode(String),
    /// Export payload could not be produced
    Export(String),
    /// A browser API (DOM, Blob, URL) failed
    Browser(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            AppError::Network(msg) => write!(f, "Network Error: {}", msg),
            AppError::Http { status, message } => write!(
                f,
                "HTTP Error {}: {}",
                status,
                message.as_deref().unwrap_or("<no message>")
            ),
            AppError::Decode(msg) => write!(f, "Decode Error: {}", msg),
            AppError::Export(msg) => write!(f, "Export Error: {}", msg),
            AppError::Browser(msg) => write!(f, "Browser Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Text shown in the chart panel for a failed query.
    ///
    /// Only a non-blank `message` from the service is surfaced verbatim;
    /// everything else falls back to [`GENERIC_FETCH_ERROR`].
    pub fn user_message(&self) -> String {
        match self {
            AppError::Http { message: Some(msg), .. } if !msg.trim().is_empty() => msg.clone(),
            _ => GENERIC_FETCH_ERROR.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
