use quarter_core::core::StateError;
use quarter_core::score::DecodeError;
use quarter_games::title::UnknownTitle;

/// Everything that can stop a `quarter` command.
#[derive(Debug)]
pub enum CliError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Json(serde_json::Error),
    UnknownTitle(UnknownTitle),
    /// A trace frame is malformed.
    Trace { frame: usize, reason: String },
    /// A trace frame holds a score the title cannot decode.
    Decode { frame: usize, source: DecodeError },
    State(StateError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Toml(e) => write!(f, "invalid TOML: {e}"),
            Self::Json(e) => write!(f, "invalid JSON: {e}"),
            Self::UnknownTitle(e) => write!(f, "{e}"),
            Self::Trace { frame, reason } => write!(f, "trace frame {frame}: {reason}"),
            Self::Decode { frame, source } => write!(f, "trace frame {frame}: {source}"),
            Self::State(e) => write!(f, "checkpoint: {e}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for CliError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<UnknownTitle> for CliError {
    fn from(e: UnknownTitle) -> Self {
        Self::UnknownTitle(e)
    }
}

impl From<StateError> for CliError {
    fn from(e: StateError) -> Self {
        Self::State(e)
    }
}
