/// The client-fault status carried by a [`DecodeError`].
pub const BAD_REQUEST: u16 = 400;

/// Errors raised while building a [`Layer`](crate::Layer).
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// The path pattern could not be translated.
    #[error("{msg}: pattern = {pattern:?}")]
    Syntax { pattern: String, msg: &'static str },

    /// The native engine rejected the generated source.
    #[error(transparent)]
    Native(#[from] fancy_regex::Error),

    /// The safe-linear engine rejected the source, usually because of look-around.
    #[error(transparent)]
    SafeLinear(#[from] regex::Error),

    /// Every capture group needs exactly one key.
    #[error("pattern has {groups} capture groups but {keys} keys")]
    GroupMismatch { groups: usize, keys: usize },
}

impl CompileError {
    pub(crate) fn syntax(pattern: &str, msg: &'static str) -> Self {
        Self::Syntax {
            pattern: pattern.to_owned(),
            msg,
        }
    }
}

/// A captured segment that is not valid percent-encoded UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Failed to decode param '{value}'")]
pub struct DecodeError {
    value: String,
}

impl DecodeError {
    pub(crate) fn new(value: &str) -> Self {
        Self {
            value: value.to_owned(),
        }
    }

    /// The raw value that failed to decode.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn status(&self) -> u16 {
        BAD_REQUEST
    }

    #[cfg(feature = "http-status")]
    pub fn status_code(&self) -> http::StatusCode {
        http::StatusCode::BAD_REQUEST
    }
}

/// A match attempt that failed for a reason other than "no match".
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Raised by the native engine, e.g. when its backtrack limit is hit.
    #[error(transparent)]
    Engine(#[from] fancy_regex::Error),
}

impl MatchError {
    /// `Some(400)` for client faults, `None` for everything else.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Decode(e) => Some(e.status()),
            Self::Engine(_) => None,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status() == Some(BAD_REQUEST)
    }
}
