/// Request failures, kept cloneable so UI state can hold them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetError {
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("backend unavailable: {0}")]
    Runtime(String),
}

impl From<reqwest::Error> for NetError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            NetError::Status(status.as_u16())
        } else if err.is_decode() {
            NetError::Decode(err.to_string())
        } else {
            NetError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for NetError {
    fn from(err: serde_json::Error) -> Self {
        NetError::Decode(err.to_string())
    }
}
