use primer_core::Role;

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("unknown command `{0}` (h for help)")]
    UnknownCommand(String),
    #[error("nothing is numbered [{0}] on this screen")]
    NoSuchRegion(usize),
    #[error("[{0}] is disabled")]
    Disabled(usize),
    #[error("[{0}] is a button; activate it with `{0}`")]
    NotATextField(usize),
    #[error("[{0}] is a text field; type with `{0} <text>`")]
    NotAButton(usize),
    #[error("no {role:?} labelled `{label}` on this screen")]
    NotFound { role: Role, label: String },
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
