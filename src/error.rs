use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{file}:{line} - Error during parsing: {kind}")]
    Parse {
        file: String,
        line: usize,
        kind: ParseErrorKind,
    },

    #[error("Module already registered: {0}")]
    DuplicateModule(String),

    #[error("Unknown module: {0}")]
    UnknownModule(String),

    #[error("Invalid module id: {0:?}")]
    InvalidModuleId(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("{0} already set")]
    DuplicateField(&'static str),

    #[error("wrong argument count or unexpected line ending after '{0}'")]
    ArgCount(String),

    #[error("unrecognized subdirective '{0}'")]
    UnrecognizedSubdirective(String),

    #[error("missing {0}")]
    MissingField(&'static str),

    #[error("unterminated quoted string")]
    UnterminatedQuote,

    #[error("unexpected EOF")]
    UnexpectedEof,
}

impl Error {
    /// The parse error kind, if this is a parse error.
    pub fn parse_kind(&self) -> Option<&ParseErrorKind> {
        match self {
            Error::Parse { kind, .. } => Some(kind),
            _ => None,
        }
    }
}
