use std::path::PathBuf;

#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    DuplicateShortKey(String),
    DuplicateLongKey(String),
    Nameless(usize),
    UnknownOption(String),
    MissingArgument(String),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Format {
        path: PathBuf,
        line: usize,
        option: String,
    },
    RequiredOptionMissing(String),
    NotUnicode(String),
}

impl Error {
    /// Errors caused by the template set itself rather than by the input
    pub const fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::DuplicateShortKey(..) | Self::DuplicateLongKey(..) | Self::Nameless(..)
        )
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateShortKey(key) => write!(f, "duplicate short key found: {}", key),
            Self::DuplicateLongKey(key) => write!(f, "duplicate long key found: {}", key),
            Self::Nameless(index) => {
                write!(f, "template #{} has neither a short nor a long key", index)
            }
            Self::UnknownOption(key) => write!(f, "unknown option: {}", key),
            Self::MissingArgument(name) => write!(f, "option {} takes an argument", name),
            Self::Io { path, source } => write!(
                f,
                "unable to read configuration file {}: {}",
                path.display(),
                source
            ),
            Self::Format { path, line, option } => write!(
                f,
                "error reading configuration file {} (line {}): option {} takes an argument",
                path.display(),
                line,
                option
            ),
            Self::RequiredOptionMissing(name) => write!(f, "required option missing: {}", name),
            Self::NotUnicode(arg) => write!(f, "argument is not valid unicode: {}", arg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
