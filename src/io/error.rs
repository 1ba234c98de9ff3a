use derive_more::Display;

#[derive(Debug, Display)]
pub enum Error {
    #[display(fmt = "{}", _0)]
    Io(std::io::Error),
    #[display(fmt = "parse error at line {}: {}: {:?}", line, reason, content)]
    Parse {
        line: usize,
        reason: String,
        content: String,
    },
}

impl Error {
    pub(crate) fn parse(line: usize, reason: &str, content: &str) -> Self {
        Error::Parse {
            line,
            reason: String::from(reason),
            content: String::from(content),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Parse { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
