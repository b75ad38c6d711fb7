use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// The input path does not name a regular file.
    FileNotFound(PathBuf),
    /// The input file holds no bytes; C forbids a zero-length array.
    EmptyInput(PathBuf),
    /// Reading the input or writing one of the outputs failed.
    Io {
        path: PathBuf,
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::FileNotFound(path) => {
                write!(f, "There is no such file: [{}]!", path.display())
            }
            Error::EmptyInput(path) => {
                write!(f, "Input file is empty: [{}]", path.display())
            }
            Error::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
