use std::{error::Error, fmt, io, string::FromUtf8Error};

/// Everything that can go wrong between encoding the inputs and decoding
/// the kernel's answer. None of these cross the public API; they are
/// logged and then collapsed to `false`/`None`.
#[derive(Debug)]
pub enum XattrError {
    InteriorNul { what: &'static str },
    Os { call: &'static str, source: io::Error },
    SizeOutOfRange { size: u64 },
    Alloc { size: usize },
    SizeRace { call: &'static str, reported: u64, capacity: usize },
    InvalidUtf8(FromUtf8Error),
}

impl XattrError {
    /// The errno behind an OS failure, if this is one.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            XattrError::Os { source, .. } => source.raw_os_error(),
            _ => None,
        }
    }
}

impl fmt::Display for XattrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XattrError::InteriorNul { what } => {
                write!(f, "{what} contains an interior NUL byte")
            }
            XattrError::Os { call, source } => write!(f, "{call} failed: {source}"),
            XattrError::SizeOutOfRange { size } => {
                write!(f, "reported size {size} does not fit in usize")
            }
            XattrError::Alloc { size } => write!(f, "could not allocate {size} bytes"),
            XattrError::SizeRace {
                call,
                reported,
                capacity,
            } => write!(
                f,
                "{call} reported {reported} bytes for a {capacity} byte buffer"
            ),
            XattrError::InvalidUtf8(err) => write!(f, "payload is not valid UTF-8: {err}"),
        }
    }
}

impl Error for XattrError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            XattrError::Os { source, .. } => Some(source),
            XattrError::InvalidUtf8(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FromUtf8Error> for XattrError {
    fn from(err: FromUtf8Error) -> Self {
        XattrError::InvalidUtf8(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_error_keeps_errno() {
        let err = XattrError::Os {
            call: "getxattr",
            source: io::Error::from_raw_os_error(libc::ENODATA),
        };
        assert_eq!(err.raw_os_error(), Some(libc::ENODATA));
        assert!(err.to_string().starts_with("getxattr failed"));
        assert!(err.source().is_some());
    }

    #[test]
    fn race_message_names_both_sizes() {
        let err = XattrError::SizeRace {
            call: "lgetxattr",
            reported: 12,
            capacity: 4,
        };
        assert_eq!(
            err.to_string(),
            "lgetxattr reported 12 bytes for a 4 byte buffer"
        );
        assert_eq!(err.raw_os_error(), None);
    }
}
