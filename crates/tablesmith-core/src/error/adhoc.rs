use super::{Error, ErrorKind};

/// Free-form error raised through the `err!` and `bail!` macros.
#[derive(Debug)]
pub(super) struct AdhocError {
    message: Box<str>,
}

impl std::error::Error for AdhocError {}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates an ad-hoc error from format arguments.
    ///
    /// Hooks use this (through `err!`) to reject a model without defining an
    /// error type of their own.
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        let message = match args.as_str() {
            Some(message) => message.into(),
            None => args.to_string().into(),
        };
        Error::from(ErrorKind::Adhoc(AdhocError { message }))
    }

    /// Returns `true` if this error was created through `err!` or `bail!`.
    pub fn is_adhoc(&self) -> bool {
        matches!(self.kind(), ErrorKind::Adhoc(_))
    }
}
