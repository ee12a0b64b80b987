use super::{Error, ErrorKind};

/// Error when the compile configuration fails validation.
#[derive(Debug)]
pub(super) struct ConfigInvalid {
    message: Box<str>,
}

impl std::error::Error for ConfigInvalid {}

impl core::fmt::Display for ConfigInvalid {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid config: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid configuration error.
    pub fn config_invalid(message: impl Into<String>) -> Error {
        Error::from(ErrorKind::ConfigInvalid(ConfigInvalid {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid configuration error.
    pub fn is_config_invalid(&self) -> bool {
        matches!(self.kind(), ErrorKind::ConfigInvalid(_))
    }
}
