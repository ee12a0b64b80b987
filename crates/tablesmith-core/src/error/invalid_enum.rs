use super::{Error, ErrorKind};

/// Error when an enum cannot be compiled into its backing table.
///
/// This occurs when:
/// - The enum has no name
/// - The enum's entry type has no storage type
/// - An entry's value does not fit the entry type
#[derive(Debug)]
pub(super) struct InvalidEnum {
    name: Box<str>,
    message: Box<str>,
}

impl std::error::Error for InvalidEnum {}

impl core::fmt::Display for InvalidEnum {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid enum `{}`: {}", self.name, self.message)
    }
}

impl Error {
    pub fn invalid_enum(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(ErrorKind::InvalidEnum(InvalidEnum {
            name: name.into().into(),
            message: message.into().into(),
        }))
    }

    pub fn is_invalid_enum(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidEnum(_))
    }
}
