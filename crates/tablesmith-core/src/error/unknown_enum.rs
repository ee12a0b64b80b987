use super::{Error, ErrorKind};

/// Error when an enum lookup misses the registry.
#[derive(Debug)]
pub(super) struct UnknownEnum {
    name: Box<str>,
}

impl std::error::Error for UnknownEnum {}

impl core::fmt::Display for UnknownEnum {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "enum `{}` is not registered", self.name)
    }
}

impl Error {
    pub fn unknown_enum(name: impl Into<String>) -> Error {
        Error::from(ErrorKind::UnknownEnum(UnknownEnum {
            name: name.into().into(),
        }))
    }

    pub fn is_unknown_enum(&self) -> bool {
        matches!(self.kind(), ErrorKind::UnknownEnum(_))
    }
}
