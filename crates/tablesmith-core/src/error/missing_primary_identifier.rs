use super::{Error, ErrorKind};

/// Error when a model (the one being compiled, or a relation target) has no
/// identifier named `primary`.
#[derive(Debug)]
pub(super) struct MissingPrimaryIdentifier {
    model: Box<str>,
}

impl std::error::Error for MissingPrimaryIdentifier {}

impl core::fmt::Display for MissingPrimaryIdentifier {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no primary identifier set for model `{}`", self.model)
    }
}

impl Error {
    pub fn missing_primary_identifier(model: impl Into<String>) -> Error {
        Error::from(ErrorKind::MissingPrimaryIdentifier(MissingPrimaryIdentifier {
            model: model.into().into(),
        }))
    }

    pub fn is_missing_primary_identifier(&self) -> bool {
        matches!(self.kind(), ErrorKind::MissingPrimaryIdentifier(_))
    }
}
