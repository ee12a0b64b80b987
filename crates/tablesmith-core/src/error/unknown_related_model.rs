use super::{Error, ErrorKind};

/// Error when a model lookup misses the registry.
#[derive(Debug)]
pub(super) struct UnknownRelatedModel {
    name: Box<str>,
}

impl std::error::Error for UnknownRelatedModel {}

impl core::fmt::Display for UnknownRelatedModel {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "model `{}` is not registered", self.name)
    }
}

impl Error {
    pub fn unknown_related_model(name: impl Into<String>) -> Error {
        Error::from(ErrorKind::UnknownRelatedModel(UnknownRelatedModel {
            name: name.into().into(),
        }))
    }

    pub fn is_unknown_related_model(&self) -> bool {
        matches!(self.kind(), ErrorKind::UnknownRelatedModel(_))
    }
}
