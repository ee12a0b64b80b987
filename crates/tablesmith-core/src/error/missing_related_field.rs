use super::{Error, ErrorKind};

/// Error when a model's primary identifier lists a field the model does not
/// declare.
#[derive(Debug)]
pub(super) struct MissingRelatedField {
    model: Box<str>,
    field: Box<str>,
}

impl std::error::Error for MissingRelatedField {}

impl core::fmt::Display for MissingRelatedField {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "primary identifier field `{}` not found on model `{}`",
            self.field, self.model
        )
    }
}

impl Error {
    pub fn missing_related_field(model: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(ErrorKind::MissingRelatedField(MissingRelatedField {
            model: model.into().into(),
            field: field.into().into(),
        }))
    }

    pub fn is_missing_related_field(&self) -> bool {
        matches!(self.kind(), ErrorKind::MissingRelatedField(_))
    }
}
