use super::{Error, ErrorKind};

/// Error when a model takes part in a relation but its primary identifier
/// spans more than one field.
///
/// Foreign keys and junction tables reference a single column, so composite
/// primary identifiers cannot be the target of a relation.
#[derive(Debug)]
pub(super) struct MultiFieldPrimaryUnsupported {
    model: Box<str>,
    field_count: usize,
}

impl std::error::Error for MultiFieldPrimaryUnsupported {}

impl core::fmt::Display for MultiFieldPrimaryUnsupported {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "primary identifier of model `{}` must have exactly one field, found {}",
            self.model, self.field_count
        )
    }
}

impl Error {
    pub fn multi_field_primary_unsupported(model: impl Into<String>, field_count: usize) -> Error {
        Error::from(ErrorKind::MultiFieldPrimaryUnsupported(
            MultiFieldPrimaryUnsupported {
                model: model.into().into(),
                field_count,
            },
        ))
    }

    pub fn is_multi_field_primary_unsupported(&self) -> bool {
        matches!(self.kind(), ErrorKind::MultiFieldPrimaryUnsupported(_))
    }
}
