use super::{Error, ErrorKind};

/// Error when a field's declared type is neither a primitive nor the name of
/// a registered enum.
#[derive(Debug)]
pub(super) struct UnsupportedFieldType {
    model: Box<str>,
    field: Box<str>,
    ty: Box<str>,
}

impl std::error::Error for UnsupportedFieldType {}

impl core::fmt::Display for UnsupportedFieldType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "field `{}.{}` has unsupported type `{}`",
            self.model, self.field, self.ty
        )
    }
}

impl Error {
    pub fn unsupported_field_type(
        model: impl Into<String>,
        field: impl Into<String>,
        ty: impl Into<String>,
    ) -> Error {
        Error::from(ErrorKind::UnsupportedFieldType(UnsupportedFieldType {
            model: model.into().into(),
            field: field.into().into(),
            ty: ty.into().into(),
        }))
    }

    pub fn is_unsupported_field_type(&self) -> bool {
        matches!(self.kind(), ErrorKind::UnsupportedFieldType(_))
    }
}
