use super::{Error, ErrorKind};

/// Error when a model definition is structurally invalid.
///
/// This occurs when:
/// - The model has no name or no fields
/// - An identifier is empty or lists a field the model does not declare
///
/// The registry is expected to hand over validated models; the compiler
/// re-checks the shape it depends on before emitting any table.
#[derive(Debug)]
pub(super) struct InvalidModel {
    model: Box<str>,
    message: Box<str>,
}

impl std::error::Error for InvalidModel {}

impl core::fmt::Display for InvalidModel {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid model `{}`: {}", self.model, self.message)
    }
}

impl Error {
    pub fn invalid_model(model: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(ErrorKind::InvalidModel(InvalidModel {
            model: model.into().into(),
            message: message.into().into(),
        }))
    }

    pub fn is_invalid_model(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidModel(_))
    }
}
