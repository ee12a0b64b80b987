use super::{Error, ErrorKind};

/// Error when a success hook is registered but compilation handed it no
/// tables.
#[derive(Debug)]
pub(super) struct NilTableSet {
    model: Box<str>,
}

impl std::error::Error for NilTableSet {}

impl core::fmt::Display for NilTableSet {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "no tables produced for model `{}` to pass to the success hook",
            self.model
        )
    }
}

impl Error {
    pub fn nil_table_set(model: impl Into<String>) -> Error {
        Error::from(ErrorKind::NilTableSet(NilTableSet {
            model: model.into().into(),
        }))
    }

    pub fn is_nil_table_set(&self) -> bool {
        matches!(self.kind(), ErrorKind::NilTableSet(_))
    }
}
