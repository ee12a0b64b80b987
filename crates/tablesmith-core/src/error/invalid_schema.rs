use super::{Error, ErrorKind};

/// Error when a compiled table set breaks a structural invariant.
///
/// This occurs when:
/// - Two derived names collide, such as a `CompanyID` field and a `Company`
///   relation both becoming `company_id`
/// - Two different tables of a compiled set share a name
/// - An index, constraint or foreign key lists a column its table lacks
/// - A foreign key has no name or references a column the referenced table lacks
#[derive(Debug)]
pub(super) struct InvalidSchema {
    message: Box<str>,
}

impl std::error::Error for InvalidSchema {}

impl core::fmt::Display for InvalidSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(ErrorKind::InvalidSchema(InvalidSchema {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid schema error.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidSchema(_))
    }
}
