use super::{Error, ErrorKind};

/// Error when a registry document exists but cannot be decoded. Kept apart
/// from the not-registered errors so callers can tell a typo in a model name
/// from a broken file.
#[derive(Debug)]
pub(super) struct MalformedEntry {
    entry: Box<str>,
}

impl std::error::Error for MalformedEntry {}

impl core::fmt::Display for MalformedEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "malformed registry entry `{}`", self.entry)
    }
}

impl Error {
    pub fn malformed_entry(entry: impl Into<String>) -> Error {
        Error::from(ErrorKind::MalformedEntry(MalformedEntry {
            entry: entry.into().into(),
        }))
    }

    pub fn is_malformed_entry(&self) -> bool {
        matches!(self.kind(), ErrorKind::MalformedEntry(_))
    }
}
