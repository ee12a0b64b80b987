mod adhoc;
mod config_invalid;
mod hook_failed;
mod invalid_enum;
mod invalid_model;
mod invalid_schema;
mod malformed_entry;
mod missing_primary_identifier;
mod missing_related_field;
mod multi_field_primary;
mod nil_table_set;
mod unknown_enum;
mod unknown_related_model;
mod unsupported_field_type;

use adhoc::AdhocError;
use config_invalid::ConfigInvalid;
use hook_failed::HookFailed;
use invalid_enum::InvalidEnum;
use invalid_model::InvalidModel;
use invalid_schema::InvalidSchema;
use malformed_entry::MalformedEntry;
use missing_primary_identifier::MissingPrimaryIdentifier;
use missing_related_field::MissingRelatedField;
use multi_field_primary::MultiFieldPrimaryUnsupported;
use nil_table_set::NilTableSet;
use std::sync::Arc;
use unknown_enum::UnknownEnum;
use unknown_related_model::UnknownRelatedModel;
use unsupported_field_type::UnsupportedFieldType;

/// Returns early with an ad-hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while loading a registry or compiling models.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }
        let inner = err.inner.as_mut().unwrap();
        assert!(
            inner.cause.is_none(),
            "consequent error must not already have a cause"
        );
        Arc::get_mut(inner).unwrap().cause = Some(self);
        err
    }

    /// Returns the error this one was wrapped around, if any.
    pub fn cause(&self) -> Option<&Error> {
        self.inner.as_ref().and_then(|inner| inner.cause.as_ref())
    }

    /// Returns the innermost error of the context chain.
    pub fn root(&self) -> &Error {
        let mut err = self;
        while let Some(cause) = err.cause() {
            err = cause;
        }
        err
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.cause()?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => self
                .cause()
                .map(|cause| cause as &(dyn std::error::Error + 'static)),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    ConfigInvalid(ConfigInvalid),
    MissingPrimaryIdentifier(MissingPrimaryIdentifier),
    MultiFieldPrimaryUnsupported(MultiFieldPrimaryUnsupported),
    UnsupportedFieldType(UnsupportedFieldType),
    UnknownRelatedModel(UnknownRelatedModel),
    UnknownEnum(UnknownEnum),
    MissingRelatedField(MissingRelatedField),
    NilTableSet(NilTableSet),
    HookFailed(HookFailed),
    InvalidEnum(InvalidEnum),
    InvalidModel(InvalidModel),
    InvalidSchema(InvalidSchema),
    MalformedEntry(MalformedEntry),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            ConfigInvalid(err) => core::fmt::Display::fmt(err, f),
            MissingPrimaryIdentifier(err) => core::fmt::Display::fmt(err, f),
            MultiFieldPrimaryUnsupported(err) => core::fmt::Display::fmt(err, f),
            UnsupportedFieldType(err) => core::fmt::Display::fmt(err, f),
            UnknownRelatedModel(err) => core::fmt::Display::fmt(err, f),
            UnknownEnum(err) => core::fmt::Display::fmt(err, f),
            MissingRelatedField(err) => core::fmt::Display::fmt(err, f),
            NilTableSet(err) => core::fmt::Display::fmt(err, f),
            HookFailed(err) => core::fmt::Display::fmt(err, f),
            InvalidEnum(err) => core::fmt::Display::fmt(err, f),
            InvalidModel(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            MalformedEntry(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown tablesmith error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::HookPhase;

    #[test]
    fn error_size() {
        // Ensure Error stays at one word (size of pointer/Arc)
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("test error: {}", 42));
        assert_eq!(err.to_string(), "test error: 42");
    }

    #[test]
    fn error_chain_display() {
        let root = err!("root cause");
        let mid = err!("middle context");
        let top = err!("top context");

        let chained = root.context(mid).context(top);
        assert_eq!(
            chained.to_string(),
            "top context: middle context: root cause"
        );
    }

    #[test]
    fn bail_returns_early() {
        fn check(schema: &str) -> crate::Result<()> {
            if schema.is_empty() {
                bail!("schema `{schema}` is empty");
            }
            Ok(())
        }

        assert!(check("public").is_ok());
        assert_eq!(check("").unwrap_err().to_string(), "schema `` is empty");
    }

    #[test]
    fn anyhow_bridge() {
        let anyhow_err = anyhow::anyhow!("something failed");
        let our_err: Error = anyhow_err.into();
        assert_eq!(our_err.to_string(), "something failed");
    }

    #[test]
    fn std_error_bridge() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let our_err: Error = io_err.into();
        assert!(our_err.to_string().contains("file not found"));
    }

    #[test]
    fn config_invalid() {
        let err = Error::config_invalid("schema cannot be empty");
        assert!(err.is_config_invalid());
        assert_eq!(err.to_string(), "invalid config: schema cannot be empty");
    }

    #[test]
    fn missing_primary_identifier() {
        let err = Error::missing_primary_identifier("Person");
        assert!(err.is_missing_primary_identifier());
        assert_eq!(
            err.to_string(),
            "no primary identifier set for model `Person`"
        );
    }

    #[test]
    fn multi_field_primary() {
        let err = Error::multi_field_primary_unsupported("Order", 2);
        assert!(err.is_multi_field_primary_unsupported());
        assert_eq!(
            err.to_string(),
            "primary identifier of model `Order` must have exactly one field, found 2"
        );
    }

    #[test]
    fn unsupported_field_type() {
        let err = Error::unsupported_field_type("Person", "Mood", "Mood");
        assert!(err.is_unsupported_field_type());
        assert_eq!(
            err.to_string(),
            "field `Person.Mood` has unsupported type `Mood`"
        );
    }

    #[test]
    fn unknown_related_model_and_enum_are_distinct() {
        let model = Error::unknown_related_model("Company");
        let enum_ = Error::unknown_enum("Nationality");

        assert!(model.is_unknown_related_model());
        assert!(!model.is_unknown_enum());
        assert!(enum_.is_unknown_enum());
        assert!(!enum_.is_unknown_related_model());
        assert_eq!(model.to_string(), "model `Company` is not registered");
        assert_eq!(enum_.to_string(), "enum `Nationality` is not registered");
    }

    #[test]
    fn missing_related_field() {
        let err = Error::missing_related_field("Company", "ID");
        assert!(err.is_missing_related_field());
        assert_eq!(
            err.to_string(),
            "primary identifier field `ID` not found on model `Company`"
        );
    }

    #[test]
    fn hook_failed_wraps_cause() {
        let err = err!("rejected").context(Error::hook_failed(HookPhase::Start));
        assert!(err.is_hook_failed());
        assert_eq!(err.to_string(), "start hook failed: rejected");
        assert_eq!(err.root().to_string(), "rejected");
    }

    #[test]
    fn nil_table_set() {
        let err = Error::nil_table_set("Person");
        assert!(err.is_nil_table_set());
        assert_eq!(
            err.to_string(),
            "no tables produced for model `Person` to pass to the success hook"
        );
    }

    #[test]
    fn malformed_entry_with_cause() {
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from(cause).context(Error::malformed_entry("models/person.json"));
        assert!(err.is_malformed_entry());
        assert!(err
            .to_string()
            .starts_with("malformed registry entry `models/person.json`: "));
    }

    #[test]
    fn invalid_schema() {
        let err = Error::invalid_schema("duplicate column `id` on table `people`");
        assert!(err.is_invalid_schema());
        assert!(!err.is_invalid_model());
        assert_eq!(
            err.to_string(),
            "invalid schema: duplicate column `id` on table `people`"
        );
    }

    #[test]
    fn invalid_enum() {
        let err = Error::invalid_enum("Nationality", "entry `US` must be a string");
        assert!(err.is_invalid_enum());
        assert!(!err.is_invalid_model());
        assert_eq!(
            err.to_string(),
            "invalid enum `Nationality`: entry `US` must be a string"
        );
    }
}
