use super::{Error, ErrorKind};
use crate::compile::HookPhase;

/// Context attached to an error returned by a start or success hook. The
/// hook's own error is kept as the cause.
#[derive(Debug)]
pub(super) struct HookFailed {
    phase: HookPhase,
}

impl std::error::Error for HookFailed {}

impl core::fmt::Display for HookFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{} hook failed", self.phase)
    }
}

impl Error {
    pub fn hook_failed(phase: HookPhase) -> Error {
        Error::from(ErrorKind::HookFailed(HookFailed { phase }))
    }

    pub fn is_hook_failed(&self) -> bool {
        matches!(self.kind(), ErrorKind::HookFailed(_))
    }

    /// The phase of the hook that failed, if this is a hook error.
    pub fn hook_phase(&self) -> Option<HookPhase> {
        match self.kind() {
            ErrorKind::HookFailed(err) => Some(err.phase),
            _ => None,
        }
    }
}
