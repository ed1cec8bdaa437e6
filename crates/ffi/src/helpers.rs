use crate::error::{with_last_error_mut, SnowLoadError, SnowLoadErrorCode};
use std::ffi::CString;

/// Set the thread-local error message and code.
pub(crate) fn set_last_error(error: &impl SnowLoadError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl SnowLoadError) -> SnowLoadErrorCode {
    tracing::debug!(code = ?error.code(), msg = error.msg(), "ffi call failed");
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on successful operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = SnowLoadErrorCode::Ok;
    });
}
