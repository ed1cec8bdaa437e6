use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use snow_load_core::CalculationError;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait SnowLoadError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> SnowLoadErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `SnowLoadError` for FFI error scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultSnowLoadError {
    code: SnowLoadErrorCode,
    msg: String,
}

impl DefaultSnowLoadError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out_result"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: SnowLoadErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }
}

impl From<&CalculationError> for DefaultSnowLoadError {
    fn from(error: &CalculationError) -> Self {
        let code = match error {
            CalculationError::InvalidZone(_) => SnowLoadErrorCode::InvalidZone,
            CalculationError::InvalidAngle(_) => SnowLoadErrorCode::InvalidAngle,
            CalculationError::InvalidCoefficient { .. } => SnowLoadErrorCode::InvalidCoefficient,
        };
        Self {
            code,
            msg: error.to_string(),
        }
    }
}

impl SnowLoadError for DefaultSnowLoadError {
    fn code(&self) -> SnowLoadErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by snow load functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnowLoadErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Zone index outside 0..=4 (A1, A2, A3, A4, M1).
    InvalidZone = 2,

    /// Roof angle outside [0, 90] degrees or not finite.
    InvalidAngle = 3,

    /// Exposure/thermal coefficient not strictly positive, or altitude
    /// negative, or any of them not finite.
    InvalidCoefficient = 4,
}

impl From<DefaultSnowLoadError> for SnowLoadErrorCode {
    fn from(error: DefaultSnowLoadError) -> Self {
        error.code
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is stored so the pointer handed to C stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, SnowLoadErrorCode)> = const { RefCell::new((None, SnowLoadErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, SnowLoadErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, SnowLoadErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if the last call succeeded or no call has been made.
///
/// # Lifetime
/// The returned pointer is valid until the next FFI call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```cpp
/// SnowLoadResult result;
/// if (snow_load_compute(input, false, &result) != SnowLoadErrorCode::Ok) {
///     const char* error = snow_load_get_last_error();
///     if (error) {
///         printf("Snow load failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn snow_load_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns `SnowLoadErrorCode::Ok` (0) if the last call on this thread succeeded.
#[no_mangle]
pub extern "C" fn snow_load_get_last_error_code() -> SnowLoadErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
