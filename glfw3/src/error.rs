//! GLFW error handling.

use std::ffi::CStr;
use std::fmt;
use std::ptr;

use glfw3_sys as sys;

use crate::init::InitHint;
use crate::window::WindowHint;

/// A specialized [`Result`] type for GLFW operations.
pub type Result<T> = std::result::Result<T, Error>;

/// An error reported by GLFW.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The raw GLFW error code.
    raw_code: i32,

    /// The description GLFW attached to the error, if any.
    description: Option<String>,

    kind: ErrorKind,
}

impl Error {
    pub(crate) fn new(raw_code: i32, description: Option<String>) -> Self {
        Self { raw_code, description, kind: ErrorKind::from_raw(raw_code) }
    }

    /// Takes the last error of the calling thread out of GLFW.
    pub(crate) fn take() -> Result<()> {
        let mut description = ptr::null();
        let code = unsafe { sys::glfwGetError(&mut description) };
        if code == sys::GLFW_NO_ERROR {
            return Ok(());
        }

        let description = (!description.is_null())
            .then(|| unsafe { CStr::from_ptr(description) }.to_string_lossy().into_owned());
        Err(Self::new(code, description))
    }

    /// Like [`Error::take`], for calls that fail without setting an error.
    pub(crate) fn take_or(kind: ErrorKind) -> Self {
        match Self::take() {
            Err(err) => err,
            Ok(()) => kind.into(),
        }
    }

    /// Helper to check that error is [`ErrorKind::NotInitialized`].
    #[inline]
    pub fn not_initialized(&self) -> bool {
        self.kind == ErrorKind::NotInitialized
    }

    /// The underlying error kind.
    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        self.kind
    }

    /// The raw GLFW error code.
    #[inline]
    pub fn raw_code(&self) -> i32 {
        self.raw_code
    }

    /// The description GLFW reported along with the code.
    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:#x}] ", self.raw_code)?;
        f.write_str(self.description.as_deref().unwrap_or_else(|| self.kind.as_str()))
    }
}

impl std::error::Error for Error {}

/// Build an error with just a kind.
impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self { raw_code: kind.raw_code(), description: None, kind }
    }
}

/// The categories of GLFW errors.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum ErrorKind {
    /// GLFW was not initialized.
    NotInitialized,

    /// An operation needing a current context was called without one.
    NoCurrentContext,

    /// An enum argument was not valid for the function.
    InvalidEnum,

    /// A value argument was not valid for the function.
    InvalidValue,

    /// A memory allocation failed.
    OutOfMemory,

    /// The requested API is not available on the system.
    ApiUnavailable,

    /// The requested context version is not available.
    VersionUnavailable,

    /// A platform-specific error without a more specific category.
    PlatformError,

    /// The requested pixel format or clipboard format is not available.
    FormatUnavailable,

    /// The window has no OpenGL or OpenGL ES context.
    NoWindowContext,

    /// The standard cursor shape is not available.
    CursorUnavailable,

    /// The platform doesn't provide the requested feature.
    FeatureUnavailable,

    /// GLFW doesn't implement the requested feature for the platform.
    FeatureUnimplemented,

    /// The requested platform was not compiled in or can't run.
    PlatformUnavailable,

    /// A code this crate doesn't know about.
    Unknown,
}

impl ErrorKind {
    fn from_raw(code: i32) -> Self {
        match code {
            sys::GLFW_NOT_INITIALIZED => Self::NotInitialized,
            sys::GLFW_NO_CURRENT_CONTEXT => Self::NoCurrentContext,
            sys::GLFW_INVALID_ENUM => Self::InvalidEnum,
            sys::GLFW_INVALID_VALUE => Self::InvalidValue,
            sys::GLFW_OUT_OF_MEMORY => Self::OutOfMemory,
            sys::GLFW_API_UNAVAILABLE => Self::ApiUnavailable,
            sys::GLFW_VERSION_UNAVAILABLE => Self::VersionUnavailable,
            sys::GLFW_PLATFORM_ERROR => Self::PlatformError,
            sys::GLFW_FORMAT_UNAVAILABLE => Self::FormatUnavailable,
            sys::GLFW_NO_WINDOW_CONTEXT => Self::NoWindowContext,
            sys::GLFW_CURSOR_UNAVAILABLE => Self::CursorUnavailable,
            sys::GLFW_FEATURE_UNAVAILABLE => Self::FeatureUnavailable,
            sys::GLFW_FEATURE_UNIMPLEMENTED => Self::FeatureUnimplemented,
            sys::GLFW_PLATFORM_UNAVAILABLE => Self::PlatformUnavailable,
            _ => Self::Unknown,
        }
    }

    fn raw_code(self) -> i32 {
        match self {
            Self::NotInitialized => sys::GLFW_NOT_INITIALIZED,
            Self::NoCurrentContext => sys::GLFW_NO_CURRENT_CONTEXT,
            Self::InvalidEnum => sys::GLFW_INVALID_ENUM,
            Self::InvalidValue => sys::GLFW_INVALID_VALUE,
            Self::OutOfMemory => sys::GLFW_OUT_OF_MEMORY,
            Self::ApiUnavailable => sys::GLFW_API_UNAVAILABLE,
            Self::VersionUnavailable => sys::GLFW_VERSION_UNAVAILABLE,
            Self::PlatformError => sys::GLFW_PLATFORM_ERROR,
            Self::FormatUnavailable => sys::GLFW_FORMAT_UNAVAILABLE,
            Self::NoWindowContext => sys::GLFW_NO_WINDOW_CONTEXT,
            Self::CursorUnavailable => sys::GLFW_CURSOR_UNAVAILABLE,
            Self::FeatureUnavailable => sys::GLFW_FEATURE_UNAVAILABLE,
            Self::FeatureUnimplemented => sys::GLFW_FEATURE_UNIMPLEMENTED,
            Self::PlatformUnavailable => sys::GLFW_PLATFORM_UNAVAILABLE,
            Self::Unknown => -1,
        }
    }

    pub(crate) fn as_str(&self) -> &'static str {
        use ErrorKind::*;
        match *self {
            NotInitialized => "GLFW is not initialized",
            NoCurrentContext => "no context is current on this thread",
            InvalidEnum => "invalid enum argument",
            InvalidValue => "invalid value argument",
            OutOfMemory => "out of memory",
            ApiUnavailable => "the requested API is unavailable",
            VersionUnavailable => "the requested context version is unavailable",
            PlatformError => "platform error",
            FormatUnavailable => "the requested format is unavailable",
            NoWindowContext => "the window has no context",
            CursorUnavailable => "the cursor shape is unavailable",
            FeatureUnavailable => "the feature is unavailable on this platform",
            FeatureUnimplemented => "the feature is not implemented for this platform",
            PlatformUnavailable => "the platform is unavailable",
            Unknown => "unknown error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of [`Glfw::init`].
///
/// [`Glfw::init`]: crate::Glfw::init
#[derive(Debug)]
pub enum InitError<'a> {
    /// GLFW rejected an init hint.
    Hint(&'a InitHint, Error),

    /// `glfwInit` failed.
    Init(Error),

    /// A thread panicked while holding the GLFW instance.
    Poisoned,
}

impl fmt::Display for InitError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hint(hint, err) => write!(f, "init hint {hint:?} was rejected: {err}"),
            Self::Init(err) => write!(f, "failed to initialize GLFW: {err}"),
            Self::Poisoned => f.write_str("the GLFW instance lock is poisoned"),
        }
    }
}

impl std::error::Error for InitError<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Hint(_, err) | Self::Init(err) => Some(err),
            Self::Poisoned => None,
        }
    }
}

/// Failure of [`Glfw::try_init`].
///
/// [`Glfw::try_init`]: crate::Glfw::try_init
#[derive(Debug)]
pub enum TryInitError<'a> {
    InitError(InitError<'a>),

    /// Another [`Glfw`] is alive.
    ///
    /// [`Glfw`]: crate::Glfw
    WouldBlock,
}

impl<'a> From<InitError<'a>> for TryInitError<'a> {
    fn from(value: InitError<'a>) -> Self {
        Self::InitError(value)
    }
}

impl fmt::Display for TryInitError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitError(err) => err.fmt(f),
            Self::WouldBlock => f.write_str("GLFW is already initialized"),
        }
    }
}

impl std::error::Error for TryInitError<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InitError(err) => err.source(),
            Self::WouldBlock => None,
        }
    }
}

/// Failure of [`Glfw::create_window`].
///
/// [`Glfw::create_window`]: crate::Glfw::create_window
#[derive(Debug)]
pub enum CreateWindowError<'a> {
    /// GLFW rejected a window hint.
    Hint(&'a WindowHint, Error),

    /// The title contains a nul byte.
    Title,

    /// `glfwCreateWindow` failed.
    CreateWindow(Error),
}

impl fmt::Display for CreateWindowError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hint(hint, err) => write!(f, "window hint {hint:?} was rejected: {err}"),
            Self::Title => f.write_str("the window title contains a nul byte"),
            Self::CreateWindow(err) => write!(f, "failed to create window: {err}"),
        }
    }
}

impl std::error::Error for CreateWindowError<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Hint(_, err) | Self::CreateWindow(err) => Some(err),
            Self::Title => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_round_trip_through_codes() {
        for code in sys::GLFW_NOT_INITIALIZED..=sys::GLFW_PLATFORM_UNAVAILABLE {
            let kind = ErrorKind::from_raw(code);
            assert_ne!(kind, ErrorKind::Unknown, "{code:#x}");
            assert_eq!(kind.raw_code(), code);
        }
        assert_eq!(ErrorKind::from_raw(0x0002_0001), ErrorKind::Unknown);
    }

    #[test]
    fn display_prefers_description() {
        let err = Error::new(sys::GLFW_PLATFORM_ERROR, Some("X11: Failed to open display".into()));
        assert_eq!(err.to_string(), "[0x10008] X11: Failed to open display");

        let err = Error::from(ErrorKind::NoWindowContext);
        assert_eq!(err.to_string(), "[0x1000a] the window has no context");
        assert!(!err.not_initialized());
    }
}
