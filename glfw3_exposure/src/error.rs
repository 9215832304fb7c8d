//! Exposure profile errors.

use std::fmt;
use std::path::PathBuf;

use crate::platform::{ContextApi, WindowingBackend};

/// A specialized [`Result`] type for exposure profile resolution.
pub type Result<T> = std::result::Result<T, Error>;

/// The reasons a set of requested backends can't form a valid exposure
/// profile, or the GLFW headers can't be used with one.
///
/// Every variant describes a build configuration error. Nothing here is
/// recoverable at runtime, the build scripts turn these into a failed build.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Error {
    /// More than one windowing backend was requested for the same build.
    ConflictingWindowing(WindowingBackend, WindowingBackend),

    /// More than one context API was requested for the same build.
    ConflictingContext(ContextApi, ContextApi),

    /// The context API needs a windowing backend, but none is selected.
    MissingWindowing(ContextApi),

    /// The context API can't be used with the selected windowing backend.
    Incompatible { windowing: WindowingBackend, context: ContextApi },

    /// A profile name contained an unknown token.
    UnknownName(String),

    /// The directory has no `GLFW/glfw3.h` and `GLFW/glfw3native.h`.
    MissingHeaders(PathBuf),

    /// The headers are older than GLFW 3.4 and can't suppress the platform
    /// includes of `glfw3native.h`.
    OutdatedHeaders(PathBuf),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConflictingWindowing(first, second) => write!(
                f,
                "the `{first}` and `{second}` windowing backends are mutually exclusive, enable \
                 only one of them"
            ),
            Error::ConflictingContext(first, second) => write!(
                f,
                "the `{first}` and `{second}` context APIs are mutually exclusive, enable only \
                 one of them"
            ),
            Error::MissingWindowing(context) => write!(
                f,
                "the `{context}` context API needs one of the {} windowing backends",
                BackendList(context.windowing_backends())
            ),
            Error::Incompatible { windowing, context } => write!(
                f,
                "the `{context}` context API can't be exposed together with the `{windowing}` \
                 windowing backend, it works with {}",
                BackendList(context.windowing_backends())
            ),
            Error::UnknownName(name) => {
                write!(f, "`{name}` is neither a windowing backend nor a context API")
            },
            Error::MissingHeaders(dir) => write!(
                f,
                "no GLFW headers in `{}`, run `git submodule update --init` or point \
                 `GLFW_SOURCE_DIR` to a GLFW 3.4 source tree",
                dir.display()
            ),
            Error::OutdatedHeaders(dir) => write!(
                f,
                "the GLFW headers in `{}` predate 3.4, which is the first release with \
                 `GLFW_NATIVE_INCLUDE_NONE`",
                dir.display()
            ),
        }
    }
}

impl std::error::Error for Error {}

struct BackendList(&'static [WindowingBackend]);

impl fmt::Display for BackendList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, backend) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "`{backend}`")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_backends() {
        let err = Error::Incompatible {
            windowing: WindowingBackend::Wayland,
            context: ContextApi::Glx,
        };
        assert_eq!(
            err.to_string(),
            "the `glx` context API can't be exposed together with the `wayland` windowing \
             backend, it works with `x11`"
        );

        let err = Error::MissingWindowing(ContextApi::Egl);
        assert_eq!(
            err.to_string(),
            "the `egl` context API needs one of the `win32`, `x11`, `wayland` windowing backends"
        );
    }
}
