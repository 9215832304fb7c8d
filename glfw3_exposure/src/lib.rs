//! Selection of the native interop surface GLFW exposes to Rust.
//!
//! GLFW puts its platform specific accessors (`glfwGetX11Window`,
//! `glfwGetGLXContext`, ...) in `glfw3native.h`, behind one
//! `GLFW_EXPOSE_NATIVE_*` macro per windowing backend and per context API.
//! An [`ExposureProfile`] picks one of each for a build and knows everything
//! that follows from the pick:
//!
//! - the macros to define, see [`ExposureProfile::macros`];
//! - the accessors that become visible, see
//!   [`ExposureProfile::native_functions`];
//! - the native handle types those accessors mention, declared as opaque
//!   stand-ins, see [`ExposureProfile::opaque_types`];
//! - the wrapper header a binding generator can parse, see
//!   [`ExposureProfile::wrapper_header`];
//! - the `cfg` flags the crates gate their declarations on, see
//!   [`ExposureProfile::cfg_aliases`].
//!
//! Build scripts resolve the profile with [`ExposureProfile::from_env`],
//! which reads the target and the enabled Cargo features. A bad combination
//! is reported as an [`Error`] and must fail the build: it never becomes a
//! runtime condition.
//!
//! ```
//! use glfw3_exposure::{ExposureProfile, Features, Target};
//!
//! let features = Features::default().with(&["wayland", "egl"]).unwrap();
//! let profile = ExposureProfile::resolve(Target::FreeUnix, &features).unwrap();
//! assert_eq!(profile.to_string(), "wayland+egl");
//! assert_eq!(profile.cfg_aliases(), ["wayland_platform", "egl_backend"]);
//! ```

#![deny(rust_2018_idioms)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_debug_implementations)]

mod catalog;
mod error;
mod platform;
mod profile;

pub use catalog::{Guard, NativeFunction, OpaqueKind, OpaqueType, NATIVE_FUNCTIONS, OPAQUE_TYPES};
pub use error::{Error, Result};
pub use platform::{ContextApi, Features, Target, WindowingBackend};
pub use profile::{check_headers, ExposureProfile, INCLUDE_NONE, NATIVE_INCLUDE_NONE};
