#[cfg(not(feature = "bindgen"))]
pub(crate) mod glfw3;
#[cfg(not(feature = "bindgen"))]
pub mod native;

/// Declarations generated from the wrapper header of the build's exposure
/// profile, core and native API alike.
#[cfg(feature = "bindgen")]
pub(crate) mod glfw3 {
    include!(concat!(env!("OUT_DIR"), "/glfw3.rs"));
}

mod link;

pub use self::glfw3::*;

#[cfg(all(not(feature = "bindgen"), win32_platform))]
pub use self::native::win32::*;
#[cfg(all(not(feature = "bindgen"), wgl_backend))]
pub use self::native::wgl::*;
#[cfg(all(not(feature = "bindgen"), cocoa_platform))]
pub use self::native::cocoa::*;
#[cfg(all(not(feature = "bindgen"), nsgl_backend))]
pub use self::native::nsgl::*;
#[cfg(all(not(feature = "bindgen"), x11_platform))]
pub use self::native::x11::*;
#[cfg(all(not(feature = "bindgen"), glx_backend))]
pub use self::native::glx::*;
#[cfg(all(not(feature = "bindgen"), wayland_platform))]
pub use self::native::wayland::*;
#[cfg(all(not(feature = "bindgen"), egl_backend))]
pub use self::native::egl::*;
#[cfg(all(not(feature = "bindgen"), osmesa_backend))]
pub use self::native::osmesa::*;
