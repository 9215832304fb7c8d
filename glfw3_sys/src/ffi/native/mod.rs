//! Declarations of `GLFW/glfw3native.h`.
//!
//! Each module holds what one `GLFW_EXPOSE_NATIVE_*` macro makes visible and
//! is only compiled when the build selected that backend. Handle types are
//! opaque stand-ins: they are never merged with each other nor with
//! `c_void`, so a GLX context can't be passed where an EGL one is expected.

/// Declares X11 resource ids, which travel as `unsigned long`.
#[cfg(any(x11_platform, glx_backend))]
macro_rules! xid {
    ($($(#[$attr:meta])* $name:ident;)*) => {
        $(
            $(#[$attr])*
            #[repr(transparent)]
            #[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
            pub struct $name(pub libc::c_ulong);
        )*
    };
}

#[cfg(any(x11_platform, glx_backend))]
pub(crate) use xid;

#[cfg(win32_platform)]
pub mod win32;

#[cfg(wgl_backend)]
pub mod wgl;

#[cfg(cocoa_platform)]
pub mod cocoa;

#[cfg(nsgl_backend)]
pub mod nsgl;

#[cfg(x11_platform)]
pub mod x11;

#[cfg(glx_backend)]
pub mod glx;

#[cfg(wayland_platform)]
pub mod wayland;

#[cfg(egl_backend)]
pub mod egl;

#[cfg(osmesa_backend)]
pub mod osmesa;
