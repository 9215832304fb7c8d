//! Raw bindings to [GLFW] 3.4.
//!
//! The portable API of `glfw3.h` is always declared. Of `glfw3native.h`, only
//! the accessors of one windowing backend and one context API are, as picked
//! by the build script from the target and the enabled features:
//!
//! | Target        | Windowing backend                  | Context API                             |
//! |---------------|------------------------------------|-----------------------------------------|
//! | Windows       | Win32                              | `wgl`, `egl` or `osmesa`                |
//! | macOS         | Cocoa                              | `nsgl` or `osmesa`                      |
//! | Linux and BSD | `x11` or `wayland`, or none at all | `glx` (X11), `egl` or `osmesa`          |
//!
//! Enabling two windowing backends, two context APIs or a context API the
//! windowing backend can't provide fails the build. The selection is
//! available as [`EXPOSURE`] and is passed on to dependent build scripts as
//! `DEP_GLFW_EXPOSURE`.
//!
//! Native handles are opaque types, distinct per API. The declarations of a
//! backend live in `native` and are also re-exported at the crate root.
//!
//! [GLFW]: https://www.glfw.org

#![deny(rust_2018_idioms)]
#![deny(rustdoc::broken_intra_doc_links)]
#![allow(non_camel_case_types, non_snake_case, non_upper_case_globals)]
#![allow(clippy::missing_safety_doc)]

use glfw3_exposure::{ContextApi, WindowingBackend};
pub use glfw3_exposure::ExposureProfile;

mod ffi;

pub use ffi::*;

const WINDOWING: Option<WindowingBackend> = if cfg!(win32_platform) {
    Some(WindowingBackend::Win32)
} else if cfg!(cocoa_platform) {
    Some(WindowingBackend::Cocoa)
} else if cfg!(x11_platform) {
    Some(WindowingBackend::X11)
} else if cfg!(wayland_platform) {
    Some(WindowingBackend::Wayland)
} else {
    None
};

const CONTEXT: Option<ContextApi> = if cfg!(wgl_backend) {
    Some(ContextApi::Wgl)
} else if cfg!(nsgl_backend) {
    Some(ContextApi::Nsgl)
} else if cfg!(glx_backend) {
    Some(ContextApi::Glx)
} else if cfg!(egl_backend) {
    Some(ContextApi::Egl)
} else if cfg!(osmesa_backend) {
    Some(ContextApi::OsMesa)
} else {
    None
};

/// The native interop API this build declares.
pub const EXPOSURE: ExposureProfile = ExposureProfile::pair(WINDOWING, CONTEXT);

#[cfg(test)]
mod tests {
    use std::mem;

    use libc::c_int;

    use super::*;

    #[test]
    fn exposure_matches_cfg() {
        let flags = [
            ("win32_platform", cfg!(win32_platform)),
            ("cocoa_platform", cfg!(cocoa_platform)),
            ("x11_platform", cfg!(x11_platform)),
            ("wayland_platform", cfg!(wayland_platform)),
            ("wgl_backend", cfg!(wgl_backend)),
            ("nsgl_backend", cfg!(nsgl_backend)),
            ("glx_backend", cfg!(glx_backend)),
            ("egl_backend", cfg!(egl_backend)),
            ("osmesa_backend", cfg!(osmesa_backend)),
        ];
        let active: Vec<_> = flags.iter().filter(|(_, set)| *set).map(|(name, _)| *name).collect();
        assert_eq!(EXPOSURE.cfg_aliases(), active);
    }

    #[test]
    fn layouts() {
        assert_eq!(mem::size_of::<GLFWvidmode>(), 6 * mem::size_of::<c_int>());
        assert_eq!(mem::size_of::<GLFWgamepadstate>(), 15 + 1 + 6 * 4);
        assert_eq!(mem::size_of::<GLFWwindow>(), 0);
        assert_eq!(mem::size_of::<GLFWglproc>(), mem::size_of::<usize>());
    }

    #[test]
    fn input_modes_end_at_3_4() {
        assert_eq!((GLFW_VERSION_MAJOR, GLFW_VERSION_MINOR), (3, 4));
        let modes = [
            GLFW_CURSOR,
            GLFW_STICKY_KEYS,
            GLFW_STICKY_MOUSE_BUTTONS,
            GLFW_LOCK_KEY_MODS,
            GLFW_RAW_MOUSE_MOTION,
        ];
        assert_eq!(modes, [0x00033001, 0x00033002, 0x00033003, 0x00033004, 0x00033005]);

        // The unlimited mouse buttons mode follows them in 3.5.
        assert!(!include_str!("ffi/glfw3.rs").contains("0x00033006"));
    }

    #[cfg(x11_platform)]
    #[test]
    fn x11_accessors() {
        assert_eq!(mem::size_of::<Window>(), mem::size_of::<libc::c_ulong>());
        assert_eq!(mem::size_of::<RRCrtc>(), mem::size_of::<libc::c_ulong>());

        let _: unsafe extern "C" fn() -> *mut Display = glfwGetX11Display;
        let _: unsafe extern "C" fn(*mut GLFWmonitor) -> RRCrtc = glfwGetX11Adapter;
        let _: unsafe extern "C" fn(*mut GLFWmonitor) -> RROutput = glfwGetX11Monitor;
        let _: unsafe extern "C" fn(*mut GLFWwindow) -> Window = glfwGetX11Window;
        let _: unsafe extern "C" fn(*const libc::c_char) = glfwSetX11SelectionString;
        let _: unsafe extern "C" fn() -> *const libc::c_char = glfwGetX11SelectionString;
    }

    #[cfg(glx_backend)]
    #[test]
    fn glx_accessors() {
        assert_eq!(mem::size_of::<GLXWindow>(), mem::size_of::<libc::c_ulong>());

        let _: unsafe extern "C" fn(*mut GLFWwindow) -> GLXContext = glfwGetGLXContext;
        let _: unsafe extern "C" fn(*mut GLFWwindow) -> GLXWindow = glfwGetGLXWindow;
        let _: unsafe extern "C" fn(*mut GLFWwindow, *mut GLXFBConfig) -> c_int =
            glfwGetGLXFBConfig;
    }

    #[cfg(wayland_platform)]
    #[test]
    fn wayland_accessors() {
        let _: unsafe extern "C" fn() -> *mut wl_display = glfwGetWaylandDisplay;
        let _: unsafe extern "C" fn(*mut GLFWmonitor) -> *mut wl_output = glfwGetWaylandMonitor;
        let _: unsafe extern "C" fn(*mut GLFWwindow) -> *mut wl_surface = glfwGetWaylandWindow;
    }

    #[cfg(egl_backend)]
    #[test]
    fn egl_accessors() {
        let _: unsafe extern "C" fn() -> EGLDisplay = glfwGetEGLDisplay;
        let _: unsafe extern "C" fn(*mut GLFWwindow) -> EGLContext = glfwGetEGLContext;
        let _: unsafe extern "C" fn(*mut GLFWwindow) -> EGLSurface = glfwGetEGLSurface;
        let _: unsafe extern "C" fn(*mut GLFWwindow, *mut EGLConfig) -> c_int = glfwGetEGLConfig;
    }

    #[cfg(win32_platform)]
    #[test]
    fn win32_accessors() {
        let _: unsafe extern "C" fn(*mut GLFWmonitor) -> *const libc::c_char = glfwGetWin32Adapter;
        let _: unsafe extern "C" fn(*mut GLFWmonitor) -> *const libc::c_char = glfwGetWin32Monitor;
        let _: unsafe extern "C" fn(*mut GLFWwindow) -> HWND = glfwGetWin32Window;
    }

    #[cfg(wgl_backend)]
    #[test]
    fn wgl_accessors() {
        let _: unsafe extern "C" fn(*mut GLFWwindow) -> HGLRC = glfwGetWGLContext;
    }

    #[cfg(cocoa_platform)]
    #[test]
    fn cocoa_accessors() {
        assert_eq!(mem::size_of::<CGDirectDisplayID>(), 4);

        let _: unsafe extern "C" fn(*mut GLFWmonitor) -> CGDirectDisplayID = glfwGetCocoaMonitor;
        let _: unsafe extern "C" fn(*mut GLFWwindow) -> id = glfwGetCocoaWindow;
        let _: unsafe extern "C" fn(*mut GLFWwindow) -> id = glfwGetCocoaView;
    }

    #[cfg(nsgl_backend)]
    #[test]
    fn nsgl_accessors() {
        let _: unsafe extern "C" fn(*mut GLFWwindow) -> id = glfwGetNSGLContext;
    }

    #[cfg(osmesa_backend)]
    #[test]
    fn osmesa_accessors() {
        type BufferFn = unsafe extern "C" fn(
            *mut GLFWwindow,
            *mut c_int,
            *mut c_int,
            *mut c_int,
            *mut *mut libc::c_void,
        ) -> c_int;

        let _: BufferFn = glfwGetOSMesaColorBuffer;
        let _: BufferFn = glfwGetOSMesaDepthBuffer;
        let _: unsafe extern "C" fn(*mut GLFWwindow) -> OSMesaContext = glfwGetOSMesaContext;
    }
}
