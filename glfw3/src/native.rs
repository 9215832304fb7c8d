//! Access to the native handles behind GLFW objects.
//!
//! Only the accessors of the windowing backend and context API the build
//! exposes exist, see [`EXPOSURE`]. All of them fail with
//! [`ErrorKind::PlatformUnavailable`] when GLFW runs on another platform,
//! for example X11 accessors on the null platform.
//!
//! [`Window`] implements [`HasWindowHandle`] and [`HasDisplayHandle`]. A
//! build without a windowing backend `raw-window-handle` knows about reports
//! [`HandleError::NotSupported`].
//!
//! [`EXPOSURE`]: glfw3_sys::EXPOSURE
//! [`ErrorKind::PlatformUnavailable`]: crate::ErrorKind::PlatformUnavailable

#[cfg(any(x11_platform, win32_platform))]
use std::ffi::CStr;
#[cfg(any(x11_platform, wayland_platform, osmesa_backend))]
use std::ptr::NonNull;

#[cfg(any(
    x11_platform,
    wayland_platform,
    win32_platform,
    cocoa_platform,
    glx_backend,
    egl_backend,
    wgl_backend,
    nsgl_backend,
    osmesa_backend
))]
use glfw3_sys as sys;
use raw_window_handle::{
    DisplayHandle, HandleError, HasDisplayHandle, HasWindowHandle, RawDisplayHandle,
    RawWindowHandle, WindowHandle,
};

#[cfg(any(
    x11_platform,
    wayland_platform,
    win32_platform,
    cocoa_platform,
    glx_backend,
    egl_backend,
    wgl_backend,
    nsgl_backend,
    osmesa_backend
))]
use crate::error::{Error, ErrorKind, Result};
use crate::init::Glfw;
#[cfg(any(x11_platform, wayland_platform, win32_platform, cocoa_platform))]
use crate::monitor::Monitor;
use crate::window::Window;

/// Turns a null handle into the error GLFW reported.
#[cfg(any(x11_platform, wayland_platform))]
fn non_null<T>(ptr: *mut T) -> Result<NonNull<T>> {
    NonNull::new(ptr).ok_or_else(|| Error::take_or(ErrorKind::PlatformUnavailable))
}

#[cfg(any(x11_platform, win32_platform))]
fn owned_string(string: *const libc::c_char) -> Result<String> {
    if string.is_null() {
        return Err(Error::take_or(ErrorKind::PlatformUnavailable));
    }
    Ok(unsafe { CStr::from_ptr(string) }.to_string_lossy().into_owned())
}

#[cfg(x11_platform)]
impl Glfw {
    /// The Xlib connection GLFW uses.
    #[doc(alias = "glfwGetX11Display")]
    pub fn x11_display(&self) -> Result<NonNull<sys::Display>> {
        non_null(unsafe { sys::glfwGetX11Display() })
    }

    /// The contents of the primary selection.
    #[doc(alias = "glfwGetX11SelectionString")]
    pub fn x11_selection_string(&self) -> Result<String> {
        owned_string(unsafe { sys::glfwGetX11SelectionString() })
    }

    #[doc(alias = "glfwSetX11SelectionString")]
    pub fn set_x11_selection_string(&self, string: &str) -> Result<()> {
        let string =
            std::ffi::CString::new(string).map_err(|_| Error::from(ErrorKind::InvalidValue))?;
        unsafe { sys::glfwSetX11SelectionString(string.as_ptr()) };
        Error::take()
    }
}

#[cfg(x11_platform)]
impl Window {
    #[doc(alias = "glfwGetX11Window")]
    pub fn x11_window(&self) -> Result<sys::Window> {
        let window = unsafe { sys::glfwGetX11Window(self.window_ptr) };
        Error::take()?;
        Ok(window)
    }
}

#[cfg(x11_platform)]
impl Monitor {
    /// The RandR CRTC driving the monitor.
    #[doc(alias = "glfwGetX11Adapter")]
    pub fn x11_adapter(&self) -> Result<sys::RRCrtc> {
        let crtc = unsafe { sys::glfwGetX11Adapter(self.monitor_ptr) };
        Error::take()?;
        Ok(crtc)
    }

    #[doc(alias = "glfwGetX11Monitor")]
    pub fn x11_monitor(&self) -> Result<sys::RROutput> {
        let output = unsafe { sys::glfwGetX11Monitor(self.monitor_ptr) };
        Error::take()?;
        Ok(output)
    }
}

#[cfg(glx_backend)]
impl Window {
    #[doc(alias = "glfwGetGLXContext")]
    pub fn glx_context(&self) -> Result<sys::GLXContext> {
        let context = unsafe { sys::glfwGetGLXContext(self.window_ptr) };
        if context.is_null() {
            return Err(Error::take_or(ErrorKind::NoWindowContext));
        }
        Ok(context)
    }

    #[doc(alias = "glfwGetGLXWindow")]
    pub fn glx_window(&self) -> Result<sys::GLXWindow> {
        let window = unsafe { sys::glfwGetGLXWindow(self.window_ptr) };
        Error::take()?;
        Ok(window)
    }

    /// The framebuffer config the context was created with.
    #[doc(alias = "glfwGetGLXFBConfig")]
    pub fn glx_fbconfig(&self) -> Result<sys::GLXFBConfig> {
        let mut config = std::ptr::null_mut();
        if unsafe { sys::glfwGetGLXFBConfig(self.window_ptr, &mut config) } != sys::GLFW_TRUE {
            return Err(Error::take_or(ErrorKind::NoWindowContext));
        }
        Ok(config)
    }
}

#[cfg(wayland_platform)]
impl Glfw {
    #[doc(alias = "glfwGetWaylandDisplay")]
    pub fn wayland_display(&self) -> Result<NonNull<sys::wl_display>> {
        non_null(unsafe { sys::glfwGetWaylandDisplay() })
    }
}

#[cfg(wayland_platform)]
impl Window {
    #[doc(alias = "glfwGetWaylandWindow")]
    pub fn wayland_surface(&self) -> Result<NonNull<sys::wl_surface>> {
        non_null(unsafe { sys::glfwGetWaylandWindow(self.window_ptr) })
    }
}

#[cfg(wayland_platform)]
impl Monitor {
    #[doc(alias = "glfwGetWaylandMonitor")]
    pub fn wayland_output(&self) -> Result<NonNull<sys::wl_output>> {
        non_null(unsafe { sys::glfwGetWaylandMonitor(self.monitor_ptr) })
    }
}

#[cfg(egl_backend)]
impl Glfw {
    #[doc(alias = "glfwGetEGLDisplay")]
    pub fn egl_display(&self) -> Result<sys::EGLDisplay> {
        let display = unsafe { sys::glfwGetEGLDisplay() };
        if display.is_null() {
            return Err(Error::take_or(ErrorKind::ApiUnavailable));
        }
        Ok(display)
    }
}

#[cfg(egl_backend)]
impl Window {
    #[doc(alias = "glfwGetEGLContext")]
    pub fn egl_context(&self) -> Result<sys::EGLContext> {
        let context = unsafe { sys::glfwGetEGLContext(self.window_ptr) };
        if context.is_null() {
            return Err(Error::take_or(ErrorKind::NoWindowContext));
        }
        Ok(context)
    }

    #[doc(alias = "glfwGetEGLSurface")]
    pub fn egl_surface(&self) -> Result<sys::EGLSurface> {
        let surface = unsafe { sys::glfwGetEGLSurface(self.window_ptr) };
        if surface.is_null() {
            return Err(Error::take_or(ErrorKind::NoWindowContext));
        }
        Ok(surface)
    }

    #[doc(alias = "glfwGetEGLConfig")]
    pub fn egl_config(&self) -> Result<sys::EGLConfig> {
        let mut config = std::ptr::null_mut();
        if unsafe { sys::glfwGetEGLConfig(self.window_ptr, &mut config) } != sys::GLFW_TRUE {
            return Err(Error::take_or(ErrorKind::NoWindowContext));
        }
        Ok(config)
    }
}

#[cfg(win32_platform)]
impl Window {
    #[doc(alias = "glfwGetWin32Window")]
    pub fn win32_window(&self) -> Result<sys::HWND> {
        let hwnd = unsafe { sys::glfwGetWin32Window(self.window_ptr) };
        if hwnd.is_null() {
            return Err(Error::take_or(ErrorKind::PlatformUnavailable));
        }
        Ok(hwnd)
    }
}

#[cfg(win32_platform)]
impl Monitor {
    /// The adapter device name, such as `\\.\DISPLAY1`.
    #[doc(alias = "glfwGetWin32Adapter")]
    pub fn win32_adapter(&self) -> Result<String> {
        owned_string(unsafe { sys::glfwGetWin32Adapter(self.monitor_ptr) })
    }

    /// The display device name, such as `\\.\DISPLAY1\Monitor0`.
    #[doc(alias = "glfwGetWin32Monitor")]
    pub fn win32_monitor(&self) -> Result<String> {
        owned_string(unsafe { sys::glfwGetWin32Monitor(self.monitor_ptr) })
    }
}

#[cfg(wgl_backend)]
impl Window {
    #[doc(alias = "glfwGetWGLContext")]
    pub fn wgl_context(&self) -> Result<sys::HGLRC> {
        let context = unsafe { sys::glfwGetWGLContext(self.window_ptr) };
        if context.is_null() {
            return Err(Error::take_or(ErrorKind::NoWindowContext));
        }
        Ok(context)
    }
}

#[cfg(cocoa_platform)]
impl Window {
    /// The `NSWindow`.
    #[doc(alias = "glfwGetCocoaWindow")]
    pub fn cocoa_window(&self) -> Result<sys::id> {
        let window = unsafe { sys::glfwGetCocoaWindow(self.window_ptr) };
        if window.is_null() {
            return Err(Error::take_or(ErrorKind::PlatformUnavailable));
        }
        Ok(window)
    }

    /// The `NSView` of the content area.
    #[doc(alias = "glfwGetCocoaView")]
    pub fn cocoa_view(&self) -> Result<sys::id> {
        let view = unsafe { sys::glfwGetCocoaView(self.window_ptr) };
        if view.is_null() {
            return Err(Error::take_or(ErrorKind::PlatformUnavailable));
        }
        Ok(view)
    }
}

#[cfg(cocoa_platform)]
impl Monitor {
    #[doc(alias = "glfwGetCocoaMonitor")]
    pub fn cocoa_monitor(&self) -> Result<sys::CGDirectDisplayID> {
        let display = unsafe { sys::glfwGetCocoaMonitor(self.monitor_ptr) };
        Error::take()?;
        Ok(display)
    }
}

#[cfg(nsgl_backend)]
impl Window {
    /// The `NSOpenGLContext`.
    #[doc(alias = "glfwGetNSGLContext")]
    pub fn nsgl_context(&self) -> Result<sys::id> {
        let context = unsafe { sys::glfwGetNSGLContext(self.window_ptr) };
        if context.is_null() {
            return Err(Error::take_or(ErrorKind::NoWindowContext));
        }
        Ok(context)
    }
}

/// A buffer an OSMesa context renders into, owned by GLFW.
#[cfg(osmesa_backend)]
#[derive(Debug, Clone, Copy)]
pub struct OsMesaBuffer {
    pub width: i32,
    pub height: i32,
    /// The OSMesa pixel format of a color buffer, the bytes per value of a
    /// depth buffer.
    pub format: i32,
    pub buffer: NonNull<libc::c_void>,
}

#[cfg(osmesa_backend)]
impl Window {
    #[doc(alias = "glfwGetOSMesaContext")]
    pub fn osmesa_context(&self) -> Result<sys::OSMesaContext> {
        let context = unsafe { sys::glfwGetOSMesaContext(self.window_ptr) };
        if context.is_null() {
            return Err(Error::take_or(ErrorKind::NoWindowContext));
        }
        Ok(context)
    }

    #[doc(alias = "glfwGetOSMesaColorBuffer")]
    pub fn osmesa_color_buffer(&self) -> Result<OsMesaBuffer> {
        self.osmesa_buffer(sys::glfwGetOSMesaColorBuffer)
    }

    #[doc(alias = "glfwGetOSMesaDepthBuffer")]
    pub fn osmesa_depth_buffer(&self) -> Result<OsMesaBuffer> {
        self.osmesa_buffer(sys::glfwGetOSMesaDepthBuffer)
    }

    fn osmesa_buffer(
        &self,
        get: unsafe extern "C" fn(
            *mut sys::GLFWwindow,
            *mut libc::c_int,
            *mut libc::c_int,
            *mut libc::c_int,
            *mut *mut libc::c_void,
        ) -> libc::c_int,
    ) -> Result<OsMesaBuffer> {
        let (mut width, mut height, mut format) = (0, 0, 0);
        let mut buffer = std::ptr::null_mut();
        let ok =
            unsafe { get(self.window_ptr, &mut width, &mut height, &mut format, &mut buffer) };
        match NonNull::new(buffer) {
            Some(buffer) if ok == sys::GLFW_TRUE => {
                Ok(OsMesaBuffer { width, height, format, buffer })
            },
            _ => Err(Error::take_or(ErrorKind::NoWindowContext)),
        }
    }
}

#[cfg(x11_platform)]
mod raw {
    use raw_window_handle::{XlibDisplayHandle, XlibWindowHandle};

    use super::*;

    pub(super) fn xlib_window(window: sys::Window) -> Option<RawWindowHandle> {
        (window.0 != 0).then(|| XlibWindowHandle::new(window.0).into())
    }

    pub(super) fn xlib_display(display: NonNull<sys::Display>) -> RawDisplayHandle {
        // GLFW only uses the default screen and doesn't expose its number.
        XlibDisplayHandle::new(Some(display.cast()), 0).into()
    }

    pub(super) fn window(window: &Window) -> HandleResult<RawWindowHandle> {
        let id = window.x11_window().map_err(unavailable)?;
        xlib_window(id).ok_or(HandleError::Unavailable)
    }

    pub(super) fn display() -> HandleResult<RawDisplayHandle> {
        non_null(unsafe { sys::glfwGetX11Display() }).map(xlib_display).map_err(unavailable)
    }
}

#[cfg(wayland_platform)]
mod raw {
    use raw_window_handle::{WaylandDisplayHandle, WaylandWindowHandle};

    use super::*;

    pub(super) fn window(window: &Window) -> HandleResult<RawWindowHandle> {
        let surface = window.wayland_surface().map_err(unavailable)?;
        Ok(WaylandWindowHandle::new(surface.cast()).into())
    }

    pub(super) fn display() -> HandleResult<RawDisplayHandle> {
        let display = non_null(unsafe { sys::glfwGetWaylandDisplay() }).map_err(unavailable)?;
        Ok(WaylandDisplayHandle::new(display.cast()).into())
    }
}

#[cfg(win32_platform)]
mod raw {
    use std::num::NonZeroIsize;

    use raw_window_handle::{Win32WindowHandle, WindowsDisplayHandle};

    use super::*;

    pub(super) fn window(window: &Window) -> HandleResult<RawWindowHandle> {
        let hwnd = window.win32_window().map_err(unavailable)?;
        let hwnd = NonZeroIsize::new(hwnd as isize).ok_or(HandleError::Unavailable)?;
        Ok(Win32WindowHandle::new(hwnd).into())
    }

    pub(super) fn display() -> HandleResult<RawDisplayHandle> {
        Ok(WindowsDisplayHandle::new().into())
    }
}

#[cfg(cocoa_platform)]
mod raw {
    use std::ptr::NonNull;

    use raw_window_handle::{AppKitDisplayHandle, AppKitWindowHandle};

    use super::*;

    pub(super) fn window(window: &Window) -> HandleResult<RawWindowHandle> {
        let view = window.cocoa_view().map_err(unavailable)?;
        let view = NonNull::new(view.cast()).ok_or(HandleError::Unavailable)?;
        Ok(AppKitWindowHandle::new(view).into())
    }

    pub(super) fn display() -> HandleResult<RawDisplayHandle> {
        Ok(AppKitDisplayHandle::new().into())
    }
}

/// The build exposes no windowing backend `raw-window-handle` has a variant
/// for.
#[cfg(not(any(x11_platform, wayland_platform, win32_platform, cocoa_platform)))]
mod raw {
    use super::*;

    pub(super) fn window(_: &Window) -> HandleResult<RawWindowHandle> {
        Err(HandleError::NotSupported)
    }

    pub(super) fn display() -> HandleResult<RawDisplayHandle> {
        Err(HandleError::NotSupported)
    }
}

type HandleResult<T> = std::result::Result<T, HandleError>;

/// A backend accessor failed at run time, usually because GLFW runs on
/// another platform than the exposed one.
#[cfg(any(x11_platform, wayland_platform, win32_platform, cocoa_platform))]
fn unavailable(err: Error) -> HandleError {
    log::debug!("native handle unavailable: {err}");
    HandleError::Unavailable
}

impl Window {
    /// The native window handle of the running platform.
    ///
    /// Fails with [`HandleError::NotSupported`] when the build exposes no
    /// windowing backend with a `raw-window-handle` variant, and with
    /// [`HandleError::Unavailable`] when GLFW runs on another platform.
    pub fn raw_window_handle(&self) -> HandleResult<RawWindowHandle> {
        raw::window(self)
    }
}

impl Glfw {
    /// The native display handle of the running platform, failing like
    /// [`Window::raw_window_handle`].
    pub fn raw_display_handle(&self) -> HandleResult<RawDisplayHandle> {
        raw::display()
    }
}

impl HasWindowHandle for Window {
    fn window_handle(&self) -> HandleResult<WindowHandle<'_>> {
        let raw = self.raw_window_handle()?;
        // SAFETY: the handle stays valid until the window is dropped.
        Ok(unsafe { WindowHandle::borrow_raw(raw) })
    }
}

impl HasDisplayHandle for Window {
    fn display_handle(&self) -> HandleResult<DisplayHandle<'_>> {
        let raw = raw::display()?;
        // SAFETY: the window keeps the library, and with it the connection,
        // alive.
        Ok(unsafe { DisplayHandle::borrow_raw(raw) })
    }
}

impl HasDisplayHandle for Glfw {
    fn display_handle(&self) -> HandleResult<DisplayHandle<'_>> {
        let raw = self.raw_display_handle()?;
        // SAFETY: the connection lives until GLFW terminates.
        Ok(unsafe { DisplayHandle::borrow_raw(raw) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::{InitHint, Platform};
    use crate::window::{ClientApi, WindowHint};

    const NOT_SUPPORTED: &str = "not supported";
    const UNAVAILABLE: &str = "unavailable";

    fn outcome<T>(result: HandleResult<T>) -> &'static str {
        match result {
            Ok(_) => "ok",
            Err(HandleError::NotSupported) => NOT_SUPPORTED,
            Err(HandleError::Unavailable) => UNAVAILABLE,
            Err(_) => "other",
        }
    }

    #[test]
    fn handles_on_the_null_platform() {
        let glfw = Glfw::init(&[InitHint::Platform(Platform::Null)]).unwrap();
        let window = glfw
            .create_window(&[WindowHint::ClientApi(ClientApi::None)], 64, 64, "handles", None, None)
            .unwrap();

        let expected =
            if cfg!(any(x11_platform, wayland_platform, win32_platform, cocoa_platform)) {
                UNAVAILABLE
            } else {
                NOT_SUPPORTED
            };
        assert_eq!(outcome(window.raw_window_handle()), expected);
        assert_eq!(outcome(window.window_handle()), expected);

        // Win32 and AppKit display handles carry no connection.
        if !cfg!(any(win32_platform, cocoa_platform)) {
            assert_eq!(outcome(glfw.raw_display_handle()), expected);
            assert_eq!(outcome(window.display_handle()), expected);
            assert_eq!(outcome(glfw.display_handle()), expected);
        }
    }

    #[cfg(any(x11_platform, wayland_platform, win32_platform, cocoa_platform))]
    #[test]
    fn glfw_errors_are_unavailable() {
        // GLFW's own "feature unavailable" is a run time failure, not a build
        // without a matching backend.
        let err = Error::from(ErrorKind::FeatureUnavailable);
        assert_eq!(outcome::<()>(Err(unavailable(err))), UNAVAILABLE);
        let err = Error::from(ErrorKind::PlatformUnavailable);
        assert_eq!(outcome::<()>(Err(unavailable(err))), UNAVAILABLE);
    }

    #[cfg(x11_platform)]
    #[test]
    fn xlib_handles() {
        assert_eq!(raw::xlib_window(sys::Window(0)), None);
        match raw::xlib_window(sys::Window(0x1e00003)) {
            Some(RawWindowHandle::Xlib(handle)) => assert_eq!(handle.window, 0x1e00003),
            other => panic!("{other:?}"),
        }

        let mut fake = 0_u8;
        let display = NonNull::from(&mut fake).cast::<sys::Display>();
        match raw::xlib_display(display) {
            RawDisplayHandle::Xlib(handle) => {
                assert_eq!(handle.display, Some(display.cast()));
                assert_eq!(handle.screen, 0);
            },
            other => panic!("{other:?}"),
        }
    }
}
