//! Windows and their creation hints.

use std::ffi::{CStr, CString};
use std::ptr;
use std::rc::Rc;

use glfw3_sys as sys;

use crate::callbacks;
use crate::error::{CreateWindowError, Error, ErrorKind, Result};
use crate::event::{Action, Key, MouseButton};
use crate::init::{raw_bool, Glfw, Terminate};
use crate::monitor::Monitor;

/// Identifies a window in events.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub(crate) usize);

impl WindowId {
    pub(crate) fn from_ptr(window: *mut sys::GLFWwindow) -> Self {
        Self(window as usize)
    }

    pub fn window_ptr(self) -> *mut sys::GLFWwindow {
        self.0 as *mut _
    }
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientApi {
    OpenGl = sys::GLFW_OPENGL_API,
    OpenGlEs = sys::GLFW_OPENGL_ES_API,
    /// No context, for Vulkan or software rendering.
    None = sys::GLFW_NO_API,
}

/// Which API creates the context. Anything but [`Native`] needs the
/// matching library at runtime.
///
/// [`Native`]: ContextCreationApi::Native
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextCreationApi {
    Native = sys::GLFW_NATIVE_CONTEXT_API,
    Egl = sys::GLFW_EGL_CONTEXT_API,
    OsMesa = sys::GLFW_OSMESA_CONTEXT_API,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextRobustness {
    None = sys::GLFW_NO_ROBUSTNESS,
    NoResetNotification = sys::GLFW_NO_RESET_NOTIFICATION,
    LoseContextOnReset = sys::GLFW_LOSE_CONTEXT_ON_RESET,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextReleaseBehavior {
    Any = sys::GLFW_ANY_RELEASE_BEHAVIOR,
    Flush = sys::GLFW_RELEASE_BEHAVIOR_FLUSH,
    None = sys::GLFW_RELEASE_BEHAVIOR_NONE,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenGlProfile {
    Any = sys::GLFW_OPENGL_ANY_PROFILE,
    Core = sys::GLFW_OPENGL_CORE_PROFILE,
    Compat = sys::GLFW_OPENGL_COMPAT_PROFILE,
}

/// A hint applied before `glfwCreateWindow`, on top of the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowHint {
    Resizable(bool),
    Visible(bool),
    Decorated(bool),
    Focused(bool),
    AutoIconify(bool),
    Floating(bool),
    Maximized(bool),
    CenterCursor(bool),
    TransparentFramebuffer(bool),
    FocusOnShow(bool),
    ScaleToMonitor(bool),
    ScaleFramebuffer(bool),
    MousePassthrough(bool),
    PositionX(i32),
    PositionY(i32),
    RedBits(i32),
    GreenBits(i32),
    BlueBits(i32),
    AlphaBits(i32),
    DepthBits(i32),
    StencilBits(i32),
    AccumRedBits(i32),
    AccumGreenBits(i32),
    AccumBlueBits(i32),
    AccumAlphaBits(i32),
    AuxBuffers(i32),
    Samples(i32),
    RefreshRate(i32),
    Stereo(bool),
    SrgbCapable(bool),
    Doublebuffer(bool),
    ClientApi(ClientApi),
    ContextCreationApi(ContextCreationApi),
    ContextVersionMajor(i32),
    ContextVersionMinor(i32),
    ContextRobustness(ContextRobustness),
    ContextReleaseBehavior(ContextReleaseBehavior),
    ContextNoError(bool),
    OpenGlForwardCompat(bool),
    ContextDebug(bool),
    OpenGlProfile(OpenGlProfile),
}

impl WindowHint {
    pub fn none() -> &'static [WindowHint] {
        &[]
    }

    fn raw(&self) -> (i32, i32) {
        use WindowHint::*;
        match *self {
            Resizable(value) => (sys::GLFW_RESIZABLE, raw_bool(value)),
            Visible(value) => (sys::GLFW_VISIBLE, raw_bool(value)),
            Decorated(value) => (sys::GLFW_DECORATED, raw_bool(value)),
            Focused(value) => (sys::GLFW_FOCUSED, raw_bool(value)),
            AutoIconify(value) => (sys::GLFW_AUTO_ICONIFY, raw_bool(value)),
            Floating(value) => (sys::GLFW_FLOATING, raw_bool(value)),
            Maximized(value) => (sys::GLFW_MAXIMIZED, raw_bool(value)),
            CenterCursor(value) => (sys::GLFW_CENTER_CURSOR, raw_bool(value)),
            TransparentFramebuffer(value) => (sys::GLFW_TRANSPARENT_FRAMEBUFFER, raw_bool(value)),
            FocusOnShow(value) => (sys::GLFW_FOCUS_ON_SHOW, raw_bool(value)),
            ScaleToMonitor(value) => (sys::GLFW_SCALE_TO_MONITOR, raw_bool(value)),
            ScaleFramebuffer(value) => (sys::GLFW_SCALE_FRAMEBUFFER, raw_bool(value)),
            MousePassthrough(value) => (sys::GLFW_MOUSE_PASSTHROUGH, raw_bool(value)),
            PositionX(value) => (sys::GLFW_POSITION_X, value),
            PositionY(value) => (sys::GLFW_POSITION_Y, value),
            RedBits(value) => (sys::GLFW_RED_BITS, value),
            GreenBits(value) => (sys::GLFW_GREEN_BITS, value),
            BlueBits(value) => (sys::GLFW_BLUE_BITS, value),
            AlphaBits(value) => (sys::GLFW_ALPHA_BITS, value),
            DepthBits(value) => (sys::GLFW_DEPTH_BITS, value),
            StencilBits(value) => (sys::GLFW_STENCIL_BITS, value),
            AccumRedBits(value) => (sys::GLFW_ACCUM_RED_BITS, value),
            AccumGreenBits(value) => (sys::GLFW_ACCUM_GREEN_BITS, value),
            AccumBlueBits(value) => (sys::GLFW_ACCUM_BLUE_BITS, value),
            AccumAlphaBits(value) => (sys::GLFW_ACCUM_ALPHA_BITS, value),
            AuxBuffers(value) => (sys::GLFW_AUX_BUFFERS, value),
            Samples(value) => (sys::GLFW_SAMPLES, value),
            RefreshRate(value) => (sys::GLFW_REFRESH_RATE, value),
            Stereo(value) => (sys::GLFW_STEREO, raw_bool(value)),
            SrgbCapable(value) => (sys::GLFW_SRGB_CAPABLE, raw_bool(value)),
            Doublebuffer(value) => (sys::GLFW_DOUBLEBUFFER, raw_bool(value)),
            ClientApi(api) => (sys::GLFW_CLIENT_API, api as i32),
            ContextCreationApi(api) => (sys::GLFW_CONTEXT_CREATION_API, api as i32),
            ContextVersionMajor(value) => (sys::GLFW_CONTEXT_VERSION_MAJOR, value),
            ContextVersionMinor(value) => (sys::GLFW_CONTEXT_VERSION_MINOR, value),
            ContextRobustness(robustness) => (sys::GLFW_CONTEXT_ROBUSTNESS, robustness as i32),
            ContextReleaseBehavior(behavior) => (sys::GLFW_CONTEXT_RELEASE_BEHAVIOR, behavior as i32),
            ContextNoError(value) => (sys::GLFW_CONTEXT_NO_ERROR, raw_bool(value)),
            OpenGlForwardCompat(value) => (sys::GLFW_OPENGL_FORWARD_COMPAT, raw_bool(value)),
            ContextDebug(value) => (sys::GLFW_CONTEXT_DEBUG, raw_bool(value)),
            OpenGlProfile(profile) => (sys::GLFW_OPENGL_PROFILE, profile as i32),
        }
    }
}

impl Glfw {
    /// Creates a window and, unless [`ClientApi::None`] is hinted, its
    /// context.
    ///
    /// `monitor` makes the window full screen on it, `share` shares the
    /// context objects with the one of another window.
    #[doc(alias = "glfwCreateWindow")]
    #[doc(alias = "glfwWindowHint")]
    pub fn create_window<'a>(
        &self,
        hints: &'a [WindowHint],
        width: i32,
        height: i32,
        title: &str,
        monitor: Option<&Monitor>,
        share: Option<&Window>,
    ) -> std::result::Result<Window, CreateWindowError<'a>> {
        let title = CString::new(title).map_err(|_| CreateWindowError::Title)?;

        unsafe {
            sys::glfwDefaultWindowHints();
            Error::take().map_err(CreateWindowError::CreateWindow)?;
            for hint in hints {
                let (raw_hint, value) = hint.raw();
                sys::glfwWindowHint(raw_hint, value);
                Error::take().map_err(|err| CreateWindowError::Hint(hint, err))?;
            }

            let monitor = monitor.map_or(ptr::null_mut(), |monitor| monitor.monitor_ptr);
            let share = share.map_or(ptr::null_mut(), |window| window.window_ptr);
            let window_ptr = sys::glfwCreateWindow(width, height, title.as_ptr(), monitor, share);
            if window_ptr.is_null() {
                let err = Error::take_or(ErrorKind::PlatformError);
                return Err(CreateWindowError::CreateWindow(err));
            }

            callbacks::set_window_callbacks(window_ptr);
            Ok(Window { window_ptr, _terminate: Rc::clone(&self.terminate) })
        }
    }
}

/// A window with its optional context. Destroyed on drop.
#[derive(Debug)]
pub struct Window {
    pub(crate) window_ptr: *mut sys::GLFWwindow,
    _terminate: Rc<Terminate>,
}

impl Window {
    pub fn window_id(&self) -> WindowId {
        WindowId::from_ptr(self.window_ptr)
    }

    #[doc(alias = "glfwMakeContextCurrent")]
    pub fn make_context_current(&self) -> Result<()> {
        unsafe { sys::glfwMakeContextCurrent(self.window_ptr) };
        Error::take()
    }

    #[doc(alias = "glfwSwapBuffers")]
    pub fn swap_buffers(&self) -> Result<()> {
        unsafe { sys::glfwSwapBuffers(self.window_ptr) };
        Error::take()
    }

    #[doc(alias = "glfwWindowShouldClose")]
    pub fn should_close(&self) -> bool {
        unsafe { sys::glfwWindowShouldClose(self.window_ptr) == sys::GLFW_TRUE }
    }

    #[doc(alias = "glfwSetWindowShouldClose")]
    pub fn set_should_close(&self, value: bool) {
        unsafe { sys::glfwSetWindowShouldClose(self.window_ptr, raw_bool(value)) }
    }

    #[doc(alias = "glfwGetWindowTitle")]
    pub fn get_title(&self) -> Result<String> {
        let title = unsafe { sys::glfwGetWindowTitle(self.window_ptr) };
        if title.is_null() {
            return Err(Error::take_or(ErrorKind::Unknown));
        }
        Ok(unsafe { CStr::from_ptr(title) }.to_string_lossy().into_owned())
    }

    /// Sets the title. A title with a nul byte is an
    /// [`ErrorKind::InvalidValue`] and leaves the current one in place.
    #[doc(alias = "glfwSetWindowTitle")]
    pub fn set_title(&self, title: &str) -> Result<()> {
        let title = CString::new(title).map_err(|_| Error::from(ErrorKind::InvalidValue))?;
        unsafe { sys::glfwSetWindowTitle(self.window_ptr, title.as_ptr()) };
        Error::take()
    }

    /// The size of the content area, in screen coordinates.
    #[doc(alias = "glfwGetWindowSize")]
    pub fn get_size(&self) -> Result<(i32, i32)> {
        let (mut width, mut height) = (0, 0);
        unsafe { sys::glfwGetWindowSize(self.window_ptr, &mut width, &mut height) };
        Error::take().map(|_| (width, height))
    }

    #[doc(alias = "glfwSetWindowSize")]
    pub fn set_size(&self, width: i32, height: i32) -> Result<()> {
        unsafe { sys::glfwSetWindowSize(self.window_ptr, width, height) };
        Error::take()
    }

    /// The size of the framebuffer, in pixels.
    #[doc(alias = "glfwGetFramebufferSize")]
    pub fn get_framebuffer_size(&self) -> Result<(i32, i32)> {
        let (mut width, mut height) = (0, 0);
        unsafe { sys::glfwGetFramebufferSize(self.window_ptr, &mut width, &mut height) };
        Error::take().map(|_| (width, height))
    }

    #[doc(alias = "glfwGetWindowPos")]
    pub fn get_pos(&self) -> Result<(i32, i32)> {
        let (mut x, mut y) = (0, 0);
        unsafe { sys::glfwGetWindowPos(self.window_ptr, &mut x, &mut y) };
        Error::take().map(|_| (x, y))
    }

    #[doc(alias = "glfwSetWindowPos")]
    pub fn set_pos(&self, x: i32, y: i32) -> Result<()> {
        unsafe { sys::glfwSetWindowPos(self.window_ptr, x, y) };
        Error::take()
    }

    #[doc(alias = "glfwShowWindow")]
    pub fn show(&self) -> Result<()> {
        unsafe { sys::glfwShowWindow(self.window_ptr) };
        Error::take()
    }

    #[doc(alias = "glfwHideWindow")]
    pub fn hide(&self) -> Result<()> {
        unsafe { sys::glfwHideWindow(self.window_ptr) };
        Error::take()
    }

    #[doc(alias = "glfwFocusWindow")]
    pub fn focus(&self) -> Result<()> {
        unsafe { sys::glfwFocusWindow(self.window_ptr) };
        Error::take()
    }

    #[doc(alias = "glfwIconifyWindow")]
    pub fn iconify(&self) -> Result<()> {
        unsafe { sys::glfwIconifyWindow(self.window_ptr) };
        Error::take()
    }

    #[doc(alias = "glfwRestoreWindow")]
    pub fn restore(&self) -> Result<()> {
        unsafe { sys::glfwRestoreWindow(self.window_ptr) };
        Error::take()
    }

    #[doc(alias = "glfwMaximizeWindow")]
    pub fn maximize(&self) -> Result<()> {
        unsafe { sys::glfwMaximizeWindow(self.window_ptr) };
        Error::take()
    }

    /// The cursor position relative to the top-left corner of the content
    /// area.
    #[doc(alias = "glfwGetCursorPos")]
    pub fn get_cursor_pos(&self) -> Result<(f64, f64)> {
        let (mut x, mut y) = (0.0, 0.0);
        unsafe { sys::glfwGetCursorPos(self.window_ptr, &mut x, &mut y) };
        Error::take().map(|_| (x, y))
    }

    #[doc(alias = "glfwSetCursorPos")]
    pub fn set_cursor_pos(&self, x: f64, y: f64) -> Result<()> {
        unsafe { sys::glfwSetCursorPos(self.window_ptr, x, y) };
        Error::take()
    }

    /// The last state reported for `key`, either press or release.
    #[doc(alias = "glfwGetKey")]
    pub fn get_key(&self, key: Key) -> Result<Action> {
        let action = unsafe { sys::glfwGetKey(self.window_ptr, key as i32) };
        Error::take()?;
        Action::try_from(action).map_err(|_| ErrorKind::Unknown.into())
    }

    #[doc(alias = "glfwGetMouseButton")]
    pub fn get_mouse_button(&self, button: MouseButton) -> Result<Action> {
        let action = unsafe { sys::glfwGetMouseButton(self.window_ptr, button as i32) };
        Error::take()?;
        Action::try_from(action).map_err(|_| ErrorKind::Unknown.into())
    }

    #[doc(alias = "glfwGetClipboardString")]
    pub fn get_clipboard_string(&self) -> Result<String> {
        let string = unsafe { sys::glfwGetClipboardString(self.window_ptr) };
        if string.is_null() {
            return Err(Error::take_or(ErrorKind::FormatUnavailable));
        }
        Ok(unsafe { CStr::from_ptr(string) }.to_string_lossy().into_owned())
    }

    #[doc(alias = "glfwSetClipboardString")]
    pub fn set_clipboard_string(&self, string: &str) -> Result<()> {
        let string = CString::new(string).map_err(|_| Error::from(ErrorKind::InvalidValue))?;
        unsafe { sys::glfwSetClipboardString(self.window_ptr, string.as_ptr()) };
        Error::take()
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        unsafe { sys::glfwDestroyWindow(self.window_ptr) };
        if let Err(err) = Error::take() {
            log::warn!("glfwDestroyWindow failed: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::{InitHint, Platform};

    const NULL_PLATFORM: &[InitHint] = &[InitHint::Platform(Platform::Null)];

    #[test]
    fn window_on_null_platform() {
        let glfw = Glfw::init(NULL_PLATFORM).unwrap();
        let window = glfw
            .create_window(&[WindowHint::ClientApi(ClientApi::None)], 640, 480, "test", None, None)
            .unwrap();

        assert_eq!(window.get_title().unwrap(), "test");
        window.set_title("renamed").unwrap();
        assert_eq!(window.get_title().unwrap(), "renamed");
        assert!(!window.should_close());
        window.set_should_close(true);
        assert!(window.should_close());
        assert_eq!(window.get_key(Key::A).unwrap(), Action::Release);
    }

    #[test]
    fn title_with_nul_is_rejected() {
        let glfw = Glfw::init(NULL_PLATFORM).unwrap();
        let result = glfw.create_window(WindowHint::none(), 640, 480, "a\0b", None, None);
        assert!(matches!(result, Err(CreateWindowError::Title)));

        let window = glfw
            .create_window(&[WindowHint::ClientApi(ClientApi::None)], 640, 480, "test", None, None)
            .unwrap();
        let err = window.set_title("a\0b").unwrap_err();
        assert_eq!(err.error_kind(), ErrorKind::InvalidValue);
        assert_eq!(window.get_title().unwrap(), "test");
    }
}
