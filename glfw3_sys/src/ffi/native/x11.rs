//! X11 handles and accessors.

use libc::c_char;

use super::xid;
use crate::ffi::glfw3::{opaque, GLFWmonitor, GLFWwindow};

opaque! {
    _XDisplay;
}

/// An Xlib connection.
pub type Display = _XDisplay;

xid! {
    /// A RandR CRTC, what GLFW calls the adapter of a monitor.
    RRCrtc;
    /// A RandR output.
    RROutput;
    Window;
}

extern "C" {
    pub fn glfwGetX11Display() -> *mut Display;
    pub fn glfwGetX11Adapter(monitor: *mut GLFWmonitor) -> RRCrtc;
    pub fn glfwGetX11Monitor(monitor: *mut GLFWmonitor) -> RROutput;
    pub fn glfwGetX11Window(window: *mut GLFWwindow) -> Window;
    pub fn glfwSetX11SelectionString(string: *const c_char);
    pub fn glfwGetX11SelectionString() -> *const c_char;
}
