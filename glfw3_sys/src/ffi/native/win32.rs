//! Win32 handles and accessors.

use libc::c_char;

use crate::ffi::glfw3::{opaque, GLFWmonitor, GLFWwindow};

opaque! {
    HWND__;
}

pub type HWND = *mut HWND__;

extern "C" {
    /// The adapter device name, UTF-8 encoded.
    pub fn glfwGetWin32Adapter(monitor: *mut GLFWmonitor) -> *const c_char;
    /// The display device name, UTF-8 encoded.
    pub fn glfwGetWin32Monitor(monitor: *mut GLFWmonitor) -> *const c_char;
    pub fn glfwGetWin32Window(window: *mut GLFWwindow) -> HWND;
}
