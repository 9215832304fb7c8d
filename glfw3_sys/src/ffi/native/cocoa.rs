//! Cocoa handles and accessors.

use libc::c_uint;

use crate::ffi::glfw3::{opaque, GLFWmonitor, GLFWwindow};

opaque! {
    objc_object;
}

/// An Objective-C object, `NSWindow`, `NSView` or `NSOpenGLContext` here.
pub type id = *mut objc_object;

/// A CoreGraphics display id.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CGDirectDisplayID(pub c_uint);

extern "C" {
    pub fn glfwGetCocoaMonitor(monitor: *mut GLFWmonitor) -> CGDirectDisplayID;
    pub fn glfwGetCocoaWindow(window: *mut GLFWwindow) -> id;
    pub fn glfwGetCocoaView(window: *mut GLFWwindow) -> id;
}
