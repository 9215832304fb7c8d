//! Wayland handles and accessors.

use crate::ffi::glfw3::{opaque, GLFWmonitor, GLFWwindow};

opaque! {
    wl_display;
    wl_output;
    wl_surface;
}

extern "C" {
    pub fn glfwGetWaylandDisplay() -> *mut wl_display;
    pub fn glfwGetWaylandMonitor(monitor: *mut GLFWmonitor) -> *mut wl_output;
    pub fn glfwGetWaylandWindow(window: *mut GLFWwindow) -> *mut wl_surface;
}
