//! OSMesa handles and accessors.
//!
//! OSMesa renders into memory, so it is also available without any
//! windowing backend on GLFW's null platform.

use libc::{c_int, c_void};

use crate::ffi::glfw3::{opaque, GLFWwindow};

opaque! {
    osmesa_context;
}

pub type OSMesaContext = *mut osmesa_context;

extern "C" {
    pub fn glfwGetOSMesaColorBuffer(
        window: *mut GLFWwindow,
        width: *mut c_int,
        height: *mut c_int,
        format: *mut c_int,
        buffer: *mut *mut c_void,
    ) -> c_int;
    pub fn glfwGetOSMesaDepthBuffer(
        window: *mut GLFWwindow,
        width: *mut c_int,
        height: *mut c_int,
        bytesPerValue: *mut c_int,
        buffer: *mut *mut c_void,
    ) -> c_int;
    pub fn glfwGetOSMesaContext(window: *mut GLFWwindow) -> OSMesaContext;
}
