//! EGL handles and accessors.
//!
//! EGL declares all of these as `void*`. They get a tag each here so they
//! stay apart in Rust.

use libc::c_int;

use crate::ffi::glfw3::{opaque, GLFWwindow};

opaque! {
    __EGLDisplay;
    __EGLContext;
    __EGLSurface;
    __EGLConfig;
}

pub type EGLDisplay = *mut __EGLDisplay;
pub type EGLContext = *mut __EGLContext;
pub type EGLSurface = *mut __EGLSurface;
pub type EGLConfig = *mut __EGLConfig;

extern "C" {
    pub fn glfwGetEGLDisplay() -> EGLDisplay;
    pub fn glfwGetEGLContext(window: *mut GLFWwindow) -> EGLContext;
    pub fn glfwGetEGLSurface(window: *mut GLFWwindow) -> EGLSurface;
    pub fn glfwGetEGLConfig(window: *mut GLFWwindow, config: *mut EGLConfig) -> c_int;
}
