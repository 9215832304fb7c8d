use crate::ffi::glfw3::{opaque, GLFWwindow};

opaque! {
    HGLRC__;
}

pub type HGLRC = *mut HGLRC__;

extern "C" {
    pub fn glfwGetWGLContext(window: *mut GLFWwindow) -> HGLRC;
}
