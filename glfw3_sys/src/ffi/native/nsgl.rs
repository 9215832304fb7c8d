use super::cocoa::id;
use crate::ffi::glfw3::GLFWwindow;

extern "C" {
    pub fn glfwGetNSGLContext(window: *mut GLFWwindow) -> id;
}
