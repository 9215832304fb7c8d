//! GLX handles and accessors.

use libc::c_int;

use super::xid;
use crate::ffi::glfw3::{opaque, GLFWwindow};

opaque! {
    __GLXcontextRec;
    __GLXFBConfigRec;
}

pub type GLXContext = *mut __GLXcontextRec;
pub type GLXFBConfig = *mut __GLXFBConfigRec;

xid! {
    GLXWindow;
}

extern "C" {
    pub fn glfwGetGLXContext(window: *mut GLFWwindow) -> GLXContext;
    pub fn glfwGetGLXWindow(window: *mut GLFWwindow) -> GLXWindow;
    pub fn glfwGetGLXFBConfig(window: *mut GLFWwindow, config: *mut GLXFBConfig) -> c_int;
}
