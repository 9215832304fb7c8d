use std::ffi::{c_char, c_int, c_void, CStr};
use std::ptr;

use glfw3_sys as sys;

mod support;

use support::Gl;

unsafe extern "C" fn error_callback(code: c_int, description: *const c_char) {
    let description = CStr::from_ptr(description);
    eprintln!("GLFW error {code:#x}: {}", description.to_string_lossy());
}

unsafe extern "C" fn refresh_callback(window: *mut sys::GLFWwindow) {
    let gl = &*(sys::glfwGetWindowUserPointer(window) as *const Gl);
    draw(window, gl);
}

unsafe fn draw(window: *mut sys::GLFWwindow, gl: &Gl) {
    gl.draw(sys::glfwGetTime());
    sys::glfwSwapBuffers(window);
}

fn main() {
    println!("GLFW native exposure: {}", sys::EXPOSURE);

    unsafe {
        sys::glfwSetErrorCallback(Some(error_callback));
        assert_eq!(sys::glfwInit(), sys::GLFW_TRUE, "failed to initialize GLFW");

        let title = b"GLFW window\0";
        let window = sys::glfwCreateWindow(
            800,
            600,
            title.as_ptr().cast(),
            ptr::null_mut(),
            ptr::null_mut(),
        );
        assert!(!window.is_null(), "failed to create a window");

        sys::glfwMakeContextCurrent(window);
        let gl = Gl::load().expect("no GL functions in the window context");

        // The callback finds the loader through the user pointer.
        sys::glfwSetWindowUserPointer(window, &gl as *const Gl as *mut c_void);
        sys::glfwSetWindowRefreshCallback(window, Some(refresh_callback));

        while sys::glfwWindowShouldClose(window) == sys::GLFW_FALSE {
            sys::glfwPollEvents();
            draw(window, &gl);
        }

        sys::glfwMakeContextCurrent(ptr::null_mut());
        sys::glfwDestroyWindow(window);
        sys::glfwTerminate();
    }
}
