use std::ffi::{c_char, c_int, c_void, CStr};
use std::ptr;
use std::slice;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use glfw3_sys as sys;

mod support;

use support::Gl;

/// Shared by the callbacks on the main thread and the render thread.
#[derive(Default)]
struct AppState {
    /// Held while a frame is drawn and while the window switches monitors.
    frame: Mutex<()>,
    /// Set from a framebuffer change until the next refresh.
    wait_for_refresh: AtomicBool,
    fullscreen: AtomicBool,
}

/// The window as handed to the render thread.
struct WindowPtr(*mut sys::GLFWwindow);

// The render thread only uses the context, swap and should-close functions,
// which GLFW allows on any thread.
unsafe impl Send for WindowPtr {}

impl WindowPtr {
    fn get(&self) -> *mut sys::GLFWwindow {
        self.0
    }
}

unsafe fn app_state<'a>(window: *mut sys::GLFWwindow) -> &'a AppState {
    &*(sys::glfwGetWindowUserPointer(window) as *const AppState)
}

unsafe extern "C" fn error_callback(code: c_int, description: *const c_char) {
    let description = CStr::from_ptr(description);
    eprintln!("GLFW error {code:#x}: {}", description.to_string_lossy());
}

unsafe extern "C" fn refresh_callback(window: *mut sys::GLFWwindow) {
    app_state(window).wait_for_refresh.store(false, Ordering::SeqCst);
}

unsafe extern "C" fn framebuffer_size_callback(
    window: *mut sys::GLFWwindow,
    _width: c_int,
    _height: c_int,
) {
    // Also runs inside `glfwSetWindowMonitor`, with the frame lock taken.
    app_state(window).wait_for_refresh.store(true, Ordering::SeqCst);
}

unsafe extern "C" fn key_callback(
    window: *mut sys::GLFWwindow,
    key: c_int,
    _scancode: c_int,
    action: c_int,
    _mods: c_int,
) {
    match (key, action) {
        (sys::GLFW_KEY_ESCAPE, sys::GLFW_PRESS) => {
            sys::glfwSetWindowShouldClose(window, sys::GLFW_TRUE)
        },
        (sys::GLFW_KEY_F, sys::GLFW_RELEASE) => toggle_fullscreen(window),
        _ => (),
    }
}

unsafe fn toggle_fullscreen(window: *mut sys::GLFWwindow) {
    let state = app_state(window);
    let _frame = state.frame.lock().unwrap_or_else(PoisonError::into_inner);
    state.wait_for_refresh.store(true, Ordering::SeqCst);

    let was_fullscreen = state.fullscreen.fetch_xor(true, Ordering::SeqCst);
    if was_fullscreen {
        sys::glfwSetWindowMonitor(window, ptr::null_mut(), 200, 200, 800, 600, sys::GLFW_DONT_CARE);
        return;
    }

    let monitor = sys::glfwGetPrimaryMonitor();
    match select_video_mode(monitor) {
        Some(mode) => {
            let (width, height) = (mode.width, mode.height);
            sys::glfwSetWindowMonitor(window, monitor, 0, 0, width, height, mode.refreshRate)
        },
        None => {
            eprintln!("No video mode to go full screen with");
            state.fullscreen.store(false, Ordering::SeqCst);
            state.wait_for_refresh.store(false, Ordering::SeqCst);
        },
    }
}

/// Picks the narrowest mode at the highest refresh rate, which keeps clear of
/// a camera housing at the top of the screen when there is one.
unsafe fn select_video_mode(monitor: *mut sys::GLFWmonitor) -> Option<sys::GLFWvidmode> {
    if monitor.is_null() {
        return None;
    }

    let mut count = 0;
    let modes = sys::glfwGetVideoModes(monitor, &mut count);
    if modes.is_null() {
        return None;
    }
    let modes = slice::from_raw_parts(modes, count as usize);

    let aspect_ratio = |mode: &sys::GLFWvidmode| mode.width as f32 / mode.height as f32;
    let max_refresh_rate = modes.iter().map(|mode| mode.refreshRate).max()?;
    let min_aspect_ratio = modes.iter().map(aspect_ratio).fold(f32::MAX, f32::min);
    modes
        .iter()
        .find(|mode| mode.refreshRate == max_refresh_rate && aspect_ratio(mode) == min_aspect_ratio)
        .copied()
}

fn render(window: WindowPtr, gl: Gl, state: Arc<AppState>) {
    let window = window.get();
    unsafe {
        sys::glfwMakeContextCurrent(window);
        while sys::glfwWindowShouldClose(window) == sys::GLFW_FALSE {
            if !draw(window, &gl, &state) {
                thread::sleep(Duration::from_millis(16));
            }
        }
        sys::glfwMakeContextCurrent(ptr::null_mut());
    }
}

/// Draws a frame unless the window waits for a refresh.
unsafe fn draw(window: *mut sys::GLFWwindow, gl: &Gl, state: &AppState) -> bool {
    let _frame = state.frame.lock().unwrap_or_else(PoisonError::into_inner);
    if state.wait_for_refresh.load(Ordering::SeqCst) {
        return false;
    }

    gl.draw(sys::glfwGetTime());
    sys::glfwSwapBuffers(window);
    true
}

fn main() {
    println!("GLFW native exposure: {}", sys::EXPOSURE);
    println!("Press F to toggle full screen, Escape to quit.");

    let state = Arc::new(AppState::default());

    unsafe {
        sys::glfwSetErrorCallback(Some(error_callback));
        assert_eq!(sys::glfwInit(), sys::GLFW_TRUE, "failed to initialize GLFW");

        let title = b"GLFW render thread\0";
        let window = sys::glfwCreateWindow(
            800,
            600,
            title.as_ptr().cast(),
            ptr::null_mut(),
            ptr::null_mut(),
        );
        assert!(!window.is_null(), "failed to create a window");

        // Load on this thread, then release the context for the render thread.
        sys::glfwMakeContextCurrent(window);
        let gl = Gl::load().expect("no GL functions in the window context");
        sys::glfwMakeContextCurrent(ptr::null_mut());

        sys::glfwSetWindowUserPointer(window, Arc::as_ptr(&state) as *mut c_void);
        sys::glfwSetWindowRefreshCallback(window, Some(refresh_callback));
        sys::glfwSetFramebufferSizeCallback(window, Some(framebuffer_size_callback));
        sys::glfwSetKeyCallback(window, Some(key_callback));

        let render_thread = {
            let window = WindowPtr(window);
            let state = Arc::clone(&state);
            thread::spawn(move || render(window, gl, state))
        };

        while sys::glfwWindowShouldClose(window) == sys::GLFW_FALSE {
            sys::glfwWaitEvents();
        }

        render_thread.join().expect("render thread panicked");

        sys::glfwDestroyWindow(window);
        sys::glfwTerminate();
    }
}
