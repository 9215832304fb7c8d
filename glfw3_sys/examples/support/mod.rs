//! GL loading for the examples, just enough to clear the window.

use std::ffi::CStr;
use std::mem;

use glfw3_sys as sys;

const GL_COLOR_BUFFER_BIT: u32 = 0x4000;

type ClearFn = unsafe extern "system" fn(mask: u32);
type ClearColorFn = unsafe extern "system" fn(red: f32, green: f32, blue: f32, alpha: f32);

pub struct Gl {
    clear: ClearFn,
    clear_color: ClearColorFn,
}

impl Gl {
    /// Loads the functions through the context current on this thread.
    ///
    /// # Safety
    ///
    /// A context must be current on the calling thread and stay alive for as
    /// long as the returned value is used.
    pub unsafe fn load() -> Option<Self> {
        let clear = proc_address(b"glClear\0")?;
        let clear_color = proc_address(b"glClearColor\0")?;
        Some(Self { clear: mem::transmute(clear), clear_color: mem::transmute(clear_color) })
    }

    /// Clears the current framebuffer with a color cycling over `time`.
    pub fn draw(&self, time: f64) {
        let time = 2.0 * time as f32;
        let red = time.sin();
        unsafe {
            (self.clear_color)(red, time.cos(), 1.0 - red, 1.0);
            (self.clear)(GL_COLOR_BUFFER_BIT);
        }
    }
}

unsafe fn proc_address(name: &[u8]) -> Option<unsafe extern "C" fn()> {
    let name = CStr::from_bytes_with_nul(name).ok()?;
    sys::glfwGetProcAddress(name.as_ptr())
}
