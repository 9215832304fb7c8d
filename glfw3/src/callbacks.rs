//! Routing of GLFW callbacks to the handler of the running event call.
//!
//! GLFW only invokes callbacks from within `glfwPollEvents` and friends, on
//! the main thread. The handler passed to those calls is stored in a
//! thread-local slot for their duration and every callback forwards to it.

use std::cell::Cell;
use std::ffi::CStr;
use std::marker::PhantomData;
use std::path::PathBuf;

use glfw3_sys as sys;
use libc::{c_char, c_double, c_float, c_int, c_uint, c_void};

use crate::error::{Error, Result};
use crate::event::{Action, Event, Key, Modifiers, MonitorEvent, MouseButton, WindowEvent};
use crate::monitor::MonitorId;
use crate::window::WindowId;

type HandlerFn = unsafe fn(handler: *mut c_void, time: f64, event: Event);

thread_local! {
    static HANDLER: Cell<Option<(HandlerFn, *mut c_void)>> = const { Cell::new(None) };
}

/// Clears the handler slot when the event call returns.
pub(crate) struct UnsetHandlerGuard<'a, F> {
    _handler: PhantomData<&'a mut F>,
}

impl<F> Drop for UnsetHandlerGuard<'_, F> {
    fn drop(&mut self) {
        HANDLER.with(|slot| slot.set(None));
    }
}

pub(crate) fn set_handler<F>(handler: &mut F) -> UnsetHandlerGuard<'_, F>
where
    F: FnMut(f64, Event),
{
    unsafe fn trampoline<F>(handler: *mut c_void, time: f64, event: Event)
    where
        F: FnMut(f64, Event),
    {
        let handler = &mut *(handler as *mut F);
        handler(time, event)
    }

    let handler = handler as *mut F as *mut c_void;
    HANDLER.with(|slot| slot.set(Some((trampoline::<F> as HandlerFn, handler))));
    UnsetHandlerGuard { _handler: PhantomData }
}

fn dispatch(event: Event) {
    let time = unsafe { sys::glfwGetTime() };
    HANDLER.with(|slot| match slot.take() {
        Some((trampoline, handler)) => {
            // Taken out while running, so a callback fired from inside the
            // handler can't alias it.
            unsafe { trampoline(handler, time, event) };
            slot.set(Some((trampoline, handler)));
        },
        None => log::debug!("dropping event without a handler: {event:?}"),
    });
}

fn dispatch_window(window: *mut sys::GLFWwindow, event: WindowEvent) {
    dispatch(Event::Window(WindowId::from_ptr(window), event));
}

unsafe extern "C" fn window_pos_callback(window: *mut sys::GLFWwindow, x: c_int, y: c_int) {
    dispatch_window(window, WindowEvent::Pos(x, y));
}

unsafe extern "C" fn window_size_callback(
    window: *mut sys::GLFWwindow,
    width: c_int,
    height: c_int,
) {
    dispatch_window(window, WindowEvent::Size(width, height));
}

unsafe extern "C" fn window_close_callback(window: *mut sys::GLFWwindow) {
    dispatch_window(window, WindowEvent::Close);
}

unsafe extern "C" fn window_refresh_callback(window: *mut sys::GLFWwindow) {
    dispatch_window(window, WindowEvent::Refresh);
}

unsafe extern "C" fn window_focus_callback(window: *mut sys::GLFWwindow, focused: c_int) {
    dispatch_window(window, WindowEvent::Focus(focused == sys::GLFW_TRUE));
}

unsafe extern "C" fn window_iconify_callback(window: *mut sys::GLFWwindow, iconified: c_int) {
    dispatch_window(window, WindowEvent::Iconify(iconified == sys::GLFW_TRUE));
}

unsafe extern "C" fn window_maximize_callback(window: *mut sys::GLFWwindow, maximized: c_int) {
    dispatch_window(window, WindowEvent::Maximize(maximized == sys::GLFW_TRUE));
}

unsafe extern "C" fn framebuffer_size_callback(
    window: *mut sys::GLFWwindow,
    width: c_int,
    height: c_int,
) {
    dispatch_window(window, WindowEvent::FramebufferSize(width, height));
}

unsafe extern "C" fn content_scale_callback(
    window: *mut sys::GLFWwindow,
    xscale: c_float,
    yscale: c_float,
) {
    dispatch_window(window, WindowEvent::ContentScale(xscale, yscale));
}

unsafe extern "C" fn mouse_button_callback(
    window: *mut sys::GLFWwindow,
    button: c_int,
    action: c_int,
    mods: c_int,
) {
    match (MouseButton::try_from(button), Action::try_from(action)) {
        (Ok(button), Ok(action)) => {
            let mods = Modifiers::from_bits_truncate(mods);
            dispatch_window(window, WindowEvent::MouseButton(button, action, mods));
        },
        _ => log::warn!("ignoring unknown mouse button event: {button}, action {action}"),
    }
}

unsafe extern "C" fn cursor_pos_callback(window: *mut sys::GLFWwindow, x: c_double, y: c_double) {
    dispatch_window(window, WindowEvent::CursorPos(x, y));
}

unsafe extern "C" fn cursor_enter_callback(window: *mut sys::GLFWwindow, entered: c_int) {
    dispatch_window(window, WindowEvent::CursorEnter(entered == sys::GLFW_TRUE));
}

unsafe extern "C" fn scroll_callback(window: *mut sys::GLFWwindow, x: c_double, y: c_double) {
    dispatch_window(window, WindowEvent::Scroll(x, y));
}

unsafe extern "C" fn key_callback(
    window: *mut sys::GLFWwindow,
    key: c_int,
    scancode: c_int,
    action: c_int,
    mods: c_int,
) {
    match (Key::try_from(key), Action::try_from(action)) {
        (Ok(key), Ok(action)) => {
            let mods = Modifiers::from_bits_truncate(mods);
            dispatch_window(window, WindowEvent::Key(key, scancode, action, mods));
        },
        _ => log::warn!("ignoring unknown key event: key = {key}, action = {action}"),
    }
}

unsafe extern "C" fn char_callback(window: *mut sys::GLFWwindow, codepoint: c_uint) {
    dispatch_window(window, WindowEvent::Char(codepoint));
}

unsafe extern "C" fn char_mods_callback(
    window: *mut sys::GLFWwindow,
    codepoint: c_uint,
    mods: c_int,
) {
    let mods = Modifiers::from_bits_truncate(mods);
    dispatch_window(window, WindowEvent::CharModifiers(codepoint, mods));
}

unsafe extern "C" fn drop_callback(
    window: *mut sys::GLFWwindow,
    count: c_int,
    paths: *mut *const c_char,
) {
    let paths = if paths.is_null() {
        &[][..]
    } else {
        std::slice::from_raw_parts(paths, count.max(0) as usize)
    };

    let mut files = Vec::with_capacity(paths.len());
    for &path in paths {
        match CStr::from_ptr(path).to_str() {
            Ok(path) => files.push(PathBuf::from(path)),
            Err(err) => log::warn!("ignoring dropped file with a non UTF-8 path: {err}"),
        }
    }
    dispatch_window(window, WindowEvent::FileDrop(files));
}

unsafe extern "C" fn monitor_callback(monitor: *mut sys::GLFWmonitor, event: c_int) {
    let event = match event {
        sys::GLFW_CONNECTED => MonitorEvent::Connected,
        sys::GLFW_DISCONNECTED => MonitorEvent::Disconnected,
        event => {
            log::warn!("ignoring unknown monitor event {event:#x}");
            return;
        },
    };
    dispatch(Event::Monitor(MonitorId::from_ptr(monitor), event));
}

/// Routes the events of `window` to the handler.
pub(crate) unsafe fn set_window_callbacks(window: *mut sys::GLFWwindow) {
    sys::glfwSetWindowPosCallback(window, Some(window_pos_callback));
    sys::glfwSetWindowSizeCallback(window, Some(window_size_callback));
    sys::glfwSetWindowCloseCallback(window, Some(window_close_callback));
    sys::glfwSetWindowRefreshCallback(window, Some(window_refresh_callback));
    sys::glfwSetWindowFocusCallback(window, Some(window_focus_callback));
    sys::glfwSetWindowIconifyCallback(window, Some(window_iconify_callback));
    sys::glfwSetWindowMaximizeCallback(window, Some(window_maximize_callback));
    sys::glfwSetFramebufferSizeCallback(window, Some(framebuffer_size_callback));
    sys::glfwSetWindowContentScaleCallback(window, Some(content_scale_callback));
    sys::glfwSetMouseButtonCallback(window, Some(mouse_button_callback));
    sys::glfwSetCursorPosCallback(window, Some(cursor_pos_callback));
    sys::glfwSetCursorEnterCallback(window, Some(cursor_enter_callback));
    sys::glfwSetScrollCallback(window, Some(scroll_callback));
    sys::glfwSetKeyCallback(window, Some(key_callback));
    sys::glfwSetCharCallback(window, Some(char_callback));
    sys::glfwSetCharModsCallback(window, Some(char_mods_callback));
    sys::glfwSetDropCallback(window, Some(drop_callback));
}

/// Installs the callbacks not bound to a window.
pub(crate) fn set_global_callbacks() -> Result<()> {
    unsafe { sys::glfwSetMonitorCallback(Some(monitor_callback)) };
    Error::take()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::{Glfw, InitHint, Platform};

    #[test]
    fn events_reach_the_handler_only_while_set() {
        // Event timestamps come from the library clock.
        let _glfw = Glfw::init(&[InitHint::Platform(Platform::Null)]).unwrap();

        let mut events = Vec::new();
        let mut handler = |_: f64, event: Event| events.push(event);
        {
            let _guard = set_handler(&mut handler);
            dispatch_window(8 as *mut _, WindowEvent::Close);
            unsafe {
                key_callback(8 as *mut _, sys::GLFW_KEY_A, 30, sys::GLFW_PRESS, sys::GLFW_MOD_SHIFT)
            };
            // Unknown values are dropped.
            unsafe { key_callback(8 as *mut _, 1000, 0, sys::GLFW_PRESS, 0) };
            unsafe { monitor_callback(16 as *mut _, sys::GLFW_DISCONNECTED) };
        }
        dispatch_window(8 as *mut _, WindowEvent::Refresh);

        let window = WindowId(8);
        assert_eq!(
            events,
            [
                Event::Window(window, WindowEvent::Close),
                Event::Window(window, WindowEvent::Key(Key::A, 30, Action::Press, Modifiers::SHIFT)),
                Event::Monitor(MonitorId(16), MonitorEvent::Disconnected),
            ]
        );
    }
}
