//! Monitors.

use std::ffi::CStr;
use std::rc::Rc;

use glfw3_sys as sys;

use crate::error::{Error, ErrorKind, Result};
use crate::init::Terminate;

/// Identifies a monitor in events, stable for as long as it's connected.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonitorId(pub(crate) usize);

impl MonitorId {
    pub(crate) fn from_ptr(monitor: *mut sys::GLFWmonitor) -> Self {
        Self(monitor as usize)
    }

    pub fn monitor_ptr(self) -> *mut sys::GLFWmonitor {
        self.0 as *mut _
    }
}

/// A video mode of a monitor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct VideoMode {
    pub width: i32,
    pub height: i32,
    pub red_bits: i32,
    pub green_bits: i32,
    pub blue_bits: i32,
    pub refresh_rate: i32,
}

impl From<sys::GLFWvidmode> for VideoMode {
    fn from(mode: sys::GLFWvidmode) -> Self {
        Self {
            width: mode.width,
            height: mode.height,
            red_bits: mode.redBits,
            green_bits: mode.greenBits,
            blue_bits: mode.blueBits,
            refresh_rate: mode.refreshRate,
        }
    }
}

/// A connected monitor.
///
/// The handle becomes dangling when the monitor is disconnected, which is
/// announced with [`MonitorEvent::Disconnected`].
///
/// [`MonitorEvent::Disconnected`]: crate::MonitorEvent::Disconnected
#[derive(Debug)]
pub struct Monitor {
    pub(crate) monitor_ptr: *mut sys::GLFWmonitor,
    _terminate: Rc<Terminate>,
}

impl Monitor {
    pub(crate) fn new(monitor_ptr: *mut sys::GLFWmonitor, terminate: &Rc<Terminate>) -> Self {
        Self { monitor_ptr, _terminate: Rc::clone(terminate) }
    }

    pub fn monitor_id(&self) -> MonitorId {
        MonitorId::from_ptr(self.monitor_ptr)
    }

    /// The human-readable name, not guaranteed to be unique.
    #[doc(alias = "glfwGetMonitorName")]
    pub fn get_name(&self) -> Result<String> {
        let name = unsafe { sys::glfwGetMonitorName(self.monitor_ptr) };
        if name.is_null() {
            return Err(Error::take_or(ErrorKind::Unknown));
        }
        Ok(unsafe { CStr::from_ptr(name) }.to_string_lossy().into_owned())
    }

    /// The position of the top-left corner on the virtual screen.
    #[doc(alias = "glfwGetMonitorPos")]
    pub fn get_pos(&self) -> Result<(i32, i32)> {
        let (mut x, mut y) = (0, 0);
        unsafe { sys::glfwGetMonitorPos(self.monitor_ptr, &mut x, &mut y) };
        Error::take().map(|_| (x, y))
    }

    /// The size in millimetres, zero when unknown.
    #[doc(alias = "glfwGetMonitorPhysicalSize")]
    pub fn get_physical_size(&self) -> Result<(i32, i32)> {
        let (mut width, mut height) = (0, 0);
        unsafe { sys::glfwGetMonitorPhysicalSize(self.monitor_ptr, &mut width, &mut height) };
        Error::take().map(|_| (width, height))
    }

    #[doc(alias = "glfwGetMonitorContentScale")]
    pub fn get_content_scale(&self) -> Result<(f32, f32)> {
        let (mut x, mut y) = (0.0, 0.0);
        unsafe { sys::glfwGetMonitorContentScale(self.monitor_ptr, &mut x, &mut y) };
        Error::take().map(|_| (x, y))
    }

    /// The area not covered by task bars and menu bars, as
    /// `(x, y, width, height)`.
    #[doc(alias = "glfwGetMonitorWorkarea")]
    pub fn get_workarea(&self) -> Result<(i32, i32, i32, i32)> {
        let (mut x, mut y, mut width, mut height) = (0, 0, 0, 0);
        unsafe {
            sys::glfwGetMonitorWorkarea(self.monitor_ptr, &mut x, &mut y, &mut width, &mut height)
        };
        Error::take().map(|_| (x, y, width, height))
    }

    #[doc(alias = "glfwGetVideoMode")]
    pub fn get_video_mode(&self) -> Result<VideoMode> {
        let mode = unsafe { sys::glfwGetVideoMode(self.monitor_ptr) };
        if mode.is_null() {
            return Err(Error::take_or(ErrorKind::PlatformError));
        }
        Ok(unsafe { *mode }.into())
    }

    /// Every video mode the monitor supports, sorted by ascending color depth
    /// and resolution.
    #[doc(alias = "glfwGetVideoModes")]
    pub fn get_video_modes(&self) -> Result<Vec<VideoMode>> {
        let mut count = 0;
        let modes = unsafe { sys::glfwGetVideoModes(self.monitor_ptr, &mut count) };
        if modes.is_null() {
            return Err(Error::take_or(ErrorKind::PlatformError));
        }
        let modes = unsafe { std::slice::from_raw_parts(modes, count as usize) };
        Ok(modes.iter().copied().map(VideoMode::from).collect())
    }
}
