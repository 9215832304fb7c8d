//! Library initialization and the process-wide GLFW instance.

use std::ffi::CStr;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::{Mutex, MutexGuard, TryLockError};
use std::time::Duration;

use glfw3_sys as sys;
use once_cell::sync::Lazy;

use crate::callbacks;
use crate::error::{Error, ErrorKind, InitError, Result, TryInitError};
use crate::event::Event;
use crate::monitor::Monitor;

/// Held for as long as GLFW is initialized.
static INIT: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Terminates GLFW once the last handle referencing the library drops.
#[derive(Debug)]
pub(crate) struct Terminate {
    _init_guard: MutexGuard<'static, ()>,
    _not_send: PhantomData<*mut ()>,
}

impl Drop for Terminate {
    fn drop(&mut self) {
        unsafe { sys::glfwTerminate() };
        if let Err(err) = Error::take() {
            log::warn!("glfwTerminate failed: {err}");
        }
    }
}

/// The windowing platform GLFW runs on.
#[repr(i32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum Platform {
    /// Let GLFW pick the first platform that works, only valid as a hint.
    Any = sys::GLFW_ANY_PLATFORM,
    Win32 = sys::GLFW_PLATFORM_WIN32,
    Cocoa = sys::GLFW_PLATFORM_COCOA,
    Wayland = sys::GLFW_PLATFORM_WAYLAND,
    X11 = sys::GLFW_PLATFORM_X11,
    /// Headless platform without any windowing system, always available.
    Null = sys::GLFW_PLATFORM_NULL,
}

impl TryFrom<i32> for Platform {
    type Error = i32;

    fn try_from(value: i32) -> std::result::Result<Self, Self::Error> {
        match value {
            sys::GLFW_ANY_PLATFORM => Ok(Self::Any),
            sys::GLFW_PLATFORM_WIN32 => Ok(Self::Win32),
            sys::GLFW_PLATFORM_COCOA => Ok(Self::Cocoa),
            sys::GLFW_PLATFORM_WAYLAND => Ok(Self::Wayland),
            sys::GLFW_PLATFORM_X11 => Ok(Self::X11),
            sys::GLFW_PLATFORM_NULL => Ok(Self::Null),
            value => Err(value),
        }
    }
}

#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum WaylandLibdecor {
    Prefer,
    Disable,
}

/// The rendering backend ANGLE uses for OpenGL ES contexts.
#[repr(i32)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum AnglePlatformType {
    None = sys::GLFW_ANGLE_PLATFORM_TYPE_NONE,
    OpenGl = sys::GLFW_ANGLE_PLATFORM_TYPE_OPENGL,
    OpenGlEs = sys::GLFW_ANGLE_PLATFORM_TYPE_OPENGLES,
    D3D9 = sys::GLFW_ANGLE_PLATFORM_TYPE_D3D9,
    D3D11 = sys::GLFW_ANGLE_PLATFORM_TYPE_D3D11,
    Vulkan = sys::GLFW_ANGLE_PLATFORM_TYPE_VULKAN,
    Metal = sys::GLFW_ANGLE_PLATFORM_TYPE_METAL,
}

/// A hint applied before `glfwInit`.
///
/// Hints not given keep their documented default, even when an earlier
/// instance set them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InitHint {
    Platform(Platform),
    JoystickHatButtons(bool),
    AnglePlatformType(AnglePlatformType),
    CocoaChdirResources(bool),
    CocoaMenubar(bool),
    WaylandLibdecor(WaylandLibdecor),
    X11XcbVulkanSurface(bool),
}

impl InitHint {
    /// The defaults of GLFW 3.4.
    const DEFAULTS: &'static [InitHint] = &[
        InitHint::Platform(Platform::Any),
        InitHint::JoystickHatButtons(true),
        InitHint::AnglePlatformType(AnglePlatformType::None),
        InitHint::CocoaChdirResources(true),
        InitHint::CocoaMenubar(true),
        InitHint::WaylandLibdecor(WaylandLibdecor::Prefer),
        InitHint::X11XcbVulkanSurface(true),
    ];

    pub fn none() -> &'static [InitHint] {
        &[]
    }

    fn raw(&self) -> (i32, i32) {
        match *self {
            Self::Platform(platform) => (sys::GLFW_PLATFORM, platform as i32),
            Self::JoystickHatButtons(value) => (sys::GLFW_JOYSTICK_HAT_BUTTONS, raw_bool(value)),
            Self::AnglePlatformType(kind) => (sys::GLFW_ANGLE_PLATFORM_TYPE, kind as i32),
            Self::CocoaChdirResources(value) => (sys::GLFW_COCOA_CHDIR_RESOURCES, raw_bool(value)),
            Self::CocoaMenubar(value) => (sys::GLFW_COCOA_MENUBAR, raw_bool(value)),
            Self::WaylandLibdecor(WaylandLibdecor::Prefer) => {
                (sys::GLFW_WAYLAND_LIBDECOR, sys::GLFW_WAYLAND_PREFER_LIBDECOR)
            },
            Self::WaylandLibdecor(WaylandLibdecor::Disable) => {
                (sys::GLFW_WAYLAND_LIBDECOR, sys::GLFW_WAYLAND_DISABLE_LIBDECOR)
            },
            Self::X11XcbVulkanSurface(value) => (sys::GLFW_X11_XCB_VULKAN_SURFACE, raw_bool(value)),
        }
    }
}

pub(crate) fn raw_bool(value: bool) -> i32 {
    if value {
        sys::GLFW_TRUE
    } else {
        sys::GLFW_FALSE
    }
}

/// The initialized library.
///
/// Only one instance exists per process at a time. Windows and monitors keep
/// the library alive, so it's terminated when the last of them and the
/// [`Glfw`] itself are gone.
#[derive(Debug)]
pub struct Glfw {
    pub(crate) terminate: Rc<Terminate>,
}

fn initialize<'a>(
    hints: &'a [InitHint],
    init_guard: MutexGuard<'static, ()>,
) -> std::result::Result<Glfw, InitError<'a>> {
    unsafe {
        for hint in InitHint::DEFAULTS {
            let (hint, value) = hint.raw();
            sys::glfwInitHint(hint, value);
        }
        if let Err(err) = Error::take() {
            log::debug!("failed to reset init hints: {err}");
        }
        for hint in hints {
            let (raw_hint, value) = hint.raw();
            sys::glfwInitHint(raw_hint, value);
            Error::take().map_err(|err| InitError::Hint(hint, err))?;
        }

        if sys::glfwInit() != sys::GLFW_TRUE {
            return Err(InitError::Init(Error::take_or(ErrorKind::PlatformError)));
        }
    }

    // Terminates GLFW again if installing the callbacks fails.
    let terminate = Terminate { _init_guard: init_guard, _not_send: PhantomData };
    let glfw = Glfw { terminate: Rc::new(terminate) };
    callbacks::set_global_callbacks().map_err(InitError::Init)?;

    log::debug!("initialized GLFW {} on {:?}", Glfw::version_string(), glfw.get_platform());
    Ok(glfw)
}

impl Glfw {
    /// Initializes GLFW, waiting for a live instance on another thread to be
    /// dropped first.
    #[doc(alias = "glfwInit")]
    #[doc(alias = "glfwInitHint")]
    pub fn init(hints: &[InitHint]) -> std::result::Result<Glfw, InitError<'_>> {
        let init_guard = INIT.lock().map_err(|_| InitError::Poisoned)?;
        initialize(hints, init_guard)
    }

    /// Initializes GLFW unless an instance is alive.
    #[doc(alias = "glfwInit")]
    #[doc(alias = "glfwInitHint")]
    pub fn try_init(hints: &[InitHint]) -> std::result::Result<Glfw, TryInitError<'_>> {
        let init_guard = INIT.try_lock().map_err(|err| match err {
            TryLockError::Poisoned(_) => TryInitError::InitError(InitError::Poisoned),
            TryLockError::WouldBlock => TryInitError::WouldBlock,
        })?;
        Ok(initialize(hints, init_guard)?)
    }

    /// The last error GLFW reported on this thread, clearing it.
    #[doc(alias = "glfwGetError")]
    pub fn get_error() -> Result<()> {
        Error::take()
    }

    /// The version of the linked library.
    #[doc(alias = "glfwGetVersion")]
    pub fn get_version() -> (i32, i32, i32) {
        let (mut major, mut minor, mut revision) = (0, 0, 0);
        unsafe { sys::glfwGetVersion(&mut major, &mut minor, &mut revision) };
        (major, minor, revision)
    }

    /// The compile-time configuration of the linked library.
    #[doc(alias = "glfwGetVersionString")]
    pub fn version_string() -> String {
        unsafe { CStr::from_ptr(sys::glfwGetVersionString()) }.to_string_lossy().into_owned()
    }

    #[doc(alias = "glfwPlatformSupported")]
    pub fn platform_supported(platform: Platform) -> bool {
        unsafe { sys::glfwPlatformSupported(platform as i32) == sys::GLFW_TRUE }
    }

    /// The platform GLFW picked at initialization.
    #[doc(alias = "glfwGetPlatform")]
    pub fn get_platform(&self) -> Result<Platform> {
        let raw = unsafe { sys::glfwGetPlatform() };
        Error::take()?;
        Platform::try_from(raw).map_err(|raw| {
            log::warn!("unknown GLFW platform {raw:#x}");
            ErrorKind::Unknown.into()
        })
    }

    /// Seconds since initialization, unless changed with [`Glfw::set_time`].
    #[doc(alias = "glfwGetTime")]
    pub fn get_time(&self) -> f64 {
        unsafe { sys::glfwGetTime() }
    }

    #[doc(alias = "glfwSetTime")]
    pub fn set_time(&self, time: f64) -> Result<()> {
        unsafe { sys::glfwSetTime(time) };
        Error::take()
    }

    #[doc(alias = "glfwVulkanSupported")]
    pub fn vulkan_supported(&self) -> bool {
        unsafe { sys::glfwVulkanSupported() == sys::GLFW_TRUE }
    }

    /// The connected monitors, the primary one first.
    #[doc(alias = "glfwGetMonitors")]
    pub fn get_monitors(&self) -> Result<Vec<Monitor>> {
        let mut count = 0;
        let monitors = unsafe { sys::glfwGetMonitors(&mut count) };
        Error::take()?;
        if monitors.is_null() {
            return Ok(Vec::new());
        }

        let monitors = unsafe { std::slice::from_raw_parts(monitors, count as usize) };
        Ok(monitors.iter().map(|&monitor| Monitor::new(monitor, &self.terminate)).collect())
    }

    #[doc(alias = "glfwGetPrimaryMonitor")]
    pub fn get_primary_monitor(&self) -> Result<Option<Monitor>> {
        let monitor = unsafe { sys::glfwGetPrimaryMonitor() };
        Error::take()?;
        Ok((!monitor.is_null()).then(|| Monitor::new(monitor, &self.terminate)))
    }

    /// Processes pending events, passing each to `handler`.
    #[doc(alias = "glfwPollEvents")]
    pub fn poll_events<F>(&self, handler: &mut F) -> Result<()>
    where
        F: FnMut(f64, Event),
    {
        let _unset_handler = callbacks::set_handler(handler);
        unsafe { sys::glfwPollEvents() };
        Error::take()
    }

    /// Waits until at least one event arrives, then processes it like
    /// [`Glfw::poll_events`].
    #[doc(alias = "glfwWaitEvents")]
    pub fn wait_events<F>(&self, handler: &mut F) -> Result<()>
    where
        F: FnMut(f64, Event),
    {
        let _unset_handler = callbacks::set_handler(handler);
        unsafe { sys::glfwWaitEvents() };
        Error::take()
    }

    #[doc(alias = "glfwWaitEventsTimeout")]
    pub fn wait_events_timeout<F>(&self, timeout: Duration, handler: &mut F) -> Result<()>
    where
        F: FnMut(f64, Event),
    {
        let _unset_handler = callbacks::set_handler(handler);
        unsafe { sys::glfwWaitEventsTimeout(timeout.as_secs_f64()) };
        Error::take()
    }

    /// Wakes up a thread blocked in [`Glfw::wait_events`].
    #[doc(alias = "glfwPostEmptyEvent")]
    pub fn post_empty_event(&self) -> Result<()> {
        unsafe { sys::glfwPostEmptyEvent() };
        Error::take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NULL_PLATFORM: &[InitHint] = &[InitHint::Platform(Platform::Null)];

    #[test]
    fn platform_codes() {
        for platform in [Platform::Win32, Platform::Cocoa, Platform::Wayland, Platform::X11, Platform::Null] {
            assert_eq!(Platform::try_from(platform as i32), Ok(platform));
        }
        assert_eq!(Platform::try_from(0), Err(0));
    }

    #[test]
    fn null_platform_is_supported() {
        assert!(Glfw::platform_supported(Platform::Null));
    }

    #[test]
    fn init_on_null_platform() {
        let glfw = Glfw::init(NULL_PLATFORM).unwrap();
        assert_eq!(glfw.get_platform().unwrap(), Platform::Null);
        assert!(glfw.get_time() >= 0.0);
    }

    #[test]
    fn one_instance_at_a_time() {
        let glfw = Glfw::init(NULL_PLATFORM).unwrap();
        assert!(matches!(Glfw::try_init(NULL_PLATFORM), Err(TryInitError::WouldBlock)));
        drop(glfw);
        // Tests run in parallel, another one may hold it by now.
        match Glfw::try_init(NULL_PLATFORM) {
            Ok(_) | Err(TryInitError::WouldBlock) => (),
            Err(err) => panic!("{err}"),
        }
    }

    #[test]
    fn version_is_3_4_or_newer() {
        let (major, minor, _) = Glfw::get_version();
        assert!((major, minor) >= (3, 4), "{major}.{minor}");
    }

    #[test]
    fn monitors_outlive_the_instance() {
        let glfw = Glfw::init(NULL_PLATFORM).unwrap();
        let monitors = glfw.get_monitors().unwrap();
        drop(glfw);
        for monitor in &monitors {
            assert!(!monitor.get_name().unwrap().is_empty());
        }
    }
}
