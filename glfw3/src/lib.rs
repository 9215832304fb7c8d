//! Safe bindings to [GLFW] 3.4.
//!
//! Everything starts with [`Glfw::init`], which initializes the library for
//! as long as the returned [`Glfw`] or any [`Window`] or [`Monitor`] created
//! through it is alive. GLFW can only be initialized once per process at a
//! time and most of its functions must be called from the thread that
//! initialized it, so none of those types are [`Send`].
//!
//! Events are delivered while pumping the event queue, to the handler passed
//! to [`Glfw::poll_events`], [`Glfw::wait_events`] or
//! [`Glfw::wait_events_timeout`]:
//!
//! ```no_run
//! use glfw3::{Event, Glfw, WindowEvent};
//!
//! let glfw = Glfw::init(&[]).unwrap();
//! let window = glfw.create_window(&[], 640, 480, "glfw3", None, None).unwrap();
//! while !window.should_close() {
//!     glfw.wait_events(&mut |_time, event| {
//!         if let Event::Window(_, WindowEvent::Close) = event {
//!             println!("closing");
//!         }
//!     })
//!     .unwrap();
//! }
//! ```
//!
//! # Native handles
//!
//! The native handles behind GLFW objects are reachable through accessors
//! such as `Window::x11_window`, for the one windowing backend and the one
//! context API selected at build time with the crate features. See
//! [`sys::EXPOSURE`] for the selection of the current build and the
//! [`native`] module for the details. [`Window`] also implements the
//! `raw-window-handle` traits.
//!
//! [GLFW]: https://www.glfw.org

#![deny(rust_2018_idioms)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_debug_implementations)]

pub use glfw3_sys as sys;

mod callbacks;
pub mod error;
pub mod event;
mod init;
pub mod monitor;
pub mod native;
pub mod window;

pub use error::{CreateWindowError, Error, ErrorKind, InitError, Result, TryInitError};
pub use event::{
    Action, Codepoint, Event, Key, Modifiers, MonitorEvent, MouseButton, Scancode, WindowEvent,
};
pub use init::{AnglePlatformType, Glfw, InitHint, Platform, WaylandLibdecor};
pub use monitor::{Monitor, MonitorId, VideoMode};
#[cfg(osmesa_backend)]
pub use native::OsMesaBuffer;
pub use window::{
    ClientApi, ContextCreationApi, ContextReleaseBehavior, ContextRobustness, OpenGlProfile,
    Window, WindowHint, WindowId,
};
