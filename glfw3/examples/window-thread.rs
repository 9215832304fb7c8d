use std::ptr;
use std::thread;
use std::time::Duration;

use glfw3::{sys, Event, Glfw, WindowEvent, WindowId};

mod support;

use support::Gl;

fn main() {
    simple_logger::init().unwrap();

    let glfw = Glfw::init(&[]).unwrap();
    let window = glfw.create_window(&[], 800, 600, "Rendering thread", None, None).unwrap();

    // The window itself can't leave this thread, its id can.
    let window_id = window.window_id();
    let render_thread = thread::spawn(move || render(window_id));

    let mut running = true;
    while running {
        glfw.wait_events_timeout(Duration::from_secs(1), &mut |_time, event| match event {
            Event::Window(id, WindowEvent::Close) if id == window_id => running = false,
            Event::Window(_, WindowEvent::Pos(..) | WindowEvent::CursorPos(..)) => (),
            event => println!("{event:?}"),
        })
        .unwrap();
    }

    render_thread.join().unwrap();
}

/// Draws until the window is asked to close. GLFW allows the context, swap
/// and should-close functions on any thread.
fn render(window_id: WindowId) {
    let window = window_id.window_ptr();
    unsafe {
        sys::glfwMakeContextCurrent(window);
        match Gl::load() {
            Some(gl) => {
                while sys::glfwWindowShouldClose(window) == sys::GLFW_FALSE {
                    gl.draw(sys::glfwGetTime());
                    sys::glfwSwapBuffers(window);
                }
            },
            None => println!("No GL functions in the window context"),
        }
        sys::glfwMakeContextCurrent(ptr::null_mut());
    }
}
