use std::time::Duration;

use glfw3::{Action, ClientApi, Event, Glfw, InitHint, Key, Platform, WindowEvent, WindowHint};
use raw_window_handle::HasWindowHandle;

fn main() {
    simple_logger::init().unwrap();

    // `GLFW_NULL=1` runs the example without a display, for a few frames.
    let headless = std::env::var_os("GLFW_NULL").is_some();
    let (init_hints, window_hints) = if headless {
        (vec![InitHint::Platform(Platform::Null)], vec![WindowHint::ClientApi(ClientApi::None)])
    } else {
        (Vec::new(), vec![WindowHint::Resizable(true)])
    };

    let glfw = Glfw::init(&init_hints).unwrap();
    println!(
        "GLFW {} on {:?}, native exposure: {}",
        Glfw::version_string(),
        glfw.get_platform().unwrap(),
        glfw3::sys::EXPOSURE
    );

    let window =
        glfw.create_window(&window_hints, 640, 480, "A fantastic window!", None, None).unwrap();
    if let Err(err) = window.make_context_current() {
        println!("No context: {err}");
    }

    match window.window_handle() {
        Ok(handle) => println!("Native window: {:?}", handle.as_raw()),
        Err(err) => println!("No native window handle: {err}"),
    }

    let mut frames = 0;
    while !window.should_close() {
        glfw.wait_events_timeout(Duration::from_millis(100), &mut |time, event| {
            println!("{time:.3}: {event:?}");
            match event {
                Event::Window(_, WindowEvent::Key(Key::Escape, _, Action::Press, _)) => {
                    window.set_should_close(true)
                },
                Event::Window(_, WindowEvent::Refresh) => {
                    if let Err(err) = window.swap_buffers() {
                        println!("Failed to swap buffers: {err}");
                    }
                },
                _ => (),
            }
        })
        .unwrap();

        frames += 1;
        if headless && frames == 10 {
            window.set_should_close(true);
        }
    }
}
