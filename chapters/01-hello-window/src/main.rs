//! Chapter 1: open a window with an OpenGL 3.3 core context and clear it to
//! a solid color every frame. Escape or the close button ends the program.

use glow::HasContext;
use log::{error, warn};
use sdl2::keyboard::Keycode;

use glbook::{App, Settings};

fn main() {
    glbook::logging::init(glbook::logging::level_from_env())
        .expect("Failed to initialize logging");

    let settings = Settings::load().unwrap_or_else(|e| {
        warn!("Ignoring unreadable settings: {}", e);
        Settings::default()
    });

    let mut app = match App::new("Hello Window", &settings) {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to create the window: {}", e);
            std::process::exit(1);
        }
    };

    'running: loop {
        for event in app.event_pump.poll_iter() {
            match event {
                sdl2::event::Event::Quit { .. } => break 'running,
                sdl2::event::Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                sdl2::event::Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(width, height),
                    ..
                } => unsafe {
                    app.gl.viewport(0, 0, width, height);
                },
                _ => {}
            }
        }

        unsafe {
            app.gl.clear_color(0.0, 0.145, 1.0, 1.0);
            app.gl.clear(glow::COLOR_BUFFER_BIT);
        }

        app.window.gl_swap_window();
    }
}
