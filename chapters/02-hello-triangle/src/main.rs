//! Chapter 2: compile the fixed shader pair, upload one triangle and draw it
//! every frame. A failed shader build is logged and the window keeps
//! clearing without it.

use glam::{Vec3, vec3};
use glow::HasContext;
use log::{error, warn};
use sdl2::keyboard::Keycode;

use glbook::{App, Mesh, Settings, Vertex};

#[derive(Clone, Copy)]
#[repr(C, packed)]
struct TriangleVertex {
    position: Vec3,
}

impl Vertex for TriangleVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = std::mem::size_of::<TriangleVertex>() as i32;

            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(0);
        }
    }
}

fn main() {
    glbook::logging::init(glbook::logging::level_from_env())
        .expect("Failed to initialize logging");

    let settings = Settings::load().unwrap_or_else(|e| {
        warn!("Ignoring unreadable settings: {}", e);
        Settings::default()
    });

    let mut app = match App::new("Hello Triangle", &settings) {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to create the window: {}", e);
            std::process::exit(1);
        }
    };

    let program = match glbook::shader_program!(triangle, app.gl) {
        Ok(program) => Some(program),
        Err(e) => {
            error!("Shader build failed, drawing nothing: {}", e);
            None
        }
    };

    let vertices = [
        TriangleVertex {
            position: vec3(-0.5, -0.5, 0.0),
        },
        TriangleVertex {
            position: vec3(0.5, -0.5, 0.0),
        },
        TriangleVertex {
            position: vec3(0.0, 0.5, 0.0),
        },
    ];
    let triangle = Mesh::new(&app.gl, &vertices, &[0, 1, 2], glow::TRIANGLES);

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
            app.gl.clear_color(0.2, 0.3, 0.3, 1.0);
            app.gl.clear(glow::COLOR_BUFFER_BIT);
        }

        if let Some(program) = &program {
            program.use_program();
            triangle.draw();
        }

        app.window.gl_swap_window();
    }
}
