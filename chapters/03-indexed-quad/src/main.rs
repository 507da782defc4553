//! Chapter 3: draw a quad from four vertices and an index buffer instead of
//! six duplicated vertices. Tab toggles wireframe so the two triangles are
//! visible.

use glam::{Vec3, vec3};
use glow::HasContext;
use log::{error, info, warn};
use sdl2::keyboard::Keycode;

use glbook::{App, Mesh, Settings, Vertex};

#[derive(Clone, Copy)]
#[repr(C, packed)]
struct QuadVertex {
    position: Vec3,
}

impl Vertex for QuadVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = std::mem::size_of::<QuadVertex>() as i32;

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

    let mut app = match App::new("Indexed Quad", &settings) {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to create the window: {}", e);
            std::process::exit(1);
        }
    };

    let program = match glbook::shader_program!(quad, app.gl) {
        Ok(program) => Some(program),
        Err(e) => {
            error!("Shader build failed, drawing nothing: {}", e);
            None
        }
    };

    let vertices = [
        QuadVertex {
            position: vec3(-0.5, -0.5, 0.0),
        },
        QuadVertex {
            position: vec3(0.5, -0.5, 0.0),
        },
        QuadVertex {
            position: vec3(0.5, 0.5, 0.0),
        },
        QuadVertex {
            position: vec3(-0.5, 0.5, 0.0),
        },
    ];
    let quad = Mesh::new(&app.gl, &vertices, &[0, 1, 2, 0, 2, 3], glow::TRIANGLES);

    let mut wireframe = false;

    'running: loop {
        for event in app.event_pump.poll_iter() {
            match event {
                sdl2::event::Event::Quit { .. } => break 'running,
                sdl2::event::Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                sdl2::event::Event::KeyDown {
                    keycode: Some(Keycode::Tab),
                    ..
                } => {
                    wireframe = !wireframe;
                    let mode = if wireframe { glow::LINE } else { glow::FILL };
                    unsafe {
                        app.gl.polygon_mode(glow::FRONT_AND_BACK, mode);
                    }
                    info!("Wireframe {}", if wireframe { "on" } else { "off" });
                }
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
            app.gl.clear_color(0.1, 0.1, 0.2, 1.0);
            app.gl.clear(glow::COLOR_BUFFER_BIT);
        }

        if let Some(program) = &program {
            program.use_program();
            quad.draw();
        }

        app.window.gl_swap_window();
    }
}
