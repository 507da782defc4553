//! Chapter 4: two triangles driven two different ways. The left one gets its
//! color and horizontal offset from uniforms updated every frame, the right
//! one interpolates a color baked into each vertex. Each shader pair builds
//! independently, so one failing still leaves the other on screen.

use std::time::Instant;

use glam::{Vec3, vec3, vec4};
use glow::HasContext;
use log::{error, warn};
use sdl2::keyboard::Keycode;

use glbook::{App, Mesh, Settings, ShaderProgram, Vertex};

#[derive(Clone, Copy)]
#[repr(C, packed)]
struct PlainVertex {
    position: Vec3,
}

impl Vertex for PlainVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = std::mem::size_of::<PlainVertex>() as i32;

            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(0);
        }
    }
}

#[derive(Clone, Copy)]
#[repr(C, packed)]
struct ColorVertex {
    position: Vec3,
    color: Vec3,
}

impl Vertex for ColorVertex {
    fn vertex_attribs(gl: &glow::Context) {
        unsafe {
            let stride = std::mem::size_of::<ColorVertex>() as i32;

            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
            gl.enable_vertex_attrib_array(0);

            gl.vertex_attrib_pointer_f32(
                1,
                3,
                glow::FLOAT,
                false,
                stride,
                3 * std::mem::size_of::<f32>() as i32,
            );
            gl.enable_vertex_attrib_array(1);
        }
    }
}

/// Green-channel pulse, kept inside `0.0..=1.0`.
fn pulse(t: f32) -> f32 {
    t.sin() / 2.0 + 0.5
}

/// Slow horizontal sway, kept inside `-0.1..=0.1`.
fn sway(t: f32) -> f32 {
    (t * 0.8).sin() * 0.1
}

fn build_program(name: &str, program: Result<ShaderProgram, String>) -> Option<ShaderProgram> {
    match program {
        Ok(program) => Some(program),
        Err(e) => {
            error!("Shader build for {} failed, skipping it: {}", name, e);
            None
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

    let mut app = match App::new("Shader Uniforms", &settings) {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to create the window: {}", e);
            std::process::exit(1);
        }
    };

    let pulse_program = build_program("pulse", glbook::shader_program!(pulse, app.gl));
    let color_program = build_program(
        "vertex_color",
        glbook::shader_program!(vertex_color, app.gl),
    );

    let left_vertices = [
        PlainVertex {
            position: vec3(-0.9, -0.5, 0.0),
        },
        PlainVertex {
            position: vec3(-0.1, -0.5, 0.0),
        },
        PlainVertex {
            position: vec3(-0.5, 0.5, 0.0),
        },
    ];
    let left = Mesh::new(&app.gl, &left_vertices, &[0, 1, 2], glow::TRIANGLES);

    let right_vertices = [
        ColorVertex {
            position: vec3(0.1, -0.5, 0.0),
            color: vec3(1.0, 0.0, 0.0),
        },
        ColorVertex {
            position: vec3(0.9, -0.5, 0.0),
            color: vec3(0.0, 1.0, 0.0),
        },
        ColorVertex {
            position: vec3(0.5, 0.5, 0.0),
            color: vec3(0.0, 0.0, 1.0),
        },
    ];
    let right = Mesh::new(&app.gl, &right_vertices, &[0, 1, 2], glow::TRIANGLES);

    let start = Instant::now();

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

        let t = start.elapsed().as_secs_f32();

        if let Some(program) = &pulse_program {
            program.use_program();
            program.set_uniform("u_color", vec4(0.0, pulse(t), 0.0, 1.0));
            program.set_uniform("u_offset", sway(t));
            left.draw();
        }

        if let Some(program) = &color_program {
            program.use_program();
            right.draw();
        }

        app.window.gl_swap_window();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_stays_in_unit_range() {
        for i in 0..1000 {
            let t = i as f32 * 0.1;
            let v = pulse(t);
            assert!((0.0..=1.0).contains(&v), "pulse({}) = {}", t, v);
        }
    }

    #[test]
    fn test_sway_stays_within_offset_bounds() {
        for i in 0..1000 {
            let t = i as f32 * 0.1;
            let v = sway(t);
            assert!(v.abs() <= 0.1, "sway({}) = {}", t, v);
        }
    }
}
