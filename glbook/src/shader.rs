//! OpenGL shader compilation and linking.
//!
//! This module defines the [`Shader`] and [`ShaderProgram`] structs along
//! with the [`Uniform`] trait used to upload uniform values. Compile and
//! link failures carry the driver's info log in the error string.

use std::sync::Arc;

use glam::Vec4;
use glow::HasContext;

/// A single compiled OpenGL shader stage.
pub struct Shader {
    gl: Arc<glow::Context>,
    id: glow::Shader,
}

impl Shader {
    /// Compiles a shader of the given type (`glow::VERTEX_SHADER` or
    /// `glow::FRAGMENT_SHADER`) from GLSL source.
    ///
    /// Returns the driver's info log when the compile status check fails.
    pub fn new(gl: &Arc<glow::Context>, shader_type: u32, source: &str) -> Result<Self, String> {
        unsafe {
            let shader = gl.create_shader(shader_type).map_err(|e| e.to_string())?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            if !gl.get_shader_compile_status(shader) {
                let log = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);
                return Err(log);
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: shader,
            })
        }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_shader(self.id);
        }
    }
}

/// A value that can be uploaded to a named uniform in a shader program.
///
/// Setting a uniform the active program does not use is a no-op, mirroring
/// how drivers optimize unused uniforms away.
pub trait Uniform {
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str);
}

impl Uniform for f32 {
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str) {
        unsafe {
            if let Some(loc) = gl.get_uniform_location(program, name) {
                gl.uniform_1_f32(Some(&loc), *self);
            }
        }
    }
}

impl Uniform for Vec4 {
    fn set_uniform(&self, gl: &glow::Context, program: glow::Program, name: &str) {
        unsafe {
            if let Some(loc) = gl.get_uniform_location(program, name) {
                gl.uniform_4_f32(Some(&loc), self.x, self.y, self.z, self.w);
            }
        }
    }
}

/// A linked OpenGL shader program.
pub struct ShaderProgram {
    gl: Arc<glow::Context>,
    id: glow::Program,
}

impl ShaderProgram {
    /// Links the given shader stages into a program.
    ///
    /// The stages are detached after linking; they are deleted once the
    /// [`Shader`] values themselves are dropped.
    pub fn new(gl: &Arc<glow::Context>, shaders: &[&Shader]) -> Result<Self, String> {
        unsafe {
            let program = gl.create_program().map_err(|e| e.to_string())?;

            for shader in shaders {
                gl.attach_shader(program, shader.id);
            }

            gl.link_program(program);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(log);
            }

            for shader in shaders {
                gl.detach_shader(program, shader.id);
            }

            Ok(Self {
                gl: Arc::clone(gl),
                id: program,
            })
        }
    }

    /// Compiles a vertex/fragment source pair and links the two stages.
    ///
    /// This is the whole per-chapter shader pipeline in one call; the error
    /// string names the stage that failed.
    pub fn from_sources(
        gl: &Arc<glow::Context>,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<Self, String> {
        let vertex = Shader::new(gl, glow::VERTEX_SHADER, vertex_src)
            .map_err(|e| format!("vertex shader: {}", e))?;
        let fragment = Shader::new(gl, glow::FRAGMENT_SHADER, fragment_src)
            .map_err(|e| format!("fragment shader: {}", e))?;
        Self::new(gl, &[&vertex, &fragment]).map_err(|e| format!("program link: {}", e))
    }

    /// Binds the program for the upcoming draw calls.
    pub fn use_program(&self) {
        unsafe {
            self.gl.use_program(Some(self.id));
        }
    }

    /// Uploads a uniform value by name.
    pub fn set_uniform<T: Uniform>(&self, name: &str, value: T) {
        value.set_uniform(&self.gl, self.id, name);
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.id);
        }
    }
}

/// Builds a [`ShaderProgram`] from the `shaders/<name>/vert.glsl` and
/// `shaders/<name>/frag.glsl` pair next to the calling file, embedded at
/// compile time. The paths resolve relative to the invocation site, so call
/// this from a chapter's `src/main.rs`.
#[macro_export]
macro_rules! shader_program {
    ($name:ident, $gl:expr) => {
        $crate::shader::ShaderProgram::from_sources(
            &$gl,
            include_str!(concat!("shaders/", stringify!($name), "/vert.glsl")),
            include_str!(concat!("shaders/", stringify!($name), "/frag.glsl")),
        )
    };
}
