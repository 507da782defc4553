//! SDL2 and OpenGL application setup.
//!
//! This module defines the [`App`] struct which owns the SDL2 handles and
//! the loaded OpenGL context that every chapter program starts from.

use std::sync::Arc;

use glow::HasContext;
use log::{info, warn};

use crate::config::Settings;

/// The [`App`] struct owns the SDL2 handles and the loaded OpenGL context.
pub struct App {
    pub sdl: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_context: sdl2::video::GLContext,
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
}

impl App {
    /// Creates a resizable window with a core-profile OpenGL 3.3 context and
    /// loads the GL function pointers through SDL2's `gl_get_proc_address`.
    ///
    /// The width and height in `settings` are ignored when `fullscreen` is
    /// set; the desktop resolution is used instead.
    pub fn new(title: &str, settings: &Settings) -> Result<Self, String> {
        let sdl = sdl2::init()?;
        let video_subsystem = sdl.video()?;
        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(3, 3);

        let (width, height) = if settings.fullscreen {
            let display_mode = video_subsystem.current_display_mode(0)?;
            (display_mode.w as u32, display_mode.h as u32)
        } else {
            (settings.width, settings.height)
        };
        let mut window = video_subsystem
            .window(title, width, height)
            .opengl()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;
        if settings.fullscreen {
            window.set_fullscreen(sdl2::video::FullscreenType::Desktop)?;
        }

        let gl_context = window.gl_create_context()?;
        window.gl_make_current(&gl_context)?;
        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };

        let swap_interval = if settings.vsync {
            sdl2::video::SwapInterval::VSync
        } else {
            sdl2::video::SwapInterval::Immediate
        };
        if let Err(e) = video_subsystem.gl_set_swap_interval(swap_interval) {
            warn!("Could not set the swap interval: {}", e);
        }

        let event_pump = sdl.event_pump()?;
        let gl = Arc::new(gl);
        unsafe {
            info!(
                "OpenGL {} / {}",
                gl.get_parameter_string(glow::VERSION),
                gl.get_parameter_string(glow::RENDERER)
            );
        }

        Ok(Self {
            sdl,
            video_subsystem,
            window,
            gl_context,
            gl,
            event_pump,
        })
    }
}
