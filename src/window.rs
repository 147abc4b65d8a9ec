use std::{
    ffi::{c_char, c_void},
    ptr::null,
};

use log::{debug, info, Level};
use sdl2::{
    event::WindowEvent,
    video::{self, GLContext, SwapInterval},
};

use crate::{
    config::{Config, OPENGL_MAJOR_VER, OPENGL_MINOR_VER},
    error::Result,
};

/// Everything SDL hands back that has to outlive the render loop.
pub struct SdlHandles {
    pub sdl: sdl2::Sdl,
    pub video: sdl2::VideoSubsystem,
    pub window: video::Window,
    /// Dropping this destroys the GL context.
    pub gl_ctx: GLContext,
    pub main_id: u32,
}

/// Open the window, create a core profile context and load GL symbols.
pub fn init_sdl(config: &Config) -> Result<SdlHandles> {
    let sdl = sdl2::init()?;

    let video = sdl.video()?;
    video.gl_load_library_default()?;

    let gl_attr = video.gl_attr();
    {
        let mut flags = gl_attr.set_context_flags();
        flags.forward_compatible();
        if config.gl_debug {
            flags.debug();
        }
        flags.set();
    }
    gl_attr.set_context_major_version(OPENGL_MAJOR_VER);
    gl_attr.set_context_minor_version(OPENGL_MINOR_VER);
    gl_attr.set_context_profile(video::GLProfile::Core);

    let window = video
        .window(&config.title, config.width, config.height)
        .position_centered()
        .resizable()
        .allow_highdpi()
        .opengl()
        .build()?;

    let gl_ctx = window.gl_create_context()?;
    gl::load_with(|s| video.gl_get_proc_address(s).cast());

    let interval = if config.vsync {
        SwapInterval::VSync
    } else {
        SwapInterval::Immediate
    };
    if let Err(err) = video.gl_set_swap_interval(interval) {
        debug!("could not set swap interval: {err}");
    }

    info!(
        "created {}x{} window '{}', GL {}.{} core",
        config.width, config.height, config.title, OPENGL_MAJOR_VER, OPENGL_MINOR_VER
    );

    let main_id = window.id();
    Ok(SdlHandles {
        sdl,
        video,
        window,
        gl_ctx,
        main_id,
    })
}

/// Whether `event` means the framebuffer may have a new size.
///
/// The sizes carried by the event are in window coordinates, query
/// `Window::drawable_size` for the pixel size.
pub fn resizes_framebuffer(event: &WindowEvent) -> bool {
    // SDL sends SizeChanged for every resize, Resized only for external ones
    matches!(event, WindowEvent::SizeChanged(..))
}

/// Map a `GL_DEBUG_SEVERITY_*` value to a log level.
pub fn severity_level(severity: gl::types::GLenum) -> Level {
    match severity {
        gl::DEBUG_SEVERITY_HIGH => Level::Error,
        gl::DEBUG_SEVERITY_MEDIUM => Level::Warn,
        gl::DEBUG_SEVERITY_LOW => Level::Info,
        // DEBUG_SEVERITY_NOTIFICATION and anything unknown
        _ => Level::Debug,
    }
}

extern "system" fn gl_debug_output(
    _source: gl::types::GLenum,
    _output_type: gl::types::GLenum,
    id: gl::types::GLuint,
    severity: gl::types::GLenum,
    length: gl::types::GLsizei,
    message: *const c_char,
    _user_param: *mut c_void,
) {
    if message.is_null() {
        return;
    }
    let bytes = match usize::try_from(length) {
        // SAFETY: GL hands us `length` valid bytes.
        Ok(len) => unsafe { std::slice::from_raw_parts(message.cast::<u8>(), len) },
        // negative length means nul terminated
        Err(_) => unsafe { std::ffi::CStr::from_ptr(message) }.to_bytes(),
    };
    log::log!(
        target: "gl",
        severity_level(severity),
        "[{id}] {}",
        String::from_utf8_lossy(bytes)
    );
}

/// Route driver debug messages to the logger. Needs a debug context to
/// produce anything.
pub fn enable_debug_output() {
    unsafe {
        gl::Enable(gl::DEBUG_OUTPUT);
        gl::Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
        gl::DebugMessageCallback(Some(gl_debug_output), null());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_size_changes_touch_the_viewport() {
        assert!(resizes_framebuffer(&WindowEvent::SizeChanged(800, 600)));
        assert!(!resizes_framebuffer(&WindowEvent::Resized(800, 600)));
        assert!(!resizes_framebuffer(&WindowEvent::Moved(10, 10)));
        assert!(!resizes_framebuffer(&WindowEvent::Exposed));
    }

    #[test]
    fn severities_map_to_levels() {
        assert_eq!(severity_level(gl::DEBUG_SEVERITY_HIGH), Level::Error);
        assert_eq!(severity_level(gl::DEBUG_SEVERITY_MEDIUM), Level::Warn);
        assert_eq!(severity_level(gl::DEBUG_SEVERITY_LOW), Level::Info);
        assert_eq!(
            severity_level(gl::DEBUG_SEVERITY_NOTIFICATION),
            Level::Debug
        );
        assert_eq!(severity_level(0), Level::Debug);
    }
}
