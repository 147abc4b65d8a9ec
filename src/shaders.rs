//! The fixed shader pair, plus CPU versions of its maths.

use std::ffi::CStr;

macro_rules! include_cstr {
    ( $path:literal $(,)? ) => {{
        // Use a constant to force the verification to run at compile time.
        const VALUE: &'static ::core::ffi::CStr = match ::core::ffi::CStr::from_bytes_with_nul(
            concat!(include_str!($path), "\0").as_bytes(),
        ) {
            Ok(value) => value,
            Err(_) => panic!(concat!("interior NUL byte(s) in `", $path, "`")),
        };
        VALUE
    }};
}

pub const VERT_SHADER_SOURCE: &CStr = include_cstr!("../glsl/vert_shader.glsl");
pub const FRAG_SHADER_SOURCE: &CStr = include_cstr!("../glsl/frag_shader.glsl");

/// Seconds since startup, shared by both stages.
pub const TIME_UNIFORM: &str = "_Time";

/// When false both stages pass the vertex data through untouched.
pub const ANIMATE_UNIFORM: &str = "_Animate";

/// What the vertex shader outputs for `pos`. `time` is `None` when
/// animation is off.
pub fn vertex_position(pos: [f32; 3], time: Option<f32>) -> [f32; 3] {
    match time {
        Some(t) => {
            let s = t.sin();
            [s.abs() * pos[0], 0.5 * s + pos[1], pos[2]]
        }
        None => pos,
    }
}

/// What the fragment shader outputs for an interpolated `color`.
pub fn fragment_color(color: [f32; 4], time: Option<f32>) -> [f32; 4] {
    match time {
        Some(t) => {
            let k = brightness(t);
            [k * color[0], k * color[1], k * color[2], color[3]]
        }
        None => color,
    }
}

/// Colour multiplier applied by the fragment shader at time `t`.
pub fn brightness(t: f32) -> f32 {
    (t.sin() * 2.0).abs()
}
