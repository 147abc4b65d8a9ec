use crate::render_vec::{GlAttribute, GlLayout};

/// A vertex as the shaders consume it.
///
/// If you're adding a field, update the `GlLayout` impl below!
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    /// Normalized device coordinates.
    pub pos: [f32; 3],
    /// RGBA.
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(pos: [f32; 3], color: [f32; 4]) -> Self {
        Self { pos, color }
    }
}

unsafe impl GlLayout for Vertex {
    const LAYOUT: &'static [GlAttribute] = &[
        // vPos
        GlAttribute::floats(3),
        // vCol
        GlAttribute::floats(4),
    ];

    fn as_gl_bytes(&self) -> &[u8] {
        // SAFETY:
        // Vertex is repr(C) and made only of f32s, so it has no padding
        // and is laid out exactly like [f32; 7].
        unsafe {
            std::slice::from_raw_parts(
                (self as *const Vertex).cast(),
                std::mem::size_of::<Vertex>(),
            )
        }
    }
}
