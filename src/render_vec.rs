use std::{ffi::c_void, marker::PhantomData};

/// One vertex attribute: `components` values of type `ty`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlAttribute {
    pub components: i32,
    pub ty: GlType,
}

impl GlAttribute {
    pub const fn floats(components: i32) -> Self {
        Self {
            components,
            ty: GlType::Float,
        }
    }
    pub const fn byte_size(&self) -> usize {
        self.components as usize * self.ty.get_size()
    }
}

/// Describes how a value is laid out as interleaved vertex data.
///
/// Attributes are bound in order, the first one at location 0.
///
/// # Safety
/// You must ensure that `as_gl_bytes` and `LAYOUT` match each other in terms of byte layout.
/// If `LAYOUT` is `[floats(3)]`, `as_gl_bytes` must return a slice of 3 f32s.
pub unsafe trait GlLayout {
    const LAYOUT: &'static [GlAttribute];

    fn as_gl_bytes(&self) -> &[u8];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlType {
    Float,  // f32
    Double, // f64
}

impl GlType {
    pub const fn get_size(&self) -> usize {
        match *self {
            GlType::Double => std::mem::size_of::<f64>(),
            GlType::Float => std::mem::size_of::<f32>(),
        }
    }
    pub const fn gl_enum(&self) -> gl::types::GLenum {
        match *self {
            GlType::Double => gl::DOUBLE,
            GlType::Float => gl::FLOAT,
        }
    }
}

/// Byte buffer of interleaved vertices, ready for `glBufferData`.
#[derive(Clone)]
pub struct RenderVec<T: GlLayout> {
    inner: Vec<u8>,
    stride: usize,
    _phantom: PhantomData<T>,
}

impl<T: GlLayout> Default for RenderVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: GlLayout> RenderVec<T> {
    pub fn new() -> Self {
        let stride = T::LAYOUT.iter().map(GlAttribute::byte_size).sum();
        Self {
            inner: vec![],
            stride,
            _phantom: PhantomData,
        }
    }
    pub fn from_slice(slice: &[T]) -> Self {
        let mut ret = Self::new();
        ret.extend_from_slice(slice);
        ret
    }
    pub fn push(&mut self, value: &T) {
        self.inner.extend_from_slice(value.as_gl_bytes());
    }
    pub fn extend_from_slice(&mut self, slice: &[T]) {
        self.inner.reserve(slice.len() * self.stride);
        for value in slice {
            self.push(value);
        }
    }
    pub fn stride(&self) -> usize {
        self.stride
    }
    /// `(location, attribute, byte offset)` for every attribute of `T`.
    pub fn attribute_offsets(&self) -> impl Iterator<Item = (u32, GlAttribute, usize)> {
        T::LAYOUT
            .iter()
            .scan(0, |offset, attr| {
                let this = *offset;
                *offset += attr.byte_size();
                Some((*attr, this))
            })
            .enumerate()
            .map(|(idx, (attr, offset))| (idx as u32, attr, offset))
    }
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }
    pub fn gl_byte_size(&self) -> isize {
        // a Vec never holds more than isize::MAX bytes
        self.inner.len() as isize
    }
    /// Number of vertices held.
    pub fn gl_len(&self) -> i32 {
        if self.stride == 0 {
            return 0;
        }
        (self.inner.len() / self.stride) as i32
    }
    pub fn gl_data(&self) -> *const c_void {
        self.inner.as_ptr().cast()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair([f32; 2]);

    unsafe impl GlLayout for Pair {
        const LAYOUT: &'static [GlAttribute] = &[GlAttribute::floats(1), GlAttribute::floats(1)];
        fn as_gl_bytes(&self) -> &[u8] {
            unsafe { std::slice::from_raw_parts(self.0.as_ptr().cast(), 8) }
        }
    }

    #[test]
    fn stride_is_sum_of_attributes() {
        let vec: RenderVec<Pair> = RenderVec::new();
        assert_eq!(vec.stride(), 8);
        assert_eq!(vec.gl_len(), 0);
        assert_eq!(vec.gl_byte_size(), 0);
    }

    #[test]
    fn push_appends_native_endian_floats() {
        let mut vec = RenderVec::new();
        vec.push(&Pair([1.0, -2.5]));
        let mut expected = 1.0f32.to_ne_bytes().to_vec();
        expected.extend_from_slice(&(-2.5f32).to_ne_bytes());
        assert_eq!(vec.as_bytes(), expected.as_slice());
        assert_eq!(vec.gl_len(), 1);
    }

    #[test]
    fn counts_vertices_not_bytes() {
        let vec = RenderVec::from_slice(&[Pair([0.; 2]), Pair([1.; 2]), Pair([2.; 2])]);
        assert_eq!(vec.gl_len(), 3);
        assert_eq!(vec.gl_byte_size(), 24);
    }

    #[test]
    fn offsets_accumulate_in_order() {
        let vec: RenderVec<Pair> = RenderVec::new();
        let offsets: Vec<_> = vec.attribute_offsets().map(|(i, _, o)| (i, o)).collect();
        assert_eq!(offsets, vec![(0, 0), (1, 4)]);
    }

    #[test]
    fn double_attributes_are_wider() {
        assert_eq!(GlType::Double.get_size(), 8);
        let attr = GlAttribute {
            components: 3,
            ty: GlType::Double,
        };
        assert_eq!(attr.byte_size(), 24);
        assert_eq!(attr.ty.gl_enum(), gl::DOUBLE);
    }
}
