use std::{ffi::CString, ptr::null};

use log::debug;

use super::{info_log_to_string, INFO_LOG_CAPACITY};
use crate::error::{Error, Result};

/// A shader object that has not been compiled yet.
pub struct Shader {
    /// GL ID for this shader.
    inner: gl::types::GLuint,
    /// Which pipeline stage this shader is for.
    shader_type: ShaderType,
    /// GLSL source, uploaded on compile.
    source: CString,
    /// Set once the GL object is owned by a `CompiledShader`.
    was_compiled: bool,
}

/// The pipeline stages this crate compiles shaders for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderType {
    Fragment,
    Vertex,
}

impl ShaderType {
    /// The `GL_*_SHADER` enum passed to `glCreateShader`.
    pub fn gl_enum(self) -> gl::types::GLenum {
        match self {
            ShaderType::Fragment => gl::FRAGMENT_SHADER,
            ShaderType::Vertex => gl::VERTEX_SHADER,
        }
    }
    /// Human readable stage name, used in error messages.
    pub fn stage_name(self) -> &'static str {
        match self {
            ShaderType::Fragment => "fragment",
            ShaderType::Vertex => "vertex",
        }
    }
}

impl Shader {
    /// Wrap shader source code into a type-safe Rust struct.
    ///
    /// Requires a current GL context, the shader object is created right away.
    pub fn new<T: Into<CString>>(shader_type: ShaderType, source: T) -> Self {
        let shader = unsafe { gl::CreateShader(shader_type.gl_enum()) };
        Self {
            inner: shader,
            shader_type,
            source: source.into(),
            was_compiled: false,
        }
    }
    /// Helper function for `Shader::new()` with vertex shaders.
    pub fn vertex<T: Into<CString>>(source: T) -> Self {
        Self::new(ShaderType::Vertex, source)
    }
    /// Helper function for `Shader::new()` with fragment shaders.
    pub fn fragment<T: Into<CString>>(source: T) -> Self {
        Self::new(ShaderType::Fragment, source)
    }

    /// Upload the source and compile it, returning the info log on failure.
    pub fn compile(mut self) -> Result<CompiledShader> {
        let compiled_shader = unsafe {
            gl::ShaderSource(self.inner, 1, &self.source.as_ptr(), null());
            gl::CompileShader(self.inner);

            let mut success = 0;
            gl::GetShaderiv(self.inner, gl::COMPILE_STATUS, &mut success);

            if success != gl::TRUE.into() {
                let mut infolog: Vec<u8> = vec![0; INFO_LOG_CAPACITY];
                let mut length = 0;
                gl::GetShaderInfoLog(
                    self.inner,
                    INFO_LOG_CAPACITY as i32,
                    &mut length,
                    infolog.as_mut_ptr().cast(),
                );
                return Err(Error::ShaderCompile {
                    stage: self.shader_type.stage_name(),
                    log: info_log_to_string(infolog, length),
                });
            }
            self.was_compiled = true;
            self.inner
        };
        debug!(
            "compiled {} shader {compiled_shader}",
            self.shader_type.stage_name()
        );
        // SAFETY: COMPILE_STATUS was checked above.
        unsafe { Ok(CompiledShader::from_uint_unchecked(compiled_shader)) }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            if !self.was_compiled {
                gl::DeleteShader(self.inner);
            }
        }
    }
}

/// A shader object that compiled successfully.
///
/// Dropping it after the program is linked only flags it for deletion,
/// GL keeps it alive while a program references it.
pub struct CompiledShader {
    /// GL ID for this shader.
    id: gl::types::GLuint,
}

impl CompiledShader {
    /// # Safety
    /// The uint passed into this function MUST name a shader object whose
    /// `COMPILE_STATUS` is `GL_TRUE`.
    pub unsafe fn from_uint_unchecked(shader: gl::types::GLuint) -> Self {
        Self { id: shader }
    }
    /// Get the internal id of this shader.
    pub fn id(&self) -> gl::types::GLuint {
        self.id
    }
}

impl Drop for CompiledShader {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteShader(self.id);
        };
    }
}
