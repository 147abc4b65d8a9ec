use std::ffi::CString;

use log::debug;

use super::{info_log_to_string, shader::CompiledShader, INFO_LOG_CAPACITY};
use crate::error::{Error, Result};

/// Location of a uniform inside a linked [`Program`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniformLocation(gl::types::GLint);

/// A linked shader program.
pub struct Program {
    /// GL ID for this program.
    id: gl::types::GLuint,
}

/// Link any number of compiled shaders into a [`Program`].
#[macro_export]
macro_rules! construct_program {
    ($($shader:expr),+ $(,)?) => {
        $crate::gl_wrappers::program::Program::link(&[$(&$shader),+])
    };
}

impl Program {
    /// Attach `shaders`, link them and check `LINK_STATUS`.
    ///
    /// The shaders are detached again afterwards, so dropping them frees them.
    pub fn link(shaders: &[&CompiledShader]) -> Result<Self> {
        let id = unsafe {
            let program = gl::CreateProgram();
            for shader in shaders {
                gl::AttachShader(program, shader.id());
            }
            gl::LinkProgram(program);

            let mut success = 0;
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
            if success != gl::TRUE.into() {
                let mut infolog: Vec<u8> = vec![0; INFO_LOG_CAPACITY];
                let mut length = 0;
                gl::GetProgramInfoLog(
                    program,
                    INFO_LOG_CAPACITY as i32,
                    &mut length,
                    infolog.as_mut_ptr().cast(),
                );
                gl::DeleteProgram(program);
                return Err(Error::ProgramLink {
                    log: info_log_to_string(infolog, length),
                });
            }

            // the shaders are only needed for linking
            for shader in shaders {
                gl::DetachShader(program, shader.id());
            }
            program
        };
        debug!("linked program {id} from {} shaders", shaders.len());

        Ok(Self { id })
    }

    /// Get the internal id of this program.
    pub fn id(&self) -> gl::types::GLuint {
        self.id
    }

    /// Install this program as part of the current rendering state.
    pub fn bind(&self) {
        unsafe { gl::UseProgram(self.id) }
    }

    /// Look up the uniform called `name`.
    ///
    /// Uniforms the compiler optimised out are reported as not found.
    pub fn uniform_location(&self, name: &str) -> Result<UniformLocation> {
        let c_name =
            CString::new(name).map_err(|_| Error::UniformNotFound(name.to_owned()))?;
        let location = unsafe { gl::GetUniformLocation(self.id, c_name.as_ptr()) };
        if location < 0 {
            return Err(Error::UniformNotFound(name.to_owned()));
        }
        Ok(UniformLocation(location))
    }

    /// Upload a float uniform. The program must be bound.
    pub fn set_f32(&self, location: UniformLocation, value: f32) {
        unsafe { gl::Uniform1f(location.0, value) }
    }

    /// Upload a bool uniform. The program must be bound.
    pub fn set_bool(&self, location: UniformLocation, value: bool) {
        unsafe { gl::Uniform1i(location.0, value.into()) }
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}
