use gl::types::GLenum;

/// Everything that can go wrong between opening the window and the first frame.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// SDL reports its errors as plain strings.
    #[error("SDL error: {0}")]
    Sdl(String),
    #[error("error creating window: {0}")]
    WindowBuild(#[from] sdl2::video::WindowBuildError),
    #[error("failed to compile {stage} shader: {log}")]
    ShaderCompile { stage: &'static str, log: String },
    #[error("failed to link shader program: {log}")]
    ProgramLink { log: String },
    #[error("uniform `{0}` not found in program")]
    UniformNotFound(String),
    #[error("window dimension {0} does not fit in a GLsizei")]
    InvalidDimension(u32),
    #[error("OpenGL error 0x{0:04x}")]
    Gl(GLenum),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Self::Sdl(value)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sdl_strings_convert() {
        let err: Error = String::from("no video device").into();
        assert!(matches!(err, Error::Sdl(ref s) if s == "no video device"));
        assert_eq!(err.to_string(), "SDL error: no video device");
    }

    #[test]
    fn gl_errors_print_as_hex() {
        assert_eq!(Error::Gl(0x0502).to_string(), "OpenGL error 0x0502");
    }

    #[test]
    fn compile_errors_name_the_stage() {
        let err = Error::ShaderCompile {
            stage: "fragment",
            log: "0:3(1): error: syntax error".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to compile fragment shader: 0:3(1): error: syntax error"
        );
    }
}
