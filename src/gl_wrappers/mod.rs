#[macro_use]
pub mod program;
pub mod shader;

use crate::error::{Error, Result};

/// Bytes requested from `glGet*InfoLog`.
pub const INFO_LOG_CAPACITY: usize = 512;

pub fn gl_upd_viewport(width: u32, height: u32) -> Result<()> {
    let real_width: i32 = width
        .try_into()
        .map_err(|_| Error::InvalidDimension(width))?;
    let real_height: i32 = height
        .try_into()
        .map_err(|_| Error::InvalidDimension(height))?;
    // SAFETY:
    // gl::Viewport does not fail with non-negative values.
    unsafe {
        gl::Viewport(0, 0, real_width, real_height);
    }
    Ok(())
}

/// Pop the oldest recorded GL error, if any.
pub fn check_gl_error() -> Result<()> {
    match unsafe { gl::GetError() } {
        gl::NO_ERROR => Ok(()),
        code => Err(Error::Gl(code)),
    }
}

/// Turn the buffer filled by `glGetShaderInfoLog`/`glGetProgramInfoLog`
/// into a string, `length` being the byte count GL wrote.
pub fn info_log_to_string(mut infolog: Vec<u8>, length: gl::types::GLsizei) -> String {
    let length = usize::try_from(length).unwrap_or(0).min(infolog.len());
    infolog.truncate(length);
    // some drivers count the terminator
    while infolog.last() == Some(&0) {
        infolog.pop();
    }
    String::from_utf8_lossy(&infolog).trim_end().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_log_is_truncated_to_written_length() {
        let mut buf = vec![0u8; INFO_LOG_CAPACITY];
        let msg = b"0:1(10): error: `vPos' undeclared\n";
        buf[..msg.len()].copy_from_slice(msg);
        let log = info_log_to_string(buf, msg.len() as i32);
        assert_eq!(log, "0:1(10): error: `vPos' undeclared");
    }

    #[test]
    fn info_log_drops_counted_terminator() {
        let log = info_log_to_string(b"link failed\0\0\0".to_vec(), 12);
        assert_eq!(log, "link failed");
    }

    #[test]
    fn info_log_handles_bogus_lengths() {
        assert_eq!(info_log_to_string(b"abc".to_vec(), -1), "");
        assert_eq!(info_log_to_string(b"abc".to_vec(), 99), "abc");
    }

    #[test]
    fn info_log_is_lossy() {
        let log = info_log_to_string(vec![b'o', b'k', 0xff], 3);
        assert_eq!(log, "ok\u{fffd}");
    }
}
