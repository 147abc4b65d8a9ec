use std::time::Duration;

use clap::Parser;

use crate::scene::SceneKind;

pub const OPENGL_MAJOR_VER: u8 = 4;
pub const OPENGL_MINOR_VER: u8 = 5;

/// Highest accepted `--fps-cap`. Anything above sleeps less than 100µs a frame.
pub const MAX_FPS_CAP: u64 = 10_000;

/// Open a window and draw a pulsing, bobbing shape.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "empty_window", version, about)]
pub struct Config {
    /// Vertex data to upload.
    #[arg(long, value_enum, default_value_t = SceneKind::Butterfly)]
    pub scene: SceneKind,

    #[arg(long, default_value_t = 640, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    #[arg(long, default_value_t = 480, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    #[arg(long, default_value = "OpenGLExample")]
    pub title: String,

    /// Draw without the time animation.
    #[arg(long = "static", action = clap::ArgAction::SetFalse)]
    pub animate: bool,

    /// Soft frame rate cap, 0 for uncapped.
    #[arg(
        long,
        default_value_t = 1000,
        value_parser = clap::value_parser!(u64).range(0..=MAX_FPS_CAP)
    )]
    pub fps_cap: u64,

    /// Let the driver wait for vertical sync on swap.
    #[arg(long)]
    pub vsync: bool,

    /// Skip requesting a debug context and the GL debug callback.
    #[arg(long = "no-gl-debug", action = clap::ArgAction::SetFalse)]
    pub gl_debug: bool,

    /// Log filter in `env_logger` syntax, overrides RUST_LOG.
    #[arg(long)]
    pub log: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scene: SceneKind::default(),
            width: 640,
            height: 480,
            title: "OpenGLExample".into(),
            animate: true,
            fps_cap: 1000,
            vsync: false,
            gl_debug: true,
            log: None,
        }
    }
}

impl Config {
    /// Minimum time between frames for the soft cap.
    pub fn frame_budget(&self) -> Duration {
        if self.fps_cap == 0 {
            return Duration::ZERO;
        }
        Duration::from_micros(1_000_000 / self.fps_cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_derive() {
        let parsed = Config::try_parse_from(["empty_window"]).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn frame_budget_from_cap() {
        let mut config = Config::default();
        assert_eq!(config.frame_budget(), Duration::from_millis(1));
        config.fps_cap = 60;
        assert_eq!(config.frame_budget(), Duration::from_micros(16_666));
        config.fps_cap = MAX_FPS_CAP;
        assert_eq!(config.frame_budget(), Duration::from_micros(100));
        config.fps_cap = 0;
        assert_eq!(config.frame_budget(), Duration::ZERO);
    }

    #[test]
    fn clap_definition_is_valid() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
