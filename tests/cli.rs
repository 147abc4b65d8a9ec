use std::time::Duration;

use clap::Parser;
use empty_window::{Config, SceneKind};

fn parse(args: &[&str]) -> Result<Config, clap::Error> {
    Config::try_parse_from(std::iter::once("empty_window").chain(args.iter().copied()))
}

#[test]
fn default_window_is_640x480() {
    let config = parse(&[]).unwrap();
    assert_eq!((config.width, config.height), (640, 480));
    assert_eq!(config.title, "OpenGLExample");
    assert_eq!(config.scene, SceneKind::Butterfly);
    assert!(config.animate);
    assert!(config.gl_debug);
    assert!(!config.vsync);
}

#[test]
fn static_triangle_variant() {
    let config = parse(&["--scene", "triangle", "--static"]).unwrap();
    assert_eq!(config.scene, SceneKind::Triangle);
    assert!(!config.animate);
    assert_eq!(config.scene.vertices().len(), 3);
}

#[test]
fn window_options() {
    let config = parse(&[
        "--width",
        "1024",
        "--height",
        "768",
        "--title",
        "pulse",
        "--vsync",
        "--no-gl-debug",
        "--fps-cap",
        "60",
        "--log",
        "empty_window=debug",
    ])
    .unwrap();
    assert_eq!((config.width, config.height), (1024, 768));
    assert_eq!(config.title, "pulse");
    assert!(config.vsync);
    assert!(!config.gl_debug);
    assert_eq!(config.frame_budget(), Duration::from_micros(16_666));
    assert_eq!(config.log.as_deref(), Some("empty_window=debug"));
}

#[test]
fn zero_sized_window_is_rejected() {
    assert!(parse(&["--width", "0"]).is_err());
    assert!(parse(&["--height", "0"]).is_err());
}

#[test]
fn unknown_scene_is_rejected() {
    let err = parse(&["--scene", "square"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
}

#[test]
fn oversized_fps_cap_is_rejected() {
    let err = parse(&["--fps-cap", "18446744073709551615"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    assert!(parse(&["--fps-cap", "1000000000"]).is_err());

    let max = empty_window::config::MAX_FPS_CAP.to_string();
    assert_eq!(parse(&["--fps-cap", &max]).unwrap().frame_budget(), Duration::from_micros(100));
}
