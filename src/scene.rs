//! The hardcoded vertex data the demo can draw.
//!
//! Positions are counter-clockwise.

use std::{fmt, str::FromStr};

use crate::vertex::Vertex;

const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// One triangle with a red, green and blue corner.
pub const TRIANGLE: [Vertex; 3] = [
    Vertex::new([-0.5, -0.5, 0.0], RED),
    Vertex::new([0.5, -0.5, 0.0], GREEN),
    Vertex::new([0.0, 0.5, 0.0], BLUE),
];

/// Two triangles mirrored on the y axis, white where they meet
/// and black at the outer corners.
pub const BUTTERFLY: [Vertex; 6] = [
    // right wing
    Vertex::new([0.0, -0.5, 0.0], WHITE),
    Vertex::new([1.0, -1.0, 0.0], BLACK),
    Vertex::new([0.5, 0.5, 0.0], BLACK),
    // left wing
    Vertex::new([-1.0, -1.0, 0.0], BLACK),
    Vertex::new([0.0, -0.5, 0.0], WHITE),
    Vertex::new([-0.5, 0.5, 0.0], BLACK),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SceneKind {
    Triangle,
    #[default]
    Butterfly,
}

impl SceneKind {
    pub fn vertices(self) -> &'static [Vertex] {
        match self {
            SceneKind::Triangle => &TRIANGLE,
            SceneKind::Butterfly => &BUTTERFLY,
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SceneKind::Triangle => "triangle",
            SceneKind::Butterfly => "butterfly",
        })
    }
}

impl FromStr for SceneKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "triangle" => Ok(SceneKind::Triangle),
            "butterfly" => Ok(SceneKind::Butterfly),
            other => Err(format!("unknown scene '{other}'")),
        }
    }
}
