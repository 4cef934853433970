//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const SHIP: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const ASTEROID: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const SHOT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PARTICLE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const HUD: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const GAME_OVER: [f32; 4] = [1.0, 0.3, 0.3, 1.0];

    /// Same color with a different alpha
    pub const fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
        [color[0], color[1], color[2], alpha]
    }
}
