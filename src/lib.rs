pub mod clock;
pub use clock::FrameClock;

pub mod config;
pub use config::GameConfig;

pub mod error;
pub use error::{Error, Result};

pub mod game;
pub use game::{EventSource, FrameOutcome, Game, GameState};

pub mod input;
pub use input::{key_from_char, key_from_str, ElementState, InputCache, Key, KeyAxisState};

pub mod math;
pub use math::{uv, Unit, Vec2};

pub mod physics;
pub use physics::{
    collision::{overlap_data, resolve, solve_rect_overlap, ContactParams, Overlap, Resolution},
    damping, Aabb, Body,
};

// Re-exported winit to guarantee versions match
pub use winit;
