//! Random sample boards for fixtures and demos.
//!
//! All randomness comes through the `rng` argument so callers control
//! determinism (a seeded `StdRng` reproduces the same board).

use std::f64::consts::TAU;

use rand::Rng;

use crate::compute::init_board;
use crate::config::BoardConfig;
use crate::entities::{Direction, Entity, GameBoard, Position, Size};

/// Colours handed out to sample entities.
pub const PALETTE: &[&str] = &[
    "red", "orange", "yellow", "green", "cyan", "magenta", "#ff8800", "#88ccff",
];

/// A random entity placed inside `size`.
pub fn sample_entity(id: u64, size: &Size, rng: &mut impl Rng) -> Entity {
    Entity {
        id,
        angle: rng.gen_range(0.0..TAU),
        speed: rng.gen_range(0.5..5.0),
        color: PALETTE[rng.gen_range(0..PALETTE.len())].to_string(),
        scale: rng.gen_range(0.5..2.0),
        position: Position {
            x: coordinate(size.width, rng),
            y: coordinate(size.height, rng),
        },
        direction: if rng.gen_bool(0.5) {
            Direction::Outward
        } else {
            Direction::Inward
        },
    }
}

/// A fresh board from `config` holding `count` entities with ids `0..count`.
pub fn sample_board(config: &BoardConfig, count: usize, rng: &mut impl Rng) -> GameBoard {
    let board = init_board(config);
    let entities = (0..count as u64)
        .map(|id| sample_entity(id, &board.size, rng))
        .collect();
    GameBoard {
        entities: Some(entities),
        ..board
    }
}

// Empty or degenerate extents pin the coordinate to 0.
fn coordinate(extent: f64, rng: &mut impl Rng) -> f64 {
    if extent.is_finite() && extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}
