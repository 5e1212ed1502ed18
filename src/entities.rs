//! Board state types: pure data, no game logic.
//!
//! Field names serialise in camelCase so boards written by the browser game
//! (`reloadSpeed`, `enemySpawnRate`, ...) load without translation.

use serde::{Deserialize, Serialize};

use crate::error::DirectionError;

// ── Geometry ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Playable area bounds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Which way an entity travels relative to the board origin.
///
/// On the wire this is the sign flag `1` (outward) or `-1` (inward); any
/// other number is rejected while deserialising.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Direction {
    Outward,
    Inward,
}

impl TryFrom<i8> for Direction {
    type Error = DirectionError;

    fn try_from(sign: i8) -> Result<Self, Self::Error> {
        match sign {
            1 => Ok(Direction::Outward),
            -1 => Ok(Direction::Inward),
            other => Err(DirectionError(other)),
        }
    }
}

impl From<Direction> for i8 {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Outward => 1,
            Direction::Inward => -1,
        }
    }
}

/// A single moving object (projectile or obstacle).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Unique among the entities of one board.
    pub id: u64,
    /// Heading. The unit is left to the game loop.
    pub angle: f64,
    pub speed: f64,
    /// Colour name or hex code, see [`crate::color::ColorSpec`].
    pub color: String,
    pub scale: f64,
    pub position: Position,
    pub direction: Direction,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub reload_speed: f64,
    pub color: String,
    pub scale: f64,
    pub life: u32,
}

// ── Master board state ────────────────────────────────────────────────────────

/// The whole state of one game session.  Cloneable so the board operations
/// in [`crate::compute`] can return a new copy without touching the original.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameBoard {
    pub size: Size,
    /// Insertion-ordered.  `None` means no entity has been placed yet; the
    /// key is left out of serialised output in that case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<Entity>>,
    pub enemy_spawn_rate: f64,
    pub player: Player,
    pub scale_multiplier: f64,
    pub score: u64,
    /// Set once the session is over; such a board is terminal.
    pub end: bool,
}
