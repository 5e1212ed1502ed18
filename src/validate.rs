//! Invariant checks for boards that arrive from outside the crate.
//!
//! Deserialisation already guarantees the shape (and the direction flag);
//! everything the type system cannot express is checked here.  Checks never
//! stop at the first problem: callers get the full list.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::color::ColorSpec;
use crate::entities::GameBoard;
use crate::error::{BoardError, ColorError};

/// Largest id or score every supported format can store (TOML integers are i64).
pub const MAX_INTEGER: u64 = i64::MAX as u64;

/// One broken invariant, tagged with the path of the offending field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("{field} is not a finite number")]
    NotFinite { field: String },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: String, value: f64 },
    #[error("{field}: {source}")]
    BadColor {
        field: String,
        #[source]
        source: ColorError,
    },
    #[error("{field} = {value} is above the largest storable integer {}", MAX_INTEGER)]
    OutOfRange { field: String, value: u64 },
    #[error("entity id {id} is used by {count} entities")]
    DuplicateId { id: u64, count: usize },
}

/// Collect every violation found on `board`, in field order.
pub fn validate_board(board: &GameBoard) -> Vec<Violation> {
    let mut found = Vec::new();

    non_negative(&mut found, "size.width", board.size.width);
    non_negative(&mut found, "size.height", board.size.height);

    let entities = board.entities.as_deref().unwrap_or(&[]);
    for (i, entity) in entities.iter().enumerate() {
        let at = |field: &str| format!("entities[{i}].{field}");
        integer(&mut found, at("id"), entity.id);
        finite(&mut found, at("angle"), entity.angle);
        non_negative(&mut found, at("speed"), entity.speed);
        color(&mut found, at("color"), &entity.color);
        non_negative(&mut found, at("scale"), entity.scale);
        finite(&mut found, at("position.x"), entity.position.x);
        finite(&mut found, at("position.y"), entity.position.y);
    }

    non_negative(&mut found, "enemySpawnRate", board.enemy_spawn_rate);
    non_negative(&mut found, "player.reloadSpeed", board.player.reload_speed);
    color(&mut found, "player.color", &board.player.color);
    non_negative(&mut found, "player.scale", board.player.scale);
    non_negative(&mut found, "scaleMultiplier", board.scale_multiplier);
    integer(&mut found, "score", board.score);

    // BTreeMap keeps the report order stable
    let mut seen: BTreeMap<u64, usize> = BTreeMap::new();
    for entity in entities {
        *seen.entry(entity.id).or_default() += 1;
    }
    found.extend(
        seen.into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|(id, count)| Violation::DuplicateId { id, count }),
    );

    found
}

/// Like [`validate_board`], but as a `Result` for use with `?`.
pub fn ensure_valid(board: &GameBoard) -> Result<(), BoardError> {
    let violations = validate_board(board);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(BoardError::Invalid(violations))
    }
}

// ── Field checks ──────────────────────────────────────────────────────────────

fn finite(found: &mut Vec<Violation>, field: impl Into<String>, value: f64) -> bool {
    if value.is_finite() {
        true
    } else {
        found.push(Violation::NotFinite { field: field.into() });
        false
    }
}

fn non_negative(found: &mut Vec<Violation>, field: impl Into<String>, value: f64) {
    let field = field.into();
    if finite(found, field.clone(), value) && value < 0.0 {
        found.push(Violation::Negative { field, value });
    }
}

fn integer(found: &mut Vec<Violation>, field: impl Into<String>, value: u64) {
    if value > MAX_INTEGER {
        found.push(Violation::OutOfRange { field: field.into(), value });
    }
}

fn color(found: &mut Vec<Violation>, field: impl Into<String>, value: &str) {
    if let Err(source) = value.parse::<ColorSpec>() {
        found.push(Violation::BadColor { field: field.into(), source });
    }
}
