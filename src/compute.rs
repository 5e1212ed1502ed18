//! Pure board operations.
//!
//! Every public function takes an immutable reference to the current
//! `GameBoard` and returns a brand-new one (or a `BoardError`).  Nothing here
//! advances the game: movement, spawning and scoring belong to the game loop.

use tracing::{debug, warn};

use crate::config::BoardConfig;
use crate::entities::{Entity, GameBoard, Player, Size};
use crate::error::BoardError;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial board for a new session.
pub fn init_board(config: &BoardConfig) -> GameBoard {
    GameBoard {
        size: Size {
            width: config.width,
            height: config.height,
        },
        entities: None,
        enemy_spawn_rate: config.enemy_spawn_rate,
        player: Player {
            reload_speed: config.player.reload_speed,
            color: config.player.color.clone(),
            scale: config.player.scale,
            life: config.player.life,
        },
        scale_multiplier: config.scale_multiplier,
        score: 0,
        end: false,
    }
}

// ── Queries ──────────────────────────────────────────────────────────────────

/// The board's entities in insertion order; an absent list reads as empty.
pub fn entity_list(board: &GameBoard) -> &[Entity] {
    board.entities.as_deref().unwrap_or(&[])
}

/// Smallest id strictly above every id on the board (0 on an empty board).
///
/// `None` once the largest id is `u64::MAX` and no such id exists.
pub fn next_entity_id(board: &GameBoard) -> Option<u64> {
    match entity_list(board).iter().map(|e| e.id).max() {
        Some(id) => id.checked_add(1),
        None => Some(0),
    }
}

pub fn is_terminal(board: &GameBoard) -> bool {
    board.end
}

/// Field-for-field equality that treats an absent entity list as empty.
pub fn equivalent(a: &GameBoard, b: &GameBoard) -> bool {
    normalize_entities(a) == normalize_entities(b)
}

// ── Transitions ──────────────────────────────────────────────────────────────

/// Append `entity` after the existing ones.
pub fn add_entity(board: &GameBoard, entity: Entity) -> Result<GameBoard, BoardError> {
    if board.end {
        warn!(id = entity.id, "refusing to add entity to an ended session");
        return Err(BoardError::SessionEnded);
    }
    if entity_list(board).iter().any(|e| e.id == entity.id) {
        warn!(id = entity.id, "refusing to add entity with duplicate id");
        return Err(BoardError::DuplicateEntityId { id: entity.id });
    }

    debug!(id = entity.id, "adding entity");
    let mut entities = entity_list(board).to_vec();
    entities.push(entity);
    Ok(GameBoard {
        entities: Some(entities),
        ..board.clone()
    })
}

/// Drop the entity with `id`; the others keep their order.
pub fn remove_entity(board: &GameBoard, id: u64) -> Result<GameBoard, BoardError> {
    if board.end {
        warn!(id, "refusing to remove entity from an ended session");
        return Err(BoardError::SessionEnded);
    }
    let entities = entity_list(board);
    if !entities.iter().any(|e| e.id == id) {
        return Err(BoardError::EntityNotFound { id });
    }

    debug!(id, "removing entity");
    let remaining: Vec<Entity> = entities.iter().filter(|e| e.id != id).cloned().collect();
    Ok(GameBoard {
        entities: Some(remaining),
        ..board.clone()
    })
}

/// Mark the session as over.  Ending an ended board is a no-op.
pub fn end_session(board: &GameBoard) -> GameBoard {
    if !board.end {
        debug!(score = board.score, "ending session");
    }
    GameBoard {
        end: true,
        ..board.clone()
    }
}

/// Canonical form: an empty entity list becomes absent.
pub fn normalize_entities(board: &GameBoard) -> GameBoard {
    let entities = match &board.entities {
        Some(list) if list.is_empty() => None,
        other => other.clone(),
    };
    GameBoard {
        entities,
        ..board.clone()
    }
}
