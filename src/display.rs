//! Report layer: all terminal output for `show` and `validate` lives here.
//!
//! Each function receives a writer and an immutable view of the board.  No
//! board logic is performed; this module only translates state into
//! (optionally coloured) lines of text.

use std::io::Write;

use crossterm::{
    style::{self, Color, Print},
    QueueableCommand,
};
use shooter_board::color::ColorSpec;
use shooter_board::compute::{entity_list, is_terminal};
use shooter_board::entities::{Direction, Entity, GameBoard};
use shooter_board::validate::Violation;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_TITLE: Color = Color::Cyan;
const C_SCORE: Color = Color::Yellow;
const C_LIFE: Color = Color::Red;
const C_ACTIVE: Color = Color::Green;
const C_ENDED: Color = Color::Red;
const C_HEADER: Color = Color::DarkGrey;
const C_OK: Color = Color::Green;
const C_PROBLEM: Color = Color::Red;

const SWATCH: &str = "■";

/// Writes text, colouring it only when enabled.
pub struct Painter<'a, W: Write> {
    out: &'a mut W,
    color: bool,
}

impl<'a, W: Write> Painter<'a, W> {
    pub fn new(out: &'a mut W, color: bool) -> Self {
        Self { out, color }
    }

    fn paint(&mut self, color: Color, text: &str) -> std::io::Result<()> {
        if self.color {
            self.out.queue(style::SetForegroundColor(color))?;
            self.out.queue(Print(text))?;
            self.out.queue(style::ResetColor)?;
        } else {
            self.out.queue(Print(text))?;
        }
        Ok(())
    }

    fn plain(&mut self, text: &str) -> std::io::Result<()> {
        self.out.queue(Print(text))?;
        Ok(())
    }

    fn finish(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Full report: summary, player, entity table and validation result.
pub fn render_report<W: Write>(
    painter: &mut Painter<'_, W>,
    board: &GameBoard,
    violations: &[Violation],
) -> std::io::Result<()> {
    draw_summary(painter, board)?;
    draw_player(painter, board)?;
    draw_entities(painter, board)?;
    painter.plain("\n")?;
    render_violations(painter, violations)?;
    painter.finish()
}

/// Just the validation outcome.
pub fn render_violations<W: Write>(
    painter: &mut Painter<'_, W>,
    violations: &[Violation],
) -> std::io::Result<()> {
    if violations.is_empty() {
        painter.paint(C_OK, "valid\n")?;
    } else {
        painter.paint(C_PROBLEM, &format!("{} problem(s):\n", violations.len()))?;
        for v in violations {
            painter.plain(&format!("  - {v}\n"))?;
        }
    }
    painter.finish()
}

// ── Sections ──────────────────────────────────────────────────────────────────

fn draw_summary<W: Write>(painter: &mut Painter<'_, W>, board: &GameBoard) -> std::io::Result<()> {
    painter.paint(
        C_TITLE,
        &format!("Board {} x {}", board.size.width, board.size.height),
    )?;
    painter.plain("   ")?;
    painter.paint(C_SCORE, &format!("score {}", board.score))?;
    painter.plain("   ")?;
    if is_terminal(board) {
        painter.paint(C_ENDED, "ENDED")?;
    } else {
        painter.paint(C_ACTIVE, "ACTIVE")?;
    }
    painter.plain(&format!(
        "\nspawn rate {}   scale multiplier {}\n",
        board.enemy_spawn_rate, board.scale_multiplier
    ))
}

fn draw_player<W: Write>(painter: &mut Painter<'_, W>, board: &GameBoard) -> std::io::Result<()> {
    let p = &board.player;
    painter.plain("Player  ")?;
    painter.paint(C_LIFE, &format!("life {}", p.life))?;
    painter.plain(&format!("  reload {}  scale {}  ", p.reload_speed, p.scale))?;
    draw_swatch(painter, &p.color)?;
    painter.plain("\n")
}

fn draw_entities<W: Write>(painter: &mut Painter<'_, W>, board: &GameBoard) -> std::io::Result<()> {
    let entities = entity_list(board);
    if board.entities.is_none() {
        return painter.plain("Entities: none yet\n");
    }
    painter.plain(&format!("Entities ({})\n", entities.len()))?;
    if entities.is_empty() {
        return Ok(());
    }
    painter.paint(
        C_HEADER,
        &format!(
            "{:>8} {:>10} {:>10} {:>8} {:>7} {:>6} {:>4}  color\n",
            "id", "x", "y", "angle", "speed", "scale", "dir"
        ),
    )?;
    for entity in entities {
        draw_entity_row(painter, entity)?;
    }
    Ok(())
}

fn draw_entity_row<W: Write>(painter: &mut Painter<'_, W>, e: &Entity) -> std::io::Result<()> {
    let dir = match e.direction {
        Direction::Outward => "out",
        Direction::Inward => "in",
    };
    painter.plain(&format!(
        "{:>8} {:>10.2} {:>10.2} {:>8.3} {:>7.2} {:>6.2} {:>4}  ",
        e.id, e.position.x, e.position.y, e.angle, e.speed, e.scale, dir
    ))?;
    draw_swatch(painter, &e.color)?;
    painter.plain("\n")
}

// Unknown names and malformed colours print without a swatch colour.
fn draw_swatch<W: Write>(painter: &mut Painter<'_, W>, raw: &str) -> std::io::Result<()> {
    match raw.parse::<ColorSpec>() {
        Ok(spec) => {
            let color = terminal_color(&spec).unwrap_or(Color::Reset);
            painter.paint(color, SWATCH)?;
            painter.plain(&format!(" {spec}"))
        }
        Err(_) => painter.plain(&format!("? {raw:?}")),
    }
}

fn terminal_color(spec: &ColorSpec) -> Option<Color> {
    match spec {
        ColorSpec::Rgb { r, g, b } => Some(Color::Rgb { r: *r, g: *g, b: *b }),
        ColorSpec::Named(name) => match name.as_str() {
            "black" => Some(Color::Black),
            "red" => Some(Color::Red),
            "darkred" | "maroon" => Some(Color::DarkRed),
            "green" | "lime" => Some(Color::Green),
            "darkgreen" => Some(Color::DarkGreen),
            "yellow" => Some(Color::Yellow),
            "olive" => Some(Color::DarkYellow),
            "blue" => Some(Color::Blue),
            "darkblue" | "navy" => Some(Color::DarkBlue),
            "magenta" | "fuchsia" => Some(Color::Magenta),
            "purple" | "darkmagenta" => Some(Color::DarkMagenta),
            "cyan" | "aqua" => Some(Color::Cyan),
            "teal" | "darkcyan" => Some(Color::DarkCyan),
            "white" => Some(Color::White),
            "grey" | "gray" | "silver" => Some(Color::Grey),
            "darkgrey" | "darkgray" => Some(Color::DarkGrey),
            "orange" => Some(Color::Rgb { r: 255, g: 165, b: 0 }),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shooter_board::compute::init_board;
    use shooter_board::config::BoardConfig;
    use shooter_board::validate::validate_board;

    fn plain_report(board: &GameBoard) -> String {
        let mut buf = Vec::new();
        let violations = validate_board(board);
        let mut painter = Painter::new(&mut buf, false);
        render_report(&mut painter, board, &violations).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_report_for_fresh_board() {
        let report = plain_report(&init_board(&BoardConfig::default()));
        assert!(report.contains("Board 800 x 600"));
        assert!(report.contains("ACTIVE"));
        assert!(report.contains("life 3"));
        assert!(report.contains("Entities: none yet"));
        assert!(report.ends_with("valid\n"));
    }

    #[test]
    fn test_report_lists_problems() {
        let mut board = init_board(&BoardConfig::default());
        board.player.color = "not a colour".to_string();
        board.end = true;
        let report = plain_report(&board);
        assert!(report.contains("ENDED"));
        assert!(report.contains("1 problem(s)"));
        assert!(report.contains("player.color"));
    }

    #[test]
    fn test_named_colors_map_to_terminal() {
        assert_eq!(terminal_color(&ColorSpec::Named("navy".into())), Some(Color::DarkBlue));
        assert_eq!(terminal_color(&ColorSpec::Named("chartreuse".into())), None);
        assert_eq!(
            terminal_color(&ColorSpec::Rgb { r: 1, g: 2, b: 3 }),
            Some(Color::Rgb { r: 1, g: 2, b: 3 })
        );
    }

    #[test]
    fn test_colored_output_emits_escape_codes() {
        let mut buf = Vec::new();
        let mut painter = Painter::new(&mut buf, true);
        render_violations(&mut painter, &[]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains('\u{1b}'));
        assert!(text.contains("valid"));
    }
}
