//! Line-oriented text front-end.
//!
//! The protocol follows the shape of GTP: each line is an optional numeric
//! id, a command and its arguments; each response is `=id message` on
//! success or `?id message` on failure, followed by a blank line.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `list_commands`, `known_command <cmd>`
//! - `new [size]` - Start a new game (default size from the current game)
//! - `komi <value>` - Set komi for scoring
//! - `play <vertex>` or `play <row> <col>` - Move for the active player
//! - `pass` - Pass; a second pass in a row ends the game
//! - `undo` - Take back the last move or pass
//! - `show` - Print the board
//! - `score` - Print the area score and the result with komi
//! - `save <file>` / `load <file>` - Persist or restore the game
//! - `quit` - Exit

use std::io::{self, BufRead, Write};

use log::warn;

use crate::board::Coord;
use crate::config::GameConfig;
use crate::persist::SavedGame;
use crate::session::GameSession;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "known_command",
    "komi",
    "list_commands",
    "load",
    "name",
    "new",
    "pass",
    "play",
    "quit",
    "save",
    "score",
    "show",
    "undo",
    "version",
];

/// Console state: one game session.
pub struct Console {
    session: GameSession,
}

impl Default for Console {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Console {
    pub fn new(config: GameConfig) -> Self {
        Self {
            session: GameSession::new(config),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let (success, message) = self.execute(&command, &parts[1..]);
            if !success {
                warn!("command '{command_line}' failed: {message}");
            }

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute a command and return (success, response).
    pub fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => match args.first() {
                Some(cmd) => {
                    let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                    (true, known.to_string())
                }
                None => (false, "missing argument".to_string()),
            },

            "quit" => (true, String::new()),

            "new" => {
                let size = match args.first() {
                    None => self.session.current().board_size(),
                    Some(arg) => match arg.parse::<usize>() {
                        Ok(size) => size,
                        Err(_) => return (false, "invalid size".to_string()),
                    },
                };
                let config = GameConfig {
                    board_size: size,
                    ..*self.session.config()
                };
                if let Err(e) = config.validate() {
                    return (false, e.to_string());
                }
                self.session.new_game(size);
                (true, String::new())
            }

            "komi" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match arg.parse::<f32>() {
                    Ok(komi) if komi.is_finite() => {
                        self.session.set_komi(komi);
                        (true, String::new())
                    }
                    _ => (false, "invalid komi".to_string()),
                }
            }

            "play" => {
                if self.session.is_game_over() {
                    return (false, "game is over".to_string());
                }
                let Some(pt) = self.parse_point(args) else {
                    return (false, "invalid coordinate".to_string());
                };
                let player = self.session.active_player();
                match self.session.attempt_move(pt, player) {
                    Ok(()) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "pass" => {
                if self.session.is_game_over() {
                    return (false, "game is over".to_string());
                }
                if self.session.pass() {
                    (true, format!("game over: {}", self.session.game_over_text()))
                } else {
                    (true, String::new())
                }
            }

            "undo" => {
                if self.session.undo() {
                    (true, String::new())
                } else {
                    (false, "nothing to undo".to_string())
                }
            }

            "show" => {
                let state = self.session.current();
                let ko = state
                    .ko_point()
                    .map(|k| format!(", ko at {k}"))
                    .unwrap_or_default();
                (
                    true,
                    format!("{} to move{ko}\n{}", state.active_player(), state.board()),
                )
            }

            "score" => {
                let score = self.session.score();
                (
                    true,
                    format!(
                        "area {} to {}; {}",
                        score.player1,
                        score.player2,
                        self.session.game_over_text()
                    ),
                )
            }

            "save" => {
                let Some(path) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match self.session.to_saved().save(path) {
                    Ok(()) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "load" => {
                let Some(path) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match SavedGame::load(path) {
                    Ok(saved) => {
                        self.session = GameSession::from_saved(saved);
                        (true, String::new())
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }

    /// A vertex ("D4") or a row/column pair ("5 3"), checked against the
    /// board.
    fn parse_point(&self, args: &[&str]) -> Option<Coord> {
        let size = self.session.current().board_size();
        let pt = match args {
            [vertex] => Coord::parse_vertex(vertex, size)?,
            [row, col] => Coord::new(row.parse().ok()?, col.parse().ok()?),
            _ => return None,
        };
        self.session.current().board().contains(pt).then_some(pt)
    }
}
