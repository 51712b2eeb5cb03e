use tictactoe_common::games::SessionBroadcaster;
use tictactoe_common::games::tictactoe::{
    BOARD_HEIGHT, BOARD_WIDTH, CELL_COUNT, GameView, Mark, Position, SessionCommand,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Session(SessionCommand),
    Help,
}

pub const HELP_TEXT: &str = "\
Commands:
  <1-9>          place X on a cell (numbered left to right, top to bottom)
  <row> <col>    place X by row and column, both 1-3
  jump <ply>     go back to a move from the history
  reset          start a new game
  help           show this message
  quit           leave";

pub fn parse_input(line: &str) -> Result<InputCommand, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [] => Err("Type a cell number or 'help'".to_string()),
        ["help" | "h" | "?"] => Ok(InputCommand::Help),
        ["quit" | "q" | "exit"] => Ok(InputCommand::Session(SessionCommand::Shutdown)),
        ["reset" | "new"] => Ok(InputCommand::Session(SessionCommand::Reset)),
        ["jump", ply] => {
            let ply = ply
                .parse::<usize>()
                .map_err(|_| format!("Invalid ply: {}", ply))?;
            Ok(InputCommand::Session(SessionCommand::JumpTo { ply }))
        }
        [cell] => {
            let number = parse_number(cell, CELL_COUNT)?;
            Ok(InputCommand::Session(SessionCommand::PlaceMark { cell: number - 1 }))
        }
        [row, col] => {
            let row = parse_number(row, BOARD_HEIGHT)?;
            let col = parse_number(col, BOARD_WIDTH)?;
            let cell = Position::new(col - 1, row - 1)
                .to_index()
                .ok_or_else(|| format!("No cell at row {}, column {}", row, col))?;
            Ok(InputCommand::Session(SessionCommand::PlaceMark { cell }))
        }
        _ => Err(format!("Unknown command: {}", line.trim())),
    }
}

fn parse_number(text: &str, max: usize) -> Result<usize, String> {
    match text.parse::<usize>() {
        Ok(n) if (1..=max).contains(&n) => Ok(n),
        _ => Err(format!("Expected a number between 1 and {}, got '{}'", max, text)),
    }
}

pub fn render_view(view: &GameView) -> String {
    let mut out = String::new();

    for y in 0..BOARD_HEIGHT {
        if y > 0 {
            out.push_str("---+---+---\n");
        }
        let row: Vec<String> = (0..BOARD_WIDTH)
            .map(|x| {
                let index = y * BOARD_WIDTH + x;
                match view.board.get(index) {
                    Some(Mark::Empty) | None => format!(" {} ", index + 1),
                    Some(mark) => format!(" {} ", mark),
                }
            })
            .collect();
        out.push_str(&row.join("|"));
        out.push('\n');
    }

    out.push_str(&view.status_text);
    if let Some(line) = view.winning_line {
        let cells: Vec<String> = line.cells.iter().map(|c| (c + 1).to_string()).collect();
        out.push_str(&format!(" (cells {})", cells.join("-")));
    }
    out.push('\n');

    let history: Vec<String> = view
        .history
        .iter()
        .map(|entry| {
            let marker = if entry.ply == view.ply { "*" } else { " " };
            format!("{}[{}] {}", marker, entry.ply, entry.label)
        })
        .collect();
    out.push_str(&history.join("\n"));
    out
}

pub struct ConsoleBroadcaster;

impl SessionBroadcaster for ConsoleBroadcaster {
    async fn broadcast_state(&self, view: GameView) {
        println!("\n{}", render_view(&view));
    }

    async fn broadcast_game_over(&self, _view: GameView) {
        println!("Game over. Type 'reset' for a new game or 'jump <ply>' to revisit a move.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::games::tictactoe::TicTacToeGameState;

    fn place(cell: usize) -> InputCommand {
        InputCommand::Session(SessionCommand::PlaceMark { cell })
    }

    #[test]
    fn test_parse_cell_number() {
        assert_eq!(parse_input("5"), Ok(place(4)));
        assert_eq!(parse_input(" 1 "), Ok(place(0)));
        assert!(parse_input("0").is_err());
        assert!(parse_input("10").is_err());
    }

    #[test]
    fn test_parse_row_and_column() {
        assert_eq!(parse_input("1 3"), Ok(place(2)));
        assert_eq!(parse_input("3 1"), Ok(place(6)));
        assert!(parse_input("4 1").is_err());
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse_input("jump 2"),
            Ok(InputCommand::Session(SessionCommand::JumpTo { ply: 2 }))
        );
        assert_eq!(parse_input("reset"), Ok(InputCommand::Session(SessionCommand::Reset)));
        assert_eq!(parse_input("q"), Ok(InputCommand::Session(SessionCommand::Shutdown)));
        assert_eq!(parse_input("help"), Ok(InputCommand::Help));
        assert!(parse_input("jump back").is_err());
        assert!(parse_input("").is_err());
        assert!(parse_input("play a game").is_err());
    }

    #[test]
    fn test_render_view_shows_board_status_and_history() {
        let mut state = TicTacToeGameState::new();
        state.place_mark(0).unwrap();
        state.computer_reply().unwrap();

        let rendered = render_view(&GameView::from_game_state(&state));

        assert!(rendered.starts_with(" X | 2 | 3 \n---+---+---\n 4 | O | 6 \n"));
        assert!(rendered.contains("Next player: X"));
        assert!(rendered.contains(" [0] Go to game start"));
        assert!(rendered.contains("*[2] Go to move #2"));
    }
}
