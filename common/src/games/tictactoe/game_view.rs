use super::board::Board;
use super::game_state::{HistoryEntry, TicTacToeGameState};
use super::types::{GamePhase, GameStatus, WinningLine};

/// Everything the presentation layer needs to render one state of the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub board: Board,
    pub phase: GamePhase,
    pub status: GameStatus,
    pub status_text: String,
    pub ply: usize,
    pub history: Vec<HistoryEntry>,
    pub winning_line: Option<WinningLine>,
}

impl GameView {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.active_snapshot(),
            phase: state.phase(),
            status: state.status(),
            status_text: state.status_text(),
            ply: state.ply(),
            history: state.history_descriptors(),
            winning_line: state.winning_line(),
        }
    }
}
