mod board;
mod bot_controller;
mod game_state;
mod game_view;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use bot_controller::{
    BotInput, DRAW_SCORE, SearchResult, WIN_SCORE, calculate_minimax_move, search_best_move,
};
pub use game_state::{HistoryEntry, PendingReply, TicTacToeGameState};
pub use game_view::GameView;
pub use session::{SessionCommand, TicTacToeSession};
pub use settings::{DEFAULT_COMPUTER_DELAY_MS, MAX_COMPUTER_DELAY_MS, TicTacToeSettings};
pub use types::{
    BOARD_HEIGHT, BOARD_WIDTH, CELL_COUNT, COMPUTER_MARK, GamePhase, GameStatus, HUMAN_MARK, Mark,
    Position, WinningLine,
};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, evaluate};
