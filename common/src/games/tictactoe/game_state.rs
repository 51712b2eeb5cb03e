use super::board::Board;
use super::bot_controller::{BotInput, calculate_minimax_move};
use super::types::{COMPUTER_MARK, GamePhase, GameStatus, HUMAN_MARK, Mark, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub ply: usize,
    pub label: String,
}

/// The snapshot a computer reply was scheduled against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReply {
    pub ply: usize,
    pub board: Board,
}

/// History of snapshots plus the active ply. Side to move, result and phase
/// are all derived from the active snapshot and ply parity.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    history: Vec<Board>,
    ply: usize,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            history: vec![Board::empty()],
            ply: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn active_snapshot(&self) -> Board {
        self.history[self.ply]
    }

    pub fn ply(&self) -> usize {
        self.ply
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn current_mark(&self) -> Mark {
        if self.ply % 2 == 0 { Mark::X } else { Mark::O }
    }

    pub fn status(&self) -> GameStatus {
        evaluate(&self.active_snapshot())
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.active_snapshot())
    }

    pub fn phase(&self) -> GamePhase {
        if self.status().is_terminal() {
            GamePhase::Terminal
        } else if self.current_mark() == HUMAN_MARK {
            GamePhase::AwaitingHumanMove
        } else {
            GamePhase::AwaitingComputerMove
        }
    }

    /// Whether the human may place a mark on `cell` right now.
    pub fn can_place(&self, cell: usize) -> bool {
        self.phase() == GamePhase::AwaitingHumanMove && self.active_snapshot().is_empty_at(cell)
    }

    pub fn status_text(&self) -> String {
        match self.status() {
            GameStatus::XWon | GameStatus::OWon => {
                format!("Winner: {}", self.status().winner().unwrap_or_default())
            }
            GameStatus::Draw => "It's a draw".to_string(),
            GameStatus::InProgress => format!("Next player: {}", self.current_mark()),
        }
    }

    pub fn history_descriptors(&self) -> Vec<HistoryEntry> {
        (0..self.history.len())
            .map(|ply| HistoryEntry {
                ply,
                label: if ply == 0 {
                    "Go to game start".to_string()
                } else {
                    format!("Go to move #{}", ply)
                },
            })
            .collect()
    }

    pub fn place_mark(&mut self, cell: usize) -> Result<(), String> {
        match self.phase() {
            GamePhase::Terminal => return Err("Game is already over".to_string()),
            GamePhase::AwaitingComputerMove => {
                return Err("Waiting for the computer to move".to_string());
            }
            GamePhase::AwaitingHumanMove => {}
        }

        let next = self
            .active_snapshot()
            .with_mark(cell, HUMAN_MARK)
            .ok_or_else(|| format!("Cell {} is not available", cell))?;
        self.push_snapshot(next);
        Ok(())
    }

    pub fn pending_reply(&self) -> Option<PendingReply> {
        if self.phase() != GamePhase::AwaitingComputerMove {
            return None;
        }
        Some(PendingReply {
            ply: self.ply,
            board: self.active_snapshot(),
        })
    }

    pub fn computer_reply(&mut self) -> Result<usize, String> {
        let pending = self
            .pending_reply()
            .ok_or_else(|| "Not the computer's turn".to_string())?;
        self.apply_reply(&pending)
    }

    /// Plays the computer's move for `pending`, unless the active snapshot has
    /// moved on since the reply was scheduled.
    pub fn apply_reply(&mut self, pending: &PendingReply) -> Result<usize, String> {
        if self.active_snapshot() != pending.board {
            return Err(format!(
                "Reply scheduled at ply {} is stale (active ply is {})",
                pending.ply, self.ply
            ));
        }
        if self.phase() != GamePhase::AwaitingComputerMove {
            return Err("Not the computer's turn".to_string());
        }

        let Some(cell) = calculate_minimax_move(&BotInput::from_game_state(self)) else {
            unreachable!("non-terminal board without an empty cell");
        };
        let Some(next) = self.active_snapshot().with_mark(cell, COMPUTER_MARK) else {
            unreachable!("search returned occupied cell {}", cell);
        };
        self.push_snapshot(next);
        Ok(cell)
    }

    pub fn jump_to(&mut self, ply: usize) -> Result<(), String> {
        if ply >= self.history.len() {
            return Err(format!(
                "Ply {} is out of range (history has {} entries)",
                ply,
                self.history.len()
            ));
        }
        self.ply = ply;
        Ok(())
    }

    fn push_snapshot(&mut self, board: Board) {
        self.history.truncate(self.ply + 1);
        self.history.push(board);
        self.ply = self.history.len() - 1;
    }

    /// Appends a move for whichever side is to move, skipping turn checks.
    #[cfg(test)]
    pub(crate) fn play_unchecked(&mut self, cell: usize) {
        let next = self
            .active_snapshot()
            .with_mark(cell, self.current_mark())
            .unwrap();
        self.push_snapshot(next);
    }
}
