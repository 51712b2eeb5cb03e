use super::board::Board;
use super::types::{GameStatus, Mark, WinningLine};

pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// First completed line in row, column, diagonal order.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    for line in WINNING_LINES {
        let [a, b, c] = line;
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}

pub fn evaluate(board: &Board) -> GameStatus {
    match check_win(board) {
        Some(Mark::X) => GameStatus::XWon,
        Some(Mark::O) => GameStatus::OWon,
        Some(Mark::Empty) => unreachable!(),
        None if board.is_full() => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::get_available_moves;
    use crate::games::tictactoe::Mark::{Empty as E, O, X};

    #[test]
    fn test_empty_board_is_in_progress() {
        assert_eq!(evaluate(&Board::empty()), GameStatus::InProgress);
    }

    #[test]
    fn test_detects_rows_columns_and_diagonals() {
        let row = Board::from_cells([E, E, E, O, O, O, X, X, E]);
        let column = Board::from_cells([X, O, E, X, O, E, X, E, E]);
        let diagonal = Board::from_cells([O, X, X, E, O, X, E, E, O]);
        let anti_diagonal = Board::from_cells([O, O, X, E, X, E, X, E, E]);

        assert_eq!(evaluate(&row), GameStatus::OWon);
        assert_eq!(evaluate(&column), GameStatus::XWon);
        assert_eq!(evaluate(&diagonal), GameStatus::OWon);
        assert_eq!(evaluate(&anti_diagonal), GameStatus::XWon);
        assert_eq!(check_win_with_line(&anti_diagonal).unwrap().cells, [2, 4, 6]);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(evaluate(&board), GameStatus::Draw);
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        let board = Board::from_cells([X, X, X, O, O, X, X, O, O]);
        assert_eq!(evaluate(&board), GameStatus::XWon);
    }

    fn collect_reachable(board: Board, to_move: Mark, out: &mut Vec<Board>) {
        out.push(board);
        if evaluate(&board).is_terminal() {
            return;
        }
        for cell in get_available_moves(&board) {
            if let Some(next) = board.with_mark(cell, to_move) {
                collect_reachable(next, to_move.opponent().unwrap(), out);
            }
        }
    }

    #[test]
    fn test_reachable_boards_never_have_two_winners() {
        let mut boards = Vec::new();
        collect_reachable(Board::empty(), X, &mut boards);
        assert!(boards.len() > 5000);

        for board in boards {
            let cells = board.cells();
            let x_lines = WINNING_LINES
                .iter()
                .any(|line| line.iter().all(|&i| cells[i] == X));
            let o_lines = WINNING_LINES
                .iter()
                .any(|line| line.iter().all(|&i| cells[i] == O));
            assert!(!(x_lines && o_lines), "two winners on\n{}", board);
        }
    }
}
