use super::board::{Board, get_available_moves};
use super::game_state::TicTacToeGameState;
use super::types::Mark;
use super::win_detector::check_win;

pub const WIN_SCORE: i32 = 10;
pub const DRAW_SCORE: i32 = 0;

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.active_snapshot(),
            current_mark: state.current_mark(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub cell: usize,
    pub score: i32,
    pub nodes: u64,
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    search_best_move(input).map(|result| result.cell)
}

/// Exhaustive minimax from the point of view of `input.current_mark`.
///
/// Scores carry no depth term, so a slow forced win is worth the same as an
/// immediate one. Among equal scores the lowest cell index wins.
pub fn search_best_move(input: &BotInput) -> Option<SearchResult> {
    let bot_mark = input.current_mark;
    let opponent_mark = bot_mark.opponent()?;

    // The search only ever touches this scratch copy.
    let mut board = input.board;
    let mut nodes = 0u64;
    let mut best: Option<SearchResult> = None;

    for cell in get_available_moves(&board) {
        board.set(cell, bot_mark);
        let score = minimax(&mut board, false, bot_mark, opponent_mark, &mut nodes);
        board.set(cell, Mark::Empty);

        if best.is_none_or(|current| score > current.score) {
            best = Some(SearchResult { cell, score, nodes: 0 });
        }
    }

    best.map(|result| SearchResult { nodes, ..result })
}

fn minimax(
    board: &mut Board,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if let Some(winner) = check_win(board) {
        return if winner == bot_mark { WIN_SCORE } else { -WIN_SCORE };
    }

    let moves = get_available_moves(board);
    if moves.is_empty() {
        return DRAW_SCORE;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for cell in moves {
            board.set(cell, bot_mark);
            let eval = minimax(board, false, bot_mark, opponent_mark, nodes);
            board.set(cell, Mark::Empty);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for cell in moves {
            board.set(cell, opponent_mark);
            let eval = minimax(board, true, bot_mark, opponent_mark, nodes);
            board.set(cell, Mark::Empty);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::win_detector::evaluate;
    use std::collections::HashSet;
    use crate::games::tictactoe::Mark::{Empty as E, O, X};

    fn input(board: Board, current_mark: Mark) -> BotInput {
        BotInput { board, current_mark }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(search_best_move(&input(board, O)), None);
    }

    #[test]
    fn test_empty_mark_has_no_move() {
        assert_eq!(calculate_minimax_move(&input(Board::empty(), E)), None);
    }

    #[test]
    fn test_takes_immediate_win() {
        let board = Board::from_cells([X, X, E, O, O, E, X, E, E]);
        let result = search_best_move(&input(board, O)).unwrap();
        assert_eq!(result.cell, 5);
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_blocks_opponent_line() {
        let board = Board::from_cells([E, E, E, E, O, E, X, X, E]);
        let result = search_best_move(&input(board, O)).unwrap();
        assert_eq!(result.cell, 8);
        assert_eq!(result.score, DRAW_SCORE);
    }

    #[test]
    fn test_answers_corner_opening_with_center() {
        let board = Board::from_cells([X, E, E, E, E, E, E, E, E]);
        assert_eq!(calculate_minimax_move(&input(board, O)), Some(4));
    }

    #[test]
    fn test_ties_keep_lowest_index() {
        // Every opening move draws under perfect play.
        let result = search_best_move(&input(Board::empty(), X)).unwrap();
        assert_eq!(result.cell, 0);
        assert_eq!(result.score, DRAW_SCORE);
    }

    #[test]
    fn test_search_visits_whole_game_tree() {
        let result = search_best_move(&input(Board::empty(), X)).unwrap();
        assert_eq!(result.nodes, 549_945);
    }

    #[test]
    fn test_search_does_not_touch_input_board() {
        let board = Board::from_cells([X, E, E, E, O, E, E, E, X]);
        let bot_input = input(board, O);
        search_best_move(&bot_input);
        assert_eq!(bot_input.board, board);
    }

    fn collect_late_positions(
        board: Board,
        to_move: Mark,
        seen: &mut HashSet<(Board, Mark)>,
    ) {
        if evaluate(&board).is_terminal() || !seen.insert((board, to_move)) {
            return;
        }
        for cell in get_available_moves(&board) {
            if let Some(next) = board.with_mark(cell, to_move) {
                collect_late_positions(next, to_move.opponent().unwrap(), seen);
            }
        }
    }

    #[test]
    fn test_move_is_always_an_empty_cell() {
        let mut seen = HashSet::new();
        collect_late_positions(Board::empty(), X, &mut seen);

        let late: Vec<_> = seen
            .into_iter()
            .filter(|(board, _)| board.count(E) <= 5)
            .collect();
        assert!(!late.is_empty());

        for (board, to_move) in late {
            let cell = calculate_minimax_move(&input(board, to_move)).unwrap();
            assert!(board.is_empty_at(cell), "cell {} taken on\n{}", cell, board);
        }
    }

    #[test]
    fn test_self_play_ends_in_draw() {
        let mut board = Board::empty();
        let mut to_move = X;

        while !evaluate(&board).is_terminal() {
            let cell = calculate_minimax_move(&input(board, to_move)).unwrap();
            board = board.with_mark(cell, to_move).unwrap();
            to_move = to_move.opponent().unwrap();
        }

        assert!(board.is_full());
        assert_eq!(check_win(&board), None);
    }

    fn assert_never_loses(board: Board, computer: Mark) {
        let human = computer.opponent().unwrap();
        let status = evaluate(&board);
        assert_ne!(status.winner(), Some(human), "computer lost on\n{}", board);
        if status.is_terminal() {
            return;
        }

        let reply = calculate_minimax_move(&input(board, computer)).unwrap();
        let board = board.with_mark(reply, computer).unwrap();
        if evaluate(&board).is_terminal() {
            return;
        }

        for cell in get_available_moves(&board) {
            assert_never_loses(board.with_mark(cell, human).unwrap(), computer);
        }
    }

    #[test]
    fn test_center_opening_never_forces_a_loss() {
        let board = Board::empty().with_mark(4, X).unwrap();
        assert_never_loses(board, O);
    }
}
