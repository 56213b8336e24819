//! Exhaustive adversarial search
//!
//! Full game-tree minimax with no pruning and no memoization: every legal
//! continuation is evaluated down to a terminal board. The cost grows
//! factorially with the number of empty cells, which is only acceptable
//! because the board is 3x3 (at most 9! move orderings from the root, far
//! fewer in practice since wins cut lines short).

use crate::board::{Board, Player, Square};

/// Optimal move for the player to move, or `None` if the game is over.
///
/// X maximizes the utility and O minimizes it; the returned move is optimal
/// against an opponent who also plays optimally.
pub fn optimal_move(board: &Board) -> Option<Square> {
    if board.is_terminal() {
        return None;
    }

    match board.to_move() {
        Player::X => maximize(board).1,
        Player::O => minimize(board).1,
    }
}

/// Best score X can force from this board, with the move that achieves it.
///
/// Only a strictly better score replaces the running best, so among equally
/// good moves the first one in enumeration order is kept.
fn maximize(board: &Board) -> (i32, Option<Square>) {
    if board.is_terminal() {
        return (board.utility(), None);
    }

    let mut max_value = i32::MIN;
    let mut max_move = None;

    for square in board.legal_moves() {
        let next = board
            .make_move(square)
            .expect("legal move generation should not fail");
        let (value, _) = minimize(&next);
        if value > max_value {
            max_value = value;
            max_move = Some(square);
        }
    }

    (max_value, max_move)
}

/// Best score O can force from this board, with the move that achieves it.
fn minimize(board: &Board) -> (i32, Option<Square>) {
    if board.is_terminal() {
        return (board.utility(), None);
    }

    let mut min_value = i32::MAX;
    let mut min_move = None;

    for square in board.legal_moves() {
        let next = board
            .make_move(square)
            .expect("legal move generation should not fail");
        let (value, _) = maximize(&next);
        if value < min_value {
            min_value = value;
            min_move = Some(square);
        }
    }

    (min_value, min_move)
}
