//! Winning line analysis

use std::collections::HashSet;

use crate::board::{Cell, N, Player, Square};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Winner of the board, if a line is completely held by one mark.
    ///
    /// The scan order is part of the contract: all rows first, then all
    /// columns, then the main diagonal, then the anti-diagonal (only
    /// consulted when the main diagonal does not match). A later matching
    /// line overrides an earlier one. A line only matches when its anchor
    /// cell is non-empty, so a row of blanks can never mask a real win.
    /// Full lines of two different marks cannot arise in legal play.
    pub fn winner(cells: &[Cell; N * N]) -> Option<Player> {
        let mut winning = None;

        for row in 0..N {
            let anchor = cells[row * N];
            if anchor != Cell::Empty && (1..N).all(|col| cells[row * N + col] == anchor) {
                winning = anchor.to_player();
                break;
            }
        }

        for col in 0..N {
            let anchor = cells[col];
            if anchor != Cell::Empty && (1..N).all(|row| cells[row * N + col] == anchor) {
                winning = anchor.to_player();
                break;
            }
        }

        let main = cells[0];
        if main != Cell::Empty && (1..N).all(|i| cells[i * N + i] == main) {
            winning = main.to_player();
        } else {
            let anti = cells[N - 1];
            if anti != Cell::Empty && (1..N).all(|i| cells[i * N + (N - 1 - i)] == anti) {
                winning = anti.to_player();
            }
        }

        winning
    }

    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &[Cell; N * N], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Find all squares that would immediately win for the player
    pub fn winning_moves(cells: &[Cell; N * N], player: Player) -> HashSet<Square> {
        let mut moves = HashSet::new();
        for &line in &WINNING_LINES {
            if let Some(square) = Self::winning_move_in_line(cells, player, &line) {
                moves.insert(square);
            }
        }
        moves
    }

    /// Check if a player has an immediate winning move available (2 in a line with 1 empty)
    pub fn has_immediate_win(cells: &[Cell; N * N], player: Player) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| Self::winning_move_in_line(cells, player, line).is_some())
    }

    /// Find the winning move in a specific line, if one exists
    fn winning_move_in_line(
        cells: &[Cell; N * N],
        player: Player,
        line: &[usize; 3],
    ) -> Option<Square> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        // More than one empty cell, not a winning move
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None, // Opponent piece in line
            }
        }

        if count == 2 {
            empty_pos.map(Square::from_index)
        } else {
            None
        }
    }
}
