//! Board state validation logic

use crate::board::{Board, Cell, N, Player};

impl Board {
    /// Check if the board state is valid according to the game rules.
    ///
    /// Validity is an opt-in query for callers constructing grids by hand;
    /// the core operations assume well-formed boards and do not call this.
    pub fn is_valid(&self) -> bool {
        let x_count = self.cells.iter().filter(|&&c| c == Cell::X).count();
        let o_count = self.cells.iter().filter(|&&c| c == Cell::O).count();

        // X opens, so X is never behind and never more than one ahead
        if !(x_count == o_count || x_count == o_count + 1) {
            return false;
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false; // Both can't win
        }

        // Whoever won must have moved last
        if x_wins && x_count != o_count + 1 {
            return false;
        }
        if o_wins && o_count != x_count {
            return false;
        }

        // Check for multiple winning lines that don't share a cell
        // (indicates an invalid continuation after a win)
        if x_wins && !self.winning_lines_share_cell(Player::X) {
            return false;
        }
        if o_wins && !self.winning_lines_share_cell(Player::O) {
            return false;
        }

        true
    }

    /// Check if all winning lines for a player share at least one cell.
    /// This is necessary for multiple lines to be formed in a single move.
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let cell = player.to_cell();
        let mut winning_lines: Vec<Vec<usize>> = Vec::new();

        for row in 0..N {
            if (0..N).all(|col| self.cells[row * N + col] == cell) {
                winning_lines.push((0..N).map(|col| row * N + col).collect());
            }
        }

        for col in 0..N {
            if (0..N).all(|row| self.cells[row * N + col] == cell) {
                winning_lines.push((0..N).map(|row| row * N + col).collect());
            }
        }

        if (0..N).all(|i| self.cells[i * N + i] == cell) {
            winning_lines.push((0..N).map(|i| i * N + i).collect());
        }
        if (0..N).all(|i| self.cells[i * N + (N - 1 - i)] == cell) {
            winning_lines.push((0..N).map(|i| i * N + (N - 1 - i)).collect());
        }

        // If fewer than 2 lines, trivially true
        if winning_lines.len() < 2 {
            return true;
        }

        // Check if there's a cell that appears in all winning lines
        for pos in 0..N * N {
            if winning_lines.iter().all(|line| line.contains(&pos)) {
                return true;
            }
        }

        false
    }

    /// Count valid states reachable from the empty board
    pub fn count_valid_states() -> usize {
        let mut count = 0;
        let mut stack = vec![Board::new()];
        let mut seen = std::collections::HashSet::new();

        while let Some(state) = stack.pop() {
            let key = state.encode();
            if seen.contains(&key) {
                continue;
            }
            seen.insert(key);

            if state.is_valid() {
                count += 1;

                if !state.is_terminal() {
                    for square in state.legal_moves() {
                        if let Ok(next) = state.make_move(square) {
                            stack.push(next);
                        }
                    }
                }
            }
        }

        count
    }
}
