//! Test suite for the minimax search
//! Validates tactical correctness and the game-theoretic value of 3x3 play

use tictactoe_engine::{Board, Game, GameOutcome, Player, Square, optimal_move};

mod terminal_positions {
    use super::*;

    #[test]
    fn won_board_yields_no_move() {
        let board = Board::from_string("XXXOO....").unwrap();
        assert!(board.is_terminal());
        assert_eq!(optimal_move(&board), None);
    }

    #[test]
    fn drawn_board_yields_no_move() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert!(board.is_terminal());
        assert_eq!(optimal_move(&board), None);
    }
}

mod tactical_play {
    use super::*;

    #[test]
    fn o_takes_its_own_win() {
        // O O .
        // X X .
        // . X .   O to move: (0, 2) wins immediately.
        let board = Board::from_string("OO.XX..X.").unwrap();
        assert_eq!(board.to_move(), Player::O);
        assert_eq!(optimal_move(&board), Some(Square::new(0, 2)));
    }

    #[test]
    fn o_avoids_the_corner_trap() {
        // X . .
        // . O .
        // . . X   O to move: a corner reply loses, an edge draws.
        let board = Board::from_string("X...O...X").unwrap();
        assert_eq!(board.to_move(), Player::O);

        let reply = optimal_move(&board).expect("position is not terminal");
        let corners = [
            Square::new(0, 0),
            Square::new(0, 2),
            Square::new(2, 0),
            Square::new(2, 2),
        ];
        assert!(
            !corners.contains(&reply),
            "replying in a corner loses against the double-corner opening, got {reply}"
        );
        // Row-major tie-break: the first drawing move is the top edge.
        assert_eq!(reply, Square::new(0, 1));
    }

    #[test]
    fn x_finds_a_forced_win() {
        // X O .
        // . X .
        // . O .   X to move: (2, 2) wins on the spot, but (0, 2) comes first
        // in enumeration order and forks both diagonals, so it wins too and
        // the strict-improvement tie-break keeps it.
        let board = Board::from_string("XO..X..O.").unwrap();
        assert_eq!(board.to_move(), Player::X);
        assert_eq!(optimal_move(&board), Some(Square::new(0, 2)));
    }
}

mod optimal_play {
    use super::*;

    #[test]
    fn opening_move_follows_the_enumeration_tie_break() {
        // Every opening drawn under optimal replies, so the first square in
        // row-major order is kept.
        assert_eq!(optimal_move(&Board::new()), Some(Square::new(0, 0)));
    }

    #[test]
    fn self_play_from_the_initial_position_is_a_draw() {
        let mut game = Game::new();

        while game.outcome.is_none() {
            let board = game.current_state().unwrap();
            let square = optimal_move(&board).expect("game is not over");
            game.play(square).unwrap();
        }

        assert_eq!(
            game.outcome,
            Some(GameOutcome::Draw),
            "optimal play on both sides must end in a draw"
        );
        assert_eq!(game.moves.len(), 9, "a drawn game fills the board");
    }

    #[test]
    fn x_never_loses_whatever_o_replies() {
        let opening = optimal_move(&Board::new()).expect("empty board is not terminal");
        let after_opening = Board::new().make_move(opening).unwrap();

        for reply in after_opening.legal_moves() {
            let mut board = after_opening.make_move(reply).unwrap();

            while !board.is_terminal() {
                let square = optimal_move(&board).expect("game is not over");
                board = board.make_move(square).unwrap();
            }

            assert!(
                board.utility() >= 0,
                "X played optimally but lost after O replied {reply}"
            );
        }
    }

    #[test]
    fn o_holds_the_draw_after_a_center_reply() {
        // X opens with a corner; taking the center is O's only drawing reply,
        // and from there neither side can force a win.
        let mut board = Board::new().make_move(Square::new(0, 0)).unwrap();
        board = board.make_move(Square::new(1, 1)).unwrap();

        while !board.is_terminal() {
            let square = optimal_move(&board).expect("game is not over");
            board = board.make_move(square).unwrap();
        }

        assert_eq!(board.utility(), 0, "corner opening with a center reply is drawn");
    }
}
