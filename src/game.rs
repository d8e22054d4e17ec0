//! Game state: turn bookkeeping and the play-move transaction

use crate::board::{Board, Pos, Stone};
use crate::rules;

use log::{debug, info};

/// Outcome of a single [`Game::play`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Out-of-range or occupied cell; no state changed
    Rejected,
    /// Stone placed, no win, turn flipped
    Placed(Stone),
    /// Stone placed and it completed five-in-a-row; turn not flipped
    Won(Stone),
}

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Stone,
    pub winning_line: [Pos; 5],
}

/// Main game state
///
/// Owns the board and the turn indicator. All mutation goes through
/// [`Game::play`] and [`Game::reset`]; placing, win checking and turn
/// flipping are one transaction so callers cannot sequence them wrong.
pub struct Game {
    board: Board,
    current_turn: Stone,
    winner: Option<GameResult>,
    last_move: Option<Pos>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Stone::Black,
            winner: None,
            last_move: None,
        }
    }

    /// Play the current color's stone at `pos`
    ///
    /// A click after a win first resets the board, so the move lands on a
    /// fresh game with Black to move. Invalid moves are silently rejected
    /// with no state change.
    pub fn play(&mut self, pos: Pos) -> MoveOutcome {
        if self.winner.is_some() {
            self.reset();
        }

        if !pos.in_bounds() || !self.board.is_empty(pos) {
            return MoveOutcome::Rejected;
        }

        let color = self.current_turn;
        self.board.place_stone(pos, color);
        self.last_move = Some(pos);
        debug!("{} plays ({}, {})", color.name(), pos.row, pos.col);

        if let Some(line) = rules::winning_line(&self.board, pos, color) {
            self.winner = Some(GameResult {
                winner: color,
                winning_line: line,
            });
            info!("{} wins", color.name());
            return MoveOutcome::Won(color);
        }

        self.current_turn = color.opponent();
        MoveOutcome::Placed(color)
    }

    /// Start a fresh game: every cell Empty, Black to move
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_turn = Stone::Black;
        self.winner = None;
        self.last_move = None;
        info!("board reset");
    }

    /// Whose move is next (Black or White, never Empty)
    #[inline]
    pub fn current_turn(&self) -> Stone {
        self.current_turn
    }

    /// Stone at `pos`; Empty for out-of-range input
    #[inline]
    pub fn stone_at(&self, pos: Pos) -> Stone {
        self.board.get(pos)
    }

    /// Read-only view of the board for rendering
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn winner(&self) -> Option<&GameResult> {
        self.winner.as_ref()
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[inline]
    pub fn stones_placed(&self) -> u32 {
        self.board.stone_count()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive a horizontal black five at row 7, with white replies on column 0
    fn play_black_five(game: &mut Game) -> MoveOutcome {
        for i in 0..4 {
            assert_eq!(game.play(Pos::new(7, i)), MoveOutcome::Placed(Stone::Black));
            assert_eq!(game.play(Pos::new(i, 0)), MoveOutcome::Placed(Stone::White));
        }
        game.play(Pos::new(7, 4))
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.current_turn(), Stone::Black);
        assert!(game.winner().is_none());
        assert!(game.last_move().is_none());
        assert_eq!(game.stones_placed(), 0);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut game = Game::new();
        assert_eq!(game.play(Pos::new(15, 0)), MoveOutcome::Rejected);
        assert_eq!(game.play(Pos::new(0, 15)), MoveOutcome::Rejected);
        assert_eq!(game.play(Pos::new(255, 255)), MoveOutcome::Rejected);
        // No state change: still Black's move on an empty board
        assert_eq!(game.current_turn(), Stone::Black);
        assert_eq!(game.stones_placed(), 0);
        assert!(game.last_move().is_none());
    }

    #[test]
    fn test_occupied_rejected() {
        let mut game = Game::new();
        assert_eq!(game.play(Pos::new(7, 7)), MoveOutcome::Placed(Stone::Black));
        assert_eq!(game.play(Pos::new(7, 7)), MoveOutcome::Rejected);
        // Rejection does not flip the turn or touch the cell
        assert_eq!(game.current_turn(), Stone::White);
        assert_eq!(game.stone_at(Pos::new(7, 7)), Stone::Black);
        assert_eq!(game.stones_placed(), 1);
    }

    #[test]
    fn test_turn_alternation() {
        let mut game = Game::new();
        // Odd moves are Black's, even moves are White's
        for n in 0..10u8 {
            let expected = if n % 2 == 0 { Stone::Black } else { Stone::White };
            assert_eq!(game.current_turn(), expected);
            assert_eq!(game.play(Pos::new(n, 0)), MoveOutcome::Placed(expected));
        }
    }

    #[test]
    fn test_horizontal_win() {
        let mut game = Game::new();
        assert_eq!(play_black_five(&mut game), MoveOutcome::Won(Stone::Black));

        let result = game.winner().unwrap();
        assert_eq!(result.winner, Stone::Black);
        assert_eq!(result.winning_line[0], Pos::new(7, 0));
        assert_eq!(result.winning_line[4], Pos::new(7, 4));
        // Winning move does not flip the turn
        assert_eq!(game.current_turn(), Stone::Black);
    }

    #[test]
    fn test_diagonal_win() {
        let mut game = Game::new();
        // Black on the main diagonal (5,5)..(9,9), White on column 0
        for i in 0..4 {
            assert_eq!(
                game.play(Pos::new(5 + i, 5 + i)),
                MoveOutcome::Placed(Stone::Black)
            );
            assert_eq!(game.play(Pos::new(i, 0)), MoveOutcome::Placed(Stone::White));
        }
        assert_eq!(game.play(Pos::new(9, 9)), MoveOutcome::Won(Stone::Black));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let mut game = Game::new();
        // Black at (9,5),(8,6),(7,7),(6,8), then (5,9) completes the five
        for i in 0..4 {
            assert_eq!(
                game.play(Pos::new(9 - i, 5 + i)),
                MoveOutcome::Placed(Stone::Black)
            );
            assert_eq!(game.play(Pos::new(i, 0)), MoveOutcome::Placed(Stone::White));
        }
        assert_eq!(game.play(Pos::new(5, 9)), MoveOutcome::Won(Stone::Black));
    }

    #[test]
    fn test_white_can_win() {
        let mut game = Game::new();
        // Black scattered on row 0, White builds a vertical five on column 7
        for i in 0..4 {
            assert_eq!(game.play(Pos::new(0, i)), MoveOutcome::Placed(Stone::Black));
            assert_eq!(
                game.play(Pos::new(5 + i, 7)),
                MoveOutcome::Placed(Stone::White)
            );
        }
        assert_eq!(game.play(Pos::new(0, 10)), MoveOutcome::Placed(Stone::Black));
        assert_eq!(game.play(Pos::new(9, 7)), MoveOutcome::Won(Stone::White));
    }

    #[test]
    fn test_overline_win() {
        let mut game = Game::new();
        // Black fills (7,0),(7,1),(7,2),(7,4),(7,5); placing (7,3) makes six
        let black_cols = [0u8, 1, 2, 4, 5];
        for (i, &col) in black_cols.iter().enumerate() {
            assert_eq!(game.play(Pos::new(7, col)), MoveOutcome::Placed(Stone::Black));
            // White replies spaced out so they never connect
            assert_eq!(
                game.play(Pos::new(2 * i as u8, 14)),
                MoveOutcome::Placed(Stone::White)
            );
        }
        assert_eq!(game.play(Pos::new(7, 3)), MoveOutcome::Won(Stone::Black));
    }

    #[test]
    fn test_blocked_four_never_wins() {
        let mut game = Game::new();
        // White blocks both ends of a growing black four on row 7
        assert_eq!(game.play(Pos::new(7, 3)), MoveOutcome::Placed(Stone::Black));
        assert_eq!(game.play(Pos::new(7, 2)), MoveOutcome::Placed(Stone::White));
        assert_eq!(game.play(Pos::new(7, 4)), MoveOutcome::Placed(Stone::Black));
        assert_eq!(game.play(Pos::new(7, 7)), MoveOutcome::Placed(Stone::White));
        assert_eq!(game.play(Pos::new(7, 5)), MoveOutcome::Placed(Stone::Black));
        assert_eq!(game.play(Pos::new(0, 0)), MoveOutcome::Placed(Stone::White));
        assert_eq!(game.play(Pos::new(7, 6)), MoveOutcome::Placed(Stone::Black));
        assert!(game.winner().is_none());
        // Unrelated later placements never turn the blocked four into a win
        assert_eq!(game.play(Pos::new(0, 1)), MoveOutcome::Placed(Stone::White));
        assert_eq!(game.play(Pos::new(10, 10)), MoveOutcome::Placed(Stone::Black));
        assert!(game.winner().is_none());
    }

    #[test]
    fn test_reset() {
        let mut game = Game::new();
        game.play(Pos::new(7, 7));
        game.play(Pos::new(7, 8));
        game.reset();
        assert_eq!(game.current_turn(), Stone::Black);
        assert_eq!(game.stones_placed(), 0);
        assert!(game.winner().is_none());
        assert!(game.last_move().is_none());
        assert_eq!(game.stone_at(Pos::new(7, 7)), Stone::Empty);
    }

    #[test]
    fn test_reset_before_next_move_after_win() {
        let mut game = Game::new();
        assert_eq!(play_black_five(&mut game), MoveOutcome::Won(Stone::Black));

        // Next move lands on a fresh board with Black first
        assert_eq!(game.play(Pos::new(7, 0)), MoveOutcome::Placed(Stone::Black));
        assert!(game.winner().is_none());
        assert_eq!(game.stones_placed(), 1);
        assert_eq!(game.stone_at(Pos::new(7, 4)), Stone::Empty);
        assert_eq!(game.current_turn(), Stone::White);
    }

    #[test]
    fn test_rejected_click_after_win_still_resets() {
        let mut game = Game::new();
        assert_eq!(play_black_five(&mut game), MoveOutcome::Won(Stone::Black));

        // Out-of-range click: the pending reset still runs first
        assert_eq!(game.play(Pos::new(20, 20)), MoveOutcome::Rejected);
        assert!(game.winner().is_none());
        assert_eq!(game.stones_placed(), 0);
        assert_eq!(game.current_turn(), Stone::Black);
    }
}
