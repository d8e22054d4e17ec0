//! Win condition checking
//!
//! A move wins when the just-placed stone completes a line of five or more
//! contiguous same-color stones. Overlines (6+) also win.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i8, i8); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Five-in-a-row check at the just-placed position.
///
/// Only checks the 4 line directions through `pos`. No allocation. For each
/// direction the run is 1 (the placed stone) plus the contiguous same-color
/// extension each way, stopping at the first other cell or board edge.
#[inline]
pub fn is_winning_move(board: &Board, pos: Pos, color: Stone) -> bool {
    let sz = board.size() as i8;
    for (dr, dc) in DIRECTIONS {
        let mut count = 1i32;
        // Positive direction
        let mut r = pos.row as i8 + dr;
        let mut c = pos.col as i8 + dc;
        while r >= 0 && r < sz && c >= 0 && c < sz {
            if board.get(Pos::new(r as u8, c as u8)) == color {
                count += 1;
                r += dr;
                c += dc;
            } else {
                break;
            }
        }
        // Negative direction
        r = pos.row as i8 - dr;
        c = pos.col as i8 - dc;
        while r >= 0 && r < sz && c >= 0 && c < sz {
            if board.get(Pos::new(r as u8, c as u8)) == color {
                count += 1;
                r -= dr;
                c -= dc;
            } else {
                break;
            }
        }
        if count >= 5 {
            return true;
        }
    }
    false
}

/// Find the winning line through `pos` if one exists
///
/// Returns the first five cells of the completed line for highlighting,
/// `None` if the move did not complete a five.
pub fn winning_line(board: &Board, pos: Pos, color: Stone) -> Option<[Pos; 5]> {
    if board.get(pos) != color || color == Stone::Empty {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let mut line = vec![pos];

        // Extend in negative direction first
        for i in 1..5 {
            let r = pos.row as i32 - dr as i32 * i;
            let c = pos.col as i32 - dc as i32 * i;
            if !Pos::is_valid(r, c) {
                break;
            }
            let prev = Pos::new(r as u8, c as u8);
            if board.get(prev) == color {
                line.insert(0, prev);
            } else {
                break;
            }
        }

        // Extend in positive direction
        for i in 1..5 {
            let r = pos.row as i32 + dr as i32 * i;
            let c = pos.col as i32 + dc as i32 * i;
            if !Pos::is_valid(r, c) {
                break;
            }
            let next = Pos::new(r as u8, c as u8);
            if board.get(next) == color {
                line.push(next);
            } else {
                break;
            }
        }

        if line.len() >= 5 {
            return Some([line[0], line[1], line[2], line[3], line[4]]);
        }
    }
    None
}
