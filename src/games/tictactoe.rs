//! Tic Tac Toe against a deliberately weak computer opponent.
//!
//! The human plays X and always moves first. A non-terminal human move is
//! answered immediately by O on a uniformly random empty cell; no lookahead.
//! The report names both cells so a host can delay painting the reply.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

use super::GameEngine;

/// Cells on the board.
pub const CELL_COUNT: usize = 9;

/// The 8 winning triples: 3 rows, 3 columns, 2 diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Suggested pause before painting the computer's reply. Pacing only; the
/// engine itself applies the reply synchronously.
pub const AI_REPLY_DELAY_MS: u32 = 500;

/// A player's mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    #[must_use]
    pub fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Game status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    Won(Mark),
    Tie,
}

/// What one human move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveReport {
    /// Cell occupied, out of range, or game already over.
    Ignored,
    /// Move applied. `reply` is the computer's cell, absent when the human
    /// move ended the game.
    Applied {
        cell: usize,
        reply: Option<usize>,
        status: Status,
    },
}

/// Tic-tac-toe board state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeState {
    board: [Option<Mark>; CELL_COUNT],
    to_move: Mark,
    status: Status,
}

/// Scan the 8 win lines for three equal non-empty marks.
#[must_use]
pub fn line_winner(board: &[Option<Mark>; CELL_COUNT]) -> Option<Mark> {
    WIN_LINES.iter().find_map(|&[a, b, c]| {
        board[a].filter(|&mark| board[b] == Some(mark) && board[c] == Some(mark))
    })
}

fn board_full(board: &[Option<Mark>; CELL_COUNT]) -> bool {
    board.iter().all(Option::is_some)
}

impl TicTacToeState {
    #[must_use]
    pub fn board(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.board
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Whose turn it is. Always X between calls, since O replies inline.
    #[must_use]
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    fn settle(&mut self) -> Status {
        self.status = match line_winner(&self.board) {
            Some(mark) => Status::Won(mark),
            None if board_full(&self.board) => Status::Tie,
            None => Status::InProgress,
        };
        self.status
    }

    /// Apply a human (X) move, then the automated O reply if the game goes on.
    pub fn place(&mut self, cell: usize, rng: &mut GameRng) -> MoveReport {
        if self.status != Status::InProgress
            || cell >= CELL_COUNT
            || self.board[cell].is_some()
        {
            return MoveReport::Ignored;
        }

        self.board[cell] = Some(Mark::X);
        self.to_move = Mark::O;

        if self.settle() != Status::InProgress {
            return MoveReport::Applied {
                cell,
                reply: None,
                status: self.status,
            };
        }

        let empty: Vec<usize> = (0..CELL_COUNT).filter(|&i| self.board[i].is_none()).collect();
        let reply = *rng.choose(&empty).expect("non-terminal board has an empty cell");
        self.board[reply] = Some(Mark::O);
        self.to_move = Mark::X;
        self.settle();

        MoveReport::Applied {
            cell,
            reply: Some(reply),
            status: self.status,
        }
    }

    #[cfg(test)]
    fn from_board(board: [Option<Mark>; CELL_COUNT]) -> Self {
        Self {
            board,
            to_move: Mark::X,
            status: Status::InProgress,
        }
    }
}

impl GameEngine for TicTacToeState {
    type Move = usize;
    type Report = MoveReport;

    fn new_game(_rng: &mut GameRng) -> Self {
        Self {
            board: [None; CELL_COUNT],
            to_move: Mark::X,
            status: Status::InProgress,
        }
    }

    fn apply(&mut self, mv: usize, rng: &mut GameRng) -> MoveReport {
        self.place(mv, rng)
    }

    fn is_terminal(&self) -> bool {
        self.status != Status::InProgress
    }
}
