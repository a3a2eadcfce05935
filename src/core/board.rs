use std::fmt;
use std::ops::Index;

use crate::core::{error::BoardError, piece::*};

pub const BOARD_SIZE: usize = 8;

/// Fixed 8x8 grid of occupants.
///
/// Rows are stored top to bottom as seen from white, so storage row 0 holds
/// black's back rank. Callers always address squares by logical rank, where
/// rank 0 is white's back rank; [`Board::storage_row`] is the only place the
/// two are translated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Occupant; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    pub fn standard() -> Self {
        use PieceKind::*;

        let mut squares = [[None; BOARD_SIZE]; BOARD_SIZE];

        let back_rank = [
            BlackRook,
            BlackKnight,
            BlackBishop,
            BlackQueen,
            BlackKing,
            BlackBishop,
            BlackKnight,
            BlackRook,
        ];
        // King and queen are swapped relative to black's row. Kept as is.
        let front_rank = [
            WhiteRook,
            WhiteKnight,
            WhiteBishop,
            WhiteKing,
            WhiteQueen,
            WhiteBishop,
            WhiteKnight,
            WhiteRook,
        ];

        for i in 0..BOARD_SIZE {
            squares[Self::storage_row(7)][i] = Some(back_rank[i]);
            squares[Self::storage_row(6)][i] = Some(BlackPawn);
            squares[Self::storage_row(1)][i] = Some(WhitePawn);
            squares[Self::storage_row(0)][i] = Some(front_rank[i]);
        }

        Self { squares }
    }

    /// Standard layout plus a lone white pawn on rank 4, file 3. Sample data
    /// for poking at the hover highlight away from the home ranks.
    pub fn demo() -> Self {
        let mut board = Self::standard();
        board.squares[Self::storage_row(4)][3] = Some(PieceKind::WhitePawn);
        board
    }

    pub fn is_valid_pos(pos: (usize, usize)) -> bool {
        let (r, f) = pos;
        r < BOARD_SIZE && f < BOARD_SIZE
    }

    pub fn at(&self, rank: usize, file: usize) -> Result<Occupant, BoardError> {
        if !Self::is_valid_pos((rank, file)) {
            return Err(BoardError::OutOfBounds { rank, file });
        }
        Ok(self.squares[Self::storage_row(rank)][file])
    }

    /// Occupied squares in scan order: rank 7 down to rank 0, files left to right.
    pub fn occupied(&self) -> impl Iterator<Item = ((usize, usize), PieceKind)> + '_ {
        (0..BOARD_SIZE).rev().flat_map(move |rank| {
            (0..BOARD_SIZE).filter_map(move |file| {
                self.squares[Self::storage_row(rank)][file].map(|kind| ((rank, file), kind))
            })
        })
    }

    pub fn piece_count(&self) -> usize {
        self.occupied().count()
    }

    fn storage_row(rank: usize) -> usize {
        BOARD_SIZE - 1 - rank
    }
}

/// Panics on an out-of-range square; use [`Board::at`] for a checked lookup.
impl Index<(usize, usize)> for Board {
    type Output = Occupant;

    fn index(&self, (rank, file): (usize, usize)) -> &Self::Output {
        if !Self::is_valid_pos((rank, file)) {
            panic!("{}", BoardError::OutOfBounds { rank, file });
        }
        &self.squares[Self::storage_row(rank)][file]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..BOARD_SIZE).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..BOARD_SIZE {
                let c = self[(rank, file)].map_or('.', PieceKind::symbol);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for file in b'a'..=b'h' {
            write!(f, " {}", file as char)?;
        }
        writeln!(f)
    }
}
