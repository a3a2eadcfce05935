use std::fmt;

use crate::core::Color;

/// Contents of a single square. `None` is the empty square, so every cell of the
/// board always holds exactly one of 13 values.
pub type Occupant = Option<PieceKind>;

#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum PieceKind {
    BlackBishop,
    BlackKing,
    BlackKnight,
    BlackPawn,
    BlackQueen,
    BlackRook,
    WhiteBishop,
    WhiteKing,
    WhiteKnight,
    WhitePawn,
    WhiteQueen,
    WhiteRook,
}

#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    pub fn name(self) -> &'static str {
        match self {
            PieceType::Pawn => "pawn",
            PieceType::Knight => "knight",
            PieceType::Bishop => "bishop",
            PieceType::Rook => "rook",
            PieceType::Queen => "queen",
            PieceType::King => "king",
        }
    }
}

impl PieceKind {
    pub const ALL: [PieceKind; 12] = [
        PieceKind::WhitePawn,
        PieceKind::WhiteKnight,
        PieceKind::WhiteBishop,
        PieceKind::WhiteRook,
        PieceKind::WhiteQueen,
        PieceKind::WhiteKing,
        PieceKind::BlackPawn,
        PieceKind::BlackKnight,
        PieceKind::BlackBishop,
        PieceKind::BlackRook,
        PieceKind::BlackQueen,
        PieceKind::BlackKing,
    ];

    pub fn new(piece_type: PieceType, color: Color) -> Self {
        use PieceKind::*;

        match (color, piece_type) {
            (Color::White, PieceType::Pawn) => WhitePawn,
            (Color::White, PieceType::Knight) => WhiteKnight,
            (Color::White, PieceType::Bishop) => WhiteBishop,
            (Color::White, PieceType::Rook) => WhiteRook,
            (Color::White, PieceType::Queen) => WhiteQueen,
            (Color::White, PieceType::King) => WhiteKing,
            (Color::Black, PieceType::Pawn) => BlackPawn,
            (Color::Black, PieceType::Knight) => BlackKnight,
            (Color::Black, PieceType::Bishop) => BlackBishop,
            (Color::Black, PieceType::Rook) => BlackRook,
            (Color::Black, PieceType::Queen) => BlackQueen,
            (Color::Black, PieceType::King) => BlackKing,
        }
    }

    pub fn color(self) -> Color {
        use PieceKind::*;

        match self {
            WhiteBishop | WhiteKing | WhiteKnight | WhitePawn | WhiteQueen | WhiteRook => {
                Color::White
            }
            BlackBishop | BlackKing | BlackKnight | BlackPawn | BlackQueen | BlackRook => {
                Color::Black
            }
        }
    }

    pub fn piece_type(self) -> PieceType {
        use PieceKind::*;
        use PieceType::*;

        match self {
            WhitePawn | BlackPawn => Pawn,
            WhiteKnight | BlackKnight => Knight,
            WhiteBishop | BlackBishop => Bishop,
            WhiteRook | BlackRook => Rook,
            WhiteQueen | BlackQueen => Queen,
            WhiteKing | BlackKing => King,
        }
    }

    /// FEN letter, uppercase for white.
    pub fn symbol(self) -> char {
        let c = match self.piece_type() {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        };
        match self.color() {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color(), self.piece_type().name())
    }
}
