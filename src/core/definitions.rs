use std::fmt::Display;
use std::ops::Not;
use std::str::FromStr;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::utils::square_name;

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
pub enum PieceType {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Rook,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Queen,
        PieceType::King,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PieceType::Pawn => "Pawn",
            PieceType::Rook => "Rook",
            PieceType::Knight => "Knight",
            PieceType::Bishop => "Bishop",
            PieceType::Queen => "Queen",
            PieceType::King => "King",
        }
    }

    /** Exact, case-sensitive lookup by canonical name. */
    pub fn from_name(name: &str) -> Option<PieceType> {
        match name {
            "Pawn" => Some(PieceType::Pawn),
            "Rook" => Some(PieceType::Rook),
            "Knight" => Some(PieceType::Knight),
            "Bishop" => Some(PieceType::Bishop),
            "Queen" => Some(PieceType::Queen),
            "King" => Some(PieceType::King),
            _ => None,
        }
    }
}

impl Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedPieceTypeName(pub String);

impl Display for UnrecognizedPieceTypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unrecognized piece type name: {:?}", self.0)
    }
}

impl std::error::Error for UnrecognizedPieceTypeName {}

impl FromStr for PieceType {
    type Err = UnrecognizedPieceTypeName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceType::from_name(s).ok_or_else(|| {
            trace!("No piece type named {s:?}");
            UnrecognizedPieceTypeName(s.to_owned())
        })
    }
}

#[derive(PartialEq, Eq, Hash, Debug, Default, Clone, Copy, Serialize, Deserialize)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub fn from_white(white: bool) -> Color {
        if white {
            Color::White
        } else {
            Color::Black
        }
    }

    pub fn is_white(self) -> bool {
        self == Color::White
    }
}

impl Not for Color {
    type Output = Color;

    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(if self.is_white() { "White" } else { "Black" })
    }
}

/** One piece on (or taken off) the board.
 * `position` is (file, rank) and is not checked against the board size. */
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub white: bool,
    pub piecetype: PieceType,
    pub position: (u8, u8),
    pub alive: bool,
}

impl Piece {
    pub fn new(white: bool, piecetype: PieceType, position: (u8, u8)) -> Piece {
        Piece::with_alive(white, piecetype, position, true)
    }

    pub fn with_alive(white: bool, piecetype: PieceType, position: (u8, u8), alive: bool) -> Piece {
        Piece {
            white,
            piecetype,
            position,
            alive,
        }
    }

    pub fn color(&self) -> Color {
        Color::from_white(self.white)
    }
}

impl Default for Piece {
    fn default() -> Self {
        Piece::new(false, PieceType::Pawn, (0, 0))
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let square = match square_name(self.position) {
            Some(square) => square.to_owned(),
            None => format!("{:?}", self.position),
        };
        let captured = if self.alive { "" } else { " (captured)" };
        f.pad(&format!("{} {} {square}{captured}", self.color(), self.piecetype))
    }
}
