use std::fmt::Display;

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};

use crate::core::definitions::{Color, Piece, PieceType};
use crate::core::utils::square_index;

const EMPTY: u8 = 0xFF;

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/** Pieces of one game plus a square -> piece index map.
 * Map cells hold an index into `pieces` or `EMPTY`. */
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    pieces: Vec<Piece>,
    #[serde_as(as = "Bytes")]
    map: [u8; 64],
}

/** Wire form of `Board`, checked before it becomes one. */
#[serde_as]
#[derive(Deserialize)]
struct RawBoard {
    pieces: Vec<Piece>,
    #[serde_as(as = "Bytes")]
    map: [u8; 64],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidBoardError {
    /** square, index */
    IndexOutOfRange(usize, u8),
    /** square, index */
    MisplacedPiece(usize, u8),
}

impl Display for InvalidBoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidBoardError::IndexOutOfRange(square, index) => {
                write!(f, "square {square} points to missing piece {index}")
            }
            InvalidBoardError::MisplacedPiece(square, index) => {
                write!(f, "square {square} points to piece {index} standing elsewhere")
            }
        }
    }
}

impl std::error::Error for InvalidBoardError {}

impl TryFrom<RawBoard> for Board {
    type Error = InvalidBoardError;

    fn try_from(value: RawBoard) -> Result<Self, Self::Error> {
        let RawBoard { pieces, map } = value;
        for (square, &index) in map.iter().enumerate() {
            if index == EMPTY {
                continue;
            }
            let error = match pieces.get(index as usize) {
                None => InvalidBoardError::IndexOutOfRange(square, index),
                Some(piece) if square_index(piece.position) != Some(square) => {
                    InvalidBoardError::MisplacedPiece(square, index)
                }
                Some(_) => continue,
            };
            debug!("Rejected board: {error}");
            return Err(error);
        }
        Ok(Board { pieces, map })
    }
}

impl Board {
    pub fn new() -> Board {
        let mut pieces = Vec::with_capacity(32);
        for (white, back, front) in [(true, 1, 2), (false, 8, 7)] {
            for (file, &kind) in (1..=8).zip(BACK_RANK.iter()) {
                pieces.push(Piece::new(white, kind, (file, back)));
            }
            for file in 1..=8 {
                pieces.push(Piece::new(white, PieceType::Pawn, (file, front)));
            }
        }

        let mut map = [EMPTY; 64];
        for (index, piece) in pieces.iter().enumerate() {
            if let Some(square) = square_index(piece.position) {
                map[square] = index as u8;
            }
        }
        trace!("Standard setup with {} pieces", pieces.len());
        Board { pieces, map }
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece_at(&self, position: (u8, u8)) -> Option<&Piece> {
        let square = square_index(position)?;
        match self.map[square] {
            EMPTY => None,
            index => self.pieces.get(index as usize),
        }
    }

    pub fn alive(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces
            .iter()
            .filter(move |piece| piece.alive && piece.color() == color)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
