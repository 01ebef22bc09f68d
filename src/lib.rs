pub mod core;

// module re-exports
pub use self::core::board::{Board, InvalidBoardError};
pub use self::core::codec::{decode, encode, CodecError};
pub use self::core::definitions::{Color, Piece, PieceType, UnrecognizedPieceTypeName};
