pub mod board;
pub mod codec;
pub mod definitions;
pub mod utils;
