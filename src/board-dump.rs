use std::env;

use anyhow::{bail, Context};
use chess_pieces::{encode, Board, PieceType};

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let names: Vec<String> = env::args().skip(1).collect();

    let mut failed = 0;
    for name in &names {
        match name.parse::<PieceType>() {
            Ok(kind) => println!("{name:?} -> {kind}"),
            Err(err) => {
                warn!("{err}");
                println!("{name:?} -> not found");
                failed += 1;
            }
        }
    }

    let board = Board::default();
    for piece in board.pieces() {
        println!("{piece}");
    }
    let bytes = encode(&board).context("Failed to encode standard setup")?;
    info!("Encoded board: {} bytes", bytes.len());
    println!("encoded: {} bytes", bytes.len());

    if failed > 0 {
        bail!("{failed} of {} names did not parse", names.len());
    }
    Ok(())
}
