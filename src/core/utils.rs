/** Files and ranks are counted from 1, as in the standard setup. */
#[inline]
pub fn is_on_board(position: (u8, u8)) -> bool {
    let (file, rank) = position;
    (1..=8).contains(&file) && (1..=8).contains(&rank)
}

/** Row-major index into an 8x8 map, `a1` is 0 and `h8` is 63. */
#[inline]
pub fn square_index(position: (u8, u8)) -> Option<usize> {
    if is_on_board(position) {
        let (file, rank) = position;
        Some((rank as usize - 1) * 8 + (file as usize - 1))
    } else {
        None
    }
}

const SQUARE_NAMES: [&str; 64] = [
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1",
    "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3",
    "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5",
    "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7",
    "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
];

pub fn square_name(position: (u8, u8)) -> Option<&'static str> {
    square_index(position).map(|index| SQUARE_NAMES[index])
}
