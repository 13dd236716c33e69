use super::TileInfo;

/// English wordfeud tiles: letter, count, points
pub const WORDFEUD: &[TileInfo] = &[
    ('*', 2, 0),
    ('a', 10, 1),
    ('b', 2, 4),
    ('c', 2, 4),
    ('d', 5, 2),
    ('e', 12, 1),
    ('f', 2, 4),
    ('g', 3, 3),
    ('h', 3, 4),
    ('i', 9, 1),
    ('j', 1, 10),
    ('k', 1, 5),
    ('l', 4, 1),
    ('m', 2, 3),
    ('n', 6, 1),
    ('o', 7, 1),
    ('p', 2, 4),
    ('q', 1, 10),
    ('r', 6, 1),
    ('s', 5, 1),
    ('t', 7, 1),
    ('u', 4, 2),
    ('v', 2, 4),
    ('w', 2, 4),
    ('x', 1, 8),
    ('y', 2, 4),
    ('z', 1, 10),
];

/// English scrabble tiles: letter, count, points
pub const SCRABBLE: &[TileInfo] = &[
    ('*', 2, 0),
    ('a', 9, 1),
    ('b', 2, 3),
    ('c', 2, 3),
    ('d', 4, 2),
    ('e', 12, 1),
    ('f', 2, 4),
    ('g', 3, 2),
    ('h', 2, 4),
    ('i', 9, 1),
    ('j', 1, 8),
    ('k', 1, 5),
    ('l', 4, 1),
    ('m', 2, 3),
    ('n', 6, 1),
    ('o', 8, 1),
    ('p', 2, 3),
    ('q', 1, 10),
    ('r', 6, 1),
    ('s', 4, 1),
    ('t', 6, 1),
    ('u', 4, 1),
    ('v', 2, 4),
    ('w', 2, 4),
    ('x', 1, 8),
    ('y', 2, 4),
    ('z', 1, 10),
];
