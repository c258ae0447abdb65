//! Shared map builders for the Warden benchmarks.

#![forbid(unsafe_code)]

use warden_grid::PatrolMap;

/// The canonical 10×10 example map.
pub fn canonical_map() -> PatrolMap {
    PatrolMap::parse([
        "....#.....",
        ".........#",
        "..........",
        "..#.......",
        ".......#..",
        "..........",
        ".#..^.....",
        "........#.",
        "#.........",
        "......#...",
    ])
    .expect("canonical map parses")
}

/// A deterministic `size × size` map with a diagonal scatter of
/// obstacles and the guard starting near the bottom centre. Large enough
/// to exercise the parallel candidate sweep.
pub fn synthetic_map(size: usize) -> PatrolMap {
    assert!(size >= 4, "synthetic map needs room for the start cell");
    let start = (size - 2, size / 2);
    let lines: Vec<String> = (0..size)
        .map(|r| {
            (0..size)
                .map(|c| {
                    if (r, c) == start {
                        '^'
                    } else if r > 0 && c > 0 && (r * 7 + c * 11) % 23 == 0 {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect()
        })
        .collect();
    PatrolMap::parse(&lines).expect("synthetic map parses")
}
