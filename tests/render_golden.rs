//! Renders compared against `tests/testdata/`.
//!
//! Set `UPDATE_GOLDEN=1` to rewrite the fixtures from the current output.

use std::fs;
use std::path::PathBuf;

use randomart::{armor, Board, TileSet, GALAXY_TILES, SSH_TILES};

const FINGERPRINT: [u8; 16] = [
    0x9b, 0x4c, 0x7b, 0xce, 0x7a, 0xbd, 0x0a, 0x13, 0x61, 0xfb, 0x17, 0xc2, 0x06, 0x12, 0x0c, 0xed,
];

struct Case {
    tiles: TileSet,
    width: i32,
    height: i32,
    armor: bool,
}

const DATA: &[&[u8]] = &[&[], &FINGERPRINT];

const CASES: &[Case] = &[
    Case {
        tiles: SSH_TILES,
        width: 17,
        height: 9,
        armor: true,
    },
    Case {
        tiles: GALAXY_TILES,
        width: 10,
        height: 10,
        armor: false,
    },
];

fn fixture_path(data: &[u8], case: &Case) -> PathBuf {
    let slug = if data.is_empty() {
        "_empty".to_string()
    } else {
        hex::encode(data)
    };
    let suffix = if case.armor { "-armored" } else { "" };
    let name = format!(
        "{slug}.{}-{}x{}{suffix}.txt",
        case.tiles.id(),
        case.width,
        case.height
    );
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("testdata")
        .join(name)
}

fn update_golden() -> bool {
    std::env::var_os("UPDATE_GOLDEN").is_some_and(|v| v != "0")
}

#[test]
fn renders_match_golden_files() {
    for data in DATA {
        for case in CASES {
            let mut board = Board::new(case.width, case.height).unwrap();
            assert_eq!(board.walk(data), data.len());

            let mut got = board.render(&case.tiles);
            if case.armor {
                got = armor(&got);
            }

            let path = fixture_path(data, case);
            if update_golden() {
                fs::write(&path, &got).unwrap();
                eprintln!("updated golden file {}", path.display());
            }
            let want = fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("reading {}: {e}", path.display()));
            assert_eq!(got, want, "{}", path.display());
        }
    }
}

#[test]
fn armor_adds_two_lines_and_two_columns() {
    let mut board = Board::new(17, 9).unwrap();
    board.walk(&FINGERPRINT);
    let rendered = board.render(&SSH_TILES);
    let armored = armor(&rendered);

    let plain: Vec<&str> = rendered.lines().collect();
    let boxed: Vec<&str> = armored.lines().collect();
    assert_eq!(boxed.len(), plain.len() + 2);
    for (row, framed) in plain.iter().zip(&boxed[1..]) {
        assert_eq!(framed.len(), row.len() + 2);
    }
    assert!(boxed.iter().all(|l| l.len() == boxed[0].len()));
}
