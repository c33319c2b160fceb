use super::*;

#[test]
fn test_side_opponent() {
    assert_eq!(Side::Chicken.opponent(), Side::Fox);
    assert_eq!(Side::Fox.opponent(), Side::Chicken);
}

#[test]
fn test_piece_side() {
    assert_eq!(Piece::Fox.side(), Some(Side::Fox));
    assert_eq!(Piece::Chicken.side(), Some(Side::Chicken));
    assert_eq!(Piece::Empty.side(), None);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 3);
    assert_eq!(pos.to_index(), 3 * 7 + 3);
    assert_eq!(Pos::from_index(24), pos);
}

#[test]
fn test_pos_try_new_rejects_corners() {
    assert!(Pos::try_new(3, 3).is_ok());
    assert!(Pos::try_new(0, 2).is_ok());
    assert!(Pos::try_new(0, 0).is_err());
    assert!(Pos::try_new(6, 6).is_err());
    assert!(Pos::try_new(1, 5).is_err());
    assert!(Pos::try_new(-1, 3).is_err());
    assert!(Pos::try_new(3, 7).is_err());
}

#[test]
fn test_cross_has_33_cells() {
    let playable = (0..TOTAL_CELLS).filter(|&i| geometry::PLAYABLE[i]).count();
    assert_eq!(playable, geometry::PLAYABLE_CELLS);
    assert_eq!(playable, 33);
}

#[test]
fn test_corner_blocks_removed() {
    for (x, y) in [(0, 0), (1, 1), (5, 0), (6, 1), (0, 6), (1, 5), (6, 6), (5, 5)] {
        assert!(!geometry::is_playable(x, y), "({x}, {y}) should be cut out");
    }
    for (x, y) in [(2, 0), (3, 3), (0, 2), (6, 4), (4, 6)] {
        assert!(geometry::is_playable(x, y), "({x}, {y}) should be playable");
    }
}

#[test]
fn test_direction_counts() {
    // Chicken rule: left, right, up only.
    let (_, n) = geometry::directions(Pos::new(3, 3), true);
    assert_eq!(n, 3);
    // Full rule on an even-parity cell adds down and four diagonals.
    let (_, n) = geometry::directions(Pos::new(3, 3), false);
    assert_eq!(n, 8);
    // Odd parity drops the diagonals.
    let (_, n) = geometry::directions(Pos::new(3, 2), false);
    assert_eq!(n, 4);
}

#[test]
fn test_neighbors_stay_on_cross() {
    // (2, 2) is even parity; its up-left diagonal (1, 1) is cut out.
    let neighbors = geometry::neighbors(Pos::new(2, 2), false);
    assert!(!neighbors.contains(&Pos::new(1, 1)));
    assert!(neighbors.contains(&Pos::new(3, 3)));
}

#[test]
fn test_starting_layout() {
    let board = Board::new();
    assert_eq!(board.count(Piece::Chicken), 13);
    assert_eq!(board.count(Piece::Fox), 2);
    assert_eq!(board.piece_count(), 15);
    assert_eq!(board.side_to_move(), Side::Chicken);
    assert!(board.win_reason().is_none());

    assert_eq!(board.get(Pos::new(2, 3)), Piece::Fox);
    assert_eq!(board.get(Pos::new(4, 3)), Piece::Fox);
    assert_eq!(board.get(Pos::new(3, 3)), Piece::Empty);
    for y in 4..=6 {
        for x in 0..7 {
            if geometry::is_playable(x, y) {
                assert_eq!(board.get(Pos::new(x as u8, y as u8)), Piece::Chicken);
            }
        }
    }
}

#[test]
fn test_reset_restores_canonical_layout() {
    let mut board = Board::new();
    board.remove(Pos::new(3, 4));
    board.set(Pos::new(3, 1), Piece::Fox);
    board.flip_side();
    board.reset();

    let fresh = Board::new();
    assert_eq!(
        Snapshot::from_board(&board).fingerprint(),
        Snapshot::from_board(&fresh).fingerprint()
    );
    assert_eq!(board.side_to_move(), Side::Chicken);
    assert!(board.win_reason().is_none());
}

#[test]
#[should_panic(expected = "not on the playable cross")]
fn test_get_off_cross_panics() {
    let board = Board::new();
    board.get(Pos { x: 0, y: 0 });
}
