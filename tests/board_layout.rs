use holyhell::core::board::Board;
use holyhell::core::error::BoardError;
use holyhell::core::piece::PieceKind::{self, *};

fn rank(board: &Board, rank: usize) -> Vec<Option<PieceKind>> {
    (0..8).map(|file| board.at(rank, file).unwrap()).collect()
}

#[test]
fn every_square_is_defined() {
    for board in [Board::standard(), Board::demo()] {
        for r in 0..8 {
            for f in 0..8 {
                assert!(board.at(r, f).is_ok(), "({r}, {f})");
            }
        }
    }
}

#[test]
fn out_of_range_lookups_fail() {
    let board = Board::standard();
    assert_eq!(board.at(8, 0), Err(BoardError::OutOfBounds { rank: 8, file: 0 }));
    assert_eq!(board.at(0, 8), Err(BoardError::OutOfBounds { rank: 0, file: 8 }));
    assert_eq!(
        board.at(usize::MAX, 3),
        Err(BoardError::OutOfBounds { rank: usize::MAX, file: 3 })
    );
}

#[test]
#[should_panic(expected = "square out of bounds: rank 8, file 0")]
fn indexing_out_of_range_panics() {
    let _ = Board::standard()[(8, 0)];
}

#[test]
fn starting_ranks_match_fixture() {
    let board = Board::standard();
    let some = |v: [PieceKind; 8]| v.map(Some).to_vec();

    assert_eq!(
        rank(&board, 7),
        some([BlackRook, BlackKnight, BlackBishop, BlackQueen, BlackKing, BlackBishop, BlackKnight, BlackRook])
    );
    assert_eq!(rank(&board, 6), some([BlackPawn; 8]));
    assert_eq!(rank(&board, 1), some([WhitePawn; 8]));
    assert_eq!(
        rank(&board, 0),
        some([WhiteRook, WhiteKnight, WhiteBishop, WhiteKing, WhiteQueen, WhiteBishop, WhiteKnight, WhiteRook])
    );
    for r in 2..6 {
        assert_eq!(rank(&board, r), vec![None; 8], "rank {r}");
    }
    assert_eq!(board.piece_count(), 32);
}

#[test]
fn index_agrees_with_at() {
    let board = Board::demo();
    for r in 0..8 {
        for f in 0..8 {
            assert_eq!(Ok(board[(r, f)]), board.at(r, f));
        }
    }
}
