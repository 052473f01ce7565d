//! Move application tests: special cases and metadata bookkeeping.

use crate::game::{Color, Game, Move, MoveError, Piece, PromotablePiece, Promotion, Square};

fn mv(from: &str, to: &str) -> Move {
    Move::new(from.parse().unwrap(), to.parse().unwrap())
}

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn test_apply_never_mutates_the_input() {
    let game = Game::initial();
    let before = game.to_fen();
    let _ = game.apply_move(mv("e2", "e4"), None).unwrap();
    assert_eq!(game.to_fen(), before);
}

#[test]
fn test_generic_move_bookkeeping() {
    let game = Game::initial();

    let after_e4 = game.apply_move(mv("e2", "e4"), None).unwrap();
    assert!(!after_e4.info().white_to_move());
    assert_eq!(after_e4.info().move_number(), 1);
    assert_eq!(after_e4.info().en_passant_file(), Some(4));
    assert_eq!(after_e4.info().halfmove_clock(), 0);

    // A knight reply clears the en-passant file, ticks the clock and, being
    // Black's move, bumps the move number.
    let after_nf6 = after_e4.apply_move(mv("g8", "f6"), None).unwrap();
    assert!(after_nf6.info().white_to_move());
    assert_eq!(after_nf6.info().move_number(), 2);
    assert_eq!(after_nf6.info().en_passant_file(), None);
    assert_eq!(after_nf6.info().halfmove_clock(), 1);
}

#[test]
fn test_halfmove_clock_resets_on_capture() {
    let game = Game::from_fen("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 5 4");
    let after = game.apply_move(mv("e4", "d5"), None).unwrap();
    assert_eq!(after.info().halfmove_clock(), 0);
}

#[test]
fn test_en_passant_removes_the_bypassed_pawn() {
    let game = Game::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3");
    let after = game.apply_move(mv("e5", "d6"), None).unwrap();

    // The captured pawn stood on d5, one rank behind the destination.
    assert_eq!(after.board().piece_at(sq("d5")), None);
    assert_eq!(after.board().piece_at(sq("e5")), None);
    assert_eq!(
        after.board().piece_at(sq("d6")),
        Some((Color::White, Piece::Pawn))
    );
    assert_eq!(after.info().en_passant_file(), None);
    assert_eq!(after.info().halfmove_clock(), 0);
    assert_eq!(
        after.to_fen(),
        "rnbqkbnr/ppp1pppp/3P4/8/8/8/PPPP1PPP/RNBQKBNR b KQkq - 0 3"
    );
}

#[test]
fn test_promotion_default_is_queen() {
    let game = Game::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let after = game.apply_move(mv("a7", "a8"), None).unwrap();
    assert_eq!(
        after.board().piece_at(sq("a8")),
        Some((Color::White, Piece::Queen))
    );
    assert_eq!(after.info().halfmove_clock(), 0);
}

#[test]
fn test_underpromotion() {
    let game = Game::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let promo = Promotion::new(PromotablePiece::Knight, Color::White);
    let after = game.apply_move(mv("a7", "a8"), Some(promo)).unwrap();
    assert_eq!(
        after.board().piece_at(sq("a8")),
        Some((Color::White, Piece::Knight))
    );
}

#[test]
fn test_promotion_color_must_match_mover() {
    let game = Game::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let result = game.apply_move(mv("a7", "a8"), Some(Promotion::queen(Color::Black)));
    assert!(matches!(
        result,
        Err(MoveError::WrongPromotionColor {
            expected: Color::White,
            found: Color::Black,
        })
    ));
}

#[test]
fn test_kingside_castle_moves_both_pieces() {
    let game = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let after = game.apply_move(mv("e1", "g1"), None).unwrap();

    assert_eq!(
        after.board().piece_at(sq("g1")),
        Some((Color::White, Piece::King))
    );
    assert_eq!(
        after.board().piece_at(sq("f1")),
        Some((Color::White, Piece::Rook))
    );
    assert_eq!(after.board().piece_at(sq("h1")), None);
    assert_eq!(after.board().piece_at(sq("e1")), None);

    // Both of White's rights lapse, Black's survive, and castling is
    // neither a pawn move nor a capture.
    assert!(!after.info().castling().has(Color::White, true));
    assert!(!after.info().castling().has(Color::White, false));
    assert!(after.info().castling().has(Color::Black, true));
    assert_eq!(after.info().halfmove_clock(), 1);
    assert_eq!(after.to_fen(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 1 1");
}

#[test]
fn test_queenside_castle_as_black() {
    let game = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    let after = game.apply_move(mv("e8", "c8"), None).unwrap();

    assert_eq!(
        after.board().piece_at(sq("c8")),
        Some((Color::Black, Piece::King))
    );
    assert_eq!(
        after.board().piece_at(sq("d8")),
        Some((Color::Black, Piece::Rook))
    );
    assert_eq!(after.info().move_number(), 2);
    assert_eq!(after.to_fen(), "2kr3r/8/8/8/8/8/8/R3K2R w KQ - 1 2");
}

#[test]
fn test_rook_move_revokes_right_permanently() {
    let game = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");

    // White's king-side rook wanders off and comes straight back.
    let game = game.apply_move(mv("h1", "h2"), None).unwrap();
    let game = game.apply_move(mv("h8", "h7"), None).unwrap();
    let game = game.apply_move(mv("h2", "h1"), None).unwrap();
    let game = game.apply_move(mv("h7", "h8"), None).unwrap();

    assert!(!game.info().castling().has(Color::White, true));
    assert!(game.info().castling().has(Color::White, false));
    assert!(!game.is_legal_move(mv("e1", "g1")));
    assert!(game.is_legal_move(mv("e1", "c1")));
}

#[test]
fn test_king_move_revokes_both_rights() {
    let game = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");

    let game = game.apply_move(mv("e1", "e2"), None).unwrap();
    let game = game.apply_move(mv("h8", "h7"), None).unwrap();
    let game = game.apply_move(mv("e2", "e1"), None).unwrap();

    assert!(!game.info().castling().has(Color::White, true));
    assert!(!game.info().castling().has(Color::White, false));
}

#[test]
fn test_capturing_a_rook_in_place_leaves_the_right_recorded() {
    // Known behavior: only the rook *moving* from its original square
    // revokes a right, so capturing it where it stands leaves the right on
    // the books. The castle itself still fails for lack of a rook.
    let game = Game::from_fen("r3k3/8/8/8/8/8/6b1/R3K2R b KQq - 0 1");
    let after = game.apply_move(mv("g2", "h1"), None).unwrap();

    assert!(after.info().castling().has(Color::White, true));
    assert!(!after.is_legal_move(mv("e1", "g1")));
}

#[test]
fn test_apply_rejects_empty_origin() {
    let game = Game::initial();
    assert!(matches!(
        game.apply_move(mv("e4", "e5"), None),
        Err(MoveError::NoPieceAtOrigin { .. })
    ));
}

#[test]
fn test_apply_rejects_bad_geometry() {
    let game = Game::initial();
    assert!(matches!(
        game.apply_move(mv("e2", "e5"), None),
        Err(MoveError::IllegalMove { .. })
    ));
    // Opponent pieces may not be moved either.
    assert!(matches!(
        game.apply_move(mv("e7", "e5"), None),
        Err(MoveError::IllegalMove { .. })
    ));
}
