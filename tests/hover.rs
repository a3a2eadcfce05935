use eframe::egui::{Context, pos2};

use holyhell::core::board::Board;
use holyhell::core::geometry::Geometry;
use holyhell::gui::launch::HolyHell;

#[test]
fn top_left_pixel_of_a8_is_inclusive() {
    let geometry = Geometry::default();
    let board = Board::standard();
    let rect = geometry.square_rect(7, 0);

    assert_eq!(geometry.resolve_hover(&board, rect.min), Some((7, 0)));
    assert_ne!(
        geometry.resolve_hover(&board, pos2(rect.left() - 1.0, rect.top())),
        Some((7, 0))
    );
    assert_ne!(
        geometry.resolve_hover(&board, pos2(rect.left(), rect.top() - 1.0)),
        Some((7, 0))
    );
}

#[test]
fn right_and_bottom_edges_belong_to_neighbours() {
    let geometry = Geometry::default();
    let board = Board::standard();
    let rect = geometry.square_rect(7, 0);

    assert_eq!(geometry.resolve_hover(&board, pos2(rect.right(), rect.top())), Some((7, 1)));
    assert_eq!(geometry.resolve_hover(&board, pos2(rect.left(), rect.bottom())), Some((6, 0)));
    assert_eq!(
        geometry.resolve_hover(&board, pos2(rect.right() - 0.5, rect.bottom() - 0.5)),
        Some((7, 0))
    );
}

#[test]
fn empty_squares_are_never_hovered() {
    let geometry = Geometry::default();
    let board = Board::standard();
    let rect = geometry.square_rect(4, 0);

    for dx in [0.0, 1.0, rect.width() / 2.0, rect.width() - 0.01] {
        for dy in [0.0, 1.0, rect.height() / 2.0, rect.height() - 0.01] {
            assert_eq!(geometry.resolve_hover(&board, rect.min + eframe::egui::vec2(dx, dy)), None);
        }
    }
}

#[test]
fn demo_pawn_is_hoverable() {
    let geometry = Geometry::default();
    let rect = geometry.square_rect(4, 3);

    assert_eq!(geometry.resolve_hover(&Board::standard(), rect.center()), None);
    assert_eq!(geometry.resolve_hover(&Board::demo(), rect.center()), Some((4, 3)));
}

#[test]
fn outside_the_grid_is_none() {
    let geometry = Geometry::default();
    let board = Board::standard();

    assert_eq!(geometry.resolve_hover(&board, pos2(0.0, 0.0)), None);
    assert_eq!(geometry.resolve_hover(&board, pos2(-5.0, 100.0)), None);
    assert_eq!(geometry.resolve_hover(&board, pos2(10_000.0, 10_000.0)), None);
}

#[test]
fn resolving_twice_gives_the_same_square() {
    let geometry = Geometry::default();
    let board = Board::demo();

    for (x, y) in [(21.0, 69.0), (200.0, 300.0), (400.0, 340.0), (3.0, 3.0)] {
        let first = geometry.resolve_hover(&board, pos2(x, y));
        let second = geometry.resolve_hover(&board, pos2(x, y));
        assert_eq!(first, second);
    }
}

#[test]
fn scale_moves_the_rectangles() {
    let board = Board::standard();
    let geometry = Geometry::default().with_scale(1);

    assert_eq!(geometry.resolve_hover(&board, pos2(7.0, 23.0)), Some((7, 0)));
    assert_eq!(geometry.resolve_hover(&board, pos2(7.0 + 16.0 * 4.0, 23.0 + 12.0 * 7.0)), Some((0, 4)));
}

#[test]
fn app_hover_resets_when_pointer_leaves() {
    let ctx = Context::default();
    let geometry = Geometry::default();
    let mut app = HolyHell::new(&ctx, Board::standard(), geometry).unwrap();

    app.update_hover(Some(geometry.square_rect(0, 4).center()));
    assert_eq!(app.hovered, Some((0, 4)));
    assert_eq!(app.status_line(), "white queen on e1");

    app.update_hover(Some(geometry.square_rect(3, 3).center()));
    assert_eq!(app.hovered, None);

    app.update_hover(Some(geometry.square_rect(7, 4).center()));
    app.update_hover(None);
    assert_eq!(app.hovered, None);
    assert_eq!(app.status_line(), "Holy Hell");
}
