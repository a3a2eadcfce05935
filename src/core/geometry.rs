use eframe::egui::{Pos2, Rect, Vec2, pos2};

use crate::core::board::{BOARD_SIZE, Board};

/// Unscaled size of the board image, in pixels.
pub const BOARD_IMAGE_SIZE: [f32; 2] = [142.0, 142.0];
pub const TILE_WIDTH: f32 = 16.0;
pub const TILE_HEIGHT: f32 = 12.0;
pub const DEFAULT_SCALE: u32 = 3;
/// Top-left corner of the tile grid inside the board image. Centres the
/// 128x96 grid in the 142x142 image.
pub const BOARD_OFFSET: [f32; 2] = [7.0, 23.0];

/// Maps board squares to screen rectangles and back.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Geometry {
    pub offset: Vec2,
    pub scale: u32,
    pub tile_width: f32,
    pub tile_height: f32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            offset: Vec2::new(BOARD_OFFSET[0], BOARD_OFFSET[1]),
            scale: DEFAULT_SCALE,
            tile_width: TILE_WIDTH,
            tile_height: TILE_HEIGHT,
        }
    }
}

impl Geometry {
    pub fn with_scale(self, scale: u32) -> Self {
        Self { scale, ..self }
    }

    pub fn scale_f32(&self) -> f32 {
        self.scale as f32
    }

    pub fn window_size(&self) -> Vec2 {
        Vec2::new(BOARD_IMAGE_SIZE[0], BOARD_IMAGE_SIZE[1]) * self.scale_f32()
    }

    pub fn square_rect(&self, rank: usize, file: usize) -> Rect {
        let scale = self.scale_f32();
        let left = (self.offset.x + file as f32 * self.tile_width) * scale;
        let top = (self.offset.y + (BOARD_SIZE - 1 - rank) as f32 * self.tile_height) * scale;
        Rect::from_min_size(
            pos2(left, top),
            Vec2::new(self.tile_width * scale, self.tile_height * scale),
        )
    }

    /// Half-open containment: the left and top edges belong to the square, the
    /// right and bottom edges belong to its neighbours.
    pub fn contains(rect: Rect, pos: Pos2) -> bool {
        rect.left() <= pos.x && pos.x < rect.right() && rect.top() <= pos.y && pos.y < rect.bottom()
    }

    /// Occupied square under `pointer`, if any.
    ///
    /// Squares are tested in the board's scan order and the first hit wins, so
    /// at most one square is reported. Empty squares are never candidates.
    pub fn resolve_hover(&self, board: &Board, pointer: Pos2) -> Option<(usize, usize)> {
        board
            .occupied()
            .map(|(pos, _)| pos)
            .find(|&(rank, file)| Self::contains(self.square_rect(rank, file), pointer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rects_match_image_layout() {
        let geometry = Geometry::default();
        let rect = geometry.square_rect(7, 0);
        assert_eq!(rect.min, pos2(21.0, 69.0));
        assert_eq!(rect.max, pos2(69.0, 105.0));

        let rect = geometry.square_rect(0, 7);
        assert_eq!(rect.min, pos2((7.0 + 7.0 * 16.0) * 3.0, (23.0 + 7.0 * 12.0) * 3.0));
    }

    #[test]
    fn grid_fits_inside_window() {
        let geometry = Geometry::default().with_scale(2);
        let window = Rect::from_min_size(Pos2::ZERO, geometry.window_size());
        for rank in 0..8 {
            for file in 0..8 {
                assert!(window.contains_rect(geometry.square_rect(rank, file)));
            }
        }
    }

    #[test]
    fn edges_are_half_open() {
        let rect = Rect::from_min_max(pos2(10.0, 10.0), pos2(20.0, 20.0));
        assert!(Geometry::contains(rect, pos2(10.0, 10.0)));
        assert!(Geometry::contains(rect, pos2(19.9, 19.9)));
        assert!(!Geometry::contains(rect, pos2(20.0, 15.0)));
        assert!(!Geometry::contains(rect, pos2(15.0, 20.0)));
        assert!(!Geometry::contains(rect, pos2(9.9, 15.0)));
    }
}
