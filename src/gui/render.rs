use eframe::egui::{
    Align2, Color32, FontId, Pos2, Rect, Response, Stroke, StrokeKind, Ui, Vec2, pos2,
};

use crate::{
    core::board::Board,
    gui::{WINDOW_TITLE, launch::HolyHell, sprites::SPRITE_HEIGHT},
};

const HIGHLIGHT_FILL: Color32 = Color32::from_rgba_premultiplied(80, 80, 0, 80);
const HIGHLIGHT_TINT: Color32 = Color32::from_rgb(255, 240, 140);
const FULL_UV: Rect = Rect::from_min_max(Pos2::ZERO, pos2(1.0, 1.0));

impl HolyHell {
    pub fn render(&self, ui: &Ui, response: &Response) {
        let origin = response.rect.min.to_vec2();
        let painter = ui.painter_at(response.rect);
        let scale = self.geometry.scale_f32();

        painter.image(self.sprites.board().id(), response.rect, FULL_UV, Color32::WHITE);

        // Back ranks first so nearer pieces overlap the ones behind them.
        for ((rank, file), kind) in self.board.occupied() {
            let tile = self.geometry.square_rect(rank, file).translate(origin);
            let is_hovered = self.hovered == Some((rank, file));

            if is_hovered {
                painter.rect_filled(tile, 0.0, HIGHLIGHT_FILL);
                painter.rect_stroke(
                    tile,
                    0.0,
                    Stroke::new(scale, Color32::YELLOW),
                    StrokeKind::Inside,
                );
            }

            let Some(texture) = self.sprites.get(kind) else {
                continue;
            };
            let sprite_rect = Rect::from_min_max(
                pos2(tile.left(), tile.bottom() - SPRITE_HEIGHT * scale),
                tile.max,
            );
            let tint = if is_hovered { HIGHLIGHT_TINT } else { Color32::WHITE };
            painter.image(texture.id(), sprite_rect, FULL_UV, tint);
        }

        painter.text(
            response.rect.min + Vec2::splat(4.0 * scale),
            Align2::LEFT_TOP,
            self.status_line(),
            FontId::proportional(6.0 * scale),
            Color32::from_rgb(230, 230, 230),
        );
    }

    pub fn status_line(&self) -> String {
        self.hovered
            .and_then(|(rank, file)| {
                let kind = self.board.at(rank, file).ok()??;
                Some(format!("{kind} on {}", square_name(rank, file)))
            })
            .unwrap_or_else(|| WINDOW_TITLE.to_string())
    }
}

/// Algebraic name of a square, e.g. `e1`.
pub fn square_name(rank: usize, file: usize) -> String {
    debug_assert!(Board::is_valid_pos((rank, file)));
    format!("{}{}", (b'a' + file as u8) as char, rank + 1)
}
