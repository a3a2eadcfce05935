use eframe::egui::{Context, Pos2, Response, Sense, Ui};

use crate::gui::launch::HolyHell;

impl HolyHell {
    pub fn handle_event(&mut self, ctx: &Context, ui: &mut Ui) -> Response {
        let size = self.geometry.window_size();
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());

        let pointer = ctx.input(|i| i.pointer.hover_pos());
        let local = pointer.map(|pos| Pos2::ZERO + (pos - rect.min));
        self.update_hover(local);

        response
    }

    /// Replaces the hover state with the square under `pointer`, given in board
    /// image coordinates. No pointer clears it.
    pub fn update_hover(&mut self, pointer: Option<Pos2>) {
        let hovered = pointer.and_then(|pos| self.geometry.resolve_hover(&self.board, pos));

        if hovered != self.hovered {
            match hovered {
                Some((rank, file)) => log::debug!("hover -> rank {rank}, file {file}"),
                None => log::debug!("hover cleared"),
            }
        }
        self.hovered = hovered;
    }
}
