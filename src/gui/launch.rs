use crate::config::Config;
use crate::core::{board::Board, geometry::Geometry};
use crate::gui::{
    WINDOW_TITLE,
    sprites::{SpriteError, Sprites},
};

use eframe::App;
use eframe::egui::{self, Context, Frame};

/// Owns everything the window needs for its lifetime. Textures are released
/// when this is dropped.
pub struct HolyHell {
    pub board: Board,
    pub geometry: Geometry,
    pub sprites: Sprites,
    /// Recomputed from scratch every frame.
    pub hovered: Option<(usize, usize)>,
}

impl HolyHell {
    pub fn new(ctx: &Context, board: Board, geometry: Geometry) -> Result<Self, SpriteError> {
        let sprites = Sprites::new(ctx, &geometry)?;
        Ok(Self {
            board,
            geometry,
            sprites,
            hovered: None,
        })
    }
}

impl App for HolyHell {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(Frame::NONE)
            .show(ctx, |ui| {
                let response = self.handle_event(ctx, ui);
                self.render(ui, &response);
            });
    }
}

pub fn launch(config: &Config) -> eframe::Result {
    let geometry = Geometry::default().with_scale(config.scale);
    let board = config.layout.board();
    let size = geometry.window_size();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([size.x, size.y])
            .with_resizable(false),
        ..Default::default()
    };

    log::info!(
        "opening {}x{} window with {:?} layout",
        size.x,
        size.y,
        config.layout
    );

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            Ok(Box::new(HolyHell::new(&cc.egui_ctx, board, geometry)?))
        }),
    )
}
