use std::collections::HashMap;

use eframe::egui::{ColorImage, Context, TextureHandle, TextureOptions};
use tiny_skia::{Color, Paint, Pixmap, Rect, Transform};

use crate::core::{
    Color as Side,
    geometry::{BOARD_IMAGE_SIZE, Geometry, TILE_HEIGHT, TILE_WIDTH},
    piece::{PieceKind, PieceType},
};

static PAWN: &str = include_str!("../../assets/pieces/pawn.svg");
static KNIGHT: &str = include_str!("../../assets/pieces/knight.svg");
static BISHOP: &str = include_str!("../../assets/pieces/bishop.svg");
static ROOK: &str = include_str!("../../assets/pieces/rook.svg");
static QUEEN: &str = include_str!("../../assets/pieces/queen.svg");
static KING: &str = include_str!("../../assets/pieces/king.svg");

/// Unscaled sprite height. Sprites share the tile width and stand one tile
/// taller than the tile they sit on.
pub const SPRITE_HEIGHT: f32 = TILE_HEIGHT * 2.0;

const LIGHT_TILE: [u8; 3] = [240, 217, 181];
const DARK_TILE: [u8; 3] = [181, 136, 99];
const FRAME: [u8; 3] = [92, 58, 36];

#[derive(Debug, thiserror::Error)]
pub enum SpriteError {
    #[error("failed to parse {name} sprite: {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: usvg::Error,
    },
    #[error("cannot allocate a {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },
}

fn template(piece_type: PieceType) -> &'static str {
    match piece_type {
        PieceType::Pawn => PAWN,
        PieceType::Knight => KNIGHT,
        PieceType::Bishop => BISHOP,
        PieceType::Rook => ROOK,
        PieceType::Queen => QUEEN,
        PieceType::King => KING,
    }
}

/// Fills in the color placeholders of a piece template.
pub fn piece_svg(kind: PieceKind) -> String {
    let (fill, stroke) = match kind.color() {
        Side::White => ("#f8f8f0", "#202020"),
        Side::Black => ("#303030", "#d8d8d0"),
    };
    template(kind.piece_type())
        .replace("{fill}", fill)
        .replace("{stroke}", stroke)
}

/// Board image and one texture per piece kind, rasterised once for a scale.
pub struct Sprites {
    board: TextureHandle,
    pieces: HashMap<PieceKind, TextureHandle>,
}

impl Sprites {
    pub fn new(ctx: &Context, geometry: &Geometry) -> Result<Self, SpriteError> {
        let scale = geometry.scale_f32();

        let board_pixmap = render_board(geometry)?;
        let board = ctx.load_texture("board", to_image(&board_pixmap), TextureOptions::NEAREST);

        let mut pieces = HashMap::new();
        for kind in PieceKind::ALL {
            let pixmap = render_piece(kind, scale)?;
            let texture =
                ctx.load_texture(format!("{kind:?}"), to_image(&pixmap), TextureOptions::NEAREST);
            pieces.insert(kind, texture);
        }
        log::debug!("rasterised {} piece sprites at scale {}", pieces.len(), geometry.scale);

        Ok(Self { board, pieces })
    }

    pub fn board(&self) -> &TextureHandle {
        &self.board
    }

    pub fn get(&self, kind: PieceKind) -> Option<&TextureHandle> {
        self.pieces.get(&kind)
    }
}

fn new_pixmap(width: f32, height: f32) -> Result<Pixmap, SpriteError> {
    let (width, height) = (width.ceil() as u32, height.ceil() as u32);
    Pixmap::new(width, height).ok_or(SpriteError::Pixmap { width, height })
}

pub fn render_piece(kind: PieceKind, scale: f32) -> Result<Pixmap, SpriteError> {
    let svg = piece_svg(kind);
    let opt = usvg::Options::default();
    let rtree = usvg::Tree::from_data(svg.as_bytes(), &opt).map_err(|source| SpriteError::Parse {
        name: kind.piece_type().name(),
        source,
    })?;

    let mut pixmap = new_pixmap(TILE_WIDTH * scale, SPRITE_HEIGHT * scale)?;
    let scale_factor = pixmap.width() as f32 / rtree.size().width();
    resvg::render(
        &rtree,
        Transform::from_scale(scale_factor, scale_factor),
        &mut pixmap.as_mut(),
    );
    Ok(pixmap)
}

/// Draws the framed checkerboard at the geometry's scale.
pub fn render_board(geometry: &Geometry) -> Result<Pixmap, SpriteError> {
    let scale = geometry.scale_f32();
    let mut pixmap = new_pixmap(BOARD_IMAGE_SIZE[0] * scale, BOARD_IMAGE_SIZE[1] * scale)?;
    pixmap.fill(Color::from_rgba8(FRAME[0], FRAME[1], FRAME[2], 255));

    let mut paint = Paint::default();
    for rank in 0..8 {
        for file in 0..8 {
            let rgb = if (rank + file) % 2 == 0 { DARK_TILE } else { LIGHT_TILE };
            paint.set_color_rgba8(rgb[0], rgb[1], rgb[2], 255);
            let r = geometry.square_rect(rank, file);
            if let Some(rect) = Rect::from_xywh(r.left(), r.top(), r.width(), r.height()) {
                pixmap.fill_rect(rect, &paint, Transform::identity(), None);
            }
        }
    }
    Ok(pixmap)
}

fn to_image(pixmap: &Pixmap) -> ColorImage {
    ColorImage::from_rgba_premultiplied(
        [pixmap.width() as usize, pixmap.height() as usize],
        pixmap.data(),
    )
}
