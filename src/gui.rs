//! Desktop window: the tile grid, the chain counters and the game-over dialog.

use eframe::egui::{self, Color32, RichText, Sense, Stroke};
use log::{debug, warn};

use crate::{
    color::Rgb,
    config::{
        DIALOG_TEXT, DIALOG_TITLE, HIGHLIGHT_STROKE, LAYER_STROKE, NUM_COLS, NUM_LAYERS, NUM_ROWS,
        STATUS_FONT_SIZE, STATUS_SPACING, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH,
    },
    game::{GameEngine, GameStatus},
    layout::{self, Bounds},
};

pub struct TilesApp {
    engine: GameEngine,
}

impl TilesApp {
    pub fn new(engine: GameEngine) -> Self {
        Self { engine }
    }

    fn draw_grid(&mut self, ui: &mut egui::Ui) {
        let (w, h) = layout::grid_size();
        let (rect, response) = ui.allocate_exact_size(egui::vec2(w, h), Sense::click());

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.handle_click(pos - rect.min);
            }
        }

        let painter = ui.painter_at(rect);
        let to_rect = |b: Bounds| {
            egui::Rect::from_min_size(rect.min + egui::vec2(b.x, b.y), egui::vec2(b.size, b.size))
        };
        let outline = Stroke::new(LAYER_STROKE, Color32::BLACK);
        for col in 0..NUM_COLS {
            for row in 0..NUM_ROWS {
                let Ok(tile) = self.engine.board().tile(row, col) else {
                    continue;
                };
                let bounds = layout::tile_rect(row, col);
                for layer in 0..NUM_LAYERS {
                    if let Some(fill) = tile.layer(layer) {
                        let r = to_rect(layout::layer_rect(bounds, layer));
                        painter.rect_filled(r, 0.0, to_color32(fill));
                        painter.rect_stroke(r, 0.0, outline);
                    }
                    // the highlight sits above the largest layer only
                    if layer == 0 && self.engine.selection() == Some((row, col)) {
                        painter.rect_stroke(
                            to_rect(bounds),
                            0.0,
                            Stroke::new(HIGHLIGHT_STROKE, Color32::BLACK),
                        );
                    }
                }
            }
        }
    }

    /// Route a click at a grid-local point to the engine. Returns whether a
    /// tile was selected; the grid is inert while the game-over dialog is up.
    fn handle_click(&mut self, local: egui::Vec2) -> bool {
        if self.engine.status() == GameStatus::Over {
            return false;
        }
        let Some((row, col)) = layout::tile_at(local.x, local.y) else {
            return false;
        };
        match self.engine.select(row, col) {
            Ok(outcome) => {
                debug!("click ({}, {}): {:?}", row, col, outcome);
                true
            }
            Err(e) => {
                warn!("click ignored: {}", e);
                false
            }
        }
    }

    fn game_over_dialog(&self, ctx: &egui::Context) {
        let mut dismissed = false;
        egui::Window::new(DIALOG_TITLE)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(DIALOG_TEXT);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });
        if dismissed {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

fn status_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        RichText::new(text)
            .size(STATUS_FONT_SIZE)
            .strong()
            .color(Color32::BLACK),
    );
}

pub fn to_color32(c: Rgb) -> Color32 {
    Color32::from_rgb(c.r(), c.g(), c.b())
}

impl eframe::App for TilesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let frame = egui::Frame::none().fill(Color32::WHITE);
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                self.draw_grid(ui);
                ui.add_space(STATUS_SPACING);
                status_label(ui, &self.engine.current_chain_text());
                status_label(ui, &self.engine.max_chain_text());
                status_label(ui, self.engine.info());
            });
        });
        if self.engine.status() == GameStatus::Over {
            self.game_over_dialog(ctx);
        }
    }
}

/// Open the game window and block until it is closed.
pub fn run(engine: GameEngine) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            // the padded grid is a few pixels wider than the nominal window
            .with_inner_size(egui::vec2(
                WINDOW_WIDTH.max(layout::grid_size().0),
                WINDOW_HEIGHT,
            ))
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Box::new(TilesApp::new(engine))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to start GUI: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{board::coords, Board, Tile, MSG_GAME_OVER, NUM_TILES, PALETTE};

    fn pair_board() -> Board {
        Board::from_tiles(core::array::from_fn(|p| {
            let c = Rgb::from_hex(PALETTE[p / 2]).unwrap();
            Tile::new([c, c, c])
        }))
    }

    fn click_tile(app: &mut TilesApp, row: usize, col: usize) -> bool {
        let (x, y) = layout::tile_rect(row, col).center();
        app.handle_click(egui::vec2(x, y))
    }

    #[test]
    fn clicks_route_to_tiles_and_miss_gaps() {
        let mut app = TilesApp::new(GameEngine::new(pair_board()));
        assert!(!app.handle_click(egui::vec2(2.0, 2.0)));
        assert!(click_tile(&mut app, 3, 2));
        assert_eq!(app.engine.selection(), Some((3, 2)));
    }

    #[test]
    fn grid_ignores_clicks_after_game_over() {
        let mut app = TilesApp::new(GameEngine::new(pair_board()));
        for p in 0..NUM_TILES {
            let (row, col) = coords(p);
            assert!(click_tile(&mut app, row, col));
        }
        assert_eq!(app.engine.status(), GameStatus::Over);
        let clicks = app.engine.stats().clicks;

        assert!(!click_tile(&mut app, 0, 0));
        assert_eq!(app.engine.info(), MSG_GAME_OVER);
        assert_eq!(app.engine.stats().clicks, clicks);
    }

    #[test]
    fn palette_colors_convert_exactly() {
        let c = Rgb::from_hex("ff8c00").unwrap();
        assert_eq!(to_color32(c), Color32::from_rgb(0xff, 0x8c, 0x00));
    }
}
