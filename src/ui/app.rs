//! Main application window

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use crate::{Game, Stone};
use super::board_view::BoardView;
use super::theme::*;

/// Main application: wires pointer input and painting to the game core
pub struct GobangApp {
    game: Game,
    board_view: BoardView,
}

impl Default for GobangApp {
    fn default() -> Self {
        Self {
            game: Game::new(),
            board_view: BoardView::default(),
        }
    }
}

impl GobangApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game").clicked() {
                        self.game.reset();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label("Two players - hotseat");
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("FIVE IN A ROW").size(20.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("五子棋").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_black = self.game.current_turn() == Stone::Black;
            let (stone_char, color_name, accent) = if is_black {
                ("●", "BLACK", egui::Color32::from_rgb(70, 70, 75))
            } else {
                ("○", "WHITE", egui::Color32::from_rgb(220, 220, 225))
            };

            ui.horizontal(|ui| {
                let stone_color = if is_black {
                    TEXT_PRIMARY
                } else {
                    egui::Color32::from_rgb(30, 30, 35)
                };

                let (rect, _) =
                    ui.allocate_exact_size(egui::Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    stone_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(color_name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.game.winner().is_some() {
                        ("Game over", WIN_HIGHLIGHT)
                    } else {
                        ("To move", TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            if ui.button(RichText::new("New Game").size(12.0)).clicked() {
                self.game.reset();
            }

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Stones placed: {}", self.game.stones_placed()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render the win dialog over the board
    fn render_win_modal(&mut self, ctx: &Context) {
        let Some(result) = self.game.winner().copied() else {
            return;
        };

        egui::Window::new("game_over")
            .title_bar(false)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .frame(
                Frame::new()
                    .fill(MODAL_BG)
                    .corner_radius(CornerRadius::same(8))
                    .inner_margin(16.0),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(MODAL_ACCENT));
                    ui.add_space(8.0);

                    let (symbol, accent) = if result.winner == Stone::Black {
                        ("●", egui::Color32::from_rgb(70, 70, 75))
                    } else {
                        ("○", egui::Color32::from_rgb(220, 220, 225))
                    };

                    ui.horizontal(|ui| {
                        ui.add_space(ui.available_width() / 2.0 - 60.0);
                        ui.label(RichText::new(symbol).size(32.0).color(accent));
                        ui.add_space(8.0);
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(result.winner.name().to_uppercase())
                                    .size(18.0)
                                    .strong()
                                    .color(TEXT_PRIMARY),
                            );
                            ui.label(RichText::new("WINS!").size(14.0).color(WIN_HIGHLIGHT));
                        });
                    });

                    ui.add_space(4.0);
                    ui.label(RichText::new("five in a row").size(11.0).color(TEXT_SECONDARY));

                    ui.add_space(12.0);

                    Frame::new()
                        .fill(MODAL_BUTTON_BG)
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let label = egui::Label::new(
                                RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY),
                            )
                            .sense(egui::Sense::click());
                            if ui.add(label).clicked() {
                                self.game.reset();
                            }
                        });
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = BOARD_AREA_BG;

            // A click on a legal cell is the whole input protocol: the game
            // validates, places, win-checks and flips in one transaction.
            if let Some(pos) = self.board_view.show(ui, &self.game) {
                self.game.play(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.game.reset();
            }
        });
    }
}

impl eframe::App for GobangApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
        self.render_win_modal(ctx);
    }
}
