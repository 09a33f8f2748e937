pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Recoge el resultado de la descarga si ya terminó
        self.poll_carga_paises();

        // BOTÓN SUPERIOR DE REINICIAR (solo visible durante el quiz y el final)
        if matches!(self.state, AppState::Quiz | AppState::GameOver) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por estado a las vistas
        match self.state {
            AppState::Welcome => views::welcome::ui_welcome(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::GameOver => views::game_over::ui_game_over(self, ctx),
        }
    }
}
