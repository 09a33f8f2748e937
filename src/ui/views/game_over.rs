use crate::QuizApp;
use crate::model::{MAX_ROUNDS, POINTS_PER_CORRECT};
use crate::ui::layout::centered_panel;
use egui::{Align, Button, Context, RichText};

pub fn ui_game_over(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 220.0, 440.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading(
                RichText::new("🏁 ¡Fin de la partida!")
                    .color(egui::Color32::YELLOW)
                    .strong(),
            );
            ui.add_space(12.0);

            ui.label(format!(
                "Puntuación final: {} / {}",
                app.game.score,
                MAX_ROUNDS * POINTS_PER_CORRECT
            ));
            ui.add_space(20.0);

            if ui
                .add_sized([200.0, 40.0], Button::new("Jugar de nuevo"))
                .clicked()
            {
                app.reiniciar_partida();
            }
        });
    });
}
