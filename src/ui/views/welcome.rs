use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::{Align, Button, Context, RichText, Spinner};

pub fn ui_welcome(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 230.0, 540.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading("🚩 Adivina la Bandera");
            ui.add_space(18.0);

            // Si la última descarga falló, el aviso sustituye al texto de bienvenida
            if let Some(error) = &app.game.last_error {
                ui.label(RichText::new(error).color(egui::Color32::LIGHT_RED).strong());
            } else {
                ui.label("Pulsa «Empezar» para lanzarte al reto de las banderas.");
            }
            ui.add_space(18.0);

            let btn_w = (ui.available_width() * 0.9).clamp(120.0, 400.0);
            let etiqueta = if app.loading { "Cargando..." } else { "▶ Empezar" };
            let btn_start =
                ui.add_enabled(!app.loading, Button::new(etiqueta).min_size([btn_w, 40.0].into()));

            if app.loading {
                ui.add_space(10.0);
                ui.add(Spinner::new());
            }

            if btn_start.clicked() {
                app.continuar_partida();
            }
        });
    });
}
