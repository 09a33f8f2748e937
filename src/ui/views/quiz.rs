use crate::QuizApp;
use crate::model::{MAX_ROUNDS, OPTIONS_PER_QUESTION};
use crate::ui::layout::two_option_row;
use egui::{Button, CentralPanel, Context, Image};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 520.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let total_height = 40.0 + 140.0 + 2.0 * 36.0 + 24.0 + 48.0 + 40.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;
        ui.add_space(extra_space / 2.0);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(20, 20))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(format!("🌀 Ronda {} / {}", app.game.round, MAX_ROUNDS));
                    ui.add_space(10.0);

                    // Bandera de la ronda: siempre la de la opción correcta
                    if let Some(url) = app.bandera_actual().map(str::to_owned) {
                        ui.add(Image::from_uri(url).max_width(160.0));
                    }
                    ui.add_space(14.0);

                    // Botones de opción en dos filas de dos
                    let opciones = app.opciones_de_ronda();
                    let mut elegida: Option<String> = None;
                    if opciones.len() == OPTIONS_PER_QUESTION {
                        let (c0, c1) = two_option_row(ui, panel_width, &opciones[0], &opciones[1]);
                        ui.add_space(6.0);
                        let (c2, c3) = two_option_row(ui, panel_width, &opciones[2], &opciones[3]);

                        for (clic, opcion) in [c0, c1, c2, c3].into_iter().zip(&opciones) {
                            if clic {
                                elegida = Some(opcion.name.clone());
                            }
                        }
                    }
                    if let Some(nombre) = elegida {
                        app.procesar_respuesta(&nombre);
                    }

                    ui.add_space(12.0);

                    // Marcador de la partida
                    ui.label(format!("Puntuación: {}", app.game.score));

                    ui.add_space(10.0);

                    // Un único botón: «Saltar» antes de responder, «Siguiente» después
                    let etiqueta = if app.respondida() { "Siguiente" } else { "Saltar" };
                    if ui
                        .add_sized([panel_width / 2.0, 36.0], Button::new(etiqueta))
                        .clicked()
                    {
                        app.continuar_partida();
                    }
                });
            });

        ui.add_space(extra_space);
    });
}
