use crate::QuizApp;
use crate::view_models::{OptionTint, OptionView};
use egui::{Button, CentralPanel, Color32, Context, Frame, Ui, Vec2, Visuals};

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("🔄 Reiniciar partida").clicked() {
                app.reiniciar_partida();
                ctx.request_repaint();
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Modo oscuro").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀Modo claro").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                // Ajusta anchura
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                // Ejecuta contenido
                inner(ui);
            });
        ui.add_space(extra);
    });
}

/// Botón de opción con el resalte de acierto/fallo; queda deshabilitado
/// en cuanto la ronda está respondida.
fn option_button(ui: &mut Ui, opcion: &OptionView, width: f32, height: f32) -> bool {
    let mut btn = Button::new(&opcion.name).min_size(Vec2::new(width, height));
    match opcion.tint() {
        OptionTint::Acierto => btn = btn.fill(Color32::DARK_GREEN),
        OptionTint::Fallo => btn = btn.fill(Color32::DARK_RED),
        OptionTint::Neutral => {}
    }
    ui.add_enabled(!opcion.revealed, btn).clicked()
}

/// Dibuja dos botones de opción del mismo tamaño en una fila, centrados en el
/// ancho dado. Devuelve (clic izquierdo, clic derecho).
pub fn two_option_row(
    ui: &mut Ui,
    panel_width: f32,
    left: &OptionView,
    right: &OptionView,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        // espacio para centrar la fila en su panel
        ui.add_space((ui.available_width() - panel_width) / 2.0);
        clicked_left = option_button(ui, left, btn_w, 36.0);
        clicked_right = option_button(ui, right, btn_w, 36.0);
    });
    (clicked_left, clicked_right)
}
