use flag_quiz::QuizApp;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();
    log::info!("Arrancando Adivina la Bandera...");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([540.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Adivina la Bandera",
        options,
        Box::new(|cc| {
            // Sin los loaders no se pueden pintar las banderas desde sus URLs
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(QuizApp::new()))
        }),
    )
}
