use super::*;
use crate::data::fetch_countries;
use log::{error, info};
use std::sync::mpsc;

/// Mensaje que ve el usuario cuando la descarga falla, sea cual sea la causa.
pub const FETCH_ERROR_MSG: &str = "❌ No se pudieron cargar los países.";

impl QuizApp {
    /// Lanza la descarga del pool en un hilo aparte. El resultado se recoge
    /// en poll_carga_paises; mientras tanto `loading` bloquea re-lanzamientos.
    pub fn lanzar_carga_paises(&mut self) {
        if self.loading {
            return;
        }
        self.loading = true;
        self.game.last_error = None;

        let (tx, rx) = mpsc::channel();
        self.fetch_rx = Some(rx);

        std::thread::spawn(move || {
            let resultado = fetch_countries().map_err(|e| e.to_string());
            let _ = tx.send(resultado);
        });
    }

    /// Se llama en cada frame. Si la descarga terminó, guarda el pool y
    /// arranca la ronda 1; si falló, deja el mensaje de error y la ronda a 0.
    pub fn poll_carga_paises(&mut self) {
        let pendiente = self.fetch_rx.as_ref().and_then(|rx| rx.try_recv().ok());

        if let Some(resultado) = pendiente {
            self.fetch_rx = None;
            self.loading = false;

            match resultado {
                Ok(paises) => {
                    info!("Pool de países cargado: {} registros", paises.len());
                    self.countries = paises;
                    self.avanzar_ronda();
                }
                Err(e) => {
                    error!("Error al descargar los países: {e}");
                    self.game.last_error = Some(FETCH_ERROR_MSG.to_owned());
                }
            }
        }
    }
}
