use serde::{Deserialize, Serialize};

/// Rondas que dura una partida completa.
pub const MAX_ROUNDS: u32 = 10;
/// Opciones mostradas en cada ronda.
pub const OPTIONS_PER_QUESTION: usize = 4;
/// Puntos que vale cada acierto.
pub const POINTS_PER_CORRECT: u32 = 10;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub name: String,     // nombre común, clave única dentro del pool
    pub flag_png: String, // URL de la imagen de la bandera
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Question {
    pub options: Vec<Country>, // 4 opciones distintas, en orden barajado
    pub correct: Country,      // una de las opciones; su bandera es la que se muestra
}

impl Question {
    pub fn es_correcta(&self, nombre: &str) -> bool {
        self.correct.name == nombre
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    GameOver,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Welcome
    }
}
