use crate::model::{AppState, Country, Question};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::mpsc::Receiver;

// Submódulos
pub mod actions;
pub mod fetch;
pub mod queries;

// Re-export de view models
pub use crate::view_models::{OptionTint, OptionView};

/// Estado de una partida en curso. Se resetea entero al reiniciar.
#[derive(Debug, Clone, Default)]
pub struct GameProgress {
    pub score: u32,
    pub round: u32, // 0 mientras no hay partida; 1..=MAX_ROUNDS durante el juego
    pub finished: bool,
    pub selected_answer: Option<String>,
    pub current_question: Option<Question>,
    pub last_error: Option<String>,
}

pub struct QuizApp {
    pub countries: Vec<Country>, // pool cacheado; se descarga una sola vez por sesión
    pub game: GameProgress,
    pub state: AppState,
    pub loading: bool, // descarga en curso: bloquea re-lanzamientos y el botón de empezar
    pub(crate) fetch_rx: Option<Receiver<Result<Vec<Country>, String>>>,
    pub(crate) rng: StdRng,
}

impl QuizApp {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Con semilla fija la secuencia de preguntas es reproducible.
    pub fn con_semilla(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            countries: Vec::new(),
            game: GameProgress::default(),
            state: AppState::Welcome,
            loading: false,
            fetch_rx: None,
            rng,
        }
    }
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}
