use super::*;
use crate::model::{MAX_ROUNDS, OPTIONS_PER_QUESTION, POINTS_PER_CORRECT};
use rand::Rng;
use rand::seq::SliceRandom;

impl QuizApp {
    /// Punto de entrada compartido de «Empezar», «Siguiente» y «Saltar»:
    /// si el pool aún no está cargado lanza la descarga; si ya lo está,
    /// avanza directamente de ronda sin volver a descargar.
    pub fn continuar_partida(&mut self) {
        if self.loading {
            return;
        }

        if self.pool_cargado() {
            self.avanzar_ronda();
        } else {
            self.lanzar_carga_paises();
        }
    }

    /// Única puerta de la transición terminal y del contador de rondas.
    pub fn avanzar_ronda(&mut self) {
        if self.countries.is_empty() {
            return;
        }

        if self.game.round >= MAX_ROUNDS {
            self.game.finished = true;
            self.game.current_question = None;
            self.state = AppState::GameOver;
            return;
        }

        self.generar_pregunta();
        self.game.round += 1;
        self.state = AppState::Quiz;
    }

    /// Baraja una copia del pool, se queda con las 4 primeras y elige la
    /// correcta al azar entre esas 4 posiciones.
    fn generar_pregunta(&mut self) {
        if self.countries.is_empty() {
            return;
        }

        let mut baraja = self.countries.clone();
        baraja.shuffle(&mut self.rng);
        baraja.truncate(OPTIONS_PER_QUESTION);

        let correcta = baraja[self.rng.gen_range(0..baraja.len())].clone();

        self.game.current_question = Some(Question {
            options: baraja,
            correct: correcta,
        });
        self.game.selected_answer = None;
    }

    /// Registra la respuesta de la ronda. Solo cuenta la primera: una segunda
    /// llamada en la misma ronda es ignorada, igual que responder sin pregunta.
    pub fn procesar_respuesta(&mut self, nombre: &str) {
        let acierto = match &self.game.current_question {
            Some(q) => q.es_correcta(nombre),
            None => return,
        };

        if self.game.selected_answer.is_some() {
            return;
        }

        self.game.selected_answer = Some(nombre.to_owned());
        if acierto {
            self.game.score += POINTS_PER_CORRECT;
        }
    }

    /// Borra la partida y vuelve a la ronda 1 con el pool ya cacheado.
    pub fn reiniciar_partida(&mut self) {
        self.game = GameProgress::default();
        self.avanzar_ronda();
    }
}
