use super::*;

impl QuizApp {
    pub fn pool_cargado(&self) -> bool {
        !self.countries.is_empty()
    }

    /// true una vez enviada la respuesta de la ronda actual
    pub fn respondida(&self) -> bool {
        self.game.selected_answer.is_some()
    }

    /// URL de la bandera de esta ronda: siempre la de la opción correcta
    pub fn bandera_actual(&self) -> Option<&str> {
        self.game
            .current_question
            .as_ref()
            .map(|q| q.correct.flag_png.as_str())
    }

    /// Snapshot de solo lectura de las opciones para pintar los botones
    pub fn opciones_de_ronda(&self) -> Vec<OptionView> {
        let revelada = self.game.selected_answer.is_some();

        match &self.game.current_question {
            Some(q) => q
                .options
                .iter()
                .map(|c| OptionView {
                    name: c.name.clone(),
                    is_correct: c.name == q.correct.name,
                    is_selected: self.game.selected_answer.as_deref() == Some(c.name.as_str()),
                    revealed: revelada,
                })
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Country;

    fn app_con_pool(n: usize) -> QuizApp {
        let mut app = QuizApp::con_semilla(42);
        app.countries = (0..n)
            .map(|i| Country {
                name: format!("País {i}"),
                flag_png: format!("https://flags.example/{i}.png"),
            })
            .collect();
        app
    }

    #[test]
    fn las_opciones_revelan_acierto_y_fallo_tras_responder() {
        let mut app = app_con_pool(6);
        app.avanzar_ronda();

        // antes de responder, nada revelado
        assert!(app.opciones_de_ronda().iter().all(|o| !o.revealed));

        let q = app.game.current_question.clone().unwrap();
        let mala = q
            .options
            .iter()
            .find(|c| c.name != q.correct.name)
            .unwrap()
            .name
            .clone();
        app.procesar_respuesta(&mala);

        let opciones = app.opciones_de_ronda();
        assert!(opciones.iter().all(|o| o.revealed));

        let acierto = opciones.iter().find(|o| o.is_correct).unwrap();
        let fallo = opciones.iter().find(|o| o.is_selected).unwrap();
        assert_eq!(acierto.tint(), OptionTint::Acierto);
        assert_eq!(fallo.tint(), OptionTint::Fallo);
        assert_eq!(
            opciones.iter().filter(|o| o.tint() == OptionTint::Neutral).count(),
            2
        );
    }

    #[test]
    fn sin_pregunta_no_hay_opciones_ni_bandera() {
        let app = app_con_pool(6);

        assert!(app.opciones_de_ronda().is_empty());
        assert!(app.bandera_actual().is_none());
        assert!(!app.respondida());
    }
}
