// src/view_models.rs

/// Resalte de un botón de opción una vez revelada la respuesta de la ronda.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionTint {
    Neutral,
    Acierto, // la opción correcta, en verde
    Fallo,   // la opción elegida incorrecta, en rojo
}

#[derive(Clone, Debug)]
pub struct OptionView {
    pub name: String,
    pub is_correct: bool,
    pub is_selected: bool,
    pub revealed: bool, // true cuando ya hay respuesta enviada esta ronda
}

impl OptionView {
    pub fn tint(&self) -> OptionTint {
        if !self.revealed {
            OptionTint::Neutral
        } else if self.is_correct {
            OptionTint::Acierto
        } else if self.is_selected {
            OptionTint::Fallo
        } else {
            OptionTint::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opcion(is_correct: bool, is_selected: bool, revealed: bool) -> OptionView {
        OptionView {
            name: "España".to_owned(),
            is_correct,
            is_selected,
            revealed,
        }
    }

    #[test]
    fn sin_respuesta_todas_las_opciones_son_neutras() {
        assert_eq!(opcion(true, false, false).tint(), OptionTint::Neutral);
        assert_eq!(opcion(false, false, false).tint(), OptionTint::Neutral);
    }

    #[test]
    fn tras_responder_se_destacan_acierto_y_fallo() {
        // la correcta se pinta en verde aunque no fuese la elegida
        assert_eq!(opcion(true, false, true).tint(), OptionTint::Acierto);
        assert_eq!(opcion(true, true, true).tint(), OptionTint::Acierto);
        // la elegida incorrecta en rojo, el resto se queda neutro
        assert_eq!(opcion(false, true, true).tint(), OptionTint::Fallo);
        assert_eq!(opcion(false, false, true).tint(), OptionTint::Neutral);
    }
}
