use crate::validator::DrawRejection;

use models::Language;

const REQUESTED_PLACEHOLDER: &str = "{requested}";
const AVAILABLE_PLACEHOLDER: &str = "{available}";

/// Fixed message table for one language.
#[derive(Debug)]
pub struct Translations {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub enter_names: &'static str,
    pub placeholder: &'static str,
    pub number_of_winners: &'static str,
    pub draw_button: &'static str,
    pub drawing: &'static str,
    pub winner: &'static str,
    pub winners: &'static str,
    pub alert_no_names: &'static str,
    name_singular: &'static str,
    name_plural: &'static str,
    too_many_winners_template: &'static str,
}

static EN_US: Translations = Translations {
    title: "🎲 Name Lottery",
    subtitle: "Add names and let fate decide!",
    enter_names: "Enter Names",
    placeholder: "Enter names separated by commas or line breaks\ne.g., John, Sarah, Mike\nor one name per line",
    number_of_winners: "Number of Winners",
    draw_button: "🎯 DRAW WINNERS",
    drawing: "Drawing...",
    winner: "Winner",
    winners: "Winners",
    alert_no_names: "Please add some names first!",
    name_singular: "name",
    name_plural: "names",
    too_many_winners_template: "You can't select more winners ({requested}) than available names ({available})!",
};

static PT_BR: Translations = Translations {
    title: "🎲 Sorteio de Nomes",
    subtitle: "Adicione nomes e deixe o destino decidir!",
    enter_names: "Digite os Nomes",
    placeholder: "Digite nomes separados por vírgulas ou quebras de linha\nex: João, Maria, Pedro\nou um nome por linha",
    number_of_winners: "Número de Vencedores",
    draw_button: "🎯 SORTEAR VENCEDORES",
    drawing: "Sorteando...",
    winner: "Vencedor",
    winners: "Vencedores",
    alert_no_names: "Por favor, adicione alguns nomes primeiro!",
    name_singular: "nome",
    name_plural: "nomes",
    too_many_winners_template: "Você não pode selecionar mais vencedores ({requested}) do que nomes disponíveis ({available})!",
};

/// Message table for `language`.
pub fn translations(language: Language) -> &'static Translations {
    match language {
        Language::EnUs => &EN_US,
        Language::PtBr => &PT_BR,
    }
}

impl Translations {
    /// `"1 name"`, `"0 names"`, `"3 names"`.
    pub fn names_count(&self, count: usize) -> String {
        let noun = if count == 1 {
            self.name_singular
        } else {
            self.name_plural
        };
        format!("{count} {noun}")
    }

    pub fn too_many_winners(&self, requested: usize, available: usize) -> String {
        self.too_many_winners_template
            .replace(REQUESTED_PLACEHOLDER, &requested.to_string())
            .replace(AVAILABLE_PLACEHOLDER, &available.to_string())
    }

    /// Heading over the revealed list: singular only for exactly one winner.
    pub fn winners_heading(&self, count: usize) -> &'static str {
        if count == 1 { self.winner } else { self.winners }
    }

    /// Alert text for a refused draw.
    pub fn rejection_message(&self, rejection: &DrawRejection) -> String {
        match rejection {
            DrawRejection::NoNames => self.alert_no_names.to_string(),
            DrawRejection::TooManyWinners {
                requested,
                available,
            } => self.too_many_winners(*requested, *available),
        }
    }
}
