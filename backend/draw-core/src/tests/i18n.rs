use crate::i18n::{
    Language, detect_language, locale_from_env, locale_from_vars, resolve_language, translations,
};
use crate::validator::DrawRejection;

use std::collections::HashMap;

use serial_test::serial;

#[test]
fn given_portuguese_locales_when_detecting_then_selects_pt_br() {
    for locale in ["pt-BR", "pt", "pt_PT.UTF-8", "PT-br", " pt-BR"] {
        assert_eq!(detect_language(Some(locale)), Language::PtBr, "{locale:?}");
    }
}

#[test]
fn given_other_or_missing_locales_when_detecting_then_selects_en_us() {
    for locale in ["en-US", "en_GB.UTF-8", "es-ES", "C", ""] {
        assert_eq!(detect_language(Some(locale)), Language::EnUs, "{locale:?}");
    }
    assert_eq!(detect_language(None), Language::EnUs);
}

/// **VALUE**: Verifies a persisted choice beats the ambient locale, and an invalid one doesn't.
///
/// **WHY THIS MATTERS**: Users who picked English on a Portuguese machine must keep English
/// across restarts, while garbage in storage must not lock them into a wrong table.
#[test]
fn given_persisted_and_detected_languages_when_resolving_then_valid_persisted_wins() {
    assert_eq!(resolve_language(Some("en-US"), Some("pt-BR")), Language::EnUs);
    assert_eq!(resolve_language(Some("pt-BR"), None), Language::PtBr);
    assert_eq!(resolve_language(Some("cucos"), Some("pt_BR")), Language::PtBr);
    assert_eq!(resolve_language(None, Some("de-DE")), Language::EnUs);
}

#[test]
fn given_lookup_when_reading_locale_then_first_non_empty_variable_wins() {
    let vars: HashMap<&str, &str> =
        HashMap::from([("LC_ALL", ""), ("LC_MESSAGES", "pt_BR.UTF-8"), ("LANG", "en_US")]);

    let locale = locale_from_vars(|name| vars.get(name).map(|v| v.to_string()));

    assert_eq!(locale.as_deref(), Some("pt_BR.UTF-8"));
    assert_eq!(locale_from_vars(|_| None), None);
}

/// **VALUE**: Verifies the real environment lookup honours `LC_ALL` over `LANG`.
///
/// Serialized because it mutates process-wide environment variables.
#[test]
#[serial]
fn given_process_environment_when_reading_locale_then_lc_all_takes_priority() {
    let saved: Vec<(&str, Option<String>)> = ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .map(|name| (name, std::env::var(name).ok()))
        .collect();

    // SAFETY: serialized test; no other thread reads the environment meanwhile.
    unsafe {
        std::env::set_var("LC_ALL", "pt_BR.UTF-8");
        std::env::remove_var("LC_MESSAGES");
        std::env::set_var("LANG", "en_US.UTF-8");
    }

    let locale = locale_from_env();

    // SAFETY: as above.
    unsafe {
        for (name, value) in &saved {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }
    }

    assert_eq!(locale.as_deref(), Some("pt_BR.UTF-8"));
}

#[test]
fn given_name_counts_when_formatting_then_pluralizes_per_language() {
    let en = translations(Language::EnUs);
    let pt = translations(Language::PtBr);

    assert_eq!(en.names_count(0), "0 names");
    assert_eq!(en.names_count(1), "1 name");
    assert_eq!(en.names_count(2), "2 names");
    assert_eq!(pt.names_count(1), "1 nome");
    assert_eq!(pt.names_count(7), "7 nomes");
}

#[test]
fn given_too_many_winners_when_formatting_then_interpolates_both_numbers() {
    assert_eq!(
        translations(Language::EnUs).too_many_winners(5, 3),
        "You can't select more winners (5) than available names (3)!"
    );
    assert_eq!(
        translations(Language::PtBr).too_many_winners(5, 3),
        "Você não pode selecionar mais vencedores (5) do que nomes disponíveis (3)!"
    );
}

#[test]
fn given_rejections_when_rendering_messages_then_uses_matching_alert() {
    let en = translations(Language::EnUs);

    assert_eq!(
        en.rejection_message(&DrawRejection::NoNames),
        "Please add some names first!"
    );
    assert_eq!(
        en.rejection_message(&DrawRejection::TooManyWinners {
            requested: 2,
            available: 1
        }),
        "You can't select more winners (2) than available names (1)!"
    );
}

#[test]
fn given_winner_counts_when_choosing_heading_then_singular_only_for_one() {
    let pt = translations(Language::PtBr);

    assert_eq!(pt.winners_heading(1), "Vencedor");
    assert_eq!(pt.winners_heading(2), "Vencedores");
    assert_eq!(translations(Language::EnUs).winners_heading(3), "Winners");
}

#[test]
fn given_every_language_when_loading_table_then_no_message_is_blank() {
    for language in Language::ALL {
        let table = translations(language);
        for message in [
            table.title,
            table.subtitle,
            table.enter_names,
            table.placeholder,
            table.number_of_winners,
            table.draw_button,
            table.drawing,
            table.winner,
            table.winners,
            table.alert_no_names,
        ] {
            assert!(!message.trim().is_empty(), "{language} has a blank message");
        }
    }
}
