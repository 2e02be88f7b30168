use models::Language;

/// Environment variables consulted for the ambient locale, highest priority first.
const LOCALE_VARIABLES: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

const PORTUGUESE_PREFIX: &str = "pt";

/// Map a locale signal such as `pt-BR`, `pt_PT.UTF-8` or `en_GB` to a
/// supported language. Any Portuguese locale selects `pt-BR`; everything
/// else, including no signal at all, selects `en-US`.
pub fn detect_language(locale: Option<&str>) -> Language {
    match locale {
        Some(tag) if tag.trim().to_ascii_lowercase().starts_with(PORTUGUESE_PREFIX) => {
            Language::PtBr
        }
        _ => Language::EnUs,
    }
}

/// Pick the persisted language if it is a valid tag, otherwise detect one.
pub fn resolve_language(persisted: Option<&str>, locale: Option<&str>) -> Language {
    persisted
        .and_then(Language::from_tag)
        .unwrap_or_else(|| detect_language(locale))
}

/// First non-empty locale variable, looked up through `lookup`.
pub fn locale_from_vars<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    LOCALE_VARIABLES
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.trim().is_empty())
}

/// Ambient locale of this process, from `LC_ALL`, `LC_MESSAGES` or `LANG`.
pub fn locale_from_env() -> Option<String> {
    locale_from_vars(|name| std::env::var(name).ok())
}
