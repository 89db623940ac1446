/*
Simple i18n helper for user-facing messages.

This module provides:
- A tiny embedded translations store for PT/EN (compile-time embedded JSON).
- A simple `tr` function to lookup translations by key + optional params.
- A `t` convenience wrapper using the default language (DEFAULT_LANG).

Usage:
    use crate::i18n;
    let msg = i18n::t("validation.name_min");
    let msg_with = i18n::t_with("page.votes_label", &[("count", "3")]);

Notes:
- Placeholders in translation strings use single-brace format: `{name}`.
- Default language is `pt` (the product ships in Brazilian Portuguese). If a
  key is missing for the requested language, the fallback language is used.
*/

use std::collections::HashMap;
use std::sync::OnceLock;

pub const DEFAULT_LANG: &str = "pt";

static TRANSLATIONS: OnceLock<HashMap<String, HashMap<String, String>>> = OnceLock::new();

const PT_JSON: &str = r#"
{
  "validation.name_required": "Nome não pode ser vazio",
  "validation.name_letters": "O nome deve conter apenas letras",
  "validation.name_min": "O nome deve ter pelo menos 3 caracteres",
  "validation.title_required": "Título não pode ser vazio",
  "validation.title_min": "Título deve ter pelo menos 5 caracteres",
  "validation.end_date_required": "Selecione uma data limite",
  "validation.end_time_required": "Selecione uma hora limite",
  "validation.dates_min": "Defina pelo menos uma data com um horário",
  "validation.date_times_min": "Cada data precisa ter pelo menos um horário",
  "validation.date_duplicate": "Data já selecionada",
  "validation.dates_invalid": "Datas e horários inválidos",
  "validation.time_start_required": "Selecione um horário",
  "validation.time_duration_required": "Selecione a duração",
  "validation.time_invalid": "Horário inválido",
  "validation.room_id_invalid": "ID inválido",
  "validation.email_invalid": "Digite um email válido",
  "validation.slots_min": "Selecione pelo menos um horário para votar.",
  "notify.room_created": "Sala criada com sucesso!",
  "notify.room_create_error": "Erro ao criar sala",
  "notify.room_load_error": "Erro ao carregar a sala de votação.",
  "notify.vote_success": "Voto registrado com sucesso.",
  "notify.vote_error": "Erro ao votar.",
  "notify.already_voted": "Você já votou nesta sala com esse nome.",
  "page.podium_title": "🏆 Pódio Atual dos 5 Horários Mais Votados",
  "page.podium_subtitle": "(Resultado oficial será mostrado após o término da votação)",
  "page.podium_empty": "Nenhum horário votado até o momento.",
  "page.votes_label": "{count} voto(s)",
  "page.by_weekday": "Horários por dia da semana",
  "page.voting_closed_title": "⚠️ Votação Encerrada",
  "page.voting_closed_body": "As votações nesta sala foram encerradas! Confira o pódio e veja os horários mais bem votados. 🏆",
  "error.room_not_found": "Sala não encontrada",
  "error.backend": "Erro ao comunicar com o servidor. Tente novamente.",
  "error.internal": "Ocorreu um erro interno",
  "app.name": "MeetSync"
}
"#;

const EN_JSON: &str = r#"
{
  "validation.name_required": "Name cannot be empty",
  "validation.name_letters": "Name must contain only letters",
  "validation.name_min": "Name must have at least 3 characters",
  "validation.title_required": "Title cannot be empty",
  "validation.title_min": "Title must have at least 5 characters",
  "validation.end_date_required": "Select an end date",
  "validation.end_time_required": "Select an end time",
  "validation.dates_min": "Define at least one date with one time slot",
  "validation.date_times_min": "Each date needs at least one time slot",
  "validation.date_duplicate": "Date already selected",
  "validation.dates_invalid": "Invalid dates and times",
  "validation.time_start_required": "Select a start time",
  "validation.time_duration_required": "Select a duration",
  "validation.time_invalid": "Invalid time",
  "validation.room_id_invalid": "Invalid ID",
  "validation.email_invalid": "Enter a valid email",
  "validation.slots_min": "Select at least one time slot to vote.",
  "notify.room_created": "Room created successfully!",
  "notify.room_create_error": "Failed to create room",
  "notify.room_load_error": "Failed to load the voting room.",
  "notify.vote_success": "Vote registered successfully.",
  "notify.vote_error": "Failed to vote.",
  "notify.already_voted": "You already voted in this room with this name.",
  "page.podium_title": "🏆 Current Podium of the 5 Most Voted Times",
  "page.podium_subtitle": "(Official result will be shown after voting ends)",
  "page.podium_empty": "No time slot has been voted yet.",
  "page.votes_label": "{count} vote(s)",
  "page.by_weekday": "Times by weekday",
  "page.voting_closed_title": "⚠️ Voting Closed",
  "page.voting_closed_body": "Voting in this room has ended! Check the podium for the top voted times. 🏆",
  "error.room_not_found": "Room not found",
  "error.backend": "Failed to reach the server. Please try again.",
  "error.internal": "An internal error occurred",
  "app.name": "MeetSync"
}
"#;

/// Initialize translations map (lazy).
fn build_translations() -> HashMap<String, HashMap<String, String>> {
    let mut out: HashMap<String, HashMap<String, String>> = HashMap::new();

    let pt_map: HashMap<String, String> = serde_json::from_str(PT_JSON).unwrap_or_else(|e| {
        panic!("failed to parse PT_JSON in i18n module: {}", e);
    });
    out.insert("pt".to_string(), pt_map);

    let en_map: HashMap<String, String> = serde_json::from_str(EN_JSON).unwrap_or_else(|e| {
        panic!("failed to parse EN_JSON in i18n module: {}", e);
    });
    out.insert("en".to_string(), en_map);

    out
}

/// Returns the global translations map (lang -> (key -> message)).
fn translations() -> &'static HashMap<String, HashMap<String, String>> {
    TRANSLATIONS.get_or_init(build_translations)
}

/// Normalize a language tag into a short, lowercase code (e.g. "pt-BR" -> "pt").
pub fn normalize_language(lang: &str) -> String {
    lang.split('-').next().unwrap_or(lang).to_lowercase()
}

/// Returns true if the given language code has an embedded catalog.
pub fn is_supported_language(lang: &str) -> bool {
    translations().contains_key(lang)
}

/// Translate a key using an explicit language (or default if None).
///
/// - `lang`: optional language code (`"pt"`, `"en"`). If None, DEFAULT_LANG is used.
/// - `key`: translation key (flat string, e.g. "validation.name_min").
/// - `params`: optional slice of (name, value) for placeholder replacement.
///   Replacements use single-brace placeholders `{name}`.
///
/// Returns the translated and parameter-substituted string. If no translation
/// is found, returns the default language value, or the key itself.
pub fn tr(lang: Option<&str>, key: &str, params: Option<&[(&str, &str)]>) -> String {
    let map = translations();

    let desired = lang.unwrap_or(DEFAULT_LANG);

    let val = map
        .get(desired)
        .and_then(|m| m.get(key))
        .cloned()
        .or_else(|| map.get(DEFAULT_LANG).and_then(|m| m.get(key)).cloned())
        .unwrap_or_else(|| key.to_string());

    if let Some(params) = params {
        let mut s = val;
        for (k, v) in params {
            s = s.replace(&format!("{{{}}}", k), v);
        }
        s
    } else {
        val
    }
}

/// Convenience wrapper: translate using default language (DEFAULT_LANG).
pub fn t(key: &str) -> String {
    tr(None, key, None)
}

/// Convenience wrapper with params (default language).
pub fn t_with(key: &str, params: &[(&str, &str)]) -> String {
    tr(None, key, Some(params))
}
