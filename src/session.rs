//! Извлечение метаданных сессии из лога
//!
//! Игрок, версия игры, клиент и строки с ошибками. Все функции работают
//! best-effort: отсутствие данных это `None`/пустой список, не ошибка.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::ClientFlavor;

lazy_static! {
    static ref RE_SETTING_USER: Regex = Regex::new(r"Setting user:\s*(\S+)").unwrap();
    static ref RE_LOADED_CONTENT: Regex = Regex::new(r"Loaded content for \[([^\]]+)\]").unwrap();
    static ref RE_MC_VERSION: Regex =
        Regex::new(r"(?i)minecraft[\s:=-]*v?(1\.[0-9]+(?:\.[0-9]+)?)").unwrap();
    static ref RE_VERSION: Regex =
        Regex::new(r"(?i)version[\s:=-]*v?(1\.[0-9]+(?:\.[0-9]+)?)").unwrap();
    static ref RE_BARE_VERSION: Regex = Regex::new(r"(1\.[0-9]+(?:\.[0-9]+)?)").unwrap();
    static ref RE_LUNAR_CLIENT: Regex = Regex::new(r"(?i)lunar ?client").unwrap();
}

/// Case-insensitive contains без аллокаций (ASCII)
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    if haystack.len() < needle.len() {
        return false;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

/// Ник игрока: `Setting user: <ник>`, иначе `Loaded content for [<ник>]`
pub fn extract_player(lines: &[&str]) -> Option<String> {
    for line in lines {
        if let Some(caps) = RE_SETTING_USER.captures(line) {
            return Some(caps[1].to_string());
        }
    }
    for line in lines {
        if let Some(caps) = RE_LOADED_CONTENT.captures(line) {
            return Some(caps[1].to_string());
        }
    }
    None
}

/// Версия игры с четырёхступенчатым fallback:
/// 1. строка с "minecraft" и версией рядом
/// 2. строка с "version" и версией рядом
/// 3. строка про загрузчик + голый токен `1.x(.y)?`
/// 4. любой голый токен `1.x(.y)?` в логе
///
/// Порядок важен и сохраняется как есть: последняя ступень может поймать
/// посторонний `1.x` токен в скудных логах.
pub fn extract_version(lines: &[&str]) -> Option<String> {
    for line in lines {
        if let Some(caps) = RE_MC_VERSION.captures(line) {
            return Some(caps[1].to_string());
        }
    }
    for line in lines {
        if let Some(caps) = RE_VERSION.captures(line) {
            return Some(caps[1].to_string());
        }
    }
    for line in lines {
        let about_loader = ["fabricloader", "loader", "forge", "fabric"]
            .iter()
            .any(|word| contains_ci(line, word));
        if about_loader {
            if let Some(caps) = RE_BARE_VERSION.captures(line) {
                return Some(caps[1].to_string());
            }
        }
    }
    for line in lines {
        if let Some(caps) = RE_BARE_VERSION.captures(line) {
            return Some(caps[1].to_string());
        }
    }
    None
}

/// Определить клиент по первой подходящей строке.
/// Приоритет внутри строки: Lunar -> Fabric -> Forge.
pub fn extract_client(lines: &[&str]) -> ClientFlavor {
    for line in lines {
        if RE_LUNAR_CLIENT.is_match(line) {
            return ClientFlavor::LunarClient;
        }
        if line.contains("[LC]") || line.contains("[LC ") || line.contains("LUNARCLIENT_STATUS") {
            return ClientFlavor::LunarClient;
        }
        if contains_ci(line, "lunar") {
            let lower = line.to_lowercase();
            if lower.contains("client") || lower.contains("[lc") {
                return ClientFlavor::LunarClient;
            }
        }
        if contains_ci(line, "fabric loader") {
            return ClientFlavor::Fabric;
        }
        if contains_ci(line, "forge") {
            return ClientFlavor::Forge;
        }
    }
    ClientFlavor::Vanilla
}

/// Строки с упоминанием ошибок - это данные для отчёта, не сбой анализа
pub fn extract_errors(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| contains_ci(line, "error") || contains_ci(line, "exception"))
        .map(|line| line.trim().to_string())
        .collect()
}
