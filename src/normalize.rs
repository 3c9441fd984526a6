//! Нормализация имён модов для сравнения
//!
//! Разные загрузчики пишут одно и то же имя по-разному ("Fabric-API",
//! "fabric_api"), поэтому сравнение идёт по нижнему регистру без
//! пунктуации.

/// Lower-alphanumeric-only form for comparisons. Total and idempotent.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
