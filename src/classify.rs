//! Классификация кандидатов по реестру модов

use crate::normalize::normalize;
use crate::types::RegistryEntry;

/// Найти запись реестра для кандидата.
///
/// Сравнение по нормализованной форме имени и алиасов, в порядке реестра;
/// первое совпадение выигрывает. Реестры маленькие (десятки записей),
/// линейный проход достаточен.
pub fn classify_mod<'a>(candidate_id: &str, registry: &'a [RegistryEntry]) -> Option<&'a RegistryEntry> {
    let needle = normalize(candidate_id);
    registry.iter().find(|entry| {
        std::iter::once(entry.name.as_str())
            .chain(entry.aliases.iter().map(String::as_str))
            .any(|pattern| !pattern.is_empty() && normalize(pattern) == needle)
    })
}
