//! Извлечение кандидатов модов из строк лога
//!
//! Набор независимых правил, каждое распознаёт одно соглашение логов
//! (блок загрузчика, строки конфигов, entrypoint'ы, ссылки на .jar).
//! Это не грамматика: правила пересекаются намеренно, порядок фиксирован
//! и первый источник выигрывает.

mod rules;

use std::collections::HashSet;

use crate::types::CandidateMod;

/// Аккумулятор кандидатов с дедупликацией по сырому `id`.
///
/// Ключ именно сырой, не нормализованный: "Sodium" и "sodium" это два
/// разных кандидата. Классификатор сверяет их с реестром уже по
/// нормализованной форме, эта асимметрия сохранена сознательно.
pub(crate) struct CandidateSet {
    seen: HashSet<String>,
    ordered: Vec<CandidateMod>,
}

impl CandidateSet {
    fn new() -> Self {
        Self {
            seen: HashSet::new(),
            ordered: Vec::new(),
        }
    }

    /// Добавить кандидата; повторный `id` игнорируется, display фиксирует
    /// первое сработавшее правило
    pub(crate) fn add(&mut self, id: &str, display: Option<&str>) {
        let id = id.trim();
        if id.is_empty() || self.seen.contains(id) {
            return;
        }
        self.seen.insert(id.to_string());
        let display = display
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(id);
        self.ordered.push(CandidateMod {
            id: id.to_string(),
            display: display.to_string(),
        });
    }

    fn into_vec(self) -> Vec<CandidateMod> {
        self.ordered
    }
}

/// Прогнать все правила в фиксированном порядке и слить результаты
pub fn extract_mods(lines: &[&str]) -> Vec<CandidateMod> {
    let mut acc = CandidateSet::new();

    rules::loading_mods_block(lines, &mut acc);
    rules::config_loaded(lines, &mut acc);
    rules::entrypoints(lines, &mut acc);
    rules::forge_mod_list(lines, &mut acc);
    rules::found_mod_version(lines, &mut acc);
    rules::contains_mod(lines, &mut acc);
    rules::registering_mod(lines, &mut acc);
    rules::jar_references(lines, &mut acc);

    log::debug!(
        "Mod extraction: {} candidates from {} lines",
        acc.ordered.len(),
        lines.len()
    );

    acc.into_vec()
}
