//! Сборка результата анализа
//!
//! Один вызов - один проход по строкам: обрезка до начала игровой
//! сессии, метаданные, извлечение модов, классификация по реестру.
//! Чистая синхронная функция без состояния между вызовами.

use std::path::Path;
use std::time::Instant;

use crate::classify::classify_mod;
use crate::error::Result;
use crate::extractor::extract_mods;
use crate::session;
use crate::types::{AnalysisResult, ClassifiedMod, ModStatus, RegistryEntry};

/// Маркеры перехода лога в игровой чат: после них сигналов загрузки
/// модов уже не бывает, дальше сканировать бессмысленно
const CUTOFF_MARKERS: [&str; 2] = ["Connecting to ", "[System] [CHAT]"];

/// Анализатор логов Minecraft
///
/// Паттерны кешируются глобально, создание экземпляра бесплатно.
pub struct LogAnalyzer;

impl LogAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Анализировать лог целиком (текст с переносами строк)
    pub fn analyze(&self, log_content: &str, registry: &[RegistryEntry]) -> AnalysisResult {
        let lines: Vec<&str> = log_content.lines().collect();
        self.analyze_lines(&lines, registry)
    }

    /// Анализировать файл лога; битые байты заменяются, не фатальны
    pub fn analyze_file(&self, path: &Path, registry: &[RegistryEntry]) -> Result<AnalysisResult> {
        let bytes = std::fs::read(path)?;
        let content = String::from_utf8_lossy(&bytes);
        Ok(self.analyze(&content, registry))
    }

    /// Анализировать уже разбитые на строки данные
    pub fn analyze_lines(&self, raw_lines: &[&str], registry: &[RegistryEntry]) -> AnalysisResult {
        let start_time = Instant::now();

        let cutoff = raw_lines
            .iter()
            .position(|line| CUTOFF_MARKERS.iter().any(|marker| line.contains(marker)))
            .unwrap_or(raw_lines.len());
        let lines = &raw_lines[..cutoff];

        let player = session::extract_player(lines);
        let version = session::extract_version(lines);
        let client = session::extract_client(lines);
        let errors = session::extract_errors(lines);

        let candidates = extract_mods(lines);
        if candidates.is_empty() {
            log::debug!("No mod candidates in {} lines", lines.len());
            return AnalysisResult {
                player,
                version,
                client,
                mods_forbidden: Vec::new(),
                mods_allowed: Vec::new(),
                mods_unknown: Vec::new(),
                total: 0,
                errors,
            };
        }

        let total = candidates.len();
        let mut mods_forbidden = Vec::new();
        let mut mods_allowed = Vec::new();
        let mut mods_unknown = Vec::new();

        for candidate in candidates {
            let info = classify_mod(&candidate.id, registry);
            let classified = ClassifiedMod {
                name: candidate.display,
                id: candidate.id,
                category: info
                    .map(|entry| entry.category.clone())
                    .unwrap_or_else(|| "unknown".to_string()),
                platform: info
                    .map(|entry| entry.platform.clone())
                    .unwrap_or_else(|| "Unknown".to_string()),
                status: info.map(|entry| entry.status).unwrap_or(ModStatus::Unknown),
            };
            match classified.status {
                ModStatus::Forbidden => mods_forbidden.push(classified),
                ModStatus::Allowed => mods_allowed.push(classified),
                ModStatus::Unknown => mods_unknown.push(classified),
            }
        }

        log::info!(
            "⚡ Log analysis completed in {}ms (lines: {}, mods: {}, forbidden: {})",
            start_time.elapsed().as_millis(),
            raw_lines.len(),
            total,
            mods_forbidden.len()
        );

        AnalysisResult {
            player,
            version,
            client,
            mods_forbidden,
            mods_allowed,
            mods_unknown,
            total,
            errors,
        }
    }
}

impl Default for LogAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ClientFlavor;

    fn forbidden_sodium() -> Vec<RegistryEntry> {
        vec![RegistryEntry {
            name: "sodium".to_string(),
            aliases: vec!["Sodium".to_string()],
            status: ModStatus::Forbidden,
            category: "performance".to_string(),
            platform: "Java".to_string(),
        }]
    }

    const BASIC_LOG: [&str; 5] = [
        "Setting user: Steve123",
        "Loading 2 mods:",
        "- sodium 0.4.10",
        "- lithium 0.7.0",
        "[main/INFO]: done",
    ];

    #[test]
    fn test_analyze_empty_registry() {
        let result = LogAnalyzer::new().analyze_lines(&BASIC_LOG, &[]);
        assert_eq!(result.player, Some("Steve123".to_string()));
        assert_eq!(result.total, 2);
        assert!(result.mods_forbidden.is_empty());
        assert!(result.mods_allowed.is_empty());
        let ids: Vec<&str> = result.mods_unknown.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["sodium", "lithium"]);
        // Сентинели для несматченных модов
        assert_eq!(result.mods_unknown[0].category, "unknown");
        assert_eq!(result.mods_unknown[0].platform, "Unknown");
    }

    #[test]
    fn test_analyze_with_registry_buckets() {
        let result = LogAnalyzer::new().analyze_lines(&BASIC_LOG, &forbidden_sodium());
        assert_eq!(result.total, 2);
        assert_eq!(result.mods_forbidden.len(), 1);
        assert_eq!(result.mods_forbidden[0].id, "sodium");
        assert_eq!(result.mods_forbidden[0].category, "performance");
        assert_eq!(result.mods_unknown.len(), 1);
        assert_eq!(result.mods_unknown[0].id, "lithium");
    }

    #[test]
    fn test_total_equals_bucket_sum() {
        let result = LogAnalyzer::new().analyze_lines(&BASIC_LOG, &forbidden_sodium());
        assert_eq!(
            result.total,
            result.mods_forbidden.len() + result.mods_allowed.len() + result.mods_unknown.len()
        );
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let analyzer = LogAnalyzer::new();
        let first = analyzer.analyze_lines(&BASIC_LOG, &forbidden_sodium());
        let second = analyzer.analyze_lines(&BASIC_LOG, &forbidden_sodium());
        assert_eq!(first, second);
        // Сериализованная форма тоже байт-в-байт
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_truncation_on_connecting_to() {
        let lines = vec![
            "Setting user: Steve123",
            "Connecting to mc.example.com, 25565",
            "Loading 2 mods:",
            "- sodium 0.4.10",
            "[CHAT] error: fake",
        ];
        let result = LogAnalyzer::new().analyze_lines(&lines, &[]);
        // Всё после маркера исключено: и моды, и ошибки
        assert_eq!(result.total, 0);
        assert!(result.errors.is_empty());
        assert_eq!(result.player, Some("Steve123".to_string()));
    }

    #[test]
    fn test_truncation_on_chat_marker() {
        let lines = vec![
            "Loading 1 mods:",
            "- sodium 0.4.10",
            "[main/INFO]: [System] [CHAT] <Steve> hi",
            "Found mod iris version 1.6.4",
        ];
        let result = LogAnalyzer::new().analyze_lines(&lines, &[]);
        assert_eq!(result.total, 1);
        assert_eq!(result.mods_unknown[0].id, "sodium");
    }

    #[test]
    fn test_no_candidates_short_circuit_keeps_metadata() {
        let lines = vec![
            "Setting user: Alex",
            "Loading Minecraft 1.20.1 with Fabric Loader 0.14.21",
            "[main/ERROR]: something broke",
        ];
        let result = LogAnalyzer::new().analyze_lines(&lines, &forbidden_sodium());
        assert_eq!(result.total, 0);
        assert_eq!(result.player, Some("Alex".to_string()));
        assert_eq!(result.version, Some("1.20.1".to_string()));
        assert_eq!(result.client, ClientFlavor::Fabric);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let result = LogAnalyzer::new().analyze_lines(&[], &forbidden_sodium());
        assert_eq!(result.total, 0);
        assert_eq!(result.player, None);
        assert_eq!(result.version, None);
        assert_eq!(result.client, ClientFlavor::Vanilla);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_analyze_whole_string() {
        let log = "Setting user: Steve123\nLoading 1 mods:\n- sodium 0.4.10\n";
        let result = LogAnalyzer::new().analyze(log, &[]);
        assert_eq!(result.total, 1);
        assert_eq!(result.player, Some("Steve123".to_string()));
    }

    #[test]
    fn test_result_json_field_names() {
        let result = LogAnalyzer::new().analyze_lines(&BASIC_LOG, &forbidden_sodium());
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("player").is_some());
        assert!(json.get("version").is_some());
        assert!(json.get("client").is_some());
        assert!(json.get("mods_forbidden").is_some());
        assert!(json.get("mods_allowed").is_some());
        assert!(json.get("mods_unknown").is_some());
        assert_eq!(json["total"], 2);
        assert_eq!(json["mods_forbidden"][0]["status"], "forbidden");
    }
}
