//! Детектор подозрительных строк (читы, запрещённые клиенты)
//!
//! Слой поверх основного анализатора: ключевые слова, regex-паттерны и
//! опциональный внешний скорер (например, обученная модель). Скорер
//! подключается при создании и никогда не встроен в основной конвейер.

use regex::RegexBuilder;
use serde::Serialize;

use crate::error::Result;

/// Внешний скорер подозрительности отдельной строки
pub trait SuspicionScorer {
    /// true - строка считается подозрительной
    fn score(&self, line: &str) -> bool;
}

/// Чем сработала детекция
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionKind {
    Keyword,
    Pattern,
    Scorer,
}

/// Одно срабатывание детектора
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuspicionHit {
    pub kind: DetectionKind,
    /// Сработавшее ключевое слово или паттерн
    pub pattern: String,
    /// Строка лога как есть
    pub line: String,
}

/// Детектор по спискам ключевых слов и паттернов
pub struct SuspicionDetector {
    keywords: Vec<String>,
    patterns: Vec<regex::Regex>,
    scorer: Option<Box<dyn SuspicionScorer>>,
}

impl SuspicionDetector {
    /// Создать детектор; паттерны компилируются как case-insensitive
    pub fn new(keywords: &[&str], patterns: &[&str]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|pattern| RegexBuilder::new(pattern).case_insensitive(true).build())
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            patterns,
            scorer: None,
        })
    }

    /// Подключить внешний скорер
    pub fn with_scorer(mut self, scorer: Box<dyn SuspicionScorer>) -> Self {
        self.scorer = Some(scorer);
        self
    }

    /// Проверить строки; каждое совпадение даёт отдельное срабатывание
    pub fn scan(&self, lines: &[&str]) -> Vec<SuspicionHit> {
        let mut hits = Vec::new();
        for line in lines {
            let lower = line.to_lowercase();
            for keyword in &self.keywords {
                if lower.contains(keyword) {
                    hits.push(SuspicionHit {
                        kind: DetectionKind::Keyword,
                        pattern: keyword.clone(),
                        line: line.to_string(),
                    });
                }
            }
            for regex in &self.patterns {
                if regex.is_match(line) {
                    hits.push(SuspicionHit {
                        kind: DetectionKind::Pattern,
                        pattern: regex.as_str().to_string(),
                        line: line.to_string(),
                    });
                }
            }
            if let Some(scorer) = &self.scorer {
                if scorer.score(line) {
                    hits.push(SuspicionHit {
                        kind: DetectionKind::Scorer,
                        pattern: "scorer".to_string(),
                        line: line.to_string(),
                    });
                }
            }
        }
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_detection_case_insensitive() {
        let detector = SuspicionDetector::new(&["Wurst", "impact"], &[]).unwrap();
        let hits = detector.scan(&["Loading WURST client hooks", "clean line"]);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind, DetectionKind::Keyword);
        assert_eq!(hits[0].pattern, "wurst");
        assert_eq!(hits[0].line, "Loading WURST client hooks");
    }

    #[test]
    fn test_pattern_detection() {
        let detector = SuspicionDetector::new(&[], &[r"cheat detected", r"\[mod\]"]).unwrap();
        let hits = detector.scan(&["[Mod] injected", "Cheat Detected on join"]);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|h| h.kind == DetectionKind::Pattern));
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        assert!(SuspicionDetector::new(&[], &["("]).is_err());
    }

    #[test]
    fn test_injected_scorer() {
        struct LongLineScorer;
        impl SuspicionScorer for LongLineScorer {
            fn score(&self, line: &str) -> bool {
                line.len() > 20
            }
        }

        let detector = SuspicionDetector::new(&[], &[])
            .unwrap()
            .with_scorer(Box::new(LongLineScorer));
        let hits = detector.scan(&["short", "this line is definitely long enough"]);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind, DetectionKind::Scorer);
    }

    #[test]
    fn test_multiple_hits_per_line() {
        let detector = SuspicionDetector::new(&["wurst"], &["wurst"]).unwrap();
        let hits = detector.scan(&["wurst loaded"]);
        // Ключевое слово и паттерн дают по отдельному срабатыванию
        assert_eq!(hits.len(), 2);
    }
}
