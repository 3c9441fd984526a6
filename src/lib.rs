//! Эвристический анализатор логов Minecraft
//!
//! Функции:
//! - Определение игрока, версии игры и клиента (Vanilla/Fabric/Forge/Lunar)
//! - Извлечение списка загруженных модов из неструктурированного лога
//! - Сверка каждого мода с внешним списком разрешённых/запрещённых
//! - Детектор подозрительных строк поверх основного анализа

pub mod analyzer;
pub mod classify;
pub mod error;
pub mod extractor;
pub mod normalize;
pub mod session;
pub mod suspicion;
pub mod types;

// Re-export публичных типов
pub use analyzer::LogAnalyzer;
pub use error::{AnalyzerError, Result};
pub use normalize::normalize;
pub use suspicion::{DetectionKind, SuspicionDetector, SuspicionHit, SuspicionScorer};
pub use types::{
    AnalysisResult, CandidateMod, ClassifiedMod, ClientFlavor, ModStatus, RegistryEntry,
};
