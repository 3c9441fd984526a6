use serde::{Deserialize, Serialize};

/// Allow/deny status of a mod in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModStatus {
    Allowed,
    Forbidden,
    #[default]
    Unknown,
}

impl ModStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Allowed => "allowed",
            Self::Forbidden => "forbidden",
            Self::Unknown => "unknown",
        }
    }
}

/// Which launcher/loader produced the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientFlavor {
    LunarClient,
    Fabric,
    Forge,
    Vanilla,
}

impl ClientFlavor {
    pub fn as_str(&self) -> &str {
        match self {
            Self::LunarClient => "LunarClient",
            Self::Fabric => "Fabric",
            Self::Forge => "Forge",
            Self::Vanilla => "Vanilla",
        }
    }
}

/// Mod tentatively identified in the log, before registry classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateMod {
    /// Raw token used for registry matching (also the dedup key)
    pub id: String,
    /// Human-readable form, may carry a version suffix
    pub display: String,
}

/// Entry of the caller-owned mod registry
///
/// The registry is supplied fresh on every analysis call and never mutated
/// by the analyzer. Persistence belongs to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub name: String,
    /// Alternative spellings; matched with the same normalization as `name`
    #[serde(default, alias = "alias")]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub status: ModStatus,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_platform")]
    pub platform: String,
}

fn default_category() -> String {
    "unknown".to_string()
}

fn default_platform() -> String {
    "Unknown".to_string()
}

/// Detected mod joined against the registry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedMod {
    /// Display form (may include version)
    pub name: String,
    pub id: String,
    pub category: String,
    pub platform: String,
    pub status: ModStatus,
}

/// Full result of one analysis call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub player: Option<String>,
    pub version: Option<String>,
    pub client: ClientFlavor,
    pub mods_forbidden: Vec<ClassifiedMod>,
    pub mods_allowed: Vec<ClassifiedMod>,
    pub mods_unknown: Vec<ClassifiedMod>,
    /// Number of detected candidates (equals the sum of the three lists)
    pub total: usize,
    /// Log lines mentioning errors/exceptions, verbatim
    pub errors: Vec<String>,
}
