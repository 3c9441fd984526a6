//! CLI-обёртка для разового анализа: файл лога -> JSON в stdout

use std::path::Path;

use anyhow::{bail, Context, Result};
use modscan::{LogAnalyzer, RegistryEntry};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        bail!("usage: {} <log file> [registry.json]", args[0]);
    }

    let registry: Vec<RegistryEntry> = match args.get(2) {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read registry {}", path))?;
            serde_json::from_str(&content)
                .with_context(|| format!("invalid registry file {}", path))?
        }
        None => Vec::new(),
    };

    let result = LogAnalyzer::new()
        .analyze_file(Path::new(&args[1]), &registry)
        .with_context(|| format!("failed to analyze {}", args[1]))?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
