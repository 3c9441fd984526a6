//! Правила распознавания модов в логе
//!
//! Каждое правило сканирует весь диапазон строк и складывает находки в
//! аккумулятор. Regex-паттерны компилируются один раз и кешируются
//! глобально.

use lazy_static::lazy_static;
use regex::Regex;

use super::CandidateSet;

lazy_static! {
    static ref RE_CONFIG_LOADED: Regex =
        Regex::new(r"Loaded configuration file for (.+?):").unwrap();
    static ref RE_ENTRYPOINT: Regex =
        Regex::new(r"Found Entrypoint\([^)]*\)\s+([A-Za-z0-9_.$:]+)").unwrap();
    static ref RE_ENTRYPOINT_SUFFIX: Regex =
        Regex::new(r"(?i)(ClientMod|Client|Mod|Initializer|Init)$").unwrap();
    static ref RE_FORGE_LIST_ENTRY: Regex =
        Regex::new(r"^\s*[-\t]*([A-Za-z0-9_.-]+)(?:\s+(\S+))?").unwrap();
    static ref RE_FOUND_MOD: Regex = Regex::new(r"Found mod (\S+) version (\S+)").unwrap();
    static ref RE_CONTAINS_MOD: Regex = Regex::new(r"contains mod (\S+)").unwrap();
    static ref RE_REGISTERING_MOD: Regex =
        Regex::new(r"Registering new mod:\s+(\S+)\s+(\S+)").unwrap();
    static ref RE_JAR_TOKEN: Regex = Regex::new(r"(?i)([A-Za-z0-9_\-./\\]+\.jar)").unwrap();
    static ref RE_JAR_VERSION_SUFFIX: Regex =
        Regex::new(r"[-_ ]v?\d+(?:[.\-]\d+)*[A-Za-z0-9]*$").unwrap();
}

/// Правило a: блок "Loading N mods:" (Fabric/Quilt).
/// Заголовок - строка с "Loading" и "mods:", но не "Loading Minecraft".
/// Блок заканчивается на строке с `[` или на строке без `-`.
pub(super) fn loading_mods_block(lines: &[&str], acc: &mut CandidateSet) {
    let Some(start) = lines.iter().position(|line| {
        line.contains("Loading") && line.contains("mods:") && !line.contains("Loading Minecraft")
    }) else {
        return;
    };

    for line in &lines[start + 1..] {
        let s = line.trim_start();
        if s.starts_with('[') {
            break;
        }
        let Some(content) = s.strip_prefix('-') else {
            break;
        };
        let content = content.trim();
        if content.is_empty() {
            continue;
        }
        let mut tokens = content.split_whitespace();
        let Some(id) = tokens.next() else {
            continue;
        };
        let version = tokens.collect::<Vec<_>>().join(" ");
        let display = format!("{} {}", id, version);
        acc.add(id, Some(display.trim()));
    }
}

/// Правило b: "Loaded configuration file for <name>:"
pub(super) fn config_loaded(lines: &[&str], acc: &mut CandidateSet) {
    for line in lines {
        if let Some(caps) = RE_CONFIG_LOADED.captures(line) {
            acc.add(&caps[1], None);
        }
    }
}

/// Правило c: Fabric entrypoint'ы.
/// Берём последний сегмент класса и срезаем служебный суффикс
/// (ClientMod/Client/Mod/Initializer/Init).
pub(super) fn entrypoints(lines: &[&str], acc: &mut CandidateSet) {
    for line in lines {
        if !line.contains("Found Entrypoint(") {
            continue;
        }
        let Some(caps) = RE_ENTRYPOINT.captures(line) else {
            continue;
        };
        let full = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        let class_path = full.split([':', '(']).next().unwrap_or(full);
        let simple = class_path.rsplit('.').next().unwrap_or(class_path);
        let stripped = RE_ENTRYPOINT_SUFFIX.replace(simple, "");
        if stripped.is_empty() {
            // Суффикс съел всё имя - оставляем сегмент как есть
            acc.add(simple, None);
        } else {
            acc.add(&stripped, None);
        }
    }
}

/// Правило d: блок "Mod List:" (Forge).
/// Строка с `[` закрывает блок; строка не похожая на запись и не
/// начинающаяся с пробела/табуляции/дефиса - тоже.
pub(super) fn forge_mod_list(lines: &[&str], acc: &mut CandidateSet) {
    for (i, line) in lines.iter().enumerate() {
        if !line.contains("Mod List:") {
            continue;
        }
        for seg in &lines[i + 1..] {
            if seg.starts_with('[') {
                break;
            }
            match RE_FORGE_LIST_ENTRY.captures(seg) {
                Some(caps) => {
                    let id = &caps[1];
                    let version = caps.get(2).map(|m| m.as_str()).unwrap_or("");
                    let display = format!("{} {}", id, version);
                    acc.add(id, Some(display.trim()));
                }
                None => {
                    if !seg.starts_with([' ', '\t', '-']) {
                        break;
                    }
                }
            }
        }
    }
}

/// Правило e: "Found mod X version Y"
pub(super) fn found_mod_version(lines: &[&str], acc: &mut CandidateSet) {
    for line in lines {
        if let Some(caps) = RE_FOUND_MOD.captures(line) {
            let display = format!("{} {}", &caps[1], &caps[2]);
            acc.add(&caps[1], Some(&display));
        }
    }
}

/// Правило f: "contains mod X"
pub(super) fn contains_mod(lines: &[&str], acc: &mut CandidateSet) {
    for line in lines {
        if let Some(caps) = RE_CONTAINS_MOD.captures(line) {
            acc.add(&caps[1], None);
        }
    }
}

/// Правило g: "Registering new mod: X Y"
pub(super) fn registering_mod(lines: &[&str], acc: &mut CandidateSet) {
    for line in lines {
        if let Some(caps) = RE_REGISTERING_MOD.captures(line) {
            let display = format!("{} {}", &caps[1], &caps[2]);
            acc.add(&caps[1], Some(&display));
        }
    }
}

/// Правило h: ссылки на .jar файлы (например mods/SomeMod-1.2.3.jar).
/// Из имени файла убирается расширение и простой версионный суффикс.
pub(super) fn jar_references(lines: &[&str], acc: &mut CandidateSet) {
    for line in lines {
        for caps in RE_JAR_TOKEN.captures_iter(line) {
            let token = &caps[1];
            let fname = token.rsplit(['/', '\\']).next().unwrap_or(token);
            // Регексп гарантирует ASCII-хвост ".jar" из 4 байт
            let name = &fname[..fname.len() - 4];
            let clean = RE_JAR_VERSION_SUFFIX.replace(name, "");
            if clean.is_empty() {
                acc.add(name, Some(name));
            } else {
                acc.add(&clean, Some(name));
            }
        }
    }
}
