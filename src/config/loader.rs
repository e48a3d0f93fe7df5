//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{PackagerError, PackagerResult};

use super::types::Config;

/// File looked up in the working directory when no path is given
pub const CONFIG_FILE_NAME: &str = "jspackager.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PackagerResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PackagerError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Explicit path, then the working directory's config file, then defaults.
///
/// An explicit path that cannot be loaded is an error; the implicit file is
/// only read when it exists. Environment overrides are applied last.
pub fn discover(
    explicit: Option<&Path>,
    working_dir: &Path,
) -> PackagerResult<(Config, Vec<ConfigWarning>)> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => Some(working_dir.join(CONFIG_FILE_NAME)).filter(|p| p.is_file()),
    };

    let (config, warnings) = match candidate {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    for warning in &warnings {
        warn!("{}", warning);
    }

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (JSPACKAGER_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |name| std::env::var(name).ok())
}

/// Apply overrides from any variable source
pub fn with_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(symbol) = lookup("JSPACKAGER_REMOTE_SYMBOL") {
        config.remote.symbol = symbol;
    }

    if let Some(folder) = lookup("JSPACKAGER_SHARED_FOLDER") {
        config.remote.shared_folder = Some(folder).filter(|f| !f.is_empty());
    }

    if let Some(level) = lookup("JSPACKAGER_COMPILATION_LEVEL") {
        config.compiler.compilation_level = level;
    }

    if let Some(val) = lookup("JSPACKAGER_MINIFY") {
        config.compiler.minify = parse_flag(&val);
    }

    if let Some(val) = lookup("JSPACKAGER_USE_COMPILED") {
        config.resolve.use_compiled_scripts = parse_flag(&val);
    }

    if let Some(val) = lookup("JSPACKAGER_MUTE_MISSING") {
        config.resolve.mute_missing_files = parse_flag(&val);
    }

    config
}

fn parse_flag(val: &str) -> bool {
    let val = val.trim().to_lowercase();
    val != "false" && val != "0" && !val.is_empty()
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "remote",
        "symbol",
        "shared_folder",
        "locally_hosted_path",
        "compiler",
        "compilation_level",
        "summary_detail_level",
        "minify",
        "command",
        "args",
        "resolve",
        "use_compiled_scripts",
        "fallback_if_missing_compiled_script",
        "mute_missing_files",
        "tests_source_path",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
