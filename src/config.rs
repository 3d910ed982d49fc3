use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".polydocrc.json";

/// A language every comment block must carry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Language {
    /// Display name, e.g. `english`.
    pub language: String,
    /// Tag used both in the comment format and by the translation service, e.g. `zh-CN`.
    pub tag: String,
}

impl Language {
    pub fn new(language: &str, tag: &str) -> Self {
        Self {
            language: language.to_string(),
            tag: tag.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_main_tag")]
    pub main_tag: String,
    #[serde(default = "default_comment_prefix")]
    pub comment_prefix: String,
    #[serde(default = "default_languages")]
    pub languages: Vec<Language>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_main_tag() -> String {
    "summary".to_string()
}

fn default_comment_prefix() -> String {
    "///".to_string()
}

fn default_languages() -> Vec<Language> {
    vec![
        Language::new("english", "en"),
        Language::new("chinese", "zh-CN"),
        Language::new("spanish", "es"),
    ]
}

fn default_ignores() -> Vec<String> {
    vec!["**/.git/**".to_string()]
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            main_tag: default_main_tag(),
            comment_prefix: default_comment_prefix(),
            languages: default_languages(),
            ignores: default_ignores(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for an empty language table, duplicate tags,
    /// empty markers, a zero timeout or invalid ignore globs.
    pub fn validate(&self) -> Result<()> {
        if self.main_tag.trim().is_empty() {
            bail!("'mainTag' must not be empty");
        }
        if self.comment_prefix.trim().is_empty() {
            bail!("'commentPrefix' must not be empty");
        }
        if self.languages.is_empty() {
            bail!("'languages' must list at least one language");
        }
        if self.timeout_secs == 0 {
            bail!("'timeoutSecs' must be greater than 0");
        }

        let mut seen = HashSet::new();
        for lang in &self.languages {
            if lang.tag.trim().is_empty() {
                bail!("Language \"{}\" has an empty tag", lang.language);
            }
            if !seen.insert(lang.tag.as_str()) {
                bail!("Duplicate language tag in 'languages': \"{}\"", lang.tag);
            }
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
    }

    /// `/// <summary>`
    pub fn opening_marker(&self) -> String {
        format!("{} <{}>", self.comment_prefix, self.main_tag)
    }

    /// `/// </summary>`
    pub fn closing_line(&self) -> String {
        format!("{} </{}>", self.comment_prefix, self.main_tag)
    }

    /// `</summary>`
    pub fn closing_marker(&self) -> String {
        format!("</{}>", self.main_tag)
    }

    /// Look up a configured language by its tag.
    pub fn language_for_tag(&self, tag: &str) -> Option<&Language> {
        self.languages.iter().find(|lang| lang.tag == tag)
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the config was read from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => Ok(ConfigLoadResult {
            config: load_config_file(&path)?,
            path: Some(path),
        }),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
