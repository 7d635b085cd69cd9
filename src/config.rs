use serde::{Deserialize, Serialize};

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

// ── Final (merged) config types ──

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
}

/// Front-end settings for the interactive binary.
#[derive(Debug, Deserialize, Serialize)]
pub struct Settings {
    /// Prompt shown by the read loop.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
        }
    }
}

/// Lexical settings consumed by the tokenizer.
#[derive(Debug, Deserialize, Serialize)]
pub struct TokenizerConfig {
    /// Characters lexed as standalone punctuation runs.
    #[serde(default = "default_punctuation")]
    pub punctuation_chars: String,
    /// End-of-line comment marker consumed by the tokenizer.
    #[serde(default = "default_comment_char")]
    pub comment_char: char,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            punctuation_chars: default_punctuation(),
            comment_char: default_comment_char(),
        }
    }
}

fn default_prompt() -> String {
    "> ".into()
}

fn default_punctuation() -> String {
    crate::parse::tokenize::DEFAULT_PUNCTUATION.into()
}

fn default_comment_char() -> char {
    crate::parse::tokenize::DEFAULT_COMMENT_CHAR
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    settings: SettingsOverlay,
    #[serde(default)]
    tokenizer: TokenizerOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct SettingsOverlay {
    prompt: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct TokenizerOverlay {
    punctuation_chars: Option<String>,
    comment_char: Option<char>,
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge user overlay from ~/.config/lineparse/config.toml (if exists)
    ///
    /// Overlay scalars override defaults when present; absent fields keep
    /// the default value. A malformed overlay is ignored with a warning.
    pub fn load() -> Self {
        let mut config = Self::default_config();
        if let Some(overlay) = Self::load_overlay() {
            config.apply_overlay(overlay);
        }
        config
    }

    /// Try to load user overlay from ~/.config/lineparse/config.toml.
    fn load_overlay() -> Option<ConfigOverlay> {
        let home = std::env::var_os("HOME")?;
        let path = std::path::Path::new(&home).join(".config/lineparse/config.toml");
        let content = std::fs::read_to_string(&path).ok()?;
        match toml::from_str(&content) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                log::warn!("ignoring malformed config at {}: {e}", path.display());
                None
            }
        }
    }

    /// Apply an overlay on top of this config.
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        if let Some(v) = overlay.settings.prompt {
            self.settings.prompt = v;
        }
        if let Some(v) = overlay.tokenizer.punctuation_chars {
            self.tokenizer.punctuation_chars = v;
        }
        if let Some(v) = overlay.tokenizer.comment_char {
            self.tokenizer.comment_char = v;
        }
    }
}
