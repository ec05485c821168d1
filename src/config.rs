//! Saved launch defaults.
//!
//! Defaults are stored as the same flag tokens accepted on the command
//! line, one or more per line, with `#` comments. The global file is merged
//! with a local `.todo-tuirc`, then with the actual command line.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::labels::Lang;
use crate::ui::style::ThemeMode;

const APP_DIR: &str = "todo-tui";
const LOCAL_FILE: &str = ".todo-tuirc";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub lang: Option<Lang>,
    pub theme: Option<ThemeMode>,
    pub no_mouse: bool,
    pub log_file: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge `other` over `self`: switches accumulate, `other` wins for
    /// valued options it sets.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            lang: other.lang.or(self.lang),
            theme: other.theme.or(self.theme),
            no_mouse: self.no_mouse || other.no_mouse,
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join(APP_DIR).join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join(APP_DIR)
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join(APP_DIR).join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join(APP_DIR).join("config");
        }
    }

    PathBuf::from(LOCAL_FILE)
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(LOCAL_FILE)
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let mut tokens = Vec::new();
    for line in content.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // A path value runs to the end of its line and may contain spaces.
        if line.starts_with("--log-file=") {
            tokens.push(line.to_string());
        } else {
            tokens.extend(line.split_whitespace().map(ToOwned::to_owned));
        }
    }
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# todo-tui defaults (saved with --save)".to_string());
    if let Some(lang) = flags.lang {
        lines.push(format!("--lang {}", lang.as_str()));
    }
    if let Some(theme) = flags.theme {
        let theme_str = match theme {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        };
        lines.push(format!("--theme {theme_str}"));
    }
    if flags.no_mouse {
        lines.push("--no-mouse".to_string());
    }
    if let Some(path) = &flags.log_file {
        lines.push(format!("--log-file={}", path.display()));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Extract known flags from a token list. Unknown tokens are skipped, so
/// the raw process arguments can be passed in directly.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--no-mouse" {
            flags.no_mouse = true;
        } else if token == "--lang" {
            if let Some(next) = tokens.get(i + 1) {
                flags.lang = parse_lang(next).or(flags.lang);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--lang=") {
            flags.lang = parse_lang(value).or(flags.lang);
        } else if token == "--theme" {
            if let Some(next) = tokens.get(i + 1) {
                flags.theme = parse_theme(next).or(flags.theme);
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--theme=") {
            flags.theme = parse_theme(value).or(flags.theme);
        } else if token == "--log-file" {
            if let Some(next) = tokens.get(i + 1) {
                flags.log_file = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--log-file=") {
            flags.log_file = Some(PathBuf::from(value));
        }
        i += 1;
    }
    flags
}

fn parse_lang(s: &str) -> Option<Lang> {
    match s.parse() {
        Ok(lang) => Some(lang),
        Err(err) => {
            tracing::warn!(%err, "ignoring --lang value");
            None
        }
    }
}

fn parse_theme(s: &str) -> Option<ThemeMode> {
    match s.trim().to_ascii_lowercase().as_str() {
        "dark" => Some(ThemeMode::Dark),
        "light" => Some(ThemeMode::Light),
        _ => {
            tracing::warn!(value = s, "ignoring --theme value (expected `dark` or `light`)");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn tokens(args: &[&str]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = tokens(&[
            "todo-tui",
            "--lang",
            "ja",
            "--theme=light",
            "--no-mouse",
            "--log-file",
            "todo.log",
        ]);
        let flags = parse_flag_tokens(&args);
        assert_eq!(flags.lang, Some(Lang::Ja));
        assert_eq!(flags.theme, Some(ThemeMode::Light));
        assert!(flags.no_mouse);
        assert_eq!(flags.log_file, Some(PathBuf::from("todo.log")));
    }

    #[test]
    fn test_unknown_lang_keeps_previous_value() {
        let args = tokens(&["--lang=ja", "--lang", "fr"]);
        let flags = parse_flag_tokens(&args);
        assert_eq!(flags.lang, Some(Lang::Ja));
    }

    #[test]
    fn test_unknown_theme_keeps_previous_value() {
        let args = tokens(&["--theme", "light", "--theme=blue"]);
        let flags = parse_flag_tokens(&args);
        assert_eq!(flags.theme, Some(ThemeMode::Light));

        let args = tokens(&["--theme=dark", "--theme", "blue"]);
        assert_eq!(parse_flag_tokens(&args).theme, Some(ThemeMode::Dark));
    }

    #[test]
    fn test_config_union_merges_cli_over_file_for_options() {
        let file = ConfigFlags {
            no_mouse: true,
            lang: Some(Lang::Ja),
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            lang: Some(Lang::En),
            theme: Some(ThemeMode::Light),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert!(merged.no_mouse);
        assert_eq!(merged.lang, Some(Lang::En));
        assert_eq!(merged.theme, Some(ThemeMode::Light));
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config");
        let flags = ConfigFlags {
            lang: Some(Lang::Ja),
            theme: Some(ThemeMode::Light),
            no_mouse: true,
            log_file: Some(PathBuf::from("todo.log")),
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let loaded = load_config_flags(&dir.path().join("absent")).unwrap();
        assert_eq!(loaded, ConfigFlags::default());
    }
}
