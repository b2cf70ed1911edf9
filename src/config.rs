use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// Which panes are on screen.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Editor and preview side by side.
    #[default]
    Split,
    /// Editor only.
    Edit,
    /// Preview only.
    Preview,
}

impl ViewMode {
    pub const ALL: [Self; 3] = [Self::Split, Self::Edit, Self::Preview];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Split => "split",
            Self::Edit => "edit",
            Self::Preview => "preview",
        }
    }

    /// The mode after this one, wrapping around.
    pub const fn next(self) -> Self {
        match self {
            Self::Split => Self::Edit,
            Self::Edit => Self::Preview,
            Self::Preview => Self::Split,
        }
    }

    pub const fn shows_editor(self) -> bool {
        matches!(self, Self::Split | Self::Edit)
    }

    pub const fn shows_preview(self) -> bool {
        matches!(self, Self::Split | Self::Preview)
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flags that may be saved as defaults.
///
/// The palette override is deliberately absent: it lasts for one session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub view: Option<ViewMode>,
    pub wrap_width: Option<u16>,
    pub log_file: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge, with `other` taking precedence.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            view: other.view.or(self.view),
            wrap_width: other.wrap_width.or(self.wrap_width),
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("broadsheet").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("broadsheet")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("broadsheet").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("broadsheet")
                .join("config");
        }
    }

    PathBuf::from(".broadsheetrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".broadsheetrc")
}

/// Load flags from a config file. A missing file yields no flags.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

/// Write flags as a config file, creating parent directories.
///
/// The file is read back as whitespace-separated tokens, so a log file path
/// containing whitespace is refused.
///
/// # Errors
///
/// Returns an error if the log file path contains whitespace or the
/// directory or file cannot be written.
pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    if let Some(log_file) = &flags.log_file
        && log_file.to_string_lossy().chars().any(char::is_whitespace)
    {
        bail!(
            "Cannot save --log-file {}: paths with spaces are not supported in config files",
            log_file.display()
        );
    }
    let mut lines = vec!["# broadsheet defaults (saved with --save)".to_string()];
    if let Some(view) = flags.view {
        lines.push(format!("--view {view}"));
    }
    if let Some(width) = flags.wrap_width {
        lines.push(format!("--wrap-width {width}"));
    }
    if let Some(path) = &flags.log_file {
        lines.push(format!("--log-file {}", path.display()));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

/// Remove a config file if present.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be removed.
pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Extract persistable flags from raw argument tokens.
///
/// Unknown tokens and unparseable values are ignored.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        let (name, inline_value) = match token.split_once('=') {
            Some((name, value)) if name.starts_with("--") => (name, Some(value)),
            _ => (token, None),
        };
        if matches!(name, "--view" | "--wrap-width" | "--log-file") {
            let value = if let Some(value) = inline_value {
                Some(value)
            } else {
                i += 1;
                tokens.get(i).map(String::as_str)
            };
            if let Some(value) = value {
                apply_flag(&mut flags, name, value);
            }
        }
        i += 1;
    }
    flags
}

fn apply_flag(flags: &mut ConfigFlags, name: &str, value: &str) {
    match name {
        "--view" => {
            if let Some(view) = parse_view(value) {
                flags.view = Some(view);
            } else {
                tracing::warn!(value, "ignoring unknown view mode");
            }
        }
        "--wrap-width" => match value.parse::<u16>() {
            Ok(width) if width > 0 => flags.wrap_width = Some(width),
            _ => tracing::warn!(value, "ignoring invalid wrap width"),
        },
        "--log-file" => flags.log_file = Some(PathBuf::from(value)),
        _ => {}
    }
}

fn parse_view(s: &str) -> Option<ViewMode> {
    ViewMode::ALL.into_iter().find(|mode| mode.as_str() == s)
}
