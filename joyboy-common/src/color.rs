//! Semantic color tokens and their concrete values

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Semantic color used by components instead of raw CSS colors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorToken {
    #[default]
    Text,
    TextSecondary,
    Primary,
    Secondary,
    Danger,
    Success,
    Warning,
    Background,
    Surface,
    Divider,
}

impl ColorToken {
    pub const ALL: [ColorToken; 10] = [
        Self::Text,
        Self::TextSecondary,
        Self::Primary,
        Self::Secondary,
        Self::Danger,
        Self::Success,
        Self::Warning,
        Self::Background,
        Self::Surface,
        Self::Divider,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::TextSecondary => "text-secondary",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Danger => "danger",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Background => "background",
            Self::Surface => "surface",
            Self::Divider => "divider",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown color token: {0}")]
pub struct UnknownColorToken(pub String);

impl FromStr for ColorToken {
    type Err = UnknownColorToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|token| token.as_str() == s)
            .ok_or_else(|| UnknownColorToken(s.to_string()))
    }
}

/// Built-in palette selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("Unknown theme: {other}")),
        }
    }
}

/// Concrete CSS color for every token.
///
/// Keys missing from a YAML palette take the light palette's values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Palette {
    pub text: String,
    pub text_secondary: String,
    pub primary: String,
    pub secondary: String,
    pub danger: String,
    pub success: String,
    pub warning: String,
    pub background: String,
    pub surface: String,
    pub divider: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

impl Palette {
    pub fn light() -> Self {
        Self {
            text: "#14142c".into(),
            text_secondary: "#6b6b80".into(),
            primary: "#ec6a5e".into(),
            secondary: "#0e0e52".into(),
            danger: "#e5484d".into(),
            success: "#30a46c".into(),
            warning: "#f5a623".into(),
            background: "#ffffff".into(),
            surface: "#f7f7f9".into(),
            divider: "#e4e4eb".into(),
        }
    }

    pub fn dark() -> Self {
        Self {
            text: "#f4f4f8".into(),
            text_secondary: "#a0a0b4".into(),
            primary: "#ff7f73".into(),
            secondary: "#8f8fff".into(),
            danger: "#ff6369".into(),
            success: "#4cc38a".into(),
            warning: "#ffb224".into(),
            background: "#0f1116".into(),
            surface: "#1b1e26".into(),
            divider: "#2c303b".into(),
        }
    }

    pub fn for_theme(theme: ThemeMode) -> Self {
        match theme {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Resolve a semantic token to a concrete color
    pub fn resolve(&self, token: ColorToken) -> &str {
        match token {
            ColorToken::Text => &self.text,
            ColorToken::TextSecondary => &self.text_secondary,
            ColorToken::Primary => &self.primary,
            ColorToken::Secondary => &self.secondary,
            ColorToken::Danger => &self.danger,
            ColorToken::Success => &self.success,
            ColorToken::Warning => &self.warning,
            ColorToken::Background => &self.background,
            ColorToken::Surface => &self.surface,
            ColorToken::Divider => &self.divider,
        }
    }
}
