//! Names of the icons menu items can show

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    Check,
    ChevronRight,
    Copy,
    Ellipsis,
    ExternalLink,
    Flag,
    Info,
    Lock,
    Pencil,
    Plus,
    Refresh,
    Share,
    Trash,
    X,
}

impl IconName {
    pub const ALL: [IconName; 14] = [
        Self::Check,
        Self::ChevronRight,
        Self::Copy,
        Self::Ellipsis,
        Self::ExternalLink,
        Self::Flag,
        Self::Info,
        Self::Lock,
        Self::Pencil,
        Self::Plus,
        Self::Refresh,
        Self::Share,
        Self::Trash,
        Self::X,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Check => "check",
            Self::ChevronRight => "chevron-right",
            Self::Copy => "copy",
            Self::Ellipsis => "ellipsis",
            Self::ExternalLink => "external-link",
            Self::Flag => "flag",
            Self::Info => "info",
            Self::Lock => "lock",
            Self::Pencil => "pencil",
            Self::Plus => "plus",
            Self::Refresh => "refresh",
            Self::Share => "share",
            Self::Trash => "trash",
            Self::X => "x",
        }
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown icon: {0}")]
pub struct UnknownIcon(pub String);

impl FromStr for IconName {
    type Err = UnknownIcon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| UnknownIcon(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_roundtrip() {
        for icon in IconName::ALL {
            assert_eq!(icon.as_str().parse::<IconName>(), Ok(icon));
        }
    }

    #[test]
    fn test_serde_matches_as_str() {
        for icon in IconName::ALL {
            let yaml = serde_yaml::to_string(&icon).unwrap();
            assert_eq!(yaml.trim(), icon.as_str());
        }
    }

    #[test]
    fn test_unknown_icon() {
        assert_eq!(
            "rocket".parse::<IconName>(),
            Err(UnknownIcon("rocket".to_string()))
        );
    }
}
