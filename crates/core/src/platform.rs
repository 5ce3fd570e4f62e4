use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Mobile platform whose project file carries a version and a build number.
///
/// Declaration order is the canonical processing order: iOS first, then Android.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    pub const ALL: [Self; 2] = [Self::Ios, Self::Android];

    /// Plain name used in messages and error prefixes
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ios => "iOS",
            Self::Android => "Android",
        }
    }

    /// Identifier used in configuration files and serialized results
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Ios => self.label().blue().bold(),
                Self::Android => self.label().green().bold(),
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Platform::Ios, "iOS")]
    #[case(Platform::Android, "Android")]
    fn test_platform_display(#[case] platform: Platform, #[case] expected: &str) {
        let display = format!("{}", platform);
        assert!(display.contains(expected));
        assert_eq!(platform.label(), expected);
    }

    #[test]
    fn test_platform_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Platform::Ios).unwrap(), r#""ios""#);
        assert_eq!(
            serde_json::from_str::<Platform>(r#""android""#).unwrap(),
            Platform::Android
        );
    }

    #[test]
    fn test_platform_order() {
        assert!(Platform::Ios < Platform::Android);
        assert_eq!(Platform::ALL, [Platform::Ios, Platform::Android]);
    }
}
