use regex::{Captures, Regex};
use std::sync::LazyLock;

static MARKETING_VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(MARKETING_VERSION = )([^;]+);").expect("hardcoded regex must compile")
});

static CURRENT_PROJECT_VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(CURRENT_PROJECT_VERSION = )(\d+);").expect("hardcoded regex must compile")
});

/// First `MARKETING_VERSION` value in project.pbxproj content
#[must_use]
pub fn extract_marketing_version(content: &str) -> Option<String> {
    MARKETING_VERSION_PATTERN
        .captures(content)
        .map(|caps| caps[2].to_string())
}

/// First `CURRENT_PROJECT_VERSION` value in project.pbxproj content
#[must_use]
pub fn extract_project_version(content: &str) -> Option<u64> {
    CURRENT_PROJECT_VERSION_PATTERN
        .captures(content)
        .and_then(|caps| caps[2].parse().ok())
}

/// Rewrite every `MARKETING_VERSION` and `CURRENT_PROJECT_VERSION` entry.
///
/// Both fields repeat once per build configuration, so all occurrences change.
#[must_use]
pub fn update_ios_content(content: &str, version: &str, build_number: u64) -> String {
    let content = MARKETING_VERSION_PATTERN.replace_all(content, |caps: &Captures| {
        format!("{}{version};", &caps[1])
    });
    CURRENT_PROJECT_VERSION_PATTERN
        .replace_all(&content, |caps: &Captures| {
            format!("{}{build_number};", &caps[1])
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PBXPROJ: &str = r#"
/* Begin XCBuildConfiguration section */
		13B07F941A680F5B00A75B9A /* Debug */ = {
			isa = XCBuildConfiguration;
			buildSettings = {
				CURRENT_PROJECT_VERSION = 5;
				INFOPLIST_FILE = MyApp/Info.plist;
				MARKETING_VERSION = 0.9.0;
				PRODUCT_NAME = MyApp;
			};
			name = Debug;
		};
		13B07F951A680F5B00A75B9A /* Release */ = {
			isa = XCBuildConfiguration;
			buildSettings = {
				CURRENT_PROJECT_VERSION = 4;
				INFOPLIST_FILE = MyApp/Info.plist;
				MARKETING_VERSION = 0.9.0;
				PRODUCT_NAME = MyApp;
			};
			name = Release;
		};
/* End XCBuildConfiguration section */
"#;

    #[test]
    fn test_extract_first_occurrence() {
        assert_eq!(extract_marketing_version(PBXPROJ), Some("0.9.0".to_string()));
        assert_eq!(extract_project_version(PBXPROJ), Some(5));
    }

    #[test]
    fn test_extract_absent_fields() {
        let content = "buildSettings = {\n\tPRODUCT_NAME = MyApp;\n};";
        assert_eq!(extract_marketing_version(content), None);
        assert_eq!(extract_project_version(content), None);
    }

    #[test]
    fn test_update_rewrites_every_configuration() {
        let updated = update_ios_content(PBXPROJ, "1.0.0", 6);

        assert_eq!(updated.matches("MARKETING_VERSION = 1.0.0;").count(), 2);
        assert_eq!(updated.matches("CURRENT_PROJECT_VERSION = 6;").count(), 2);
        assert!(!updated.contains("0.9.0"));
        assert!(updated.contains("INFOPLIST_FILE = MyApp/Info.plist;"));
    }

    #[test]
    fn test_update_preserves_other_content() {
        let updated = update_ios_content(PBXPROJ, "1.0.0", 6);
        let restored = update_ios_content(&updated, "0.9.0", 5);

        // Release carried build 4; after a full rewrite both configurations agree
        assert_eq!(
            restored,
            PBXPROJ.replace("CURRENT_PROJECT_VERSION = 4;", "CURRENT_PROJECT_VERSION = 5;")
        );
    }

    #[test]
    fn test_update_is_idempotent() {
        let once = update_ios_content(PBXPROJ, "2.1.0-beta.1", 12);
        let twice = update_ios_content(&once, "2.1.0-beta.1", 12);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_update_version_with_dollar_sign_is_literal() {
        let updated = update_ios_content("MARKETING_VERSION = 1.0.0;", "$1.0", 1);
        assert_eq!(updated, "MARKETING_VERSION = $1.0;");
    }

    #[test]
    fn test_update_without_fields_is_noop() {
        let content = "// !$*UTF8*$!\n{\n\tarchiveVersion = 1;\n}\n";
        assert_eq!(update_ios_content(content, "1.0.0", 1), content);
    }
}
