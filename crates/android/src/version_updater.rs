use regex::{Captures, Regex};
use std::sync::LazyLock;

// Groovy `versionName "1.0"` and Kotlin DSL `versionName = "1.0"`
static VERSION_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(versionName(?:\s*=\s*|\s+))"([^"]+)""#).expect("hardcoded regex must compile")
});

// Groovy `versionCode 3` and Kotlin DSL `versionCode = 3`
static VERSION_CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(versionCode(?:\s*=\s*|\s+))(\d+)").expect("hardcoded regex must compile")
});

/// First `versionName` value in build.gradle(.kts) content
#[must_use]
pub fn extract_version_name(content: &str) -> Option<String> {
    VERSION_NAME_PATTERN
        .captures(content)
        .map(|caps| caps[2].to_string())
}

/// First `versionCode` value in build.gradle(.kts) content
#[must_use]
pub fn extract_version_code(content: &str) -> Option<u64> {
    VERSION_CODE_PATTERN
        .captures(content)
        .and_then(|caps| caps[2].parse().ok())
}

/// Rewrite `versionName` and `versionCode`, keeping the separator already in the file
#[must_use]
pub fn update_gradle_content(content: &str, version: &str, build_number: u64) -> String {
    let content = VERSION_NAME_PATTERN.replace_all(content, |caps: &Captures| {
        format!(r#"{}"{version}""#, &caps[1])
    });
    VERSION_CODE_PATTERN
        .replace_all(&content, |caps: &Captures| format!("{}{build_number}", &caps[1]))
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const GROOVY: &str = r#"
android {
    namespace "com.myapp"
    defaultConfig {
        applicationId "com.myapp"
        minSdkVersion rootProject.ext.minSdkVersion
        versionCode 3
        versionName "0.9.0"
    }
}
"#;

    const KOTLIN: &str = r#"
android {
    defaultConfig {
        applicationId = "com.myapp"
        versionCode = 3
        versionName = "0.9.0"
    }
}
"#;

    #[rstest]
    #[case(GROOVY)]
    #[case(KOTLIN)]
    fn test_extract_fields(#[case] content: &str) {
        assert_eq!(extract_version_name(content), Some("0.9.0".to_string()));
        assert_eq!(extract_version_code(content), Some(3));
    }

    #[test]
    fn test_extract_first_occurrence() {
        let content = "versionCode 7\nversionName \"2.0\"\nversionCode 9\nversionName \"3.0\"\n";
        assert_eq!(extract_version_code(content), Some(7));
        assert_eq!(extract_version_name(content), Some("2.0".to_string()));
    }

    #[test]
    fn test_extract_absent_fields() {
        let content = "android {\n    compileSdkVersion 34\n}\n";
        assert_eq!(extract_version_name(content), None);
        assert_eq!(extract_version_code(content), None);
    }

    #[test]
    fn test_update_groovy() {
        let updated = update_gradle_content(GROOVY, "1.0.0", 6);
        assert!(updated.contains("versionCode 6\n"));
        assert!(updated.contains(r#"versionName "1.0.0""#));
        assert!(updated.contains(r#"applicationId "com.myapp""#));
        assert!(updated.contains("minSdkVersion rootProject.ext.minSdkVersion"));
    }

    #[test]
    fn test_update_kotlin_keeps_assignment() {
        let updated = update_gradle_content(KOTLIN, "1.0.0", 6);
        assert!(updated.contains("versionCode = 6\n"));
        assert!(updated.contains(r#"versionName = "1.0.0""#));
    }

    #[test]
    fn test_update_keeps_spacing() {
        let updated = update_gradle_content("versionCode    12\nversionName\t\"1.0\"", "1.1.0", 13);
        assert_eq!(updated, "versionCode    13\nversionName\t\"1.1.0\"");
    }

    #[test]
    fn test_update_is_idempotent() {
        let once = update_gradle_content(GROOVY, "1.2.0-rc.1", 40);
        assert_eq!(update_gradle_content(&once, "1.2.0-rc.1", 40), once);
    }

    #[test]
    fn test_update_without_fields_is_noop() {
        let content = "apply plugin: \"com.android.application\"\n";
        assert_eq!(update_gradle_content(content, "1.0.0", 1), content);
    }
}
