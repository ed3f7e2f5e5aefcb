//! User-agent platform classification
//!
//! Best-effort three-way split used by the redirect page. Detection can be
//! wrong (desktop-mode browsers, iPadOS reporting as macOS), which is why the
//! view page always offers both manual buttons.

use woothee::parser::Parser;

const IOS_OS_NAMES: &[&str] = &["iPhone", "iPad", "iPod", "iOS"];
const IOS_MARKERS: &[&str] = &["iphone", "ipad", "ipod"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// iPhone / iPad / iPod
    Ios,
    Android,
    /// Desktop or unknown
    Other,
}

impl Platform {
    /// Classify a raw `User-Agent` header value.
    ///
    /// woothee is consulted first; when it cannot name the OS the raw string
    /// is scanned for the usual device markers.
    pub fn detect(user_agent: &str) -> Self {
        if let Some(result) = Parser::new().parse(user_agent) {
            if IOS_OS_NAMES.contains(&result.os) {
                return Platform::Ios;
            }
            if result.os == "Android" {
                return Platform::Android;
            }
        }

        Self::detect_by_markers(user_agent)
    }

    fn detect_by_markers(user_agent: &str) -> Self {
        let ua = user_agent.to_lowercase();
        if IOS_MARKERS.iter().any(|m| ua.contains(m)) {
            Platform::Ios
        } else if ua.contains("android") {
            Platform::Android
        } else {
            Platform::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Other => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
    const IPAD_UA: &str = "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.6 Mobile/15E148 Safari/604.1";
    const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36";
    const DESKTOP_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

    #[test]
    fn test_detects_ios_family() {
        assert_eq!(Platform::detect(IPHONE_UA), Platform::Ios);
        assert_eq!(Platform::detect(IPAD_UA), Platform::Ios);
    }

    #[test]
    fn test_detects_android() {
        assert_eq!(Platform::detect(ANDROID_UA), Platform::Android);
    }

    #[test]
    fn test_desktop_and_empty_are_other() {
        assert_eq!(Platform::detect(DESKTOP_UA), Platform::Other);
        assert_eq!(Platform::detect(""), Platform::Other);
    }

    #[test]
    fn test_marker_fallback_for_unparseable_agents() {
        assert_eq!(Platform::detect("SomePlayer/1.0 (iPod touch)"), Platform::Ios);
        assert_eq!(Platform::detect("custom-client android-tv"), Platform::Android);
    }
}
