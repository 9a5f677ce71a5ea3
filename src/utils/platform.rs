pub const PLAY_STORE_URL: &str = "https://play.google.com/store";
pub const APP_STORE_URL: &str = "https://apps.apple.com/";
pub const MICROSOFT_STORE_URL: &str = "https://apps.microsoft.com/";
pub const MAC_APP_STORE_URL: &str = "https://apps.apple.com/us/genre/mac/id39";

/// Pick the builder-app store for a `User-Agent` header.
///
/// Checked in order: Android, iOS devices, Windows, macOS. Anything else
/// (including a missing header) gets the Play Store.
pub fn store_url_for_user_agent(user_agent: &str) -> &'static str {
    if user_agent.to_ascii_lowercase().contains("android") {
        PLAY_STORE_URL
    } else if ["iPad", "iPhone", "iPod"].iter().any(|d| user_agent.contains(d)) {
        APP_STORE_URL
    } else if user_agent.contains("Windows NT") {
        MICROSOFT_STORE_URL
    } else if user_agent.contains("Macintosh") {
        MAC_APP_STORE_URL
    } else {
        PLAY_STORE_URL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_each_platform() {
        let cases = [
            ("Mozilla/5.0 (Linux; Android 14; Pixel 8)", PLAY_STORE_URL),
            ("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)", APP_STORE_URL),
            ("Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X)", APP_STORE_URL),
            ("Mozilla/5.0 (Windows NT 10.0; Win64; x64)", MICROSOFT_STORE_URL),
            ("Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0)", MAC_APP_STORE_URL),
            ("Mozilla/5.0 (X11; Linux x86_64)", PLAY_STORE_URL),
            ("", PLAY_STORE_URL),
        ];
        for (ua, expected) in cases {
            assert_eq!(store_url_for_user_agent(ua), expected, "user agent: {ua}");
        }
    }

    #[test]
    fn android_match_ignores_case() {
        assert_eq!(store_url_for_user_agent("ANDROID tablet"), PLAY_STORE_URL);
    }

    #[test]
    fn ipad_with_mac_token_goes_to_ios_store() {
        // iOS tokens are checked before Macintosh.
        assert_eq!(store_url_for_user_agent("Mozilla/5.0 (iPad; Macintosh)"), APP_STORE_URL);
    }
}
