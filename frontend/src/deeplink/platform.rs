use web_sys::window;

/// Platform identifiers that mark a user agent as a mobile device.
pub const MOBILE_SIGNATURES: &[&str] = &[
    "android",
    "iphone",
    "ipad",
    "ipod",
    "iemobile",
    "opera mini",
];

pub trait PlatformHint {
    fn is_mobile(&self) -> bool;
}

pub fn matches_mobile_signature(user_agent: &str) -> bool {
    let ua = user_agent.to_lowercase();
    MOBILE_SIGNATURES.iter().any(|sig| ua.contains(sig))
}

/// Guesses the device type from a user-agent string. No user agent means desktop.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserAgentHint {
    user_agent: Option<String>,
}

impl UserAgentHint {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self { user_agent: Some(user_agent.into()) }
    }

    pub fn from_window() -> Self {
        let user_agent = window().and_then(|w| w.navigator().user_agent().ok());
        Self { user_agent }
    }
}

impl PlatformHint for UserAgentHint {
    fn is_mobile(&self) -> bool {
        self.user_agent
            .as_deref()
            .map(matches_mobile_signature)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36", true)]
    #[case("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)", true)]
    #[case("Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X)", true)]
    #[case("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)", true)]
    #[case("Mozilla/5.0 (compatible; MSIE 9.0; Windows Phone OS 7.5; IEMobile/9.0)", true)]
    #[case("ANDROID", true)]
    #[case("Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0", false)]
    #[case("Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0)", false)]
    #[case("", false)]
    fn user_agent_signatures(#[case] ua: &str, #[case] mobile: bool) {
        assert_eq!(UserAgentHint::new(ua).is_mobile(), mobile);
    }

    #[test]
    fn no_environment_is_not_mobile() {
        assert!(!UserAgentHint::default().is_mobile());
    }
}
