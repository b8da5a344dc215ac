use crate::deeplink::platform::PlatformHint;

pub const APP_SCHEME_PREFIX: &str = "tg://resolve?domain=";
pub const WEB_PREFIX: &str = "https://t.me/";

/// Per-call overrides. `None` fields fall back to the configured handle and the platform hint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeepLinkRequest {
    pub handle: Option<String>,
    pub prefer_app: Option<bool>,
}

impl DeepLinkRequest {
    pub fn with_handle(handle: impl Into<String>) -> Self {
        Self { handle: Some(handle.into()), prefer_app: None }
    }

    pub fn prefer_app(mut self, prefer_app: bool) -> Self {
        self.prefer_app = Some(prefer_app);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    App,
    Web,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeepLink {
    pub kind: LinkKind,
    pub url: String,
}

pub fn normalize_handle(raw: &str) -> String {
    raw.strip_prefix('@').unwrap_or(raw).trim().to_string()
}

// Browsers' encodeURIComponent keeps these as-is.
const COMPONENT_SAFE: &[(&str, &str)] = &[
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

pub fn encode_component(raw: &str) -> String {
    COMPONENT_SAFE
        .iter()
        .fold(urlencoding::encode(raw).into_owned(), |acc, (escaped, plain)| {
            acc.replace(escaped, plain)
        })
}

pub fn link_for(handle: &str, kind: LinkKind) -> DeepLink {
    let encoded = encode_component(handle);
    let url = match kind {
        LinkKind::App => format!("{}{}", APP_SCHEME_PREFIX, encoded),
        LinkKind::Web => format!("{}{}", WEB_PREFIX, encoded),
    };
    DeepLink { kind, url }
}

/// Returns `None` when neither the request nor the default carries a usable handle.
pub fn resolve(
    request: &DeepLinkRequest,
    default_handle: &str,
    hint: &dyn PlatformHint,
) -> Option<DeepLink> {
    let raw = request
        .handle
        .as_deref()
        .filter(|h| !h.is_empty())
        .unwrap_or(default_handle);
    let handle = normalize_handle(raw);
    if handle.is_empty() {
        return None;
    }

    let use_app = request.prefer_app.unwrap_or_else(|| hint.is_mobile());
    let kind = if use_app { LinkKind::App } else { LinkKind::Web };
    Some(link_for(&handle, kind))
}

/// String form of [`resolve`]: an empty string means no link is available.
pub fn resolve_deep_link(
    request: &DeepLinkRequest,
    default_handle: &str,
    hint: &dyn PlatformHint,
) -> String {
    resolve(request, default_handle, hint)
        .map(|link| link.url)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deeplink::platform::UserAgentHint;
    use proptest::prelude::*;
    use rstest::rstest;

    const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)";
    const DESKTOP: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

    fn desktop() -> UserAgentHint {
        UserAgentHint::new(DESKTOP)
    }

    #[rstest]
    #[case(DeepLinkRequest::with_handle("abc").prefer_app(true), "tg://resolve?domain=abc")]
    #[case(DeepLinkRequest::with_handle("abc").prefer_app(false), "https://t.me/abc")]
    #[case(DeepLinkRequest::with_handle("a b").prefer_app(false), "https://t.me/a%20b")]
    #[case(DeepLinkRequest::with_handle("a b").prefer_app(true), "tg://resolve?domain=a%20b")]
    #[case(DeepLinkRequest::with_handle("@abc").prefer_app(false), "https://t.me/abc")]
    #[case(DeepLinkRequest::with_handle("a!b(c)*'~").prefer_app(false), "https://t.me/a!b(c)*'~")]
    #[case(DeepLinkRequest::with_handle("a/b?c&d").prefer_app(true), "tg://resolve?domain=a%2Fb%3Fc%26d")]
    #[case(DeepLinkRequest::with_handle("  abc  ").prefer_app(false), "https://t.me/abc")]
    fn explicit_preference(#[case] request: DeepLinkRequest, #[case] expected: &str) {
        assert_eq!(resolve_deep_link(&request, "fallback", &desktop()), expected);
    }

    #[test]
    fn empty_handle_fails_closed() {
        let request = DeepLinkRequest::with_handle("").prefer_app(true);
        assert_eq!(resolve_deep_link(&request, "", &desktop()), "");
        assert_eq!(resolve(&request, "", &desktop()), None);
    }

    #[test]
    fn bare_at_sign_fails_closed() {
        let request = DeepLinkRequest::with_handle("@ ");
        assert_eq!(resolve_deep_link(&request, "fallback", &desktop()), "");
    }

    #[test]
    fn missing_or_empty_override_uses_default_handle() {
        let hint = desktop();
        let request = DeepLinkRequest::default();
        assert_eq!(resolve_deep_link(&request, "@darioharmon", &hint), "https://t.me/darioharmon");
        let request = DeepLinkRequest::with_handle("");
        assert_eq!(resolve_deep_link(&request, "darioharmon", &hint), "https://t.me/darioharmon");
    }

    #[test]
    fn literal_percent_sequences_stay_escaped() {
        assert_eq!(encode_component("%21"), "%2521");
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn only_one_leading_at_is_stripped() {
        assert_eq!(normalize_handle("@@abc"), "@abc");
        assert_eq!(normalize_handle("abc@"), "abc@");
    }

    #[test]
    fn unspecified_preference_follows_platform_hint() {
        let request = DeepLinkRequest::with_handle("abc");
        let mobile = resolve(&request, "", &UserAgentHint::new(IPHONE)).unwrap();
        assert_eq!(mobile.kind, LinkKind::App);
        let web = resolve(&request, "", &desktop()).unwrap();
        assert_eq!(web.kind, LinkKind::Web);
        let none = resolve(&request, "", &UserAgentHint::default()).unwrap();
        assert_eq!(none.kind, LinkKind::Web);
    }

    #[test]
    fn explicit_preference_beats_platform_hint() {
        let request = DeepLinkRequest::with_handle("abc").prefer_app(false);
        let link = resolve(&request, "", &UserAgentHint::new(IPHONE)).unwrap();
        assert_eq!(link.url, "https://t.me/abc");
    }

    proptest! {
        #[test]
        fn leading_at_does_not_change_the_link(h in "[a-zA-Z0-9_ ]{0,24}", app in any::<bool>()) {
            let hint = desktop();
            let with_at = DeepLinkRequest::with_handle(format!("@{}", h)).prefer_app(app);
            let without = DeepLinkRequest::with_handle(h.clone()).prefer_app(app);
            prop_assert_eq!(
                resolve_deep_link(&with_at, "", &hint),
                resolve_deep_link(&without, "", &hint)
            );
        }
    }
}
