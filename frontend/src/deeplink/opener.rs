use log::{info, warn};
use thiserror::Error;
use web_sys::Window;

use crate::deeplink::platform::PlatformHint;
use crate::deeplink::resolver::{self, DeepLink, DeepLinkRequest, LinkKind};

const NEW_CONTEXT_TARGET: &str = "_blank";
const NEW_CONTEXT_FEATURES: &str = "noopener,noreferrer";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum NavigationError {
    #[error("navigation rejected: {0}")]
    Rejected(String),
}

/// Where a messaging link ended up being opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    NewContext,
    SameContext,
    NotOpened,
}

impl OpenOutcome {
    pub fn opened(self) -> bool {
        !matches!(self, OpenOutcome::NotOpened)
    }
}

pub trait NavigationSurface {
    /// `Ok(false)` means the runtime refused to hand back a new context (popup blocked).
    fn open_new_context(&self, url: &str) -> Result<bool, NavigationError>;
    fn navigate_current(&self, url: &str) -> Result<(), NavigationError>;
}

pub struct BrowserSurface {
    window: Window,
}

impl BrowserSurface {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    pub fn current() -> Option<Self> {
        web_sys::window().map(Self::new)
    }
}

impl NavigationSurface for BrowserSurface {
    fn open_new_context(&self, url: &str) -> Result<bool, NavigationError> {
        self.window
            .open_with_url_and_target_and_features(url, NEW_CONTEXT_TARGET, NEW_CONTEXT_FEATURES)
            .map(|popup| popup.is_some())
            .map_err(|e| NavigationError::Rejected(format!("{:?}", e)))
    }

    fn navigate_current(&self, url: &str) -> Result<(), NavigationError> {
        self.window
            .location()
            .set_href(url)
            .map_err(|e| NavigationError::Rejected(format!("{:?}", e)))
    }
}

fn attempt(surface: &dyn NavigationSurface, link: &DeepLink) -> Result<OpenOutcome, NavigationError> {
    if surface.open_new_context(&link.url)? {
        return Ok(OpenOutcome::NewContext);
    }
    info!("New browsing context blocked, navigating in place to {}", link.url);
    surface.navigate_current(&link.url)?;
    Ok(OpenOutcome::SameContext)
}

/// Best-effort open of the messaging link.
///
/// Strategies run in order: the resolved link, then (for app-scheme links) the
/// web link. Each strategy tries a new browsing context and falls back to
/// navigating the current one when blocked. If every strategy throws, an
/// app-scheme request still ends with an in-place navigation to the web link.
pub fn open_messaging_app(
    surface: Option<&dyn NavigationSurface>,
    request: &DeepLinkRequest,
    default_handle: &str,
    hint: &dyn PlatformHint,
) -> OpenOutcome {
    let Some(surface) = surface else {
        return OpenOutcome::NotOpened;
    };
    let Some(primary) = resolver::resolve(request, default_handle, hint) else {
        return OpenOutcome::NotOpened;
    };

    let mut strategies = vec![primary.clone()];
    let web_fallback = if primary.kind == LinkKind::App {
        let web = DeepLinkRequest { prefer_app: Some(false), ..request.clone() };
        resolver::resolve(&web, default_handle, hint)
    } else {
        None
    };
    strategies.extend(web_fallback.clone());

    for link in &strategies {
        match attempt(surface, link) {
            Ok(outcome) => return outcome,
            Err(e) => warn!("Opening {} failed: {}", link.url, e),
        }
    }

    match web_fallback {
        Some(web) => match surface.navigate_current(&web.url) {
            Ok(()) => OpenOutcome::SameContext,
            Err(e) => {
                warn!("In-place navigation to {} failed: {}", web.url, e);
                OpenOutcome::NotOpened
            }
        },
        None => OpenOutcome::NotOpened,
    }
}
