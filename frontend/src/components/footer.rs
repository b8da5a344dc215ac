use yew::prelude::*;

use crate::branding::provider::use_branding;
use crate::deeplink::resolver::DeepLinkRequest;

/// `tel:` link for a dialable number, `None` when no number is configured.
pub fn tel_href(number: &str) -> Option<String> {
    let dialable: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    if dialable.is_empty() {
        None
    } else {
        Some(format!("tel:{}", dialable))
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let branding = use_branding();
    let Some(branding) = branding else {
        return html! {};
    };
    let info = branding.brand_info();
    let messaging_url = branding.resolve_deep_link(&DeepLinkRequest::default().prefer_app(false));

    html! {
        <footer class="mk-footer">
            <div class="mk-footer-brand">
                <img src={info.logo_url.clone()} alt={info.name.clone()} class="mk-footer-logo" />
                <strong>{info.name.clone()}</strong>
            </div>
            <address>
                <p>{info.address.clone()}</p>
                <p><a href={format!("mailto:{}", info.email)}>{info.email.clone()}</a></p>
                {
                    match tel_href(&info.phone_call_format) {
                        Some(href) => html! { <p><a href={href}>{info.phone.clone()}</a></p> },
                        None => html! {},
                    }
                }
                {
                    if messaging_url.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <p><a href={messaging_url} target="_blank" rel="noopener noreferrer">
                                {format!("@{}", info.messaging_handle.trim_start_matches('@'))}
                            </a></p>
                        }
                    }
                }
            </address>
            <small>{format!("{} · {}", info.name, info.address_city)}</small>
        </footer>
    }
}
