use yew::prelude::*;
use yew_router::prelude::*;

use crate::branding::provider::use_branding;
use crate::deeplink::resolver::DeepLinkRequest;
use crate::Route;

#[function_component(Nav)]
pub fn nav() -> Html {
    let branding = use_branding();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let (name, logo) = branding
        .as_ref()
        .map(|b| {
            let info = b.brand_info();
            (info.name, info.logo_url)
        })
        .unwrap_or_default();

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    if !logo.is_empty() {
                        <img src={logo} alt={name.clone()} class="nav-logo-img" />
                    }
                    {name}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Services} classes="nav-link">
                            {"Services"}
                        </Link<Route>>
                    </div>
                    {
                        if let Some(branding) = &branding {
                            html! {
                                <button
                                    class="nav-contact-button"
                                    onclick={branding.on_click_open_messaging_app(DeepLinkRequest::default())}
                                >
                                    {"Contact"}
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </nav>
    }
}
