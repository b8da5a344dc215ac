use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod branding {
    pub mod info;
    pub mod provider;
    pub mod store;
}
mod deeplink {
    pub mod opener;
    pub mod platform;
    pub mod resolver;
}
mod components {
    pub mod footer;
    pub mod hero;
    pub mod nav;
}
mod pages {
    pub mod landing;
    pub mod services;
}

use branding::provider::BrandingProvider;
use components::nav::Nav;
use pages::{
    landing::Landing,
    services::{NotFound, ServiceDetail, Services},
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/services/:slug")]
    Service { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Service { slug } => {
            info!("Rendering Service page for {}", slug);
            html! { <ServiceDetail slug={slug} /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrandingProvider>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </BrandingProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
