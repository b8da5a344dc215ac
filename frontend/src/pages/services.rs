use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ServiceLink {
    pub label: &'static str,
    pub glyph: &'static str,
    pub slug: &'static str,
    pub desc: &'static str,
}

pub const SERVICES: &[ServiceLink] = &[
    ServiceLink {
        label: "SMO",
        glyph: "⤴",
        slug: "smo",
        desc: "Social posts, engagement & boosting",
    },
    ServiceLink {
        label: "SEO",
        glyph: "⌕",
        slug: "seo",
        desc: "White-hat technical + content",
    },
    ServiceLink {
        label: "Google Ads (PPC)",
        glyph: "📣",
        slug: "google-ads-ppc",
        desc: "Tech Industry Covered",
    },
    ServiceLink {
        label: "Website / Web Dev",
        glyph: "⌨",
        slug: "website-development",
        desc: "Fast, conversion-first builds",
    },
    ServiceLink {
        label: "Ethical Hacking",
        glyph: "🕵",
        slug: "ethical-hacking",
        desc: "Pen-testing, vulnerability assessment & cyber defense",
    },
];

pub fn find_service(slug: &str) -> Option<&'static ServiceLink> {
    SERVICES.iter().find(|s| s.slug == slug)
}

impl ServiceLink {
    pub fn route(&self) -> Route {
        Route::Service { slug: self.slug.to_string() }
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section class="mk-page">
            <h1>{"Our Services"}</h1>
            <ul class="mk-service-list">
                { for SERVICES.iter().map(|s| html! {
                    <li key={s.slug}>
                        <Link<Route> to={s.route()} classes="mk-service-link">
                            <strong>{s.label}</strong>
                            <small>{s.desc}</small>
                        </Link<Route>>
                    </li>
                }) }
            </ul>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub slug: String,
}

#[function_component(ServiceDetail)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    match find_service(&props.slug) {
        Some(service) => html! {
            <section class="mk-page">
                <span class="mk-ring">{service.glyph}</span>
                <h1>{service.label}</h1>
                <p>{service.desc}</p>
                <Link<Route> to={Route::Services} classes="mk-btn mk-btn--ghost">
                    {"All services"}
                </Link<Route>>
            </section>
        },
        None => html! { <NotFound /> },
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="mk-page">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home} classes="mk-btn mk-btn--primary">{"Back home"}</Link<Route>>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_unique_and_resolvable() {
        for service in SERVICES {
            assert_eq!(find_service(service.slug), Some(service));
        }
        assert_eq!(find_service("carpentry"), None);
    }

    #[test]
    fn services_route_under_services_path() {
        let route = SERVICES[2].route();
        assert_eq!(route.to_path(), "/services/google-ads-ppc");
    }
}
