use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::branding::provider::use_branding;
use crate::deeplink::resolver::DeepLinkRequest;
use crate::pages::services::SERVICES;
use crate::Route;

pub const DEFAULT_HERO_IMG: &str =
    "https://res.cloudinary.com/duv3inafo/image/upload/v1756629000/photo-1551836022-d5d88e9218df_tdl2r7.jpg";

const FALLBACK_BRAND: &str = "Your Brand";
const REVEAL_AFTER_MS: u32 = 50;
const STAGGER_START_S: f64 = 0.05;
const STAGGER_STEP_S: f64 = 0.12;
const FADE_UP_DURATION_S: f64 = 0.55;

pub fn stagger_delay(index: usize) -> f64 {
    STAGGER_START_S + STAGGER_STEP_S * index as f64
}

/// Inline style for the `index`-th child of a staggered fade-up group.
pub fn fade_up_style(index: usize) -> String {
    format!(
        "transition: opacity {d}s cubic-bezier(0.25, 0.8, 0.25, 1) {delay:.2}s, transform {d}s cubic-bezier(0.25, 0.8, 0.25, 1) {delay:.2}s;",
        d = FADE_UP_DURATION_S,
        delay = stagger_delay(index),
    )
}

fn float_style(delay: f64) -> String {
    format!("transition: opacity 0.6s ease {delay:.2}s, transform 0.6s ease {delay:.2}s;", delay = delay)
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let branding = use_branding();
    let navigator = use_navigator();
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(REVEAL_AFTER_MS, move || revealed.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    let info = branding.as_ref().map(|b| b.brand_info());
    let brand = info
        .as_ref()
        .map(|i| i.name.clone())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| FALLBACK_BRAND.to_string());
    let hero_image = info
        .as_ref()
        .and_then(|i| i.hero_image.clone())
        .unwrap_or_else(|| DEFAULT_HERO_IMG.to_string());

    let on_contact = match &branding {
        Some(b) => b.on_click_open_messaging_app(DeepLinkRequest::default()),
        None => Callback::from(|e: MouseEvent| e.prevent_default()),
    };

    let go_to = |route: Route| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&route);
            }
        })
    };

    let group_class = classes!("mk-reveal-group", (*revealed).then(|| "visible"));

    html! {
        <section class="mk-hero mk-hero--enhanced" aria-label="Hero">
            <style>{HERO_CSS}</style>
            <div class="mk-bg mk-bg--orbA" />
            <div class="mk-bg mk-bg--orbB" />
            <div class="mk-grid-dots" aria-hidden="true" />

            <div class={classes!("mk-grid", group_class.clone())}>
                <div class="mk-left">
                    <span class="mk-pill mk-fade-up" style={fade_up_style(0)}>
                        {format!("{} • Digital Growth Partner", brand)}
                    </span>

                    <h1 class="mk-title mk-fade-up" style={fade_up_style(1)}>
                        <span class="mk-title-accent">{"Result-Driven Marketing"}</span>
                        <br />
                        {"That Grows Your Business"}
                    </h1>

                    <p class="mk-sub mk-fade-up" style={fade_up_style(2)}>
                        {"10+ Years of Creative Excellence | 2000+ Brands Empowered | 20+ Crore in Ad Spend. A passionate team of branding specialists, delivering impactful, design-led solutions to clients across the globe."}
                    </p>

                    <div class="mk-ctas mk-fade-up" style={fade_up_style(3)}>
                        <button
                            class="mk-btn mk-btn--primary"
                            onclick={on_contact}
                            aria-label="Start your growth on Telegram"
                        >
                            {"Start Your Growth on Telegram"}
                        </button>
                        <button
                            class="mk-btn mk-btn--ghost"
                            onclick={go_to(Route::Services)}
                            aria-label="Explore services"
                        >
                            {"Explore Services"}
                        </button>
                    </div>

                    <ul class="mk-trust mk-fade-up" style={fade_up_style(4)}>
                        <li>{"Creative Strategies"}</li>
                        <li>{"More Traffic, More Leads"}</li>
                        <li>{"Smart SEO + Social Media"}</li>
                    </ul>
                </div>

                <div class="mk-right mk-fade-up" style={fade_up_style(5)}>
                    <div class="mk-photo-wrap mk-photo-wrap--glow">
                        <img src={hero_image} alt="Marketing specialist" class="mk-photo" />

                        <div class="mk-float mk-float--chart mk-fade-up" style={float_style(0.35)}>
                            <div class="mk-mini-card">
                                <svg class="mk-linechart" viewBox="0 0 120 60" preserveAspectRatio="none">
                                    <polyline
                                        points="5,55 20,48 35,42 50,45 65,30 80,35 95,18 115,22"
                                        fill="none"
                                        stroke="currentColor"
                                        stroke-width="4"
                                        stroke-linejoin="round"
                                        stroke-linecap="round"
                                    />
                                </svg>
                                <p>{"Issue Resolution"}</p>
                            </div>
                        </div>

                        <div class="mk-float mk-float--donut mk-fade-up" style={float_style(0.5)}>
                            <div class="mk-mini-card mk-mini-card--donut">
                                <div class="mk-donut">
                                    <div class="mk-donut-ring" />
                                </div>
                                <p>{"Quick Turnaround"}</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <div class={classes!("mk-services", "mk-services--pro", group_class)}>
                { for SERVICES.iter().enumerate().map(|(i, s)| html! {
                    <button
                        key={s.slug}
                        class="mk-service mk-service--card mk-fade-up"
                        style={fade_up_style(i)}
                        onclick={go_to(s.route())}
                        aria-label={format!("{} service", s.label)}
                    >
                        <span class="mk-ring">{s.glyph}</span>
                        <span class="mk-service-texts">
                            <strong>{s.label}</strong>
                            <small>{s.desc}</small>
                        </span>
                    </button>
                }) }
            </div>
        </section>
    }
}

const HERO_CSS: &str = r#"
    .mk-hero {
        position: relative;
        overflow: hidden;
        padding: 6rem 1.5rem 3rem;
        color: #0f172a;
    }
    .mk-bg {
        position: absolute;
        border-radius: 50%;
        filter: blur(80px);
        opacity: 0.35;
        pointer-events: none;
    }
    .mk-bg--orbA { width: 420px; height: 420px; background: #6366f1; top: -120px; left: -80px; }
    .mk-bg--orbB { width: 360px; height: 360px; background: #22d3ee; bottom: -140px; right: -60px; }
    .mk-grid-dots {
        position: absolute;
        inset: 0;
        background-image: radial-gradient(rgba(15, 23, 42, 0.08) 1px, transparent 1px);
        background-size: 22px 22px;
        pointer-events: none;
    }
    .mk-grid {
        position: relative;
        display: grid;
        grid-template-columns: 1.1fr 1fr;
        gap: 3rem;
        max-width: 1200px;
        margin: 0 auto;
        align-items: center;
    }
    .mk-fade-up {
        opacity: 0;
        transform: translateY(28px);
    }
    .mk-reveal-group.visible .mk-fade-up {
        opacity: 1;
        transform: translateY(0);
    }
    .mk-pill {
        display: inline-block;
        padding: 0.4rem 0.9rem;
        border-radius: 999px;
        background: rgba(99, 102, 241, 0.12);
        color: #4338ca;
        font-weight: 600;
        font-size: 0.85rem;
    }
    .mk-title { font-size: 3rem; line-height: 1.1; margin: 1rem 0; }
    .mk-title-accent { color: #4f46e5; }
    .mk-sub { color: #475569; font-size: 1.05rem; line-height: 1.6; }
    .mk-ctas { display: flex; gap: 1rem; margin: 1.75rem 0; flex-wrap: wrap; }
    .mk-btn {
        border: none;
        border-radius: 10px;
        padding: 0.85rem 1.5rem;
        font-weight: 600;
        cursor: pointer;
        text-decoration: none;
    }
    .mk-btn--primary { background: #4f46e5; color: white; }
    .mk-btn--ghost { background: transparent; color: #4f46e5; border: 1px solid #4f46e5; }
    .mk-trust { display: flex; gap: 1.25rem; list-style: none; padding: 0; color: #64748b; flex-wrap: wrap; }
    .mk-photo-wrap { position: relative; }
    .mk-photo { width: 100%; border-radius: 24px; display: block; }
    .mk-photo-wrap--glow::after {
        content: "";
        position: absolute;
        inset: -12px;
        border-radius: 32px;
        box-shadow: 0 0 60px rgba(79, 70, 229, 0.35);
        z-index: -1;
    }
    .mk-float { position: absolute; }
    .mk-float--chart { top: 8%; left: -8%; }
    .mk-float--donut { bottom: 8%; right: -6%; }
    .mk-mini-card {
        background: white;
        border-radius: 14px;
        padding: 0.75rem 1rem;
        box-shadow: 0 12px 30px rgba(15, 23, 42, 0.12);
        font-size: 0.8rem;
    }
    .mk-linechart { width: 120px; height: 60px; color: #22c55e; }
    .mk-donut { width: 56px; height: 56px; margin: 0 auto; }
    .mk-donut-ring {
        width: 100%;
        height: 100%;
        border-radius: 50%;
        background: conic-gradient(#4f46e5 0 72%, #e2e8f0 72% 100%);
        mask: radial-gradient(circle, transparent 55%, black 56%);
    }
    .mk-services {
        position: relative;
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
        gap: 1rem;
        max-width: 1200px;
        margin: 3rem auto 0;
    }
    .mk-service {
        display: flex;
        gap: 0.75rem;
        align-items: center;
        text-align: left;
        background: white;
        border: 1px solid #e2e8f0;
        border-radius: 14px;
        padding: 1rem;
        cursor: pointer;
    }
    .mk-reveal-group.visible .mk-service:hover { transform: translateY(-6px); }
    .mk-ring {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        width: 40px;
        height: 40px;
        border-radius: 50%;
        background: rgba(79, 70, 229, 0.1);
    }
    .mk-service-texts { display: flex; flex-direction: column; }
    .mk-service-texts small { color: #64748b; }
    @media (max-width: 900px) {
        .mk-grid { grid-template-columns: 1fr; }
        .mk-title { font-size: 2.2rem; }
        .mk-float { display: none; }
    }
"#;
