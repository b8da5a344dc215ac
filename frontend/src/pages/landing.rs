use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::hero::Hero;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (), // Empty dependencies array means this effect runs only once on mount
        );
    }

    html! {
        <main class="landing">
            <Hero />
            <Footer />
        </main>
    }
}
