use std::cell::Cell;
use std::rc::Rc;

use log::info;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::branding::info::{BrandInfo, BrandingAction, TollFreeNumber};
use crate::branding::store::{self, StoreError};
use crate::deeplink::opener::{self, BrowserSurface, NavigationSurface, OpenOutcome};
use crate::deeplink::platform::UserAgentHint;
use crate::deeplink::resolver::{self, DeepLinkRequest};

/// Anything whose default browser action can be suppressed.
pub trait DefaultAction {
    fn prevent_default(&self);
}

impl DefaultAction for MouseEvent {
    fn prevent_default(&self) {
        Event::prevent_default(self);
    }
}

/// Suppresses the event's default action, then runs `open`.
pub fn run_click<E: DefaultAction>(event: &E, open: impl FnOnce() -> bool) -> bool {
    event.prevent_default();
    open()
}

/// Passes a finished lookup to `dispatch` unless the provider was torn down meanwhile.
pub fn deliver_lookup(
    alive: &Cell<bool>,
    lookup: Result<Option<TollFreeNumber>, StoreError>,
    dispatch: impl FnOnce(BrandingAction),
) -> bool {
    if !alive.get() {
        info!("Branding provider unmounted, discarding phone lookup");
        return false;
    }
    dispatch(BrandingAction::PhoneLookup(lookup));
    true
}

/// What consumers get from `use_branding`: the current branding state plus the messaging helpers.
#[derive(Clone, PartialEq)]
pub struct BrandingHandle {
    state: UseReducerHandle<BrandInfo>,
}

impl BrandingHandle {
    pub fn brand_info(&self) -> BrandInfo {
        (*self.state).clone()
    }

    #[allow(dead_code)]
    pub fn set_brand_info(&self, info: BrandInfo) {
        self.state.dispatch(BrandingAction::Replace(info));
    }

    pub fn resolve_deep_link(&self, request: &DeepLinkRequest) -> String {
        resolver::resolve_deep_link(
            request,
            &self.state.messaging_handle,
            &UserAgentHint::from_window(),
        )
    }

    pub fn open_messaging_app_outcome(&self, request: &DeepLinkRequest) -> OpenOutcome {
        let surface = BrowserSurface::current();
        let outcome = opener::open_messaging_app(
            surface.as_ref().map(|s| s as &dyn NavigationSurface),
            request,
            &self.state.messaging_handle,
            &UserAgentHint::from_window(),
        );
        info!("Messaging app open: {:?}", outcome);
        outcome
    }

    pub fn open_messaging_app(&self, request: &DeepLinkRequest) -> bool {
        self.open_messaging_app_outcome(request).opened()
    }

    pub fn on_click_open_messaging_app(&self, request: DeepLinkRequest) -> Callback<MouseEvent> {
        let handle = self.clone();
        Callback::from(move |e: MouseEvent| {
            run_click(&e, || handle.open_messaging_app(&request));
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct BrandingProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(BrandingProvider)]
pub fn branding_provider(props: &BrandingProviderProps) -> Html {
    let state = use_reducer(BrandInfo::default);

    // One-shot phone lookup, dropped if the provider is gone by the time it resolves
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let alive = Rc::new(Cell::new(true));
                {
                    let alive = alive.clone();
                    spawn_local(async move {
                        let lookup = store::fetch_toll_free_number().await;
                        deliver_lookup(&alive, lookup, |action| state.dispatch(action));
                    });
                }
                move || alive.set(false)
            },
            (),
        );
    }

    let handle = BrandingHandle { state };

    html! {
        <ContextProvider<BrandingHandle> context={handle}>
            { for props.children.iter() }
        </ContextProvider<BrandingHandle>>
    }
}

#[hook]
pub fn use_branding() -> Option<BrandingHandle> {
    use_context::<BrandingHandle>()
}
