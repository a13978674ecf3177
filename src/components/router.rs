//! Application router component.
//!
//! Handles URL-based routing with hash history. Uses native hashchange
//! events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: View state is derived from `#/path`
//! - **Navigation happens through anchors**: Cards and back links are plain
//!   `<a href="#/...">` elements, so hashchange fires and the browser
//!   back/forward buttons work automatically
//! - `#/` → country list, `#/country/{code}` → country detail

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::country_detail::CountryDetail;
use crate::components::country_list::CountryList;
use crate::models::Route;

/// Main application router.
#[component]
pub fn AppRouter() -> impl IntoView {
    // Create route signal from current URL hash
    let route = RwSignal::new(Route::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(Route::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let route_memo = Memo::new(move |_| route.get());

    view! {
        {move || match route_memo.get() {
            Route::Home => view! { <CountryList /> }.into_any(),
            Route::Country { code } => view! { <CountryDetail code=code /> }.into_any(),
        }}
    }
}
