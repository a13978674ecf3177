//! Country list view.
//!
//! Fetches the full country list cache-first and renders a grid of
//! navigable cards. The view renders from the shared
//! [`QueryCache`](crate::core::QueryCache), so a successful creation from
//! [`AddCountryForm`] appears immediately without a refetch.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::add_country_form::AddCountryForm;
use crate::components::icons as ic;
use crate::core::{QueryKey, fetch_countries};
use crate::models::{Country, Remote, Route};

stylance::import_crate_style!(css, "src/components/country_list.module.css");

/// Country list page with the creation form toggle.
#[component]
pub fn CountryList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let cache = ctx.cache;

    let (show_form, set_show_form) = signal(false);

    // Cache-first read: the network is hit only when the list query has no
    // cached value yet. On success the result is written through the cache,
    // which is also what the grid below renders from.
    let fetch = LocalResource::new(move || async move {
        if let Some(countries) = cache.read(QueryKey::Countries) {
            return Ok(countries);
        }
        let countries = fetch_countries().await.map_err(|e| e.to_string())?;
        cache.write(QueryKey::Countries, countries.clone());
        Ok(countries)
    });

    let cached = cache.watch(QueryKey::Countries);
    let state = Signal::derive(move || {
        if let Some(countries) = cached.get() {
            return Remote::Ready(countries);
        }
        match fetch.get() {
            None => Remote::Loading,
            Some(Err(msg)) => Remote::Error(msg),
            Some(Ok(countries)) => Remote::Ready(countries),
        }
    });

    // Hide the form again once a creation completes
    let on_complete = Callback::new(move |_: ()| set_show_form.set(false));

    view! {
        <div class=css::page>
            <div class=css::toolbar>
                <h1 class=css::title>"Countries List"</h1>
                <button
                    class=css::toggleButton
                    on:click=move |_| set_show_form.update(|v| *v = !*v)
                >
                    {move || if show_form.get() {
                        view! { "Hide Form" }.into_any()
                    } else {
                        view! {
                            <span class=css::buttonIcon aria-hidden="true">
                                <Icon icon=ic::PLUS />
                            </span>
                            "Add New Country"
                        }.into_any()
                    }}
                </button>
            </div>

            <Show when=move || show_form.get()>
                <AddCountryForm on_complete=on_complete />
            </Show>

            {move || match state.get() {
                Remote::Loading => view! {
                    <div class=css::loading>
                        <span class=css::spinner aria-hidden="true">
                            <Icon icon=ic::SPINNER />
                        </span>
                        <span>"Loading countries..."</span>
                    </div>
                }.into_any(),
                Remote::Error(msg) => view! {
                    <div class=css::error>
                        <p>{format!("Error loading countries: {}", msg)}</p>
                    </div>
                }.into_any(),
                // The list query has no not-found state
                Remote::NotFound => view! { <div class=css::grid></div> }.into_any(),
                Remote::Ready(countries) => view! {
                    <div class=css::grid>
                        <For
                            each=move || countries.clone()
                            key=|country| country.code.clone()
                            children=move |country| {
                                view! { <CountryCard country=country /> }
                            }
                        />
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

/// A single navigable country card.
#[component]
fn CountryCard(country: Country) -> impl IntoView {
    let href = Route::country(&country.code).href();

    view! {
        <a href=href class=css::card>
            <span class=css::cardEmoji aria-hidden="true">{country.emoji}</span>
            <span class=css::cardName>{country.name}</span>
        </a>
    }
}
