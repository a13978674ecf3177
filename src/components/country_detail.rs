//! Country detail view.
//!
//! Fetches one country by the code from the route parameter and renders its
//! fields, or an error/not-found state with a back-navigation link. An empty
//! code skips the fetch entirely; no request is issued.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::core::fetch_country;
use crate::models::{Remote, Route};

stylance::import_crate_style!(css, "src/components/country_detail.module.css");

/// Country detail page for the `#/country/{code}` route.
#[component]
pub fn CountryDetail(code: String) -> impl IntoView {
    let lookup = code.clone();
    let fetch = LocalResource::new(move || {
        let code = lookup.clone();
        async move {
            if code.is_empty() {
                // No route parameter: skip the request entirely
                return Ok(None);
            }
            fetch_country(&code).await.map_err(|e| e.to_string())
        }
    });

    let state = Signal::derive(move || match fetch.get() {
        None => Remote::Loading,
        Some(Err(msg)) => Remote::Error(msg),
        Some(Ok(None)) => Remote::NotFound,
        Some(Ok(Some(country))) => Remote::Ready(country),
    });

    view! {
        <div class=css::page>
            {move || match state.get() {
                Remote::Loading => view! {
                    <div class=css::loading>
                        <span class=css::spinner aria-hidden="true">
                            <Icon icon=ic::SPINNER />
                        </span>
                        <span>"Loading country details..."</span>
                    </div>
                }.into_any(),
                Remote::Error(msg) => view! {
                    <BackLink />
                    <div class=css::error>
                        <p>{format!("Error loading country details: {}", msg)}</p>
                    </div>
                }.into_any(),
                Remote::NotFound => view! {
                    <BackLink />
                    <div class=css::notFound>
                        <p>"Country not found"</p>
                    </div>
                }.into_any(),
                Remote::Ready(country) => {
                    let continent = country
                        .continent
                        .map(|c| c.name)
                        .unwrap_or_else(|| "Not specified".to_string());
                    view! {
                        <BackLink />
                        <div class=css::card>
                            <div class=css::cardHeader>
                                <span class=css::emoji aria-hidden="true">{country.emoji}</span>
                                <h1 class=css::name>{country.name}</h1>
                            </div>
                            <div class=css::fields>
                                <div>
                                    <h3 class=css::fieldLabel>"Country Code"</h3>
                                    <p class=css::fieldValue>{country.code}</p>
                                </div>
                                <div>
                                    <h3 class=css::fieldLabel>"Continent"</h3>
                                    <p class=css::fieldValue>{continent}</p>
                                </div>
                            </div>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

/// Back-navigation link shown on every non-loading state.
#[component]
fn BackLink() -> impl IntoView {
    view! {
        <a href=Route::Home.href() class=css::backLink>
            <span class=css::backIcon aria-hidden="true">
                <Icon icon=ic::ARROW_LEFT />
            </span>
            <span>"Back to Countries"</span>
        </a>
    }
}
