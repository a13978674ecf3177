//! Static navigation chrome.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::models::Route;

stylance::import_crate_style!(css, "src/components/header.module.css");

/// Application header linking back to the country list.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class=css::header>
            <div class=css::inner>
                <a href=Route::Home.href() class=css::brand>
                    <span class=css::brandIcon aria-hidden="true">
                        <Icon icon=ic::GLOBE />
                    </span>
                    <span>{APP_NAME}</span>
                </a>
            </div>
        </header>
    }
}
