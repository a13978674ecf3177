//! Country creation form.
//!
//! Collects four fields, validates them synchronously on submit, issues the
//! `addCountry` mutation, and on success merges the returned record into the
//! cached list query so the list view re-renders without a network
//! round-trip.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::CONTINENTS;
use crate::core::{
    ContinentInput, FieldErrors, NewCountryInput, add_country, normalize_code,
    validate_new_country,
};

stylance::import_crate_style!(css, "src/components/add_country_form.module.css");

/// Outcome message of the last submission.
///
/// A single tagged value, so the success and failure messages are mutually
/// exclusive at any instant.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SubmitFeedback {
    None,
    Success(String),
    Failure(String),
}

/// Creation form for new countries.
///
/// `on_complete` is invoked after a successful submission; the list view
/// uses it to hide the form again.
#[component]
pub fn AddCountryForm(on_complete: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let cache = ctx.cache;

    let name = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let emoji = RwSignal::new(String::new());
    // "none" or a continent id from the fixed reference list
    let continent = RwSignal::new("none".to_string());

    let errors = RwSignal::new(FieldErrors::default());
    let feedback = RwSignal::new(SubmitFeedback::None);
    let pending = RwSignal::new(false);

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Local validation runs before any network call and collects every
        // violation at once; any violation aborts the submission.
        let field_errors = validate_new_country(
            &name.get_untracked(),
            &code.get_untracked(),
            &emoji.get_untracked(),
        );
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::default());

        let input = NewCountryInput {
            name: name.get_untracked(),
            code: code.get_untracked(),
            emoji: emoji.get_untracked(),
            // "none" parses to no reference, which omits the key entirely
            continent: continent
                .get_untracked()
                .parse::<u32>()
                .ok()
                .map(|id| ContinentInput { id }),
        };

        pending.set(true);
        spawn_local(async move {
            match add_country(input).await {
                Ok(created) => {
                    // Patch the cached list before anyone refetches it
                    cache.insert_country(created);

                    name.set(String::new());
                    code.set(String::new());
                    emoji.set(String::new());
                    continent.set("none".to_string());
                    errors.set(FieldErrors::default());
                    feedback.set(SubmitFeedback::Success(
                        "Country added successfully!".to_string(),
                    ));
                    on_complete.run(());
                }
                Err(err) => {
                    #[cfg(target_arch = "wasm32")]
                    web_sys::console::error_1(
                        &format!("Error adding country: {}", err).into(),
                    );
                    // Field values are left intact so the user can retry
                    feedback.set(SubmitFeedback::Failure(err.to_string()));
                }
            }
            pending.set(false);
        });
    };

    let input_value = |ev: &leptos::ev::Event| -> String {
        ev.target()
            .map(|t| t.unchecked_into::<web_sys::HtmlInputElement>().value())
            .unwrap_or_default()
    };

    view! {
        <section class=css::card>
            <h2 class=css::cardTitle>"Add New Country"</h2>
            <form class=css::form on:submit=handle_submit>
                <div class=css::fieldGrid>
                    <div class=css::field>
                        <label class=css::label for="country-name">"Country Name"</label>
                        <input
                            id="country-name"
                            type="text"
                            class=move || input_class(errors.get().name.is_some())
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(input_value(&ev))
                            placeholder="e.g. France"
                        />
                        {move || errors.get().name.map(|msg| {
                            view! { <p class=css::fieldError>{msg}</p> }
                        })}
                    </div>

                    <div class=css::field>
                        <label class=css::label for="country-code">"Country Code (2 letters)"</label>
                        <input
                            id="country-code"
                            type="text"
                            class=move || input_class(errors.get().code.is_some())
                            prop:value=move || code.get()
                            on:input=move |ev| code.set(normalize_code(&input_value(&ev)))
                            placeholder="e.g. FR"
                            maxlength="2"
                        />
                        {move || errors.get().code.map(|msg| {
                            view! { <p class=css::fieldError>{msg}</p> }
                        })}
                    </div>

                    <div class=css::field>
                        <label class=css::label for="country-emoji">"Emoji Flag"</label>
                        <input
                            id="country-emoji"
                            type="text"
                            class=move || input_class(errors.get().emoji.is_some())
                            prop:value=move || emoji.get()
                            on:input=move |ev| emoji.set(input_value(&ev))
                            placeholder="e.g. 🇫🇷"
                        />
                        {move || errors.get().emoji.map(|msg| {
                            view! { <p class=css::fieldError>{msg}</p> }
                        })}
                    </div>

                    <div class=css::field>
                        <label class=css::label for="country-continent">"Continent (Optional)"</label>
                        <select
                            id="country-continent"
                            class=css::select
                            prop:value=move || continent.get()
                            on:change=move |ev| continent.set(input_value(&ev))
                        >
                            <option value="none">"None"</option>
                            {CONTINENTS
                                .iter()
                                .map(|c| view! {
                                    <option value=c.id.to_string()>{c.name}</option>
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
                </div>

                <button type="submit" class=css::submit disabled=move || pending.get()>
                    {move || if pending.get() {
                        view! {
                            <span class=css::spinner aria-hidden="true">
                                <Icon icon=ic::SPINNER />
                            </span>
                            "Creating..."
                        }.into_any()
                    } else {
                        view! { "Add Country" }.into_any()
                    }}
                </button>
            </form>

            {move || match feedback.get() {
                SubmitFeedback::None => None,
                SubmitFeedback::Success(msg) => {
                    Some(view! { <p class=css::success>{msg}</p> }.into_any())
                }
                SubmitFeedback::Failure(msg) => {
                    Some(view! { <p class=css::failure>{msg}</p> }.into_any())
                }
            }}
        </section>
    }
}

fn input_class(has_error: bool) -> String {
    if has_error {
        format!("{} {}", css::input, css::inputError)
    } else {
        css::input.to_string()
    }
}
