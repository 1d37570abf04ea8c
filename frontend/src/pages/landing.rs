use finance_domain::signup::SIGNUP_FAILED_MESSAGE;
use finance_domain::SignupService;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::{date_utils, BrowserStore, Logger};

/// Pause between the success message and the dashboard
const REDIRECT_DELAY_MS: u32 = 3000;

#[derive(Properties, PartialEq)]
pub struct LandingPageProps {
    pub api_client: ApiClient,
    /// Receives the stored username once the profile exists
    pub on_created: Callback<String>,
}

#[function_component(LandingPage)]
pub fn landing_page(props: &LandingPageProps) -> Html {
    let username = use_state(String::new);
    let creating = use_state(|| false);
    let created = use_state(|| false);

    let on_input = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            username.set(target.value());
        })
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let on_created = props.on_created.clone();
        let username = username.clone();
        let creating = creating.clone();
        let created = created.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *creating {
                return;
            }

            let api_client = api_client.clone();
            let on_created = on_created.clone();
            let username = (*username).clone();
            let creating = creating.clone();
            let created = created.clone();

            creating.set(true);
            spawn_local(async move {
                let fetched = match api_client.generate_profile().await {
                    Ok(profile) => Some(profile),
                    Err(e) => {
                        Logger::warn_with_component("landing-page", &format!("Using fallback profile: {}", e));
                        None
                    }
                };

                let result = SignupService::new().create_profile(
                    &BrowserStore::local(),
                    &BrowserStore::session(),
                    &username,
                    fetched,
                    date_utils::now_utc(),
                );

                match result {
                    Ok(profile) => {
                        created.set(true);
                        TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        on_created.emit(profile.username);
                    }
                    Err(e) => {
                        Logger::error_with_component("landing-page", &format!("Error during profile creation: {}", e));
                        creating.set(false);
                        gloo::dialogs::alert(SIGNUP_FAILED_MESSAGE);
                    }
                }
            });
        })
    };

    html! {
        <div class="landing">
            <div class="landing-card">
                <h1>{"Take control of your money"}</h1>
                <p class="landing-subtitle">
                    {"Track spending, split needs from wants and reach your savings goal."}
                </p>
                <form id="signup-form" onsubmit={on_submit}>
                    <input
                        id="username"
                        type="text"
                        placeholder="Choose a username"
                        value={(*username).clone()}
                        oninput={on_input}
                        disabled={*creating}
                    />
                    <button id="createBtn" type="submit" disabled={*creating}>
                        {if *creating { "Creating..." } else { "Create Profile" }}
                    </button>
                </form>
                if *created {
                    <div class="success-message show">
                        {"Profile created! Taking you to your dashboard..."}
                    </div>
                }
            </div>
        </div>
    }
}
