use finance_domain::opt_out_service::{OPTED_IN_MESSAGE, OPTED_OUT_MESSAGE};
use finance_domain::{OptOutService, TrackingStatus};
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::{BrowserStore, Logger};
use crate::Page;

const REDIRECT_DELAY_MS: u32 = 1000;

#[derive(Properties, PartialEq)]
pub struct SettingsPageProps {
    pub on_navigate: Callback<Page>,
}

/// Financial tracking opt-out
#[function_component(SettingsPage)]
pub fn settings_page(props: &SettingsPageProps) -> Html {
    let status = use_state(|| OptOutService::new().status(&BrowserStore::local()));
    let message = use_state(|| Option::<&'static str>::None);

    let on_opt_out = {
        let status = status.clone();
        let message = message.clone();
        Callback::from(move |_: MouseEvent| {
            let store = BrowserStore::local();
            let service = OptOutService::new();
            match service.opt_out(&store) {
                Ok(()) => message.set(Some(OPTED_OUT_MESSAGE)),
                Err(e) => Logger::error_with_component("settings-page", &format!("Failed to opt out: {}", e)),
            }
            status.set(service.status(&store));
        })
    };

    let on_opt_in = {
        let status = status.clone();
        let message = message.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| {
            let store = BrowserStore::local();
            let service = OptOutService::new();
            let result = service.opt_in(&store);
            status.set(service.status(&store));

            match result {
                Ok(()) => {
                    message.set(Some(OPTED_IN_MESSAGE));
                    let on_navigate = on_navigate.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        on_navigate.emit(Page::Dashboard);
                    });
                }
                Err(e) => Logger::error_with_component("settings-page", &format!("Failed to opt in: {}", e)),
            }
        })
    };

    let active = status.is_active();
    let dot_class = classes!("status-dot", if active { "active" } else { "inactive" });

    html! {
        <div class="settings-page">
            <h2>{"Privacy Settings"}</h2>
            <div class="card opt-out-card">
                <h3>{"Financial Tracking"}</h3>
                <p>
                    {"When tracking is disabled every figure on the dashboard and stats pages is shown as zero."}
                </p>
                <div class="tracking-status">
                    <span class={dot_class}></span>
                    <span>{"Status: "}</span>
                    <strong>{status.label()}</strong>
                </div>
                if *status == TrackingStatus::Active {
                    <button class="btn btn-danger" onclick={on_opt_out}>{"Opt Out of Tracking"}</button>
                } else {
                    <button class="btn btn-primary" onclick={on_opt_in}>{"Re-enable Tracking"}</button>
                }
                if let Some(text) = *message {
                    <div class="inline-message">{text}</div>
                }
            </div>
        </div>
    }
}
