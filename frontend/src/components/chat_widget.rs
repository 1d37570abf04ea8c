use shared::{AppConfig, ChatSender};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_chat::use_chat;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct ChatWidgetProps {
    pub api_client: ApiClient,
    pub config: AppConfig,
}

/// Collapsible assistant chat in the corner of the dashboard
#[function_component(ChatWidget)]
pub fn chat_widget(props: &ChatWidgetProps) -> Html {
    let chat = use_chat(&props.api_client, &props.config);
    let open = use_state(|| false);
    let input = use_state(String::new);

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            input.set(target.value());
        })
    };

    let submit = {
        let input = input.clone();
        let send = chat.send.clone();
        Callback::from(move |_: ()| {
            send.emit((*input).clone());
            input.set(String::new());
        })
    };

    let on_send = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit.emit(()))
    };

    let on_keypress = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            submit.emit(());
        }
    });

    html! {
        <div class={classes!("chat-widget", (*open).then_some("open"))}>
            <button class="chat-toggle" onclick={toggle} aria-label="Chat">
                <i class={if *open { "fas fa-times" } else { "fas fa-comments" }}></i>
            </button>
            if *open {
                <div class="chat-panel">
                    <div class="chat-messages">
                        {for chat.state.messages.iter().map(|message| {
                            let class = match message.sender {
                                ChatSender::User => "chat-message user",
                                ChatSender::Bot => "chat-message bot",
                            };
                            html! { <div {class}>{&message.text}</div> }
                        })}
                        if chat.state.waiting {
                            <div class="chat-message bot typing">{"..."}</div>
                        }
                    </div>
                    <div class="chat-input">
                        <input
                            type="text"
                            placeholder="Ask about your finances..."
                            value={(*input).clone()}
                            oninput={on_input}
                            onkeypress={on_keypress}
                        />
                        <button onclick={on_send}>{"Send"}</button>
                    </div>
                </div>
            }
        </div>
    }
}
