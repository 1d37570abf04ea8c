use std::rc::Rc;

use finance_domain::chat_service::{rule_reply, ChatTranscript};
use gloo::timers::future::TimeoutFuture;
use shared::{AppConfig, ChatMessage};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::Logger;

enum ChatAction {
    /// A user message whose reply is now outstanding
    User(String),
    Bot(String),
}

#[derive(Clone, PartialEq)]
struct ChatReducer {
    transcript: ChatTranscript,
    /// Replies still on their way
    pending: usize,
}

impl Reducible for ChatReducer {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ChatAction::User(text) => {
                if next.transcript.push_user(&text).is_some() {
                    next.pending += 1;
                }
            }
            ChatAction::Bot(text) => {
                next.transcript.push_bot(&text);
                next.pending = next.pending.saturating_sub(1);
            }
        }
        Rc::new(next)
    }
}

#[derive(Clone, PartialEq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// A reply is on its way
    pub waiting: bool,
}

pub struct UseChatResult {
    pub state: ChatState,
    pub send: Callback<String>,
}

/// Chat transcript for the current page. Replies come from the chat API and
/// fall back to the local rules after `chat_reply_delay_ms`.
#[hook]
pub fn use_chat(api_client: &ApiClient, config: &AppConfig) -> UseChatResult {
    let chat = use_reducer(|| ChatReducer {
        transcript: ChatTranscript::with_greeting(),
        pending: 0,
    });

    let send = {
        let chat = chat.clone();
        let api_client = api_client.clone();
        let delay_ms = config.chat_reply_delay_ms;

        use_callback((), move |text: String, _| {
            let text = text.trim().to_string();
            if text.is_empty() {
                return;
            }

            chat.dispatch(ChatAction::User(text.clone()));

            let chat = chat.clone();
            let api_client = api_client.clone();
            spawn_local(async move {
                let reply = match api_client.send_chat(&text).await {
                    Ok(response) => response.reply,
                    Err(e) => {
                        Logger::warn_with_component("chat-hook", &format!("Chat API unavailable, answering locally: {}", e));
                        TimeoutFuture::new(delay_ms).await;
                        rule_reply(&text).to_string()
                    }
                };
                chat.dispatch(ChatAction::Bot(reply));
            });
        })
    };

    UseChatResult {
        state: ChatState {
            messages: chat.transcript.messages().to_vec(),
            waiting: chat.pending > 0,
        },
        send,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: Rc<ChatReducer>, action: ChatAction) -> Rc<ChatReducer> {
        state.reduce(action)
    }

    #[test]
    fn test_waiting_until_every_reply_lands() {
        let state = Rc::new(ChatReducer {
            transcript: ChatTranscript::new(),
            pending: 0,
        });

        let state = reduce(state, ChatAction::User("budget?".to_string()));
        let state = reduce(state, ChatAction::User("savings?".to_string()));
        assert_eq!(state.pending, 2);

        let state = reduce(state, ChatAction::Bot("first".to_string()));
        assert_eq!(state.pending, 1);

        let state = reduce(state, ChatAction::Bot("second".to_string()));
        assert_eq!(state.pending, 0);
        assert_eq!(state.transcript.len(), 4);

        // A stray reply never underflows
        let state = reduce(state, ChatAction::Bot("late".to_string()));
        assert_eq!(state.pending, 0);
    }
}
