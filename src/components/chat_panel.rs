//! The chat widget: thread, welcome view, and input form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the submit path from guard to reply/fallback append, and switches
//! between the welcome layout and the scrolling thread based on whether any
//! message exists yet. The conversation itself lives in shared state
//! provided by the chat page.

use leptos::prelude::*;

use crate::components::message_view::{MessageView, bot_icon};
use crate::components::suggestion_grid::SuggestionGrid;
use crate::state::chat::ChatState;
use crate::util::time::now_ms;

/// Transient bubble text shown while a request is outstanding.
pub const THINKING_LABEL: &str = "正在思考中...";

/// Chat panel wiring state, network, and rendering together.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let draft = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest entry visible as messages arrive or the thinking
    // bubble toggles.
    Effect::new(move || {
        let state = chat.get();
        let _ = state.messages.len();
        let _ = state.loading;

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let send_message = move |text: String| {
        if !chat.get_untracked().can_submit(&text) {
            return;
        }

        // History must be captured before the append so the in-flight
        // message is sent separately from the context.
        let history = chat.get_untracked().history();
        chat.update(|c| c.push_user(text.clone(), now_ms()));
        draft.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::post_chat(&text, &history).await {
                Ok(reply) => {
                    chat.update(|c| c.push_reply(reply.response, reply.sources, now_ms()));
                }
                Err(e) => {
                    log::error!("chat request failed: {e}");
                    chat.update(|c| c.push_fallback(now_ms()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (text, history);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        send_message(draft.get());
    };

    let on_suggestion = Callback::new(move |question: String| send_message(question));

    let can_send = move || !draft.get().trim().is_empty() && !chat.get().loading;

    view! {
        <div class="chat-panel">
            {move || {
                if chat.get().is_empty() {
                    view! { <SuggestionGrid on_select=on_suggestion /> }.into_any()
                } else {
                    view! {
                        <div class="chat-panel__messages" node_ref=messages_ref>
                            <div class="chat-panel__thread">
                                {chat
                                    .get()
                                    .messages
                                    .iter()
                                    .map(|message| view! { <MessageView message=message.clone() /> })
                                    .collect::<Vec<_>>()}

                                {chat
                                    .get()
                                    .loading
                                    .then(|| {
                                        view! {
                                            <div class="chat-message">
                                                <div class="chat-message__inner">
                                                    <div class="chat-message__avatar">{bot_icon()}</div>
                                                    <div class="chat-message__bubble chat-message__bubble--thinking">
                                                        <span class="chat-message__spinner"></span>
                                                        <span>{THINKING_LABEL}</span>
                                                    </div>
                                                </div>
                                            </div>
                                        }
                                    })}
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}

            <div class="chat-input">
                <form class="chat-input__form" on:submit=on_submit>
                    <button class="chat-input__attach" type="button" aria-label="附加檔案">
                        <svg class="chat-input__icon" viewBox="0 0 20 20" aria-hidden="true">
                            <path d="M14.5 8.5 9 14a3 3 0 0 1-4.2-4.2l6.5-6.5a2 2 0 0 1 2.8 2.8L8 12.2a1 1 0 0 1-1.4-1.4l5-5"></path>
                        </svg>
                    </button>
                    <input
                        class="chat-input__field"
                        type="text"
                        placeholder="Send a message..."
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    />
                    <button class="chat-input__send" type="submit" disabled=move || !can_send()>
                        <svg class="chat-input__icon" viewBox="0 0 20 20" aria-hidden="true">
                            <path d="M10 16V4"></path>
                            <path d="M5 9l5-5 5 5"></path>
                        </svg>
                    </button>
                </form>
            </div>
        </div>
    }
}
