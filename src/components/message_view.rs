//! A single conversation turn: avatar, bubble, and optional sources block.
//!
//! User turns align right and render as plain text; assistant turns align
//! left and render the reply as markdown. A non-empty `sources` list adds a
//! bulleted references block beneath the assistant bubble.

use leptos::prelude::*;

use crate::net::types::ChatRole;
use crate::state::chat::Message;
use crate::util::markdown::render_markdown_html;

/// Heading shown above an assistant reply's citation list.
pub const SOURCES_LABEL: &str = "參考來源:";

#[component]
pub fn MessageView(message: Message) -> impl IntoView {
    let is_user = message.role == ChatRole::User;
    let sources = message.sources.clone().unwrap_or_default();
    let has_sources = !sources.is_empty();

    view! {
        <div class="chat-message" class:chat-message--user=is_user>
            <div class="chat-message__inner">
                <div class="chat-message__avatar" class:chat-message__avatar--user=is_user>
                    {if is_user { user_icon().into_any() } else { bot_icon().into_any() }}
                </div>
                <div class="chat-message__body">
                    <div class="chat-message__bubble">
                        {if is_user {
                            view! { <p class="chat-message__text">{message.content.clone()}</p> }.into_any()
                        } else {
                            let rendered = render_markdown_html(&message.content);
                            view! { <div class="chat-message__markdown" inner_html=rendered></div> }.into_any()
                        }}
                    </div>
                    <Show when=move || has_sources>
                        <div class="chat-message__sources">
                            <p class="chat-message__sources-label">{SOURCES_LABEL}</p>
                            <ul class="chat-message__sources-list">
                                {sources
                                    .iter()
                                    .map(|source| view! { <li>{source.clone()}</li> })
                                    .collect::<Vec<_>>()}
                            </ul>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

pub(crate) fn user_icon() -> impl IntoView {
    view! {
        <svg class="chat-message__icon" viewBox="0 0 20 20" aria-hidden="true">
            <circle cx="10" cy="6.5" r="3.5"></circle>
            <path d="M3.5 17c1.2-3 3.6-4.5 6.5-4.5s5.3 1.5 6.5 4.5"></path>
        </svg>
    }
}

pub(crate) fn bot_icon() -> impl IntoView {
    view! {
        <svg class="chat-message__icon" viewBox="0 0 20 20" aria-hidden="true">
            <rect x="4" y="7" width="12" height="9" rx="2"></rect>
            <path d="M10 7V4"></path>
            <circle cx="10" cy="3" r="1"></circle>
            <circle cx="7.5" cy="11.5" r="1"></circle>
            <circle cx="12.5" cy="11.5" r="1"></circle>
        </svg>
    }
}
