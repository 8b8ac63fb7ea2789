//! Chat page — owns the conversation state for the session.
//!
//! State lives here rather than in the panel so the thread survives panel
//! re-renders and is destroyed only on page reload or navigation.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::state::chat::ChatState;

#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    provide_context(chat);

    view! {
        <div class="chat-page">
            <ChatPanel />
        </div>
    }
}
