//! Welcome view shown while the conversation is empty.
//!
//! Renders the greeting and four predefined suggested questions as clickable
//! cards. Selecting a card submits that question through the same path as a
//! typed message.

#[cfg(test)]
#[path = "suggestion_grid_test.rs"]
mod suggestion_grid_test;

use leptos::prelude::*;

/// The four static localized prompts offered before any message exists.
pub const SUGGESTED_QUESTIONS: [&str; 4] = [
    "什麼是 DysonV2 的主要特色？",
    "DysonV2 的 Premium 計算公式是什麼？",
    "如何使用 DysonV2 進行雙幣理財？",
    "DysonV2 的風險管理機制有哪些？",
];

/// Greeting plus suggestion cards; `on_select` receives the card's text.
#[component]
pub fn SuggestionGrid(on_select: Callback<String>) -> impl IntoView {
    view! {
        <div class="chat-welcome">
            <div class="chat-welcome__header">
                <h1 class="chat-welcome__title">"Hello there!"</h1>
                <p class="chat-welcome__subtitle">"您好！我是 DysonV2 專屬的 AI 助手"</p>
            </div>
            <div class="chat-welcome__grid">
                {SUGGESTED_QUESTIONS
                    .iter()
                    .map(|question| {
                        let text = (*question).to_owned();
                        view! {
                            <button
                                class="chat-welcome__card"
                                type="button"
                                on:click=move |_| on_select.run(text.clone())
                            >
                                <p class="chat-welcome__card-text">{*question}</p>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
