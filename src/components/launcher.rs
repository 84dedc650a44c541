//! Floating launcher button that opens and closes the panel.

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::state::widget::WidgetState;

/// Circular toggle button anchored to the page corner.
#[component]
pub fn Launcher() -> impl IntoView {
    let state = expect_context::<RwSignal<WidgetState>>();
    let config = expect_context::<StoredValue<WidgetConfig>>();

    let on_click = move |_| {
        let welcome = config.with_value(|c| c.branding.welcome_text.clone());
        state.update(|s| s.toggle_open(&welcome));
    };

    view! {
        <button class="chat-widget__launcher" on:click=on_click title="Open chat">
            "💬"
        </button>
    }
}
