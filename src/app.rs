//! Root widget component with context providers.

use leptos::prelude::*;

use crate::components::launcher::Launcher;
use crate::components::panel::Panel;
use crate::config::{PanelPosition, PayloadProtocol, WidgetConfig};
use crate::session::SessionId;
use crate::state::widget::WidgetState;

/// Root widget component.
///
/// Holds the resolved config, the widget state, and (for the session
/// protocol) a session id generated once per widget lifetime. All child
/// components read these via context.
#[component]
pub fn ChatWidget(config: WidgetConfig) -> impl IntoView {
    let session = match config.webhook.protocol {
        PayloadProtocol::Session => Some(SessionId::generate()),
        PayloadProtocol::Simple => None,
    };
    let anchored_left = config.style.position == PanelPosition::Left;

    let state = RwSignal::new(WidgetState::default());
    provide_context(state);
    provide_context(StoredValue::new(config));
    provide_context(StoredValue::new(session));

    view! {
        <div class="chat-widget" class:chat-widget--left=anchored_left>
            <Show when=move || state.get().is_open>
                <Panel/>
            </Show>
            <Launcher/>
        </div>
    }
}
