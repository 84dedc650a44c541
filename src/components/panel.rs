//! Expandable chat panel: brand header, message list, compose row, footer.

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::net::client;
use crate::net::payload::OutboundPayload;
use crate::session::SessionId;
use crate::state::widget::{MessageAuthor, WidgetState};

/// The open chat panel.
///
/// Submitting runs the full send lifecycle: session precondition, state
/// transition, webhook call, and reply/fallback append. The compose
/// controls are disabled while a send is in flight.
#[component]
pub fn Panel() -> impl IntoView {
    let state = expect_context::<RwSignal<WidgetState>>();
    let config = expect_context::<StoredValue<WidgetConfig>>();
    let session = expect_context::<StoredValue<Option<SessionId>>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message (or the typing indicator) in view.
    Effect::new(move || {
        let snapshot = state.get();
        let _ = (snapshot.messages.len(), snapshot.is_loading);

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let trimmed = input.get().trim().to_owned();
        if trimmed.is_empty() {
            return;
        }

        let session = session.get_value();
        let (url, build) = config.with_value(|c| {
            (
                c.webhook.url.clone(),
                OutboundPayload::build(&c.webhook, session.as_ref(), &trimmed),
            )
        });
        let payload = match build {
            Ok(payload) => payload,
            Err(e) => {
                // Aborted before any state change; the user message is not
                // appended and no request goes out.
                leptos::logging::warn!("chat send aborted: {e}");
                return;
            }
        };

        let mut accepted = None;
        state.update(|s| accepted = s.begin_send(&trimmed));
        if accepted.is_none() {
            // A send is already in flight; keep the input as typed.
            return;
        }
        input.set(String::new());

        leptos::task::spawn_local(async move {
            let outcome = client::post_message(&url, &payload).await;
            if let Err(e) = &outcome {
                leptos::logging::warn!("chat send failed: {e}");
            }
            state.update(|s| s.finish_send(outcome));
        });
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !state.get().is_loading && !input.get().trim().is_empty();

    let branding = config.with_value(|c| c.branding.clone());
    let logo = (!branding.logo.is_empty()).then(|| {
        view! { <img class="chat-widget__logo" src=branding.logo.clone() alt=branding.name.clone()/> }
    });
    let footer = branding.powered_by.as_ref().map(|p| {
        let link = p.link.clone();
        let text = p.text.clone();
        view! {
            <div class="chat-widget__footer">
                <a href=link target="_blank" rel="noopener">{text}</a>
            </div>
        }
    });

    view! {
        <div class="chat-widget__panel">
            <div class="chat-widget__header">
                {logo}
                <div class="chat-widget__title">
                    <span class="chat-widget__name">{branding.name.clone()}</span>
                    <span class="chat-widget__subtitle">{branding.response_time_text.clone()}</span>
                </div>
                <button class="chat-widget__close" on:click=move |_| state.update(WidgetState::close)>
                    "×"
                </button>
            </div>

            <div class="chat-widget__messages" node_ref=messages_ref>
                {move || {
                    state
                        .get()
                        .messages
                        .iter()
                        .map(|msg| {
                            let is_user = msg.author == MessageAuthor::User;
                            let is_bot = !is_user;
                            let content = msg.content.clone();
                            view! {
                                <div
                                    class="chat-widget__message"
                                    class:chat-widget__message--user=is_user
                                    class:chat-widget__message--bot=is_bot
                                >
                                    {content}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                {move || {
                    state.get().is_loading.then(|| {
                        view! {
                            <div class="chat-widget__typing">
                                <span></span>
                                <span></span>
                                <span></span>
                            </div>
                        }
                    })
                }}
            </div>

            <div class="chat-widget__input-row">
                <input
                    class="chat-widget__input"
                    type="text"
                    placeholder="Type your message here..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                    disabled=move || state.get().is_loading
                />
                <button class="chat-widget__send" on:click=on_click disabled=move || !can_send()>
                    "Send"
                </button>
            </div>

            {footer}
        </div>
    }
}
