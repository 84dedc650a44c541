//! # chat-widget
//!
//! Embeddable website chat widget compiled to WASM. Renders a floating
//! launcher button and an expandable chat panel, and relays user messages
//! to a configured webhook endpoint, showing the returned reply as a bot
//! message.
//!
//! One state machine serves every deployment mode: the mount target picks
//! page-overlay vs. shadow-root isolation, and the webhook protocol picks
//! the plain `{route, message}` body vs. the n8n session body. The host
//! page configures the widget through a `ChatWidgetConfig` global read once
//! at load time.

pub mod app;
pub mod components;
pub mod config;
pub mod mount;
pub mod net;
pub mod session;
pub mod state;
pub mod theme;

use std::cell::Cell;

thread_local! {
    static INITIALIZED: Cell<bool> = const { Cell::new(false) };
}

/// Claim the one widget slot for this document.
///
/// Returns `false` if a widget is already mounted; initialization must be
/// idempotent so a host page loading the script twice gets one widget.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn claim_init() -> bool {
    INITIALIZED.with(|flag| {
        if flag.get() {
            false
        } else {
            flag.set(true);
            true
        }
    })
}

/// Give the slot back after a failed mount so a later init can retry.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn release_init() {
    INITIALIZED.with(|flag| flag.set(false));
}

/// Initialize the widget using the mount target from the host config
/// (overlay unless `mount.target: "shadow"` is set). Safe to call more
/// than once; every call after the first is ignored with a logged warning.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn init_chat_widget() {
    let overrides = config::read_host_config();
    let target = overrides.mount_target();
    init_with_target(overrides, target);
}

/// Initialize the widget inside an isolated shadow root regardless of the
/// configured target. Subject to the same single-instance guard.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn init_chat_widget_isolated() {
    init_with_target(config::read_host_config(), mount::MountTarget::ShadowHost);
}

#[cfg(feature = "csr")]
fn init_with_target(overrides: config::ConfigOverrides, target: mount::MountTarget) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    if !claim_init() {
        leptos::logging::warn!("chat widget already initialized; ignoring second init");
        return;
    }

    if let Err(e) = mount::mount(overrides, target) {
        release_init();
        leptos::logging::error!("failed to mount chat widget: {e}");
    }
}

/// Auto-boot on module load so a plain script tag is enough to embed.
/// Hosts that want to pick the moment (or the export) themselves set
/// `mount.auto: false` and call an init function later.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
fn boot() {
    let overrides = config::read_host_config();
    if !overrides.auto_boot() {
        return;
    }
    let target = overrides.mount_target();
    init_with_target(overrides, target);
}
