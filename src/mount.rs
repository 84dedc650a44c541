//! Mounting the widget into a host page.
//!
//! Two targets cover the common deployment modes: a plain overlay whose
//! stylesheet goes into the document head, and an isolated host whose DOM
//! and styles live inside an open shadow root so host CSS cannot leak in.

use crate::config::ConfigOverrides;

/// Where the widget attaches on the host page. Selectable from the host
/// config as `mount.target: "overlay" | "shadow"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MountTarget {
    /// Container appended to `document.body`, styles in the document head.
    #[default]
    Overlay,
    /// Container inside an open shadow root on a dedicated host element.
    #[serde(rename = "shadow")]
    ShadowHost,
}

/// Resolve the config, inject the stylesheet, and mount the Leptos tree.
///
/// # Errors
///
/// Returns an error string when the document is unavailable or a DOM
/// operation fails. The host element is removed again on failure so the
/// page is left as it was found.
#[cfg(feature = "csr")]
pub fn mount(overrides: ConfigOverrides, target: MountTarget) -> Result<(), String> {
    use crate::config::WidgetConfig;

    let config = WidgetConfig::resolve(overrides);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document available".to_owned())?;
    let body = document.body().ok_or_else(|| "document has no body".to_owned())?;

    let host = document
        .create_element("div")
        .map_err(|_| "failed to create host element".to_owned())?;
    host.set_id("chat-widget-host");
    body.append_child(&host)
        .map_err(|_| "failed to attach host element".to_owned())?;

    if let Err(e) = mount_into_host(&document, &host, target, config) {
        host.remove();
        return Err(e);
    }

    Ok(())
}

/// Everything after the host element is attached; kept separate so a
/// failure lets the caller unwind the host element.
#[cfg(feature = "csr")]
fn mount_into_host(
    document: &web_sys::Document,
    host: &web_sys::Element,
    target: MountTarget,
    config: crate::config::WidgetConfig,
) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    use crate::app::ChatWidget;
    use crate::theme::{self, StyleTarget};

    let css = theme::stylesheet(&config.style);

    let parent: web_sys::HtmlElement = match target {
        MountTarget::Overlay => {
            theme::inject(&StyleTarget::DocumentHead, &css)?;
            host.clone()
                .dyn_into()
                .map_err(|_| "host element is not an HtmlElement".to_owned())?
        }
        MountTarget::ShadowHost => {
            let shadow = host
                .attach_shadow(&web_sys::ShadowRootInit::new(web_sys::ShadowRootMode::Open))
                .map_err(|_| "failed to attach shadow root".to_owned())?;
            theme::inject(&StyleTarget::ShadowRoot(&shadow), &css)?;

            let inner = document
                .create_element("div")
                .map_err(|_| "failed to create shadow container".to_owned())?;
            shadow
                .append_child(&inner)
                .map_err(|_| "failed to attach shadow container".to_owned())?;
            inner
                .dyn_into()
                .map_err(|_| "shadow container is not an HtmlElement".to_owned())?
        }
    };

    leptos::mount::mount_to(parent, move || {
        leptos::view! { <ChatWidget config=config/> }
    })
    .forget();

    Ok(())
}
