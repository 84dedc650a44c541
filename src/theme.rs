//! Stylesheet construction and injection.
//!
//! The resolved style tokens become CSS custom properties on the widget
//! container; the structural rules below reference them with `var()`
//! fallbacks. Injection targets either the document head (page overlay) or
//! a shadow root (isolated mount).

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::StyleTokens;

/// Build the widget stylesheet from the resolved tokens.
pub fn stylesheet(style: &StyleTokens) -> String {
    format!(
        r#"
.chat-widget {{
    --chat-widget-primary-color: {primary};
    --chat-widget-secondary-color: {secondary};
    --chat-widget-background-color: {background};
    --chat-widget-font-color: {font};
    position: fixed;
    bottom: 20px;
    right: 20px;
    z-index: 1000;
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
}}

.chat-widget--left {{
    left: 20px;
    right: auto;
}}

.chat-widget__launcher {{
    background-color: var(--chat-widget-primary-color, #854fff);
    color: #ffffff;
    border: none;
    border-radius: 50%;
    width: 60px;
    height: 60px;
    display: flex;
    justify-content: center;
    align-items: center;
    cursor: pointer;
    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    font-size: 24px;
}}

.chat-widget__panel {{
    position: absolute;
    bottom: 75px;
    right: 0;
    width: 350px;
    height: 500px;
    display: flex;
    flex-direction: column;
    background-color: var(--chat-widget-background-color, #ffffff);
    color: var(--chat-widget-font-color, #333333);
    border-radius: 10px;
    box-shadow: 0 0 10px rgba(0, 0, 0, 0.2);
    overflow: hidden;
}}

.chat-widget--left .chat-widget__panel {{
    left: 0;
    right: auto;
}}

.chat-widget__header {{
    background-color: var(--chat-widget-primary-color, #854fff);
    color: #ffffff;
    padding: 15px;
    display: flex;
    align-items: center;
    gap: 10px;
}}

.chat-widget__logo {{
    width: 30px;
    height: 30px;
    border-radius: 50%;
}}

.chat-widget__title {{
    display: flex;
    flex-direction: column;
    flex-grow: 1;
}}

.chat-widget__name {{
    font-weight: 600;
}}

.chat-widget__subtitle {{
    font-size: 0.75em;
    opacity: 0.85;
}}

.chat-widget__close {{
    background: none;
    border: none;
    color: #ffffff;
    font-size: 20px;
    cursor: pointer;
    margin-left: auto;
}}

.chat-widget__messages {{
    flex-grow: 1;
    padding: 10px;
    overflow-y: auto;
    display: flex;
    flex-direction: column;
    gap: 10px;
}}

.chat-widget__message {{
    padding: 8px 12px;
    border-radius: 20px;
    max-width: 80%;
    white-space: pre-wrap;
    word-break: break-word;
}}

.chat-widget__message--user {{
    background-color: var(--chat-widget-secondary-color, #6b3fd4);
    color: #ffffff;
    align-self: flex-end;
}}

.chat-widget__message--bot {{
    background-color: #f0f0f0;
    color: var(--chat-widget-font-color, #333333);
    align-self: flex-start;
}}

.chat-widget__typing {{
    align-self: flex-start;
    padding: 8px 12px;
}}

.chat-widget__typing span {{
    display: inline-block;
    width: 6px;
    height: 6px;
    margin-right: 3px;
    border-radius: 50%;
    background-color: var(--chat-widget-font-color, #333333);
    opacity: 0.4;
    animation: chat-widget-typing 1s infinite;
}}

.chat-widget__typing span:nth-child(2) {{
    animation-delay: 0.2s;
}}

.chat-widget__typing span:nth-child(3) {{
    animation-delay: 0.4s;
}}

@keyframes chat-widget-typing {{
    0%, 100% {{ opacity: 0.4; transform: translateY(0); }}
    50% {{ opacity: 1; transform: translateY(-3px); }}
}}

.chat-widget__input-row {{
    padding: 10px;
    border-top: 1px solid #e0e0e0;
    display: flex;
    gap: 10px;
}}

.chat-widget__input {{
    flex-grow: 1;
    border: 1px solid #ccc;
    border-radius: 5px;
    padding: 8px;
    outline: none;
    font: inherit;
}}

.chat-widget__send {{
    background-color: var(--chat-widget-primary-color, #854fff);
    color: #ffffff;
    border: none;
    border-radius: 5px;
    padding: 10px 15px;
    cursor: pointer;
}}

.chat-widget__send:disabled {{
    opacity: 0.5;
    cursor: default;
}}

.chat-widget__footer {{
    padding: 10px;
    text-align: center;
    font-size: 0.8em;
}}

.chat-widget__footer a {{
    color: var(--chat-widget-primary-color, #854fff);
    text-decoration: none;
}}
"#,
        primary = style.primary_color,
        secondary = style.secondary_color,
        background = style.background_color,
        font = style.font_color,
    )
}

/// Where the generated stylesheet should be inserted.
#[cfg(feature = "csr")]
pub enum StyleTarget<'a> {
    DocumentHead,
    ShadowRoot(&'a web_sys::ShadowRoot),
}

/// Insert a `<style>` element carrying `css` into the given target.
///
/// # Errors
///
/// Returns an error string when no document is available or the element
/// cannot be created/attached.
#[cfg(feature = "csr")]
pub fn inject(target: &StyleTarget<'_>, css: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document available".to_owned())?;

    let style_el = document
        .create_element("style")
        .map_err(|_| "failed to create style element".to_owned())?;
    style_el.set_text_content(Some(css));

    match target {
        StyleTarget::DocumentHead => {
            let head = document.head().ok_or_else(|| "document has no head".to_owned())?;
            head.append_child(&style_el)
                .map_err(|_| "failed to attach stylesheet".to_owned())?;
        }
        StyleTarget::ShadowRoot(root) => {
            root.append_child(&style_el)
                .map_err(|_| "failed to attach stylesheet".to_owned())?;
        }
    }

    Ok(())
}
