//! Widget configuration: built-in defaults plus host-page overrides.
//!
//! The host page may define a global `ChatWidgetConfig` object before the
//! widget script loads. That object is read exactly once at mount time and
//! shallow-merged onto the built-in defaults, group by group. Unknown fields
//! are ignored; anything missing falls back to the default value.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Fully resolved widget configuration. Immutable after resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetConfig {
    pub webhook: WebhookConfig,
    pub branding: BrandingConfig,
    pub style: StyleTokens,
}

/// Webhook endpoint settings and the wire protocol to speak to it.
#[derive(Clone, Debug, PartialEq)]
pub struct WebhookConfig {
    pub url: String,
    pub route: String,
    pub protocol: PayloadProtocol,
}

/// Which request shape the webhook expects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadProtocol {
    /// Plain `{route, message}` body.
    #[default]
    Simple,
    /// n8n-style `sendMessage` body carrying a session id.
    Session,
}

/// Branding shown in the header, welcome message, and footer.
#[derive(Clone, Debug, PartialEq)]
pub struct BrandingConfig {
    pub logo: String,
    pub name: String,
    pub welcome_text: String,
    pub response_time_text: String,
    pub powered_by: Option<PoweredBy>,
}

/// Optional attribution link rendered in the panel footer.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoweredBy {
    pub text: String,
    pub link: String,
}

/// Color and placement tokens fed to the style injector.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleTokens {
    pub primary_color: String,
    pub secondary_color: String,
    pub position: PanelPosition,
    pub background_color: String,
    pub font_color: String,
}

/// Which side of the viewport the widget anchors to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelPosition {
    #[default]
    Right,
    Left,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            webhook: WebhookConfig {
                url: String::new(),
                route: "general".to_owned(),
                protocol: PayloadProtocol::Simple,
            },
            branding: BrandingConfig {
                logo: String::new(),
                name: String::new(),
                welcome_text: "Hi 👋, how can we help?".to_owned(),
                response_time_text: "We typically respond right away".to_owned(),
                powered_by: None,
            },
            style: StyleTokens {
                primary_color: "#854fff".to_owned(),
                secondary_color: "#6b3fd4".to_owned(),
                position: PanelPosition::Right,
                background_color: "#ffffff".to_owned(),
                font_color: "#333333".to_owned(),
            },
        }
    }
}

impl WidgetConfig {
    /// Merge host overrides onto the defaults, field by field per group.
    pub fn resolve(overrides: ConfigOverrides) -> Self {
        let mut config = Self::default();

        if let Some(webhook) = overrides.webhook {
            if let Some(url) = webhook.url {
                config.webhook.url = url;
            }
            if let Some(route) = webhook.route {
                config.webhook.route = route;
            }
            if let Some(protocol) = webhook.protocol {
                config.webhook.protocol = protocol;
            }
        }

        if let Some(branding) = overrides.branding {
            if let Some(logo) = branding.logo {
                config.branding.logo = logo;
            }
            if let Some(name) = branding.name {
                config.branding.name = name;
            }
            if let Some(welcome_text) = branding.welcome_text {
                config.branding.welcome_text = welcome_text;
            }
            if let Some(response_time_text) = branding.response_time_text {
                config.branding.response_time_text = response_time_text;
            }
            if let Some(powered_by) = branding.powered_by {
                config.branding.powered_by = Some(powered_by);
            }
        }

        if let Some(style) = overrides.style {
            if let Some(primary_color) = style.primary_color {
                config.style.primary_color = primary_color;
            }
            if let Some(secondary_color) = style.secondary_color {
                config.style.secondary_color = secondary_color;
            }
            if let Some(position) = style.position {
                config.style.position = position;
            }
            if let Some(background_color) = style.background_color {
                config.style.background_color = background_color;
            }
            if let Some(font_color) = style.font_color {
                config.style.font_color = font_color;
            }
        }

        config
    }
}

/// Partial configuration as supplied by the host page. Every field is
/// optional; unknown fields are dropped during deserialization.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    pub webhook: Option<WebhookOverrides>,
    pub branding: Option<BrandingOverrides>,
    pub style: Option<StyleOverrides>,
    pub mount: Option<MountOverrides>,
}

impl ConfigOverrides {
    /// Mount target requested by the host page, defaulting to the overlay.
    pub fn mount_target(&self) -> crate::mount::MountTarget {
        self.mount.as_ref().and_then(|m| m.target).unwrap_or_default()
    }

    /// Whether the widget should mount itself on module load. Hosts that
    /// want to call an init export themselves set `mount.auto: false`.
    pub fn auto_boot(&self) -> bool {
        self.mount.as_ref().and_then(|m| m.auto).unwrap_or(true)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookOverrides {
    pub url: Option<String>,
    pub route: Option<String>,
    pub protocol: Option<PayloadProtocol>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingOverrides {
    pub logo: Option<String>,
    pub name: Option<String>,
    pub welcome_text: Option<String>,
    pub response_time_text: Option<String>,
    pub powered_by: Option<PoweredBy>,
}

/// How and when the widget attaches to the host page.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MountOverrides {
    pub target: Option<crate::mount::MountTarget>,
    pub auto: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleOverrides {
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub position: Option<PanelPosition>,
    pub background_color: Option<String>,
    pub font_color: Option<String>,
}

/// Read the `ChatWidgetConfig` global from the host page, if present.
///
/// A missing global yields empty overrides; a malformed one is logged and
/// likewise treated as empty so a bad host config never breaks the page.
pub fn read_host_config() -> ConfigOverrides {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return ConfigOverrides::default();
        };

        let key = wasm_bindgen::JsValue::from_str("ChatWidgetConfig");
        let Ok(value) = js_sys::Reflect::get(&window, &key) else {
            return ConfigOverrides::default();
        };
        if value.is_undefined() || value.is_null() {
            return ConfigOverrides::default();
        }

        let Ok(json) = js_sys::JSON::stringify(&value) else {
            leptos::logging::warn!("ChatWidgetConfig is not serializable; using defaults");
            return ConfigOverrides::default();
        };
        let json = String::from(json);

        match serde_json::from_str::<ConfigOverrides>(&json) {
            Ok(overrides) => overrides,
            Err(e) => {
                leptos::logging::warn!("invalid ChatWidgetConfig: {e}");
                ConfigOverrides::default()
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        ConfigOverrides::default()
    }
}
