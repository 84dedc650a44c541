use super::*;

fn tokens() -> StyleTokens {
    StyleTokens {
        primary_color: "#102030".to_owned(),
        secondary_color: "#405060".to_owned(),
        position: crate::config::PanelPosition::Right,
        background_color: "#fffefd".to_owned(),
        font_color: "#010203".to_owned(),
    }
}

#[test]
fn stylesheet_defines_custom_properties_from_tokens() {
    let css = stylesheet(&tokens());
    assert!(css.contains("--chat-widget-primary-color: #102030;"));
    assert!(css.contains("--chat-widget-secondary-color: #405060;"));
    assert!(css.contains("--chat-widget-background-color: #fffefd;"));
    assert!(css.contains("--chat-widget-font-color: #010203;"));
}

#[test]
fn stylesheet_covers_structural_classes() {
    let css = stylesheet(&tokens());
    for class in [
        ".chat-widget__launcher",
        ".chat-widget__panel",
        ".chat-widget__header",
        ".chat-widget__messages",
        ".chat-widget__message--user",
        ".chat-widget__message--bot",
        ".chat-widget__typing",
        ".chat-widget__input-row",
        ".chat-widget__footer",
        ".chat-widget--left",
    ] {
        assert!(css.contains(class), "missing rule for {class}");
    }
}

#[test]
fn stylesheet_keeps_var_fallbacks() {
    let css = stylesheet(&tokens());
    assert!(css.contains("var(--chat-widget-primary-color, #854fff)"));
    assert!(css.contains("var(--chat-widget-background-color, #ffffff)"));
}
