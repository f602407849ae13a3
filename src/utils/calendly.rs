//! Scheduling-widget glue. Opens the Calendly popup when the external
//! widget script (loaded from index.html) is present on `window`, and
//! falls back to opening the event page in a new tab with prefill carried
//! as query parameters.

use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};
use web_sys::Window;

use crate::config::CALENDLY_URL;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalendlyOptions {
    pub email: Option<String>,
    pub name: Option<String>,
    pub source: Option<String>,
}

#[derive(Serialize)]
struct PopupOptions<'a> {
    url: &'a str,
    prefill: Prefill<'a>,
    utm: Utm<'a>,
}

#[derive(Serialize)]
struct Prefill<'a> {
    email: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Utm<'a> {
    utm_source: &'a str,
    utm_medium: &'a str,
    utm_campaign: &'a str,
}

#[derive(Serialize)]
struct SimpleOptions<'a> {
    url: &'a str,
}

/// Opens the consultation popup with optional prefilled contact details.
pub fn open_calendly(options: &CalendlyOptions) {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    match widget_object(&window) {
        Some(widget) => {
            let popup = PopupOptions {
                url: CALENDLY_URL,
                prefill: Prefill {
                    email: options.email.as_deref().unwrap_or(""),
                    name: options.name.as_deref().unwrap_or(""),
                },
                utm: Utm {
                    utm_source: options.source.as_deref().unwrap_or("website"),
                    utm_medium: "popup",
                    utm_campaign: "schedule-consultation",
                },
            };
            if let Ok(popup) = serde_wasm_bindgen::to_value(&popup) {
                init_popup(&widget, &popup);
            }
        }
        None => {
            let _ = window.open_with_url_and_target(&fallback_url(options), "_blank");
        }
    }
}

/// Prompts for an email first so the booking confirmation has somewhere to
/// go, re-prompting on an invalid non-empty entry. Cancel aborts quietly.
pub fn open_calendly_with_email(source: Option<&str>) {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    loop {
        let email = match window
            .prompt_with_message_and_default("Enter your email to receive booking confirmation:", "")
        {
            Ok(Some(email)) => email,
            _ => return,
        };
        if email.contains('@') {
            let name = window
                .prompt_with_message_and_default("Enter your name (optional):", "")
                .ok()
                .flatten()
                .unwrap_or_default();
            open_calendly(&CalendlyOptions {
                email: Some(email),
                name: Some(name),
                source: source.map(str::to_string),
            });
            return;
        }
        let _ = window.alert_with_message(
            "Please enter a valid email address to receive your booking confirmation.",
        );
    }
}

/// Opens the popup without any prefill.
pub fn open_calendly_simple() {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    match widget_object(&window) {
        Some(widget) => {
            if let Ok(popup) = serde_wasm_bindgen::to_value(&SimpleOptions { url: CALENDLY_URL }) {
                init_popup(&widget, &popup);
            }
        }
        None => {
            let _ = window.open_with_url_and_target(CALENDLY_URL, "_blank");
        }
    }
}

/// New-tab URL used when the widget script has not loaded.
pub fn fallback_url(options: &CalendlyOptions) -> String {
    let mut url = CALENDLY_URL.to_string();
    let mut separator = '?';
    if let Some(email) = options.email.as_deref().filter(|email| !email.is_empty()) {
        url.push(separator);
        separator = '&';
        url.push_str("email=");
        url.push_str(&urlencoding::encode(email));
    }
    if let Some(name) = options.name.as_deref().filter(|name| !name.is_empty()) {
        url.push(separator);
        url.push_str("name=");
        url.push_str(&urlencoding::encode(name));
    }
    url
}

fn widget_object(window: &Window) -> Option<JsValue> {
    let widget = Reflect::get(window.as_ref(), &JsValue::from_str("Calendly")).ok()?;
    if widget.is_undefined() || widget.is_null() {
        None
    } else {
        Some(widget)
    }
}

fn init_popup(widget: &JsValue, popup: &JsValue) {
    if let Ok(init) = Reflect::get(widget, &JsValue::from_str("initPopupWidget")) {
        if let Some(init) = init.dyn_ref::<Function>() {
            let _ = init.call1(widget, popup);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_url_without_prefill_is_the_event_url() {
        assert_eq!(fallback_url(&CalendlyOptions::default()), CALENDLY_URL);
        // Empty strings count as absent.
        let empty = CalendlyOptions {
            email: Some(String::new()),
            name: Some(String::new()),
            source: None,
        };
        assert_eq!(fallback_url(&empty), CALENDLY_URL);
    }

    #[test]
    fn fallback_url_encodes_prefill_parameters() {
        let options = CalendlyOptions {
            email: Some("ana+work@example.com".to_string()),
            name: Some("Ana María".to_string()),
            source: Some("contact-page".to_string()),
        };
        let url = fallback_url(&options);
        assert!(url.starts_with(CALENDLY_URL));
        assert!(url.contains("email=ana%2Bwork%40example.com"));
        assert!(url.contains("name=Ana%20Mar%C3%ADa"));
        // Source only feeds UTM data on the popup path, never the URL.
        assert!(!url.contains("contact-page"));
    }

    #[test]
    fn fallback_url_uses_query_then_ampersand_separators() {
        let options = CalendlyOptions {
            email: Some("a@b.com".to_string()),
            name: Some("Ana".to_string()),
            source: None,
        };
        let url = fallback_url(&options);
        assert_eq!(url.matches('?').count(), 1);
        assert_eq!(url.matches('&').count(), 1);

        let name_only = CalendlyOptions {
            email: None,
            name: Some("Ana".to_string()),
            source: None,
        };
        let url = fallback_url(&name_only);
        assert!(url.ends_with("?name=Ana"));
    }
}
