use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use crate::api::{ContactMessage, FormRelayClient};
use crate::components::{Icon, SiteRoute};
use crate::config::site_config;

const SEND_LABEL: &str = "Send Message";
const SENDING_LABEL: &str = "Sending...";

/// Shows a blocking alert; only the browser has one.
fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        warn!("{message}");
    }
}

#[component]
pub fn ContactForm() -> Element {
    let navigator = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut sending = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if sending() {
            return;
        }
        let submission = ContactMessage {
            name: name(),
            email: email(),
            message: message(),
        };
        sending.set(true);
        spawn(async move {
            let contact = site_config().contact.clone();
            let failure_message = contact.failure_message();
            let client = FormRelayClient::new(contact);
            match client.submit(&submission).await {
                Ok(()) => {
                    info!("contact form submitted");
                    navigator.push(SiteRoute::ThankYou {});
                }
                Err(err) => {
                    warn!("contact form submission failed: {err}");
                    alert(&failure_message);
                    sending.set(false);
                }
            }
        });
    };

    let input_class = "w-full rounded-lg border border-zinc-800 bg-zinc-900 px-4 py-3 text-white placeholder-zinc-500 focus:border-amber-500 focus:outline-none";

    rsx! {
        form { id: "contactForm", class: "flex flex-col gap-4", onsubmit: on_submit,
            input {
                r#type: "text",
                name: "name",
                placeholder: "Your name",
                required: true,
                class: input_class,
                value: "{name}",
                oninput: move |e| name.set(e.value()),
            }
            input {
                r#type: "email",
                name: "email",
                placeholder: "Your email",
                required: true,
                class: input_class,
                value: "{email}",
                oninput: move |e| email.set(e.value()),
            }
            textarea {
                name: "message",
                placeholder: "Your message",
                rows: "5",
                required: true,
                class: input_class,
                value: "{message}",
                oninput: move |e| message.set(e.value()),
            }
            button {
                r#type: "submit",
                class: "submit-button flex items-center justify-center gap-2 rounded-lg bg-amber-600 px-6 py-3 font-medium text-zinc-950 hover:bg-amber-500 disabled:opacity-60 transition-colors",
                disabled: sending(),
                if sending() {
                    Icon { name: "loader".to_string(), class: "w-4 h-4".to_string() }
                    "{SENDING_LABEL}"
                } else {
                    Icon { name: "mail".to_string(), class: "w-4 h-4".to_string() }
                    "{SEND_LABEL}"
                }
            }
        }
    }
}
