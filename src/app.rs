use dioxus::prelude::*;
use time::OffsetDateTime;
use time::macros::format_description;

use crate::components::{ConnectionCheck, LogsView};
use crate::labels;
use crate::services::{LoadPhase, LogbookState, LogsApi, queue_initial_load};
use crate::style::APP_STYLE;

#[component]
#[allow(non_snake_case)]
pub fn App() -> Element {
    let api = use_context::<LogsApi>();
    let logbook = use_signal(LogbookState::default);
    let mut show_diagnostics = use_signal(|| false);

    use_hook(move || queue_initial_load(api, logbook));

    let last_updated = match logbook.read().phase() {
        LoadPhase::Loaded { fetched_at } => clock_label(*fetched_at),
        _ => None,
    };
    let diagnostics_open = *show_diagnostics.read();
    let diagnostics_label = if diagnostics_open {
        labels::BACK_TO_LOGS
    } else {
        labels::CONNECTION_CHECK
    };

    rsx! {
        style { {APP_STYLE} }
        div { class: "app", dir: "rtl",
            header {
                h1 { {labels::PAGE_TITLE} }
                div { class: "header-meta",
                    if let Some(stamp) = last_updated {
                        span { class: "helper", {format!("{}: {stamp} UTC", labels::LAST_UPDATED)} }
                    }
                    button {
                        class: "secondary",
                        onclick: move |_| {
                            let next = !*show_diagnostics.read();
                            show_diagnostics.set(next);
                        },
                        {diagnostics_label}
                    }
                }
            }
            main {
                div { class: "card",
                    if diagnostics_open {
                        ConnectionCheck {}
                    } else {
                        LogsView { state: logbook }
                    }
                }
            }
        }
    }
}

fn clock_label(at: OffsetDateTime) -> Option<String> {
    at.format(format_description!("[hour]:[minute]")).ok()
}
