use dioxus::prelude::*;

use crate::services::diagnostics::TROUBLESHOOTING_HINTS;
use crate::services::{LogsApi, ProbeReport, probe_logs_endpoint};

#[component]
#[allow(non_snake_case)]
pub fn ConnectionCheck() -> Element {
    let api = use_context::<LogsApi>();
    let report = use_signal(|| Option::<ProbeReport>::None);
    let running = use_signal(|| false);

    let initial_api = api.clone();
    use_hook(move || run_probe(initial_api, report, running));

    let is_running = *running.read();
    let current = { report.read().clone() };
    let (status_class, status_text) = match (&current, is_running) {
        (_, true) => ("pending", String::from("Making request to API...")),
        (Some(report), false) if report.succeeded() => ("ok", report.summary()),
        (Some(report), false) => ("warn", report.summary()),
        (None, false) => ("pending", String::from("Checking API connection...")),
    };
    let body = current.as_ref().and_then(|report| report.body.clone());
    let target = current
        .as_ref()
        .map(|report| report.url.clone())
        .unwrap_or_else(|| api.config().base_url.to_string());

    rsx! {
        div { class: "diagnostics", dir: "ltr",
            h2 { "API Connection Test" }
            p { class: "helper", "Target: {target}" }
            div { class: "probe-status {status_class}", "{status_text}" }
            if let Some(body) = body {
                div { class: "probe-body",
                    div { class: "probe-label", "API Response Data:" }
                    pre { "{body}" }
                }
            }
            button {
                disabled: is_running,
                onclick: move |_| run_probe(api.clone(), report, running),
                "Run again"
            }
            div { class: "hints",
                h3 { "Troubleshooting Tips:" }
                ul {
                    for hint in TROUBLESHOOTING_HINTS {
                        li { "{hint}" }
                    }
                }
            }
        }
    }
}

fn run_probe(api: LogsApi, mut report: Signal<Option<ProbeReport>>, mut running: Signal<bool>) {
    running.set(true);
    spawn(async move {
        let outcome = probe_logs_endpoint(&api).await;
        report.set(Some(outcome));
        running.set(false);
    });
}
