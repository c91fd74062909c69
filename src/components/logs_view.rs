use dioxus::prelude::*;

use crate::components::{FilterPanel, LogsTable, Pager};
use crate::labels;
use crate::services::{LoadPhase, LogbookEvent, LogbookState, dispatch};

#[component]
#[allow(non_snake_case)]
pub fn LogsView(state: Signal<LogbookState>) -> Element {
    let (phase, filtering, visible_count, panel_open) = {
        let snapshot = state.read();
        (
            snapshot.phase().clone(),
            snapshot.is_filtering(),
            snapshot.visible().len(),
            snapshot.is_panel_open(),
        )
    };

    match phase {
        LoadPhase::Loading => {
            return rsx! {
                div { class: "status-message", {labels::LOADING} }
            };
        }
        LoadPhase::Failed => {
            return rsx! {
                div { class: "status-message error", {labels::LOAD_FAILED} }
            };
        }
        LoadPhase::Loaded { .. } => {}
    }

    let toggle_class = if filtering { "toggle active" } else { "toggle" };
    let toggle_label = if filtering {
        labels::FILTERS_ACTIVE
    } else {
        labels::SHOW_FILTERS
    };

    rsx! {
        div { class: "logs-view",
            div { class: "toolbar",
                button {
                    class: toggle_class,
                    onclick: move |_| dispatch(state, LogbookEvent::ToggleFilterPanel),
                    {toggle_label}
                    if filtering {
                        span { class: "badge", "{visible_count}" }
                    }
                }
                button {
                    class: "secondary",
                    onclick: move |_| dispatch(state, LogbookEvent::ResetFilter),
                    {labels::SHOW_ALL}
                }
            }
            if panel_open {
                FilterPanel { state }
            }
            LogsTable { state }
            Pager { state }
        }
    }
}
