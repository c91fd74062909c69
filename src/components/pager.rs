use dioxus::prelude::*;

use crate::labels;
use crate::services::{LogbookEvent, LogbookState, dispatch};

#[component]
#[allow(non_snake_case)]
pub fn Pager(state: Signal<LogbookState>) -> Element {
    let snapshot = state.read();
    let position = labels::page_position(snapshot.pagination().page_number(), snapshot.page_count());
    let summary = snapshot
        .is_filtering()
        .then(|| labels::filtered_summary(snapshot.visible().len(), snapshot.canonical().len()));
    let can_next = snapshot.can_next();
    let can_previous = snapshot.can_previous();
    drop(snapshot);

    rsx! {
        div { class: "pager",
            span { class: "page-position",
                {position}
                if let Some(summary) = summary {
                    span { class: "filter-summary", " - {summary}" }
                }
            }
            div { class: "pager-buttons",
                button {
                    class: if can_next { "" } else { "disabled" },
                    disabled: !can_next,
                    onclick: move |_| dispatch(state, LogbookEvent::NextPage),
                    {labels::NEXT_PAGE}
                }
                button {
                    class: if can_previous { "" } else { "disabled" },
                    disabled: !can_previous,
                    onclick: move |_| dispatch(state, LogbookEvent::PreviousPage),
                    {labels::PREVIOUS_PAGE}
                }
            }
        }
    }
}
