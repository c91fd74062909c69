use dioxus::prelude::*;

use crate::labels;
use crate::models::FilterField;
use crate::services::{LogbookEvent, LogbookState, dispatch};

#[component]
#[allow(non_snake_case)]
pub fn FilterPanel(state: Signal<LogbookState>) -> Element {
    let (criteria, filtering, visible, total) = {
        let snapshot = state.read();
        (
            snapshot.criteria().clone(),
            snapshot.is_filtering(),
            snapshot.visible().len(),
            snapshot.canonical().len(),
        )
    };

    rsx! {
        div { class: "filter-panel",
            h2 { {labels::FILTER_HEADING} }
            div { class: "filter-grid",
                for field in FilterField::ALL {
                    {render_field(state, field, criteria.get(field).to_string())}
                }
            }
            div { class: "filter-actions",
                button {
                    onclick: move |_| dispatch(state, LogbookEvent::ApplyFilter),
                    {labels::SEARCH}
                }
                button {
                    class: "danger",
                    onclick: move |_| dispatch(state, LogbookEvent::CloseFilterPanel),
                    {labels::CLOSE}
                }
            }
            if filtering {
                div { class: "filter-status", {labels::filter_applied(visible, total)} }
            }
        }
    }
}

fn render_field(state: Signal<LogbookState>, field: FilterField, value: String) -> Element {
    rsx! {
        label { class: "field",
            span { {field_label(field)} }
            input {
                r#type: input_type(field),
                value: value,
                placeholder: field_hint(field),
                oninput: move |evt| {
                    dispatch(
                        state,
                        LogbookEvent::CriteriaEdited {
                            field,
                            value: evt.value(),
                        },
                    )
                },
            }
        }
    }
}

fn field_label(field: FilterField) -> &'static str {
    match field {
        FilterField::EmployeeNumber => labels::FILTER_EMPLOYEE_NUMBER,
        FilterField::CarNumber => labels::FILTER_CAR_NUMBER,
        FilterField::TakenDate => labels::FILTER_DATE,
    }
}

fn field_hint(field: FilterField) -> &'static str {
    match field {
        FilterField::EmployeeNumber => labels::FILTER_EMPLOYEE_NUMBER_HINT,
        FilterField::CarNumber => labels::FILTER_CAR_NUMBER_HINT,
        FilterField::TakenDate => "",
    }
}

fn input_type(field: FilterField) -> &'static str {
    match field {
        FilterField::TakenDate => "date",
        FilterField::EmployeeNumber | FilterField::CarNumber => "text",
    }
}
