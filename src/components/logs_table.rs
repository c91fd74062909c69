use dioxus::prelude::*;

use crate::services::LogbookState;
use crate::table::{Column, TableBody};

#[component]
#[allow(non_snake_case)]
pub fn LogsTable(state: Signal<LogbookState>) -> Element {
    let body = TableBody::for_page(state.read().current_page());

    rsx! {
        div { class: "table-wrap",
            table { class: "logs-table",
                thead {
                    tr {
                        for column in Column::ALL {
                            th { key: "{column.key()}", {column.header()} }
                        }
                    }
                }
                tbody {
                    {match body {
                        TableBody::Empty { colspan, message } => rsx! {
                            tr {
                                td { class: "empty-row", colspan: "{colspan}", {message} }
                            }
                        },
                        TableBody::Rows(rows) => rsx! {
                            for (position, row) in rows.into_iter().enumerate() {
                                tr {
                                    key: "{position}",
                                    class: if row.outstanding { "outstanding" } else { "" },
                                    for cell in row.cells {
                                        td { "{cell}" }
                                    }
                                }
                            }
                        },
                    }}
                }
            }
        }
    }
}
