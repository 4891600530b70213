use crate::records::RecordRow;
use dioxus::prelude::*;

#[component]
pub fn RecordsTable(
    columns: Vec<String>,
    rows: Vec<RecordRow>,
    on_delete: EventHandler<String>,
) -> Element {
    let body = rows.into_iter().map(|row| {
        let id = row.id.clone();
        rsx! {
            tr { key: "{row.id}",
                for (i, cell) in row.cells.iter().enumerate() {
                    td { key: "{i}", "{cell}" }
                }
                td { class: "actions",
                    button {
                        class: "btn-danger",
                        onclick: move |_| on_delete.call(id.clone()),
                        "Delete"
                    }
                }
            }
        }
    });

    rsx! {
        table { class: "records-table",
            thead {
                tr {
                    for column in columns.iter() {
                        th { key: "{column}", "{column}" }
                    }
                    th { class: "actions" }
                }
            }
            tbody { {body} }
        }
    }
}
