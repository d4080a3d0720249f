use crate::domain::{ActiveView, Worksheet};
use maud::{html, Markup};

pub fn worksheet_label(ws: &Worksheet) -> String {
    format!("History: {}", ws.date.format("%d/%m/%Y %H:%M"))
}

/// View selector, snapshot downloads and the archive button.
pub fn history_bar(worksheets: &[Worksheet], active: &ActiveView, read_only: bool) -> Markup {
    html! {
        section class="card" id="history" {
            form method="post" action="/view" class="inline" {
                label for="view" { "View worksheet: " }
                select id="view" name="view" onchange="this.form.submit()" {
                    option value="current" selected[*active == ActiveView::Current] { "Current worksheet (editable)" }
                    @for ws in worksheets {
                        option value=(ws.id) selected[active.as_param() == ws.id] { (worksheet_label(ws)) }
                    }
                }
                noscript { button type="submit" { "Show" } }
            }
            " "
            a href="/snapshot" target="_blank" { "Printable snapshot" }
            " "
            a href="/snapshot.xlsx" { "Download XLSX" }
            " "
            form method="post" action="/worksheets/archive" class="inline" {
                button type="submit" disabled[read_only] { "Archive current worksheet" }
            }
        }
    }
}
