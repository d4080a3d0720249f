use crate::notices::Notice;
use maud::{html, Markup};

pub fn notice_list(notices: &[Notice]) -> Markup {
    html! {
        @if !notices.is_empty() {
            div id="notices" role="status" {
                @for notice in notices {
                    div class=(notice.kind.css_class()) { (notice.message) }
                }
            }
        }
    }
}
