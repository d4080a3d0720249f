// templates/pages/home.rs

use crate::domain::{ActiveView, DeliveryRecord, Summary, Worksheet};
use crate::notices::Notice;
use crate::templates::{
    components::{data_panel, history_bar, notice_list, record_form, record_table, summary_panel},
    desktop_layout,
};
use maud::{html, Markup};

pub struct HomeVm<'a> {
    pub records: &'a [DeliveryRecord],
    pub summary: Summary,
    pub worksheets: &'a [Worksheet],
    pub active: &'a ActiveView,
    pub read_only: bool,
    pub editing: Option<&'a DeliveryRecord>,
    pub known_drivers: Vec<&'a str>,
    pub notices: Vec<Notice>,
    pub ocr_enabled: bool,
}

pub fn home_page(vm: &HomeVm<'_>) -> Markup {
    desktop_layout(
        "Delivery Ledger",
        html! {
            main class="container" {
                (notice_list(&vm.notices))

                (history_bar(vm.worksheets, vm.active, vm.read_only))

                @if !vm.read_only {
                    (record_form(vm.editing, &vm.known_drivers))
                }

                div id="printable-area" {
                    @if vm.read_only {
                        div class="read-only" id="read-only-banner" {
                            "You are viewing an archived worksheet in read-only mode."
                        }
                    }
                    section class="card" {
                        (summary_panel(&vm.summary))
                    }
                    section class="card" {
                        (record_table(vm.records, vm.read_only))
                    }
                }

                (data_panel(vm.ocr_enabled))
            }
        },
    )
}
