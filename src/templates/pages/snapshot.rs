use crate::domain::{DeliveryRecord, Summary};
use crate::spreadsheets::SNAPSHOT_HEADERS;
use crate::templates::components::summary_panel;
use chrono::{DateTime, Datelike, Utc};
use maud::{html, Markup, DOCTYPE};

/// Self-contained printable page for sharing a worksheet.
pub fn snapshot_page(records: &[DeliveryRecord], summary: &Summary, date: DateTime<Utc>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Delivery worksheet" }
                style {
                    "body { font-family: sans-serif; color: #111827; background: #fff; width: 1200px; padding: 40px; }"
                    "h1 { font-size: 28px; margin: 0; color: #0c4a6e; }"
                    ".stats { display: flex; gap: 16px; margin: 24px 0; }"
                    ".stat { flex: 1; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px; text-align: center; }"
                    ".stat .value { font-size: 24px; font-weight: bold; color: #0284c7; }"
                    "table { width: 100%; border-collapse: collapse; font-size: 14px; }"
                    "th, td { border: 1px solid #d1d5db; padding: 10px 12px; text-align: left; vertical-align: top; }"
                    "tbody tr:nth-child(even) { background: #f9fafb; }"
                    "footer { margin-top: 24px; text-align: center; font-size: 12px; color: #6b7280; }"
                }
            }
            body {
                h1 { "Delivery worksheet" }
                p { (date.format("%d/%m/%Y %H:%M").to_string()) }

                (summary_panel(summary))

                table {
                    thead {
                        tr {
                            @for header in SNAPSHOT_HEADERS {
                                th { (header) }
                            }
                        }
                    }
                    tbody {
                        @for record in records {
                            tr {
                                td { (record.driver_name) }
                                td { (record.zone) }
                                td { @if record.is_substitute { "Yes" } @else { "No" } }
                                td { (record.locations.join(", ")) }
                                td { (record.system_packages) }
                                td { (record.off_system_packages) }
                                td { strong { (record.total_packages()) } }
                            }
                        }
                    }
                }

                footer { "© " (Utc::now().year()) " Delivery Ledger" }
            }
        }
    }
}
