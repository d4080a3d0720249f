use crate::domain::DeliveryRecord;
use maud::{html, Markup};

/// Records of the active view. Row actions are omitted when read-only.
pub fn record_table(records: &[DeliveryRecord], read_only: bool) -> Markup {
    html! {
        @if records.is_empty() {
            p class="empty" id="records-empty" { "No records on this worksheet yet." }
        } @else {
            table class="records" id="records" {
                thead {
                    tr {
                        th { "Driver" }
                        th { "Zone" }
                        th { "Substitute" }
                        th { "Locations" }
                        th { "System" }
                        th { "Off-system" }
                        th { "Total" }
                        @if !read_only {
                            th { "Actions" }
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
                            @if !read_only {
                                td {
                                    a href=(format!("/?edit={}", record.id)) { "Edit" }
                                    " "
                                    form
                                        class="inline"
                                        method="post"
                                        action=(format!("/records/{}/delete", record.id))
                                        onsubmit="return confirm('Delete this record?')"
                                    {
                                        button type="submit" { "Delete" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
