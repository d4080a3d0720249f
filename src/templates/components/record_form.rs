use crate::domain::DeliveryRecord;
use maud::{html, Markup};

/// The zone input. Swapped in place by the zone hint route for new records.
pub fn zone_field(value: &str) -> Markup {
    html! {
        div id="zone-field" {
            label for="zone" { "Zone" }
            input type="text" id="zone" name="zone" value=(value) required;
        }
    }
}

/// Create form, or edit form when `editing` is set.
pub fn record_form(editing: Option<&DeliveryRecord>, known_drivers: &[&str]) -> Markup {
    let driver_name = editing.map(|r| r.driver_name.as_str()).unwrap_or("");
    let zone = editing.map(|r| r.zone.as_str()).unwrap_or("");
    let locations = editing.map(|r| r.locations.join(", ")).unwrap_or_default();
    let system = editing.map(|r| r.system_packages).unwrap_or(0);
    let off_system = editing.map(|r| r.off_system_packages).unwrap_or(0);

    html! {
        section class="card" id="record-form" {
            h2 { @if editing.is_some() { "Edit record" } @else { "New record" } }
            form method="post" action="/records" {
                @if let Some(record) = editing {
                    input type="hidden" name="id" value=(record.id);
                }

                label for="driverName" { "Driver" }
                @if editing.is_some() {
                    input type="text" id="driverName" name="driverName" value=(driver_name) list="known-drivers" required;
                } @else {
                    input
                        type="text"
                        id="driverName"
                        name="driverName"
                        value=(driver_name)
                        list="known-drivers"
                        required
                        hx-get="/records/zone-hint"
                        hx-trigger="change"
                        hx-include="#zone"
                        hx-target="#zone-field"
                        hx-swap="outerHTML";
                }
                datalist id="known-drivers" {
                    @for name in known_drivers {
                        option value=(name) {}
                    }
                }

                (zone_field(zone))

                label {
                    input type="checkbox" name="isSubstitute" value="on" checked[editing.is_some_and(|r| r.is_substitute)];
                    " Substitute driver"
                }

                label for="locations" { "Locations (comma separated)" }
                input type="text" id="locations" name="locations" value=(locations);

                label for="systemPackages" { "System packages" }
                input type="number" min="0" id="systemPackages" name="systemPackages" value=(system);

                label for="offSystemPackages" { "Off-system packages" }
                input type="number" min="0" id="offSystemPackages" name="offSystemPackages" value=(off_system);

                @if let Some(record) = editing {
                    p { "Total packages: " strong { (record.total_packages()) } }
                }

                div {
                    a href="/" { "Clear" }
                    " "
                    button type="submit" {
                        @if editing.is_some() { "Update record" } @else { "Save record" }
                    }
                }
            }
        }
    }
}
