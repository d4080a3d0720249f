use crate::domain::TitularDriver;
use crate::notices::Notice;
use crate::templates::{components::notice_list, desktop_layout};
use maud::{html, Markup};

pub fn drivers_page(
    drivers: &[TitularDriver],
    editing: Option<&TitularDriver>,
    notices: &[Notice],
) -> Markup {
    let name = editing.map(|d| d.name.as_str()).unwrap_or("");
    let zone = editing.map(|d| d.zone.as_str()).unwrap_or("");

    desktop_layout(
        "Titular drivers",
        html! {
            main class="container" {
                (notice_list(notices))
                h1 { "Titular drivers" }

                section class="card" id="driver-form" {
                    h2 { @if editing.is_some() { "Edit driver" } @else { "Add driver" } }
                    form method="post" action="/drivers" {
                        @if let Some(driver) = editing {
                            input type="hidden" name="id" value=(driver.id);
                        }
                        label for="name" { "Name" }
                        input type="text" id="name" name="name" value=(name) required;
                        label for="zone" { "Default zone" }
                        input type="text" id="zone" name="zone" value=(zone) required;
                        button type="submit" {
                            @if editing.is_some() { "Update" } @else { "Save driver" }
                        }
                        @if editing.is_some() {
                            " "
                            a href="/drivers" { "Cancel edit" }
                        }
                    }
                }

                section class="card" id="driver-list" {
                    @if drivers.is_empty() {
                        p class="empty" { "No titular drivers registered." }
                    } @else {
                        ul {
                            @for driver in drivers {
                                li {
                                    strong { (driver.name) } " - " (driver.zone)
                                    " "
                                    a href=(format!("/drivers?edit={}", driver.id)) { "Edit" }
                                    " "
                                    form
                                        class="inline"
                                        method="post"
                                        action=(format!("/drivers/{}/delete", driver.id))
                                        onsubmit="return confirm('Delete this titular driver?')"
                                    {
                                        button type="submit" { "Delete" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
