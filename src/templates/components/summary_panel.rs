use crate::domain::Summary;
use maud::{html, Markup};

fn stat(label: &str, value: impl maud::Render) -> Markup {
    html! {
        div class="stat" {
            div class="value" { (value) }
            div class="label" { (label) }
        }
    }
}

pub fn summary_panel(summary: &Summary) -> Markup {
    html! {
        div class="stats" id="summary" {
            (stat("Drivers", summary.driver_count))
            (stat("Substitutes", summary.substitute_count))
            (stat("System pkgs", summary.system_package_total))
            (stat("Off-system pkgs", summary.off_system_package_total))
            (stat("Total pkgs", summary.total_package_count))
        }
    }
}
