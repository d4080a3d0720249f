pub mod data_panel;
pub mod error;
pub mod history_bar;
pub mod notices;
pub mod record_form;
pub mod record_table;
pub mod summary_panel;

pub use data_panel::data_panel;
pub use error::error_page;
pub use history_bar::history_bar;
pub use notices::notice_list;
pub use record_form::{record_form, zone_field};
pub use record_table::record_table;
pub use summary_panel::summary_panel;
