pub mod drivers;
pub mod home;
pub mod snapshot;

pub use drivers::drivers_page;
pub use home::{home_page, HomeVm};
pub use snapshot::snapshot_page;
