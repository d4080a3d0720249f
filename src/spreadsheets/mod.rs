pub mod snapshot_xlsx;

pub use snapshot_xlsx::{export_snapshot_xlsx, snapshot_filename, SNAPSHOT_HEADERS};
