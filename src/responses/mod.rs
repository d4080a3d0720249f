pub mod download;
pub mod errors;
pub mod html;
pub mod redirect;

pub use errors::{error_to_response, ResultResp};

pub use download::{json_download_response, xlsx_response};
pub use html::{html_response, text_response};
pub use redirect::redirect;
