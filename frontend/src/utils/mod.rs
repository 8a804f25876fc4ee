pub mod csv_export;
pub mod download;
pub mod format;
pub mod reload;
pub mod storage;
pub mod time;
pub mod validation;

pub use download::{print_page, trigger_csv_download};
