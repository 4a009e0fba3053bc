mod server;

pub use server::{PORT, PreviewOptions, start_preview_web_server};
