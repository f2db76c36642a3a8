pub mod config;
pub mod segment;
pub mod to_doc;
pub mod to_html;
