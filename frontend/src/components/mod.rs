pub mod handlers;
pub mod header;
pub mod results;
pub mod style_form;
pub mod upload_section;
pub mod utils;
