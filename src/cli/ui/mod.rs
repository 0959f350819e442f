pub mod banner;
pub mod table_renderer;
