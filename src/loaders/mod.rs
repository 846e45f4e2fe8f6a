pub mod text;

pub use text::load_source_text;
