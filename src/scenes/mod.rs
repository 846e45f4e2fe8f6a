mod term_scatter;

pub use term_scatter::create_term_scene;
