pub mod checker;
pub mod date_window;
pub mod extractor;
pub mod html;
pub mod renderer;
pub mod resolver;
