pub mod app;
pub mod document;
pub mod event;
pub mod widgets;

pub use app::App;
pub use document::Document;
