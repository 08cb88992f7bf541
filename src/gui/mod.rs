mod app;
mod components;
mod list_view;
mod styles;

pub use app::GameListApp;
