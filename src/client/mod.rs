pub mod api;
pub mod app;
pub mod component;
pub mod constant;
pub mod i18n;
pub mod model;
pub mod route;
pub mod router;

pub use app::App;
