pub mod assets;
pub mod catalog;
pub mod config;
pub mod pdf;
pub mod routes;
pub mod state;
pub mod templates;
pub mod theme;
