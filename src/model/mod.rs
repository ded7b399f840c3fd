pub mod browser;
pub mod config;
pub mod form;
pub mod mode;
pub mod theme;
