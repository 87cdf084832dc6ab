pub mod app;
pub mod config;
pub mod cursor;
pub mod dispatch;
pub mod handlers;
pub mod logging;
pub mod modal;
pub mod registry;
pub mod storage;
pub mod ui;
