pub mod config;
pub mod controller;
pub mod event;
pub mod http;
pub mod ui;
pub mod util;
