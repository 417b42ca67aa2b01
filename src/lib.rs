pub mod backend;
pub mod config;
pub mod controller;
pub mod kitchen;
pub mod logging;
pub mod mvi;
