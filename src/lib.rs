pub mod core {
    pub mod commands;
    pub mod config;
    pub mod error;
    pub mod startup;
    pub mod state;
    pub mod tracing_init;
}

pub mod api;
pub mod handlers;
pub mod models;
pub mod stores;
pub mod utils;
