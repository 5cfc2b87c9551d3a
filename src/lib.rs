//! HAK Empire front door
//!
//! A server-rendered landing page wrapped in a root document layout, served
//! over Axum together with the health endpoint the page links to.
//!
//! # Modules
//!
//! - [`config`]: layered configuration (defaults, file, env, CLI)
//! - [`health`]: liveness endpoint
//! - [`server`]: router and server startup
//! - [`ui`]: maud layout, pages, and components

pub mod config;
pub mod health;
pub mod server;
pub mod ui;

use crate::config::AppConfig;
use crate::ui::RootLayout;

use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Global Configuration
    pub config: Arc<AppConfig>,
    /// Document shell built once from configuration.
    pub layout: Arc<RootLayout>,
}

impl AppState {
    /// Build shared state, building the layout once from `config`.
    pub fn new(config: Arc<AppConfig>) -> Self {
        let layout = Arc::new(config.root_layout());
        Self { config, layout }
    }
}
