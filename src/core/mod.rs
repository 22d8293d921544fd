// src/core/mod.rs
//! Backend access and configuration

pub mod backend;
pub mod config_manager;
pub mod service_client;

pub use backend::ResumeBackend;
pub use config_manager::{ConfigManager, ServiceConfig, ServiceOverrides};
pub use service_client::ServiceClient;
