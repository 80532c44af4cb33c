//! Application configuration domain model

mod queue_config;

pub use queue_config::QueueConfig;
