pub mod app_bus;
pub mod command_handlers;
pub mod config;
pub mod cqrs;
pub mod queries_handlers;
pub mod repository;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
