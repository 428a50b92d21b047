// ABOUTME: Bikelinks server and command line entry points
// ABOUTME: Configuration, logging, router assembly and maintenance commands

pub mod api;
pub mod commands;
pub mod config;
pub mod logging;
pub mod server;

#[cfg(test)]
mod tests;
