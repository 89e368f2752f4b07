//! Command handlers for the headless subcommands.

pub mod auth;
pub mod config;
pub mod feed;
