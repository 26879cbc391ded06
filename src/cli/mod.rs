//! CLI module for the user service
//!
//! `serve` (the default) runs the HTTP API.

pub mod serve;

use clap::{Parser, Subcommand};

/// User Service - in-memory CRUD API for user records
#[derive(Parser)]
#[command(name = "user-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server (default)
    Serve(serve::ServeArgs),
}

impl Default for Command {
    fn default() -> Self {
        Self::Serve(serve::ServeArgs::default())
    }
}
