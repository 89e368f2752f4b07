//! Full-screen TUI for feedline.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod route;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
use feedline_core::config::Config;
pub use features::{feed, login};
pub use route::Route;
pub use runtime::TuiRuntime;

/// Runs the interactive client until the user quits.
pub async fn run_app(config: &Config, initial_route: Route) -> Result<()> {
    // The TUI needs a real terminal to render into.
    if !stderr().is_terminal() {
        anyhow::bail!(
            "feedline requires a terminal.\n\
             Use `feedline feed pull` for non-interactive output."
        );
    }

    let mut runtime = TuiRuntime::new(config.clone(), initial_route)?;
    runtime.run()
}
