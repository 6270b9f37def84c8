//! Terminal donut runner (default binary).
//!
//! Reads the torus size, then spins it until `q`, `Esc` or Ctrl-C.
//! Configuration comes from `DONUT_*` environment variables; logging goes to
//! stderr and is controlled by `RUST_LOG`.

use std::io;
use std::time::Duration;

use anyhow::Result;

use ascii_donut::engine::{AnimationConfig, AnimationLoop, CancelToken};
use ascii_donut::input::{read_torus_size, wait_for_quit};
use ascii_donut::term::{terminal_dimensions, TerminalRenderer};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = AnimationConfig::from_env();
    log::debug!("{:?}", config);

    let dims = terminal_dimensions(config.min_width, config.min_height);
    let size = match config.size {
        Some(size) => size,
        None => read_torus_size(&mut io::stdin().lock(), &mut io::stdout())?,
    };
    log::info!("size={} terminal={}x{}", size, dims.width, dims.height);

    // Allocation failure ends the process here with exit code 1.
    let mut anim = AnimationLoop::new(config, size, dims.width, dims.height)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut anim);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, anim: &mut AnimationLoop) -> Result<()> {
    let cancel = CancelToken::new();
    let mut pace = |interval: Duration| -> Result<()> {
        if wait_for_quit(interval)? {
            cancel.cancel();
        }
        Ok(())
    };
    anim.run(term, &mut pace, &cancel)?;
    Ok(())
}
