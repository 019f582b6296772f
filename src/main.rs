//! Run with: `cargo run --release -- [particle_count] [seed]`
//!
//! Set `RUST_LOG=debug` to see the frame rate and key presses.

use motes::Simulation;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let mut simulation = Simulation::new();
    if let Some(count) = args.next().and_then(|s| s.parse().ok()) {
        simulation = simulation.with_particle_count(count);
    }
    if let Some(seed) = args.next().and_then(|s| s.parse().ok()) {
        simulation = simulation.with_seed(seed);
    }

    log::info!(
        "Starting with {} particles, keys: c w p h < > + - i j k l Esc",
        simulation.config().particle_count
    );

    if let Err(e) = simulation.run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
