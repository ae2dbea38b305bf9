//! Lyra - an adaptive demo email client
//!
//! Headless shell over the mail crate: it classifies a simulated window
//! width, walks a short user session against the state store, and prints
//! what a rendering front end would show at each step.

use log::info;

mod app;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let width = app::window_width_from_env();
    app::run(width)?;

    info!("Lyra session finished");
    Ok(())
}
