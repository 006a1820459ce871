//! Scrolls a simulated page down to the stats strip and prints the counters
//! as they tick up.
//!
//! Run with `RUST_LOG=debug cargo run --example stats_strip` to see the
//! stage's lifecycle logging.

use landing_motion::page;
use landing_motion::prelude::*;

const VIEWPORT_WIDTH: f32 = 1280.0;
const VIEWPORT_HEIGHT: f32 = 800.0;
/// Page offset of the stats strip
const STRIP_TOP: f32 = 1800.0;
const STRIP_HEIGHT: f32 = 160.0;
/// Pixels scrolled per second
const SCROLL_SPEED: f32 = 900.0;

fn main() -> Result<(), RunnerError> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let mut stage = Stage::new();
    let ids = page::mount_stats(&mut stage);
    let strip = Rect::new(0.0, STRIP_TOP, VIEWPORT_WIDTH, STRIP_HEIGHT);
    let max_scroll = STRIP_TOP - VIEWPORT_HEIGHT / 3.0;

    let mut shown: Vec<String> = ids
        .iter()
        .map(|id| stage.text(*id).unwrap_or_default().to_string())
        .collect();
    println!("{}", shown.join("  |  "));

    let scene_ids = ids.clone();
    let summary = Runner::new().run(
        &mut stage,
        move |stage, now| {
            let scroll_y = (now.as_secs_f32() * SCROLL_SPEED).min(max_scroll);
            let viewport = Rect::new(0.0, scroll_y, VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
            for id in &scene_ids {
                if stage.observe(*id, &strip, &viewport, now) {
                    log::info!("{:?} in view at scroll {:.0}", id, scroll_y);
                }
            }
        },
        |update| {
            if let Some(slot) = ids.iter().position(|id| *id == update.id) {
                shown[slot] = update.text.clone();
                println!("{}", shown.join("  |  "));
            }
        },
    )?;

    println!(
        "{} frame(s), {} update(s) in {:.2?}{}",
        summary.frames,
        summary.updates,
        summary.elapsed,
        if summary.finished { "" } else { " (cut short)" }
    );
    Ok(())
}
