//! Headless QuadView demo.
//!
//! Runs the default scene at a fixed 60 Hz step, drives the frustum from a
//! scripted key timeline, and logs visibility statistics once per
//! simulated second. Halfway through, the field of view is narrowed to
//! show a scene rebuild.

use std::time::Instant;
use glam::Vec2;
use quadview_engine::quadview::Engine;
use quadview_engine::quadview::control::{InputMask, InputState};
use quadview_engine::quadview::log::DefaultLogger;
use quadview_engine::quadview::scene::{
    BruteForceCuller, Culler, DrawStatistics, RecordingDrawer, SceneManager, SceneOptions,
};
use quadview_engine::{engine_info, engine_warn};

const SOURCE: &str = "quadview::Demo";
const TICKS_PER_SECOND: u32 = 60;

/// Keys held during each simulated second
const TIMELINE: &[&str] = &["", "w", "wd", "d", "w", "s", "sa", "a", "", "w"];

fn input_for(keys: &str) -> InputState {
    let mut input = InputState::new();
    for key in keys.chars() {
        if let Some(mask) = InputMask::from_key(key) {
            input.press(mask);
        }
    }
    input
}

fn main() {
    Engine::set_logger(DefaultLogger::default());

    let options = SceneOptions::default().with_seed(2024);
    let mut manager = match SceneManager::new(options.clone()) {
        Ok(manager) => manager,
        Err(e) => {
            eprintln!("Failed to create scene: {}", e);
            std::process::exit(1);
        }
    };

    let dt = 1.0 / TICKS_PER_SECOND as f32;
    let mut brute = BruteForceCuller::new();
    let mut drawer = RecordingDrawer::new();

    for (second, keys) in TIMELINE.iter().enumerate() {
        if second == TIMELINE.len() / 2 {
            let narrowed = options.clone().with_frustum_fov(20.0).with_frustum_far(256.0);
            if let Err(e) = manager.apply_options(narrowed) {
                engine_warn!(SOURCE, "Keeping previous scene: {}", e);
            }
        }

        let input = input_for(keys);
        let start = Instant::now();
        let mut stats = DrawStatistics::default();
        for _ in 0..TICKS_PER_SECOND {
            stats = manager.tick(dt, &input);
        }
        let elapsed = start.elapsed();

        let brute_stats = brute.cull(manager.scene()).statistics();
        manager.draw(&mut drawer);

        let frustum_position = manager
            .scene()
            .frustum()
            .map(|f| f.position())
            .unwrap_or(Vec2::ZERO);

        engine_info!(SOURCE,
            "t={}s keys={:?} total={} visible={} quadtree checks={} brute-force checks={} nodes={} draw commands={} frustum=({:.0}, {:.0}) ({:.2} ms/s)",
            second + 1, keys, stats.total, stats.in_frustum, stats.in_frustum_checks,
            brute_stats.in_frustum_checks, manager.scene().quad_tree().node_count(),
            drawer.commands().len(), frustum_position.x, frustum_position.y,
            elapsed.as_secs_f64() * 1000.0);

        if brute_stats.in_frustum != stats.in_frustum {
            engine_warn!(SOURCE, "Quadtree and brute-force disagree: {} vs {}",
                stats.in_frustum, brute_stats.in_frustum);
        }
    }
}
