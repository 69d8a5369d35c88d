//! MDD playback host - load a vertex cache and play it back on a timer.

use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use serde::Deserialize;

use mdd_cache::{FrameCache, Point3};

/// Playback configuration, loaded from JSON.
#[derive(Debug, Deserialize)]
struct PlaybackConfig {
    /// Path to the .mdd cache file.
    path: PathBuf,
    /// Uniform scale applied to every point component at load time.
    #[serde(default = "default_scale")]
    scale: f32,
    /// Playback speed multiplier (0.1 = ten times slower).
    #[serde(default = "default_speed")]
    speed: f32,
    /// Query ticks per second.
    #[serde(default = "default_tick_rate")]
    tick_rate: f32,
}

fn default_scale() -> f32 {
    1.0
}

fn default_speed() -> f32 {
    1.0
}

fn default_tick_rate() -> f32 {
    60.0
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [seconds]", args[0]);
        eprintln!();
        eprintln!("Play back an MDD vertex-animation cache on a timer.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to playback configuration file");
        eprintln!("  seconds      How long to play back (default: 10)");
        eprintln!();
        eprintln!("Example configuration is printed with --example.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let config_path = PathBuf::from(&args[1]);
    let seconds: f32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(10.0);

    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let config: PlaybackConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    let cache = FrameCache::load(&config.path, config.scale).unwrap_or_else(|e| {
        eprintln!("Error loading {}: {}", config.path.display(), e);
        std::process::exit(1);
    });

    println!("MDD Playback");
    println!("============");
    println!("Cache: {}", config.path.display());
    println!("{}", cache.summary());
    println!("Speed: x{}", config.speed);
    println!();

    // The "mesh": a flat buffer of vertex positions the cache writes into.
    let mut mesh: Vec<Point3> = vec![Point3::default(); cache.point_count()];

    let duration = cache.approximate_duration();
    let tick = Duration::from_secs_f32(1.0 / config.tick_rate.max(1.0));
    let start = Instant::now();
    let mut ticks: u64 = 0;
    let mut last_report = 0u64;

    println!("Playing back for {}s...", seconds);
    while start.elapsed().as_secs_f32() < seconds {
        // loop the animation by wrapping the clock at the cache's duration
        let elapsed = start.elapsed().as_secs_f32() * config.speed;
        let now = if duration > 0.0 {
            elapsed % duration
        } else {
            0.0
        };

        match cache.interpolated_frame_at_time(now) {
            Ok(frame) => frame.apply_to_mesh(&mut mesh),
            // probably means the cache has no frames at all
            Err(e) => log::warn!("no frame for time {}: {}", now, e),
        }

        ticks += 1;

        let second = start.elapsed().as_secs();
        if second > last_report {
            last_report = second;
            let v = mesh.first().copied().unwrap_or_default();
            println!(
                "  t={:.3}s: vertex 0 at ({:.3}, {:.3}, {:.3}), {} ticks",
                now, v.x, v.y, v.z, ticks
            );
        }

        thread::sleep(tick);
    }

    let elapsed = start.elapsed().as_secs_f32();
    println!();
    println!(
        "Done: {} ticks in {:.2}s ({:.1} ticks/s)",
        ticks,
        elapsed,
        ticks as f32 / elapsed
    );
}

fn print_example_config() {
    println!("Example configuration (config.json):");
    println!(
        r#"{{
  "path": "cloth.mdd",
  "scale": 5000.0,
  "speed": 0.1,
  "tick_rate": 60.0
}}"#
    );
}
