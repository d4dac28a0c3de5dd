//! Generates catalog layouts into in-memory collaborators and prints a short
//! report for each.
//!
//! Usage:
//! ```text
//! cargo run --example oval              # every catalog layout
//! cargo run --example oval -- 2         # one layout (index is clamped)
//! RUST_LOG=trackgen=debug cargo run --example oval
//! ```

use trackgen::host::{InMemoryScene, InMemoryWorld, TrackSession};
use trackgen::layout::catalog;
use trackgen::{Track, TrackError};

fn main() -> Result<(), TrackError> {
    // Default: WARN for everything, INFO for trackgen.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("oval=info".parse().unwrap_or_default())
        .add_directive("trackgen=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let indices: Vec<usize> = match std::env::args().nth(1).and_then(|a| a.parse().ok()) {
        Some(index) => vec![index],
        None => (0..catalog::LAYOUT_COUNT).collect(),
    };

    let mut session = TrackSession::new(InMemoryScene::new(), InMemoryWorld::new());
    for index in indices {
        let track = session.select_catalog(index)?;
        report(catalog::LAYOUT_NAMES[index.min(catalog::LAYOUT_COUNT - 1)], track);
    }

    let (scene, world) = session.into_parts();
    println!(
        "scene holds {} meshes, world holds {} bodies",
        scene.mesh_count(),
        world.body_count()
    );
    Ok(())
}

fn report(name: &str, track: &Track) {
    let pieces = track.pieces();
    let (low, high) = pieces.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p.start.y), hi.max(p.start.y))
    });
    let steepest = pieces.iter().map(|p| p.slope().abs()).fold(0.0, f64::max);
    let sharpest = pieces
        .windows(2)
        .map(|w| (w[1].slope() - w[0].slope()).abs())
        .fold(0.0, f64::max);

    println!("{name}");
    println!("  sections:          {}", track.spans().len());
    println!("  pieces:            {}", pieces.len());
    println!("  elevation:         {low:.2} .. {high:.2}");
    println!("  steepest piece:    {:.2}°", steepest.to_degrees());
    println!("  max slope change:  {:.2}°", sharpest.to_degrees());
}
