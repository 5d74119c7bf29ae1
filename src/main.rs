//! Confetti Burst entry point
//!
//! On the web the library's `Confetti` class is the entry point. Natively
//! this runs the corner celebration headless and reports what it drew.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use confetti_burst::platform::HeadlessBackend;
    use confetti_burst::{ConfettiEngine, Settings};

    env_logger::init();
    log::info!("Confetti Burst (native) starting...");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2024);

    let backend = HeadlessBackend::new(1280.0, 720.0);
    let mut engine = ConfettiEngine::with_seed(backend, Settings::load(), seed);

    let fired = engine.celebrate();
    let launched: usize = fired.iter().map(|f| f.particles()).sum();
    log::info!("Fired {:?}, {} particles", fired, launched);

    let frames = engine.run_until_idle(10_000);
    let drawn = engine
        .backend()
        .last_removed()
        .map_or(0, |surface| surface.fill_count());

    println!("seed {}: {} particles, {} frames, {} glyphs drawn", seed, launched, frames, drawn);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is the library's start hook, this is just to satisfy the compiler
}
