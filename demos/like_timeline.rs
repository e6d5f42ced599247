//! Prints the derived frame of a like toggle at 60fps-ish steps.
//!
//! Run with `RUST_LOG=likeburst=debug` to see toggle logging.

use std::time::{Duration, Instant};

use likeburst::prelude::*;

fn main() -> Result<(), AnimationError> {
    env_logger::init();

    let mut like = LikeButton::new()
        .haptics(|style: ImpactStyle| log::info!("haptic: {:?}", style))
        .on_toggle(|liked| {
            log::info!("on_toggle({})", liked);
            Ok(())
        })
        .activate()?;

    let t0 = Instant::now();
    like.toggle_at(t0);

    for step in (0..=1000).step_by(100) {
        let now = t0 + Duration::from_millis(step);
        let phase = like.phase_at(now);
        let progress = like.state_at(now).value;
        let frame = like.frame_at(now);
        let lit = frame.particles.iter().filter(|p| p.opacity > 0.0).count();
        println!(
            "{:>4}ms {:?} progress={:.3} icon={:.3} ring={:.2}/{:.2} particles_lit={}",
            step, phase, progress, frame.icon.scale, frame.ring.scale, frame.ring.opacity, lit
        );
    }

    let t1 = t0 + Duration::from_millis(1500);
    like.toggle_at(t1);
    let frame = like.frame_at(t1);
    println!(
        "unliked: particles_lit={} ring={:.2}",
        frame.particles.iter().filter(|p| p.opacity > 0.0).count(),
        frame.ring.scale
    );

    Ok(())
}
