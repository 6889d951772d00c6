//! Turret tracking demo.
//!
//! A turret sprite rotates toward a target that jumps between screen corners.
//! Each tick applies one clerp step, so the turret eases in and always turns
//! the short way round. Prints the heading per tick.
//!
//! Run: `cargo run -p maf --example turret_tracking`

use maf::prelude::*;

fn main() {
    let sprite = PosSizeRect::new(300.0, 200.0, 48.0, 24.0).to_rect();
    let pivot = origin_from_rect(&sprite);
    let center = Vec2::new(sprite.min.x as f64, sprite.min.y as f64) + pivot;
    println!("sprite {sprite} pivot ({}, {})", pivot.x, pivot.y);

    let targets = [
        Vec2::new(0.0, 0.0),
        Vec2::new(640.0, 0.0),
        Vec2::new(640.0, 480.0),
        Vec2::new(0.0, 480.0),
    ];
    let mut facing = 0.0;
    for (leg, target) in targets.iter().enumerate() {
        // Heading from the turret center toward the target.
        let goal = angle_between(*target, center);
        for tick in 0..15 {
            facing = wrap_radians(clerp_angle(facing, goal));
            let dir = direction_from_radians(facing);
            println!(
                "leg {leg} tick {tick:2}: facing {:9.4}° goal {:9.4}° dir ({:6.3}, {:6.3})",
                radians_to_degrees(facing),
                radians_to_degrees(goal),
                dir.x,
                dir.y
            );
        }
    }
}
