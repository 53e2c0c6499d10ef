use glam::Vec2;
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use undertow_anim::{Animation, AnimationError, Frame, PhysicsAnimation};

use crate::{spring::SpringPoint, Args};

pub fn run(args: Args) -> Result<(), AnimationError> {
    let spring = SpringPoint::new(Vec2::new(1.0, 0.0), args.stiffness, args.damping);

    let mut anim = PhysicsAnimation::new(spring);
    anim.set_number_of_fixed_sub_time_steps(args.sub_steps);

    let dt = 1.0 / args.fps as f64;

    let bar_template = "Running Simulation {spinner:.green} [{elapsed}] [{bar:50.white/white}] {pos}/{len} ({eta})";
    let style = ProgressStyle::with_template(bar_template).unwrap()
        .progress_chars("=> ").tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    let progress = ProgressBar::new(args.frames).with_style(style);

    for index in (0..args.frames).progress_with(progress) {
        anim.update(Frame::new(index, dt))?;
    }

    let position = anim.model().position;
    let speed = anim.model().velocity.length();
    println!(
        "simulated {:.2} s: position ({:.4}, {:.4}) speed {:.4}",
        anim.current_time_in_seconds(),
        position.x,
        position.y,
        speed,
    );

    Ok(())
}
