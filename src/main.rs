use clap::Parser;
use undertow_anim::AnimationError;

mod run;
mod spring;

/// Steps a demo spring model through the animation core.
#[derive(Parser)]
#[command(version, about)]
pub struct Args {
    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Frame rate of the simulation.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Spring stiffness, in 1/s².
    #[arg(long, default_value_t = 120.0)]
    stiffness: f32,

    /// Velocity damping, in 1/s.
    #[arg(long, default_value_t = 1.5)]
    damping: f32,

    /// Fixed sub time steps per frame.
    #[arg(long, default_value_t = 4)]
    sub_steps: u32,
}

fn main() -> Result<(), AnimationError> {
    env_logger::init();

    let args = Args::parse();
    run::run(args)
}
