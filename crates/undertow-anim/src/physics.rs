use crate::{Animation, AnimationError, Frame};

/// A physics model advanced in sub time steps by [`PhysicsAnimation`].
pub trait PhysicsModel {
    /// One-time setup, run before the first time step.
    fn on_initialize(&mut self) -> Result<(), AnimationError> {
        Ok(())
    }

    /// Advances the model state by `dt` seconds.
    fn on_advance_time_step(&mut self, dt: f64) -> Result<(), AnimationError>;

    /// Number of sub-steps a frame interval should be divided into.
    ///
    /// Consulted only when fixed sub-stepping is disabled, so a model can
    /// shrink its step under a stability condition (e.g. CFL).
    fn number_of_sub_time_steps(&self, _time_interval_in_seconds: f64) -> u32 {
        1
    }
}

/// Drives a [`PhysicsModel`] frame by frame.
///
/// Each frame interval is split into equal sub time steps, either a fixed
/// count or one the model chooses per frame. Updating with a frame several
/// indices ahead of the current one plays every skipped frame, so simulation
/// time never jumps.
pub struct PhysicsAnimation<M> {
    model: M,
    /// Last frame played. `None` until the first update.
    current_frame: Option<Frame>,
    current_time: f64,
    is_using_fixed_sub_time_steps: bool,
    number_of_fixed_sub_time_steps: u32,
}

impl<M: PhysicsModel> PhysicsAnimation<M> {
    pub fn new(model: M) -> PhysicsAnimation<M> {
        PhysicsAnimation {
            model,
            current_frame: None,
            current_time: 0.0,
            is_using_fixed_sub_time_steps: true,
            number_of_fixed_sub_time_steps: 1,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// The frame most recently played, or `None` before the first update.
    pub fn current_frame(&self) -> Option<Frame> {
        self.current_frame
    }

    /// Overrides the current frame without simulating the skipped span.
    pub fn set_current_frame(&mut self, frame: Frame) {
        self.current_frame = Some(frame);
    }

    /// Total simulated time, in seconds.
    pub fn current_time_in_seconds(&self) -> f64 {
        self.current_time
    }

    pub fn is_using_fixed_sub_time_steps(&self) -> bool {
        self.is_using_fixed_sub_time_steps
    }

    pub fn set_is_using_fixed_sub_time_steps(&mut self, fixed: bool) {
        self.is_using_fixed_sub_time_steps = fixed;
    }

    pub fn number_of_fixed_sub_time_steps(&self) -> u32 {
        self.number_of_fixed_sub_time_steps
    }

    /// Sets the fixed sub-step count, clamped to at least one.
    pub fn set_number_of_fixed_sub_time_steps(&mut self, n: u32) {
        self.number_of_fixed_sub_time_steps = n.max(1);
    }

    /// Advances by one frame from the current one, reusing its interval.
    pub fn advance_single_frame(&mut self) -> Result<(), AnimationError> {
        let frame = match self.current_frame {
            Some(mut frame) => {
                frame.advance();
                frame
            }
            None => Frame::default(),
        };

        self.update(frame)
    }

    fn advance_time_step(&mut self, time_interval_in_seconds: f64) -> Result<(), AnimationError> {
        let n = if self.is_using_fixed_sub_time_steps {
            self.number_of_fixed_sub_time_steps
        } else {
            self.model.number_of_sub_time_steps(time_interval_in_seconds)
        }
        .max(1);

        let dt = time_interval_in_seconds / n as f64;
        log::debug!("advancing frame interval {time_interval_in_seconds} s in {n} sub-steps");

        for _ in 0..n {
            self.model.on_advance_time_step(dt)?;
            self.current_time += dt;
        }

        Ok(())
    }
}

impl<M: PhysicsModel> Animation for PhysicsAnimation<M> {
    fn on_update(&mut self, frame: Frame) -> Result<(), AnimationError> {
        let frames_to_advance = match self.current_frame {
            Some(current) if frame.index <= current.index => return Ok(()),
            Some(current) => frame.index - current.index,
            None => {
                self.model.on_initialize()?;
                frame.index.saturating_add(1)
            }
        };

        for _ in 0..frames_to_advance {
            self.advance_time_step(frame.time_interval_in_seconds)?;
        }

        self.current_frame = Some(frame);
        Ok(())
    }
}
