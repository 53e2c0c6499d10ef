use crate::AnimationError;

/// A single frame of an animation.
///
/// A frame names one discrete step of the simulation: its ordinal index
/// within the run and the span of time the step covers. Frames are plain
/// values; two frames with the same index and interval are equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Ordinal index of this frame within a run.
    pub index: u64,
    /// Duration of this frame, in seconds.
    pub time_interval_in_seconds: f64,
}

impl Frame {
    pub fn new(index: u64, time_interval_in_seconds: f64) -> Frame {
        Frame {
            index,
            time_interval_in_seconds,
        }
    }

    /// Builds a frame after checking the interval against `policy`.
    pub fn checked(
        index: u64,
        time_interval_in_seconds: f64,
        policy: IntervalPolicy,
    ) -> Result<Frame, AnimationError> {
        policy.check(time_interval_in_seconds)?;
        Ok(Frame::new(index, time_interval_in_seconds))
    }

    /// Elapsed time at the start of this frame.
    pub fn time_in_seconds(&self) -> f64 {
        self.index as f64 * self.time_interval_in_seconds
    }

    /// Advances to the next frame. Saturates at `u64::MAX`.
    pub fn advance(&mut self) {
        self.index = self.index.saturating_add(1);
    }

    /// Advances by `delta` frames. Saturates at `u64::MAX`.
    pub fn advance_by(&mut self, delta: u64) {
        self.index = self.index.saturating_add(delta);
    }
}

impl Default for Frame {
    fn default() -> Frame {
        Frame::new(0, 1.0 / 60.0)
    }
}

/// Validation applied to a frame's time interval.
///
/// [`Frame::new`] itself accepts any interval; drivers that want stricter
/// behavior pick a policy and construct frames through [`Frame::checked`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IntervalPolicy {
    /// Accept any interval.
    #[default]
    AllowAny,
    /// Reject negative intervals. Zero is allowed and means no time
    /// advances for the step.
    NonNegative,
    /// Reject zero and negative intervals.
    Positive,
}

impl IntervalPolicy {
    pub fn check(&self, time_interval_in_seconds: f64) -> Result<(), AnimationError> {
        let ok = match self {
            IntervalPolicy::AllowAny => true,
            IntervalPolicy::NonNegative => time_interval_in_seconds >= 0.0,
            IntervalPolicy::Positive => time_interval_in_seconds > 0.0,
        };

        if ok {
            Ok(())
        } else {
            Err(AnimationError::InvalidTimeInterval(time_interval_in_seconds))
        }
    }
}
