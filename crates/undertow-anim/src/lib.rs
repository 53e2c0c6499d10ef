use std::time::Instant;

use thiserror::Error;

pub mod frame;
pub mod physics;

pub use frame::{Frame, IntervalPolicy};
pub use physics::{PhysicsAnimation, PhysicsModel};

/// Errors surfaced by the animation core.
#[derive(Debug, Error)]
pub enum AnimationError {
    /// A frame carried a time interval rejected by the active [`IntervalPolicy`].
    #[error("invalid time interval: {0} s")]
    InvalidTimeInterval(f64),
    /// An [`Animation::on_update`] hook failed. The source error is carried
    /// through unchanged.
    #[error(transparent)]
    Hook(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// A unit of work driven frame by frame.
///
/// Implementations supply the per-frame behavior in [`on_update`]; drivers
/// advance them through [`update`]. The trait is object safe, so a driver
/// holding a `Box<dyn Animation>` can step implementations it knows nothing
/// about, including ones defined outside this crate entirely.
///
/// [`on_update`]: Animation::on_update
/// [`update`]: Animation::update
pub trait Animation {
    /// Per-frame hook. Called by [`update`](Animation::update) once per
    /// frame; drivers never call this directly.
    fn on_update(&mut self, frame: Frame) -> Result<(), AnimationError>;

    /// Advances the animation by a single frame.
    ///
    /// Dispatches to [`on_update`](Animation::on_update) exactly once,
    /// forwarding `frame` unmodified. An error from the hook propagates
    /// unchanged to the caller.
    fn update(&mut self, frame: Frame) -> Result<(), AnimationError> {
        log::debug!(
            "begin updating frame: {} interval: {} s ({} fps)",
            frame.index,
            frame.time_interval_in_seconds,
            1.0 / frame.time_interval_in_seconds,
        );

        let begin = Instant::now();
        self.on_update(frame)?;

        log::debug!(
            "end updating frame (took {} s)",
            begin.elapsed().as_secs_f64(),
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stores the last frame it was updated with.
    struct LastFrame {
        last: Option<Frame>,
    }

    impl LastFrame {
        fn new() -> LastFrame {
            LastFrame { last: None }
        }
    }

    impl Animation for LastFrame {
        fn on_update(&mut self, frame: Frame) -> Result<(), AnimationError> {
            self.last = Some(frame);
            Ok(())
        }
    }

    /// Records every frame it sees, in order.
    struct Recorder {
        seen: Vec<Frame>,
    }

    impl Animation for Recorder {
        fn on_update(&mut self, frame: Frame) -> Result<(), AnimationError> {
            self.seen.push(frame);
            Ok(())
        }
    }

    /// Does nothing per frame.
    struct Still;

    impl Animation for Still {
        fn on_update(&mut self, _frame: Frame) -> Result<(), AnimationError> {
            Ok(())
        }
    }

    #[derive(Debug, Error)]
    #[error("hook refused frame {0}")]
    struct Refused(u64);

    /// Fails on one specific frame index.
    struct FailsOn(u64);

    impl Animation for FailsOn {
        fn on_update(&mut self, frame: Frame) -> Result<(), AnimationError> {
            if frame.index == self.0 {
                return Err(AnimationError::Hook(Box::new(Refused(frame.index))));
            }
            Ok(())
        }
    }

    #[test]
    fn test_dispatch_reaches_override() {
        let mut anim = LastFrame::new();
        anim.update(Frame::new(3, 0.02)).unwrap();

        let last = anim.last.unwrap();
        assert_eq!(last.index, 3);
        assert_eq!(last.time_interval_in_seconds, 0.02);
    }

    #[test]
    fn test_noop_animation() {
        let mut anim = Still;
        anim.update(Frame::new(0, 0.02)).unwrap();
        anim.update(Frame::new(1, 0.02)).unwrap();
    }

    #[test]
    fn test_one_hook_call_per_update_in_order() {
        let mut anim = Recorder { seen: Vec::new() };

        let frames = [
            Frame::new(0, 0.02),
            Frame::new(1, 0.02),
            Frame::new(5, 0.01),
            Frame::new(2, 0.02),
        ];
        for frame in frames {
            anim.update(frame).unwrap();
        }

        assert_eq!(anim.seen, frames);
    }

    #[test]
    fn test_instances_are_independent() {
        let mut a = LastFrame::new();
        let mut b = LastFrame::new();

        a.update(Frame::new(1, 0.02)).unwrap();
        assert_eq!(a.last, Some(Frame::new(1, 0.02)));
        assert_eq!(b.last, None);

        b.update(Frame::new(9, 0.5)).unwrap();
        assert_eq!(a.last, Some(Frame::new(1, 0.02)));
        assert_eq!(b.last, Some(Frame::new(9, 0.5)));
    }

    #[test]
    fn test_hook_error_propagates() {
        let mut anim = FailsOn(2);
        anim.update(Frame::new(1, 0.02)).unwrap();

        let err = anim.update(Frame::new(2, 0.02)).unwrap_err();
        match err {
            AnimationError::Hook(source) => {
                assert_eq!(source.to_string(), "hook refused frame 2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_dispatch_through_trait_object() {
        use std::cell::RefCell;
        use std::rc::Rc;

        // The driver only sees `dyn Animation`; the concrete type stays
        // observable from outside through the shared buffer.
        struct Shared(Rc<RefCell<Vec<Frame>>>);

        impl Animation for Shared {
            fn on_update(&mut self, frame: Frame) -> Result<(), AnimationError> {
                self.0.borrow_mut().push(frame);
                Ok(())
            }
        }

        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut boxed: Box<dyn Animation> = Box::new(Shared(Rc::clone(&seen)));

        for i in 0..4 {
            boxed.update(Frame::new(i, 0.02)).unwrap();
        }

        let seen = seen.borrow();
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[3], Frame::new(3, 0.02));
    }
}
