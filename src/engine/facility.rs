use thiserror::Error;

use crate::synth::NoteRequest;

/// Why a render could not reach the output.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FacilityError {
    /// The output has not been activated by a user gesture yet
    #[error("audio output has not been activated")]
    Inactive,
    /// The output device is gone or was never opened
    #[error("audio output is unavailable")]
    Unavailable,
    /// The audio thread is not draining voices fast enough
    #[error("voice queue is full")]
    QueueFull,
}

/// The signal-processing facility voices are scheduled on.
///
/// Owns an audio clock that runs independently of the caller's timer and
/// accepts transient voices at absolute times on that clock.
pub trait AudioFacility {
    /// Current audio-clock time in seconds.
    fn now(&self) -> f64;

    /// True once activated and still able to produce sound.
    fn is_running(&self) -> bool;

    /// Activate output. Must be safe to call repeatedly.
    fn resume(&mut self) -> Result<(), FacilityError>;

    /// Build and schedule one transient voice.
    fn submit(&mut self, request: NoteRequest) -> Result<(), FacilityError>;
}

#[cfg(feature = "rtrb")]
pub use handle::EngineHandle;

#[cfg(feature = "rtrb")]
mod handle {
    use std::sync::Arc;

    use rtrb::{Consumer, Producer};

    use super::{AudioFacility, FacilityError};
    use crate::{
        engine::{clock::AudioClock, BusLevels},
        synth::{message::EngineMessage, NoteRequest, ScheduledVoice},
    };

    /// Control-thread side of an [`Engine`](crate::engine::Engine).
    pub struct EngineHandle {
        tx: Producer<EngineMessage>,
        /// Finished voices handed back by the engine
        retired: Consumer<ScheduledVoice>,
        clock: Arc<AudioClock>,
        levels: Arc<BusLevels>,
    }

    impl EngineHandle {
        pub(crate) fn new(
            tx: Producer<EngineMessage>,
            retired: Consumer<ScheduledVoice>,
            clock: Arc<AudioClock>,
            levels: Arc<BusLevels>,
        ) -> Self {
            Self {
                tx,
                retired,
                clock,
                levels,
            }
        }

        /// Free the voices the engine has finished with. Returns how many.
        pub fn reclaim(&mut self) -> usize {
            let mut freed = 0;
            while self.retired.pop().is_ok() {
                freed += 1;
            }
            freed
        }

        pub fn clock(&self) -> &Arc<AudioClock> {
            &self.clock
        }

        pub fn levels(&self) -> &Arc<BusLevels> {
            &self.levels
        }
    }

    impl AudioFacility for EngineHandle {
        fn now(&self) -> f64 {
            self.clock.seconds()
        }

        fn is_running(&self) -> bool {
            self.clock.is_running() && !self.tx.is_abandoned()
        }

        fn resume(&mut self) -> Result<(), FacilityError> {
            if self.tx.is_abandoned() {
                return Err(FacilityError::Unavailable);
            }
            self.clock.set_running(true);
            Ok(())
        }

        fn submit(&mut self, request: NoteRequest) -> Result<(), FacilityError> {
            if self.tx.is_abandoned() {
                return Err(FacilityError::Unavailable);
            }
            if !self.clock.is_running() {
                return Err(FacilityError::Inactive);
            }

            self.reclaim();
            let voice = ScheduledVoice::new(&request);
            self.tx
                .push(EngineMessage::Schedule(voice))
                .map_err(|_| FacilityError::QueueFull)
        }
    }
}
