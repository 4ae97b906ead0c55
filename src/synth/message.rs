#[cfg(feature = "rtrb")]
use rtrb::{Consumer, Producer};

use crate::synth::voice::ScheduledVoice;

/// Messages from the control thread to the audio thread.
pub enum EngineMessage {
    /// Take ownership of a voice and play it at its start time
    Schedule(ScheduledVoice),
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<EngineMessage>;

    /// Hand a finished voice back so it is freed off the audio thread.
    ///
    /// The default drops it where it is.
    fn retire(&mut self, _voice: ScheduledVoice) {}
}

/// Audio-thread end of the two queues between engine and handle: new
/// voices arrive on one, finished voices leave on the other.
#[cfg(feature = "rtrb")]
pub struct VoiceLink {
    rx: Consumer<EngineMessage>,
    retired: Producer<ScheduledVoice>,
}

#[cfg(feature = "rtrb")]
impl VoiceLink {
    pub(crate) fn new(rx: Consumer<EngineMessage>, retired: Producer<ScheduledVoice>) -> Self {
        Self { rx, retired }
    }
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for VoiceLink {
    fn pop(&mut self) -> Option<EngineMessage> {
        self.rx.pop().ok()
    }

    fn retire(&mut self, voice: ScheduledVoice) {
        // A full queue means the control side is not collecting; drop here
        let _ = self.retired.push(voice);
    }
}
