use crate::core::audio::audio_buffer::AudioBuffer;

pub trait AudioOutputPort {
    /// Drops anything queued but not yet played.
    fn clear_queued(&mut self);

    fn enqueue(&mut self, buffer: AudioBuffer);
}
