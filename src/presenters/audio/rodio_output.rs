use crate::controllers::interactive::ports::audio_output::AudioOutputPort;
use crate::core::audio::audio_buffer::AudioBuffer;
use crate::input::gui::GuiError;
use log::{debug, warn};
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};

/// Plays click tones on the default output device.
///
/// Each cleared queue drops its sink, so a new click cuts off the previous
/// tone instead of waiting behind it.
pub struct RodioAudioOutput {
    // Playback stops when the stream is dropped.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sink: Option<Sink>,
}

impl RodioAudioOutput {
    pub fn new() -> Result<Self, GuiError> {
        let (stream, handle) = OutputStream::try_default()?;

        Ok(Self {
            _stream: stream,
            handle,
            sink: None,
        })
    }
}

impl AudioOutputPort for RodioAudioOutput {
    fn clear_queued(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }

    fn enqueue(&mut self, buffer: AudioBuffer) {
        if self.sink.is_none() {
            match Sink::try_new(&self.handle) {
                Ok(sink) => self.sink = Some(sink),
                Err(e) => {
                    warn!("audio output unavailable: {}", e);
                    return;
                }
            }
        }

        if let Some(sink) = &self.sink {
            debug!(
                "queueing {} samples ({:?}) at {} Hz",
                buffer.len(),
                buffer.duration(),
                buffer.sample_rate()
            );

            let sample_rate = buffer.sample_rate();
            sink.append(SamplesBuffer::new(
                AudioBuffer::CHANNELS,
                sample_rate,
                buffer.into_samples(),
            ));
        }
    }
}
