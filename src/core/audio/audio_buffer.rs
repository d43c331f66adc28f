use std::time::Duration;

/// Mono signed 16-bit PCM samples at a fixed rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBuffer {
    sample_rate: u32,
    samples: Vec<i16>,
}

impl AudioBuffer {
    pub const CHANNELS: u16 = 1;

    #[must_use]
    pub fn new(sample_rate: u32, samples: Vec<i16>) -> Self {
        Self {
            sample_rate,
            samples,
        }
    }

    #[must_use]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    #[must_use]
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    #[must_use]
    pub fn into_samples(self) -> Vec<i16> {
        self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }

        Duration::from_secs_f64(self.samples.len() as f64 / f64::from(self.sample_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_from_length_and_rate() {
        let buffer = AudioBuffer::new(44_100, vec![0; 22_050]);

        assert_eq!(buffer.len(), 22_050);
        assert_eq!(buffer.duration(), Duration::from_millis(500));
    }

    #[test]
    fn test_zero_rate_has_zero_duration() {
        let buffer = AudioBuffer::new(0, vec![1, 2, 3]);

        assert_eq!(buffer.duration(), Duration::ZERO);
    }

    #[test]
    fn test_into_samples_returns_data() {
        let buffer = AudioBuffer::new(8_000, vec![1, -1, 3]);

        assert!(!buffer.is_empty());
        assert_eq!(buffer.into_samples(), vec![1, -1, 3]);
    }
}
