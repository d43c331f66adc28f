use crate::core::audio::synthesis_params::SynthesisParams;

/// Attack-decay-sustain-release amplitude curve over a fixed-length tone.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Envelope {
    attack: f64,
    decay: f64,
    sustain_level: f64,
    release: f64,
    duration: f64,
}

impl Envelope {
    #[must_use]
    pub fn new(params: &SynthesisParams) -> Self {
        Self {
            attack: params.attack,
            decay: params.decay,
            sustain_level: params.sustain_level,
            release: params.release,
            duration: params.duration,
        }
    }

    /// Amplitude in `[0, 1]` at `time` seconds into the tone. Silent at and
    /// beyond either end.
    #[must_use]
    pub fn amplitude(&self, time: f64) -> f64 {
        if time <= 0.0 || time >= self.duration {
            return 0.0;
        }

        let release_start = self.duration - self.release;

        let level = if time < self.attack {
            time / self.attack
        } else if time < self.attack + self.decay {
            1.0 - (1.0 - self.sustain_level) * ((time - self.attack) / self.decay)
        } else if time < release_start {
            self.sustain_level
        } else {
            self.sustain_level * (1.0 - (time - release_start) / self.release)
        };

        level.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope() -> Envelope {
        Envelope::new(&SynthesisParams::default())
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {} to be close to {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_silent_at_both_ends() {
        assert_eq!(envelope().amplitude(0.0), 0.0);
        assert_eq!(envelope().amplitude(1.0), 0.0);
    }

    #[test]
    fn test_attack_ramps_up_to_peak() {
        assert_close(envelope().amplitude(0.025), 0.5);
        assert_close(envelope().amplitude(0.05), 1.0);
    }

    #[test]
    fn test_decay_falls_to_sustain() {
        assert_close(envelope().amplitude(0.1), 0.85);
        assert_close(envelope().amplitude(0.15), 0.7);
    }

    #[test]
    fn test_sustain_plateau() {
        for time in [0.2, 0.4, 0.6, 0.69] {
            assert_close(envelope().amplitude(time), 0.7);
        }
    }

    #[test]
    fn test_release_ramps_down() {
        assert_close(envelope().amplitude(0.85), 0.35);
        assert!(envelope().amplitude(0.99) < 0.05);
    }

    #[test]
    fn test_never_outside_unit_range() {
        for step in 0..=1100 {
            let amplitude = envelope().amplitude(f64::from(step) / 1000.0);
            assert!((0.0..=1.0).contains(&amplitude));
        }
    }
}
