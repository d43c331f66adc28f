use std::f64::consts::TAU;

use crate::core::audio::audio_buffer::AudioBuffer;
use crate::core::audio::envelope::Envelope;
use crate::core::audio::synthesis_params::SynthesisParams;
use crate::core::data::complex::Complex;
use crate::core::util::map_value::map_value;

/// Turns an escape count and the point that produced it into a tone.
///
/// Output is a pure function of the inputs and the parameters.
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    params: SynthesisParams,
}

impl Synthesizer {
    #[must_use]
    pub fn new(params: SynthesisParams) -> Self {
        Self { params }
    }

    /// A low drone for points inside the set, otherwise the escape count
    /// spread linearly over `[min_frequency, max_frequency]`.
    #[must_use]
    pub fn primary_frequency(&self, iterations: u32, max_iterations: u32) -> f64 {
        if iterations >= max_iterations {
            return self.params.inside_frequency;
        }

        map_value(
            f64::from(iterations),
            0.0,
            f64::from(max_iterations),
            self.params.min_frequency,
            self.params.max_frequency,
        )
    }

    /// Frequencies of the four partials: primary, detuned by the real part,
    /// detuned by the imaginary part, and the harmonic.
    #[must_use]
    pub fn partial_frequencies(&self, iterations: u32, max_iterations: u32, point: Complex) -> [f64; 4] {
        let primary = self.primary_frequency(iterations, max_iterations);

        [
            primary,
            primary * (1.0 + point.real * self.params.detune),
            primary * (1.0 + point.imag * self.params.detune),
            primary * self.params.harmonic_ratio,
        ]
    }

    #[must_use]
    pub fn synthesize(&self, iterations: u32, max_iterations: u32, point: Complex) -> AudioBuffer {
        let frequencies = self.partial_frequencies(iterations, max_iterations, point);
        let weights = self.params.partial_weights;
        let envelope = Envelope::new(&self.params);
        let sample_rate = f64::from(self.params.sample_rate);

        let samples = (0..self.params.sample_count())
            .map(|i| {
                let time = i as f64 / sample_rate;

                let wave: f64 = frequencies
                    .iter()
                    .zip(weights.iter())
                    .map(|(frequency, weight)| weight * (TAU * frequency * time).sin())
                    .sum();

                (wave * envelope.amplitude(time) * f64::from(i16::MAX)) as i16
            })
            .collect();

        AudioBuffer::new(self.params.sample_rate, samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Complex {
        Complex {
            real: 0.0,
            imag: 0.0,
        }
    }

    #[test]
    fn test_inside_point_uses_drone() {
        let synthesizer = Synthesizer::default();

        assert_eq!(synthesizer.primary_frequency(100, 100), 110.0);
        assert_eq!(synthesizer.primary_frequency(2000, 2000), 110.0);
    }

    #[test]
    fn test_escape_count_maps_linearly() {
        let synthesizer = Synthesizer::default();

        assert_eq!(synthesizer.primary_frequency(0, 100), 220.0);
        assert_eq!(synthesizer.primary_frequency(50, 100), 550.0);
        assert!((synthesizer.primary_frequency(99, 100) - 873.4).abs() < 1e-9);
    }

    #[test]
    fn test_partials_follow_coordinates() {
        let synthesizer = Synthesizer::default();
        let point = Complex {
            real: -0.5,
            imag: 1.0,
        };

        let [primary, real_partial, imag_partial, harmonic] =
            synthesizer.partial_frequencies(0, 100, point);

        assert_eq!(primary, 220.0);
        assert!((real_partial - 209.0).abs() < 1e-9);
        assert!((imag_partial - 242.0).abs() < 1e-9);
        assert!((harmonic - 330.0).abs() < 1e-9);
    }

    #[test]
    fn test_length_matches_rate_and_duration() {
        let synthesizer = Synthesizer::default();
        let buffer = synthesizer.synthesize(10, 100, origin());

        assert_eq!(buffer.len(), 44_100);
        assert_eq!(buffer.sample_rate(), 44_100);

        let half_second = Synthesizer::new(SynthesisParams {
            sample_rate: 8_000,
            duration: 0.5,
            ..SynthesisParams::default()
        });
        assert_eq!(half_second.synthesize(10, 100, origin()).len(), 4_000);
    }

    #[test]
    fn test_samples_never_saturate_and_start_silent() {
        let synthesizer = Synthesizer::default();
        let params = SynthesisParams::default();
        let point = Complex {
            real: -1.9,
            imag: 1.4,
        };
        let frequencies = synthesizer.partial_frequencies(3, 100, point);
        let envelope = Envelope::new(&params);
        let buffer = synthesizer.synthesize(3, 100, point);

        let mut peak = 0.0_f64;
        for (i, &sample) in buffer.samples().iter().enumerate() {
            let time = i as f64 / f64::from(params.sample_rate);
            let wave: f64 = frequencies
                .iter()
                .zip(params.partial_weights.iter())
                .map(|(frequency, weight)| weight * (TAU * frequency * time).sin())
                .sum();
            let exact = wave * envelope.amplitude(time) * f64::from(i16::MAX);

            peak = peak.max(exact.abs());
            assert!(
                (f64::from(sample) - exact).abs() < 1.0,
                "sample {} is {} but the unclamped value is {}",
                i,
                sample,
                exact
            );
        }

        assert!(peak <= f64::from(i16::MAX), "peak {} exceeds i16 range", peak);
        assert!(peak > 5_000.0);
        assert_eq!(buffer.samples()[0], 0);
    }

    #[test]
    fn test_tail_fades_out() {
        let buffer = Synthesizer::default().synthesize(40, 100, origin());
        let last = *buffer.samples().last().unwrap();

        assert!(last.unsigned_abs() < 100, "last sample {} should be near silence", last);
    }

    #[test]
    fn test_is_deterministic() {
        let synthesizer = Synthesizer::default();
        let point = Complex {
            real: 0.3,
            imag: -0.2,
        };

        assert_eq!(
            synthesizer.synthesize(17, 250, point),
            synthesizer.synthesize(17, 250, point)
        );
    }

    #[test]
    fn test_different_counts_give_different_tones() {
        let synthesizer = Synthesizer::default();

        assert_ne!(
            synthesizer.synthesize(5, 100, origin()),
            synthesizer.synthesize(60, 100, origin())
        );
    }
}
