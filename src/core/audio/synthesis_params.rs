pub const SAMPLE_RATE: u32 = 44_100;

/// Fixed parameters of the click tone.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SynthesisParams {
    pub sample_rate: u32,
    /// Tone length in seconds.
    pub duration: f64,
    pub attack: f64,
    pub decay: f64,
    /// Envelope level held between decay and release, in `[0, 1]`.
    pub sustain_level: f64,
    pub release: f64,
    /// Drone used for points inside the set.
    pub inside_frequency: f64,
    pub min_frequency: f64,
    pub max_frequency: f64,
    /// Fraction of the coordinate used to detune the secondary partials.
    pub detune: f64,
    /// Ratio of the harmonic partial to the primary (a perfect fifth).
    pub harmonic_ratio: f64,
    /// Weights of primary, real-detuned, imag-detuned and harmonic partials.
    pub partial_weights: [f64; 4],
}

impl Default for SynthesisParams {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            duration: 1.0,
            attack: 0.05,
            decay: 0.1,
            sustain_level: 0.7,
            release: 0.3,
            inside_frequency: 110.0,
            min_frequency: 220.0,
            max_frequency: 880.0,
            detune: 0.1,
            harmonic_ratio: 1.5,
            partial_weights: [0.5, 0.25, 0.15, 0.1],
        }
    }
}

impl SynthesisParams {
    #[must_use]
    pub fn sample_count(&self) -> usize {
        (f64::from(self.sample_rate) * self.duration) as usize
    }
}
