//! Procedural tone synthesis for a clicked point.
//!
//! The escape count picks the pitch, the point's coordinates detune two
//! partials, and an ADSR envelope shapes the result into a short
//! fixed-length buffer of 16-bit mono samples.

pub mod audio_buffer;
pub mod envelope;
pub mod synthesis_params;
pub mod synthesizer;
