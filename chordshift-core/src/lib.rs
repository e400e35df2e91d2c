//! Chord symbol transposition.
//!
//! Shifts the note names of a chord symbol such as `"C#maj7"` or
//! `"G13(♭9♯11)"` by a number of semitones and respells them with sharps or
//! flats. Text around the note names is kept as written.
//!
//! ```
//! use chordshift_core::{transpose_and_set_accidental, transpose_by_steps, Accidental};
//!
//! assert_eq!(transpose_by_steps("F#", 2), "G#");
//! assert_eq!(transpose_and_set_accidental("G13(♭9♯11)", -1, Accidental::Flat), "Gb13(b9#11)");
//! ```
pub mod args;
pub mod base;
pub mod batch;
pub mod error;
pub mod names;
pub mod normalize;
pub mod preference;
pub mod render;
pub mod scanner;
pub mod toneutil;
pub mod transposer;
pub mod util;

pub use base::{Accidental, PitchClass, Semitones, ShiftArg, TransposeOutcome, TransposeRequest};
pub use error::{RequestError, RequestErrorPayload, TokenError};
pub use transposer::{transpose, transpose_and_set_accidental, transpose_by_steps, with_accidental};
