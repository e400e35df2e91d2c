use crate::args;
use crate::base::*;
use crate::normalize::normalize;
use crate::preference::resolve_preference;
use crate::render::render;
use crate::scanner::{scan, Piece};

/// Shift every note token of one segment, leaving the other text in place.
pub fn shift_segment(segment : &str, steps : Semitones)->String{
    let mut out = String::with_capacity(segment.len() + 2);
    for piece in scan(segment){
        match piece{
            Piece::Text(text) => out.push_str(text),
            Piece::Note(pitch) => out.push_str(pitch.shifted(steps).name())
        }
    }
    out
}

/// Shift a normalized chord, root part and bass part separately.
pub fn shift_chord(normalized : &str, steps : Semitones)->String{
    match normalized.split_once('/'){
        Some((base,bass)) => {
            let mut out = shift_segment(base, steps);
            out.push('/');
            out.push_str(&shift_segment(bass, steps));
            out
        }
        None => shift_segment(normalized, steps)
    }
}

fn run(chord : &str, steps : Semitones, accidental : Accidental)->String{
    let accidental = resolve_preference(chord, accidental);
    let normalized = normalize(chord);
    let shifted = shift_chord(&normalized, steps);
    let result = render(shifted, accidental);
    tracing::debug!(chord, steps, accidental = %accidental, %result, "transposed");
    result
}

/// Transpose by `steps` semitones, keeping the flat/sharp balance of `chord`.
pub fn transpose_by_steps(chord : &str, steps : Semitones)->String{
    run(chord, steps, Accidental::AsIs)
}

/// Respell `chord` without moving it.
pub fn with_accidental(chord : &str, accidental : Accidental)->String{
    run(chord, 0, accidental)
}

pub fn transpose_and_set_accidental(chord : &str, steps : Semitones, accidental : Accidental)->String{
    run(chord, steps, accidental)
}

/// Positional entry point.
///
/// `second` is either the step count or, when `third` is absent or `"0"`,
/// the accidental preference:
///
/// ```
/// use chordshift_core::{transpose, Accidental, ShiftArg};
///
/// assert_eq!(transpose("C#", None, None), "C#");
/// assert_eq!(transpose("Eb", Some(ShiftArg::Steps(-5)), None), "Bb");
/// assert_eq!(transpose("F#", Some(Accidental::Flat.into()), None), "Gb");
/// assert_eq!(transpose("Bb/C#", Some((-2).into()), Some(Accidental::Flat)), "Ab/B");
/// ```
pub fn transpose(chord : &str, second : Option<ShiftArg>, third : Option<Accidental>)->String{
    let (steps,accidental) = args::resolve(second, third);
    run(chord, steps, accidental)
}

impl TransposeRequest{
    pub fn apply(&self)->TransposeOutcome{
        TransposeOutcome{
            chord : self.chord.clone(),
            result : transpose(&self.chord, self.shift, self.accidental)
        }
    }
}
