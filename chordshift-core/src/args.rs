use crate::base::*;

/// Settle the roles of the two optional positional arguments.
///
/// An accidental in second position stands for the preference when the
/// third argument is absent or `"0"`; the step count is then zero. When both
/// carry an accidental the third one wins.
pub fn resolve(second : Option<ShiftArg>, third : Option<Accidental>)->(Semitones,Accidental){
    let third = third.unwrap_or_default();
    let resolved = match (second, third){
        (None, acc) => (0, acc),
        (Some(ShiftArg::Steps(steps)), acc) => (steps, acc),
        (Some(ShiftArg::Accidental(acc)), Accidental::AsIs) => (0, acc),
        (Some(ShiftArg::Accidental(ignored)), acc) => {
            tracing::debug!(%ignored, %acc, "two accidentals given, keeping the last");
            (0, acc)
        }
    };
    tracing::trace!(steps = resolved.0, accidental = %resolved.1, "resolved arguments");
    resolved
}
