use crate::base::Accidental;

/// Count flat (`b`, `♭`) and sharp (`#`, `♯`) markers anywhere in `chord`.
///
/// This is a literal character count, so a lowercase `b` in suffix text
/// counts as a flat too.
pub fn count_markers(chord : &str)->(usize,usize){
    chord.chars().fold((0,0),|(flats,sharps),c| match c{
        'b' | '♭' => (flats + 1, sharps),
        '#' | '♯' => (flats, sharps + 1),
        _ => (flats, sharps)
    })
}

/// Spelling implied by the original chord text; `AsIs` on a tie.
pub fn derive_accidental(chord : &str)->Accidental{
    let (flats,sharps) = count_markers(chord);
    if flats > sharps{
        Accidental::Flat
    }else if sharps > flats{
        Accidental::Sharp
    }else{
        Accidental::AsIs
    }
}

pub fn resolve_preference(chord : &str, requested : Accidental)->Accidental{
    match requested{
        Accidental::AsIs => {
            let derived = derive_accidental(chord);
            tracing::trace!(chord, accidental = %derived, "derived accidental");
            derived
        }
        explicit => explicit
    }
}
