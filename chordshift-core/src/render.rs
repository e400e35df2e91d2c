use crate::base::{Accidental, ENHARMONIC_PAIRS};

/// Final spelling pass over a sharp-spelled chord.
///
/// Only whole sharp note names (`"C#"`..`"A#"`) are rewritten, a bare `#` or
/// `b` in extension text is never touched.
pub fn render(chord : String, accidental : Accidental)->String{
    match accidental{
        Accidental::Sharp | Accidental::AsIs => chord,
        Accidental::Flat => ENHARMONIC_PAIRS.iter().fold(chord,|acc,&(sharp,flat)|{
            if acc.contains(sharp){
                acc.replace(sharp, flat)
            }else{
                acc
            }
        })
    }
}
