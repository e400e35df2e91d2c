use crate::base::*;

/// Semitone height of a bare note letter, `None` outside `A`-`G`.
pub fn letter_height(letter : char)->Option<NoteHeight>{
    if ('A'..='G').contains(&letter){
        Some(CHAR_TONIC_VALUES[(letter as u32 - 'A' as u32) as usize])
    }else{
        None
    }
}

/// `(a + steps) mod 12`, always in `0..12` for any step count.
pub fn shift(a : NoteHeight, steps : Semitones)->NoteHeight{
    let a = (a % 12) as Semitones;
    ((a + steps.rem_euclid(12)) % 12) as NoteHeight
}
