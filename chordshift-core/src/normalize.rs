use crate::base::ENHARMONIC_PAIRS;

/// Rewrite the `♯`/`♭` glyphs to ASCII `#`/`b`.
pub fn ascii_glyphs(chord : &str)->String{
    chord.replace('♯', "#").replace('♭', "b")
}

/// Replace every flat note name with its sharp twin, one table pair at a time.
pub fn flats_to_sharps(chord : String)->String{
    ENHARMONIC_PAIRS.iter().fold(chord,|acc,&(sharp,flat)|{
        if acc.contains(flat){
            acc.replace(flat, sharp)
        }else{
            acc
        }
    })
}

/// Canonical sharp-only working form of a chord.
pub fn normalize(chord : &str)->String{
    flats_to_sharps(ascii_glyphs(chord))
}

#[cfg(test)]
mod tests{
    use super::*;

    #[test]
    fn glyphs(){
        assert_eq!(ascii_glyphs("G13(♭9♯11)"), "G13(b9#11)");
        assert_eq!(ascii_glyphs("Cmaj7"), "Cmaj7");
    }

    #[test]
    fn every_flat_name(){
        assert_eq!(normalize("Db Eb Gb Ab Bb"), "C# D# F# G# A#");
    }

    #[test]
    fn every_occurrence(){
        assert_eq!(normalize("Bb/Bb"), "A#/A#");
        assert_eq!(normalize("E♭7/B♭"), "D#7/A#");
    }

    #[test]
    fn extension_flats_stay(){
        assert_eq!(normalize("C7b9"), "C7b9");
        assert_eq!(normalize("Ebm7b5"), "D#m7b5");
    }

    #[test]
    fn unpaired_flats_stay(){
        assert_eq!(normalize("Cb"), "Cb");
        assert_eq!(normalize("Fb"), "Fb");
    }
}
