//! Note-token scanner.
//!
//! Grammar of a note token: one uppercase letter `A`-`G`, optionally followed
//! by a single `#`. Everything else is passed through as text. The scanner
//! runs on already normalized input, so flats and glyphs never reach it.
//!
//! Adjacent letters are separate tokens (`"CE"` is two notes) and a `#` not
//! preceded by a note letter is text (`"(#11)"`).
use crate::base::PitchClass;

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum Piece<'i>{
    Text(&'i str),
    Note(PitchClass)
}

pub struct NoteScanner<'i>{
    src : &'i str,
    pos : usize
}

impl<'i> NoteScanner<'i>{
    pub fn new(src : &'i str)->Self{
        NoteScanner{ src, pos : 0 }
    }
}

fn is_note_letter(b : u8)->bool{
    (b'A'..=b'G').contains(&b)
}

//All token bytes are ASCII, so every cut lands on a char boundary
impl<'i> Iterator for NoteScanner<'i>{
    type Item = Piece<'i>;

    fn next(&mut self)->Option<Self::Item>{
        let src = self.src;
        let bytes = src.as_bytes();
        let start = self.pos;
        let first = *bytes.get(start)?;

        if is_note_letter(first){
            let sharp = bytes.get(start + 1) == Some(&b'#');
            self.pos = if sharp { start + 2 } else { start + 1 };
            return PitchClass::from_letter(first as char, sharp).map(Piece::Note);
        }

        let end = bytes[start..].iter()
            .position(|b|is_note_letter(*b))
            .map_or(bytes.len(),|off|start + off);
        self.pos = end;
        Some(Piece::Text(&src[start..end]))
    }
}

pub fn scan(src : &str)->NoteScanner<'_>{
    NoteScanner::new(src)
}

#[cfg(test)]
mod tests{
    use super::*;

    fn note(v : u8)->Piece<'static>{
        Piece::Note(PitchClass::new(v))
    }

    #[test]
    fn root_and_suffix(){
        let pieces : Vec<_> = scan("C#maj7").collect();
        assert_eq!(pieces, vec![note(1), Piece::Text("maj7")]);
    }

    #[test]
    fn adjacent_letters(){
        let pieces : Vec<_> = scan("CE#G").collect();
        assert_eq!(pieces, vec![note(0), note(5), note(7)]);
    }

    #[test]
    fn bare_sharp_is_text(){
        let pieces : Vec<_> = scan("G13(b9#11)").collect();
        assert_eq!(pieces, vec![note(7), Piece::Text("13(b9#11)")]);
    }

    #[test]
    fn lowercase_and_unicode_pass_through(){
        let pieces : Vec<_> = scan("Δadd9 ~ Am").collect();
        assert_eq!(pieces, vec![Piece::Text("Δadd9 ~ "), note(9), Piece::Text("m")]);
    }

    #[test]
    fn double_sharp_keeps_second_as_text(){
        let pieces : Vec<_> = scan("F##").collect();
        assert_eq!(pieces, vec![note(6), Piece::Text("#")]);
    }

    #[test]
    fn empty_input(){
        assert_eq!(scan("").next(), None);
    }
}
