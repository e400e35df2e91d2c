use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::TokenError;
use crate::names;
use crate::toneutil;

pub type NoteHeight = u8;
pub type Semitones = i32;

//Indexed by letter - 'A'
pub const CHAR_TONIC_VALUES:[NoteHeight;7] = [9,11,0,2,4,5,7];
pub const SHARP_TONIC_NAMES:[&str;12] = ["C","C#","D","D#","E","F","F#","G","G#","A","A#","B"];

/// Sharp/flat spellings of the five altered pitch classes, in replacement order.
pub const ENHARMONIC_PAIRS:[(&str,&str);5] = [
    ("C#","Db"),
    ("D#","Eb"),
    ("F#","Gb"),
    ("G#","Ab"),
    ("A#","Bb")
];

/// One of the twelve equal-tempered pitch classes, 0 = C.
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,PartialOrd,Ord)]
pub struct PitchClass(NoteHeight);

impl PitchClass{
    pub fn new(value : NoteHeight)->Self{
        PitchClass(value % 12)
    }

    /// Pitch class of a note letter `A`-`G`, raised a semitone when `sharp` is set.
    pub fn from_letter(letter : char, sharp : bool)->Option<Self>{
        toneutil::letter_height(letter).map(|h|{
            if sharp{
                PitchClass::new(h + 1)
            }else{
                PitchClass::new(h)
            }
        })
    }

    /// Canonical (sharp spelled) name.
    pub fn name(self)->&'static str{
        SHARP_TONIC_NAMES[self.0 as usize]
    }

    pub fn shifted(self, steps : Semitones)->Self{
        PitchClass(toneutil::shift(self.0, steps))
    }
}

impl fmt::Display for PitchClass{
    fn fmt(&self, f : &mut fmt::Formatter<'_>)->fmt::Result{
        f.write_str(self.name())
    }
}

/// Requested accidental spelling of the output.
///
/// `AsIs` is the `"0"` token: the preference is derived from the input chord.
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Default,Serialize,Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Accidental{
    Sharp,
    Flat,
    #[default]
    AsIs
}

impl Accidental{
    /// Resolved token, one of `"#"`, `"b"`, `"0"`.
    pub fn token(self)->&'static str{
        match self{
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
            Accidental::AsIs => "0"
        }
    }
}

impl fmt::Display for Accidental{
    fn fmt(&self, f : &mut fmt::Formatter<'_>)->fmt::Result{
        f.write_str(self.token())
    }
}

impl FromStr for Accidental{
    type Err = TokenError;
    fn from_str(s : &str)->Result<Self,Self::Err>{
        names::ACCIDENTAL_TOKENS.get(s)
            .copied()
            .ok_or_else(||TokenError::UnknownAccidental(s.to_owned()))
    }
}

impl TryFrom<String> for Accidental{
    type Error = TokenError;
    fn try_from(s : String)->Result<Self,Self::Error>{
        s.parse()
    }
}

impl From<Accidental> for &'static str{
    fn from(item : Accidental)->Self{
        item.token()
    }
}

/// Second positional argument of [`crate::transpose`]: either a step count
/// or an accidental token.
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
#[serde(untagged)]
pub enum ShiftArg{
    Steps(Semitones),
    Accidental(Accidental)
}

impl From<Semitones> for ShiftArg{
    fn from(item : Semitones)->Self{
        ShiftArg::Steps(item)
    }
}

impl From<Accidental> for ShiftArg{
    fn from(item : Accidental)->Self{
        ShiftArg::Accidental(item)
    }
}

//Accidental tokens win: "0" is the as-is token, not zero steps
impl FromStr for ShiftArg{
    type Err = TokenError;
    fn from_str(s : &str)->Result<Self,Self::Err>{
        if let Ok(acc) = s.parse::<Accidental>(){
            return Ok(ShiftArg::Accidental(acc));
        }
        s.trim().parse::<Semitones>()
            .map(ShiftArg::Steps)
            .map_err(|_|TokenError::NotAShift(s.to_owned()))
    }
}

#[derive(Debug,Clone,PartialEq,Eq,Default,Serialize,Deserialize)]
pub struct TransposeRequest{
    pub chord : String,
    #[serde(default)]
    pub shift : Option<ShiftArg>,
    #[serde(default)]
    pub accidental : Option<Accidental>
}

impl TransposeRequest{
    /// Fill unset arguments from `shift` and `accidental`.
    ///
    /// An accidental given in the shift slot counts as the request's own
    /// accidental, so only the step count is taken from `shift` then.
    pub fn or_defaults(mut self, shift : Option<ShiftArg>, accidental : Option<Accidental>)->Self{
        if let (Some(ShiftArg::Accidental(own)), None) = (self.shift, self.accidental){
            self.shift = None;
            self.accidental = Some(own);
        }
        if self.shift.is_none(){
            self.shift = shift;
        }
        if self.accidental.is_none(){
            self.accidental = accidental;
        }
        self
    }
}

#[derive(Debug,Clone,PartialEq,Eq,Serialize,Deserialize)]
pub struct TransposeOutcome{
    pub chord : String,
    pub result : String
}
