use std::collections::HashMap;
use crate::base::Accidental;
lazy_static::lazy_static! {
    /// Every spelling accepted for an accidental preference.
    pub static ref ACCIDENTAL_TOKENS: HashMap<&'static str, Accidental> = {
        HashMap::from([
            ("#", Accidental::Sharp),
            ("♯", Accidental::Sharp),
            ("sharp", Accidental::Sharp),
            ("b", Accidental::Flat),
            ("♭", Accidental::Flat),
            ("flat", Accidental::Flat),
            ("0", Accidental::AsIs)
        ])
    };
}
