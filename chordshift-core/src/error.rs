use thiserror::Error;

#[derive(Error,Debug,Clone,PartialEq,Eq)]
pub enum TokenError{
    #[error("Unknown accidental '{0}', expected one of #, b, sharp, flat, ♯, ♭, 0")]
    UnknownAccidental(String),
    #[error("'{0}' is neither a step count nor an accidental")]
    NotAShift(String)
}

#[derive(Error,Debug)]
#[error("Error reading request on line {line}")]
pub struct RequestError{
    pub line : usize,
    #[source]
    pub detail : RequestErrorPayload
}

#[derive(Error,Debug)]
pub enum RequestErrorPayload{
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error("Too many arguments '{0}'")]
    ExtraArguments(String)
}
