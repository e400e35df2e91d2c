//! Line oriented processing for the `batch` command.
//!
//! Plain lines read `CHORD [SHIFT] [ACCIDENTAL]` separated by whitespace,
//! JSON lines hold one [`TransposeRequest`] object each. Blank lines are
//! skipped; line numbers in errors are 1-based.
//!
//! Plain lines are split on whitespace, so a chord with internal spaces
//! such as `Cmaj7 (no3)` reads its second word as the shift and is rejected.
//! Such chords go through the JSON format, where the chord text is opaque.
use crate::base::*;
use crate::error::{RequestError, RequestErrorPayload};
use crate::util::PartitionResult;

#[derive(Debug,Clone,Copy,PartialEq,Eq,Default)]
pub enum LineFormat{
    #[default]
    Plain,
    Json
}

pub fn parse_plain_line(line : &str)->Result<TransposeRequest,RequestErrorPayload>{
    let mut fields = line.split_whitespace();
    let chord = fields.next().unwrap_or_default();
    let shift = fields.next().map(str::parse::<ShiftArg>).transpose()?;
    let accidental = fields.next().map(str::parse::<Accidental>).transpose()?;
    let rest : Vec<&str> = fields.collect();
    if !rest.is_empty(){
        return Err(RequestErrorPayload::ExtraArguments(rest.join(" ")));
    }
    Ok(TransposeRequest{
        chord : chord.to_owned(),
        shift,
        accidental
    })
}

pub fn parse_json_line(line : &str)->Result<TransposeRequest,RequestErrorPayload>{
    Ok(serde_json::from_str(line)?)
}

#[derive(Debug,Default)]
pub struct BatchResults{
    pub outcomes : Vec<(usize,TransposeOutcome)>,
    pub errors : Vec<RequestError>
}

/// Transpose every non-blank line of `input`.
///
/// `shift` and `accidental` fill in whatever a line leaves unset.
pub fn process_lines(
    input : &str,
    format : LineFormat,
    shift : Option<ShiftArg>,
    accidental : Option<Accidental>
)->BatchResults{
    let parse : fn(&str)->Result<TransposeRequest,RequestErrorPayload> = match format{
        LineFormat::Plain => parse_plain_line,
        LineFormat::Json => parse_json_line
    };
    let (outcomes,errors) =
        input.lines()
        .enumerate()
        .map(|(i,line)|(i + 1, line.trim()))
        .filter(|(_,line)|!line.is_empty())
        .partition_result(|(line_no,line)|{
            parse(line)
                .map(|req|(line_no, req.or_defaults(shift, accidental).apply()))
                .map_err(|detail|RequestError{ line : line_no, detail })
        });
    if !errors.is_empty(){
        tracing::warn!(failed = errors.len(), ok = outcomes.len(), "batch finished with errors");
    }
    BatchResults{ outcomes, errors }
}

#[cfg(test)]
mod tests{
    use super::*;
    use crate::error::TokenError;

    fn results(r : &BatchResults)->Vec<&str>{
        r.outcomes.iter().map(|(_,o)|o.result.as_str()).collect()
    }

    #[test]
    fn plain_line_fields(){
        let req = parse_plain_line("Bb/C#  -2 flat").unwrap();
        assert_eq!(req.chord, "Bb/C#");
        assert_eq!(req.shift, Some(ShiftArg::Steps(-2)));
        assert_eq!(req.accidental, Some(Accidental::Flat));

        let req = parse_plain_line("Eb #").unwrap();
        assert_eq!(req.shift, Some(ShiftArg::Accidental(Accidental::Sharp)));
    }

    #[test]
    fn plain_line_rejects_bad_tokens(){
        assert!(matches!(
            parse_plain_line("C up"),
            Err(RequestErrorPayload::Token(TokenError::NotAShift(_)))
        ));
        assert!(matches!(
            parse_plain_line("C 2 natural"),
            Err(RequestErrorPayload::Token(TokenError::UnknownAccidental(_)))
        ));
        assert!(matches!(
            parse_plain_line("C 2 b extra"),
            Err(RequestErrorPayload::ExtraArguments(_))
        ));
    }

    #[test]
    fn plain_batch_uses_defaults(){
        let r = process_lines("F#\n\nEb -5\nFmaj7 1 #\n", LineFormat::Plain, Some(ShiftArg::Steps(2)), None);
        assert!(r.errors.is_empty());
        assert_eq!(results(&r), vec!["G#","Bb","F#maj7"]);
        assert_eq!(r.outcomes[1].0, 3);
    }

    #[test]
    fn line_accidental_beats_batch_default(){
        let r = process_lines("Eb #\nEb\nF# 0\n", LineFormat::Plain, None, Some(Accidental::Flat));
        assert!(r.errors.is_empty());
        assert_eq!(results(&r), vec!["D#","Eb","F#"]);

        let r = process_lines("Eb #\n", LineFormat::Plain, Some(ShiftArg::Steps(2)), Some(Accidental::Flat));
        assert_eq!(results(&r), vec!["F"]);
    }

    #[test]
    fn spaced_chords_need_json(){
        assert!(matches!(
            parse_plain_line("Cmaj7 (no3)"),
            Err(RequestErrorPayload::Token(TokenError::NotAShift(_)))
        ));
        let r = process_lines(r#"{"chord":"Cmaj7 (no3)","shift":2}"#, LineFormat::Json, None, None);
        assert!(r.errors.is_empty());
        assert_eq!(results(&r), vec!["Dmaj7 (no3)"]);
    }

    #[test]
    fn json_batch_reports_line_numbers(){
        let input = r#"{"chord":"G13(♭9♯11)","shift":-1,"accidental":"b"}
not json
{"chord":"F#","shift":"b"}"#;
        let r = process_lines(input, LineFormat::Json, None, None);
        assert_eq!(results(&r), vec!["Gb13(b9#11)","Gb"]);
        assert_eq!(r.errors.len(), 1);
        assert_eq!(r.errors[0].line, 2);
        assert!(matches!(r.errors[0].detail, RequestErrorPayload::Json(_)));
    }
}
