//! Coleman-Liau readability over ASCII text.
//!
//! Word boundaries use a fixed heuristic (see [`tally`]) rather than a real
//! tokenizer. The grade coefficients were fitted against those counts, so
//! the heuristic must not be "improved".

use crate::domain::errors::ReadabilityError;
use crate::domain::models::{GradeBucket, ReadabilityReport, Tally};

/// One pass, one byte of lookahead.
///
/// A word starts at index 0 when that byte is not a space, and after every
/// space that is followed by a non-space. Each `.`, `?` or `!` ends a
/// sentence, so ellipses and abbreviations count more than once.
pub fn tally(text: &str) -> Tally {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut t = Tally::default();
    for (i, &b) in bytes.iter().enumerate() {
        if b.is_ascii_alphabetic() {
            t.letters += 1;
        }
        let space_then_word = i + 1 != len && b == b' ' && bytes[i + 1] != b' ';
        if space_then_word || (i == 0 && b != b' ') {
            t.words += 1;
        }
        if matches!(b, b'.' | b'?' | b'!') {
            t.sentences += 1;
        }
    }
    t
}

/// Raw Coleman-Liau index before rounding.
///
/// Per-100-word averages are taken in single precision, then the linear
/// combination in double precision.
pub fn coleman_liau(t: &Tally) -> Result<f64, ReadabilityError> {
    if t.words == 0 {
        return Err(ReadabilityError::NoWords);
    }
    let words = t.words as f32;
    let l = (t.letters as f32 / words) * 100.0;
    let s = (t.sentences as f32 / words) * 100.0;
    Ok(0.0588 * f64::from(l) - 0.296 * f64::from(s) - 15.8)
}

pub fn classify(grade: i64) -> GradeBucket {
    if grade < 1 {
        GradeBucket::BeforeGrade1
    } else if grade >= 16 {
        GradeBucket::Grade16Plus
    } else {
        GradeBucket::Grade(grade as u8)
    }
}

pub fn score(text: &str) -> Result<ReadabilityReport, ReadabilityError> {
    let t = tally(text);
    let index = coleman_liau(&t)?;
    // f64::round rounds half away from zero
    let grade = index.round() as i64;
    Ok(ReadabilityReport {
        tally: t,
        index,
        grade,
        label: classify(grade).to_string(),
    })
}
