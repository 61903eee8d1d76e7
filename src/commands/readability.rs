use crate::cli::ReadabilityCli;
use crate::commands::{prompt, Status};
use crate::domain::constants::TEXT_PROMPT;
use crate::services::output::print_one;
use crate::services::prompt::read_line;
use crate::services::readability::score;
use std::io::{BufRead, Write};

pub fn handle_readability<R: BufRead, W: Write>(
    cli: &ReadabilityCli,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<Status> {
    let text = read_line(input, out, prompt(cli.json, TEXT_PROMPT))?;
    let report = score(&text)?;
    tracing::info!(
        letters = report.tally.letters,
        words = report.tally.words,
        sentences = report.tally.sentences,
        index = report.index,
        "text scored"
    );
    print_one(out, cli.json, report, |r| r.label.clone())?;
    Ok(Status::Success)
}

#[cfg(test)]
mod tests {
    use super::handle_readability;
    use crate::cli::ReadabilityCli;
    use crate::domain::errors::ReadabilityError;
    use std::io::Cursor;

    #[test]
    fn prints_grade_label() {
        let mut out: Vec<u8> = Vec::new();
        handle_readability(
            &ReadabilityCli { json: false },
            &mut Cursor::new("Congratulations! Today is your day.\n"),
            &mut out,
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Text: Grade 6\n");
    }

    #[test]
    fn json_report_flattens_tally() {
        let mut out: Vec<u8> = Vec::new();
        handle_readability(
            &ReadabilityCli { json: true },
            &mut Cursor::new("Hello\n"),
            &mut out,
        )
        .unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["ok"], true);
        assert_eq!(v["data"]["letters"], 5);
        assert_eq!(v["data"]["words"], 1);
        assert_eq!(v["data"]["sentences"], 0);
        assert_eq!(v["data"]["grade"], 14);
        assert_eq!(v["data"]["label"], "Grade 14");
    }

    #[test]
    fn blank_text_fails_without_a_result_line() {
        let mut out: Vec<u8> = Vec::new();
        let err = handle_readability(
            &ReadabilityCli { json: false },
            &mut Cursor::new("   \n"),
            &mut out,
        )
        .unwrap_err();
        assert_eq!(
            err.downcast_ref::<ReadabilityError>(),
            Some(&ReadabilityError::NoWords)
        );
        assert_eq!(out, b"Text: ");
    }
}
