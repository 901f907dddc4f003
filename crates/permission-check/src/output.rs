//! Helpers for rendering verdicts and target listings.

use std::io::Write;

use eyre::{Context, Result};
use permission_clause::{ClauseVerdict, RpnQueue};

fn verdict_word(verdict: &ClauseVerdict) -> &'static str {
    if verdict.is_permitted() {
        "permitted"
    } else {
        "denied"
    }
}

pub(crate) fn write_verdict(writer: &mut dyn Write, verdict: &ClauseVerdict) -> Result<()> {
    writeln!(writer, "{}", verdict_word(verdict)).wrap_err("failed to write verdict")
}

pub(crate) fn write_rpn(writer: &mut dyn Write, rpn: Option<&RpnQueue>) -> Result<()> {
    let written = match rpn {
        Some(rpn) => writeln!(writer, "rpn: {rpn}"),
        None => writeln!(writer, "rpn: (unrestricted)"),
    };
    written.wrap_err("failed to write compiled clause")
}

pub(crate) fn write_diagnostic(writer: &mut dyn Write, verdict: &ClauseVerdict) -> Result<()> {
    let Some(err) = verdict.error() else {
        return Ok(());
    };
    writeln!(writer, "error: {err}").wrap_err("failed to write clause diagnostic")
}

pub(crate) fn write_target(writer: &mut dyn Write, target: &str) -> Result<()> {
    writeln!(writer, "{target}").wrap_err_with(|| format!("failed to write target '{target}'"))
}

pub(crate) fn write_target_verdict(
    writer: &mut dyn Write,
    target: &str,
    verdict: &ClauseVerdict,
) -> Result<()> {
    let word = verdict_word(verdict);
    let written = match verdict.error() {
        Some(err) => writeln!(writer, "{target}\t{word}\t{err}"),
        None => writeln!(writer, "{target}\t{word}"),
    };
    written.wrap_err_with(|| format!("failed to write verdict for target '{target}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use permission_clause::evaluate;

    fn render(write: impl FnOnce(&mut dyn Write) -> Result<()>) -> String {
        let mut buffer = Vec::new();
        if let Err(err) = write(&mut buffer) {
            panic!("writing to a buffer should succeed: {err}");
        }
        String::from_utf8_lossy(&buffer).into_owned()
    }

    #[test]
    fn writes_plain_verdicts() {
        let verdict = evaluate(Some("A"), &["A"]);
        assert_eq!(render(|w| write_verdict(w, &verdict)), "permitted\n");
        assert_eq!(render(|w| write_diagnostic(w, &verdict)), "");
    }

    #[test]
    fn writes_failed_target_verdicts_with_reason() {
        let verdict = evaluate(Some("A B"), &["A"]);
        assert_eq!(
            render(|w| write_target_verdict(w, "Orders", &verdict)),
            "Orders\tdenied\tclause reduced to 2 values, expected exactly one\n"
        );
    }

    #[test]
    fn writes_unrestricted_rpn() {
        assert_eq!(render(|w| write_rpn(w, None)), "rpn: (unrestricted)\n");
    }
}
