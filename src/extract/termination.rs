use std::sync::LazyLock;

use regex::Regex;

use super::scan::{self, ScanMode};
use crate::model::document::LogDocument;
use crate::model::termination::TerminationStatus;

/// Gaussian link executable as it appears in error-termination lines, e.g.
/// `/opt/g16/l9999.exe`. The capture is the link code itself.
static LINK_EXE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(l\d{1,4})\.exe").expect("invalid link pattern"));

/// Classifies the run outcome from the tail of the document.
///
/// The final line deciding `Normal` is deliberate: Gaussian appends the
/// normal-termination stamp last, so an earlier stamp from a previous run
/// in a concatenated log never counts. An empty document is `Abnormal`.
pub fn classify(doc: &LogDocument) -> TerminationStatus {
    if doc
        .last_line()
        .is_some_and(|line| line.contains("Normal termination"))
    {
        return TerminationStatus::Normal;
    }

    for (_, line) in scan::matching_lines(doc, "Error termination", ScanMode::All)
        .into_iter()
        .rev()
    {
        if let Some(captures) = LINK_EXE.captures(line) {
            return TerminationStatus::LinkError(captures[1].to_string());
        }
    }

    TerminationStatus::Abnormal
}
