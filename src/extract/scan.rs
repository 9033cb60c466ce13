use crate::model::document::LogDocument;

/// Which occurrences of a marker a scan yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    First,
    Last,
    All,
}

/// Finds lines containing `marker` (case-sensitive substring containment,
/// anchored nowhere), paired with 1-based line numbers, in document order.
///
/// Every field extractor funnels through this one primitive. An empty
/// result means the marker is absent; callers treat that as "field not
/// present in this file", never as an error.
pub fn matching_lines<'a>(
    doc: &'a LogDocument,
    marker: &str,
    mode: ScanMode,
) -> Vec<(usize, &'a str)> {
    let mut matches = doc
        .numbered_lines()
        .filter(|(_, line)| line.contains(marker));

    match mode {
        ScanMode::First => matches.next().into_iter().collect(),
        ScanMode::Last => matches.last().into_iter().collect(),
        ScanMode::All => matches.collect(),
    }
}

/// First line containing `marker`, if any.
pub fn first_match<'a>(doc: &'a LogDocument, marker: &str) -> Option<(usize, &'a str)> {
    doc.numbered_lines()
        .find(|(_, line)| line.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::read_log_from;

    fn doc(text: &str) -> LogDocument {
        read_log_from(text.as_bytes()).expect("build document")
    }

    const SAMPLE: &str = "\
 SCF Done:  E(RB3LYP) =  -40.5183892     A.U. after    9 cycles
 Step number   2
 SCF Done:  E(RB3LYP) =  -40.5189762     A.U. after    7 cycles
 Leave Link  502
";

    #[test]
    fn all_mode_yields_every_match_in_order() {
        let doc = doc(SAMPLE);
        let hits = matching_lines(&doc, "SCF Done:", ScanMode::All);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].0, 1);
        assert_eq!(hits[1].0, 3);
    }

    #[test]
    fn first_and_last_modes_pick_the_ends() {
        let doc = doc(SAMPLE);
        let first = matching_lines(&doc, "SCF Done:", ScanMode::First);
        let last = matching_lines(&doc, "SCF Done:", ScanMode::Last);
        assert_eq!(first[0].0, 1);
        assert_eq!(last[0].0, 3);
    }

    #[test]
    fn absent_marker_yields_empty_not_error() {
        let doc = doc(SAMPLE);
        assert!(matching_lines(&doc, "NAtoms=", ScanMode::All).is_empty());
        assert!(first_match(&doc, "NAtoms=").is_none());
    }

    #[test]
    fn matching_is_case_sensitive_substring_containment() {
        let doc = doc(SAMPLE);
        assert!(first_match(&doc, "scf done:").is_none());
        assert!(first_match(&doc, "Link  502").is_some());
    }
}
