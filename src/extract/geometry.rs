//! Standard-orientation block extraction.
//!
//! Each `Standard orientation` table is shaped as: marker line, separator,
//! two column-header lines, separator, body rows, separator. Body rows sit
//! strictly between the 2nd and 3rd separator; the 3rd separator closes
//! the frame and the machine returns to idle for the next occurrence.

use super::error::{Error, Field};
use crate::model::document::LogDocument;
use crate::model::geometry::{AtomRecord, GeometryFrame};

const ORIENTATION_MARKER: &str = "Standard orientation";

enum BlockState {
    Idle,
    Capturing {
        marker_line: usize,
        separators: u8,
        atoms: Vec<AtomRecord>,
    },
}

/// All standard-orientation frames in document order. A document with no
/// `Standard orientation` marker yields an empty sequence.
pub fn standard_orientations(doc: &LogDocument) -> Result<Vec<GeometryFrame>, Error> {
    let mut frames = Vec::new();
    let mut state = BlockState::Idle;

    for (line_no, line) in doc.numbered_lines() {
        if line.contains(ORIENTATION_MARKER) {
            // A fresh marker always restarts the machine, even mid-block.
            state = BlockState::Capturing {
                marker_line: line_no,
                separators: 0,
                atoms: Vec::new(),
            };
            continue;
        }

        if let BlockState::Capturing {
            separators, atoms, ..
        } = &mut state
        {
            if is_separator(line) {
                *separators += 1;
                if *separators == 3 {
                    frames.push(GeometryFrame {
                        atoms: std::mem::take(atoms),
                    });
                    state = BlockState::Idle;
                }
            } else if *separators == 2 {
                atoms.push(parse_body_row(line_no, line)?);
            }
        }
    }

    if let BlockState::Capturing { marker_line, .. } = state {
        return Err(Error::truncated_block(
            marker_line,
            "document ended before the closing separator",
        ));
    }

    Ok(frames)
}

/// The first frame in the document (frame index 0).
pub fn first_frame(doc: &LogDocument) -> Result<GeometryFrame, Error> {
    let mut frames = standard_orientations(doc)?;
    if frames.is_empty() {
        return Err(Error::FrameOutOfRange { index: 0, count: 0 });
    }
    Ok(frames.swap_remove(0))
}

/// The final frame in the document (the optimized geometry of an Opt log).
pub fn last_frame(doc: &LogDocument) -> Result<GeometryFrame, Error> {
    let mut frames = standard_orientations(doc)?;
    let count = frames.len();
    frames.pop().ok_or(Error::FrameOutOfRange { index: 0, count })
}

/// A table separator is a line consisting solely of repeated dashes.
fn is_separator(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && trimmed.bytes().all(|b| b == b'-')
}

/// Reduces a raw six-column body row to (center, atomic number, x, y, z)
/// by dropping the atomic-type column.
fn parse_body_row(line_no: usize, line: &str) -> Result<AtomRecord, Error> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 6 {
        return Err(Error::malformed(
            Field::Geometry,
            line_no,
            "coordinate row has fewer than 6 columns",
        ));
    }

    let center = tokens[0].parse::<usize>().map_err(|_| {
        Error::malformed(
            Field::Geometry,
            line_no,
            format!("invalid center number '{}'", tokens[0]),
        )
    })?;
    let atomic_number = tokens[1].parse::<u32>().map_err(|_| {
        Error::malformed(
            Field::Geometry,
            line_no,
            format!("invalid atomic number '{}'", tokens[1]),
        )
    })?;

    let mut position = [0.0_f64; 3];
    for (i, token) in tokens[3..6].iter().enumerate() {
        position[i] = token.parse::<f64>().map_err(|_| {
            Error::malformed(
                Field::Geometry,
                line_no,
                format!("invalid coordinate '{token}'"),
            )
        })?;
    }

    Ok(AtomRecord {
        center,
        atomic_number,
        position,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::read_log_from;

    fn doc(text: &str) -> LogDocument {
        read_log_from(text.as_bytes()).expect("build document")
    }

    const TWO_FRAME_OPT: &str = "\
                         Standard orientation:
 ---------------------------------------------------------------------
 Center     Atomic      Atomic             Coordinates (Angstroms)
 Number     Number       Type             X           Y           Z
 ---------------------------------------------------------------------
      1          8           0        0.000000    0.000000    0.119262
      2          1           0        0.000000    0.763239   -0.477047
      3          1           0        0.000000   -0.763239   -0.477047
 ---------------------------------------------------------------------
 SCF Done:  E(RB3LYP) =  -76.4089533     A.U. after   10 cycles
                         Standard orientation:
 ---------------------------------------------------------------------
 Center     Atomic      Atomic             Coordinates (Angstroms)
 Number     Number       Type             X           Y           Z
 ---------------------------------------------------------------------
      1          8           0        0.000000    0.000000    0.119162
      2          1           0        0.000000    0.763956   -0.476647
      3          1           0        0.000000   -0.763956   -0.476647
 ---------------------------------------------------------------------
 Rotational constants (GHZ):
";

    #[test]
    fn collects_one_frame_per_marker_with_all_body_rows() {
        let doc = doc(TWO_FRAME_OPT);
        let frames = standard_orientations(&doc).unwrap();

        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].atom_count(), 3);
        assert_eq!(frames[1].atom_count(), 3);

        let first_row = &frames[0].atoms[0];
        assert_eq!(first_row.center, 1);
        assert_eq!(first_row.atomic_number, 8);
        assert_eq!(first_row.position, [0.0, 0.0, 0.119262]);
    }

    #[test]
    fn first_and_last_pick_the_sequence_ends() {
        let doc = doc(TWO_FRAME_OPT);

        let first = first_frame(&doc).unwrap();
        let last = last_frame(&doc).unwrap();
        assert_eq!(first.atoms[0].position[2], 0.119262);
        assert_eq!(last.atoms[0].position[2], 0.119162);
    }

    #[test]
    fn no_marker_yields_an_empty_sequence() {
        let doc = doc(" SCF Done:  E(RB3LYP) =  -76.4089533     A.U. after   10 cycles\n");
        assert!(standard_orientations(&doc).unwrap().is_empty());
    }

    #[test]
    fn frame_requests_on_an_empty_sequence_are_out_of_range() {
        let doc = doc(" Entering Link 1\n");

        let err = first_frame(&doc).unwrap_err();
        assert!(matches!(err, Error::FrameOutOfRange { index: 0, count: 0 }));

        let err = last_frame(&doc).unwrap_err();
        assert!(matches!(err, Error::FrameOutOfRange { count: 0, .. }));
    }

    #[test]
    fn unterminated_block_is_reported_as_truncated() {
        let doc = doc("\
                         Standard orientation:
 ---------------------------------------------------------------------
 Center     Atomic      Atomic             Coordinates (Angstroms)
 Number     Number       Type             X           Y           Z
 ---------------------------------------------------------------------
      1          8           0        0.000000    0.000000    0.119262
");
        let err = standard_orientations(&doc).unwrap_err();
        assert!(matches!(err, Error::TruncatedBlock { line: 1, .. }));
    }

    #[test]
    fn short_body_row_is_malformed_not_truncated() {
        let doc = doc("\
                         Standard orientation:
 ---------------------------------------------------------------------
 Center     Atomic      Atomic             Coordinates (Angstroms)
 Number     Number       Type             X           Y           Z
 ---------------------------------------------------------------------
      1          8           0        0.000000    0.000000
 ---------------------------------------------------------------------
");
        let err = standard_orientations(&doc).unwrap_err();
        assert!(matches!(
            err,
            Error::Malformed {
                field: Field::Geometry,
                line: 6,
                ..
            }
        ));
    }
}
