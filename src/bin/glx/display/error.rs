use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    let msg = err.to_string();
    for line in wrap(&msg, 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 59) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hints) = collect_hints(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn collect_hints(err: &Error) -> Option<Vec<String>> {
    let mut hints = Vec::new();

    if let Some(extract_err) = err.downcast_ref::<gausslog::ExtractError>() {
        collect_extract_hints(&mut hints, extract_err);
    } else {
        collect_fallback_hints(&mut hints, err);
    }

    if hints.is_empty() { None } else { Some(hints) }
}

fn collect_extract_hints(hints: &mut Vec<String>, err: &gausslog::ExtractError) {
    use gausslog::ExtractError;

    match err {
        ExtractError::Io { source } => collect_std_io_hints(hints, source),

        ExtractError::Malformed { field, line, .. } => {
            hints.push(format!(
                "A '{}' marker matched near line {} but the line layout was unexpected",
                field, line
            ));
            hints.push("Inspect the file around that line for edited or merged content".into());
            hints.push("The log may come from an incompatible Gaussian version".into());
        }

        ExtractError::TruncatedBlock { line, .. } => {
            hints.push(format!(
                "The geometry table starting near line {} never closed",
                line
            ));
            hints.push("The file may have been cut off mid-write".into());
            hints.push("Check the run outcome with `glx info --field status`".into());
        }

        ExtractError::FrameOutOfRange { count: 0, .. } => {
            hints.push("This log contains no 'Standard orientation' tables".into());
            hints.push("Single-point jobs print none; request geometry from an Opt log".into());
            hints.push("Jobs run with NoSymm may print only 'Input orientation'".into());
        }

        ExtractError::FrameOutOfRange { index, count } => {
            hints.push(format!(
                "Frame {} was requested but the log holds only {} frame(s)",
                index, count
            ));
        }
    }
}

fn collect_std_io_hints(hints: &mut Vec<String>, source: &std::io::Error) {
    use std::io::ErrorKind;

    match source.kind() {
        ErrorKind::NotFound => {
            hints.push("File or directory not found".into());
            hints.push("Check the path spelling and ensure the file exists".into());
        }
        ErrorKind::PermissionDenied => {
            hints.push("Permission denied accessing the file".into());
            hints.push("Check file permissions with `ls -la`".into());
        }
        ErrorKind::InvalidData => {
            hints.push("File contains invalid or non-UTF-8 data".into());
            hints.push("Binary checkpoint files (.chk) are not log files".into());
        }
        ErrorKind::UnexpectedEof => {
            hints.push("Unexpected end of file encountered".into());
            hints.push("The file may be truncated or incomplete".into());
        }
        _ => {
            hints.push("I/O operation failed".into());
            hints.push("Check file path, permissions, and disk space".into());
        }
    }
}

fn collect_fallback_hints(hints: &mut Vec<String>, err: &Error) {
    let msg = error_chain_text(err);

    if msg.contains("terminal") || msg.contains("stdin") || msg.contains("tty") {
        hints.push("Input appears to be from a terminal".into());
        hints.push("Provide input via -i/--input or pipe a log to stdin".into());
        return;
    }

    if msg.contains("no such file") || msg.contains("not found") {
        hints.push("Check that the file path is correct".into());
        hints.push("Verify the file exists and is readable".into());
        return;
    }

    if msg.contains("freq calculation") {
        hints.push("Thermochemistry lines only appear in Freq job output".into());
        hints.push("Re-run the calculation with the Freq keyword".into());
    }

    if msg.contains("natoms") {
        hints.push("Very old or heavily filtered logs may omit the NAtoms= line".into());
    }
}

fn error_chain_text(err: &Error) -> String {
    let mut text = String::new();

    text.push_str(&err.to_string());

    let mut source = err.source();
    while let Some(cause) = source {
        text.push('\n');
        text.push_str(&cause.to_string());
        source = cause.source();
    }

    text.to_lowercase()
}
