mod banner;
mod error;

pub use banner::{banner_for_help, print_banner};
pub use error::print_error;

use std::io::{self, Write};

#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub interactive: bool,
}

impl Context {
    pub fn detect() -> Self {
        Self {
            interactive: crate::io::stderr_is_tty(),
        }
    }

    pub fn with_quiet(self, quiet: bool) -> Self {
        if quiet { Self { interactive: false } } else { self }
    }
}

/// A dim side note on stderr; never mixed into the result stream.
pub fn print_note(msg: &str) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "  \x1b[2m·\x1b[0m {msg}");
}
