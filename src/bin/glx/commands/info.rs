use anyhow::{Result, bail};

use gausslog::extract::{fields, termination};

use crate::cli::{InfoArgs, InfoField};
use crate::display::{Context, print_note};

pub fn run(args: InfoArgs, ctx: Context) -> Result<()> {
    let doc = super::load_document(&args.io)?;

    let text = match args.field {
        InfoField::Status => {
            let status = termination::classify(&doc);
            format!("{status}\n")
        }
        InfoField::Natoms => match fields::atom_count(&doc)? {
            Some(count) => format!("{count}\n"),
            None => bail!("No 'NAtoms=' line found in this log."),
        },
    };

    if ctx.interactive {
        print_note(&format!("scanned {} line(s)", doc.line_count()));
    }

    super::write_result(&args.io, &text)
}
