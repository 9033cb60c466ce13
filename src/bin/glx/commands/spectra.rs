use anyhow::Result;

use gausslog::extract::{csv, fields};

use crate::cli::{SpectraArgs, SpectraField};
use crate::display::{Context, print_note};

pub fn run(args: SpectraArgs, ctx: Context) -> Result<()> {
    let doc = super::load_document(&args.io)?;

    let values = match args.field {
        SpectraField::Freq => fields::frequencies(&doc)?,
        SpectraField::RedMass => fields::reduced_masses(&doc)?,
        SpectraField::FrcConst => fields::force_constants(&doc)?,
        SpectraField::Ir => fields::ir_intensities(&doc)?,
        SpectraField::Raman => fields::raman_activities(&doc)?,
        SpectraField::Nmr => fields::isotropic_shieldings(&doc)?,
    };

    if ctx.interactive {
        let what = match args.field {
            SpectraField::Nmr => "shielding value(s)",
            _ => "mode value(s)",
        };
        print_note(&format!("{} {what}", values.len()));
    }

    super::write_result(&args.io, &csv::to_csv(&values))
}
