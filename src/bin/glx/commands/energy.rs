use anyhow::{Result, bail};

use gausslog::extract::{csv, fields};

use crate::cli::{EnergyArgs, EnergyField};
use crate::display::{Context, print_note};

pub fn run(args: EnergyArgs, ctx: Context) -> Result<()> {
    let doc = super::load_document(&args.io)?;

    let text = match args.field {
        EnergyField::Scf => {
            let energies = fields::scf_energies(&doc)?;
            if ctx.interactive {
                print_note(&format!("{} SCF convergence point(s)", energies.len()));
            }
            csv::to_csv(&energies)
        }
        EnergyField::Enthalpy => match fields::enthalpy(&doc)? {
            Some(value) => format!("{value}\n"),
            None => bail!(
                "No 'Sum of electronic and thermal Enthalpies' line found. Is this a Freq calculation?"
            ),
        },
        EnergyField::Correction => match fields::enthalpy_correction(&doc)? {
            Some(value) => format!("{value}\n"),
            None => bail!(
                "No 'Thermal correction to Enthalpy=' line found. Is this a Freq calculation?"
            ),
        },
    };

    super::write_result(&args.io, &text)
}
