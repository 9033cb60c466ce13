use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "glx",
    about = "Gaussian log data extraction",
    version,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Basic run information (termination status, atom count)
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Energies and thermochemistry
    #[command(visible_alias = "e")]
    Energy(EnergyArgs),

    /// Vibrational and NMR spectra (CSV output)
    #[command(visible_alias = "s")]
    Spectra(SpectraArgs),

    /// Standard-orientation geometry frames
    #[command(visible_alias = "g")]
    Geom(GeomArgs),
}

/// I/O options shared by all commands.
#[derive(Args)]
pub struct IoOptions {
    /// Input log file (stdin if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress banner and notes (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct InfoArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// Field to extract
    #[arg(long, value_name = "FIELD", default_value = "status")]
    pub field: InfoField,
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum InfoField {
    /// Termination status (normal / link error / abnormal)
    #[default]
    Status,
    /// Declared atom count
    Natoms,
}

#[derive(Args)]
pub struct EnergyArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// Field to extract
    #[arg(long, value_name = "FIELD", default_value = "scf")]
    pub field: EnergyField,
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum EnergyField {
    /// All SCF energies in file order, CSV (Hartree)
    #[default]
    Scf,
    /// Sum of electronic and thermal enthalpies (Hartree)
    Enthalpy,
    /// Thermal correction to enthalpy (Hartree)
    Correction,
}

#[derive(Args)]
pub struct SpectraArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// Series to extract
    #[arg(long, value_name = "FIELD", default_value = "freq")]
    pub field: SpectraField,
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum SpectraField {
    /// Harmonic frequencies (cm⁻¹)
    #[default]
    Freq,
    /// Reduced masses (AMU)
    #[value(name = "redmass")]
    RedMass,
    /// Force constants (mDyne/Å)
    #[value(name = "frcconst")]
    FrcConst,
    /// IR intensities (KM/mol)
    Ir,
    /// Raman scattering activities (Å⁴/AMU)
    Raman,
    /// Isotropic NMR shieldings (ppm)
    Nmr,
}

#[derive(Args)]
pub struct GeomArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// Which frame(s) to print
    #[arg(long, value_name = "FRAME", default_value = "last")]
    pub frame: FramePick,
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum FramePick {
    /// First standard orientation in the file
    First,
    /// Final standard orientation (the optimized geometry of an Opt log)
    #[default]
    Last,
    /// Every frame, blank-line separated
    All,
}

pub fn parse() -> Cli {
    Cli::parse()
}
