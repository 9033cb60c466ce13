//! A pure Rust library for extracting structured chemistry data from
//! Gaussian `.log`/`.out` output files. It pulls specific numeric and text
//! fields out of large, loosely structured logs without re-running the
//! underlying calculation.
//!
//! # Features
//!
//! - **Run status** — Normal/error/abnormal termination classification,
//!   including the failing Gaussian link code (e.g. `l9999`)
//! - **Energies** — Every SCF convergence energy in file order, plus the
//!   thermal enthalpy and enthalpy correction from Freq jobs
//! - **Geometry** — All `Standard orientation` coordinate frames of an
//!   optimization, with first/last-frame selection
//! - **Spectra** — Harmonic frequencies, reduced masses, force constants,
//!   IR intensities, Raman activities, and isotropic NMR shieldings
//!
//! # Quick Start
//!
//! Load a document once, then run any number of independent extractors
//! over it:
//!
//! ```
//! use gausslog::extract::{self, csv, fields, termination};
//!
//! let log = "\
//!  NAtoms=      5 NActive=      5 NUniq=      2 SFac= 2.25D+00
//!  SCF Done:  E(RB3LYP) =  -40.5183892     A.U. after    9 cycles
//!  SCF Done:  E(RB3LYP) =  -40.5189770     A.U. after    4 cycles
//!  Normal termination of Gaussian 16 at Mon Jul  8 13:12:00 2024.";
//! let doc = extract::read_log_from(log.as_bytes())?;
//!
//! assert_eq!(fields::atom_count(&doc)?, Some(5));
//! assert!(termination::classify(&doc).is_normal());
//!
//! let energies = fields::scf_energies(&doc)?;
//! assert_eq!(csv::to_csv(&energies), "-40.5183892\n-40.518977\n");
//! # Ok::<(), gausslog::extract::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`extract`] — The parsing engine: line source, marker scanner, field
//!   extractors, geometry block extractor, termination classifier, and the
//!   CSV result serializer
//! - [`LogDocument`] — The immutable line sequence one extraction works on
//!
//! # Data Types
//!
//! - [`GeometryFrame`] / [`AtomRecord`] — One standard-orientation table
//!   and its per-atom rows
//! - [`VibrationalModes`] — The five parallel per-mode series of a
//!   frequency calculation
//! - [`TerminationStatus`] — `Normal`, `LinkError(code)`, or `Abnormal`
//!
//! Absent fields are not errors: scalar extractors return `Ok(None)` and
//! series extractors return an empty `Vec` when a marker never occurs,
//! which simply means the file is not that calculation type.

mod model;

pub mod extract;

pub use model::document::LogDocument;
pub use model::geometry::{AtomRecord, GeometryFrame};
pub use model::spectrum::VibrationalModes;
pub use model::termination::TerminationStatus;

pub use extract::Error as ExtractError;
