//! Scalar and series field extractors.
//!
//! Each extractor is bound to one marker substring and one fixed-column
//! extraction rule of the Gaussian log grammar. Scalars return `Ok(None)`
//! and series return an empty `Vec` when the marker is absent — the file
//! is simply not that calculation type. A *matched* line whose expected
//! token is missing or non-numeric is [`Error::Malformed`].

use std::sync::LazyLock;

use regex::Regex;

use super::error::{Error, Field};
use super::scan::{self, ScanMode};
use crate::model::document::LogDocument;
use crate::model::spectrum::VibrationalModes;

/// Signed decimal as printed in the thermochemistry summary lines.
static THERMO_FLOAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d{1,5}\.\d{1,10}").expect("invalid thermo float pattern"));

/// Declared atom count: first `NAtoms=` line, whitespace token 1.
pub fn atom_count(doc: &LogDocument) -> Result<Option<usize>, Error> {
    let Some((line_no, line)) = scan::first_match(doc, "NAtoms=") else {
        return Ok(None);
    };
    let token = nth_token(line, 1)
        .ok_or_else(|| Error::malformed(Field::AtomCount, line_no, "missing count token"))?;
    let count = token.parse::<usize>().map_err(|_| {
        Error::malformed(
            Field::AtomCount,
            line_no,
            format!("invalid count token '{token}'"),
        )
    })?;
    Ok(Some(count))
}

/// Every SCF convergence energy (`SCF Done:` lines, token 4), in file
/// order. Unit: Hartree/particle.
pub fn scf_energies(doc: &LogDocument) -> Result<Vec<f64>, Error> {
    token_series(doc, Field::ScfEnergy, "SCF Done:", TokenRule::Single(4))
}

/// Sum of electronic and thermal enthalpies from a Freq job.
/// Unit: Hartree/particle.
pub fn enthalpy(doc: &LogDocument) -> Result<Option<f64>, Error> {
    thermo_scalar(
        doc,
        Field::Enthalpy,
        "Sum of electronic and thermal Enthalpies",
    )
}

/// Thermal correction to the enthalpy from a Freq job.
/// Unit: Hartree/particle.
pub fn enthalpy_correction(doc: &LogDocument) -> Result<Option<f64>, Error> {
    thermo_scalar(
        doc,
        Field::EnthalpyCorrection,
        "Thermal correction to Enthalpy=",
    )
}

/// Harmonic frequencies of all normal modes (cm⁻¹).
pub fn frequencies(doc: &LogDocument) -> Result<Vec<f64>, Error> {
    token_series(doc, Field::Frequency, "Frequencies", TokenRule::From(2))
}

/// Reduced masses of all normal modes (AMU).
pub fn reduced_masses(doc: &LogDocument) -> Result<Vec<f64>, Error> {
    token_series(doc, Field::ReducedMass, "Red. masses", TokenRule::From(3))
}

/// Force constants of all normal modes (mDyne/Å).
pub fn force_constants(doc: &LogDocument) -> Result<Vec<f64>, Error> {
    token_series(doc, Field::ForceConstant, "Frc consts", TokenRule::From(3))
}

/// IR intensities of all normal modes (KM/mol).
pub fn ir_intensities(doc: &LogDocument) -> Result<Vec<f64>, Error> {
    token_series(doc, Field::IrIntensity, " IR Inten", TokenRule::From(3))
}

/// Raman scattering activities of all normal modes (Å⁴/AMU).
pub fn raman_activities(doc: &LogDocument) -> Result<Vec<f64>, Error> {
    token_series(doc, Field::RamanActivity, " Raman Activ", TokenRule::From(3))
}

/// Isotropic NMR shieldings (ppm), one per atom in declaration order.
pub fn isotropic_shieldings(doc: &LogDocument) -> Result<Vec<f64>, Error> {
    token_series(doc, Field::NmrShielding, "Isotropic = ", TokenRule::Single(4))
}

/// All five per-mode series of a frequency calculation in one pass set.
pub fn vibrational_modes(doc: &LogDocument) -> Result<VibrationalModes, Error> {
    Ok(VibrationalModes {
        frequencies: frequencies(doc)?,
        reduced_masses: reduced_masses(doc)?,
        force_constants: force_constants(doc)?,
        ir_intensities: ir_intensities(doc)?,
        raman_activities: raman_activities(doc)?,
    })
}

/// How numeric values sit on a matched line.
#[derive(Clone, Copy)]
enum TokenRule {
    /// One value at a fixed whitespace-token index.
    Single(usize),
    /// Every token from this index onward is a value.
    From(usize),
}

fn token_series(
    doc: &LogDocument,
    field: Field,
    marker: &str,
    rule: TokenRule,
) -> Result<Vec<f64>, Error> {
    let mut values = Vec::new();

    for (line_no, line) in scan::matching_lines(doc, marker, ScanMode::All) {
        match rule {
            TokenRule::Single(idx) => {
                values.push(float_token(field, line_no, line, idx)?);
            }
            TokenRule::From(start) => {
                for (offset, token) in line.split_whitespace().skip(start).enumerate() {
                    let value = token.parse::<f64>().map_err(|_| {
                        Error::malformed(
                            field,
                            line_no,
                            format!("invalid numeric token '{}' at index {}", token, start + offset),
                        )
                    })?;
                    values.push(value);
                }
            }
        }
    }

    Ok(values)
}

fn float_token(field: Field, line_no: usize, line: &str, idx: usize) -> Result<f64, Error> {
    let token = nth_token(line, idx).ok_or_else(|| {
        Error::malformed(field, line_no, format!("expected a value at token index {idx}"))
    })?;
    token.parse::<f64>().map_err(|_| {
        Error::malformed(field, line_no, format!("invalid numeric token '{token}'"))
    })
}

fn thermo_scalar(doc: &LogDocument, field: Field, marker: &str) -> Result<Option<f64>, Error> {
    let Some((line_no, line)) = scan::first_match(doc, marker) else {
        return Ok(None);
    };
    let text = THERMO_FLOAT
        .find(line)
        .ok_or_else(|| Error::malformed(field, line_no, "no decimal value on marker line"))?
        .as_str();
    let value = text.parse::<f64>().map_err(|_| {
        Error::malformed(field, line_no, format!("invalid decimal value '{text}'"))
    })?;
    Ok(Some(value))
}

fn nth_token(line: &str, idx: usize) -> Option<&str> {
    line.split_whitespace().nth(idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::read_log_from;

    fn doc(text: &str) -> LogDocument {
        read_log_from(text.as_bytes()).expect("build document")
    }

    #[test]
    fn atom_count_reads_token_one_of_the_first_natoms_line() {
        let doc = doc(" NAtoms=     3 NQM=        3 NQMF=       0\n");
        assert_eq!(atom_count(&doc).unwrap(), Some(3));
    }

    #[test]
    fn atom_count_is_none_when_marker_absent() {
        let doc = doc(" Entering Link 1\n");
        assert_eq!(atom_count(&doc).unwrap(), None);
    }

    #[test]
    fn atom_count_rejects_a_non_numeric_count() {
        let doc = doc(" NAtoms= three\n");
        let err = atom_count(&doc).unwrap_err();
        assert!(matches!(
            err,
            Error::Malformed {
                field: Field::AtomCount,
                line: 1,
                ..
            }
        ));
    }

    #[test]
    fn scf_energies_collects_one_float_per_marker_line_in_order() {
        let doc = doc("\
 SCF Done:  E(RB3LYP) =  -40.5183892     A.U. after    9 cycles
 Berny optimization.
 SCF Done:  E(RB3LYP) =  -40.5189762     A.U. after    7 cycles
 SCF Done:  E(RB3LYP) =  -40.5189770     A.U. after    4 cycles
");
        assert_eq!(
            scf_energies(&doc).unwrap(),
            vec![-40.5183892, -40.5189762, -40.5189770]
        );
    }

    #[test]
    fn scf_energies_single_line_matches_spec_example() {
        let doc = doc(" SCF Done:      E(RB3LYP) =  -40.1234567     A.U. after    8 cycles\n");
        assert_eq!(scf_energies(&doc).unwrap(), vec![-40.1234567]);
    }

    #[test]
    fn scf_energies_empty_when_no_scf_lines() {
        let doc = doc(" Entering Link 1\n");
        assert!(scf_energies(&doc).unwrap().is_empty());
    }

    #[test]
    fn enthalpy_extracts_the_signed_decimal_on_the_summary_line() {
        let doc = doc(" Sum of electronic and thermal Enthalpies=            -40.476063\n");
        assert_eq!(enthalpy(&doc).unwrap(), Some(-40.476063));
    }

    #[test]
    fn enthalpy_correction_extracts_the_unsigned_decimal() {
        let doc = doc(" Thermal correction to Enthalpy=                  0.052716\n");
        assert_eq!(enthalpy_correction(&doc).unwrap(), Some(0.052716));
    }

    #[test]
    fn thermo_scalars_are_none_for_a_non_freq_log() {
        let doc = doc(" SCF Done:  E(RB3LYP) =  -40.5183892     A.U. after    9 cycles\n");
        assert_eq!(enthalpy(&doc).unwrap(), None);
        assert_eq!(enthalpy_correction(&doc).unwrap(), None);
    }

    const FREQ_BLOCKS: &str = "\
                     1                      2                      3
                    A2                     E                      E
 Frequencies --   1336.0034              1337.8491              1337.8492
 Red. masses --      1.1925                 1.1078                 1.1078
 Frc consts  --      1.2540                 1.1682                 1.1682
 IR Inten    --     14.2664                14.2373                14.2373
 Raman Activ --      0.0000                 1.1772                 1.1772
                     4                      5                      6
                    A1                     T2                     T2
 Frequencies --   1436.5382              3026.7072              3103.2129
 Red. masses --      1.0455                 1.0078                 1.1019
 Frc consts  --      1.2713                 5.4399                 6.2522
 IR Inten    --      0.0000                 0.0000                25.6162
 Raman Activ --     25.4311               142.1046                60.2960
";

    #[test]
    fn frequency_series_append_across_blocks_in_order() {
        let doc = doc(FREQ_BLOCKS);

        let freq = frequencies(&doc).unwrap();
        assert_eq!(freq.len(), 6);
        assert_eq!(freq[0], 1336.0034);
        assert_eq!(freq[5], 3103.2129);

        assert_eq!(reduced_masses(&doc).unwrap()[3], 1.0455);
        assert_eq!(force_constants(&doc).unwrap()[4], 5.4399);
        assert_eq!(ir_intensities(&doc).unwrap()[5], 25.6162);
        assert_eq!(raman_activities(&doc).unwrap()[0], 0.0000);
    }

    #[test]
    fn vibrational_modes_series_stay_parallel() {
        let doc = doc(FREQ_BLOCKS);
        let modes = vibrational_modes(&doc).unwrap();

        assert_eq!(modes.mode_count(), 6);
        assert_eq!(modes.reduced_masses.len(), 6);
        assert_eq!(modes.force_constants.len(), 6);
        assert_eq!(modes.ir_intensities.len(), 6);
        assert_eq!(modes.raman_activities.len(), 6);
    }

    #[test]
    fn nmr_shieldings_take_token_four_per_matched_line() {
        let doc = doc("\
      1  C    Isotropic =   195.3385   Anisotropy =     9.9794
      2  H    Isotropic =    31.8916   Anisotropy =     9.0267
      3  H    Isotropic =    31.8916   Anisotropy =     9.0269
");
        assert_eq!(
            isotropic_shieldings(&doc).unwrap(),
            vec![195.3385, 31.8916, 31.8916]
        );
    }

    #[test]
    fn malformed_frequency_token_is_reported_with_its_line() {
        let doc = doc(" Frequencies --   1336.0034              n/a\n");
        let err = frequencies(&doc).unwrap_err();
        assert!(matches!(
            err,
            Error::Malformed {
                field: Field::Frequency,
                line: 1,
                ..
            }
        ));
    }
}
