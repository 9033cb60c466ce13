/// Parallel per-mode series from a frequency calculation.
///
/// Values at index `i` across the series describe the same normal mode.
/// Gaussian prints the five quantities in lockstep blocks, so the
/// occurrence counts are assumed to match; the extractor does not verify
/// this.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VibrationalModes {
    /// Harmonic frequencies (cm⁻¹).
    pub frequencies: Vec<f64>,
    /// Reduced masses (AMU).
    pub reduced_masses: Vec<f64>,
    /// Force constants (mDyne/Å).
    pub force_constants: Vec<f64>,
    /// IR intensities (KM/mol).
    pub ir_intensities: Vec<f64>,
    /// Raman scattering activities (Å⁴/AMU).
    pub raman_activities: Vec<f64>,
}

impl VibrationalModes {
    #[inline]
    pub fn mode_count(&self) -> usize {
        self.frequencies.len()
    }
}
