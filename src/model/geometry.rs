use std::fmt::Write as _;

/// One body row of a `Standard orientation` table: the raw six-column row
/// with the atomic-type column dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// Center number (1-based position in the table).
    pub center: usize,
    /// Atomic number of the element at this center.
    pub atomic_number: u32,
    /// Cartesian coordinates in Ångström.
    pub position: [f64; 3],
}

/// Atomic coordinates at one step of a calculation, in table order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryFrame {
    pub atoms: Vec<AtomRecord>,
}

impl GeometryFrame {
    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Renders the frame as space-joined `Z x y z` rows, one atom per line,
    /// without the center-number column. This is the shape pasted into
    /// Gaussian input decks. Coordinates keep the log's six-decimal layout.
    pub fn to_block_text(&self) -> String {
        let mut out = String::new();
        for (i, atom) in self.atoms.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = write!(
                out,
                "{} {:.6} {:.6} {:.6}",
                atom.atomic_number, atom.position[0], atom.position[1], atom.position[2]
            );
        }
        out
    }
}
