use crate::domain::{EigError, EigResult};
use crate::serialization::{format_fixed_f64, write_text_artifact};
use std::path::Path;

/// In-memory form of a parsed `.eig` file.
///
/// Built once by the loader and immutable afterwards. Mode frequencies
/// are validated at parse time but not retained; the coordinate writer
/// has no use for them.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenvectorModel {
    atomic_numbers: Vec<usize>,
    atomic_masses: Vec<f64>,
    positions: Vec<[f64; 3]>,
    kpoint_count: usize,
    mode_count: usize,
    // Flat [kpoint][mode][atom] layout, one 3-vector per row.
    eigenvectors: Vec<[f64; 3]>,
}

impl EigenvectorModel {
    pub(super) fn from_parts(
        atomic_numbers: Vec<usize>,
        atomic_masses: Vec<f64>,
        positions: Vec<[f64; 3]>,
        kpoint_count: usize,
        mode_count: usize,
        eigenvectors: Vec<[f64; 3]>,
    ) -> Self {
        debug_assert_eq!(atomic_masses.len(), atomic_numbers.len());
        debug_assert_eq!(positions.len(), atomic_numbers.len());
        debug_assert_eq!(
            eigenvectors.len(),
            kpoint_count * mode_count * atomic_numbers.len()
        );

        Self {
            atomic_numbers,
            atomic_masses,
            positions,
            kpoint_count,
            mode_count,
            eigenvectors,
        }
    }

    pub fn atom_count(&self) -> usize {
        self.atomic_numbers.len()
    }

    pub const fn kpoint_count(&self) -> usize {
        self.kpoint_count
    }

    pub const fn mode_count(&self) -> usize {
        self.mode_count
    }

    pub fn atomic_number(&self, atom: usize) -> usize {
        self.atomic_numbers[atom]
    }

    pub fn atomic_mass(&self, atom: usize) -> f64 {
        self.atomic_masses[atom]
    }

    pub fn position(&self, atom: usize) -> [f64; 3] {
        self.positions[atom]
    }

    /// Raw displacement 3-vector for one atom of the selected mode.
    ///
    /// Indices are 0-based; bounds checking is the caller's
    /// responsibility and out-of-range indices panic.
    pub fn eigenvector(&self, kpoint: usize, mode: usize, atom: usize) -> [f64; 3] {
        self.eigenvectors[(kpoint * self.mode_count + mode) * self.atom_count() + atom]
    }

    /// Eigenvector scaled by the inverse square root of the atomic mass.
    ///
    /// The placeholder element (atomic number 0) has mass 0.0; its
    /// displacement comes out non-finite and is written as-is.
    pub fn displacement(&self, kpoint: usize, mode: usize, atom: usize) -> [f64; 3] {
        let eigenvector = self.eigenvector(kpoint, mode, atom);
        let scale = self.atomic_masses[atom].sqrt();
        [
            eigenvector[0] / scale,
            eigenvector[1] / scale,
            eigenvector[2] / scale,
        ]
    }

    /// Renders the coordinate file for one (k-point, mode) pair: atom
    /// count, blank comment line, then per atom six 12.6f fields with no
    /// separator (position x/y/z, mass-weighted displacement x/y/z).
    pub fn render_xyz(&self, kpoint: usize, mode: usize) -> String {
        let mut lines = Vec::with_capacity(self.atom_count() + 2);
        lines.push(self.atom_count().to_string());
        lines.push(String::new());

        for atom in 0..self.atom_count() {
            let position = self.position(atom);
            let displacement = self.displacement(kpoint, mode, atom);

            let mut line = String::with_capacity(72);
            for component in position.into_iter().chain(displacement) {
                line.push_str(&format_fixed_f64(component, 12, 6));
            }
            lines.push(line);
        }

        lines.join("\n")
    }

    /// Writes the rendered coordinate file, creating or overwriting the
    /// target. The handle is scoped to this call.
    pub fn write_xyz(&self, path: &Path, kpoint: usize, mode: usize) -> EigResult<()> {
        write_text_artifact(path, &self.render_xyz(kpoint, mode)).map_err(|source| {
            EigError::io_system(
                "IO.XYZ_WRITE",
                format!(
                    "failed to write coordinate file '{}': {}",
                    path.display(),
                    source
                ),
            )
        })
    }
}
