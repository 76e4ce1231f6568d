//! Static atomic-mass table indexed by atomic number.
//!
//! Index 0 is the placeholder entry for an unknown element and carries a
//! mass of exactly 0.0; a mass-weighted displacement for such an atom is
//! non-finite and is written out as-is.

const ATOMIC_MASSES: [f64; 119] = [
    0.00, 1.008, 4.002, 6.94, 9.012, 10.81, 12.011,
    14.007, 15.999, 18.998, 20.1797, 22.989, 24.305,
    26.981, 28.085, 30.973, 32.06, 35.45, 39.948,
    39.0983, 40.078, 44.955, 47.867, 50.9415, 51.9961,
    54.938, 55.845, 58.933, 58.6934, 63.546, 65.38,
    69.723, 72.63, 74.921, 78.971, 79.904, 83.798,
    85.4678, 87.62, 88.905, 91.224, 92.906, 95.95, 97.0,
    101.07, 102.905, 106.42, 107.8682, 112.414, 114.818,
    118.71, 121.76, 127.6, 126.904, 131.293, 132.905,
    137.327, 138.905, 140.116, 140.907, 144.242, 145.0,
    150.36, 151.964, 157.25, 158.925, 162.5, 164.93,
    167.259, 168.934, 173.045, 174.9668, 178.486,
    180.947, 183.84, 186.207, 190.23, 192.217, 195.084,
    196.966, 200.592, 204.38, 207.2, 208.98, 209.0,
    210.0, 222.0, 223.0, 226.0, 227.0, 232.0377, 231.035,
    238.028, 237.0, 244.0, 243.0, 247.0, 247.0, 251.0,
    252.0, 257.0, 258.0, 259.0, 262.0, 267.0, 270.0,
    269.0, 270.0, 270.0, 278.0, 281.0, 281.0, 285.0,
    286.0, 289.0, 289.0, 293.0, 293.0, 294.0,
];

/// Number of entries in the mass table (placeholder plus Z = 1..=118).
pub const MASS_TABLE_LEN: usize = ATOMIC_MASSES.len();

/// Looks up the atomic mass for an atomic number, bounds-checked.
pub fn atomic_mass(atomic_number: usize) -> Option<f64> {
    ATOMIC_MASSES.get(atomic_number).copied()
}
