use super::model::EigenvectorModel;
use crate::domain::{EigError, EigResult};
use crate::elements;
use std::fs;
use std::path::Path;

/// Reads and parses a GULP `.eig` eigenvector file.
///
/// The file handle is scoped to this call; it is released before the
/// function returns on every exit path.
pub fn load_eig_file(path: &Path) -> EigResult<EigenvectorModel> {
    let source = fs::read_to_string(path).map_err(|source| {
        EigError::io_system(
            "IO.EIG_OPEN",
            format!(
                "failed to read eigenvector file '{}': {}",
                path.display(),
                source
            ),
        )
    })?;
    parse_eig_source(&source)
}

/// Parses `.eig` content by strictly sequential line consumption.
///
/// Layout: atom count, one position line per atom, k-point count, mode
/// count, then per k-point a discarded header followed by per-mode
/// blocks (discarded header, frequency, one displacement line per atom).
/// Blank or comment lines are not tolerated anywhere a value is expected.
pub fn parse_eig_source(source: &str) -> EigResult<EigenvectorModel> {
    let mut cursor = LineCursor::new(source);

    let atom_count = parse_declared_count(cursor.next_line("atom count")?, "atom count")?;

    let mut atomic_numbers = Vec::with_capacity(atom_count);
    let mut atomic_masses = Vec::with_capacity(atom_count);
    let mut positions = Vec::with_capacity(atom_count);

    for _ in 0..atom_count {
        let (line, line_number) = cursor.next_line("atom position line")?;
        let mut tokens = line.split_whitespace();

        let atomic_number = tokens
            .next()
            .and_then(|token| token.parse::<usize>().ok())
            .ok_or_else(|| {
                EigError::input_validation(
                    "INPUT.EIG_ATOM_LINE",
                    format!(
                        "line {} should start with an integer atomic number: '{}'",
                        line_number,
                        line.trim_end()
                    ),
                )
            })?;
        let mass = elements::atomic_mass(atomic_number).ok_or_else(|| {
            EigError::input_validation(
                "INPUT.EIG_ATOMIC_NUMBER",
                format!(
                    "atomic number {} at line {} is outside the mass table (0..{})",
                    atomic_number,
                    line_number,
                    elements::MASS_TABLE_LEN
                ),
            )
        })?;
        let position =
            parse_vector3(&mut tokens, line, line_number, "INPUT.EIG_ATOM_LINE", "position")?;

        atomic_numbers.push(atomic_number);
        atomic_masses.push(mass);
        positions.push(position);
    }

    let kpoint_count = parse_declared_count(cursor.next_line("k-point count")?, "k-point count")?;
    let mode_count = parse_declared_count(cursor.next_line("mode count")?, "mode count")?;

    let total_rows = kpoint_count
        .checked_mul(mode_count)
        .and_then(|rows| rows.checked_mul(atom_count))
        .ok_or_else(|| {
            EigError::input_validation(
                "INPUT.EIG_COUNTS",
                format!(
                    "declared shape {} x {} x {} overflows eigenvector storage",
                    kpoint_count, mode_count, atom_count
                ),
            )
        })?;
    let mut eigenvectors = Vec::with_capacity(total_rows);

    for _ in 0..kpoint_count {
        // K-point header; may encode reciprocal coordinates, not retained.
        cursor.next_line("k-point header")?;

        for _ in 0..mode_count {
            cursor.next_line("mode header")?;

            let (line, line_number) = cursor.next_line("mode frequency")?;
            parse_f64_token(line.split_whitespace().next().unwrap_or("")).ok_or_else(|| {
                EigError::input_validation(
                    "INPUT.EIG_FREQUENCY",
                    format!(
                        "mode frequency at line {} is not numeric: '{}'",
                        line_number,
                        line.trim_end()
                    ),
                )
            })?;

            for _ in 0..atom_count {
                let (line, line_number) = cursor.next_line("displacement components")?;
                let mut tokens = line.split_whitespace();
                let row = parse_vector3(
                    &mut tokens,
                    line,
                    line_number,
                    "INPUT.EIG_DISPLACEMENT",
                    "displacement",
                )?;
                eigenvectors.push(row);
            }
        }
    }

    Ok(EigenvectorModel::from_parts(
        atomic_numbers,
        atomic_masses,
        positions,
        kpoint_count,
        mode_count,
        eigenvectors,
    ))
}

struct LineCursor<'a> {
    lines: std::str::Lines<'a>,
    line_number: usize,
}

impl<'a> LineCursor<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines(),
            line_number: 0,
        }
    }

    fn next_line(&mut self, expected: &str) -> EigResult<(&'a str, usize)> {
        match self.lines.next() {
            Some(line) => {
                self.line_number += 1;
                Ok((line, self.line_number))
            }
            None => Err(EigError::input_validation(
                "INPUT.EIG_TRUNCATED",
                format!(
                    "eigenvector file ended at line {}; expected {}",
                    self.line_number, expected
                ),
            )),
        }
    }
}

fn parse_declared_count(line: (&str, usize), label: &str) -> EigResult<usize> {
    let (content, line_number) = line;
    let value = content
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<i64>().ok())
        .ok_or_else(|| {
            EigError::input_validation(
                "INPUT.EIG_HEADER",
                format!(
                    "{} at line {} is not an integer: '{}'",
                    label,
                    line_number,
                    content.trim_end()
                ),
            )
        })?;

    if value <= 0 {
        return Err(EigError::input_validation(
            "INPUT.EIG_COUNTS",
            format!("{} at line {} must be positive, got {}", label, line_number, value),
        ));
    }

    Ok(value as usize)
}

fn parse_vector3<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    line: &str,
    line_number: usize,
    code: &'static str,
    label: &str,
) -> EigResult<[f64; 3]> {
    let mut components = [0.0_f64; 3];
    for component in &mut components {
        *component = tokens.next().and_then(parse_f64_token).ok_or_else(|| {
            EigError::input_validation(
                code,
                format!(
                    "line {} should hold three {} components: '{}'",
                    line_number,
                    label,
                    line.trim_end()
                ),
            )
        })?;
    }
    // Trailing tokens, if any, are ignored.
    Ok(components)
}

fn parse_f64_token(token: &str) -> Option<f64> {
    let normalized = token.replace('D', "E").replace('d', "e");
    normalized.parse::<f64>().ok()
}
