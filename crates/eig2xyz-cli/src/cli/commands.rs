use super::CliError;
use super::helpers::derive_output_path;
use eig2xyz_core::domain::EigError;
use eig2xyz_core::eig::load_eig_file;
use std::path::PathBuf;

#[derive(clap::Args)]
pub(super) struct ConvertArgs {
    /// The .eig file to read
    #[arg(value_name = "filename")]
    pub(super) filename: PathBuf,

    /// The 1-based index of the k-point to display
    #[arg(value_name = "k")]
    pub(super) kindex: usize,

    /// The 1-based index of the eigenvector to display
    #[arg(value_name = "N")]
    pub(super) eigindex: usize,
}

pub(super) fn run_convert_command(args: ConvertArgs) -> Result<i32, CliError> {
    let model = load_eig_file(&args.filename).map_err(CliError::Compute)?;
    tracing::info!(
        atoms = model.atom_count(),
        kpoints = model.kpoint_count(),
        modes = model.mode_count(),
        input = %args.filename.display(),
        "loaded eigenvector model"
    );

    validate_one_based_index(
        args.kindex,
        model.kpoint_count(),
        "k-point",
        "INPUT.KPOINT_INDEX",
    )
    .map_err(CliError::Compute)?;
    validate_one_based_index(
        args.eigindex,
        model.mode_count(),
        "mode",
        "INPUT.MODE_INDEX",
    )
    .map_err(CliError::Compute)?;

    let output_path = derive_output_path(&args.filename);
    tracing::debug!(
        kpoint = args.kindex,
        mode = args.eigindex,
        output = %output_path.display(),
        "writing mass-weighted displacement frame"
    );

    model
        .write_xyz(&output_path, args.kindex - 1, args.eigindex - 1)
        .map_err(CliError::Compute)?;
    tracing::info!(output = %output_path.display(), "coordinate file written");

    Ok(0)
}

/// CLI indices are 1-based; the valid range is `1..=count` inclusive.
fn validate_one_based_index(
    index: usize,
    count: usize,
    label: &str,
    code: &'static str,
) -> Result<(), EigError> {
    if index == 0 || index > count {
        return Err(EigError::input_validation(
            code,
            format!(
                "{} {} requested, but only {} {}s in .eig file",
                label, index, count, label
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_one_based_index;

    #[test]
    fn boundary_index_equal_to_count_is_valid() {
        assert!(validate_one_based_index(2, 2, "k-point", "INPUT.KPOINT_INDEX").is_ok());
    }

    #[test]
    fn index_one_past_the_count_is_rejected() {
        let error = validate_one_based_index(3, 2, "k-point", "INPUT.KPOINT_INDEX")
            .expect_err("index past the count should fail");
        assert_eq!(error.code(), "INPUT.KPOINT_INDEX");
        assert_eq!(
            error.message(),
            "k-point 3 requested, but only 2 k-points in .eig file"
        );
    }

    #[test]
    fn zero_index_is_rejected() {
        let error = validate_one_based_index(0, 2, "mode", "INPUT.MODE_INDEX")
            .expect_err("zero index should fail");
        assert_eq!(error.code(), "INPUT.MODE_INDEX");
    }
}
