use eig2xyz_core::eig::load_eig_file;
use std::fs;
use tempfile::TempDir;

const WATER_PAIR_FIXTURE: &str = "\
2
1 0.0 0.0 0.0
8 1.0 0.0 0.0
1
1
K point 1 = 0.0 0.0 0.0
Mode 1
12.5
1.0 0.0 0.0
0.0 1.0 0.0
";

#[test]
fn load_and_write_round_trip_preserves_shape_and_formatting() {
    let temp = TempDir::new().expect("tempdir should be created");
    let input_path = temp.path().join("phonon.eig");
    let output_path = temp.path().join("phonon.xyz");
    fs::write(&input_path, WATER_PAIR_FIXTURE).expect("fixture should be written");

    let model = load_eig_file(&input_path).expect("fixture should load");
    assert_eq!(model.atom_count(), 2);
    assert_eq!(model.kpoint_count(), 1);
    assert_eq!(model.mode_count(), 1);

    model
        .write_xyz(&output_path, 0, 0)
        .expect("coordinate file should be written");

    let written = fs::read_to_string(&output_path).expect("output should be readable");
    assert!(written.ends_with('\n'), "output ends with a final newline");

    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), model.atom_count() + 2);
    assert_eq!(lines[0], "2");
    assert_eq!(lines[1], "");

    for data_line in &lines[2..] {
        assert_eq!(data_line.len(), 72);
        for field_index in 0..6 {
            let field = &data_line[field_index * 12..(field_index + 1) * 12];
            let value: f64 = field.trim().parse().unwrap_or_else(|_| {
                panic!("field '{}' should be a fixed-point number", field)
            });
            assert!(value.is_finite());
            let dot = field.find('.').expect("field should carry a decimal point");
            assert_eq!(field.len() - dot - 1, 6, "six digits after the decimal point");
        }
    }

    // Hydrogen displacement x and oxygen displacement y carry the
    // inverse-square-root mass weighting.
    let hydrogen_x: f64 = lines[2][36..48].trim().parse().expect("numeric field");
    let oxygen_y: f64 = lines[3][48..60].trim().parse().expect("numeric field");
    assert!((hydrogen_x - 1.0 / 1.008_f64.sqrt()).abs() < 1.0e-6);
    assert!((oxygen_y - 1.0 / 15.999_f64.sqrt()).abs() < 1.0e-6);
}

#[test]
fn write_overwrites_an_existing_coordinate_file() {
    let temp = TempDir::new().expect("tempdir should be created");
    let input_path = temp.path().join("phonon.eig");
    let output_path = temp.path().join("phonon.xyz");
    fs::write(&input_path, WATER_PAIR_FIXTURE).expect("fixture should be written");
    fs::write(&output_path, "stale content\n").expect("stale output should be written");

    let model = load_eig_file(&input_path).expect("fixture should load");
    model
        .write_xyz(&output_path, 0, 0)
        .expect("coordinate file should be written");

    let written = fs::read_to_string(&output_path).expect("output should be readable");
    assert!(!written.contains("stale content"));
    assert_eq!(written.lines().next(), Some("2"));
}

#[test]
fn missing_input_file_surfaces_an_io_error() {
    let temp = TempDir::new().expect("tempdir should be created");
    let error = load_eig_file(&temp.path().join("absent.eig"))
        .expect_err("missing file should fail to load");

    assert_eq!(error.code(), "IO.EIG_OPEN");
    assert_eq!(error.exit_code(), 3);
}
