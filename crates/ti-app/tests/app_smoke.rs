//! Smoke test over the case files shipped with the repository.

use std::path::PathBuf;
use ti_app::{calculate_case, load_case, render_report, validate_case};

fn cases_dir() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.pop(); // go to crates
    dir.pop(); // go to repo root
    dir.push("cases");
    dir
}

#[test]
fn shipped_cases_calculate() {
    let dir = cases_dir();
    if !dir.exists() {
        eprintln!("Skipping test: case directory not found at {:?}", dir);
        return;
    }

    for name in [
        "circular_pipe.yaml",
        "annular_water_jet.yaml",
        "airfoil.json",
    ] {
        let case = load_case(&dir.join(name)).expect("Failed to load case");
        validate_case(&case).expect("Validation should succeed");

        let response = calculate_case(&case).expect("Calculation should succeed");
        let report = render_report(&response);
        assert!(report.contains("Recommended Boundary Conditions"), "{name}");
        println!("{report}");
    }
}

#[test]
fn annular_water_jet_values() {
    let path = cases_dir().join("annular_water_jet.yaml");
    if !path.exists() {
        return;
    }
    let record = calculate_case(&load_case(&path).unwrap()).unwrap().record();

    let area = std::f64::consts::PI / 4.0 * (0.1_f64.powi(2) - 0.05_f64.powi(2));
    let u = 5.0 / (998.0 * area);
    assert!((record.velocity_m_s.unwrap() - u).abs() < 1e-12);
    // δ99 = Dh/2 = 0.025, l = 0.4·δ99
    assert!((record.length_scale_m.unwrap() - 0.01).abs() < 1e-12);
    assert!(record.k.is_some() && record.epsilon.is_some());
}
