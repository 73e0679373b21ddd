//! # Result Reports
//!
//! Two views of one result set: the full interactive summary (material
//! info, geometry, per-reading table, averaged modulus, expected-vs-measured
//! comparison and verdict) and the abbreviated plain-text file report (raw
//! weight/deflection pairs, no per-reading moduli, no verdict).
//!
//! The file report's weights and deflections are written with shortest
//! round-trip float formatting, so parsing them back recovers the entered
//! values exactly. The report is lossy only with respect to the per-reading
//! computed moduli.

use std::fmt::Write as _;
use std::fs::File;
use std::io::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::calculations::bending::{BendingInput, BendingResult};
use crate::errors::{BendError, BendResult};
use crate::loads::BendingMode;
use crate::materials::MaterialEntry;

/// Relative difference below which the measured modulus is judged
/// consistent with the reference value. Hardcoded policy.
pub const AGREEMENT_THRESHOLD: f64 = 0.20;

const RULE_WIDTH: usize = 80;

/// Qualitative comparison outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Within the agreement threshold of the reference value
    Consistent,
    /// At or beyond the agreement threshold
    Differs,
}

/// Measured-vs-reference comparison.
///
/// `percent_difference` and `verdict` are `None` when the reference modulus
/// is zero; the shipped catalog never contains such an entry but the
/// contract guards the division regardless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Averaged experimental modulus (GPa)
    pub calculated_gpa: f64,
    /// Reference modulus from the catalog (GPa)
    pub expected_gpa: f64,
    /// |calculated - expected| / expected * 100
    pub percent_difference: Option<f64>,
    pub verdict: Option<Verdict>,
}

impl Comparison {
    pub fn new(calculated_gpa: f64, expected_gpa: f64) -> Self {
        let percent = percent_difference(calculated_gpa, expected_gpa);
        let verdict = percent.map(|p| {
            if p < AGREEMENT_THRESHOLD * 100.0 {
                Verdict::Consistent
            } else {
                Verdict::Differs
            }
        });
        Comparison {
            calculated_gpa,
            expected_gpa,
            percent_difference: percent,
            verdict,
        }
    }
}

/// Percentage difference of the calculated modulus from the expected one,
/// or `None` when the expected value is zero.
pub fn percent_difference(calculated_gpa: f64, expected_gpa: f64) -> Option<f64> {
    if expected_gpa == 0.0 {
        return None;
    }
    Some((calculated_gpa - expected_gpa).abs() / expected_gpa * 100.0)
}

/// Render the full interactive report.
pub fn render_summary(
    material: &MaterialEntry,
    input: &BendingInput,
    result: &BendingResult,
    comparison: &Comparison,
) -> String {
    let mut out = String::new();
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    let _ = writeln!(out, "{heavy}");
    let _ = writeln!(out, "YOUNG'S MODULUS CALCULATION RESULTS");
    let _ = writeln!(out, "{heavy}");

    let _ = writeln!(out, "\nMATERIAL INFORMATION:");
    let _ = writeln!(out, "  Material: {}", material.name);
    let _ = writeln!(
        out,
        "  Expected Young's Modulus: {} GPa",
        material.youngs_modulus_gpa
    );
    let _ = writeln!(out, "  Density: {} g/cm^3", material.density_g_per_cm3);

    let _ = writeln!(out, "\nROD DIMENSIONS:");
    let _ = writeln!(out, "  Length: {} cm", input.geometry.length_cm);
    let _ = writeln!(out, "  Breadth: {} cm", input.geometry.breadth_cm);
    let _ = writeln!(out, "  Width/Thickness: {} cm", input.geometry.thickness_cm);

    let _ = writeln!(out, "\nBENDING TYPE:");
    let _ = writeln!(out, "  {}", input.mode.display_name());

    let _ = writeln!(
        out,
        "\nMOMENT OF INERTIA: {:.6} cm^4",
        result.moment_of_inertia_cm4
    );

    let _ = writeln!(out, "\n{light}");
    let _ = writeln!(out, "MEASUREMENT READINGS");
    let _ = writeln!(out, "{light}");
    let _ = writeln!(
        out,
        "{:<10} {:<15} {:<20} {:<20}",
        "Reading", "Weight (g)", "Depression (cm)", "Individual Y (GPa)"
    );
    let _ = writeln!(out, "{light}");
    for (reading, modulus) in input.readings.iter().zip(&result.per_reading_gpa) {
        let _ = writeln!(
            out,
            "{:<10} {:<15.2} {:<20.4} {:<20.2}",
            reading.index,
            reading.weight_g,
            reading.deflection_cm,
            modulus.unwrap_or(0.0)
        );
    }
    let _ = writeln!(out, "{light}");

    let _ = writeln!(out, "\n{heavy}");
    let _ = writeln!(out, "FINAL YOUNG'S MODULUS (Calculated Average)");
    let _ = writeln!(out, "{heavy}");
    let _ = writeln!(
        out,
        "\n  Calculated Young's Modulus: {:.2} GPa",
        comparison.calculated_gpa
    );
    let _ = writeln!(
        out,
        "  Expected Young's Modulus:   {} GPa",
        comparison.expected_gpa
    );
    if let Some(percent) = comparison.percent_difference {
        let _ = writeln!(out, "  Percentage Difference:      {percent:.2}%");
    }

    let _ = writeln!(out, "\nANALYSIS:");
    match comparison.verdict {
        Some(Verdict::Consistent) => {
            let _ = writeln!(
                out,
                "  [OK] Results are consistent with expected values for this material."
            );
        }
        Some(Verdict::Differs) => {
            let _ = writeln!(
                out,
                "  [WARN] Results differ significantly from expected values."
            );
            let _ = writeln!(
                out,
                "         Possible reasons: measurement errors, material impurities,"
            );
            let _ = writeln!(
                out,
                "         temperature effects, or non-ideal experimental conditions."
            );
        }
        None => {}
    }
    let _ = writeln!(out, "\n{heavy}");

    out
}

/// Render the abbreviated file report.
///
/// Fixed section order: banner, material, expected vs calculated modulus,
/// rod dimensions, bending type, raw readings.
pub fn render_file_report(
    material: &MaterialEntry,
    input: &BendingInput,
    result: &BendingResult,
) -> String {
    let mut out = String::new();
    let heavy = "=".repeat(RULE_WIDTH);

    let _ = writeln!(out, "{heavy}");
    let _ = writeln!(out, "YOUNG'S MODULUS CALCULATION RESULTS");
    let _ = writeln!(out, "{heavy}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Material: {}", material.name);
    let _ = writeln!(
        out,
        "Expected Young's Modulus: {} GPa",
        material.youngs_modulus_gpa
    );
    let _ = writeln!(
        out,
        "Calculated Young's Modulus: {:.2} GPa",
        result.average_gpa
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Rod Dimensions: L={}cm, B={}cm, W={}cm",
        input.geometry.length_cm, input.geometry.breadth_cm, input.geometry.thickness_cm
    );
    let _ = writeln!(out, "Bending Type: {}", input.mode.short_label());
    let _ = writeln!(out);
    let _ = writeln!(out, "Readings:");
    for reading in &input.readings {
        let _ = writeln!(
            out,
            "  {}: Weight={}g, Depression={}cm",
            reading.index, reading.weight_g, reading.deflection_cm
        );
    }

    out
}

/// Deterministic file name for the saved report.
pub fn report_filename(material: &MaterialEntry, mode: BendingMode) -> String {
    format!("youngs_modulus_{}_{}.txt", material.id, mode.mode_number())
}

/// Write a rendered report to `path`, overwriting any existing file.
///
/// The handle lives only inside this call; failures surface as
/// [`BendError::FileError`]. No partial-write recovery is attempted.
pub fn save_report(path: &Path, contents: &str) -> BendResult<()> {
    let mut file = File::create(path).map_err(|e| {
        BendError::file_error("create", path.display().to_string(), e.to_string())
    })?;
    file.write_all(contents.as_bytes()).map_err(|e| {
        BendError::file_error("write", path.display().to_string(), e.to_string())
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::bending::calculate;
    use crate::loads::Reading;
    use crate::materials;
    use crate::specimen::RodGeometry;
    use std::env::temp_dir;
    use std::fs;

    fn sample_input(mode: BendingMode) -> BendingInput {
        BendingInput {
            geometry: RodGeometry::new(100.0, 2.0, 0.5),
            mode,
            readings: vec![
                Reading::from_increment(1, 50.0, 0.1),
                Reading::from_increment(2, 50.0, 0.25),
            ],
        }
    }

    #[test]
    fn test_percent_difference() {
        assert_eq!(percent_difference(168.0, 210.0), Some(20.0));
        assert_eq!(percent_difference(210.0, 210.0), Some(0.0));
        assert_eq!(percent_difference(100.0, 0.0), None);
    }

    #[test]
    fn test_verdict_boundary_is_strict() {
        // Exactly 20.00% must read as "differs significantly".
        let boundary = Comparison::new(168.0, 210.0);
        assert_eq!(boundary.percent_difference, Some(20.0));
        assert_eq!(boundary.verdict, Some(Verdict::Differs));

        let inside = Comparison::new(170.0, 210.0);
        assert_eq!(inside.verdict, Some(Verdict::Consistent));
    }

    #[test]
    fn test_comparison_with_zero_reference() {
        let comparison = Comparison::new(42.0, 0.0);
        assert_eq!(comparison.percent_difference, None);
        assert_eq!(comparison.verdict, None);
    }

    #[test]
    fn test_report_filename() {
        let iron = materials::get(1).unwrap();
        assert_eq!(
            report_filename(iron, BendingMode::Uniform),
            "youngs_modulus_iron_1.txt"
        );
        let stainless = materials::get(3).unwrap();
        assert_eq!(
            report_filename(stainless, BendingMode::PointLoad),
            "youngs_modulus_stainless_steel_2.txt"
        );
    }

    #[test]
    fn test_summary_contains_all_sections() {
        let material = materials::get(1).unwrap();
        let input = sample_input(BendingMode::Uniform);
        let result = calculate(&input).unwrap();
        let comparison = Comparison::new(result.average_gpa, material.youngs_modulus_gpa);

        let summary = render_summary(material, &input, &result, &comparison);
        assert!(summary.contains("Material: Iron"));
        assert!(summary.contains("Expected Young's Modulus: 210 GPa"));
        assert!(summary.contains("Density: 7.87 g/cm^3"));
        assert!(summary.contains("Uniform Bending"));
        assert!(summary.contains("MOMENT OF INERTIA: 0.020833 cm^4"));
        assert!(summary.contains("Percentage Difference:"));
        assert!(summary.contains("differ significantly"));
    }

    #[test]
    fn test_summary_shows_excluded_reading_as_zero() {
        let material = materials::get(4).unwrap();
        let input = BendingInput {
            geometry: RodGeometry::new(100.0, 2.0, 0.5),
            mode: BendingMode::PointLoad,
            readings: vec![Reading::new(1, 50.0, 0.0)],
        };
        let result = calculate(&input).unwrap();
        let comparison = Comparison::new(result.average_gpa, material.youngs_modulus_gpa);

        let summary = render_summary(material, &input, &result, &comparison);
        assert!(summary.contains("0.00"));
        assert!(summary.contains("Calculated Young's Modulus: 0.00 GPa"));
    }

    #[test]
    fn test_file_report_fixed_sections() {
        let material = materials::get(1).unwrap();
        let input = sample_input(BendingMode::PointLoad);
        let result = calculate(&input).unwrap();

        let report = render_file_report(material, &input, &result);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[1], "YOUNG'S MODULUS CALCULATION RESULTS");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "Material: Iron");
        assert_eq!(lines[5], "Expected Young's Modulus: 210 GPa");
        assert!(lines[6].starts_with("Calculated Young's Modulus: "));
        assert_eq!(lines[7], "");
        assert_eq!(lines[8], "Rod Dimensions: L=100cm, B=2cm, W=0.5cm");
        assert_eq!(lines[9], "Bending Type: Non-Uniform");
        assert_eq!(lines[10], "");
        assert_eq!(lines[11], "Readings:");
        assert_eq!(lines[12], "  1: Weight=50g, Depression=0.1cm");
        assert_eq!(lines[13], "  2: Weight=100g, Depression=0.25cm");
    }

    #[test]
    fn test_file_report_readings_round_trip() {
        // Re-parsing the weight/deflection pairs must recover the entered
        // values exactly; only the per-reading moduli are lost.
        let material = materials::get(5).unwrap();
        let input = BendingInput {
            geometry: RodGeometry::new(90.0, 1.8, 0.45),
            mode: BendingMode::Uniform,
            readings: vec![
                Reading::from_increment(1, 33.3, 0.07),
                Reading::from_increment(2, 33.3, 0.0),
                Reading::from_increment(3, 33.3, -0.21),
            ],
        };
        let result = calculate(&input).unwrap();
        let report = render_file_report(material, &input, &result);

        let parsed: Vec<(f64, f64)> = report
            .lines()
            .skip_while(|line| *line != "Readings:")
            .skip(1)
            .map(|line| {
                let (_, rest) = line.split_once(": Weight=").unwrap();
                let (weight, rest) = rest.split_once("g, Depression=").unwrap();
                let deflection = rest.strip_suffix("cm").unwrap();
                (weight.parse().unwrap(), deflection.parse().unwrap())
            })
            .collect();

        assert_eq!(parsed.len(), input.readings.len());
        for (reading, (weight, deflection)) in input.readings.iter().zip(parsed) {
            assert_eq!(reading.weight_g, weight);
            assert_eq!(reading.deflection_cm, deflection);
        }
    }

    #[test]
    fn test_save_report_writes_and_overwrites() {
        let path = temp_dir().join("bendlab_test_report.txt");

        save_report(&path, "first contents\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first contents\n");

        save_report(&path, "second contents\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second contents\n");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_report_error_is_structured() {
        let path = Path::new("/nonexistent_dir_for_bendlab/report.txt");
        let err = save_report(path, "contents").unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
