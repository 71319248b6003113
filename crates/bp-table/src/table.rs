//! Fixed-width ASCII table formatting.
//!
//! Each row is produced as one complete padded string; there is no shared
//! formatting state between fields or rows. Fields are right-justified with
//! no separator beyond the padding itself.

use bp_chem::WallState;
use bp_core::units::{j_per_kg_to_mj_per_kg, pa_to_bar};
use std::fmt::Write as _;

pub const LEAD_COL_WIDTH: usize = 10;
pub const VALUE_COL_WIDTH: usize = 15;
pub const SPECIES_COL_WIDTH: usize = 25;

/// Header row: quoted labels for the five scalar columns, then one quoted
/// label per species in mixture order.
pub fn format_header(species: &[String]) -> String {
    let mut row = String::new();
    push_field(&mut row, &quoted("P[bar]"), LEAD_COL_WIDTH);
    for label in ["B'g", "Tw[K]", "B'c", "hw[MJ/kg]"] {
        push_field(&mut row, &quoted(label), VALUE_COL_WIDTH);
    }
    for name in species {
        push_field(&mut row, &quoted(name), SPECIES_COL_WIDTH);
    }
    row
}

/// Data row for one grid point: pressure in bar, the swept (signed) blowing
/// rate, temperature, char blowing rate, wall enthalpy in MJ/kg, then the
/// species mole fractions.
pub fn format_row(p_pa: f64, bg: f64, t_k: f64, wall: &WallState) -> String {
    let mut row = String::new();
    push_field(&mut row, &format_number(pa_to_bar(p_pa)), LEAD_COL_WIDTH);
    for value in [
        bg,
        t_k,
        wall.bc,
        j_per_kg_to_mj_per_kg(wall.hw_j_per_kg),
    ] {
        push_field(&mut row, &format_number(value), VALUE_COL_WIDTH);
    }
    for x in &wall.species_mole_fractions {
        push_field(&mut row, &format_number(*x), SPECIES_COL_WIDTH);
    }
    row
}

fn quoted(label: &str) -> String {
    format!("\"{label}\"")
}

fn push_field(row: &mut String, text: &str, width: usize) {
    let _ = write!(row, "{text:>width$}");
}

/// Render a value with six significant digits, switching to scientific
/// notation outside [1e-4, 1e6), trailing zeros trimmed. Mirrors default
/// C-family stream formatting so downstream table readers see familiar
/// fields.
pub fn format_number(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    if !v.is_finite() {
        return format!("{v}");
    }

    let exp = v.abs().log10().floor() as i32;
    if (-4..6).contains(&exp) {
        let decimals = (5 - exp).max(0) as usize;
        trim_fraction(format!("{v:.decimals$}"))
    } else {
        let formatted = format!("{v:.5e}");
        match formatted.split_once('e') {
            Some((mantissa, exponent)) => {
                let mantissa = trim_fraction(mantissa.to_string());
                let exp_value: i32 = exponent.parse().unwrap_or(0);
                let sign = if exp_value < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp_value.abs())
            }
            None => formatted,
        }
    }
}

fn trim_fraction(text: String) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn header_layout() {
        let header = format_header(&names(&["CO", "CO2"]));
        assert_eq!(&header[..LEAD_COL_WIDTH], "  \"P[bar]\"");
        assert_eq!(header.len(), LEAD_COL_WIDTH + 4 * VALUE_COL_WIDTH + 2 * SPECIES_COL_WIDTH);
        assert_eq!(header.split_whitespace().count(), 7);
        assert!(header.contains("\"B'g\""));
        assert!(header.contains("\"hw[MJ/kg]\""));
        assert!(header.contains("\"CO2\""));
    }

    #[test]
    fn row_layout() {
        let wall = WallState {
            bc: 0.17,
            hw_j_per_kg: 2.5e6,
            species_mole_fractions: vec![0.25, 0.75],
        };
        let row = format_row(101_325.0, -0.5, 300.0, &wall);

        assert_eq!(row.len(), LEAD_COL_WIDTH + 4 * VALUE_COL_WIDTH + 2 * SPECIES_COL_WIDTH);
        let fields: Vec<&str> = row.split_whitespace().collect();
        assert_eq!(fields, vec!["1.01325", "-0.5", "300", "0.17", "2.5", "0.25", "0.75"]);
    }

    #[test]
    fn row_and_header_field_counts_match() {
        let species = names(&["C", "CO", "CO2", "N2"]);
        let wall = WallState {
            bc: 0.1,
            hw_j_per_kg: 1.0e6,
            species_mole_fractions: vec![0.1, 0.2, 0.3, 0.4],
        };
        let header = format_header(&species);
        let row = format_row(101_325.0, 0.0, 400.0, &wall);
        assert_eq!(
            header.split_whitespace().count(),
            row.split_whitespace().count()
        );
        assert_eq!(row.split_whitespace().count(), 5 + species.len());
    }

    #[test]
    fn number_rendering() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(300.0), "300");
        assert_eq!(format_number(5000.0), "5000");
        assert_eq!(format_number(-10.0), "-10");
        assert_eq!(format_number(1.01325), "1.01325");
        assert_eq!(format_number(0.30000000000000004), "0.3");
        assert_eq!(format_number(0.0001), "0.0001");
        assert_eq!(format_number(2.3809523809523808e-5), "2.38095e-05");
        assert_eq!(format_number(1.0e6), "1e+06");
        assert_eq!(format_number(3.0e8), "3e+08");
    }

    #[test]
    fn number_rendering_rounds_to_six_significant_digits() {
        assert_eq!(format_number(0.123456789), "0.123457");
        assert_eq!(format_number(123456.789), "123457");
    }

    #[test]
    fn wide_values_overflow_their_column_without_truncation() {
        let wall = WallState {
            bc: 0.1,
            hw_j_per_kg: 0.0,
            species_mole_fractions: vec![],
        };
        // 2.38 Pa is 2.38e-05 bar: 11 characters in a width-10 column
        let row = format_row(2.3809523809523808, 0.0, 300.0, &wall);
        assert!(row.starts_with("2.38095e-05"));
        assert_eq!(row.len(), LEAD_COL_WIDTH + 4 * VALUE_COL_WIDTH + 1);
    }
}
