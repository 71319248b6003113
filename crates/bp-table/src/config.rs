//! Run configuration assembled from command-line arguments.
//!
//! The flag surface is fixed: `-T`, `-P`, `-b`, `-m`, `-bl`, `-py`, plus
//! `-h`/`--help`. The single-dash multi-character flags rule out derive-style
//! CLI parsing; instead one pass over the arguments builds a flag → value
//! map, and configuration building does O(1) lookups against it.

use crate::range::Range;
use std::collections::HashMap;
use thiserror::Error;

const RANGE_FLAGS: [&str; 3] = ["-T", "-P", "-b"];
const NAME_FLAGS: [&str; 3] = ["-m", "-bl", "-py"];

/// Configuration failures reported with the usage text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UsageError {
    #[error("Bad format for temperature range!")]
    BadTemperature,

    #[error("Bad format for pressure range!")]
    BadPressure,

    #[error("Bad format for blowing rate range!")]
    BadBlowingRate,

    #[error("Missing mixture name (-m)!")]
    MissingMixture,

    #[error("Missing boundary layer edge composition name (-bl)!")]
    MissingBoundaryLayer,

    #[error(
        "Pressure range never reaches its upper bound: the multiplicative step must be > 1 when P2 > P1"
    )]
    NonTerminatingPressure,

    #[error(
        "{axis} range never reaches its upper bound: the step must be > 0 when the end exceeds the start"
    )]
    NonTerminatingAxis { axis: &'static str },
}

/// Immutable per-run configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub temperature: Range,
    pub pressure: Range,
    pub blowing: Range,
    pub mixture: String,
    pub boundary_layer: String,
    pub pyrolysis: Option<String>,
}

impl RunConfig {
    pub fn has_pyrolysis(&self) -> bool {
        self.pyrolysis.is_some()
    }
}

/// Outcome of argument intake: either a run, or a help request.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedArgs {
    Help,
    Run(RunConfig),
}

/// One-pass flag → value index over the argument list.
///
/// A recognized flag consumes the following token as its value (even when
/// none follows). The first occurrence of a repeated flag wins. Tokens that
/// are not recognized flags are skipped.
struct ArgMap {
    values: HashMap<&'static str, Option<String>>,
}

impl ArgMap {
    fn scan(args: &[String]) -> Self {
        let mut values: HashMap<&'static str, Option<String>> = HashMap::new();
        let mut i = 0;
        while i < args.len() {
            let flag = RANGE_FLAGS
                .iter()
                .chain(NAME_FLAGS.iter())
                .find(|f| args[i] == **f)
                .copied();
            match flag {
                Some(flag) => {
                    values
                        .entry(flag)
                        .or_insert_with(|| args.get(i + 1).cloned());
                    i += 2;
                }
                None => i += 1,
            }
        }
        Self { values }
    }

    /// The flag's value; an empty string when the flag ended the argument
    /// list. `None` when the flag is absent.
    fn value(&self, flag: &str) -> Option<String> {
        self.values
            .get(flag)
            .map(|v| v.clone().unwrap_or_default())
    }

    fn range(&self, flag: &str) -> Option<Range> {
        self.value(flag).and_then(|text| Range::parse(&text).ok())
    }
}

/// Build the run configuration from the arguments after the program name.
///
/// An empty argument list or an explicit `-h`/`--help` anywhere requests the
/// usage text. A required flag that is missing, has no value, or fails range
/// parsing maps to one targeted diagnostic per axis.
pub fn parse_args(args: &[String]) -> Result<ParsedArgs, UsageError> {
    if args.is_empty() || args.iter().any(|a| a == "-h" || a == "--help") {
        return Ok(ParsedArgs::Help);
    }

    let map = ArgMap::scan(args);

    let temperature = map.range("-T").ok_or(UsageError::BadTemperature)?;
    let pressure = map.range("-P").ok_or(UsageError::BadPressure)?;
    let blowing = map.range("-b").ok_or(UsageError::BadBlowingRate)?;

    let mixture = map.value("-m").ok_or(UsageError::MissingMixture)?;
    let boundary_layer = map.value("-bl").ok_or(UsageError::MissingBoundaryLayer)?;
    let pyrolysis = map.value("-py");

    validate_axes(&temperature, &pressure, &blowing)?;

    Ok(ParsedArgs::Run(RunConfig {
        temperature,
        pressure,
        blowing,
        mixture,
        boundary_layer,
        pyrolysis,
    }))
}

/// Reject axes whose native enumeration would never terminate.
///
/// The pressure axis advances multiplicatively, so a step ≤ 1 can never
/// climb from a lower start to a higher end; the additive axes have the same
/// problem with a negative step. A scalar axis (start == end) is always
/// fine: it enumerates exactly one point.
fn validate_axes(temperature: &Range, pressure: &Range, blowing: &Range) -> Result<(), UsageError> {
    if pressure.end > pressure.start && pressure.step <= 1.0 {
        return Err(UsageError::NonTerminatingPressure);
    }
    for (axis, range) in [("Temperature", temperature), ("Blowing rate", blowing)] {
        if range.end > range.start && range.step < 0.0 {
            return Err(UsageError::NonTerminatingAxis { axis });
        }
    }
    Ok(())
}

/// Usage text printed for `-h`/`--help`, the bare invocation, and every
/// configuration diagnostic.
pub fn usage() -> String {
    let tab = "    ";
    let mut text = String::new();
    text.push('\n');
    text.push_str("Usage: bprime [OPTIONS]\n");
    text.push_str(
        "Compute the non-dimensional surface mass blowing rate for a mixture \
         over a set of temperatures, pressures, and pyrolysis blowing rates.\n",
    );
    text.push('\n');
    for (flag, help) in [
        ("-h, --help", "prints this help message"),
        (
            "-T",
            "temperature range in K \"T1:dT:T2\" or simply T (default = 300:100:5000 K)",
        ),
        ("-P", "pressure in Pa P (default = 1 atm)"),
        (
            "-b",
            "pyrolysis non-dimensional mass blowing rate (default = 0)",
        ),
        ("-m", "mixture name"),
        ("-bl", "boundary layer edge composition name"),
        ("-py", "pyrolysis composition name (default = null)"),
    ] {
        text.push_str(&format!("{tab}{flag:<19} {help}\n"));
    }
    text.push('\n');
    text.push_str("Example:\n");
    text.push_str(&format!(
        "{tab}bprime -T 300:100:5000 -P 101325 -b 10 -m carbonPhenol -bl BLedge -py Gas\n"
    ));
    text.push('\n');
    text.push_str("Mixture file:\n");
    text.push_str(&format!(
        "{tab}carbonPhenol - corresponds to the name of the mixture\n"
    ));
    text.push_str(&format!(
        "{tab}BLedge - corresponds to the boundary layer edge elemental composition\n"
    ));
    text.push_str(&format!(
        "{tab}Gas - corresponds to the pyrolysis elemental gas composition\n"
    ));
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn parse(list: &[&str]) -> Result<ParsedArgs, UsageError> {
        parse_args(&args(list))
    }

    const FULL: [&str; 12] = [
        "-T", "300:100:5000", "-P", "101325", "-b", "0", "-m", "carbonPhenol", "-bl", "BLedge",
        "-py", "Gas",
    ];

    #[test]
    fn full_invocation() {
        let ParsedArgs::Run(config) = parse(&FULL).unwrap() else {
            panic!("expected a run configuration");
        };
        assert_eq!(config.temperature, Range::parse("300:100:5000").unwrap());
        assert_eq!(config.pressure, Range::single(101_325.0));
        assert_eq!(config.blowing, Range::single(0.0));
        assert_eq!(config.mixture, "carbonPhenol");
        assert_eq!(config.boundary_layer, "BLedge");
        assert_eq!(config.pyrolysis.as_deref(), Some("Gas"));
        assert!(config.has_pyrolysis());
    }

    #[test]
    fn pyrolysis_is_optional() {
        let ParsedArgs::Run(config) = parse(&FULL[..10]).unwrap() else {
            panic!("expected a run configuration");
        };
        assert!(!config.has_pyrolysis());
    }

    #[test]
    fn no_arguments_requests_help() {
        assert_eq!(parse(&[]).unwrap(), ParsedArgs::Help);
    }

    #[test]
    fn help_flag_wins_anywhere() {
        assert_eq!(parse(&["-T", "300", "-h"]).unwrap(), ParsedArgs::Help);
        assert_eq!(parse(&["--help"]).unwrap(), ParsedArgs::Help);
    }

    #[test]
    fn missing_temperature_is_diagnosed() {
        let err = parse(&["-P", "101325", "-b", "0", "-m", "x", "-bl", "y"]).unwrap_err();
        assert_eq!(err, UsageError::BadTemperature);
    }

    #[test]
    fn malformed_range_is_diagnosed() {
        let err = parse(&["-T", "hot", "-P", "101325", "-b", "0", "-m", "x", "-bl", "y"])
            .unwrap_err();
        assert_eq!(err, UsageError::BadTemperature);

        let err = parse(&["-T", "300", "-P", "1:2", "-b", "0", "-m", "x", "-bl", "y"])
            .unwrap_err();
        assert_eq!(err, UsageError::BadPressure);
    }

    #[test]
    fn trailing_flag_without_value_is_diagnosed() {
        let err = parse(&["-P", "101325", "-b", "0", "-m", "x", "-bl", "y", "-T"]).unwrap_err();
        assert_eq!(err, UsageError::BadTemperature);
    }

    #[test]
    fn missing_names_are_diagnosed() {
        let err = parse(&["-T", "300", "-P", "101325", "-b", "0", "-bl", "y"]).unwrap_err();
        assert_eq!(err, UsageError::MissingMixture);

        let err = parse(&["-T", "300", "-P", "101325", "-b", "0", "-m", "x"]).unwrap_err();
        assert_eq!(err, UsageError::MissingBoundaryLayer);
    }

    #[test]
    fn negative_blowing_values_are_not_flags() {
        let ParsedArgs::Run(config) =
            parse(&["-T", "300", "-P", "101325", "-b", "-10:0.1:10", "-m", "x", "-bl", "y"])
                .unwrap()
        else {
            panic!("expected a run configuration");
        };
        assert_eq!(config.blowing, Range::parse("-10:0.1:10").unwrap());
    }

    #[test]
    fn first_occurrence_of_a_flag_wins() {
        let ParsedArgs::Run(config) = parse(&[
            "-T", "300", "-P", "101325", "-b", "0", "-m", "first", "-m", "second", "-bl", "y",
        ])
        .unwrap() else {
            panic!("expected a run configuration");
        };
        assert_eq!(config.mixture, "first");
    }

    #[test]
    fn geometric_pressure_step_at_most_one_is_rejected() {
        let err = parse(&["-T", "300", "-P", "100:1:1000", "-b", "0", "-m", "x", "-bl", "y"])
            .unwrap_err();
        assert_eq!(err, UsageError::NonTerminatingPressure);

        let err = parse(&["-T", "300", "-P", "100:0.5:1000", "-b", "0", "-m", "x", "-bl", "y"])
            .unwrap_err();
        assert_eq!(err, UsageError::NonTerminatingPressure);
    }

    #[test]
    fn scalar_pressure_is_not_rejected() {
        assert!(parse(&["-T", "300", "-P", "101325", "-b", "0", "-m", "x", "-bl", "y"]).is_ok());
    }

    #[test]
    fn descending_pressure_is_not_rejected() {
        // end < start terminates immediately regardless of step
        assert!(
            parse(&["-T", "300", "-P", "1000:0.1:10", "-b", "0", "-m", "x", "-bl", "y"]).is_ok()
        );
    }

    #[test]
    fn negative_additive_step_with_ascending_bounds_is_rejected() {
        let err = parse(&["-T", "300:-100:5000", "-P", "101325", "-b", "0", "-m", "x", "-bl", "y"])
            .unwrap_err();
        assert_eq!(
            err,
            UsageError::NonTerminatingAxis {
                axis: "Temperature"
            }
        );
    }

    #[test]
    fn usage_text_mentions_every_flag() {
        let text = usage();
        for flag in ["-h, --help", "-T", "-P", "-b", "-m", "-bl", "-py"] {
            assert!(text.contains(flag), "usage text is missing {flag}");
        }
        assert!(text.contains("carbonPhenol"));
    }
}
