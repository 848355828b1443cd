// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::BuildOrder;
use crate::errors::OrderError;

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Build(BuildOrder),
}

/// Parse an inline YAML build order.
pub fn parse_order(yaml: &str) -> Result<BuildOrder, OrderError> {
    let order: BuildOrder = serde_yaml::from_str(yaml)?;
    Ok(order)
}

/// Parse command-line arguments (without the program name).
///
/// Accepted forms:
/// * no arguments - the default order
/// * `--help` / `-h`
/// * `--order <yaml>` - an inline YAML order
/// * `<seats> [engine] [left|right] [gps|no-gps]` - positional values, any
///   trailing ones fall back to the defaults
pub fn parse_args<I, S>(args: I) -> Result<Invocation, OrderError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();
    let mut iter = args.iter().map(String::as_str);

    let first = match iter.next() {
        Some(first) => first,
        None => return Ok(Invocation::Build(BuildOrder::default())),
    };

    match first {
        "-h" | "--help" => Ok(Invocation::Help),
        "--order" => {
            let yaml = iter.next().ok_or(OrderError::MissingValue("--order"))?;
            if let Some(extra) = iter.next() {
                return Err(OrderError::UnexpectedArgument(extra.to_string()));
            }
            Ok(Invocation::Build(parse_order(yaml)?))
        }
        _ => {
            let mut order = BuildOrder::default();
            order.seats = parse_seats(first)?;
            if let Some(engine) = iter.next() {
                order.engine = engine.to_string();
            }
            if let Some(side) = iter.next() {
                order.steering = side.parse()?;
            }
            if let Some(flag) = iter.next() {
                order.gps = parse_gps_flag(flag)?;
            }
            if let Some(extra) = iter.next() {
                return Err(OrderError::UnexpectedArgument(extra.to_string()));
            }
            Ok(Invocation::Build(order))
        }
    }
}

fn parse_seats(value: &str) -> Result<u32, OrderError> {
    value
        .trim()
        .parse()
        .map_err(|_| OrderError::InvalidSeatCount(value.to_string()))
}

fn parse_gps_flag(value: &str) -> Result<bool, OrderError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "gps" | "true" | "yes" | "with" => Ok(true),
        "no-gps" | "false" | "no" | "without" => Ok(false),
        _ => Err(OrderError::InvalidGpsFlag(value.to_string())),
    }
}
