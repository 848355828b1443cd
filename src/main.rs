// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use vehicle_builder::application::Application;
use vehicle_builder::config::consts::DEFAULT_LOG_FILTER;
use vehicle_builder::config::{parse_args, Invocation};

const DEFAULT_PROGRAM_NAME: &str = "vehicle-builder";

/// Logs go to stderr so the renderings on stdout stay untouched.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();
}

fn print_usage(program: &str) {
    println!("Usage: {} [<seats> [engine] [left|right] [gps|no-gps]]", program);
    println!("       {} --order <inline-yaml>", program);
    println!("       {} --help", program);
    println!();
    println!("Example: {} 2 electric right no-gps", program);
    println!("Example: {} --order \"{{seats: 7, engine: W12}}\"", program);
    println!();
    println!("Without arguments a 4-seat, V8, left-hand drive vehicle with GPS is built.");
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .map(String::as_str)
        .unwrap_or(DEFAULT_PROGRAM_NAME);

    let invocation = parse_args(args.iter().skip(1))
        .with_context(|| format!("Failed to read build order (see `{} --help`)", program))?;

    let order = match invocation {
        Invocation::Help => {
            print_usage(program);
            return Ok(());
        }
        Invocation::Build(order) => order,
    };

    tracing::debug!(?order, "Build order accepted");

    let delivery = Application::new()
        .make_vehicle(&order)
        .context("Failed to construct vehicle and manual")?;

    println!("{}", delivery.vehicle);
    println!("{}", delivery.manual);

    Ok(())
}
