//! Command-line front end: run one simulation and write the samples to disk

use std::env;
use std::fs;
use std::process::ExitCode;

use double_pendulum::{DoublePendulum, PendulumParams};

/// Output file written in the working directory
const OUTPUT_FILE: &str = "double_pendulum.dat";

/// Parsed command-line invocation
#[derive(Debug, Clone)]
struct Invocation {
    m1: f64,
    m2: f64,
    l1: f64,
    l2: f64,
    theta1: f64,
    theta2: f64,
    n_steps: usize,
    dt: f64,
    n_record: usize,
}

fn parse_invocation(args: &[String]) -> Option<Invocation> {
    if args.len() != 9 {
        return None;
    }
    let n_steps: i64 = args[6].parse().ok()?;
    let n_record: i64 = args[8].parse().ok()?;
    if n_steps < 0 || n_record < 0 {
        return None;
    }
    Some(Invocation {
        m1: args[0].parse().ok()?,
        m2: args[1].parse().ok()?,
        l1: args[2].parse().ok()?,
        l2: args[3].parse().ok()?,
        theta1: args[4].parse().ok()?,
        theta2: args[5].parse().ok()?,
        n_steps: n_steps as usize,
        dt: args[7].parse().ok()?,
        n_record: n_record as usize,
    })
}

fn print_help(name: &str) {
    eprintln!("{} expects 9 parameters:", name);
    eprintln!("\t{} m1 m2 l1 l2 theta1 theta2 n_steps dt n_record", name);
    eprintln!("where:");
    eprintln!("\tm1 and m2 are the pendulum masses in kg");
    eprintln!("\tl1 and l2 are the rod lengths in m");
    eprintln!("\ttheta1 and theta2 are the release angles in degrees");
    eprintln!("\tn_steps is the number of integration steps");
    eprintln!("\tdt is the integration timestep in seconds");
    eprintln!("\tn_record is the number of steps between recorded samples");
}

/// One whitespace-separated line per sample, in column order
fn format_samples(pendulum: &DoublePendulum) -> String {
    let mut out = String::new();
    for row in pendulum.trajectory() {
        for (j, value) in row.to_array().iter().enumerate() {
            if j > 0 {
                out.push(' ');
            }
            out.push_str(&value.to_string());
        }
        out.push('\n');
    }
    out
}

fn run(inv: &Invocation) -> Result<(), Box<dyn std::error::Error>> {
    let params = PendulumParams::new(inv.m1, inv.m2, inv.l1, inv.l2, inv.theta1, inv.theta2)?;
    let mut pendulum = DoublePendulum::new(params);
    pendulum.simulate(inv.n_steps, inv.dt, inv.n_record)?;

    fs::write(OUTPUT_FILE, format_samples(&pendulum))?;

    let trajectory = pendulum.trajectory();
    println!(
        "Simulated {} steps of {} s, recording every {} steps",
        inv.n_steps, inv.dt, inv.n_record
    );
    if let (Some(first), Some(last)) = (trajectory.first(), trajectory.last()) {
        println!(
            "Energy: {:.6} J at release, {:.6} J at t = {} s",
            first.total_energy(),
            last.total_energy(),
            last.time
        );
    }
    println!("Wrote {} samples to {}", trajectory.len(), OUTPUT_FILE);
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let name = args
        .first()
        .map(|s| s.as_str())
        .unwrap_or("double-pendulum");

    let inv = match parse_invocation(args.get(1..).unwrap_or_default()) {
        Some(inv) => inv,
        None => {
            print_help(name);
            return ExitCode::FAILURE;
        }
    };

    match run(&inv) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
