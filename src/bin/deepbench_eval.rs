//! Evaluate the roofline model against a DeepBench measurement file.
//!
//! Usage: `deepbench_eval <dataset.txt> [--profile <profile.json>] [--json]`
//!
//! Without `--profile` the Titan V preset is used. `--json` emits the full
//! summary as JSON instead of the table.

use std::path::Path;
use std::process::ExitCode;

use gemm_roofline::{dataset, evaluate, report, HardwareProfile};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut dataset_path: Option<String> = None;
    let mut profile_path: Option<String> = None;
    let mut json = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--profile" => match iter.next() {
                Some(p) => profile_path = Some(p.clone()),
                None => return usage("--profile requires a path"),
            },
            "--json" => json = true,
            "--help" | "-h" => return usage(""),
            _ if dataset_path.is_none() => dataset_path = Some(arg.clone()),
            other => return usage(&format!("unexpected argument {other:?}")),
        }
    }

    let Some(dataset_path) = dataset_path else {
        return usage("missing dataset path");
    };

    let profile = match &profile_path {
        Some(p) => match HardwareProfile::from_json_file(Path::new(p)) {
            Ok(profile) => profile,
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => HardwareProfile::titan_v(),
    };

    let records = match dataset::load_records(Path::new(&dataset_path)) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let summary = match evaluate(&records, &profile) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if json {
        match report::render_json(&summary) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("profile: {profile}");
        print!("{}", report::render_table(&summary));
    }
    ExitCode::SUCCESS
}

fn usage(problem: &str) -> ExitCode {
    if !problem.is_empty() {
        eprintln!("error: {problem}");
    }
    eprintln!("usage: deepbench_eval <dataset.txt> [--profile <profile.json>] [--json]");
    if problem.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
