//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without running the commands.

use std::path::PathBuf;

use clap::Parser;

#[path = "../src/cli.rs"]
mod cli;

use cli::{Args, Command};

#[test]
fn test_parse_requires_command() {
    assert!(Args::try_parse_from(["slider"]).is_err());
}

#[test]
fn test_parse_judge() {
    let args = Args::try_parse_from(["slider", "judge", "scenario.json"]).unwrap();
    assert!(!args.verbose);
    match args.command {
        Command::Judge {
            scenario,
            json,
            no_color,
        } => {
            assert_eq!(scenario, PathBuf::from("scenario.json"));
            assert!(!json);
            assert!(!no_color);
        }
        _ => panic!("Expected Judge command"),
    }
}

#[test]
fn test_parse_judge_with_flags() {
    let args =
        Args::try_parse_from(["slider", "judge", "scenario.json", "--json", "--no-color"]).unwrap();
    match args.command {
        Command::Judge { json, no_color, .. } => {
            assert!(json);
            assert!(no_color);
        }
        _ => panic!("Expected Judge command"),
    }
}

#[test]
fn test_parse_judge_requires_scenario() {
    assert!(Args::try_parse_from(["slider", "judge"]).is_err());
}

#[test]
fn test_parse_schedule_json() {
    let args = Args::try_parse_from(["slider", "schedule", "s.json", "--json"]).unwrap();
    match args.command {
        Command::Schedule { scenario, json } => {
            assert_eq!(scenario, PathBuf::from("s.json"));
            assert!(json);
        }
        _ => panic!("Expected Schedule command"),
    }
}

#[test]
fn test_parse_trace() {
    let args = Args::try_parse_from(["slider", "trace", "s.json"]).unwrap();
    match args.command {
        Command::Trace { scenario, no_color } => {
            assert_eq!(scenario, PathBuf::from("s.json"));
            assert!(!no_color);
        }
        _ => panic!("Expected Trace command"),
    }
}

#[test]
fn test_parse_trace_no_color() {
    let args = Args::try_parse_from(["slider", "trace", "s.json", "--no-color"]).unwrap();
    match args.command {
        Command::Trace { no_color, .. } => assert!(no_color),
        _ => panic!("Expected Trace command"),
    }
}

#[test]
fn test_parse_global_options() {
    let args = Args::try_parse_from([
        "slider",
        "--config",
        "custom.toml",
        "-v",
        "trace",
        "s.json",
    ])
    .unwrap();
    assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
    assert!(args.verbose);
}

#[test]
fn test_parse_global_options_after_subcommand_fail() {
    // Global options are declared on the top-level parser only
    assert!(Args::try_parse_from(["slider", "trace", "s.json", "--config", "x.toml"]).is_err());
}

#[test]
fn test_parse_unknown_subcommand() {
    assert!(Args::try_parse_from(["slider", "replay", "s.json"]).is_err());
}
