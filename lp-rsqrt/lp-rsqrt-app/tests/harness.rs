use std::io::Write;

use clap::Parser;
use lp_rsqrt_app::{Cli, HarnessError, run};

fn run_args(args: &[&str]) -> (anyhow::Result<Vec<lp_rsqrt_app::SampleReport>>, String) {
    let cli = Cli::try_parse_from(std::iter::once("lp-rsqrt").chain(args.iter().copied()))
        .expect("Failed to parse args");
    let mut out = Vec::new();
    let result = run(&cli, &mut out);
    (result, String::from_utf8(out).expect("Output is not UTF-8"))
}

#[test_log::test]
fn test_default_sample_vector_output() {
    let (result, output) = run_args(&[]);
    let reports = result.unwrap();
    assert_eq!(reports.len(), 10);

    let expected = "\
x=1  estimate≈1.0000
x=2  estimate≈0.7071
x=4  estimate≈0.5000
x=5  estimate≈0.4472
x=10  estimate≈0.3162
x=16  estimate≈0.2500
x=20  estimate≈0.2236
x=100  estimate≈0.0999
x=1000  estimate≈0.0316
x=4294967295  estimate≈0.0000
";
    assert_eq!(output, expected);
}

#[test_log::test]
fn test_check_passes_for_every_config() {
    for passes in ["0", "1", "2"] {
        for rounding in ["nearest", "truncate", "split-truncate"] {
            for multiplier in ["build", "shift-add", "chunked", "hardware"] {
                let (result, output) = run_args(&[
                    "--check", "-p", passes, "-r", rounding, "-m", multiplier, "0", "3", "7",
                    "65535", "65537", "0x7FFFFFFF", "0xFFFFFFFF",
                ]);
                let reports = result.unwrap_or_else(|e| {
                    panic!("passes={passes} rounding={rounding} {multiplier}: {e:#}\n{output}")
                });
                assert!(reports.iter().all(|r| r.within_bound));
                assert_eq!(output.lines().count(), 7);
                assert!(output.lines().all(|l| l.contains("exact=")));
            }
        }
    }
}

#[test_log::test]
fn test_fast_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "digits = 4\nsamples = [5, 100]\n\n[estimator]\npasses = 1\nrounding = \"split-truncate\""
    )
    .unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let (result, output) = run_args(&["--config", &path]);
    result.unwrap();
    assert_eq!(output, "x=5  estimate≈0.4463\nx=100  estimate≈0.0996\n");

    // Plain truncation keeps the extra unit at x = 100
    let (result, output) = run_args(&["--config", &path, "-r", "truncate"]);
    result.unwrap();
    assert_eq!(output, "x=5  estimate≈0.4463\nx=100  estimate≈0.0997\n");
}

#[test_log::test]
fn test_digits_flag() {
    let (result, output) = run_args(&["-d", "0", "1", "4"]);
    result.unwrap();
    assert_eq!(output, "x=1  estimate≈1\nx=4  estimate≈0\n");
}

#[test_log::test]
fn test_bad_config_file_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[estimator]\npasses = \"two\"").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let (result, output) = run_args(&["--config", &path]);
    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("In config file"), "{err:#}");
    assert!(output.is_empty());
}

#[test]
fn test_out_of_bounds_error_display() {
    let err = HarnessError::OutOfBounds {
        failed: vec![3, 7],
        checked: 10,
        bound: lp_rsqrt::ErrorBound::REFINED,
    };
    assert_eq!(
        err.to_string(),
        "2 of 10 estimates outside 100 ppm + 2 units: x = [3, 7]"
    );
}
