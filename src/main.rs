// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::hint::black_box;
use std::path::PathBuf;
use std::time::Instant;

use alpha_shape::io::{read_points, write_segments};
use alpha_shape::{
    AlphaShapeConfig, AlphaShapeResult, BigRationalKernel, BoundaryMode, FilteredKernel, Kernel2,
    Point2, alpha_shape_with,
};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "alpha-shape")]
#[command(about = "Alpha shape boundary of a 2D point file, with per-run timings")]
#[command(allow_negative_numbers = true)]
struct Cmd {
    /// Text file with one `x y` point per line
    input: PathBuf,
    /// Destination for boundary segments, one `x1 y1 x2 y2` per line
    output: PathBuf,
    /// Squared radius
    alpha: f64,
    /// Timed runs before the final run that writes the output
    #[arg(default_value_t = 1)]
    n_iterations: usize,
    #[arg(long, value_enum, default_value_t = Mode::Regular)]
    mode: Mode,
    /// Use exact rational arithmetic for every predicate
    #[arg(long)]
    exact: bool,
    /// Do not report edges attached to a triangle as singular
    #[arg(long)]
    gabriel_singular: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Regular,
    RegularAndSingular,
}

impl From<Mode> for BoundaryMode {
    fn from(m: Mode) -> Self {
        match m {
            Mode::Regular => BoundaryMode::Regular,
            Mode::RegularAndSingular => BoundaryMode::RegularAndSingular,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cmd = Cmd::parse();
    let timings = execute(&cmd)?;
    println!("{}", format_timings(&timings));
    Ok(())
}

/// Read, time, write. Returns the per-run timings in milliseconds.
fn execute(cmd: &Cmd) -> Result<Vec<f64>> {
    let config = AlphaShapeConfig::new(cmd.alpha)
        .context("invalid alpha")?
        .with_mode(cmd.mode.into())
        .with_gabriel_singular(cmd.gabriel_singular);

    let input = read_points(&cmd.input)
        .with_context(|| format!("unable to read points from {}", cmd.input.display()))?;
    tracing::info!(points = input.points.len(), alpha = config.alpha, "loaded input");

    let (timings, shape) = if cmd.exact {
        run::<BigRationalKernel>(&input.points, &config, cmd.n_iterations)?
    } else {
        run::<FilteredKernel>(&input.points, &config, cmd.n_iterations)?
    };

    write_segments(&cmd.output, &shape.segments())
        .with_context(|| format!("unable to write {}", cmd.output.display()))?;
    Ok(timings)
}

/// `n` timed runs, then one untimed run whose result is kept.
fn run<K: Kernel2>(
    points: &[Point2],
    config: &AlphaShapeConfig,
    n: usize,
) -> Result<(Vec<f64>, AlphaShapeResult)> {
    let mut timings = Vec::with_capacity(n);
    for _ in 0..n {
        let start = Instant::now();
        black_box(alpha_shape_with::<K>(black_box(points), config)?);
        timings.push(start.elapsed().as_secs_f64() * 1e3);
    }
    let shape = alpha_shape_with::<K>(points, config)?;
    tracing::info!(edges = shape.len(), "boundary extracted");
    Ok((timings, shape))
}

fn format_timings(ms: &[f64]) -> String {
    let items: Vec<String> = ms.iter().map(|t| t.to_string()).collect();
    format!("[{}]", items.join(","))
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;

    use super::*;

    #[test]
    fn timings_list() {
        assert_eq!(format_timings(&[]), "[]");
        assert_eq!(format_timings(&[1.5, 2.0]), "[1.5,2]");
    }

    #[test]
    fn positional_arguments() {
        let cmd = Cmd::try_parse_from(["alpha-shape", "in.txt", "out.txt", "0.25"]).unwrap();
        assert_eq!(cmd.alpha, 0.25);
        assert_eq!(cmd.n_iterations, 1);
        assert!(!cmd.exact);

        let cmd = Cmd::try_parse_from([
            "alpha-shape",
            "in.txt",
            "out.txt",
            "-1",
            "5",
            "--mode",
            "regular-and-singular",
        ])
        .unwrap();
        assert_eq!(cmd.alpha, -1.0);
        assert_eq!(cmd.n_iterations, 5);
        assert!(matches!(cmd.mode, Mode::RegularAndSingular));

        assert!(Cmd::try_parse_from(["alpha-shape", "in.txt"]).is_err());
        assert!(Cmd::try_parse_from(["alpha-shape", "in.txt", "out.txt", "abc"]).is_err());
    }

    fn square_file(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("square.txt");
        std::fs::write(&path, "0 0\n1 0\n1 1\n0 1\n").unwrap();
        path
    }

    #[test]
    fn timed_runs_then_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = square_file(dir.path());
        let points = read_points(&input).unwrap().points;
        let config = AlphaShapeConfig::new(2.0).unwrap();

        let (timings, shape) = run::<FilteredKernel>(&points, &config, 3).unwrap();
        assert_eq!(timings.len(), 3);
        assert!(timings.iter().all(|t| *t >= 0.0));
        assert_eq!(shape.len(), 4);

        let output = dir.path().join("edges.txt");
        let cmd = Cmd::try_parse_from([
            OsStr::new("alpha-shape"),
            input.as_os_str(),
            output.as_os_str(),
            OsStr::new("2"),
            OsStr::new("3"),
            OsStr::new("--exact"),
        ])
        .unwrap();
        let timings = execute(&cmd).unwrap();
        assert_eq!(timings.len(), 3);
        let listed = format_timings(&timings);
        assert!(listed.starts_with('[') && listed.ends_with(']'));
        assert_eq!(listed.matches(',').count(), 2);
        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn failures_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        let input = square_file(dir.path());
        let output = dir.path().join("edges.txt");
        let missing = dir.path().join("absent.txt");

        let cmd = |inp: &PathBuf, alpha: &str| {
            Cmd::try_parse_from([
                OsStr::new("alpha-shape"),
                inp.as_os_str(),
                output.as_os_str(),
                OsStr::new(alpha),
            ])
            .unwrap()
        };
        assert!(execute(&cmd(&missing, "1")).is_err());
        assert!(execute(&cmd(&input, "-1")).is_err());
        assert!(!output.exists());
        assert!(execute(&cmd(&input, "1")).is_ok());
        assert!(output.exists());
    }
}
