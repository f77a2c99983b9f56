extern crate assert_cmd;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn fractal() -> Command {
    Command::cargo_bin("fractal").unwrap()
}

#[test]
fn no_arguments_is_an_error() {
    fractal().assert().failure();
}

#[test]
fn negative_height_is_rejected_at_the_parse_layer() {
    fractal()
        .args(&["mandelbrot", "-o", "out.pnm", "-s", "800x-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse output image size"));
}

#[test]
fn zero_zoom_is_rejected() {
    fractal()
        .args(&["mandelbrot", "-o", "out.pnm", "-z", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Zoom must be a positive number"));
}

#[test]
fn zero_iterations_is_rejected() {
    fractal()
        .args(&["mandelbrot", "-o", "out.pnm", "-i", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Iteration count must be between 1 and 1000000",
        ));
}

#[test]
fn unknown_fractal_family_is_rejected() {
    fractal()
        .args(&["buddhabrot", "-o", "out.pnm"])
        .assert()
        .failure();
}

#[test]
fn bogus_julia_constant_is_reported() {
    fractal()
        .args(&["julia", "-o", "out.pnm", "-c", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid Julia constant"))
        .stderr(predicate::str::contains("bogus"));
}

#[test]
fn small_mandelbrot_renders_to_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("mandel.pnm");
    fractal()
        .args(&["mandelbrot", "-s", "64x48", "-i", "50", "-t", "1"])
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("pixels/sec"));
    assert!(out.is_file());
    assert!(out.metadata().unwrap().len() > 0);
}

#[test]
fn julia_preset_renders_to_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("julia.pnm");
    fractal()
        .args(&["julia", "-c", "dragon", "-s", "32x32", "-i", "40", "-t", "1"])
        .arg("-o")
        .arg(&out)
        .assert()
        .success();
    assert!(out.is_file());
}

#[test]
fn julia_literal_with_leading_minus_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("julia.pnm");
    fractal()
        .args(&["julia", "-c", "-0.7-0.27i", "-s", "16x16", "-i", "30", "-t", "1"])
        .arg("-o")
        .arg(&out)
        .assert()
        .success();
}

#[test]
fn julia_literal_constant_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("julia.pnm");
    fractal()
        .args(&["julia", "-c", "0.3+0.5i", "-s", "16x16", "-i", "30", "-t", "1"])
        .arg("-o")
        .arg(&out)
        .assert()
        .success();
}
