use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn mandel() -> Command {
    Command::cargo_bin("mandel").unwrap()
}

#[test]
fn origin_probes_white() {
    mandel()
        .args(&["--scale", "1", "--left", "0", "--top", "0", "0,0"])
        .assert()
        .success()
        .stdout("255 255 255\n");
}

#[test]
fn shifted_corner_escapes_at_once() {
    let args = [
        "--size", "101x101", "--scale", "1", "--left", "-2", "--top", "-1", "0,0",
    ];
    mandel().args(&args).assert().success().stdout("0 0 0\n");
    mandel()
        .args(&args)
        .arg("--count")
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn one_line_per_pixel() {
    // Pixel 2,0 lands on (0.625, 0), which escapes on update index 2.
    let args = [
        "--size", "5x5", "--scale", "1", "--left", "0", "--top", "0", "--iterations", "10",
        "2,0", "0,0",
    ];
    mandel()
        .args(&args)
        .assert()
        .success()
        .stdout("51 51 51\n255 255 255\n");
    mandel()
        .args(&args)
        .arg("--count")
        .assert()
        .success()
        .stdout("2\n10\n");
}

#[test]
fn zooming_in_raises_the_budget() {
    // After one zoom step the upper left pixel sits on the origin.
    mandel()
        .args(&[
            "--scale", "1", "--left", "-0.3125", "--top", "0.25", "--zoom", "1", "--count", "0,0",
        ])
        .assert()
        .success()
        .stdout("150\n");
}

#[test]
fn zooming_out_lowers_the_budget() {
    mandel()
        .args(&[
            "--scale", "1", "--left", "0.625", "--top", "-0.5", "--zoom", "-1", "--count", "0,0",
        ])
        .assert()
        .success()
        .stdout("50\n");
}

#[test]
fn panning_moves_the_view() {
    mandel()
        .args(&[
            "--scale", "1", "--left", "-0.25", "--top", "0", "--pan", "right", "0,0",
        ])
        .assert()
        .success()
        .stdout("255 255 255\n");
}

#[test]
fn negative_pixels_map_left_of_the_grid() {
    // -200,0 lands on (-2.5, 0), which escapes at once.
    mandel()
        .args(&[
            "--size", "101x101", "--scale", "1", "--left", "0", "--top", "0", "--", "-200,0", "0,0",
        ])
        .assert()
        .success()
        .stdout("0 0 0\n255 255 255\n");
}

#[test]
fn panning_past_the_largest_offset_is_reported() {
    mandel()
        .args(&[
            "--scale",
            "2.2250738585072014e-308",
            "--top",
            "1.7976931348623157e308",
            "--pan",
            "up",
            "0,0",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("offsets must be finite"));
}

#[test]
fn degenerate_viewport_is_reported() {
    mandel()
        .args(&["--size", "1x1", "0,0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("at least 2x2"));
}

#[test]
fn zero_budget_is_rejected() {
    mandel()
        .args(&["--iterations", "0", "0,0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 1000000"));
}

#[test]
fn bad_pixels_and_pans_are_rejected() {
    mandel().args(&["zero,zero"]).assert().failure();
    mandel()
        .args(&["--pan", "sideways", "0,0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown pan direction"));
}
