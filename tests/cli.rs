//! End-to-end tests driving the built `resize-crop` binary.
//!
//! Run with: cargo test --test cli

use image::{Rgb, RgbImage};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn resize_crop(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_resize-crop"))
        .args(args)
        .output()
        .expect("failed to run resize-crop")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn write_image(path: &Path, width: u32, height: u32) {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 64])
    })
    .save(path)
    .unwrap();
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn resizes_every_image_to_target() {
    let tmp = TempDir::new().unwrap();
    write_image(&tmp.path().join("landscape.png"), 384, 216);
    write_image(&tmp.path().join("portrait.jpg"), 108, 192);
    write_image(&tmp.path().join("wide.png"), 200, 100);

    let out = resize_crop(&["-i", arg(tmp.path()), "-r", "96,54"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let output_dir = tmp.path().join("output");
    for name in [
        "landscape_resize_and_cropped.png",
        "portrait_resize_and_cropped.jpg",
        "wide_resize_and_cropped.png",
    ] {
        assert_eq!(
            image::image_dimensions(output_dir.join(name)).unwrap(),
            (96, 54),
            "{name}"
        );
    }
    assert_eq!(std::fs::read_dir(&output_dir).unwrap().count(), 3);
}

#[test]
fn prints_settings_banner_and_one_line_per_image() {
    let tmp = TempDir::new().unwrap();
    write_image(&tmp.path().join("a.png"), 40, 30);

    let out = resize_crop(&["-i", arg(tmp.path()), "-r", "20,15"]);
    assert!(out.status.success());

    let text = stdout(&out);
    assert!(text.starts_with(&"-".repeat(100)));
    assert!(text.contains("resolution: 20x15"));
    assert!(text.contains("[1/1] Img '"));
    assert!(!text.contains("Total execution time"));
}

#[test]
fn verbose_reports_crop_and_timing() {
    let tmp = TempDir::new().unwrap();
    write_image(&tmp.path().join("portrait.png"), 108, 192);

    let out = resize_crop(&["--input", arg(tmp.path()), "-r", "192,108", "-v"]);
    assert!(out.status.success());

    let text = stdout(&out);
    assert!(text.contains("Crop needed"));
    assert!(text.contains("Crop vertically"));
    assert!(text.contains("Total execution time:"));
}

#[test]
fn empty_folder_is_a_successful_no_op() {
    let tmp = TempDir::new().unwrap();

    let out = resize_crop(&["-i", arg(tmp.path())]);

    assert!(out.status.success());
    assert!(tmp.path().join("output").is_dir());
    assert_eq!(std::fs::read_dir(tmp.path().join("output")).unwrap().count(), 0);
}

#[test]
fn non_image_files_are_ignored() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("notes.txt"), "hello").unwrap();

    let out = resize_crop(&["-i", arg(tmp.path())]);

    assert!(out.status.success());
    assert_eq!(std::fs::read_dir(tmp.path().join("output")).unwrap().count(), 0);
}

#[test]
fn explicit_output_and_delete_flag() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("in");
    let output = tmp.path().join("out");
    std::fs::create_dir_all(&input).unwrap();
    std::fs::create_dir_all(&output).unwrap();
    std::fs::write(output.join("stale.txt"), "old").unwrap();
    write_image(&input.join("a.bmp"), 30, 20);

    let out = resize_crop(&[
        "-i",
        arg(&input),
        "-o",
        arg(&output),
        "--delete_existing_output_folder",
        "-r",
        "30,20",
    ]);

    assert!(out.status.success());
    assert!(!output.join("stale.txt").exists());
    assert!(output.join("a_resize_and_cropped.bmp").exists());
    assert!(!input.join("output").exists());
}

#[test]
fn invalid_input_folder_fails() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("missing");

    let out = resize_crop(&["-i", arg(&missing)]);

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Not a valid input folder"));
    assert!(!missing.exists());
}

#[test]
fn missing_input_argument_prints_usage() {
    let out = resize_crop(&[]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage"));
}

#[test]
fn malformed_resolution_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let out = resize_crop(&["-i", arg(tmp.path()), "-r", "1920x1080"]);
    assert!(!out.status.success());
    assert!(!tmp.path().join("output").exists());
}

#[test]
fn negative_factor_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let out = resize_crop(&["-i", arg(tmp.path()), "--max_factor_change=-0.5"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("max_factor_change"));
}

#[test]
fn corrupt_image_aborts_with_error() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("broken.jpg"), "not really a jpeg").unwrap();

    let out = resize_crop(&["-i", arg(tmp.path())]);

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("broken.jpg"));
}

#[test]
fn config_file_is_layered_under_flags() {
    let tmp = TempDir::new().unwrap();
    let input = tmp.path().join("in");
    std::fs::create_dir_all(&input).unwrap();
    write_image(&input.join("a.png"), 64, 64);
    let config = tmp.path().join("resize-crop.toml");
    std::fs::write(&config, "resolution = [10, 10]\nmax_factor_change = 0.0\n").unwrap();

    let out = resize_crop(&["-i", arg(&input), "--config", arg(&config), "-r", "16,8"]);

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(stdout(&out).contains("max_factor_change: 0"));
    assert_eq!(
        image::image_dimensions(input.join("output/a_resize_and_cropped.png")).unwrap(),
        (16, 8)
    );
}

#[test]
fn print_config_needs_no_input() {
    let out = resize_crop(&["--print-config"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("resolution = [1920, 1080]"));
}
