use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use image::{Rgba, RgbaImage};

fn optimize_images(cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_optimize-images"))
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn all_missing_exits_zero() {
    let tmp = tempfile::tempdir().unwrap();

    let res = optimize_images(tmp.path());
    assert!(res.status.success());
    let stdout = String::from_utf8_lossy(&res.stdout);
    assert!(stdout.contains("[optimize-images] No targets processed"));
    let stderr = String::from_utf8_lossy(&res.stderr);
    assert!(stderr.contains("[optimize-images] Skip missing: home-light.png"));
    assert!(stderr.contains("[optimize-images] Skip missing: home-dark.png"));
    assert!(tmp.path().join("img").is_dir());
}

#[test]
fn corrupt_input_exits_one_and_keeps_earlier_outputs() {
    let tmp = tempfile::tempdir().unwrap();
    let img = tmp.path().join("img");
    fs::create_dir(&img).unwrap();
    RgbaImage::from_fn(16, 16, |x, _| {
        if (4..12).contains(&x) {
            Rgba([10, 200, 10, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    })
    .save(img.join("home-light.png"))
    .unwrap();
    fs::write(img.join("home-dark.png"), b"garbage").unwrap();

    let res = optimize_images(tmp.path());
    assert_eq!(res.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&res.stderr);
    assert!(stderr.starts_with("[optimize-images] Failed:"));
    assert!(stderr.contains("home-dark.png"));
    assert!(img.join("home-light.avif").is_file());
    assert!(img.join("home-light.webp").is_file());
    assert!(!img.join("home-dark.avif").exists());
}
