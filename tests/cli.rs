use assert_cmd::Command;
use cairo::{Context, Format, ImageSurface};
use predicates::prelude::*;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn chitralekhan_cmd(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("chitralekhan").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd
}

fn write_photo(dir: &Path, width: i32, height: i32) -> PathBuf {
    let surface = ImageSurface::create(Format::Rgb24, width, height).unwrap();
    {
        let ctx = Context::new(&surface).unwrap();
        ctx.set_source_rgb(0.2, 0.4, 0.6);
        ctx.paint().unwrap();
    }
    let path = dir.join("photo.png");
    surface.write_to_png(&mut File::create(&path).unwrap()).unwrap();
    path
}

fn read_png(path: &Path) -> ImageSurface {
    ImageSurface::create_from_png(&mut File::open(path).unwrap()).unwrap()
}

#[test]
fn help_prints_usage() {
    let temp = TempDir::new().unwrap();
    chitralekhan_cmd(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Annotate photos"));
}

#[test]
fn missing_image_fails() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("script.txt");
    fs::write(&script, "undo\n").unwrap();

    chitralekhan_cmd(temp.path())
        .args(["--image", "does-not-exist.png", "--output", "out.png", "--script"])
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load image"));
}

#[test]
fn renders_layer_at_photo_resolution() {
    let temp = TempDir::new().unwrap();
    let photo = write_photo(temp.path(), 320, 240);
    let script = temp.path().join("script.txt");
    fs::write(
        &script,
        "tool rectangle\ncolor white\nwidth 3\ndown 10 10\nmove 150 100\nup\n",
    )
    .unwrap();
    let output = temp.path().join("layer.png");

    chitralekhan_cmd(temp.path())
        .arg("--image")
        .arg(&photo)
        .args(["--display", "160x120", "--script"])
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let layer = read_png(&output);
    assert_eq!((layer.width(), layer.height()), (320, 240));
}

#[test]
fn composite_keeps_photo_size() {
    let temp = TempDir::new().unwrap();
    let photo = write_photo(temp.path(), 64, 48);
    let script = temp.path().join("script.txt");
    fs::write(&script, "tool circle\ndown 32 24\nmove 40 24\nup\n").unwrap();
    let output = temp.path().join("annotated.png");

    chitralekhan_cmd(temp.path())
        .arg("--image")
        .arg(&photo)
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .arg("--composite")
        .assert()
        .success();

    let annotated = read_png(&output);
    assert_eq!((annotated.width(), annotated.height()), (64, 48));
}

#[test]
fn bad_script_reports_line() {
    let temp = TempDir::new().unwrap();
    let photo = write_photo(temp.path(), 16, 16);
    let script = temp.path().join("script.txt");
    fs::write(&script, "down 1 1\nwiggle\n").unwrap();

    chitralekhan_cmd(temp.path())
        .arg("--image")
        .arg(&photo)
        .arg("--script")
        .arg(&script)
        .args(["--output", "unused.png"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: Unknown command 'wiggle'"));
}

#[test]
fn explicit_config_sets_initial_tool() {
    let temp = TempDir::new().unwrap();
    let photo = write_photo(temp.path(), 40, 40);
    let config = temp.path().join("config.toml");
    fs::write(&config, "[drawing]\ndefault_tool = \"none\"\n").unwrap();
    let script = temp.path().join("script.txt");
    fs::write(&script, "down 5 5\nmove 30 30\nup\n").unwrap();
    let output = temp.path().join("layer.png");

    chitralekhan_cmd(temp.path())
        .arg("--image")
        .arg(&photo)
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    let mut layer = read_png(&output);
    let data = layer.data().unwrap();
    assert!(data.iter().all(|b| *b == 0), "no tool means no strokes");
}
