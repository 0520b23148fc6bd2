use std::{fs, path::PathBuf};

use image::{GenericImageView, Rgba, RgbaImage};
use imagefry::{
    cli::{self, Args},
    codec, ImageKind,
};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("imagefry-{}-{name}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn sample_image() -> RgbaImage {
    RgbaImage::from_fn(12, 9, |x, y| {
        Rgba([(x * 20) as u8, (y * 25) as u8, 128, if x < 6 { 255 } else { 40 }])
    })
}

fn args_for(file_name: &str, iterations: u32, seed: u64) -> Args {
    Args {
        verbose: false,
        file_name: file_name.to_owned(),
        iterations,
        seed: Some(seed),
        classic: false,
    }
}

#[test]
fn fries_png_next_to_input() {
    let dir = scratch_dir("png");
    let input = dir.join("sample.png");
    let source = sample_image();
    fs::write(&input, codec::encode(&source, ImageKind::Png).unwrap()).unwrap();

    let output = cli::run(&args_for(input.to_str().unwrap(), 3, 17)).unwrap();
    assert_eq!(output, dir.join("frydsample.png"));

    let bytes = fs::read(&output).unwrap();
    assert_eq!(ImageKind::sniff(&bytes).unwrap(), ImageKind::Png);
    let fried = codec::decode(&bytes, ImageKind::Png).unwrap().to_rgba8();
    assert_eq!(fried.dimensions(), source.dimensions());
    for (before, after) in source.pixels().zip(fried.pixels()) {
        assert_eq!(before[3], after[3]);
        for channel in 0..3 {
            let delta = after[channel] as i16 - before[channel] as i16;
            assert!(delta.abs() < 30);
        }
    }

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn same_seed_same_output() {
    let dir = scratch_dir("seeded");
    let input = dir.join("a.png");
    fs::write(&input, codec::encode(&sample_image(), ImageKind::Png).unwrap()).unwrap();

    let args = args_for(input.to_str().unwrap(), 2, 5);
    let first = fs::read(cli::run(&args).unwrap()).unwrap();
    let second = fs::read(cli::run(&args).unwrap()).unwrap();
    assert_eq!(first, second);

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn zero_iterations_keeps_png_pixels() {
    let dir = scratch_dir("zero");
    let input = dir.join("still.png");
    let source = sample_image();
    fs::write(&input, codec::encode(&source, ImageKind::Png).unwrap()).unwrap();

    let output = cli::run(&args_for(input.to_str().unwrap(), 0, 1)).unwrap();
    let fried = codec::decode(&fs::read(output).unwrap(), ImageKind::Png).unwrap();
    assert_eq!(fried.to_rgba8(), source);

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn jpeg_stays_jpeg() {
    let dir = scratch_dir("jpeg");
    let input = dir.join("photo.jpg");
    fs::write(&input, codec::encode(&sample_image(), ImageKind::Jpeg).unwrap()).unwrap();

    let mut args = args_for(input.to_str().unwrap(), 4, 9);
    args.classic = true;
    let output = cli::run(&args).unwrap();
    assert_eq!(output, dir.join("frydphoto.jpg"));

    let bytes = fs::read(output).unwrap();
    assert_eq!(ImageKind::sniff(&bytes).unwrap(), ImageKind::Jpeg);
    let fried = codec::decode(&bytes, ImageKind::Jpeg).unwrap();
    assert_eq!(fried.dimensions(), (12, 9));

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn content_decides_the_format() {
    let dir = scratch_dir("mislabeled");
    let input = dir.join("actually_png.jpg");
    fs::write(&input, codec::encode(&sample_image(), ImageKind::Png).unwrap()).unwrap();

    let output = cli::run(&args_for(input.to_str().unwrap(), 1, 2)).unwrap();
    let bytes = fs::read(output).unwrap();
    assert_eq!(ImageKind::sniff(&bytes).unwrap(), ImageKind::Png);

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn reports_missing_and_unreadable_files() {
    let dir = scratch_dir("errors");
    let missing = dir.join("nope.png");
    let err = cli::run(&args_for(missing.to_str().unwrap(), 1, 0)).unwrap_err();
    assert!(err.to_string().starts_with("could not open file"));

    let text = dir.join("text.png");
    fs::write(&text, "not an image").unwrap();
    let err = cli::run(&args_for(text.to_str().unwrap(), 1, 0)).unwrap_err();
    assert_eq!(err.to_string(), "image: unknown format");
    assert!(!dir.join("frydtext.png").exists());

    fs::remove_dir_all(dir).unwrap();
}
