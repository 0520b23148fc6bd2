use std::{
    ffi::OsString,
    fs,
    num::ParseIntError,
    path::{Path, PathBuf},
};

use anyhow::Context;
use log::info;

use crate::{
    codec,
    format::ImageKind,
    fry::{FryOptions, PixelFryer},
    noise::{self, RngNoise},
};

pub const USAGE: &str = "USAGE: 'imagefry [-v] [--seed <n>] [--classic] image.jpg/png #times_fryd'";

/// Prepended to the input's file name to name the output.
pub const OUTPUT_PREFIX: &str = "fryd";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("please provide a filename")]
    MissingFileName,
    #[error("please enter a number of times to fry, {0}")]
    BadIterations(String),
    #[error("please enter a numeric seed, {0}")]
    BadSeed(String),
    #[error("unknown option {0}")]
    UnknownOption(String),
    #[error("too many arguments")]
    TooManyArguments,
}
impl UsageError {
    /// Whether the usage line should accompany this error.
    pub fn shows_usage(&self) -> bool {
        matches!(self, Self::MissingFileName | Self::UnknownOption(_))
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Args {
    pub verbose: bool,
    pub file_name: String,
    pub iterations: u32,
    pub seed: Option<u64>,
    pub classic: bool,
}
impl Args {
    pub fn fry_options(&self) -> FryOptions {
        if self.classic {
            FryOptions::CLASSIC
        } else {
            FryOptions::default()
        }
    }
}

/// Parses the arguments following the program name.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args, UsageError> {
    let mut verbose = false;
    let mut seed = None;
    let mut classic = false;
    let mut positional = vec![];

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-v" => verbose = true,
            "--classic" => classic = true,
            "--seed" => {
                let value = args
                    .next()
                    .ok_or_else(|| UsageError::BadSeed("no value given".to_owned()))?;
                seed = Some(
                    value
                        .parse()
                        .map_err(|e: ParseIntError| UsageError::BadSeed(e.to_string()))?,
                );
            }
            // `-3` is left for the iteration count to reject.
            option if option.starts_with('-') && option.parse::<i64>().is_err() => {
                return Err(UsageError::UnknownOption(arg))
            }
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let file_name = positional
        .next()
        .filter(|name| ImageKind::from_file_name(name).is_some())
        .ok_or(UsageError::MissingFileName)?;
    let iterations = match positional.next() {
        Some(count) => count
            .parse()
            .map_err(|e: ParseIntError| UsageError::BadIterations(e.to_string()))?,
        None => 1,
    };
    if positional.next().is_some() {
        return Err(UsageError::TooManyArguments);
    }

    Ok(Args {
        verbose,
        file_name,
        iterations,
        seed,
        classic,
    })
}

/// `dir/cat.png` becomes `dir/frydcat.png`.
pub fn output_path(input: &Path) -> PathBuf {
    let mut file_name = OsString::from(OUTPUT_PREFIX);
    if let Some(name) = input.file_name() {
        file_name.push(name);
    }
    input.with_file_name(file_name)
}

/// Reads, fries and writes the image named by `args`, returning where the output went.
pub fn run(args: &Args) -> anyhow::Result<PathBuf> {
    let input = Path::new(&args.file_name);
    let bytes =
        fs::read(input).with_context(|| format!("could not open file {}", input.display()))?;
    let kind = ImageKind::sniff(&bytes)?;
    info!("decoding {} as {kind}", input.display());
    let source = codec::decode(&bytes, kind)?;

    let seed = args.seed.unwrap_or_else(noise::clock_seed);
    info!("frying {} times with seed {seed}", args.iterations);
    let fried = PixelFryer::new(RngNoise::seeded(seed))
        .with_options(args.fry_options())
        .fry(&source, args.iterations);

    let output = output_path(input);
    let encoded = codec::encode(&fried, kind)?;
    info!("writing {} bytes to {}", encoded.len(), output.display());
    fs::write(&output, encoded)
        .with_context(|| format!("could not write {}", output.display()))?;
    Ok(output)
}
