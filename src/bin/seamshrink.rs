// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use seamshrink::{check_target, CarveError, SeamCarver, SeamSnapshots, Strategy, UnknownStrategy};

use clap::{App, Arg, ArgMatches};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageBuffer, ImageError, Pixel};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("{name} must be a positive whole number, not {value:?}")]
    BadDimension { name: &'static str, value: String },

    #[error(transparent)]
    Strategy(#[from] UnknownStrategy),

    #[error("could not load image {path}: {source}")]
    Load { path: String, source: ImageError },

    #[error("could not save image {path}: {source}")]
    Save { path: String, source: ImageError },

    #[error("could not create directory {path}: {source}")]
    Directory { path: String, source: std::io::Error },

    #[error(transparent)]
    Carve(#[from] CarveError),
}

struct Options {
    input: PathBuf,
    width: u32,
    height: u32,
    strategy: Strategy,
    output: PathBuf,
    compare: bool,
    seams: Option<PathBuf>,
}

fn dimension(matches: &ArgMatches, name: &'static str) -> Result<u32, CliError> {
    let value = matches.value_of(name).unwrap_or_default();
    value.parse().map_err(|_| CliError::BadDimension {
        name,
        value: value.to_string(),
    })
}

fn options() -> Result<Options, CliError> {
    let matches = App::new("seamshrink")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image reduction by seam carving")
        .arg(
            Arg::with_name("INPUT")
                .help("The image to shrink")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("WIDTH")
                .help("Target width, no larger than the image")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("HEIGHT")
                .help("Target height, no larger than the image")
                .required(true)
                .index(3),
        )
        .arg(
            Arg::with_name("METHOD")
                .help("Seam search: dynamic programming or greedy")
                .possible_values(&["dp", "greedy"])
                .default_value("dp")
                .index(4),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("PATH")
                .help("Where to write the result [default: output_<METHOD>.jpg]"),
        )
        .arg(
            Arg::with_name("compare")
                .long("compare")
                .help("Also write a uniformly scaled copy to output_scaled.jpg"),
        )
        .arg(
            Arg::with_name("seams")
                .long("seams")
                .takes_value(true)
                .value_name("DIR")
                .help("Write seam overlays into DIR as the carve progresses"),
        )
        .get_matches();

    let strategy: Strategy = matches.value_of("METHOD").unwrap_or("dp").parse()?;
    let output = matches
        .value_of("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(format!("output_{}.jpg", strategy)));

    Ok(Options {
        input: PathBuf::from(matches.value_of("INPUT").unwrap_or_default()),
        width: dimension(&matches, "WIDTH")?,
        height: dimension(&matches, "HEIGHT")?,
        strategy,
        output,
        compare: matches.is_present("compare"),
        seams: matches.value_of("seams").map(PathBuf::from),
    })
}

fn carve<P>(image: &ImageBuffer<P, Vec<u8>>, opts: &Options) -> Result<ImageBuffer<P, Vec<u8>>, CliError>
where
    P: Pixel<Subpixel = u8> + 'static,
{
    let carver = SeamCarver::new(image).with_strategy(opts.strategy);
    let dir = match &opts.seams {
        None => return Ok(carver.carve(opts.width, opts.height)?),
        Some(dir) => dir,
    };

    fs::create_dir_all(dir).map_err(|source| CliError::Directory {
        path: dir.display().to_string(),
        source,
    })?;
    let mut snapshots = SeamSnapshots::default();
    let result = carver.carve_with(opts.width, opts.height, &mut snapshots)?;
    for (orientation, index, frame) in &snapshots.frames {
        save(frame, &dir.join(format!("seam_{}_{:04}.png", orientation, index)))?;
    }
    Ok(result)
}

fn save<P>(image: &ImageBuffer<P, Vec<u8>>, path: &Path) -> Result<(), CliError>
where
    P: Pixel<Subpixel = u8> + image::PixelWithColorType,
{
    image.save(path).map_err(|source| CliError::Save {
        path: path.display().to_string(),
        source,
    })
}

fn run() -> Result<(), CliError> {
    let opts = options()?;

    let source = image::open(&opts.input).map_err(|source| CliError::Load {
        path: opts.input.display().to_string(),
        source,
    })?;
    let (width, height) = source.dimensions();
    info!("Original size: {}x{}", width, height);
    info!("Target size: {}x{}", opts.width, opts.height);
    check_target(width, height, opts.width, opts.height)?;

    let working = if source.color().has_color() {
        DynamicImage::ImageRgb8(source.to_rgb8())
    } else {
        DynamicImage::ImageLuma8(source.to_luma8())
    };

    info!("Using {} seam search", opts.strategy.describe());
    let start = Instant::now();
    let result = match &working {
        DynamicImage::ImageLuma8(gray) => DynamicImage::ImageLuma8(carve(gray, &opts)?),
        _ => DynamicImage::ImageRgb8(carve(&working.to_rgb8(), &opts)?),
    };
    info!("Processing completed in {} ms", start.elapsed().as_millis());
    let (carved_width, carved_height) = result.dimensions();
    info!("Result size: {}x{}", carved_width, carved_height);

    result.save(&opts.output).map_err(|source| CliError::Save {
        path: opts.output.display().to_string(),
        source,
    })?;
    info!("Result saved to: {}", opts.output.display());

    if opts.compare {
        let scaled_path = Path::new("output_scaled.jpg");
        working
            .resize_exact(opts.width, opts.height, FilterType::Triangle)
            .save(scaled_path)
            .map_err(|source| CliError::Save {
                path: scaled_path.display().to_string(),
                source,
            })?;
        info!("Uniformly scaled copy saved to: {}", scaled_path.display());
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
