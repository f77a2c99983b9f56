extern crate clap;
extern crate fractalgen;
extern crate image;
extern crate num;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use fractalgen::{ConstantSpec, FractalKind, GridRenderer, IterationGrid, ViewParameters};
use image::pnm::PNMEncoder;
use image::pnm::{PNMSubtype, SampleEncoding};
use image::ColorType;
use num::{clamp, Complex};
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn validate_positive_real(s: &str, err: &str) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(f) if f > 0.0 && f.is_finite() => Ok(()),
        _ => Err(err.to_string()),
    }
}

const FRACTAL: &str = "fractal";
const OUTPUT: &str = "output";
const SIZE: &str = "size";
const CENTER: &str = "center";
const ZOOM: &str = "zoom";
const ITERATIONS: &str = "iterations";
const THREADS: &str = "threads";
const CONSTANT: &str = "constant";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("fractal")
        .version("0.1.0")
        .author("elf")
        .about("Escape-time fractal generator")
        .arg(
            Arg::with_name(FRACTAL)
                .required(true)
                .possible_values(&["mandelbrot", "julia"])
                .help("Which fractal family to generate"),
        )
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("800x600")
                .validator(|s| validate_pair::<usize>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(CENTER)
                .required(false)
                .long(CENTER)
                .takes_value(true)
                .allow_hyphen_values(true)
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse center point"))
                .help("Center of the view on the complex plane (default depends on the fractal)"),
        )
        .arg(
            Arg::with_name(ZOOM)
                .required(false)
                .long(ZOOM)
                .short("z")
                .takes_value(true)
                .default_value("1.0")
                .validator(|s| validate_positive_real(&s, "Zoom must be a positive number"))
                .help("Magnification; larger values show a smaller region"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("100")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000000",
                    )
                })
                .help("Maximum number of iterations per pixel"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in solver (default: all cores)"),
        )
        .arg(
            Arg::with_name(CONSTANT)
                .required(false)
                .long(CONSTANT)
                .short("c")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("classic")
                .help("Julia constant: a preset name or a literal like 0.3+0.5i"),
        )
        .get_matches()
}

/// Scale the iteration counts into 8-bit grayscale, brightest at the
/// iteration cap, and flip the rows so the bottom of the plane lands
/// at the bottom of the image (grid row 0 is y_min; image row 0 is
/// the top).
fn grayscale(grid: &IterationGrid) -> Vec<u8> {
    let maxi = grid.max_count().max(1);
    let mut pixels = Vec::with_capacity(grid.width() * grid.height());
    for row in (0..grid.height()).rev() {
        for column in 0..grid.width() {
            let v = u64::from(grid.get(row, column)) * 255 / u64::from(maxi);
            pixels.push(clamp(v, 0, 255) as u8);
        }
    }
    pixels
}

fn write_image(outfile: &str, pixels: &[u8], bounds: (usize, usize)) -> Result<(), std::io::Error> {
    let path = Path::new(outfile);
    let output = File::create(&path)?;
    let mut encoder =
        PNMEncoder::new(output).with_subtype(PNMSubtype::Graymap(SampleEncoding::Binary));
    encoder.encode(pixels, bounds.0 as u32, bounds.1 as u32, ColorType::Gray(8))?;
    Ok(())
}

fn main() {
    let matches = args();

    let image_size =
        parse_pair(matches.value_of(SIZE).unwrap(), 'x').expect("Error parsing image dimensions");
    let zoom = f64::from_str(matches.value_of(ZOOM).unwrap()).expect("Error parsing zoom");
    let max_iter = usize::from_str(matches.value_of(ITERATIONS).unwrap())
        .expect("Error parsing iteration count");
    let threads = match matches.value_of(THREADS) {
        Some(t) => usize::from_str(t).expect("Error parsing thread count"),
        None => num_cpus::get(),
    };

    let (mut view, kind) = match matches.value_of(FRACTAL).unwrap() {
        "julia" => {
            let spec = ConstantSpec::Text(matches.value_of(CONSTANT).unwrap().to_string());
            let c = match spec.resolve() {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            };
            (ViewParameters::julia_defaults(), FractalKind::Julia(c))
        }
        _ => (ViewParameters::mandelbrot_defaults(), FractalKind::Mandelbrot),
    };

    view.width = image_size.0;
    view.height = image_size.1;
    view.zoom = zoom;
    view.max_iter = max_iter;
    if let Some(center) = matches.value_of(CENTER) {
        let (re, im) = parse_pair(center, ',').expect("Error parsing center point");
        view.center = Complex::new(re, im);
    }

    let renderer = match GridRenderer::new(&view, kind) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let (grid, stats) = renderer.render(threads);
    let seconds =
        stats.elapsed.as_secs() as f64 + f64::from(stats.elapsed.subsec_nanos()) * 1e-9;
    eprintln!(
        "rendered {}x{} in {:.2}s ({:.0} pixels/sec)",
        grid.width(),
        grid.height(),
        seconds,
        stats.pixels_per_second
    );

    let pixels = grayscale(&grid);
    if let Err(e) = write_image(matches.value_of(OUTPUT).unwrap(), &pixels, image_size) {
        eprintln!("Could not write image: {}", e);
        std::process::exit(1);
    }
}
