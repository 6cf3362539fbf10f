// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{App, Arg, ArgMatches};
use failure::{format_err, Error};
use log::info;
use mandelbrot::{color_for_pixel, escape_count, zoom, Pan, Pixel, Viewport, Zoom};
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

fn validate_range<T: FromStr + PartialOrd>(
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

fn validate_number<T: FromStr>(s: &str, err: &str) -> Result<(), String> {
    T::from_str(s).map(|_| ()).map_err(|_| err.to_string())
}

fn validate_pans(s: &str) -> Result<(), String> {
    s.split(',').map(Pan::from_str).collect::<Result<Vec<_>, _>>().map(|_| ())
}

const SIZE: &str = "size";
const SCALE: &str = "scale";
const LEFT: &str = "left";
const TOP: &str = "top";
const ITERATIONS: &str = "iterations";
const ZOOM: &str = "zoom";
const PAN: &str = "pan";
const COUNT: &str = "count";
const PIXEL: &str = "PIXEL";

fn args<'a>() -> ArgMatches<'a> {
    App::new("mandel")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Mandelbrot escape-time probe")
        .arg(
            Arg::with_name(SIZE)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("640x480")
                .validator(|s| validate_pair::<usize>(&s, 'x', "Could not parse viewport size"))
                .help("Size of the viewport in pixels"),
        )
        .arg(
            Arg::with_name(SCALE)
                .long(SCALE)
                .short("c")
                .takes_value(true)
                .default_value("0.5")
                .validator(|s| validate_number::<f64>(&s, "Could not parse scale"))
                .help("Zoom factor of the viewport"),
        )
        .arg(
            Arg::with_name(LEFT)
                .long(LEFT)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2.0")
                .validator(|s| validate_number::<f64>(&s, "Could not parse left offset"))
                .help("Real coordinate of the leftmost column"),
        )
        .arg(
            Arg::with_name(TOP)
                .long(TOP)
                .short("t")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("1.0")
                .validator(|s| validate_number::<f64>(&s, "Could not parse top offset"))
                .help("Top offset of the viewport"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("100")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000000",
                    )
                })
                .help("Iteration budget per pixel"),
        )
        .arg(
            Arg::with_name(ZOOM)
                .long(ZOOM)
                .short("z")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("0")
                .validator(|s| {
                    validate_range(
                        &s,
                        -64,
                        64,
                        "Could not parse zoom steps",
                        "Zoom steps must be between -64 and 64",
                    )
                })
                .help("Zoom steps to take before probing; negative zooms out"),
        )
        .arg(
            Arg::with_name(PAN)
                .long(PAN)
                .short("p")
                .takes_value(true)
                .validator(|s| validate_pans(&s))
                .help("Comma-separated pans (up, down, left, right) applied after zooming"),
        )
        .arg(
            Arg::with_name(COUNT)
                .long(COUNT)
                .help("Print the raw escape count instead of the color"),
        )
        .arg(
            Arg::with_name(PIXEL)
                .required(true)
                .multiple(true)
                .validator(|s| validate_pair::<i64>(&s, ',', "Could not parse pixel"))
                .help("Pixels to probe, as column,row; put negative ones after --"),
        )
        .get_matches()
}

/// Value of an argument that has a default, so it is always present.
fn value<T: FromStr>(matches: &ArgMatches, name: &str) -> Result<T, Error> {
    let raw = matches
        .value_of(name)
        .ok_or_else(|| format_err!("Missing value for {}", name))?;
    T::from_str(raw).map_err(|_| format_err!("Could not parse {} '{}'", name, raw))
}

fn viewport(matches: &ArgMatches) -> Result<(Viewport, usize), Error> {
    let size = matches.value_of(SIZE).unwrap_or("");
    let (width, height) =
        parse_pair(size, 'x').ok_or_else(|| format_err!("Error parsing viewport size"))?;
    let mut viewport = Viewport::new(
        width,
        height,
        value(matches, SCALE)?,
        value(matches, LEFT)?,
        value(matches, TOP)?,
    )?;
    let mut iterations: usize = value(matches, ITERATIONS)?;

    let steps: i32 = value(matches, ZOOM)?;
    let direction = if steps < 0 { Zoom::Out } else { Zoom::In };
    for _ in 0..steps.abs() {
        match zoom(&viewport, iterations, direction) {
            Some((next, budget)) => {
                viewport = next;
                iterations = budget;
            }
            None => break,
        }
    }

    if let Some(pans) = matches.value_of(PAN) {
        for pan in pans.split(',') {
            viewport = viewport.panned(Pan::from_str(pan).map_err(|e| format_err!("{}", e))?)?;
        }
    }
    Ok((viewport, iterations))
}

fn run() -> Result<(), Error> {
    let matches = args();
    let (viewport, iterations) = viewport(&matches)?;
    info!(
        "Evaluating at scale {} (iterations: {})",
        viewport.scale_label(),
        iterations
    );

    for raw in matches.values_of(PIXEL).into_iter().flatten() {
        let (column, row) =
            parse_pair(raw, ',').ok_or_else(|| format_err!("Error parsing pixel '{}'", raw))?;
        let pixel = Pixel(column, row);
        if matches.is_present(COUNT) {
            println!("{}", escape_count(viewport.pixel_to_point(&pixel), iterations));
        } else {
            println!("{}", color_for_pixel(pixel, iterations, &viewport)?);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
