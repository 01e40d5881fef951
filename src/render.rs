//! Turning sampled trajectories into image files.

use std::fs;
use std::path::{Path, PathBuf};
use image::{ImageFormat, RgbImage};
use tracing::info;

use crate::duffing::{Parameters, Point, F_HIGH, F_LOW};
use crate::error::{Error, Result};
use crate::generator;
use crate::plot::{Figure, Series, BLACK, BLUE, RED};
use crate::sampler;

pub const WIDTH: u32 = 600;
pub const HEIGHT: u32 = 400;

pub const COMPARISON_FILE: &str = "iduff_comp.png";

/// Shortest decimal form that reads back as the same value, `1` for 1.0.
pub fn format_forcing(forcing: f64) -> String {
    format!("{}", forcing)
}

pub fn single_file_name(forcing: f64) -> String {
    format!("iduff_F{}.png", format_forcing(forcing))
}

pub fn label(forcing: f64) -> String {
    format!("F={}", format_forcing(forcing))
}

pub fn single(forcing: f64, points: Vec<Point>) -> Figure {
    info!(title = %format!("Poincare Section {}", label(forcing)), "single figure");
    Figure::fitting(vec![
        Series::new(label(forcing), BLACK, points)
    ])
}

pub fn comparison(low: Vec<Point>, high: Vec<Point>) -> Figure {
    info!(
        title = %format!("Poincare Section {} vs {}", label(F_LOW), label(F_HIGH)),
        "comparison figure"
    );
    Figure::fitting(vec![
        Series::new(label(F_LOW), RED, low),
        Series::new(label(F_HIGH), BLUE, high)
    ])
}

/// Run the generators for one mode and build its figure.
///
/// In comparison mode `params.forcing` is ignored and the two runs use
/// `F_LOW` and `F_HIGH`; the initial state and step are kept. Returns the
/// figure together with the file name it should be saved under.
pub fn build(params: &Parameters, comp: bool) -> Result<(Figure, String)> {
    params.validate()?;
    let n = params.steps();
    let dt = params.dt();

    if comp {
        let low = generator::start(params.x0, params.y0, F_LOW, dt)?;
        let high = generator::start(params.x0, params.y0, F_HIGH, dt)?;
        let (points_low, points_high) = sampler::collect_paired(low, high, n)?;

        Ok((comparison(points_low, points_high), COMPARISON_FILE.to_owned()))
    } else {
        let results = generator::start(params.x0, params.y0, params.forcing, dt)?;
        let points = sampler::collect(results, n)?;

        Ok((single(params.forcing, points), single_file_name(params.forcing)))
    }
}

/// Draw `fig` and write it to `dir/name` as PNG.
///
/// The image goes to a `.part` file first and is renamed into place, so a
/// failure leaves no file under the final name.
pub fn save(fig: &Figure, width: u32, height: u32, dir: &Path, name: &str) -> Result<PathBuf> {
    let img = fig.draw(width, height)?;
    for s in fig.series() {
        info!(label = %s.label, points = s.points.len(), "series");
    }
    write_png(&img, &dir.join(name))
}

fn write_png(img: &RgbImage, path: &Path) -> Result<PathBuf> {
    let mut part = path.as_os_str().to_owned();
    part.push(".part");
    let part = PathBuf::from(part);

    if let Err(source) = img.save_with_format(&part, ImageFormat::Png) {
        let _ = fs::remove_file(&part);
        return Err(Error::Encode { path: path.to_owned(), source });
    }
    fs::rename(&part, path).map_err(|source| {
        let _ = fs::remove_file(&part);
        Error::Io { path: path.to_owned(), source }
    })?;

    info!(path = %path.display(), "saved");
    Ok(path.to_owned())
}
