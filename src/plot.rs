use std::ops::Range;
use image::{Rgb, RgbImage};
use nalgebra::Vector2;
use palette::{LinSrgb, Mix, Srgb};

use crate::duffing::Point;
use crate::error::{Error, Result};
use crate::pen::Pen;

pub const RED:   Srgb<u8> = Srgb::new(255, 0, 0);
pub const BLUE:  Srgb<u8> = Srgb::new(0, 0, 255);
pub const BLACK: Srgb<u8> = Srgb::new(0, 0, 0);
const AXIS:      Srgb<u8> = Srgb::new(180, 180, 180);

/// fraction of the data span added on each side by `Figure::fitting`
const PADDING: f64 = 0.05;

/// side length of the legend swatches in pixels
const SWATCH: u32 = 10;

pub struct Series {
    pub label:  String,
    pub color:  Srgb<u8>,
    pub points: Vec<Point>
}
impl Series {
    pub fn new<S: Into<String>>(label: S, color: Srgb<u8>, points: Vec<Point>) -> Series {
        Series {
            label:  label.into(),
            color,
            points
        }
    }
}

/// A phase-plane plot: one or more trajectories drawn as lines.
pub struct Figure {
    offset: Vector2<f64>,
    size:   Vector2<f64>,
    series: Vec<Series>
}

impl Figure {
    pub fn new(x: Range<f64>, y: Range<f64>, series: Vec<Series>) -> Figure {
        Figure {
            offset: Vector2::new(x.start, y.start),
            size:   Vector2::new(x.end - x.start, y.end - y.start),
            series
        }
    }

    /// A figure whose bounds enclose every finite point of `series`.
    pub fn fitting(series: Vec<Series>) -> Figure {
        let finite = series.iter()
            .flat_map(|s| s.points.iter())
            .filter(|p| !p.blow_up);

        let mut lo = Vector2::repeat(f64::INFINITY);
        let mut hi = Vector2::repeat(f64::NEG_INFINITY);
        for p in finite {
            lo = lo.inf(&Vector2::new(p.x, p.y));
            hi = hi.sup(&Vector2::new(p.x, p.y));
        }

        Figure::new(padded(lo.x, hi.x), padded(lo.y, hi.y), series)
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn x_range(&self) -> Range<f64> {
        self.offset.x .. self.offset.x + self.size.x
    }

    pub fn y_range(&self) -> Range<f64> {
        self.offset.y .. self.offset.y + self.size.y
    }

    /** do the actual plotting on an image of the given size **/
    pub fn draw(&self, width: u32, height: u32) -> Result<RgbImage> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyCanvas { width, height });
        }
        let mut img = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));
        let scale = Vector2::new(width as f64, height as f64).component_div(&self.size);

        // domain space to pixels, y pointing up
        let to_canvas = |x: f64, y: f64| -> Vector2<f32> {
            Vector2::new(
                ((x - self.offset.x) * scale.x) as f32,
                (height as f64 - (y - self.offset.y) * scale.y) as f32
            )
        };

        let origin = to_canvas(0.0, 0.0);
        stroke(&mut img, AXIS,
            Vector2::new(0.0, origin.y), Vector2::new(width as f32, origin.y));
        stroke(&mut img, AXIS,
            Vector2::new(origin.x, 0.0), Vector2::new(origin.x, height as f32));

        for s in self.series.iter() {
            let color = linear(s.color);
            let mut pen = Pen::clipped(|x, y, v| blend(&mut img, x, y, color, v), width as usize, height as usize);

            let mut points = s.points.iter().filter(|p| !p.blow_up);
            if let Some(start) = points.next() {
                pen.move_to(to_canvas(start.x, start.y));
                for p in points {
                    pen.line_to(to_canvas(p.x, p.y));
                }
            }
        }

        for (i, s) in self.series.iter().enumerate() {
            let top = 4 + i as u32 * (SWATCH + 4);
            for y in top .. (top + SWATCH).min(height) {
                for x in 4 .. (4 + SWATCH).min(width) {
                    img.put_pixel(x, y, Rgb([s.color.red, s.color.green, s.color.blue]));
                }
            }
        }

        Ok(img)
    }
}

fn padded(lo: f64, hi: f64) -> Range<f64> {
    if !(lo.is_finite() && hi.is_finite()) {
        return -1.0 .. 1.0;
    }
    let span = hi - lo;
    if span < f64::EPSILON {
        return lo - 0.5 .. hi + 0.5;
    }
    lo - PADDING * span .. hi + PADDING * span
}

fn linear(c: Srgb<u8>) -> LinSrgb {
    c.into_format::<f32>().into_linear()
}

fn blend(img: &mut RgbImage, x: isize, y: isize, color: LinSrgb, coverage: f32) {
    if x < 0 || y < 0 || x >= img.width() as isize || y >= img.height() as isize {
        return;
    }
    let px = img.get_pixel_mut(x as u32, y as u32);
    let [r, g, b] = px.0;
    let under = linear(Srgb::new(r, g, b));
    let mixed: Srgb<u8> = Srgb::<f32>::from_linear(under.mix(color, coverage.clamp(0.0, 1.0)))
        .into_format();
    px.0 = [mixed.red, mixed.green, mixed.blue];
}

fn stroke(img: &mut RgbImage, color: Srgb<u8>, from: Vector2<f32>, to: Vector2<f32>) {
    let (width, height) = (img.width() as usize, img.height() as usize);
    let color = linear(color);
    Pen::clipped(|x, y, v| blend(img, x, y, color, v), width, height).line(from, to);
}
