use std::mem::swap;
use nalgebra::Vector2;
use num::ToPrimitive;

type N = f32;

/// Antialiased line drawing (Xiaolin Wu).
///
/// `draw` receives a pixel coordinate and a coverage in `0 ..= 1`.
pub struct Pen<F> {
    draw:   F,
    p:      Vector2<N>,
    size:   Option<(isize, isize)>
}

#[inline(always)]
fn ipart(x: N) -> N {
    x.floor()
}

#[inline(always)]
fn fpart(x: N) -> N {
    x - x.floor()
}

#[inline(always)]
fn rfpart(x: N) -> N {
    1.0 - fpart(x)
}

impl<F> Pen<F> where F: FnMut(isize, isize, N)
{
    pub fn new(draw: F) -> Pen<F> {
        Pen {
            draw:   draw,
            p:      Vector2::zeros(),
            size:   None
        }
    }

    /// Like `new`, but spans outside `width` x `height` are not walked.
    /// Endpoints may still land outside; `draw` has to clip those.
    pub fn clipped(draw: F, width: usize, height: usize) -> Pen<F> {
        Pen {
            size: Some((width as isize, height as isize)),
            .. Pen::new(draw)
        }
    }
    pub fn line(&mut self, p0: Vector2<N>, p1: Vector2<N>) {
        self.move_to(p0);
        self.line_to(p1);
    }
    #[inline]
    pub fn move_to(&mut self, p: Vector2<N>) {
        self.p = p;
    }

    /// Draw from the current position to `p`.
    ///
    /// Segments shorter than a tenth of a pixel are skipped and the pen
    /// stays where it was, so very dense trajectories still leave a trace.
    /// Segments with an end that does not fit a pixel index are dropped.
    pub fn line_to(&mut self, p: Vector2<N>) {
        let (mut x0, mut y0) = (self.p.x, self.p.y);
        let (mut x1, mut y1) = (p.x, p.y);
        let half = 0.5;
        let threshold = 0.1;

        if (x1 - x0).abs().max((y1 - y0).abs()) < threshold {
            return;
        }
        self.p = p;

        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            swap(&mut x0, &mut y0);
            swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            swap(&mut x0, &mut x1);
            swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let dy = y1 - y0;
        let gradient = if dx > 0. { dy / dx } else { 1.0 };

        let xend0 = x0.round();
        let yend0 = y0 + gradient * (xend0 - x0);
        let xend1 = x1.round();
        let yend1 = y1 + gradient * (xend1 - x1);

        let (xpxl1, ypxl1, xpxl2, ypxl2) = match (
            xend0.to_isize(), ipart(yend0).to_isize(),
            xend1.to_isize(), ipart(yend1).to_isize()
        ) {
            (Some(a), Some(b), Some(c), Some(d)) => (a, b, c, d),
            _ => return
        };

        let (mut lo, mut hi) = (xpxl1.saturating_add(1), xpxl2);
        if let Some((w, h)) = self.size {
            let major = if steep { h } else { w };
            lo = lo.max(0);
            hi = hi.min(major);
        }

        let draw = &mut self.draw;
        let mut plot = |x: isize, y: isize, v: N| {
            if steep {
                draw(y, x, v);
            } else {
                draw(x, y, v);
            }
        };

        // first endpoint
        let xgap = rfpart(x0 + half);
        plot(xpxl1, ypxl1,                  xgap * rfpart(yend0));
        plot(xpxl1, ypxl1.saturating_add(1), xgap * fpart(yend0));

        // second endpoint
        let xgap = fpart(x1 + half);
        plot(xpxl2, ypxl2,                  xgap * rfpart(yend1));
        plot(xpxl2, ypxl2.saturating_add(1), xgap * fpart(yend1));

        // in float space: endpoints may sit at the edge of isize
        let mut intery = yend0 + gradient * (lo as N - xend0);
        for x in lo .. hi {
            let py = ipart(intery) as isize;
            let a = fpart(intery);
            plot(x, py,     1.0 - a);
            plot(x, py.saturating_add(1), a);
            intery += gradient;
        }
    }
}
