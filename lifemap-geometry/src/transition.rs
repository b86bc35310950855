use serde::{Deserialize, Serialize};

use crate::zoom::ZoomTransform;

const RHO: f64 = std::f64::consts::SQRT_2;
const RHO2: f64 = 2.0;
const RHO4: f64 = 4.0;
const EPSILON2: f64 = 1e-12;

/// Cubic ease-in-out on `[0, 1]`
pub fn cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// Smooth pan-and-zoom path between two views, each given as `[cx, cy, width]`
/// (van Wijk and Nuij, "Smooth and efficient zooming and panning")
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomInterpolator {
    from: [f64; 3],
    to: [f64; 3],
    r0: f64,
    s: f64,
    d1: f64,
}

impl ZoomInterpolator {
    pub fn new(from: [f64; 3], to: [f64; 3]) -> Self {
        let [ux0, uy0, w0] = from;
        let [ux1, uy1, w1] = to;
        let dx = ux1 - ux0;
        let dy = uy1 - uy0;
        let d2 = dx * dx + dy * dy;

        if d2 < EPSILON2 {
            Self {
                from,
                to,
                r0: 0.0,
                s: (w1 / w0).ln() / RHO,
                d1: 0.0,
            }
        } else {
            let d1 = d2.sqrt();
            let b0 = (w1 * w1 - w0 * w0 + RHO4 * d2) / (2.0 * w0 * RHO2 * d1);
            let b1 = (w1 * w1 - w0 * w0 - RHO4 * d2) / (2.0 * w1 * RHO2 * d1);
            let r0 = ((b0 * b0 + 1.0).sqrt() - b0).ln();
            let r1 = ((b1 * b1 + 1.0).sqrt() - b1).ln();
            Self {
                from,
                to,
                r0,
                s: (r1 - r0) / RHO,
                d1,
            }
        }
    }

    /// Path length, proportional to the natural duration of the move
    pub fn path_length(&self) -> f64 {
        self.s.abs()
    }

    pub fn at(&self, t: f64) -> [f64; 3] {
        let [ux0, uy0, w0] = self.from;
        let dx = self.to[0] - ux0;
        let dy = self.to[1] - uy0;

        if self.d1 == 0.0 {
            return [ux0 + t * dx, uy0 + t * dy, w0 * (RHO * t * self.s).exp()];
        }

        let s = t * self.s;
        let cosh_r0 = self.r0.cosh();
        let u = w0 / (RHO2 * self.d1) * (cosh_r0 * (RHO * s + self.r0).tanh() - self.r0.sinh());
        [
            ux0 + u * dx,
            uy0 + u * dy,
            w0 * cosh_r0 / (RHO * s + self.r0).cosh(),
        ]
    }
}

/// Animated move between two zoom transforms over a fixed duration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransition {
    pub from: ZoomTransform,
    pub to: ZoomTransform,
    pub viewport: [f64; 2],
    pub duration_ms: f64,
}

impl ZoomTransition {
    pub fn new(from: ZoomTransform, to: ZoomTransform, viewport: [f64; 2], duration_ms: f64) -> Self {
        Self {
            from,
            to,
            viewport,
            duration_ms,
        }
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }

    /// Transform after `elapsed_ms` milliseconds
    pub fn at(&self, elapsed_ms: f64) -> ZoomTransform {
        if self.duration_ms <= 0.0 || self.is_finished(elapsed_ms) {
            return self.to;
        }
        self.at_progress(cubic_in_out(elapsed_ms / self.duration_ms))
    }

    /// Transform at eased progress `t` in `[0, 1]`
    pub fn at_progress(&self, t: f64) -> ZoomTransform {
        if t <= 0.0 {
            return self.from;
        }
        if t >= 1.0 {
            return self.to;
        }

        let [width, height] = self.viewport;
        let p = [width / 2.0, height / 2.0];
        let w = f64::max(width, height);

        let p0 = self.from.invert(p);
        let p1 = self.to.invert(p);
        let interpolator = ZoomInterpolator::new(
            [p0[0], p0[1], w / self.from.k],
            [p1[0], p1[1], w / self.to.k],
        );

        let [cx, cy, view_width] = interpolator.at(t);
        let k = w / view_width;
        ZoomTransform::new(k, p[0] - cx * k, p[1] - cy * k)
    }

    /// Evenly spaced frames from start to end inclusive
    pub fn frames(&self, fps: f64) -> Vec<ZoomTransform> {
        let count = ((self.duration_ms / 1000.0) * fps).ceil().max(1.0) as usize;
        (0..=count)
            .map(|i| self.at(self.duration_ms * i as f64 / count as f64))
            .collect()
    }
}
