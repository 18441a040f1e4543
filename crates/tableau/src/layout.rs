//! Layout positioning algorithms
//!
//! Reusable placement logic shared by the diagram builders: stacking boxes
//! along an axis, spreading angles around a circle, scattering points over a
//! region, and sizing concentric shells.

use rand::Rng;
use serde::Deserialize;

use tableau_core::geometry::{Bounds, Point};

use crate::{
    config::LayoutConfig,
    error::{DiagramError, Result},
};

/// Axis along which [`stack_positions`] lines elements up.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackAxis {
    /// Top to bottom.
    #[default]
    Vertical,
    /// Left to right.
    Horizontal,
}

/// Centers of `count` elements spaced `pitch` apart along `axis`, centered
/// on the origin.
///
/// Vertical stacks grow downward so the first element is on top; horizontal
/// stacks grow to the right.
///
/// # Examples
///
/// ```
/// # use tableau::layout::{StackAxis, stack_positions};
/// let centers = stack_positions(3, 1.3, StackAxis::Vertical);
/// assert_eq!(centers.len(), 3);
/// assert!(centers[0].y() > centers[2].y());
/// assert_eq!(centers[1].y(), 0.0);
/// ```
pub fn stack_positions(count: usize, pitch: f32, axis: StackAxis) -> Vec<Point> {
    let first = -(count.saturating_sub(1) as f32) * pitch / 2.0;
    (0..count)
        .map(|i| {
            let offset = first + i as f32 * pitch;
            match axis {
                StackAxis::Vertical => Point::new(0.0, -offset),
                StackAxis::Horizontal => Point::new(offset, 0.0),
            }
        })
        .collect()
}

/// `count` angles, in degrees, evenly spaced around a full turn starting at
/// `start`.
pub fn evenly_spaced_angles(count: usize, start: f32) -> Vec<f32> {
    if count == 0 {
        return Vec::new();
    }
    let step = 360.0 / count as f32;
    (0..count).map(|i| start + i as f32 * step).collect()
}

/// `count` points drawn uniformly from `region`.
///
/// The caller's RNG makes the result reproducible when seeded.
pub fn scatter_points<R>(rng: &mut R, count: usize, region: Bounds) -> Vec<Point>
where
    R: Rng + ?Sized,
{
    (0..count)
        .map(|_| {
            Point::new(
                sample_between(rng, region.min_x(), region.max_x()),
                sample_between(rng, region.min_y(), region.max_y()),
            )
        })
        .collect()
}

/// Uniform sample in `[low, high)`, or `low` for an empty interval.
pub(crate) fn sample_between<R>(rng: &mut R, low: f32, high: f32) -> f32
where
    R: Rng + ?Sized,
{
    if high > low {
        rng.random_range(low..high)
    } else {
        low
    }
}

/// Radius of electron shell `k` (zero-based) around a nucleus.
pub fn shell_radius(k: usize, config: &LayoutConfig) -> f32 {
    config.nucleus_radius() + (k + 1) as f32 * config.shell_spacing()
}

/// Upper bound on the number of ticks along one axis.
pub const MAX_TICKS: usize = 1_000;

/// A numeric axis range with a tick step.
///
/// Deserializes from `[min, max, step]` or `{ min = .., max = .., step = .. }`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AxisRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl AxisRange {
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    /// Checks that the range is non-empty with a positive step.
    ///
    /// # Errors
    ///
    /// - [`DiagramError::DegenerateRange`] for an empty range or a
    ///   non-positive step.
    /// - [`DiagramError::InvalidParameter`] when the step yields more than
    ///   [`MAX_TICKS`] ticks.
    pub fn validate(&self, context: &str) -> Result<()> {
        let finite = self.min.is_finite() && self.max.is_finite() && self.step.is_finite();
        if !(finite && self.max > self.min && self.step > 0.0) {
            return Err(DiagramError::degenerate_range(format!(
                "{context} [{}, {}] step {}",
                self.min, self.max, self.step
            )));
        }
        let ticks = self.span() / self.step;
        if !ticks.is_finite() || ticks > MAX_TICKS as f32 {
            return Err(DiagramError::invalid_parameter(
                format!("{context}.step"),
                format!("more than {MAX_TICKS} ticks"),
            ));
        }
        Ok(())
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// `value` clamped into the range.
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Tick values: every multiple of `step` inside the range.
    pub fn ticks(&self) -> Vec<f32> {
        if self.validate("ticks").is_err() {
            return Vec::new();
        }
        let first = (self.min / self.step - 1e-4).ceil() as i64;
        let last = (self.max / self.step + 1e-4).floor() as i64;
        (first..=last).map(|i| i as f32 * self.step).collect()
    }

    /// Linear map of this range onto `[-length / 2, length / 2]`.
    pub fn to_centered(&self, value: f32, length: f32) -> f32 {
        (value - self.min) / self.span() * length - length / 2.0
    }
}
