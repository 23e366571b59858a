//! Directional focus search
//!
//! Both searches walk sample points outward from an origin and return the
//! first focusable candidate whose bounds contain a sample. Order of the
//! scan is the only tie-break: there is no distance comparison between
//! candidates, so a given layout always resolves the same way.

use crate::geometry::{polar_to_cartesian, Point};
use crate::id::WidgetId;
use crate::widget::WidgetBase;

use super::{Algorithm, FocusSettings, Quality};

/// Total opening of a cone search in degrees
pub const CONE_APERTURE: i32 = 90;

/// One-dimensional search along `direction`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ray {
    /// Exclusive upper bound of the sampled distance
    pub length: u32,
    /// Pixels between samples
    pub step: u32,
    /// Degrees, counter-clockwise from the positive x axis
    pub direction: i32,
}

impl Ray {
    pub fn new(direction: i32, settings: &FocusSettings) -> Self {
        let step = match settings.accuracy {
            Quality::Low => 4,
            Quality::Medium => 2,
            Quality::High => 1,
        };
        Self {
            length: settings.max_distance,
            step,
            direction,
        }
    }
}

/// Fan of rays centred on `bisector`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cone {
    pub bisector: i32,
    /// Exclusive upper bound of the sampled distance
    pub radius: u32,
    /// Total opening in degrees
    pub aperture: i32,
    /// Degrees between rays
    pub aperture_step: i32,
    /// Pixels between samples on each ray
    pub rad_step: u32,
}

impl Cone {
    pub fn new(bisector: i32, settings: &FocusSettings) -> Self {
        let (aperture_step, rad_step) = match settings.accuracy {
            Quality::Low => (3, 8),
            Quality::Medium => (2, 6),
            Quality::High => (1, 2),
        };
        Self {
            bisector,
            radius: settings.max_distance,
            aperture: CONE_APERTURE,
            aperture_step,
            rad_step,
        }
    }
}

fn hit<'w, I>(point: Point, exclude: Option<WidgetId>, candidates: &I) -> Option<WidgetId>
where
    I: Iterator<Item = (WidgetId, &'w WidgetBase)> + Clone,
{
    candidates
        .clone()
        .find(|(id, base)| Some(*id) != exclude && base.focusable && base.bounds().contains(point))
        .map(|(id, _)| id)
}

/// Sample along a ray, nearest first
///
/// `exclude` is skipped wherever it appears among the candidates.
pub fn find_in_ray<'w, I>(
    origin: Point,
    ray: &Ray,
    exclude: Option<WidgetId>,
    candidates: I,
) -> Option<WidgetId>
where
    I: Iterator<Item = (WidgetId, &'w WidgetBase)> + Clone,
{
    let step = ray.step.max(1);
    let mut distance = 0;
    while distance < ray.length {
        let point = origin + polar_to_cartesian(distance as f32, ray.direction as f32);
        if let Some(id) = hit(point, exclude, &candidates) {
            return Some(id);
        }
        distance += step;
    }
    None
}

/// Sample a fan, one ray at a time from `bisector - aperture / 2`
pub fn find_in_cone<'w, I>(
    origin: Point,
    cone: &Cone,
    exclude: Option<WidgetId>,
    candidates: I,
) -> Option<WidgetId>
where
    I: Iterator<Item = (WidgetId, &'w WidgetBase)> + Clone,
{
    let angle_step = cone.aperture_step.max(1);
    let rad_step = cone.rad_step.max(1);
    let half = cone.aperture / 2;

    let mut angle = cone.bisector - half;
    while angle < cone.bisector + half {
        let mut radius = 0;
        while radius < cone.radius {
            let point = origin + polar_to_cartesian(radius as f32, angle as f32);
            if let Some(id) = hit(point, exclude, &candidates) {
                return Some(id);
            }
            radius += rad_step;
        }
        angle += angle_step;
    }
    None
}

/// Run whichever search `settings` selects
pub fn resolve<'w, I>(
    origin: Point,
    direction: i32,
    settings: &FocusSettings,
    exclude: Option<WidgetId>,
    candidates: I,
) -> Option<WidgetId>
where
    I: Iterator<Item = (WidgetId, &'w WidgetBase)> + Clone,
{
    match settings.algorithm {
        Algorithm::Linear => find_in_ray(origin, &Ray::new(direction, settings), exclude, candidates),
        Algorithm::Cone => find_in_cone(origin, &Cone::new(direction, settings), exclude, candidates),
    }
}
