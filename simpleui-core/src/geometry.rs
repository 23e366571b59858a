//! Screen geometry
//!
//! Integer pixel coordinates with y growing downward. Angles are degrees
//! counter-clockwise from the positive x axis, so 90 points up the screen.

use core::ops::{Add, AddAssign, Sub, SubAssign};

use libm::{cosf, roundf, sinf};

const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;

/// 2D integer point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift both coordinates by the same amount
    pub const fn offset(self, d: i32) -> Self {
        Self {
            x: self.x + d,
            y: self.y + d,
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

/// Axis-aligned rectangle
///
/// `contains` is inclusive on every edge, so a box of width `w` accepts
/// `w + 1` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bounds {
    pub origin: Point,
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub const fn new(origin: Point, width: u32, height: u32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.origin.x
            && p.x <= self.origin.x + self.width as i32
            && p.y >= self.origin.y
            && p.y <= self.origin.y + self.height as i32
    }

    pub fn center(&self) -> Point {
        center_of(self.origin, self.width, self.height)
    }
}

/// Named screen directions, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Right = 0,
    Up = 90,
    Left = 180,
    Down = 270,
}

impl Direction {
    pub const fn degrees(self) -> i32 {
        self as i32
    }
}

/// Where a scaled widget sits relative to its nominal box
///
/// When a widget is drawn smaller (or larger) than its nominal size the
/// anchor picks which edge or corner stays fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Constraint {
    TopLeft,
    Top,
    TopRight,
    Left,
    #[default]
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Constraint {
    /// Offset from the nominal top-left corner to the draw point
    pub fn offset(self, width: u32, height: u32, scaled_width: u32, scaled_height: u32) -> Point {
        let dw = width as i32 - scaled_width as i32;
        let dh = height as i32 - scaled_height as i32;
        let (hw, hh) = ((dw as f32 * 0.5) as i32, (dh as f32 * 0.5) as i32);
        match self {
            Constraint::TopLeft => Point::new(0, 0),
            Constraint::Top => Point::new(hw, 0),
            Constraint::TopRight => Point::new(dw, 0),
            Constraint::Left => Point::new(0, hh),
            Constraint::Center => Point::new(hw, hh),
            Constraint::Right => Point::new(dw, hh),
            Constraint::BottomLeft => Point::new(0, dh),
            Constraint::Bottom => Point::new(hw, dh),
            Constraint::BottomRight => Point::new(dw, dh),
        }
    }
}

/// Point at `radius` pixels along `degrees`
///
/// Components are truncated toward zero.
pub fn polar_to_cartesian(radius: f32, degrees: f32) -> Point {
    let rad = -degrees * DEG_TO_RAD;
    Point::new((radius * cosf(rad)) as i32, (radius * sinf(rad)) as i32)
}

/// Centre of a box given its top-left corner, rounded to the nearest pixel
pub fn center_of(pos: Point, width: u32, height: u32) -> Point {
    Point::new(
        roundf(pos.x as f32 + width as f32 * 0.5) as i32,
        roundf(pos.y as f32 + height as f32 * 0.5) as i32,
    )
}

/// Top-left corner of a box given its centre, truncated
pub fn corner_from_center(center: Point, width: u32, height: u32) -> Point {
    Point::new(
        (center.x as f32 - width as f32 * 0.5) as i32,
        (center.y as f32 - height as f32 * 0.5) as i32,
    )
}
