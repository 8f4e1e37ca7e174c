#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in client (viewport) or grid-local space, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Replace negative, NaN and infinite dimensions with zero.
    ///
    /// Browsers report zero-sized or unlaid-out elements in a handful of ways;
    /// every one of them should behave like an empty viewport.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self { width: non_negative(self.width), height: non_negative(self.height) }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// An axis-aligned rectangle, e.g. the grid element's bounding client rect.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// A rectangle at the origin covering `size`.
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        Self { x: 0.0, y: 0.0, width: size.width, height: size.height }
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Translate a client-space point into this rectangle's local space.
    #[must_use]
    pub fn to_local(&self, client: Point) -> Point {
        Point::new(client.x - self.x, client.y - self.y)
    }

    /// Whether a local-space point lies within `[0, width] × [0, height]`.
    ///
    /// Edges are inclusive so a pointer resting on the last pixel still maps
    /// to the last cell.
    #[must_use]
    pub fn contains_local(&self, local: Point) -> bool {
        local.x >= 0.0 && local.y >= 0.0 && local.x <= self.width && local.y <= self.height
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}
