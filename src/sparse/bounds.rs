//! Bounding rectangle of the live cells on the unbounded plane.

/// Smallest axis-aligned rectangle containing every live cell, inclusive on
/// all four sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl Bounds {
    /// The degenerate rectangle covering one cell.
    pub fn point(x: i64, y: i64) -> Self {
        Self {
            min_x: x,
            max_x: x,
            min_y: y,
            max_y: y,
        }
    }

    /// Grow to cover `(x, y)`.
    pub fn include(&mut self, x: i64, y: i64) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    /// Bounds of a coordinate stream, `None` when it is empty.
    pub fn of<I: IntoIterator<Item = (i64, i64)>>(coords: I) -> Option<Self> {
        let mut coords = coords.into_iter();
        let (x, y) = coords.next()?;
        let mut bounds = Self::point(x, y);
        for (x, y) in coords {
            bounds.include(x, y);
        }
        Some(bounds)
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }

    /// Columns spanned. Saturates for a rectangle spanning all of `i64`.
    pub fn width(&self) -> u64 {
        self.max_x.abs_diff(self.min_x).saturating_add(1)
    }

    /// Rows spanned. Saturates for a rectangle spanning all of `i64`.
    pub fn height(&self) -> u64 {
        self.max_y.abs_diff(self.min_y).saturating_add(1)
    }
}
