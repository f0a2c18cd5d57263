//! Sorted intersection bookkeeping and hit selection.

use crate::shape::ShapeId;

#[derive(Clone, Copy, Debug, PartialEq)]
/// Signed distance along a ray at which it meets a shape.
pub struct Intersection {
    /// Distance along the ray, negative when behind its origin.
    pub t: f64,
    /// Handle of the shape in its owning [World](crate::world::World).
    pub shape: ShapeId,
}

impl Intersection {
    #[allow(missing_docs)]
    pub fn new(t: f64, shape: ShapeId) -> Self {
        Self { t, shape }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
/// Intersections kept in ascending `t` order.
///
/// Intersections sharing the same `t` stay in insertion order.
pub struct Intersections {
    inner: Vec<Intersection>,
}

impl Intersections {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the first position whose `t` is strictly greater than the new one.
    pub fn insert(&mut self, intersection: Intersection) {
        let home = self
            .inner
            .iter()
            .position(|x| x.t > intersection.t)
            .unwrap_or(self.inner.len());

        self.inner.insert(home, intersection);
    }

    /// Select the visible intersection: the smallest non-negative `t`, earliest inserted on ties.
    ///
    /// # Example
    /// ```
    /// use rayshade::{intersection::{Intersection, Intersections}, shape::ShapeId};
    ///
    /// let mut xs = Intersections::new();
    /// xs.insert(Intersection::new(2., ShapeId::from(0)));
    /// xs.insert(Intersection::new(-1., ShapeId::from(0)));
    /// xs.insert(Intersection::new(1., ShapeId::from(1)));
    ///
    /// assert_eq!(xs.hit().map(|x| x.t), Some(1.));
    /// ```
    pub fn hit(&self) -> Option<&Intersection> {
        self.inner.iter().find(|x| x.t >= 0.)
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[allow(missing_docs)]
    pub fn iter(&self) -> std::slice::Iter<'_, Intersection> {
        self.inner.iter()
    }

    /// Distances in list order.
    pub fn ts(&self) -> Vec<f64> {
        self.inner.iter().map(|x| x.t).collect()
    }
}

impl std::ops::Index<usize> for Intersections {
    type Output = Intersection;

    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[index]
    }
}

impl Extend<Intersection> for Intersections {
    fn extend<T: IntoIterator<Item = Intersection>>(&mut self, iter: T) {
        iter.into_iter().for_each(|x| self.insert(x));
    }
}

impl FromIterator<Intersection> for Intersections {
    fn from_iter<T: IntoIterator<Item = Intersection>>(iter: T) -> Self {
        let mut res = Self::new();
        res.extend(iter);
        res
    }
}

impl<'a> IntoIterator for &'a Intersections {
    type Item = &'a Intersection;
    type IntoIter = std::slice::Iter<'a, Intersection>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
