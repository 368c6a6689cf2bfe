use crate::math::Vec2;

/// Bounded record of the positions a body has passed through, one per tick.
///
/// Recording stops once the capacity is reached; [`clear`][Self::clear] starts over.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trail {
    points: Vec<Vec2>,
    capacity: usize,
}

impl Trail {
    pub fn with_capacity(capacity: usize) -> Self {
        Trail {
            points: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a point, returning false if the trail was already full.
    pub fn push(&mut self, point: Vec2) -> bool {
        if self.is_full() {
            return false;
        }
        self.points.push(point);
        true
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.points.len() >= self.capacity
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_recording_at_capacity() {
        let mut trail = Trail::with_capacity(2);
        assert!(trail.push(Vec2::new(1.0, 1.0)));
        assert!(trail.push(Vec2::new(2.0, 2.0)));
        assert!(!trail.push(Vec2::new(3.0, 3.0)));
        assert_eq!(trail.points(), &[Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)]);

        trail.clear();
        assert!(trail.points().is_empty());
        assert!(trail.push(Vec2::new(3.0, 3.0)));
    }
}
