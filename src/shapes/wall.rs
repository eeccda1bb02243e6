use super::{DegenerateShape, Distance, Shape};
use crate::eval::error::Error;

/// An infinite plane `normal . x = offset`, confining particles to the side
/// the normal points into.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    normal: [f64; 3],
    offset: f64,
}

impl Wall {
    /// The normal is normalized here once, so `distance` is a plain dot
    /// product. A zero normal defines no plane and is rejected.
    pub fn new(normal: [f64; 3], offset: f64) -> Result<Self, Error> {
        let len = (normal[0] * normal[0] + normal[1] * normal[1] + normal[2] * normal[2]).sqrt();
        if !(len > 0.0) {
            return Err(Error::invalid_parameter(
                "wall",
                "normal",
                len,
                "normal vector must be nonzero",
            ));
        }
        Ok(Self {
            normal: [normal[0] / len, normal[1] / len, normal[2] / len],
            offset,
        })
    }

    #[inline]
    pub fn normal(&self) -> [f64; 3] {
        self.normal
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }
}

impl Shape for Wall {
    fn distance(&self, ppos: [f64; 3]) -> Result<Distance, DegenerateShape> {
        let dist = self.normal[0] * ppos[0] + self.normal[1] * ppos[1] + self.normal[2] * ppos[2]
            - self.offset;
        Ok(Distance {
            dist,
            vec: [
                self.normal[0] * dist,
                self.normal[1] * dist,
                self.normal[2] * dist,
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn rejects_zero_normal() {
        assert!(Wall::new([0.0; 3], 1.0).is_err());
    }

    #[test]
    fn normal_is_normalized_at_construction() {
        let wall = Wall::new([0.0, 0.0, 3.0], 1.0).unwrap();
        assert_eq!(wall.normal(), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn signed_distance_on_both_sides() {
        let wall = Wall::new([0.0, 0.0, 1.0], 1.0).unwrap();

        let above = wall.distance([5.0, -2.0, 3.0]).unwrap();
        assert!(approx_eq(above.dist, 2.0, 1e-12));
        assert_eq!(above.vec, [0.0, 0.0, 2.0]);

        let below = wall.distance([0.0, 0.0, 0.5]).unwrap();
        assert!(approx_eq(below.dist, -0.5, 1e-12));
        // Still the boundary-to-particle vector: it points down to the
        // particle that slipped through.
        assert!(approx_eq(below.vec[2], -0.5, 1e-12));
    }

    #[test]
    fn vector_is_parallel_to_the_normal_scaled_by_distance() {
        let wall = Wall::new([1.0, 1.0, 0.0], 0.0).unwrap();
        let d = wall.distance([1.0, 1.0, 0.0]).unwrap();

        let len = (d.vec[0] * d.vec[0] + d.vec[1] * d.vec[1] + d.vec[2] * d.vec[2]).sqrt();
        assert!(approx_eq(len, d.dist.abs(), 1e-12));
        assert!(approx_eq(d.vec[0], d.vec[1], 1e-12));
    }
}
