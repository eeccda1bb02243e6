use super::{DegenerateShape, Distance, Shape};
use crate::eval::error::Error;
use crate::model::types::Orientation;

/// A spherical boundary: a cavity (`Orientation::Inside`) confining its
/// particles, or an obstacle (`Orientation::Outside`) excluding them.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: [f64; 3],
    radius: f64,
    orientation: Orientation,
}

impl Sphere {
    pub fn new(center: [f64; 3], radius: f64, orientation: Orientation) -> Result<Self, Error> {
        if !(radius > 0.0) {
            return Err(Error::invalid_parameter(
                "sphere",
                "radius",
                radius,
                "radius must be positive",
            ));
        }
        Ok(Self {
            center,
            radius,
            orientation,
        })
    }

    #[inline]
    pub fn center(&self) -> [f64; 3] {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl Shape for Sphere {
    fn distance(&self, ppos: [f64; 3]) -> Result<Distance, DegenerateShape> {
        let mut vec = [
            self.center[0] - ppos[0],
            self.center[1] - ppos[1],
            self.center[2] - ppos[2],
        ];
        let c_dist = (vec[0] * vec[0] + vec[1] * vec[1] + vec[2] * vec[2]).sqrt();
        if c_dist == 0.0 {
            return Err(DegenerateShape);
        }

        // Either way `vec` ends up running from the nearest boundary point to
        // the particle; the orientation decides only which side counts as
        // positive distance.
        let (dist, fac) = match self.orientation {
            Orientation::Inside => {
                let dist = self.radius - c_dist;
                (dist, dist / c_dist)
            }
            Orientation::Outside => {
                let dist = c_dist - self.radius;
                (dist, -dist / c_dist)
            }
        };
        for v in &mut vec {
            *v *= fac;
        }

        Ok(Distance { dist, vec })
    }
}
