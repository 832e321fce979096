use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::geometry::Polygon;
use crate::math::hull_2d::convex_hull;
use crate::math::{Point2, Vector2};

/// Shape used to approximate the robot when inflating obstacles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Footprint {
    /// Diamond with its four tips at distance `r` along the axes.
    #[default]
    Rhombus,
    /// Regular polygon with `segments` sides circumscribing the radius-`r` disk.
    Circular { segments: u32 },
}

impl Footprint {
    /// Offsets from a vertex to the footprint corners for radius `r`.
    fn offsets(self, r: f64) -> Result<Vec<Vector2>> {
        match self {
            Self::Rhombus => Ok(vec![
                Vector2::new(0.0, r),
                Vector2::new(0.0, -r),
                Vector2::new(r, 0.0),
                Vector2::new(-r, 0.0),
            ]),
            Self::Circular { segments } => {
                if segments < 3 {
                    return Err(GeometryError::ParameterOutOfRange {
                        parameter: "segments",
                        value: f64::from(segments),
                        min: 3.0,
                        max: f64::from(u32::MAX),
                    }
                    .into());
                }
                let n = f64::from(segments);
                // Circumradius so that the polygon's edges stay outside the disk.
                let reach = r / (PI / n).cos();
                Ok((0..segments)
                    .map(|k| {
                        let angle = 2.0 * PI * f64::from(k) / n;
                        Vector2::new(reach * angle.cos(), reach * angle.sin())
                    })
                    .collect())
            }
        }
    }
}

/// Inflates an obstacle into its configuration-space counterpart.
///
/// The obstacle is first reduced to its convex hull; every hull vertex is
/// then replaced by the corners of the robot footprint placed on it, and the
/// hull of the resulting cloud is the inflated obstacle. Concave obstacles
/// are therefore over-approximated by their hull.
#[derive(Debug)]
pub struct InflatePolygon<'a> {
    obstacle: &'a Polygon,
    radius: f64,
    footprint: Footprint,
}

impl<'a> InflatePolygon<'a> {
    /// Creates a new inflation with the default rhombus footprint.
    #[must_use]
    pub fn new(obstacle: &'a Polygon, radius: f64) -> Self {
        Self {
            obstacle,
            radius,
            footprint: Footprint::default(),
        }
    }

    /// Selects the robot footprint.
    #[must_use]
    pub fn with_footprint(mut self, footprint: Footprint) -> Self {
        self.footprint = footprint;
        self
    }

    /// Executes the inflation.
    ///
    /// The result is convex, counter-clockwise and contains the obstacle;
    /// for `radius > 0` the containment is strict.
    ///
    /// # Errors
    ///
    /// - `GeometryError::ParameterOutOfRange` if `radius` is negative or not
    ///   finite, or a circular footprint has fewer than 3 segments
    /// - `GeometryError::Degenerate` if the obstacle hull collapses
    pub fn execute(&self) -> Result<Polygon> {
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "radius",
                value: self.radius,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }

        let offsets = self.footprint.offsets(self.radius)?;

        let hull = convex_hull(self.obstacle.vertices());
        if hull.len() < 3 {
            return Err(GeometryError::Degenerate(format!(
                "obstacle hull has {} vertices",
                hull.len()
            ))
            .into());
        }

        let cloud: Vec<Point2> = hull
            .iter()
            .flat_map(|v| offsets.iter().map(move |o| *v + *o))
            .collect();

        Polygon::new(convex_hull(&cloud))
    }
}
