use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::error::{Error, Result};
use crate::geometry::Position;

/// Arc approximation tolerance in pixels
const CIRCULAR_ARC_TOLERANCE: f64 = 0.1;

/// Upper bound on the segments of a flattened arc
const MAX_ARC_POINTS: usize = 1000;

/// Cross products below this treat three control points as collinear
const COLLINEAR_EPSILON: f64 = 1e-3;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, IntoStaticStr,
)]
pub enum PathType {
    #[default]
    Linear,
    PerfectCurve,
}

/// Path as written in a beatmap, relative to the slider head
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathDefinition {
    #[serde(default)]
    pub kind: PathType,
    pub control_points: Vec<Position>,
    /// Length the path is truncated or extended to
    #[serde(default)]
    pub expected_distance: Option<f64>,
}

impl PathDefinition {
    pub fn linear(control_points: Vec<Position>, expected_distance: Option<f64>) -> Self {
        Self {
            kind: PathType::Linear,
            control_points,
            expected_distance,
        }
    }
}

/// Flattened slider path with cumulative segment lengths
#[derive(Debug, Clone, PartialEq)]
pub struct SliderPath {
    points: Vec<Position>,
    cumulative_length: Vec<f64>,
}

impl SliderPath {
    pub fn new(definition: &PathDefinition) -> Result<Self> {
        let control_points = &definition.control_points;
        if control_points.len() < 2 {
            return Err(Error::InvalidSlider(format!(
                "path needs at least 2 control points, got {}",
                control_points.len()
            )));
        }
        if control_points.iter().any(|p| !p.is_finite()) {
            return Err(Error::InvalidSlider(
                "path control point is not finite".to_string(),
            ));
        }
        if let Some(expected) = definition.expected_distance
            && !(expected.is_finite() && expected > 0.0)
        {
            return Err(Error::InvalidSlider(format!(
                "expected distance must be positive, got {}",
                expected
            )));
        }

        let points = match definition.kind {
            PathType::PerfectCurve if control_points.len() == 3 => circular_arc(
                control_points[0],
                control_points[1],
                control_points[2],
            )
            .unwrap_or_else(|| control_points.clone()),
            _ => control_points.clone(),
        };

        let path = Self::with_cumulative_length(points, definition.expected_distance);
        if path.distance() <= 0.0 {
            return Err(Error::InvalidSlider("path has zero length".to_string()));
        }
        Ok(path)
    }

    fn with_cumulative_length(mut points: Vec<Position>, expected: Option<f64>) -> Self {
        let mut length = 0.0;
        let mut cumulative_length = vec![0.0];

        let mut i = 0;
        while i + 1 < points.len() {
            let diff = points[i + 1] - points[i];
            let d = diff.length();

            if let Some(expected) = expected
                && expected - length < d
            {
                points[i + 1] = points[i] + diff * ((expected - length) / d);
                points.truncate(i + 2);
                length = expected;
                cumulative_length.push(length);
                break;
            }

            length += d;
            cumulative_length.push(length);
            i += 1;
        }

        // Extend the last segment when the drawn path is shorter than expected
        if let Some(expected) = expected
            && expected > length
        {
            let n = points.len();
            let diff = points[n - 1] - points[n - 2];
            let d = diff.length();
            if d > 0.0 {
                let start = cumulative_length[n - 2];
                points[n - 1] = points[n - 2] + diff * ((expected - start) / d);
                cumulative_length[n - 1] = expected;
            }
        }

        Self {
            points,
            cumulative_length,
        }
    }

    /// Total path length in pixels
    pub fn distance(&self) -> f64 {
        self.cumulative_length.last().copied().unwrap_or(0.0)
    }

    pub fn points(&self) -> &[Position] {
        &self.points
    }

    /// Position at `progress` in `0..=1` along the path, relative to the head
    pub fn position_at(&self, progress: f64) -> Position {
        let d = progress.clamp(0.0, 1.0) * self.distance();
        let i = self.cumulative_length.partition_point(|&l| l < d);

        if i == 0 {
            return self.points[0];
        }
        if i >= self.points.len() {
            return self.points[self.points.len() - 1];
        }

        let d0 = self.cumulative_length[i - 1];
        let d1 = self.cumulative_length[i];
        if d1 - d0 <= f64::EPSILON {
            return self.points[i - 1];
        }

        self.points[i - 1].lerp(self.points[i], (d - d0) / (d1 - d0))
    }
}

/// Approximate the circular arc through `a`, `b` and `c` by line segments.
///
/// Returns `None` for (near-)collinear points.
fn circular_arc(a: Position, b: Position, c: Position) -> Option<Vec<Position>> {
    let ab = b - a;
    let ac = c - a;
    if (ab.y * ac.x - ab.x * ac.y).abs() <= COLLINEAR_EPSILON {
        return None;
    }

    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));

    let a_sq = a.x * a.x + a.y * a.y;
    let b_sq = b.x * b.x + b.y * b.y;
    let c_sq = c.x * c.x + c.y * c.y;
    let centre = Position::new(
        (a_sq * (b.y - c.y) + b_sq * (c.y - a.y) + c_sq * (a.y - b.y)) / d,
        (a_sq * (c.x - b.x) + b_sq * (a.x - c.x) + c_sq * (b.x - a.x)) / d,
    );

    let da = a - centre;
    let dc = c - centre;
    let radius = da.length();
    if !(centre.is_finite() && radius.is_finite()) {
        return None;
    }

    let theta_start = da.y.atan2(da.x);
    let mut theta_end = dc.y.atan2(dc.x);
    while theta_end < theta_start {
        theta_end += 2.0 * PI;
    }

    let mut direction = 1.0;
    let mut theta_range = theta_end - theta_start;

    // b on the other side of a->c means the arc runs the long way round
    let ortho = Position::new(ac.y, -ac.x);
    if ortho.x * ab.x + ortho.y * ab.y < 0.0 {
        direction = -direction;
        theta_range = 2.0 * PI - theta_range;
    }

    let amount = if 2.0 * radius <= CIRCULAR_ARC_TOLERANCE {
        2
    } else {
        let step = 2.0 * (1.0 - CIRCULAR_ARC_TOLERANCE / radius).acos();
        if !(step.is_finite() && step > 0.0) {
            return None;
        }
        ((theta_range / step).ceil() as usize).clamp(2, MAX_ARC_POINTS)
    };

    let points = (0..amount)
        .map(|i| {
            let fraction = i as f64 / (amount - 1) as f64;
            let theta = theta_start + direction * fraction * theta_range;
            centre + Position::new(theta.cos(), theta.sin()) * radius
        })
        .collect();
    Some(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Position, b: Position) -> bool {
        a.distance(b) < 1e-6
    }

    #[test]
    fn test_linear_path() {
        let def = PathDefinition::linear(
            vec![Position::ZERO, Position::new(25.0, 0.0)],
            Some(25.0),
        );
        let path = SliderPath::new(&def).unwrap();
        assert_eq!(path.distance(), 25.0);
        assert!(close(path.position_at(0.0), Position::ZERO));
        assert!(close(path.position_at(0.5), Position::new(12.5, 0.0)));
        assert!(close(path.position_at(1.0), Position::new(25.0, 0.0)));
    }

    #[test]
    fn test_expected_distance_truncates() {
        let def = PathDefinition::linear(
            vec![
                Position::ZERO,
                Position::new(10.0, 0.0),
                Position::new(10.0, 10.0),
            ],
            Some(15.0),
        );
        let path = SliderPath::new(&def).unwrap();
        assert_eq!(path.distance(), 15.0);
        assert!(close(path.position_at(1.0), Position::new(10.0, 5.0)));
    }

    #[test]
    fn test_expected_distance_extends_last_segment() {
        let def = PathDefinition::linear(
            vec![Position::ZERO, Position::new(10.0, 0.0)],
            Some(40.0),
        );
        let path = SliderPath::new(&def).unwrap();
        assert_eq!(path.distance(), 40.0);
        assert!(close(path.position_at(1.0), Position::new(40.0, 0.0)));
    }

    #[test]
    fn test_perfect_curve_semicircle() {
        let def = PathDefinition {
            kind: PathType::PerfectCurve,
            control_points: vec![
                Position::new(-10.0, 0.0),
                Position::new(0.0, 10.0),
                Position::new(10.0, 0.0),
            ],
            expected_distance: None,
        };
        let path = SliderPath::new(&def).unwrap();
        // Half circumference of a radius 10 circle, approximated by chords
        assert!((path.distance() - 10.0 * PI).abs() < 0.5);
        let mid = path.position_at(0.5);
        assert!(mid.distance(Position::new(0.0, 10.0)) < 0.2);
        for p in path.points() {
            assert!((p.length() - 10.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_perfect_curve_with_two_points_is_linear() {
        let def = PathDefinition {
            kind: PathType::PerfectCurve,
            control_points: vec![Position::ZERO, Position::new(25.0, 0.0)],
            expected_distance: Some(25.0),
        };
        let path = SliderPath::new(&def).unwrap();
        assert_eq!(path.points().len(), 2);
        assert_eq!(path.distance(), 25.0);
    }

    #[test]
    fn test_collinear_perfect_curve_falls_back() {
        let def = PathDefinition {
            kind: PathType::PerfectCurve,
            control_points: vec![
                Position::ZERO,
                Position::new(5.0, 0.0),
                Position::new(10.0, 0.0),
            ],
            expected_distance: None,
        };
        let path = SliderPath::new(&def).unwrap();
        assert_eq!(path.points().len(), 3);
        assert_eq!(path.distance(), 10.0);
    }

    #[test]
    fn test_nearly_collinear_perfect_curve_is_linear() {
        let def = PathDefinition {
            kind: PathType::PerfectCurve,
            control_points: vec![
                Position::ZERO,
                Position::new(500.0, 1e-12),
                Position::new(1000.0, 0.0),
            ],
            expected_distance: None,
        };
        let path = SliderPath::new(&def).unwrap();
        assert_eq!(path.points().len(), 3);
        assert!((path.distance() - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_wide_arc_point_count_is_capped() {
        let def = PathDefinition {
            kind: PathType::PerfectCurve,
            control_points: vec![
                Position::new(-1e5, 0.0),
                Position::new(0.0, 1e5),
                Position::new(1e5, 0.0),
            ],
            expected_distance: None,
        };
        let path = SliderPath::new(&def).unwrap();
        assert_eq!(path.points().len(), MAX_ARC_POINTS);
    }

    #[test]
    fn test_rejects_degenerate_paths() {
        let single = PathDefinition::linear(vec![Position::ZERO], None);
        assert!(matches!(SliderPath::new(&single), Err(Error::InvalidSlider(_))));

        let zero = PathDefinition::linear(vec![Position::ZERO, Position::ZERO], None);
        assert!(matches!(SliderPath::new(&zero), Err(Error::InvalidSlider(_))));

        let negative =
            PathDefinition::linear(vec![Position::ZERO, Position::new(1.0, 0.0)], Some(-5.0));
        assert!(matches!(SliderPath::new(&negative), Err(Error::InvalidSlider(_))));
    }
}
