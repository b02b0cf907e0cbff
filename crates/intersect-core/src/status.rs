//! Three-line status readout for the current session.

use crate::session::{InteractionSession, Phase};
use crate::tolerance::exceeds_tolerance;
use glam::DVec2;
use std::fmt;

/// Each line is present exactly when the shape it describes is defined.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusText {
    pub circle: Option<String>,
    pub segment: Option<String>,
    pub intersections: Option<String>,
}

impl StatusText {
    pub fn from_session(session: &InteractionSession) -> Self {
        let circle = session.circle();
        let circle_line = circle
            .center
            .filter(|_| {
                session.phase() == Phase::DraggingCircle || exceeds_tolerance(circle.radius)
            })
            .map(|c| format!("Circle: center {} radius = {:.2}", fmt_point(c), circle.radius));

        let segment_line = session
            .segment()
            .endpoints()
            .map(|(p1, p2)| format!("Line segment: {} ~ {}", fmt_point(p1), fmt_point(p2)));

        let intersection_line = session
            .has_computed()
            .then(|| intersection_summary(session.intersections()));

        Self {
            circle: circle_line,
            segment: segment_line,
            intersections: intersection_line,
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        [&self.circle, &self.segment, &self.intersections]
            .into_iter()
            .filter_map(|l| l.as_deref())
    }
}

impl fmt::Display for StatusText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

fn intersection_summary(points: &[DVec2]) -> String {
    if points.is_empty() {
        return "No intersection".to_string();
    }
    let mut out = format!("Intersection Points: {}", points.len());
    for (i, p) in points.iter().enumerate() {
        out.push_str(&format!(" Point {}: {}", i + 1, fmt_point(*p)));
    }
    out
}

#[inline]
fn fmt_point(p: DVec2) -> String {
    format!("({:.2}, {:.2})", p.x, p.y)
}
