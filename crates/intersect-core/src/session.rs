//! Two-phase drag interaction: drag out a circle, then drag out a segment.
//!
//! The session is a plain value owned by the caller. Input events go in
//! through [`InteractionSession::handle`] (or the per-event methods) and each
//! call reports what happened as a [`Transition`], so the front-end knows
//! when to redraw and tests can drive the machine without a DOM.

use crate::geometry::{Circle, Intersections, Segment};
use crate::tolerance::exceeds_tolerance;
use glam::DVec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    DefiningCircle,
    DraggingCircle,
    AwaitingSegmentStart,
    DraggingSegment,
}

/// Which shape the next press defines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Circle,
    Segment,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Other(i16),
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` code.
    pub fn from_dom(code: i16) -> Self {
        match code {
            0 => PointerButton::Left,
            other => PointerButton::Other(other),
        }
    }
}

/// Pointer input, already mapped into NDC.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Press { button: PointerButton, point: DVec2 },
    Move { point: DVec2 },
    Release { button: PointerButton },
}

/// Outcome of feeding one event to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Ignored,
    CircleStarted,
    CircleResized,
    CircleCommitted,
    CircleDiscarded,
    SegmentStarted,
    SegmentStretched,
    /// Segment released and intersections stored; the session is back to
    /// accepting a new circle.
    Computed { count: usize },
}

impl Transition {
    #[inline]
    pub fn needs_redraw(self) -> bool {
        self != Transition::Ignored
    }
}

#[derive(Clone, Debug, Default)]
pub struct InteractionSession {
    phase: Phase,
    circle: Circle,
    segment: Segment,
    intersections: Intersections,
    has_computed: bool,
    drag_origin: Option<DVec2>,
}

impl InteractionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> Mode {
        match self.phase {
            Phase::DefiningCircle | Phase::DraggingCircle => Mode::Circle,
            Phase::AwaitingSegmentStart | Phase::DraggingSegment => Mode::Segment,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::DraggingCircle | Phase::DraggingSegment)
    }

    pub fn circle(&self) -> &Circle {
        &self.circle
    }

    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    pub fn intersections(&self) -> &[DVec2] {
        &self.intersections
    }

    /// True iff `intersections` belongs to the current circle and segment.
    pub fn has_computed(&self) -> bool {
        self.has_computed
    }

    pub fn handle(&mut self, event: InputEvent) -> Transition {
        match event {
            InputEvent::Press { button, point } => self.press(button, point),
            InputEvent::Move { point } => self.move_to(point),
            InputEvent::Release { button } => self.release(button),
        }
    }

    pub fn press(&mut self, button: PointerButton, point: DVec2) -> Transition {
        if button != PointerButton::Left {
            log::trace!("[session] ignoring press with {:?}", button);
            return Transition::Ignored;
        }
        match self.phase {
            Phase::DefiningCircle => {
                *self = Self {
                    phase: Phase::DraggingCircle,
                    circle: Circle::new(point, 0.0),
                    drag_origin: Some(point),
                    ..Self::default()
                };
                log::debug!("[session] circle started at ({:.3},{:.3})", point.x, point.y);
                Transition::CircleStarted
            }
            Phase::AwaitingSegmentStart => {
                self.intersections.clear();
                self.has_computed = false;
                self.segment = Segment::new(point, point);
                self.phase = Phase::DraggingSegment;
                log::debug!("[session] segment started at ({:.3},{:.3})", point.x, point.y);
                Transition::SegmentStarted
            }
            Phase::DraggingCircle | Phase::DraggingSegment => {
                log::trace!("[session] press while dragging ignored");
                Transition::Ignored
            }
        }
    }

    pub fn move_to(&mut self, point: DVec2) -> Transition {
        match self.phase {
            Phase::DraggingCircle => match self.drag_origin {
                Some(origin) => {
                    self.circle.radius = origin.distance(point);
                    Transition::CircleResized
                }
                None => Transition::Ignored,
            },
            Phase::DraggingSegment => {
                self.segment.p2 = Some(point);
                Transition::SegmentStretched
            }
            Phase::DefiningCircle | Phase::AwaitingSegmentStart => Transition::Ignored,
        }
    }

    pub fn release(&mut self, button: PointerButton) -> Transition {
        if button != PointerButton::Left {
            log::trace!("[session] ignoring release with {:?}", button);
            return Transition::Ignored;
        }
        match self.phase {
            Phase::DraggingCircle => {
                self.drag_origin = None;
                if exceeds_tolerance(self.circle.radius) {
                    self.phase = Phase::AwaitingSegmentStart;
                    log::debug!("[session] circle committed r={:.3}", self.circle.radius);
                    Transition::CircleCommitted
                } else {
                    self.circle = Circle::default();
                    self.phase = Phase::DefiningCircle;
                    log::debug!("[session] circle too small; discarded");
                    Transition::CircleDiscarded
                }
            }
            Phase::DraggingSegment => {
                self.intersections = self.circle.intersect_segment(&self.segment);
                self.has_computed = true;
                self.phase = Phase::DefiningCircle;
                let count = self.intersections.len();
                log::debug!("[session] computed {} intersection(s)", count);
                Transition::Computed { count }
            }
            Phase::DefiningCircle | Phase::AwaitingSegmentStart => Transition::Ignored,
        }
    }
}
