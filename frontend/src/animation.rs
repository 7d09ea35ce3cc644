//! Entrance animations.
//!
//! Every animated block starts at an initial [`Pose`] and settles at rest
//! (no offset, fully opaque). The motion itself runs in CSS through the
//! `motion-enter` keyframes defined in the global stylesheet; this module only
//! decides which inline style an element carries.

/// Initial offset (px) and opacity of an animated element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub x: i32,
    pub y: i32,
    pub opacity: f64,
}

impl Pose {
    pub const fn hidden() -> Self {
        Pose { x: 0, y: 0, opacity: 0.0 }
    }

    pub const fn from_x(x: i32) -> Self {
        Pose { x, y: 0, opacity: 0.0 }
    }

    pub const fn from_y(y: i32) -> Self {
        Pose { x: 0, y, opacity: 0.0 }
    }

    /// Offset only; the element stays opaque while it moves in.
    pub const fn slide_y(y: i32) -> Self {
        Pose { x: 0, y, opacity: 1.0 }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Transition {
    pub const fn new(duration_ms: u32) -> Self {
        Transition { duration_ms, delay_ms: 0 }
    }

    pub const fn delayed(self, delay_ms: u32) -> Self {
        Transition { delay_ms, ..self }
    }
}

/// Per-item start delays for a list: `base_ms + index * step_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    pub base_ms: u32,
    pub step_ms: u32,
}

impl Stagger {
    pub const fn new(step_ms: u32) -> Self {
        Stagger { base_ms: 0, step_ms }
    }

    pub fn delay(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.base_ms.saturating_add(index.saturating_mul(self.step_ms))
    }
}

/// One-shot viewport latch. Once an element has entered it stays revealed,
/// scrolling it back out does not replay the animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reveal {
    entered: bool,
}

impl Reveal {
    /// Returns true only for the observation that first sees the element.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.entered || !intersecting {
            return false;
        }
        self.entered = true;
        true
    }
}

/// Inline style for an element animating from `from` to rest.
pub fn motion_style(from: Pose, transition: Transition, active: bool) -> String {
    if !active {
        return format!(
            "opacity: {}; transform: translate({}px, {}px);",
            from.opacity, from.x, from.y
        );
    }
    format!(
        "--motion-x: {}px; --motion-y: {}px; --motion-opacity: {}; \
         animation: motion-enter {}ms ease-out {}ms both;",
        from.x, from.y, from.opacity, transition.duration_ms, transition.delay_ms
    )
}
