use cliptext_engine::coords::Vec2;
use cliptext_engine::text::FontSystem;

// ── Edges ─────────────────────────────────────────────────────────────────

/// Insets on all four sides (padding).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    #[inline]
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self { top: vertical, bottom: vertical, left: horizontal, right: horizontal }
    }

    /// Total inset on the horizontal axis.
    #[inline]
    pub fn h(self) -> f32 {
        self.left + self.right
    }

    /// Total inset on the vertical axis.
    #[inline]
    pub fn v(self) -> f32 {
        self.top + self.bottom
    }
}

// ── MeasureSpec ───────────────────────────────────────────────────────────

/// How a parent constrains one axis of a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureMode {
    /// The child gets exactly `size`.
    Exactly,
    /// The child may be as large as it likes up to `size`.
    AtMost,
    /// No limit; `size` is ignored.
    Unspecified,
}

/// One axis of a sizing request: a mode plus a size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: f32,
}

impl MeasureSpec {
    #[inline]
    pub fn exactly(size: f32) -> Self {
        Self { mode: MeasureMode::Exactly, size }
    }

    #[inline]
    pub fn at_most(size: f32) -> Self {
        Self { mode: MeasureMode::AtMost, size }
    }

    #[inline]
    pub fn unspecified() -> Self {
        Self { mode: MeasureMode::Unspecified, size: 0.0 }
    }

    /// Final pixel size for content that wants `content` pixels (padding
    /// already included).
    ///
    /// The content size is rounded to whole pixels after adding half a
    /// pixel, so fractional text widths never clip their last column.
    #[must_use]
    pub fn resolve(self, content: f32) -> f32 {
        let wanted = (content + 0.5).round().max(0.0);
        match self.mode {
            MeasureMode::Exactly => self.size,
            MeasureMode::AtMost => wanted.min(self.size),
            MeasureMode::Unspecified => wanted,
        }
    }

    /// Derives a spec from one axis of a constraint range.
    fn from_range(min: f32, max: f32) -> Self {
        if max.is_finite() && min == max {
            Self::exactly(max)
        } else if max.is_finite() {
            Self::at_most(max)
        } else {
            Self::unspecified()
        }
    }
}

// ── Constraints ───────────────────────────────────────────────────────────

/// Layout constraints passed down from parent to child during measure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Tight: child must be exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Loose: child can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// No constraint: child can take any positive size.
    #[inline]
    pub fn unbounded() -> Self {
        Self { min: Vec2::zero(), max: Vec2::new(f32::INFINITY, f32::INFINITY) }
    }

    /// Explicit range: child can be any size in `[min, max]`.
    #[inline]
    pub fn between(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }

    /// Per-axis measure specs: `min == max` (finite) is `Exactly`, any other
    /// finite `max` is `AtMost`, an infinite `max` is `Unspecified`.
    #[inline]
    pub fn specs(self) -> (MeasureSpec, MeasureSpec) {
        (
            MeasureSpec::from_range(self.min.x, self.max.x),
            MeasureSpec::from_range(self.min.y, self.max.y),
        )
    }
}

// ── SizeHint ──────────────────────────────────────────────────────────────

/// How a host sizes one axis of a widget inside its viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum SizeHint {
    /// Measure the content, capped by the viewport (default).
    #[default]
    WrapContent,
    /// Fill the viewport on this axis.
    MatchParent,
    /// Fixed pixel size.
    Px(f32),
}

impl SizeHint {
    /// The `(min, max)` range this hint allows inside `parent` pixels.
    #[inline]
    pub fn range(self, parent: f32) -> (f32, f32) {
        match self {
            SizeHint::WrapContent => (0.0, parent),
            SizeHint::MatchParent => (parent, parent),
            SizeHint::Px(v) => (v.max(0.0), v.max(0.0)),
        }
    }
}

// ── LayoutCtx ────────────────────────────────────────────────────────────

/// Resources made available to [`Widget::measure`](crate::widget::Widget::measure).
pub struct LayoutCtx<'a> {
    pub fonts: &'a FontSystem,
}
