//! Resolves `ClipColorText` options from a parsed `.mkml` node.
//!
//! ```mkml
//! ClipColorText "Loading" {
//!     text_size: 32
//!     text_color: #000000
//!     text_clip_color: #0000ff
//!     gradient_colors: [#ff0000 #0000ff #00ff00]
//!     width: match_parent
//! }
//! ```
//!
//! Missing options take their defaults. Options with the wrong value type
//! are logged at `warn` and also take their defaults, so a typo never stops
//! a layout from loading.

use std::fmt;

use cliptext_engine::paint::Color;
use cliptext_engine::text::FontId;
use cliptext_markup::{Node, ParseError, Value};

use crate::constraints::{Edges, SizeHint};
use crate::scene::Placement;
use crate::widgets::clip_text::{ClipColorText, DEFAULT_TEXT, DEFAULT_TEXT_SIZE};

/// Node name this resolver accepts.
pub const WIDGET_NAME: &str = "ClipColorText";

const KNOWN_KEYS: &[&str] = &[
    "text",
    "text_size",
    "text_color",
    "text_clip_color",
    "progress",
    "gradient_colors",
    "gradient_stops",
    "padding",
    "padding_top",
    "padding_right",
    "padding_bottom",
    "padding_left",
    "debug",
    "width",
    "height",
];

// ── AttrError ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum AttrError {
    /// The layout source did not parse.
    Parse(ParseError),
    /// The root node names some other widget.
    UnexpectedWidget { found: String },
}

impl fmt::Display for AttrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrError::Parse(e) => write!(f, "{e}"),
            AttrError::UnexpectedWidget { found } => {
                write!(f, "expected a {WIDGET_NAME} node, found {found:?}")
            }
        }
    }
}

impl std::error::Error for AttrError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AttrError::Parse(e) => Some(e),
            AttrError::UnexpectedWidget { .. } => None,
        }
    }
}

impl From<ParseError> for AttrError {
    fn from(e: ParseError) -> Self {
        AttrError::Parse(e)
    }
}

// ── ClipColorTextAttrs ────────────────────────────────────────────────────

/// Every option a `ClipColorText` node can carry, with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipColorTextAttrs {
    pub text: String,
    /// Whole pixels; fractional values in markup are truncated.
    pub text_size: u32,
    pub text_color: Color,
    pub clip_color: Color,
    pub progress: f32,
    pub gradient_colors: Option<Vec<Color>>,
    pub gradient_stops: Option<Vec<f32>>,
    pub padding: Edges,
    /// `None` defers to the process-wide debug flag.
    pub debug: Option<bool>,
    pub width: SizeHint,
    pub height: SizeHint,
}

impl Default for ClipColorTextAttrs {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            text_size: DEFAULT_TEXT_SIZE as u32,
            text_color: Color::BLACK,
            clip_color: Color::BLUE,
            progress: 0.0,
            gradient_colors: None,
            gradient_stops: None,
            padding: Edges::default(),
            debug: None,
            width: SizeHint::WrapContent,
            height: SizeHint::WrapContent,
        }
    }
}

impl ClipColorTextAttrs {
    /// Parses `src` and resolves its root node.
    pub fn parse(src: &str) -> Result<Self, AttrError> {
        let doc = cliptext_markup::parse_str(src)?;
        Self::from_node(&doc.root)
    }

    /// Resolves options from `node`, which must be a `ClipColorText`.
    pub fn from_node(node: &Node) -> Result<Self, AttrError> {
        if node.widget != WIDGET_NAME {
            return Err(AttrError::UnexpectedWidget { found: node.widget.clone() });
        }

        for prop in &node.props {
            if !KNOWN_KEYS.contains(&prop.key.as_str()) {
                log::warn!("{WIDGET_NAME}: unknown attribute {:?} on line {}", prop.key, prop.line);
            }
        }
        if !node.children.is_empty() {
            log::warn!("{WIDGET_NAME}: ignoring {} child node(s)", node.children.len());
        }

        let d = Self::default();
        let r = Reader { node };

        let text = match r.get("text", "string", |v| match v {
            Value::Str(s) => Some(s.clone()),
            _ => None,
        }) {
            Some(s) => s,
            None => node.content.clone().unwrap_or(d.text),
        };

        let text_size = r
            .get("text_size", "non-negative number", |v| match v {
                Value::Number(n) if *n >= 0.0 => Some(n.trunc() as u32),
                _ => None,
            })
            .unwrap_or(d.text_size);

        let padding_all = r.number("padding").unwrap_or(0.0);
        let padding = Edges {
            top: r.number("padding_top").unwrap_or(padding_all),
            right: r.number("padding_right").unwrap_or(padding_all),
            bottom: r.number("padding_bottom").unwrap_or(padding_all),
            left: r.number("padding_left").unwrap_or(padding_all),
        };

        Ok(Self {
            text,
            text_size,
            text_color: r.color("text_color").unwrap_or(d.text_color),
            clip_color: r.color("text_clip_color").unwrap_or(d.clip_color),
            progress: r.number("progress").unwrap_or(d.progress),
            gradient_colors: r.get("gradient_colors", "list of colors", |v| match v {
                Value::List(items) => items.iter().map(to_color).collect(),
                _ => None,
            }),
            gradient_stops: r.get("gradient_stops", "list of numbers", |v| match v {
                Value::List(items) => items
                    .iter()
                    .map(|i| match i {
                        Value::Number(n) => Some(*n),
                        _ => None,
                    })
                    .collect(),
                _ => None,
            }),
            padding,
            debug: r.get("debug", "true or false", |v| match v {
                Value::Ident(s) if s == "true" => Some(true),
                Value::Ident(s) if s == "false" => Some(false),
                _ => None,
            }),
            width: r.size_hint("width").unwrap_or(d.width),
            height: r.size_hint("height").unwrap_or(d.height),
        })
    }

    /// Builds the widget these options describe.
    pub fn build(&self, font: FontId) -> ClipColorText {
        ClipColorText::new(self.text.clone(), font)
            .text_size(self.text_size as f32)
            .text_color(self.text_color)
            .clip_color(self.clip_color)
            .with_progress(self.progress)
            .padding(self.padding)
            .gradient_colors(self.gradient_colors.clone())
            .gradient_stops(self.gradient_stops.clone())
            .debug_overlay(self.debug)
    }

    /// Host placement from `width` / `height`.
    pub fn placement(&self) -> Placement {
        Placement { width: self.width, height: self.height }
    }
}

fn to_color(v: &Value) -> Option<Color> {
    match v {
        Value::Color([r, g, b, a]) => Some(Color::from_srgb_u8(*r, *g, *b, *a)),
        _ => None,
    }
}

/// Typed property access that logs type mismatches.
struct Reader<'a> {
    node: &'a Node,
}

impl Reader<'_> {
    fn get<T>(&self, key: &str, expected: &str, convert: impl Fn(&Value) -> Option<T>) -> Option<T> {
        let value = self.node.prop(key)?;
        let out = convert(value);
        if out.is_none() {
            log::warn!(
                "{WIDGET_NAME}: {key} expects a {expected}, got {}; using the default",
                value.kind()
            );
        }
        out
    }

    fn number(&self, key: &str) -> Option<f32> {
        self.get(key, "number", |v| match v {
            Value::Number(n) => Some(*n),
            _ => None,
        })
    }

    fn color(&self, key: &str) -> Option<Color> {
        self.get(key, "color", to_color)
    }

    fn size_hint(&self, key: &str) -> Option<SizeHint> {
        self.get(key, "size (number, match_parent or wrap_content)", |v| match v {
            Value::Number(n) if *n >= 0.0 => Some(SizeHint::Px(*n)),
            Value::Ident(s) if s == "match_parent" => Some(SizeHint::MatchParent),
            Value::Ident(s) if s == "wrap_content" => Some(SizeHint::WrapContent),
            _ => None,
        })
    }
}
