// ── Value ─────────────────────────────────────────────────────────────────

/// A literal value in a property.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Quoted string: `"hello"`
    Str(String),
    /// Floating-point literal: `16.0` or `16`
    Number(f32),
    /// Color literal as straight-alpha bytes `[r, g, b, a]`, from
    /// `#rrggbb` (alpha 255) or `#rrggbbaa`.
    Color([u8; 4]),
    /// Unquoted identifier: `true`, `match_parent`, enum-like words
    Ident(String),
    /// Bracketed list: `[#ff0000 #00ff00]`, `[0 0.3 1]`. Commas are optional.
    List(Vec<Value>),
}

impl Value {
    /// Short name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Number(_) => "number",
            Value::Color(_) => "color",
            Value::Ident(_) => "identifier",
            Value::List(_) => "list",
        }
    }
}

// ── Prop ──────────────────────────────────────────────────────────────────

/// A single `key: value` property inside a widget block.
#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub key: String,
    pub value: Value,
    /// 1-based line of the key.
    pub line: usize,
}

// ── Node ──────────────────────────────────────────────────────────────────

/// A widget instantiation node in the tree.
///
/// ```mkml
/// ClipColorText "Hello" {
///     text_size: 32
///     text_clip_color: #ff0000
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Widget type name: `"ClipColorText"`.
    pub widget: String,
    /// Optional inline string content (the label for text widgets).
    pub content: Option<String>,
    /// Properties inside the block (`key: value` lines).
    pub props: Vec<Prop>,
    /// Nested child widget nodes inside the block.
    pub children: Vec<Node>,
}

impl Node {
    /// Look up a property value by key. The last occurrence wins.
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.iter().rev().find(|p| p.key == key).map(|p| &p.value)
    }

    /// Get a property as `f32` if it is a `Number`.
    pub fn prop_f32(&self, key: &str) -> Option<f32> {
        match self.prop(key)? {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Get a property as `&str` if it is a `Str` or `Ident`.
    pub fn prop_str(&self, key: &str) -> Option<&str> {
        match self.prop(key)? {
            Value::Str(s) | Value::Ident(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get a property as straight-alpha bytes if it is a `Color`.
    pub fn prop_color(&self, key: &str) -> Option<[u8; 4]> {
        match self.prop(key)? {
            Value::Color(c) => Some(*c),
            _ => None,
        }
    }

    /// Get a property as `bool` if it is the identifier `true` or `false`.
    pub fn prop_bool(&self, key: &str) -> Option<bool> {
        match self.prop(key)? {
            Value::Ident(s) if s == "true" => Some(true),
            Value::Ident(s) if s == "false" => Some(false),
            _ => None,
        }
    }

    /// Get a property as a slice of values if it is a `List`.
    pub fn prop_list(&self, key: &str) -> Option<&[Value]> {
        match self.prop(key)? {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

// ── DslDocument ───────────────────────────────────────────────────────────

/// The top-level parse result for a `.mkml` source file.
#[derive(Debug, Clone, PartialEq)]
pub struct DslDocument {
    pub root: Node,
}
