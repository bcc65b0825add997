//! Lexer, parser, and AST for `.mkml` widget layout files.
//!
//! This crate has no dependencies so layout files can be validated by tools
//! that never load a font or touch the renderer.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `DslDocument`, `Node`, `Prop`, `Value` |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token`, `TokenWithPos` |
//! | [`parser`] | `parse_str` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use cliptext_markup::parse_str;
//!
//! let src = r#"
//!     ClipColorText "Hello" {
//!         text_size: 32
//!         gradient_colors: [#ff0000 #0000ff]
//!     }
//! "#;
//!
//! let doc = parse_str(src).unwrap();
//! assert_eq!(doc.root.widget, "ClipColorText");
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{DslDocument, Node, Value};
pub use error::ParseError;
pub use parser::parse_str;

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn ok(src: &str) -> DslDocument { parse_str(src).unwrap() }
    fn err(src: &str) -> ParseError { parse_str(src).unwrap_err() }

    #[test] fn empty_widget() { ok("ClipColorText { }"); }
    #[test] fn bare_widget() { ok("ClipColorText"); }
    #[test] fn block_comment() {
        ok("/* header */ ClipColorText { /* body */ text_size: 8 /* tail */ }");
    }
    #[test] fn line_comment() {
        ok("// top\nClipColorText {\n    // inside\n    text_size: 8\n}");
    }
    #[test] fn negative_number() { ok("ClipColorText { progress: -0.5 }"); }
    #[test] fn string_escape() { ok(r#"ClipColorText "say \"hi\"" { text_size: 12 }"#); }

    #[test]
    fn inline_content_and_props() {
        let doc = ok(r#"ClipColorText "Hi" { text_size: 24  text_color: #112233  debug: true }"#);
        let n = &doc.root;
        assert_eq!(n.content.as_deref(), Some("Hi"));
        assert_eq!(n.prop_f32("text_size"), Some(24.0));
        assert_eq!(n.prop_color("text_color"), Some([0x11, 0x22, 0x33, 0xff]));
        assert_eq!(n.prop_bool("debug"), Some(true));
    }

    #[test]
    fn lists_with_and_without_commas() {
        let doc = ok("ClipColorText { gradient_colors: [#ff0000, #00ff00 #0000ff]  gradient_stops: [0 0.25 1] }");
        let colors = doc.root.prop_list("gradient_colors").unwrap();
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[1], Value::Color([0, 255, 0, 255]));
        assert_eq!(
            doc.root.prop_list("gradient_stops").unwrap(),
            &[Value::Number(0.0), Value::Number(0.25), Value::Number(1.0)]
        );
    }

    #[test]
    fn empty_list() {
        let doc = ok("ClipColorText { gradient_colors: [] }");
        assert_eq!(doc.root.prop_list("gradient_colors"), Some(&[][..]));
    }

    #[test]
    fn later_prop_overrides_earlier() {
        let doc = ok("ClipColorText { text_size: 10  text_size: 20 }");
        assert_eq!(doc.root.prop_f32("text_size"), Some(20.0));
    }

    #[test]
    fn children_are_collected() {
        let doc = ok("Frame { ClipColorText { }  ClipColorText \"b\" }");
        assert_eq!(doc.root.children.len(), 2);
    }

    #[test]
    fn prop_records_line() {
        let doc = ok("ClipColorText {\n\n  progress: 0.5\n}");
        assert_eq!(doc.root.props[0].line, 3);
    }

    #[test] fn err_bad_color() { err("ClipColorText { text_color: #xyz }"); }
    #[test] fn err_unclosed_string() { err(r#"ClipColorText "oops { }"#); }
    #[test] fn err_double_colon() { err("ClipColorText { text_size: : 8 }"); }
    #[test] fn err_nested_list() { err("ClipColorText { gradient_stops: [[0]] }"); }
    #[test] fn err_trailing_tokens() { err("ClipColorText { } ClipColorText { }"); }

    #[test]
    fn err_unclosed_block_points_at_eof() {
        let e = err("ClipColorText {\n  text_size: 8\n");
        assert_eq!(e.line, 3);
        assert!(e.message.contains("unclosed"));
    }

    #[test]
    fn err_missing_value_points_at_token() {
        let e = err("ClipColorText {\n  progress: }\n");
        assert_eq!((e.line, e.col), (2, 13));
    }
}
