//! Path expressions addressing values inside a document.
//!
//! Grammar: `segment ("." segment)*` where a segment is `name`, `name[<index>]` or `name[*]`.
//! The empty string addresses the root node.

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// `name`: key lookup in a mapping.
    Field(String),
    /// `name[n]`: key lookup, then element `n` of the sequence found there.
    Index(String, usize),
    /// `name[*]`: key lookup, then every element of the sequence found there.
    Wildcard(String),
}

impl Segment {
    pub fn name(&self) -> &str {
        match self {
            Segment::Field(name) | Segment::Index(name, _) | Segment::Wildcard(name) => name,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Wildcard(_))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Field(name) => f.write_str(name),
            Segment::Index(name, i) => write!(f, "{name}[{i}]"),
            Segment::Wildcard(name) => write!(f, "{name}[*]"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("empty segment in path `{path}`")]
    EmptySegment { path: String },
    #[error("malformed bracket in segment `{segment}`")]
    MalformedBracket { segment: String },
    #[error("invalid index in segment `{segment}`")]
    InvalidIndex { segment: String },
    #[error("unexpected characters after `]` in segment `{segment}`")]
    TrailingCharacters { segment: String },
}

/// Parsed path expression. Display yields the canonical dotted form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct PathExpr {
    segments: Vec<Segment>,
}

impl PathExpr {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn parse(input: &str) -> Result<Self, PathError> {
        if input.is_empty() {
            return Ok(Self::root());
        }
        let segments = input
            .split('.')
            .map(|raw| parse_segment(input, raw))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { segments })
    }

    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn has_wildcard(&self) -> bool {
        self.segments.iter().any(Segment::is_wildcard)
    }

    /// Split after the last wildcard segment: `a[*].b[*].c.d` becomes (`a[*].b[*]`, `c.d`).
    pub fn split_at_last_wildcard(&self) -> Option<(PathExpr, PathExpr)> {
        let pos = self.segments.iter().rposition(Segment::is_wildcard)?;
        let (head, tail) = self.segments.split_at(pos + 1);
        Some((Self::from_segments(head.to_vec()), Self::from_segments(tail.to_vec())))
    }
}

fn parse_segment(path: &str, raw: &str) -> Result<Segment, PathError> {
    let malformed = || PathError::MalformedBracket {
        segment: raw.to_string(),
    };

    let Some(open) = raw.find('[') else {
        if raw.is_empty() {
            return Err(PathError::EmptySegment {
                path: path.to_string(),
            });
        }
        if raw.contains(']') {
            return Err(malformed());
        }
        return Ok(Segment::Field(raw.to_string()));
    };

    let name = &raw[..open];
    if name.is_empty() {
        return Err(PathError::EmptySegment {
            path: path.to_string(),
        });
    }
    if name.contains(']') {
        return Err(malformed());
    }

    let rest = &raw[open + 1..];
    let close = rest.find(']').ok_or_else(malformed)?;
    let inner = &rest[..close];
    if close + 1 != rest.len() {
        return Err(PathError::TrailingCharacters {
            segment: raw.to_string(),
        });
    }
    if inner.contains('[') {
        return Err(malformed());
    }

    if inner == "*" {
        return Ok(Segment::Wildcard(name.to_string()));
    }
    let index = inner.parse::<usize>().map_err(|_| PathError::InvalidIndex {
        segment: raw.to_string(),
    })?;
    Ok(Segment::Index(name.to_string(), index))
}

impl FromStr for PathExpr {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PathExpr::parse(s)
    }
}

impl fmt::Display for PathExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{seg}")?;
        }
        Ok(())
    }
}

/// Append a dotted child path to a concrete base path.
pub fn join(base: &str, child: &str) -> String {
    match (base.is_empty(), child.is_empty()) {
        (true, _) => child.to_string(),
        (_, true) => base.to_string(),
        _ => format!("{base}.{child}"),
    }
}

/// Concrete path of one sequence element.
pub fn index(base: &str, i: usize) -> String {
    format!("{base}[{i}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_segment_forms() {
        let expr = PathExpr::parse("a.b[2].c[*].d").expect("parse");
        assert_eq!(
            expr.segments(),
            &[
                Segment::Field("a".into()),
                Segment::Index("b".into(), 2),
                Segment::Wildcard("c".into()),
                Segment::Field("d".into()),
            ]
        );
        assert_eq!(expr.to_string(), "a.b[2].c[*].d");
        assert!(expr.has_wildcard());
    }

    #[test]
    fn empty_input_is_root() {
        let expr = PathExpr::parse("").expect("parse");
        assert!(expr.is_root());
        assert_eq!(expr.to_string(), "");
    }

    #[test]
    fn rejects_malformed_paths() {
        assert!(matches!(
            PathExpr::parse("a..b"),
            Err(PathError::EmptySegment { .. })
        ));
        assert!(matches!(
            PathExpr::parse("a."),
            Err(PathError::EmptySegment { .. })
        ));
        assert!(matches!(
            PathExpr::parse("a[1"),
            Err(PathError::MalformedBracket { .. })
        ));
        assert!(matches!(
            PathExpr::parse("a]"),
            Err(PathError::MalformedBracket { .. })
        ));
        assert!(matches!(
            PathExpr::parse("a[x]"),
            Err(PathError::InvalidIndex { .. })
        ));
        assert!(matches!(
            PathExpr::parse("a[-1]"),
            Err(PathError::InvalidIndex { .. })
        ));
        assert!(matches!(
            PathExpr::parse("a[1]b"),
            Err(PathError::TrailingCharacters { .. })
        ));
        assert!(matches!(
            PathExpr::parse("[0]"),
            Err(PathError::EmptySegment { .. })
        ));
    }

    #[test]
    fn splits_at_last_wildcard() {
        let expr = PathExpr::parse("a[*].b[*].c.d").expect("parse");
        let (head, tail) = expr.split_at_last_wildcard().expect("wildcard");
        assert_eq!(head.to_string(), "a[*].b[*]");
        assert_eq!(tail.to_string(), "c.d");

        let trailing = PathExpr::parse("items[*]").expect("parse");
        let (head, tail) = trailing.split_at_last_wildcard().expect("wildcard");
        assert_eq!(head.to_string(), "items[*]");
        assert!(tail.is_root());

        assert!(PathExpr::parse("a.b").expect("parse").split_at_last_wildcard().is_none());
    }

    #[test]
    fn join_skips_empty_parts() {
        assert_eq!(join("", "a"), "a");
        assert_eq!(join("a[0]", ""), "a[0]");
        assert_eq!(join("a[0]", "b.c"), "a[0].b.c");
        assert_eq!(index("items", 3), "items[3]");
    }
}
