use std::fmt;

/// Leading token of a face definition line.
pub const FACE_MARKER: &str = "f";

/// A single line of an OBJ file, as far as triangulation cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjLine<'a> {
    /// `f` followed by exactly four vertex tokens.
    Quad(Quad<'a>),
    /// Anything else, emitted verbatim.
    Other(&'a str),
}

/// Four vertex tokens borrowed from a face line, in file order.
///
/// Tokens are opaque: `7`, `7/2/5`, `-1` and `abc` are treated alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quad<'a> {
    pub vertices: [&'a str; 4],
}

/// Three vertex tokens. Renders as an OBJ face line without the newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle<'a> {
    pub vertices: [&'a str; 3],
}

impl<'a> Triangle<'a> {
    pub fn new(a: &'a str, b: &'a str, c: &'a str) -> Self {
        Self { vertices: [a, b, c] }
    }
}

impl fmt::Display for Triangle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.vertices;
        write!(f, "{FACE_MARKER} {a} {b} {c}")
    }
}

/// Classify a line (without its terminator).
///
/// The marker must sit at column zero and be followed by a space, so
/// `fo 1 2 3 4`, `f\t1 2 3 4` and ` f 1 2 3 4` are not faces.
pub fn classify(line: &str) -> ObjLine<'_> {
    let Some(rest) = line.strip_prefix(FACE_MARKER) else {
        return ObjLine::Other(line);
    };
    if !rest.starts_with(' ') {
        return ObjLine::Other(line);
    }

    let mut tokens = rest.split_whitespace();
    match (
        tokens.next(),
        tokens.next(),
        tokens.next(),
        tokens.next(),
        tokens.next(),
    ) {
        (Some(v1), Some(v2), Some(v3), Some(v4), None) => ObjLine::Quad(Quad {
            vertices: [v1, v2, v3, v4],
        }),
        _ => ObjLine::Other(line),
    }
}
