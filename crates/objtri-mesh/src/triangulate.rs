use serde::Serialize;

use crate::face::{classify, ObjLine, Quad, Triangle};

impl<'a> Quad<'a> {
    /// Split along the v1-v3 diagonal: `(v1 v2 v3)` then `(v3 v4 v1)`.
    ///
    /// The diagonal is fixed; no geometry is consulted.
    pub fn split(&self) -> [Triangle<'a>; 2] {
        let [v1, v2, v3, v4] = self.vertices;
        [Triangle::new(v1, v2, v3), Triangle::new(v3, v4, v1)]
    }
}

/// Line counts for one conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    pub lines_read: usize,
    pub lines_written: usize,
    pub quads_split: usize,
    pub passthrough: usize,
}

impl ConversionStats {
    fn record(&mut self, line: &ObjLine<'_>) {
        self.lines_read += 1;
        match line {
            ObjLine::Quad(_) => {
                self.quads_split += 1;
                self.lines_written += 2;
            }
            ObjLine::Other(_) => {
                self.passthrough += 1;
                self.lines_written += 1;
            }
        }
    }
}

/// Lines of `input` with their terminators removed.
///
/// `\r\n`, `\n` and a lone `\r` each end a line. A trailing terminator does
/// not start an extra empty line.
fn split_lines(input: &str) -> impl Iterator<Item = &str> {
    let mut rest = input;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let line = match rest.find(['\r', '\n']) {
            Some(end) => {
                let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                let line = &rest[..end];
                rest = &rest[end + skip..];
                line
            }
            None => std::mem::take(&mut rest),
        };
        Some(line)
    })
}

/// Rewrite every quad face in `input` as two triangles.
///
/// Every output line ends with `\n`, whatever terminator it had on input.
pub fn triangulate_str(input: &str) -> (String, ConversionStats) {
    let mut out = String::with_capacity(input.len() + input.len() / 4);
    let mut stats = ConversionStats::default();

    for (index, raw) in split_lines(input).enumerate() {
        let line = classify(raw);
        stats.record(&line);
        match line {
            ObjLine::Quad(quad) => {
                tracing::trace!(line = index + 1, "splitting quad");
                for tri in quad.split() {
                    out.push_str(&tri.to_string());
                    out.push('\n');
                }
            }
            ObjLine::Other(text) => {
                out.push_str(text);
                out.push('\n');
            }
        }
    }

    (out, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_uses_v1_v3_diagonal() {
        let quad = Quad {
            vertices: ["1", "2", "3", "4"],
        };
        let [a, b] = quad.split();
        assert_eq!(a.vertices, ["1", "2", "3"]);
        assert_eq!(b.vertices, ["3", "4", "1"]);
    }

    #[test]
    fn test_single_quad_line() {
        let (out, stats) = triangulate_str("f 1 2 3 4\n");
        assert_eq!(out, "f 1 2 3\nf 3 4 1\n");
        assert_eq!(stats.quads_split, 1);
        assert_eq!(stats.lines_written, 2);
    }

    #[test]
    fn test_passthrough_lines_unchanged() {
        let input = "# cube\nv 0.0 1.0 0.0\nvn 0 0 1\nf 1 2 3\n";
        let (out, stats) = triangulate_str(input);
        assert_eq!(out, input);
        assert_eq!(stats.quads_split, 0);
        assert_eq!(stats.passthrough, 4);
    }

    #[test]
    fn test_empty_input() {
        let (out, stats) = triangulate_str("");
        assert!(out.is_empty());
        assert_eq!(stats, ConversionStats::default());
    }

    #[test]
    fn test_crlf_and_missing_final_newline() {
        let (out, _) = triangulate_str("v 1 2 3\r\nf 1 2 3 4");
        assert_eq!(out, "v 1 2 3\nf 1 2 3\nf 3 4 1\n");
    }

    #[test]
    fn test_lone_carriage_return_ends_line() {
        let (out, stats) = triangulate_str("f 1 2 3 4\rf 5 6 7 8\r");
        assert_eq!(out, "f 1 2 3\nf 3 4 1\nf 5 6 7\nf 7 8 5\n");
        assert_eq!(stats.quads_split, 2);
    }

    #[test]
    fn test_mixed_terminators_and_blank_lines() {
        let lines: Vec<_> = split_lines("a\r\nb\rc\n\n\rd").collect();
        assert_eq!(lines, ["a", "b", "c", "", "", "d"]);
    }

    #[test]
    fn test_order_preserved_around_quads() {
        let input = "o a\nf 1 2 3 4\ng b\nf 5 6 7 8\ns off\n";
        let (out, stats) = triangulate_str(input);
        assert_eq!(
            out,
            "o a\nf 1 2 3\nf 3 4 1\ng b\nf 5 6 7\nf 7 8 5\ns off\n"
        );
        assert_eq!(stats.lines_read, 5);
        assert_eq!(stats.lines_written, 7);
        assert_eq!(stats.lines_written, stats.passthrough + 2 * stats.quads_split);
    }

    #[test]
    fn test_composite_tokens_relocated_verbatim() {
        let (out, _) = triangulate_str("f 1/1/1 2/2/1 3/3/1 4/4/1\n");
        assert_eq!(out, "f 1/1/1 2/2/1 3/3/1\nf 3/3/1 4/4/1 1/1/1\n");
    }

    #[test]
    fn test_second_pass_is_noop() {
        let (once, _) = triangulate_str("v 0 0 0\nf 1 2 3 4\nf 4 3 2 1\n");
        let (twice, stats) = triangulate_str(&once);
        assert_eq!(once, twice);
        assert_eq!(stats.quads_split, 0);
    }
}
