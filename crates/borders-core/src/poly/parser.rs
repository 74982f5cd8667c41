// crates/borders-core/src/poly/parser.rs
use super::{Boundary, Coordinate, Ring};
use crate::error::{BordersError, PolyErrorKind, Result};
use std::path::Path;
use tracing::warn;

const END_MARKER: &str = "END";

/// Where the parser is inside a `.poly` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    ExpectName,
    ExpectRingIndex,
    ExpectCoordinateOrEnd,
    Done,
}

struct PolyParser<'a> {
    source: &'a Path,
    state: ParseState,
    line_no: usize,
    name: Option<String>,
    polygons: Vec<Ring>,
    current: Ring,
}

impl<'a> PolyParser<'a> {
    fn new(source: &'a Path) -> Self {
        Self {
            source,
            state: ParseState::ExpectName,
            line_no: 0,
            name: None,
            polygons: Vec::new(),
            current: Vec::new(),
        }
    }

    fn error(&self, kind: PolyErrorKind) -> BordersError {
        BordersError::Poly {
            path: self.source.to_path_buf(),
            line: self.line_no,
            kind,
        }
    }

    fn feed(&mut self, raw: &str) -> Result<()> {
        self.line_no += 1;
        let line = raw.trim_end();

        match self.state {
            ParseState::ExpectName => {
                self.name = Some(line.to_owned());
                self.state = ParseState::ExpectRingIndex;
            }
            ParseState::ExpectRingIndex => {
                if line == END_MARKER {
                    self.state = ParseState::Done;
                } else {
                    line.trim()
                        .parse::<i64>()
                        .map_err(|_| self.error(PolyErrorKind::BadRingIndex(line.to_owned())))?;
                    self.state = ParseState::ExpectCoordinateOrEnd;
                }
            }
            ParseState::ExpectCoordinateOrEnd => {
                if line == END_MARKER {
                    self.polygons.push(std::mem::take(&mut self.current));
                    self.state = ParseState::ExpectRingIndex;
                } else {
                    let coord = self.parse_coordinate(line)?;
                    self.current.push(coord);
                }
            }
            ParseState::Done => {
                if !line.is_empty() {
                    return Err(self.error(PolyErrorKind::TrailingContent(line.to_owned())));
                }
            }
        }
        Ok(())
    }

    fn parse_coordinate(&self, line: &str) -> Result<Coordinate> {
        if !(line.starts_with('\t') || line.starts_with("   ")) {
            return Err(self.error(PolyErrorKind::UnknownLine(line.to_owned())));
        }

        let bad = || self.error(PolyErrorKind::BadCoordinate(line.trim().to_owned()));
        let mut tokens = line.split_whitespace();
        let (Some(lat), Some(lon), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(bad());
        };
        let lat = lat.parse::<f64>().map_err(|_| bad())?;
        let lon = lon.parse::<f64>().map_err(|_| bad())?;
        Ok(Coordinate(lat, lon))
    }

    fn finish(self) -> Result<Boundary> {
        match self.state {
            ParseState::ExpectName => Err(self.error(PolyErrorKind::MissingName)),
            ParseState::ExpectCoordinateOrEnd => Err(self.error(PolyErrorKind::UnterminatedRing)),
            ParseState::ExpectRingIndex | ParseState::Done => {
                if self.state == ParseState::ExpectRingIndex {
                    warn!("{}: missing final END", self.source.display());
                }
                Ok(Boundary {
                    name: self.name.unwrap_or_default(),
                    polygons: self.polygons,
                })
            }
        }
    }
}

/// Runs the state machine over a sequence of lines.
pub(super) fn parse_lines<I, S>(source: &Path, lines: I) -> Result<Boundary>
where
    I: IntoIterator<Item = std::io::Result<S>>,
    S: AsRef<str>,
{
    let mut parser = PolyParser::new(source);
    for line in lines {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                parser.line_no += 1;
                return Err(parser.error(PolyErrorKind::Unreadable(e.to_string())));
            }
        };
        parser.feed(line.as_ref())?;
    }
    parser.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Boundary> {
        parse_lines(Path::new("test.poly"), input.lines().map(Ok))
    }

    #[test]
    fn accepts_space_indented_coordinates() {
        let b = parse("Monaco\n1\n   7.4 43.7\n   7.5 43.8\nEND\nEND\n").unwrap();
        assert_eq!(b.polygons, vec![vec![Coordinate(7.4, 43.7), Coordinate(7.5, 43.8)]]);
    }

    #[test]
    fn two_spaces_are_not_enough_indentation() {
        let err = parse("Monaco\n1\n  7.4 43.7\nEND\nEND\n").unwrap_err();
        assert_eq!(
            err.poly_kind(),
            Some(&PolyErrorKind::UnknownLine("  7.4 43.7".to_owned()))
        );
    }

    #[test]
    fn scientific_notation_is_accepted() {
        let b = parse("X\n1\n\t1e1 -2.5E-1\nEND\nEND").unwrap();
        assert_eq!(b.polygons[0][0], Coordinate(10.0, -0.25));
    }

    #[test]
    fn reports_line_number() {
        let err = parse("X\n1\n\t1 2\n\t1 2 3\nEND\nEND\n").unwrap_err();
        match err {
            BordersError::Poly { line, kind, .. } => {
                assert_eq!(line, 4);
                assert_eq!(kind, PolyErrorKind::BadCoordinate("1 2 3".to_owned()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_final_end_is_tolerated() {
        let b = parse("X\n1\n\t1 2\nEND\n").unwrap();
        assert_eq!(b.ring_count(), 1);
    }

    #[test]
    fn open_ring_at_eof_is_an_error() {
        let err = parse("X\n1\n\t1 2\n").unwrap_err();
        assert_eq!(err.poly_kind(), Some(&PolyErrorKind::UnterminatedRing));
    }

    #[test]
    fn blank_lines_after_final_end_are_ignored() {
        assert!(parse("X\n1\n\t1 2\nEND\nEND\n\n   \n").is_ok());
        let err = parse("X\n1\n\t1 2\nEND\nEND\n2\n").unwrap_err();
        assert_eq!(
            err.poly_kind(),
            Some(&PolyErrorKind::TrailingContent("2".to_owned()))
        );
    }

    #[test]
    fn crlf_line_endings_are_trimmed() {
        let b = parse("Andorra\r\n1\r\n\t1.5 42.5\r\nEND\r\nEND\r\n").unwrap();
        assert_eq!(b.name, "Andorra");
        assert_eq!(b.point_count(), 1);
    }
}
