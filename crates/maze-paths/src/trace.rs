//! Visit traces: the ordered record of expansions an external renderer
//! replays.
//!
//! A token is `"<y>,<x>-<algo>"`, for example `"3,12-BFS"`. The same string
//! is used as the id of the rendered cell, so tokens must never be escaped
//! or reformatted.

use std::fmt;
use std::str::FromStr;

use maze_core::Point;

/// The three search strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algo {
    Dfs,
    Bfs,
    AStar,
}

impl Algo {
    /// Reference solve order. A* scores are reset on every A* solve, so any
    /// order is sound; this one matches the rendered page.
    pub const ALL: [Algo; 3] = [Algo::Dfs, Algo::Bfs, Algo::AStar];

    /// The literal tag used in trace tokens.
    pub const fn tag(self) -> &'static str {
        match self {
            Algo::Dfs => "DFS",
            Algo::Bfs => "BFS",
            Algo::AStar => "AStar",
        }
    }
}

impl fmt::Display for Algo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Algo {
    type Err = UnknownAlgo;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algo::ALL
            .into_iter()
            .find(|a| a.tag() == s)
            .ok_or_else(|| UnknownAlgo(s.to_string()))
    }
}

/// A string that is not one of `DFS`, `BFS`, `AStar`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgo(pub String);

impl fmt::Display for UnknownAlgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm tag \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for UnknownAlgo {}

/// One expansion: the coordinate and the algorithm that expanded it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct VisitToken {
    pub pos: Point,
    pub algo: Algo,
}

impl VisitToken {
    #[inline]
    pub const fn new(pos: Point, algo: Algo) -> Self {
        Self { pos, algo }
    }
}

impl fmt::Display for VisitToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.pos, self.algo)
    }
}

impl FromStr for VisitToken {
    type Err = TokenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TokenParseError::Malformed(s.to_string());
        let (coords, tag) = s.rsplit_once('-').ok_or_else(malformed)?;
        let (y, x) = coords.split_once(',').ok_or_else(malformed)?;
        let y: i32 = y.parse().map_err(|_| malformed())?;
        let x: i32 = x.parse().map_err(|_| malformed())?;
        let algo = tag.parse().map_err(TokenParseError::Algo)?;
        Ok(Self::new(Point::new(x, y), algo))
    }
}

/// Errors from parsing a [`VisitToken`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenParseError {
    /// Not of the form `<int>,<int>-<tag>`.
    Malformed(String),
    Algo(UnknownAlgo),
}

impl fmt::Display for TokenParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(s) => write!(f, "malformed visit token \u{201c}{s}\u{201d}"),
            Self::Algo(e) => write!(f, "visit token: {e}"),
        }
    }
}

impl std::error::Error for TokenParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Algo(e) => Some(e),
            Self::Malformed(_) => None,
        }
    }
}

/// Append-only, ordered list of visit tokens produced by one solve.
///
/// If the end was reached, it is the last token and appears nowhere else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    tokens: Vec<VisitToken>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn push(&mut self, pos: Point, algo: Algo) {
        self.tokens.push(VisitToken::new(pos, algo));
    }

    pub(crate) fn clear(&mut self) {
        self.tokens.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn tokens(&self) -> &[VisitToken] {
        &self.tokens
    }

    /// Expanded coordinates in order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.tokens.iter().map(|t| t.pos)
    }

    #[inline]
    pub fn last(&self) -> Option<VisitToken> {
        self.tokens.last().copied()
    }

    /// Whether the solve terminated on `end`.
    pub fn reached(&self, end: Point) -> bool {
        self.last().is_some_and(|t| t.pos == end)
    }

    /// Tokens formatted for the renderer.
    pub fn to_strings(&self) -> Vec<String> {
        self.tokens.iter().map(ToString::to_string).collect()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Algo {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Algo {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Serialized as the list of token strings.
#[cfg(feature = "serde")]
impl serde::Serialize for Trace {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.tokens.iter().map(ToString::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algo_tags_are_exact() {
        assert_eq!(Algo::Dfs.to_string(), "DFS");
        assert_eq!(Algo::Bfs.to_string(), "BFS");
        assert_eq!(Algo::AStar.to_string(), "AStar");
        for a in Algo::ALL {
            assert_eq!(a.tag().parse::<Algo>(), Ok(a));
        }
        assert_eq!("astar".parse::<Algo>(), Err(UnknownAlgo("astar".into())));
        assert!("A*".parse::<Algo>().is_err());
    }

    #[test]
    fn token_is_row_first() {
        let t = VisitToken::new(Point::new(12, 3), Algo::Bfs);
        assert_eq!(t.to_string(), "3,12-BFS");
    }

    #[test]
    fn token_parses_back() {
        for a in Algo::ALL {
            let t = VisitToken::new(Point::new(39, 0), a);
            assert_eq!(t.to_string().parse::<VisitToken>(), Ok(t));
        }
    }

    #[test]
    fn token_parse_errors() {
        assert!(matches!(
            "3,4".parse::<VisitToken>(),
            Err(TokenParseError::Malformed(_))
        ));
        assert!(matches!(
            "34-DFS".parse::<VisitToken>(),
            Err(TokenParseError::Malformed(_))
        ));
        assert!(matches!(
            "a,4-DFS".parse::<VisitToken>(),
            Err(TokenParseError::Malformed(_))
        ));
        assert_eq!(
            "3,4-IDA".parse::<VisitToken>(),
            Err(TokenParseError::Algo(UnknownAlgo("IDA".into())))
        );
    }

    #[test]
    fn trace_reached_checks_last_token() {
        let mut t = Trace::new();
        assert!(!t.reached(Point::ZERO));
        t.push(Point::ZERO, Algo::Dfs);
        t.push(Point::new(0, 1), Algo::Dfs);
        assert!(t.reached(Point::new(0, 1)));
        assert!(!t.reached(Point::ZERO));
        assert_eq!(t.to_strings(), vec!["0,0-DFS", "1,0-DFS"]);
        assert_eq!(t.points().count(), 2);
        t.clear();
        assert!(t.is_empty());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn trace_serializes_as_tokens() {
        let mut t = Trace::new();
        t.push(Point::new(1, 2), Algo::AStar);
        t.push(Point::new(1, 3), Algo::AStar);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"["2,1-AStar","3,1-AStar"]"#);
    }

    #[test]
    fn algo_round_trip() {
        let json = serde_json::to_string(&Algo::Bfs).unwrap();
        assert_eq!(json, r#""BFS""#);
        let back: Algo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Algo::Bfs);
        assert!(serde_json::from_str::<Algo>(r#""bfs""#).is_err());
    }
}
