//! Route records and their segment model.

use std::path::PathBuf;

use regex::Regex;

/// How one path segment of a route pattern matches.
///
/// Ordering is by specificity: a static segment always beats a dynamic
/// one, which beats the catch-alls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
	/// Literal text, matched case-sensitively.
	Static,
	/// `[name]`: a single non-empty path component.
	Dynamic,
	/// `[...name]`: one or more remaining components.
	CatchAll,
	/// `[[...name]]`: zero or more remaining components.
	OptionalCatchAll,
}

impl SegmentKind {
	/// Specificity rank used for route ordering; higher wins.
	pub(crate) fn rank(self) -> u8 {
		match self {
			SegmentKind::Static => 3,
			SegmentKind::Dynamic => 2,
			SegmentKind::CatchAll => 1,
			SegmentKind::OptionalCatchAll => 0,
		}
	}
}

/// One segment of a compiled route pattern.
#[derive(Debug, Clone)]
pub struct RouteSegment {
	pub kind: SegmentKind,
	/// The literal text for static segments, the parameter name
	/// otherwise.
	pub text: String,
}

/// A page route, immutable after compilation.
#[derive(Debug)]
pub struct Route {
	/// The route string, e.g. `/users/[id]`.
	pub path: String,
	/// The page file this route renders.
	pub file_path: PathBuf,
	/// True when the pattern captures parameters.
	pub is_dynamic: bool,
	pub segments: Vec<RouteSegment>,
	/// Parameter names in declaration order, matching the pattern's
	/// capture groups.
	pub param_names: Vec<String>,
	pub(crate) regex: Regex,
}
