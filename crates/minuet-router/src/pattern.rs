//! Route pattern compilation.
//!
//! Compiles a route string like `/docs/[...path]` into a regex with one
//! numbered capture group per parameter, in declaration order.

use regex::Regex;
use thiserror::Error;

use crate::route::{RouteSegment, SegmentKind};

/// Why a route string failed to compile.
#[derive(Debug, Error)]
pub enum PatternError {
	/// Route strings always begin with `/`.
	#[error("route must start with '/': {0:?}")]
	MissingLeadingSlash(String),

	/// `[...name]` and `[[...name]]` are only valid as the final
	/// segment.
	#[error("catch-all segment must be last in route {0:?}")]
	NonTerminalCatchAll(String),

	/// `[]`, `[...]` and `[[...]]` carry no parameter name.
	#[error("empty parameter name in route {0:?}")]
	EmptyParamName(String),

	/// The generated expression was rejected by the regex engine.
	#[error("failed to compile pattern for route: {0}")]
	Regex(#[from] regex::Error),
}

pub(crate) struct CompiledPattern {
	pub(crate) regex: Regex,
	pub(crate) segments: Vec<RouteSegment>,
	pub(crate) param_names: Vec<String>,
}

/// Compile `route` into its segments, parameter names, and matching
/// regex.
pub(crate) fn compile_route_pattern(route: &str) -> Result<CompiledPattern, PatternError> {
	if !route.starts_with('/') {
		return Err(PatternError::MissingLeadingSlash(route.to_string()));
	}

	let segs: Vec<&str> = route[1..].split('/').filter(|s| !s.is_empty()).collect();

	let mut segments = Vec::with_capacity(segs.len());
	let mut param_names = Vec::new();
	let mut pattern = String::with_capacity(route.len() * 2 + 16);
	pattern.push('^');

	if segs.is_empty() {
		pattern.push_str("/$");
		return Ok(CompiledPattern {
			regex: Regex::new(&pattern)?,
			segments,
			param_names,
		});
	}

	for (idx, seg) in segs.iter().enumerate() {
		let is_last = idx + 1 == segs.len();

		if seg.len() >= 6 && seg.starts_with("[[...") && seg.ends_with("]]") {
			if !is_last {
				return Err(PatternError::NonTerminalCatchAll(route.to_string()));
			}
			let name = &seg[5..seg.len() - 2];
			if name.is_empty() {
				return Err(PatternError::EmptyParamName(route.to_string()));
			}
			segments.push(RouteSegment {
				kind: SegmentKind::OptionalCatchAll,
				text: name.to_string(),
			});
			param_names.push(name.to_string());
			if segs.len() == 1 {
				pattern.push_str("/(?:(.+))?");
			} else {
				pattern.push_str("(?:/(.+))?");
			}
			continue;
		}

		pattern.push('/');

		if seg.len() >= 5 && seg.starts_with("[...") && seg.ends_with(']') {
			if !is_last {
				return Err(PatternError::NonTerminalCatchAll(route.to_string()));
			}
			let name = &seg[4..seg.len() - 1];
			if name.is_empty() {
				return Err(PatternError::EmptyParamName(route.to_string()));
			}
			segments.push(RouteSegment {
				kind: SegmentKind::CatchAll,
				text: name.to_string(),
			});
			param_names.push(name.to_string());
			pattern.push_str("(.+)");
			continue;
		}

		if seg.len() >= 3 && seg.starts_with('[') && seg.ends_with(']') {
			let name = &seg[1..seg.len() - 1];
			if name.is_empty() {
				return Err(PatternError::EmptyParamName(route.to_string()));
			}
			segments.push(RouteSegment {
				kind: SegmentKind::Dynamic,
				text: name.to_string(),
			});
			param_names.push(name.to_string());
			pattern.push_str("([^/]+)");
			continue;
		}

		segments.push(RouteSegment {
			kind: SegmentKind::Static,
			text: seg.to_string(),
		});
		pattern.push_str(&regex::escape(seg));
	}

	pattern.push('$');
	Ok(CompiledPattern {
		regex: Regex::new(&pattern)?,
		segments,
		param_names,
	})
}
