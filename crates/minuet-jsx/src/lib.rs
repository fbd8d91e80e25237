//! JSX transformer: rewrites markup expressions in a source file into
//! plain `React.createElement(…)` calls.
//!
//! The transform is byte-preserving everywhere outside markup: strings,
//! template literals, comments, and whitespace pass through verbatim.
//! Parse failures at an individual `<` are non-fatal; the character is
//! emitted literally and scanning continues, so ordinary comparison
//! operators survive.

mod element;
mod emit;
mod scanner;

use scanner::transform_source;

// Prologue prepended when the source carries no react import of its own.
// It resolves `React` from the shared global, falling back to the host's
// module loader, and publishes the binding back to the global.
const REACT_PROLOGUE: &str = concat!(
	"const __minuet_main=(typeof require==='function'&&require.main)?require.main:null;\n",
	"const __minuet_req=(__minuet_main&&typeof __minuet_main.require==='function')?__minuet_main.require.bind(__minuet_main):require;\n",
	"const React=(globalThis&&globalThis.__MINUET_REACT__)?globalThis.__MINUET_REACT__:__minuet_req('react');\n",
	"if(globalThis){globalThis.__MINUET_REACT__=React;}\n",
);

fn has_react_binding(s: &str) -> bool {
	s.contains("require('react')")
		|| s.contains("require(\"react\")")
		|| s.contains("from 'react'")
		|| s.contains("from \"react\"")
}

/// Transform the JSX in `src` into a plain JS module.
///
/// Markup becomes `React.createElement(…)` expressions; everything else
/// is preserved byte-for-byte. When the result contains no textual react
/// import, a prologue is prepended that makes `React` resolvable at run
/// time without shadowing a user import.
///
/// # Examples
///
/// ```
/// use minuet_jsx::jsx_to_module;
///
/// let out = jsx_to_module("module.exports = () => <br />;\n");
/// assert!(out.ends_with("module.exports = () => React.createElement('br', null);\n"));
/// ```
pub fn jsx_to_module(src: &str) -> String {
	let transformed = transform_source(src);
	if has_react_binding(&transformed) {
		return transformed;
	}
	let mut out = String::with_capacity(REACT_PROLOGUE.len() + transformed.len());
	out.push_str(REACT_PROLOGUE);
	out.push_str(&transformed);
	out
}
