//! The typed boundary between the core and the host runtime.
//!
//! The host supplies two capabilities: resolving a page module from
//! disk, and invoking a component to HTML. The core stays free of any
//! embedding API; [`build_render_script`] produces the JS evaluation
//! source a script-capable host can run directly.

use std::path::Path;

use crate::error::{Error, Result};

/// Resolves an already-transformed page module from disk.
pub trait ModuleLoader: Send + Sync {
	/// Load the module source for `path`.
	fn load(&self, path: &Path) -> Result<String>;
}

/// Invokes a page component and returns its rendered HTML.
pub trait ComponentInvoker: Send + Sync {
	/// Render the module at `module_path` with `props_json` (a JSON
	/// object) and return the HTML. Failures propagate with the host's
	/// message.
	fn invoke(&self, module_path: &str, props_json: &str) -> Result<String>;
}

/// A [`ModuleLoader`] that reads page sources from disk and runs the
/// JSX transform on load.
pub struct JsxModuleLoader;

impl ModuleLoader for JsxModuleLoader {
	fn load(&self, path: &Path) -> Result<String> {
		let source = std::fs::read_to_string(path)
			.map_err(|err| Error::Render(format!("failed to read {}: {}", path.display(), err)))?;
		Ok(minuet_jsx::jsx_to_module(&source))
	}
}

// Embed `s` as a single-quoted JS literal. Backslashes, quotes, and
// backticks are escaped no matter which string syntax the surrounding
// script uses, so a hostile path cannot break out of the literal.
fn push_embedded_js_string(out: &mut String, s: &str) {
	out.push('\'');
	for ch in s.chars() {
		match ch {
			'\\' => out.push_str("\\\\"),
			'\'' => out.push_str("\\'"),
			'"' => out.push_str("\\\""),
			'`' => out.push_str("\\`"),
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'\t' => out.push_str("\\t"),
			c if (c as u32) < 0x20 => {
				out.push_str(&format!("\\x{:02x}", c as u32));
			}
			c => out.push(c),
		}
	}
	out.push('\'');
}

/// Build the self-contained JS expression a host evaluates to render a
/// component server-side.
///
/// The script resolves `require` from the main module, loads `react`
/// and `react-dom/server`, publishes the shared `React` global, loads
/// the page module, parses the props, and returns
/// `renderToString(createElement(component, props))`. Empty props
/// normalize to `{}`.
pub fn build_render_script(module_path: &str, props_json: &str) -> String {
	let mut script = String::with_capacity(module_path.len() + props_json.len() + 512);
	script.push_str("(() => {");
	script.push_str(
		"const req=(process&&process.mainModule&&process.mainModule.require)?process.mainModule.require.bind(process.mainModule):null;",
	);
	script.push_str("if(!req){throw new Error('require is not available in this context');}");
	script.push_str("const React=req('react');");
	script.push_str("const ReactDOMServer=req('react-dom/server');");
	script.push_str("globalThis.__MINUET_REACT__=React;");
	script.push_str("const mod=req(");
	push_embedded_js_string(&mut script, module_path);
	script.push_str(");");
	script.push_str("const C=(mod&&mod.__esModule&&mod.default)?mod.default:(mod.default||mod);");
	script.push_str("const props=JSON.parse(");
	if props_json.is_empty() {
		push_embedded_js_string(&mut script, "{}");
	} else {
		push_embedded_js_string(&mut script, props_json);
	}
	script.push_str(");");
	script.push_str("return ReactDOMServer.renderToString(React.createElement(C, props));");
	script.push_str("})()");
	script
}
