//! Emission of `React.createElement` expressions.

/// A parsed attribute. `value` is already a JS expression: a quoted
/// string literal, the raw text of a braced expression, a bare token, or
/// `true` for a flag attribute.
pub(crate) struct JsxAttr {
	pub(crate) name: String,
	pub(crate) value: String,
}

/// Append `s` as a single-quoted JS string literal.
///
/// Escapes `\`, `'`, and the usual control characters; other bytes below
/// 0x20 become `\xNN`.
pub(crate) fn push_js_string_literal(out: &mut String, s: &str) {
	out.push('\'');
	for ch in s.chars() {
		match ch {
			'\\' => out.push_str("\\\\"),
			'\'' => out.push_str("\\'"),
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'\t' => out.push_str("\\t"),
			'\u{0008}' => out.push_str("\\b"),
			'\u{000c}' => out.push_str("\\f"),
			c if (c as u32) < 0x20 => {
				out.push_str(&format!("\\x{:02x}", c as u32));
			}
			c => out.push(c),
		}
	}
	out.push('\'');
}

pub(crate) fn js_string_literal(s: &str) -> String {
	let mut out = String::with_capacity(s.len() + 2);
	push_js_string_literal(&mut out, s);
	out
}

// A tag is a component reference (emitted unquoted) when it starts with
// an uppercase letter, `_`, or `$`, or is a member expression.
pub(crate) fn is_component_tag(name: &str) -> bool {
	let Some(first) = name.chars().next() else {
		return false;
	};
	first.is_ascii_uppercase() || first == '_' || first == '$'
}

fn build_props_object(attrs: &[JsxAttr]) -> String {
	if attrs.is_empty() {
		return "null".to_string();
	}
	let mut out = String::from("{");
	for (i, attr) in attrs.iter().enumerate() {
		if i > 0 {
			out.push_str(", ");
		}
		// Attribute names are restricted to tag-name characters, so
		// quoting them needs no escaping.
		out.push('"');
		out.push_str(&attr.name);
		out.push('"');
		out.push_str(": ");
		out.push_str(&attr.value);
	}
	out.push('}');
	out
}

pub(crate) fn build_create_element(
	tag_name: &str,
	attrs: &[JsxAttr],
	children: &[String],
	is_fragment: bool,
) -> String {
	let mut out = String::from("React.createElement(");
	if is_fragment {
		out.push_str("React.Fragment");
	} else if is_component_tag(tag_name) || tag_name.contains('.') {
		out.push_str(tag_name);
	} else {
		push_js_string_literal(&mut out, tag_name);
	}
	out.push_str(", ");
	out.push_str(&build_props_object(attrs));
	for child in children {
		out.push_str(", ");
		out.push_str(child);
	}
	out.push(')');
	out
}
