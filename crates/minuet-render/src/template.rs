//! String-interpolation template engine.

use std::collections::HashMap;

use minuet_core::html_escape;

fn is_key_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

/// Render `tpl` by substituting `{{ key }}` and `{{{ key }}}` tokens from
/// `ctx`.
///
/// `{{ key }}` is HTML-escaped when `escape` is true; `{{{ key }}}` is
/// always emitted raw. Whitespace inside the braces is ignored and only
/// `[A-Za-z0-9_.]` characters of the key are kept. Unknown keys render as
/// empty. An unclosed opener emits the remaining template literally.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use minuet_render::render_template;
///
/// let mut ctx = HashMap::new();
/// ctx.insert("name".to_string(), "<World>".to_string());
///
/// assert_eq!(render_template("Hi {{name}}!", &ctx, true), "Hi &lt;World&gt;!");
/// assert_eq!(render_template("Hi {{{name}}}!", &ctx, true), "Hi <World>!");
/// ```
pub fn render_template(tpl: &str, ctx: &HashMap<String, String>, escape: bool) -> String {
	let mut out = String::with_capacity(tpl.len());

	let mut i = 0;
	while i < tpl.len() {
		let Some(open) = tpl[i..].find("{{").map(|o| i + o) else {
			out.push_str(&tpl[i..]);
			break;
		};
		out.push_str(&tpl[i..open]);

		let mut key_start = open + 2;
		let mut raw = false;
		if tpl.as_bytes().get(key_start) == Some(&b'{') {
			raw = true;
			key_start += 1;
		}

		let close_token = if raw { "}}}" } else { "}}" };
		let Some(close) = tpl[open + 2..].find(close_token).map(|c| open + 2 + c) else {
			out.push_str(&tpl[open..]);
			break;
		};

		let key: String = tpl[key_start..close].chars().filter(|&c| is_key_char(c)).collect();
		if let Some(value) = ctx.get(&key) {
			if raw || !escape {
				out.push_str(value);
			} else {
				out.push_str(&html_escape(value));
			}
		}

		i = close + close_token.len();
	}

	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn ctx(pairs: &[(&str, &str)]) -> HashMap<String, String> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[test]
	fn test_escaped_and_raw_tokens() {
		let ctx = ctx(&[("n", "<>"), ("m", "&")]);
		assert_eq!(
			render_template("Hi {{n}}<b>{{m}}</b>", &ctx, true),
			"Hi &lt;&gt;<b>&amp;</b>"
		);
		assert_eq!(
			render_template("Hi {{n}}<b>{{m}}</b>", &ctx, false),
			"Hi <><b>&</b>"
		);
	}

	#[test]
	fn test_triple_braces_bypass_escaping() {
		let ctx = ctx(&[("html", "<em>x</em>")]);
		assert_eq!(
			render_template("{{{html}}}", &ctx, true),
			"<em>x</em>"
		);
	}

	#[rstest]
	#[case("{{ name }}", "v")]
	#[case("{{name}}", "v")]
	#[case("{{  name  }}", "v")]
	#[case("{{\tname\n}}", "v")]
	fn test_whitespace_inside_braces_ignored(#[case] tpl: &str, #[case] expected: &str) {
		let ctx = ctx(&[("name", "v")]);
		assert_eq!(render_template(tpl, &ctx, true), expected);
	}

	#[test]
	fn test_key_chars_filtered() {
		// Only [A-Za-z0-9_.] survive; "user-name" collapses to "username".
		let ctx = ctx(&[("username", "ok"), ("a.b", "dotted")]);
		assert_eq!(render_template("{{user-name}}", &ctx, true), "ok");
		assert_eq!(render_template("{{a.b}}", &ctx, true), "dotted");
	}

	#[test]
	fn test_unknown_key_renders_empty() {
		let ctx = ctx(&[]);
		assert_eq!(render_template("a{{missing}}b", &ctx, true), "ab");
	}

	#[test]
	fn test_unclosed_token_emitted_literally() {
		let ctx = ctx(&[("k", "v")]);
		assert_eq!(render_template("before {{k", &ctx, true), "before {{k");
		assert_eq!(render_template("before {{{k}}", &ctx, true), "before {{{k}}");
	}

	#[test]
	fn test_no_tokens_is_identity() {
		let ctx = ctx(&[("k", "v")]);
		assert_eq!(render_template("plain } { text", &ctx, true), "plain } { text");
	}

	#[test]
	fn test_adjacent_tokens() {
		let ctx = ctx(&[("a", "1"), ("b", "2")]);
		assert_eq!(render_template("{{a}}{{b}}", &ctx, true), "12");
	}
}
