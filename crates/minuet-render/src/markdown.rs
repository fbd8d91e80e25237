//! Line-oriented Markdown renderer.
//!
//! Supported blocks: fenced code (``` toggles, contents escaped verbatim),
//! `#`–`######` headings, `-`/`*` list items, paragraphs. Inline spans:
//! `` `code` ``, `**strong**`, `*em*`, `[text](url)`. Everything else is
//! HTML-escaped; unclosed markers fall through as literal characters.

use minuet_core::html_escape;

fn push_escaped_char(out: &mut String, ch: char) {
	match ch {
		'&' => out.push_str("&amp;"),
		'<' => out.push_str("&lt;"),
		'>' => out.push_str("&gt;"),
		'"' => out.push_str("&quot;"),
		'\'' => out.push_str("&#39;"),
		_ => out.push(ch),
	}
}

// Single pass, leftmost match wins. A marker without its closing
// counterpart is emitted as a literal character.
fn render_inline(line: &str) -> String {
	let mut out = String::with_capacity(line.len());
	let bytes = line.as_bytes();
	let mut i = 0;

	while i < bytes.len() {
		let rest = &line[i..];

		if bytes[i] == b'`' {
			if let Some(j) = rest[1..].find('`') {
				out.push_str("<code>");
				out.push_str(&html_escape(&rest[1..1 + j]));
				out.push_str("</code>");
				i += j + 2;
				continue;
			}
		}

		if rest.starts_with("**") {
			if let Some(j) = rest[2..].find("**") {
				out.push_str("<strong>");
				out.push_str(&html_escape(&rest[2..2 + j]));
				out.push_str("</strong>");
				i += j + 4;
				continue;
			}
		}

		if bytes[i] == b'*' {
			if let Some(j) = rest[1..].find('*') {
				out.push_str("<em>");
				out.push_str(&html_escape(&rest[1..1 + j]));
				out.push_str("</em>");
				i += j + 2;
				continue;
			}
		}

		if bytes[i] == b'[' {
			if let Some(mid) = rest[1..].find(']').map(|m| m + 1) {
				if rest[mid + 1..].starts_with('(') {
					if let Some(end) = rest[mid + 2..].find(')').map(|e| mid + 2 + e) {
						let text = &rest[1..mid];
						let url = &rest[mid + 2..end];
						out.push_str("<a href=\"");
						out.push_str(&html_escape(url));
						out.push_str("\">");
						out.push_str(&html_escape(text));
						out.push_str("</a>");
						i += end + 1;
						continue;
					}
				}
			}
		}

		match rest.chars().next() {
			Some(ch) => {
				push_escaped_char(&mut out, ch);
				i += ch.len_utf8();
			}
			None => break,
		}
	}

	out
}

/// Render a Markdown document to HTML.
///
/// Each line is normalized by stripping a trailing `\r`, then trimmed for
/// classification. Open structures (code block, list) are closed at end
/// of input.
///
/// # Examples
///
/// ```
/// use minuet_render::markdown_to_html;
///
/// assert_eq!(markdown_to_html("# Hi"), "<h1>Hi</h1>");
/// assert_eq!(markdown_to_html("- a\n- b"), "<ul><li>a</li><li>b</li></ul>");
/// ```
pub fn markdown_to_html(markdown: &str) -> String {
	let mut out = String::with_capacity(markdown.len() * 2);

	let mut in_code_block = false;
	let mut in_list = false;

	for line in markdown.split('\n') {
		let line = line.strip_suffix('\r').unwrap_or(line);
		let raw = line.trim();

		if raw.starts_with("```") {
			if !in_code_block {
				if in_list {
					out.push_str("</ul>");
					in_list = false;
				}
				// Newline separates the block from whatever preceded it.
				out.push('\n');
				out.push_str("<pre><code>");
				in_code_block = true;
			} else {
				out.push_str("</code></pre>");
				out.push('\n');
				in_code_block = false;
			}
			continue;
		}

		if in_code_block {
			out.push_str(&html_escape(line));
			out.push('\n');
			continue;
		}

		if raw.is_empty() {
			if in_list {
				out.push_str("</ul>");
				in_list = false;
			}
			continue;
		}

		let level = raw.bytes().take_while(|&b| b == b'#').count();
		if (1..=6).contains(&level) && raw[level..].starts_with(' ') {
			if in_list {
				out.push_str("</ul>");
				in_list = false;
			}
			out.push_str(&format!("<h{}>", level));
			out.push_str(&render_inline(&raw[level + 1..]));
			out.push_str(&format!("</h{}>", level));
			continue;
		}

		if raw.starts_with("- ") || raw.starts_with("* ") {
			if !in_list {
				out.push_str("<ul>");
				in_list = true;
			}
			out.push_str("<li>");
			out.push_str(&render_inline(&raw[2..]));
			out.push_str("</li>");
			continue;
		}

		if in_list {
			out.push_str("</ul>");
			in_list = false;
		}

		out.push_str("<p>");
		out.push_str(&render_inline(raw));
		out.push_str("</p>");
	}

	if in_list {
		out.push_str("</ul>");
	}
	if in_code_block {
		out.push_str("</code></pre>");
	}

	out
}
