//! HTML escaping and URL percent-decoding.
//!
//! Escaped characters:
//! - `&` → `&amp;`
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `"` → `&quot;`
//! - `'` → `&#39;`

/// Escape HTML special characters.
///
/// Every byte outside the escape set is copied through unchanged, so the
/// result is safe to interpolate into element content or attribute values.
///
/// # Examples
///
/// ```
/// use minuet_core::html_escape;
///
/// assert_eq!(html_escape("<b>\"hi\" & 'bye'</b>"),
///            "&lt;b&gt;&quot;hi&quot; &amp; &#39;bye&#39;&lt;/b&gt;");
/// assert_eq!(html_escape("plain text"), "plain text");
/// ```
pub fn html_escape(s: &str) -> String {
	let mut out = String::with_capacity(s.len());
	for ch in s.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(ch),
		}
	}
	out
}

/// Decode a percent-encoded URL component.
///
/// `%XX` sequences become the byte they encode and `+` becomes a space.
/// Malformed sequences (`%` followed by fewer than two hex digits) are
/// copied through literally. Decoded bytes that do not form valid UTF-8
/// are replaced with `U+FFFD`.
///
/// # Examples
///
/// ```
/// use minuet_core::url_decode;
///
/// assert_eq!(url_decode("a%20b"), "a b");
/// assert_eq!(url_decode("1+2"), "1 2");
/// assert_eq!(url_decode("100%"), "100%");
/// ```
pub fn url_decode(s: &str) -> String {
	let bytes = s.as_bytes();
	let mut out = Vec::with_capacity(bytes.len());
	let mut i = 0;
	while i < bytes.len() {
		let c = bytes[i];
		if c == b'%' && i + 2 < bytes.len() {
			let hi = hex_value(bytes[i + 1]);
			let lo = hex_value(bytes[i + 2]);
			if let (Some(hi), Some(lo)) = (hi, lo) {
				out.push((hi << 4) | lo);
				i += 3;
				continue;
			}
		}
		if c == b'+' {
			out.push(b' ');
			i += 1;
			continue;
		}
		out.push(c);
		i += 1;
	}
	String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
	match b {
		b'0'..=b'9' => Some(b - b'0'),
		b'a'..=b'f' => Some(10 + b - b'a'),
		b'A'..=b'F' => Some(10 + b - b'A'),
		_ => None,
	}
}
