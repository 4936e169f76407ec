//! sanitize.rs
//!
//! HTML sanitizing for staff-authored rich text. Script content comes from a
//! rich-text editor and is printed as-is, so anything that could execute in
//! a browser is removed before rendering:
//!
//! 1. `<script>` elements together with their content,
//! 2. the tags (not the text) of `iframe`, `object`, `embed`, `link`,
//!    `form`, `input`, `button`, `select` and `textarea`,
//! 3. `<style>` blocks together with their content,
//! 4. `on*` event-handler attributes, quoted or unquoted,
//! 5. `javascript:`, `data:` and `vbscript:` URL schemes, wherever they
//!    appear.
//!
//! Tag names, handler names and schemes match ASCII letters in either
//! case only; Unicode case folding (`ſ` for `s`, the Kelvin sign for `k`)
//! does not apply.
//!
//! This is a denylist. Inline `style` attributes and every other tag are
//! left alone, since the editor produces `<span style="color: ...">`,
//! `<p style="text-align: ...">` and similar markup that must survive.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `<script ...>` up to the first `</script>`, across lines.
    static ref SCRIPT_BLOCK: Regex =
        Regex::new(r"(?s)(?i-u:<script)(?-u:\b).*?(?i-u:</script>)").unwrap();

    /// Opening tags of elements whose markup is dropped but whose text stays.
    static ref BLOCKED_OPEN_TAG: Regex = Regex::new(
        r"(?i-u:<(?:iframe|object|embed|link|form|input|button|select|textarea))(?-u:\b)[^>]*>"
    )
    .unwrap();

    static ref BLOCKED_CLOSE_TAG: Regex = Regex::new(
        r"(?i-u:</(?:iframe|object|embed|link|form|input|button|select|textarea)>)"
    )
    .unwrap();

    static ref STYLE_BLOCK: Regex =
        Regex::new(r"(?s)(?i-u:<style)(?-u:\b).*?(?i-u:</style>)").unwrap();

    /// `onclick="..."`, `onload='...'`.
    static ref QUOTED_HANDLER: Regex =
        Regex::new(r#"\s+(?i-u:on[a-z0-9_]+)\s*=\s*["'][^"']*["']"#).unwrap();

    /// `onclick=doSomething()`.
    static ref UNQUOTED_HANDLER: Regex =
        Regex::new(r"\s+(?i-u:on[a-z0-9_]+)\s*=\s*[^\s>]*").unwrap();

    static ref DANGEROUS_SCHEMES: Regex =
        Regex::new(r"(?i-u:javascript|data|vbscript)\s*:").unwrap();
}

/// Strips dangerous markup from `html`. Never fails; input without any
/// dangerous pattern is returned unchanged.
///
/// ```
/// # use parish_liturgy::sanitize::sanitize;
/// assert_eq!(
///     sanitize(r#"<p onclick="steal()">Amen</p><script>alert(1)</script>"#),
///     "<p>Amen</p>"
/// );
/// ```
pub fn sanitize(html: &str) -> String {
    let sanitized = SCRIPT_BLOCK.replace_all(html, "");
    let sanitized = BLOCKED_OPEN_TAG.replace_all(&sanitized, "");
    let sanitized = BLOCKED_CLOSE_TAG.replace_all(&sanitized, "");
    let sanitized = STYLE_BLOCK.replace_all(&sanitized, "");
    let sanitized = QUOTED_HANDLER.replace_all(&sanitized, "");
    let sanitized = UNQUOTED_HANDLER.replace_all(&sanitized, "");
    DANGEROUS_SCHEMES.replace_all(&sanitized, "").into_owned()
}
