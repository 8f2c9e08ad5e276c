//! Best-effort HTML sanitization for untrusted strings.
//!
//! This is a denylist filter, not an HTML sanitizer: it removes markup and a
//! fixed set of characters, it does not parse or validate documents. The
//! steps always run in this order:
//!
//! 1. strip control characters, non-ASCII characters and backticks
//! 2. strip tags and comments, keeping their inner text
//! 3. decode character references (`&amp;`, `&#169;`, `&#xA9;`)
//! 4. delete every character in [`DENYLIST`]
//!
//! Because deletion runs after decoding, `&amp;` ends up removed as well.

/// Characters deleted outright from sanitized output.
pub const DENYLIST: [char; 8] = ['&', '<', '>', '"', '%', '(', ')', '+'];

/// Longest entity body considered when looking for a terminating `;`.
const MAX_ENTITY_LEN: usize = 32;

/// Runs the full sanitization pipeline over `input`.
pub(crate) fn sanitize(input: &str) -> String {
    let filtered = strip_unprintable(input);
    let stripped = strip_tags(&filtered);
    let decoded = decode_entities(&stripped);
    decoded.chars().filter(|c| !DENYLIST.contains(c)).collect()
}

/// Drops ASCII control characters, everything outside ASCII, and backticks.
fn strip_unprintable(input: &str) -> String {
    input
        .chars()
        .filter(|&c| c.is_ascii() && !c.is_ascii_control() && c != '`')
        .collect()
}

/// Removes tags and comments, keeping the text between them.
///
/// A `<` followed by whitespace or at the end of input is literal text. An
/// unterminated tag swallows the rest of the input.
fn strip_tags(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open) = rest.find('<') {
        output.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        if after.is_empty() || after.starts_with(char::is_whitespace) {
            output.push('<');
            rest = after;
        } else if let Some(comment) = after.strip_prefix("!--") {
            rest = comment.find("-->").map_or("", |end| &comment[end + 3..]);
        } else {
            rest = skip_tag(after);
        }
    }

    output.push_str(rest);
    output
}

/// Returns the text after the `>` closing this tag. Quoted attribute values may contain `>`.
fn skip_tag(tag: &str) -> &str {
    let mut quote = None;
    for (idx, c) in tag.char_indices() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(open), c) if c == open => quote = None,
            (None, '>') => return &tag[idx + 1..],
            _ => {}
        }
    }
    ""
}

/// Replaces character references with the characters they name.
///
/// Unknown or malformed references are left untouched.
fn decode_entities(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(amp) = rest.find('&') {
        output.push_str(&rest[..amp]);
        let candidate = &rest[amp + 1..];

        let window = &candidate[..floor_char_boundary(candidate, MAX_ENTITY_LEN + 1)];
        let decoded = window
            .find(';')
            .and_then(|end| decode_entity(&candidate[..end]).map(|c| (c, end)));

        match decoded {
            Some((c, end)) => {
                output.push(c);
                rest = &candidate[end + 1..];
            }
            None => {
                output.push('&');
                rest = candidate;
            }
        }
    }

    output.push_str(rest);
    output
}

/// Largest char boundary of `text` not past `index`.
fn floor_char_boundary(text: &str, index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    (0..=index).rev().find(|&i| text.is_char_boundary(i)).unwrap_or(0)
}

fn decode_entity(body: &str) -> Option<char> {
    if let Some(reference) = body.strip_prefix('#') {
        let code = match reference.strip_prefix(|c: char| c == 'x' || c == 'X') {
            Some(hex) if !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()) => {
                u32::from_str_radix(hex, 16).ok()?
            }
            None if !reference.is_empty() && reference.bytes().all(|b| b.is_ascii_digit()) => {
                reference.parse().ok()?
            }
            _ => return None,
        };
        return char::from_u32(code).filter(|&c| c != '\0');
    }

    if let Some(offset) = LATIN1_ENTITIES.iter().position(|&name| name == body) {
        return u32::try_from(offset)
            .ok()
            .and_then(|offset| char::from_u32(LATIN1_FIRST + offset));
    }

    NAMED_ENTITIES
        .iter()
        .find(|(name, _)| *name == body)
        .map(|&(_, c)| c)
}

/// Code point of the first entry in [`LATIN1_ENTITIES`].
const LATIN1_FIRST: u32 = 0xA0;

/// HTML 4 names for U+00A0 through U+00FF, in code point order.
const LATIN1_ENTITIES: [&str; 96] = [
    "nbsp", "iexcl", "cent", "pound", "curren", "yen", "brvbar", "sect", "uml", "copy", "ordf",
    "laquo", "not", "shy", "reg", "macr", "deg", "plusmn", "sup2", "sup3", "acute", "micro",
    "para", "middot", "cedil", "sup1", "ordm", "raquo", "frac14", "frac12", "frac34", "iquest",
    "Agrave", "Aacute", "Acirc", "Atilde", "Auml", "Aring", "AElig", "Ccedil", "Egrave", "Eacute",
    "Ecirc", "Euml", "Igrave", "Iacute", "Icirc", "Iuml", "ETH", "Ntilde", "Ograve", "Oacute",
    "Ocirc", "Otilde", "Ouml", "times", "Oslash", "Ugrave", "Uacute", "Ucirc", "Uuml", "Yacute",
    "THORN", "szlig", "agrave", "aacute", "acirc", "atilde", "auml", "aring", "aelig", "ccedil",
    "egrave", "eacute", "ecirc", "euml", "igrave", "iacute", "icirc", "iuml", "eth", "ntilde",
    "ograve", "oacute", "ocirc", "otilde", "ouml", "divide", "oslash", "ugrave", "uacute", "ucirc",
    "uuml", "yacute", "thorn", "yuml",
];

/// The remaining HTML 4 entities (markup, Latin Extended, Greek, punctuation,
/// arrows, math and card suits) plus `apos`, in code point order.
const NAMED_ENTITIES: &[(&str, char)] = &[
    ("quot", '"'),
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("apos", '\''),
    ("OElig", '\u{0152}'),
    ("oelig", '\u{0153}'),
    ("Scaron", '\u{0160}'),
    ("scaron", '\u{0161}'),
    ("Yuml", '\u{0178}'),
    ("fnof", '\u{0192}'),
    ("circ", '\u{02C6}'),
    ("tilde", '\u{02DC}'),
    ("Alpha", '\u{0391}'),
    ("Beta", '\u{0392}'),
    ("Gamma", '\u{0393}'),
    ("Delta", '\u{0394}'),
    ("Epsilon", '\u{0395}'),
    ("Zeta", '\u{0396}'),
    ("Eta", '\u{0397}'),
    ("Theta", '\u{0398}'),
    ("Iota", '\u{0399}'),
    ("Kappa", '\u{039A}'),
    ("Lambda", '\u{039B}'),
    ("Mu", '\u{039C}'),
    ("Nu", '\u{039D}'),
    ("Xi", '\u{039E}'),
    ("Omicron", '\u{039F}'),
    ("Pi", '\u{03A0}'),
    ("Rho", '\u{03A1}'),
    ("Sigma", '\u{03A3}'),
    ("Tau", '\u{03A4}'),
    ("Upsilon", '\u{03A5}'),
    ("Phi", '\u{03A6}'),
    ("Chi", '\u{03A7}'),
    ("Psi", '\u{03A8}'),
    ("Omega", '\u{03A9}'),
    ("alpha", '\u{03B1}'),
    ("beta", '\u{03B2}'),
    ("gamma", '\u{03B3}'),
    ("delta", '\u{03B4}'),
    ("epsilon", '\u{03B5}'),
    ("zeta", '\u{03B6}'),
    ("eta", '\u{03B7}'),
    ("theta", '\u{03B8}'),
    ("iota", '\u{03B9}'),
    ("kappa", '\u{03BA}'),
    ("lambda", '\u{03BB}'),
    ("mu", '\u{03BC}'),
    ("nu", '\u{03BD}'),
    ("xi", '\u{03BE}'),
    ("omicron", '\u{03BF}'),
    ("pi", '\u{03C0}'),
    ("rho", '\u{03C1}'),
    ("sigmaf", '\u{03C2}'),
    ("sigma", '\u{03C3}'),
    ("tau", '\u{03C4}'),
    ("upsilon", '\u{03C5}'),
    ("phi", '\u{03C6}'),
    ("chi", '\u{03C7}'),
    ("psi", '\u{03C8}'),
    ("omega", '\u{03C9}'),
    ("thetasym", '\u{03D1}'),
    ("upsih", '\u{03D2}'),
    ("piv", '\u{03D6}'),
    ("ensp", '\u{2002}'),
    ("emsp", '\u{2003}'),
    ("thinsp", '\u{2009}'),
    ("zwnj", '\u{200C}'),
    ("zwj", '\u{200D}'),
    ("lrm", '\u{200E}'),
    ("rlm", '\u{200F}'),
    ("ndash", '\u{2013}'),
    ("mdash", '\u{2014}'),
    ("lsquo", '\u{2018}'),
    ("rsquo", '\u{2019}'),
    ("sbquo", '\u{201A}'),
    ("ldquo", '\u{201C}'),
    ("rdquo", '\u{201D}'),
    ("bdquo", '\u{201E}'),
    ("dagger", '\u{2020}'),
    ("Dagger", '\u{2021}'),
    ("bull", '\u{2022}'),
    ("hellip", '\u{2026}'),
    ("permil", '\u{2030}'),
    ("prime", '\u{2032}'),
    ("Prime", '\u{2033}'),
    ("lsaquo", '\u{2039}'),
    ("rsaquo", '\u{203A}'),
    ("oline", '\u{203E}'),
    ("frasl", '\u{2044}'),
    ("euro", '\u{20AC}'),
    ("image", '\u{2111}'),
    ("weierp", '\u{2118}'),
    ("real", '\u{211C}'),
    ("trade", '\u{2122}'),
    ("alefsym", '\u{2135}'),
    ("larr", '\u{2190}'),
    ("uarr", '\u{2191}'),
    ("rarr", '\u{2192}'),
    ("darr", '\u{2193}'),
    ("harr", '\u{2194}'),
    ("crarr", '\u{21B5}'),
    ("lArr", '\u{21D0}'),
    ("uArr", '\u{21D1}'),
    ("rArr", '\u{21D2}'),
    ("dArr", '\u{21D3}'),
    ("hArr", '\u{21D4}'),
    ("forall", '\u{2200}'),
    ("part", '\u{2202}'),
    ("exist", '\u{2203}'),
    ("empty", '\u{2205}'),
    ("nabla", '\u{2207}'),
    ("isin", '\u{2208}'),
    ("notin", '\u{2209}'),
    ("ni", '\u{220B}'),
    ("prod", '\u{220F}'),
    ("sum", '\u{2211}'),
    ("minus", '\u{2212}'),
    ("lowast", '\u{2217}'),
    ("radic", '\u{221A}'),
    ("prop", '\u{221D}'),
    ("infin", '\u{221E}'),
    ("ang", '\u{2220}'),
    ("and", '\u{2227}'),
    ("or", '\u{2228}'),
    ("cap", '\u{2229}'),
    ("cup", '\u{222A}'),
    ("int", '\u{222B}'),
    ("there4", '\u{2234}'),
    ("sim", '\u{223C}'),
    ("cong", '\u{2245}'),
    ("asymp", '\u{2248}'),
    ("ne", '\u{2260}'),
    ("equiv", '\u{2261}'),
    ("le", '\u{2264}'),
    ("ge", '\u{2265}'),
    ("sub", '\u{2282}'),
    ("sup", '\u{2283}'),
    ("nsub", '\u{2284}'),
    ("sube", '\u{2286}'),
    ("supe", '\u{2287}'),
    ("oplus", '\u{2295}'),
    ("otimes", '\u{2297}'),
    ("perp", '\u{22A5}'),
    ("sdot", '\u{22C5}'),
    ("lceil", '\u{2308}'),
    ("rceil", '\u{2309}'),
    ("lfloor", '\u{230A}'),
    ("rfloor", '\u{230B}'),
    ("lang", '\u{2329}'),
    ("rang", '\u{232A}'),
    ("loz", '\u{25CA}'),
    ("spades", '\u{2660}'),
    ("clubs", '\u{2663}'),
    ("hearts", '\u{2665}'),
    ("diams", '\u{2666}'),
];
