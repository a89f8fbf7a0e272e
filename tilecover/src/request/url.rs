//! KVP and REST request URL assembly.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes percent-encoded in KVP parameter values: everything outside the
/// RFC 3986 unreserved set.
const KVP_VALUE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Everything a tile URL names, borrowed from the resolving request.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TileUrlParams<'a> {
    pub layer: &'a str,
    pub style: &'a str,
    pub format: &'a str,
    pub matrix_set: &'a str,
    pub matrix: &'a str,
    pub row: u32,
    pub col: u32,
    pub time: Option<&'a str>,
}

/// Assembles a KVP GetTile URL onto a base endpoint.
///
/// Parameters follow the standard order; values are percent-encoded. A
/// base that already carries a query keeps it, and trailing `?`/`&`
/// separators on the base are normalized away first.
pub(crate) fn kvp_url(base: &str, params: &TileUrlParams<'_>) -> String {
    let base = base.trim_end_matches(['?', '&']);
    let separator = if base.contains('?') { '&' } else { '?' };

    let mut url = format!(
        "{base}{separator}SERVICE=WMTS&REQUEST=GetTile&VERSION=1.0.0\
         &LAYER={}&STYLE={}&FORMAT={}&TILEMATRIXSET={}&TILEMATRIX={}&TILEROW={}&TILECOL={}",
        encode(params.layer),
        encode(params.style),
        encode(params.format),
        encode(params.matrix_set),
        encode(params.matrix),
        params.row,
        params.col,
    );
    if let Some(time) = params.time {
        url.push_str("&TIME=");
        url.push_str(&encode(time));
    }
    url
}

/// Substitutes request values into a REST resource template.
///
/// Tokens are matched case-insensitively, as capabilities documents spell
/// them inconsistently. Values are substituted verbatim; REST templates
/// are expected to place them in path segments.
pub(crate) fn rest_url(template: &str, params: &TileUrlParams<'_>) -> String {
    let mut url = replace_token(template, "{layer}", params.layer);
    url = replace_token(&url, "{style}", params.style);
    url = replace_token(&url, "{tilematrixset}", params.matrix_set);
    url = replace_token(&url, "{tilematrix}", params.matrix);
    url = replace_token(&url, "{tilerow}", &params.row.to_string());
    url = replace_token(&url, "{tilecol}", &params.col.to_string());
    if let Some(time) = params.time {
        url = replace_token(&url, "{time}", time);
    }
    url
}

/// Percent-encodes everything outside the unreserved set.
fn encode(value: &str) -> String {
    utf8_percent_encode(value, KVP_VALUE_SET).to_string()
}

/// Replaces every occurrence of an ASCII token, ignoring case.
fn replace_token(template: &str, token: &str, value: &str) -> String {
    let haystack = template.to_ascii_lowercase();
    let needle = token.to_ascii_lowercase();

    let mut out = String::with_capacity(template.len());
    let mut rest = 0;
    while let Some(found) = haystack[rest..].find(&needle) {
        let start = rest + found;
        out.push_str(&template[rest..start]);
        out.push_str(value);
        rest = start + needle.len();
    }
    out.push_str(&template[rest..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> TileUrlParams<'static> {
        TileUrlParams {
            layer: "aerial",
            style: "default",
            format: "image/png",
            matrix_set: "WebMercatorQuad",
            matrix: "2",
            row: 1,
            col: 2,
            time: None,
        }
    }

    #[test]
    fn test_kvp_url_carries_the_standard_parameters_in_order() {
        let url = kvp_url("https://wmts.example.com/tiles", &params());
        assert_eq!(
            url,
            "https://wmts.example.com/tiles?SERVICE=WMTS&REQUEST=GetTile&VERSION=1.0.0\
             &LAYER=aerial&STYLE=default&FORMAT=image%2Fpng&TILEMATRIXSET=WebMercatorQuad\
             &TILEMATRIX=2&TILEROW=1&TILECOL=2"
        );
    }

    #[test]
    fn test_kvp_url_appends_to_an_existing_query() {
        let url = kvp_url("https://wmts.example.com/tiles?key=abc", &params());
        assert!(url.starts_with("https://wmts.example.com/tiles?key=abc&SERVICE=WMTS"));
    }

    #[test]
    fn test_kvp_url_normalizes_trailing_separators() {
        let plain = kvp_url("https://wmts.example.com/tiles", &params());
        assert_eq!(kvp_url("https://wmts.example.com/tiles?", &params()), plain);
        let with_query = kvp_url("https://wmts.example.com/tiles?key=abc", &params());
        assert_eq!(
            kvp_url("https://wmts.example.com/tiles?key=abc&", &params()),
            with_query
        );
    }

    #[test]
    fn test_kvp_url_includes_time_when_configured() {
        let mut params = params();
        params.time = Some("2024-06-01T12:00:00Z");
        let url = kvp_url("https://wmts.example.com/tiles", &params);
        assert!(url.ends_with("&TIME=2024-06-01T12%3A00%3A00Z"));
    }

    #[test]
    fn test_encode_keeps_unreserved_and_escapes_the_rest() {
        assert_eq!(encode("image/png"), "image%2Fpng");
        assert_eq!(encode("a b"), "a%20b");
        assert_eq!(encode("plain-name_1.0~x"), "plain-name_1.0~x");
        // non-ASCII is escaped per UTF-8 byte
        assert_eq!(encode("münchen"), "m%C3%BCnchen");
    }

    #[test]
    fn test_rest_url_substitutes_all_tokens() {
        let url = rest_url(
            "https://example.com/{Layer}/{Style}/{TileMatrixSet}/{TileMatrix}/{TileCol}/{TileRow}.png",
            &params(),
        );
        assert_eq!(url, "https://example.com/aerial/default/WebMercatorQuad/2/2/1.png");
    }

    #[test]
    fn test_rest_url_matches_tokens_case_insensitively() {
        let url = rest_url("https://example.com/{TILEMATRIX}/{tilecol}/{TileRow}", &params());
        assert_eq!(url, "https://example.com/2/2/1");
    }

    #[test]
    fn test_rest_url_leaves_unknown_tokens_alone() {
        let url = rest_url("https://example.com/{TileMatrix}/{unknown}", &params());
        assert_eq!(url, "https://example.com/2/{unknown}");
    }

    #[test]
    fn test_replace_token_handles_repeats_and_missing() {
        assert_eq!(replace_token("{a}/{a}", "{a}", "x"), "x/x");
        assert_eq!(replace_token("nothing here", "{a}", "x"), "nothing here");
    }
}
