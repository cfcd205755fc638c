//! Search and filter navigation.
//!
//! The listing pages encode their filter entirely in the URL query
//! string (`bbsId`, `keyword`, `page`); applying a filter is a full-page
//! navigation, never an in-page update. This module owns the query
//! parsing and URL building; the shell only reads the current location
//! and hands the result to the browser.

pub const BBS_ID_PARAM: &str = "bbsId";
pub const KEYWORD_PARAM: &str = "keyword";
pub const PAGE_PARAM: &str = "page";

pub const HISTORY_PATH: &str = "/bbs/history";
pub const BOARD_PATH: &str = "/";

/// Which listing the page is currently showing. Decides where a search
/// or clear action navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingView {
    Board,
    History,
}

impl ListingView {
    /// The history view keeps its own listing path; every other page
    /// searches against the board root.
    pub fn from_pathname(pathname: &str) -> Self {
        if pathname.contains(HISTORY_PATH) {
            ListingView::History
        } else {
            ListingView::Board
        }
    }

    pub fn base_path(self) -> &'static str {
        match self {
            ListingView::Board => BOARD_PATH,
            ListingView::History => HISTORY_PATH,
        }
    }
}

/// Read one query parameter from a `location.search` string (with or
/// without the leading `?`), decoded. Returns the first match.
pub fn query_param(query: &str, name: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| decode_component(value))
}

/// Board id resolution order: the current query string first, then the
/// hidden field the server renders into the page, then empty (the server
/// treats an empty id as the default board). An empty query value falls
/// through to the hidden field.
pub fn resolve_bbs_id(query: &str, hidden_field: Option<&str>) -> String {
    if let Some(id) = query_param(query, BBS_ID_PARAM) {
        if !id.is_empty() {
            return id;
        }
    }
    hidden_field.unwrap_or("").to_string()
}

/// Build the navigation target for a search (`keyword` present) or a
/// cleared filter (`keyword` absent). The page index always resets to 0
/// on a new filter action.
pub fn listing_url(view: ListingView, bbs_id: &str, keyword: Option<&str>) -> String {
    let base = view.base_path();
    match keyword {
        Some(keyword) => format!(
            "{base}?{BBS_ID_PARAM}={bbs_id}&{KEYWORD_PARAM}={}&{PAGE_PARAM}=0",
            urlencoding::encode(keyword)
        ),
        None => format!("{base}?{BBS_ID_PARAM}={bbs_id}&{PAGE_PARAM}=0"),
    }
}

/// Query values decode `+` as space before percent-decoding, the way the
/// browser's own query parsing reads them. Undecodable bytes keep the
/// raw text rather than failing the read.
fn decode_component(value: &str) -> String {
    let spaced = value.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pathname_with_history_marker_selects_history_view() {
        assert_eq!(
            ListingView::from_pathname("/bbs/history"),
            ListingView::History
        );
        assert_eq!(
            ListingView::from_pathname("/app/bbs/history/"),
            ListingView::History
        );
        assert_eq!(ListingView::from_pathname("/"), ListingView::Board);
        assert_eq!(ListingView::from_pathname("/bbs"), ListingView::Board);
    }

    #[test]
    fn query_param_reads_and_decodes_values() {
        let query = "?bbsId=5&keyword=caf%C3%A9+time&page=2";
        assert_eq!(query_param(query, "bbsId").as_deref(), Some("5"));
        assert_eq!(query_param(query, "keyword").as_deref(), Some("café time"));
        assert_eq!(query_param(query, "page").as_deref(), Some("2"));
        assert_eq!(query_param(query, "missing"), None);
    }

    #[test]
    fn query_param_tolerates_bare_keys_and_missing_prefix() {
        assert_eq!(query_param("keyword", "keyword").as_deref(), Some(""));
        assert_eq!(query_param("bbsId=7", "bbsId").as_deref(), Some("7"));
        assert_eq!(query_param("", "bbsId"), None);
    }

    #[test]
    fn resolve_bbs_id_prefers_query_then_hidden_field() {
        assert_eq!(resolve_bbs_id("?bbsId=5", Some("9")), "5");
        assert_eq!(resolve_bbs_id("?keyword=x", Some("9")), "9");
        assert_eq!(resolve_bbs_id("?bbsId=", Some("9")), "9");
        assert_eq!(resolve_bbs_id("", None), "");
    }

    #[test]
    fn search_navigation_resets_page_and_encodes_keyword() {
        assert_eq!(
            listing_url(ListingView::Board, "5", Some("foo")),
            "/?bbsId=5&keyword=foo&page=0"
        );
        assert_eq!(
            listing_url(ListingView::History, "5", Some("春 祭り")),
            "/bbs/history?bbsId=5&keyword=%E6%98%A5%20%E7%A5%AD%E3%82%8A&page=0"
        );
    }

    #[test]
    fn clear_navigation_drops_the_keyword() {
        assert_eq!(
            listing_url(ListingView::Board, "5", None),
            "/?bbsId=5&page=0"
        );
        assert_eq!(
            listing_url(ListingView::History, "", None),
            "/bbs/history?bbsId=&page=0"
        );
    }
}
