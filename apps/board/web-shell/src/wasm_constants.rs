//! The DOM contract: element identities and classes the server
//! templates render, plus the user-facing notice strings.

pub(crate) const SEARCH_BUTTON_ID: &str = "searchButton";
pub(crate) const SEARCH_DIALOG_ID: &str = "searchDialog";
pub(crate) const CLOSE_SEARCH_DIALOG_ID: &str = "closeSearchDialog";
pub(crate) const EXECUTE_SEARCH_ID: &str = "executeSearch";
pub(crate) const SEARCH_KEYWORD_INPUT_ID: &str = "searchKeywordInput";
pub(crate) const CLEAR_SEARCH_BUTTON_ID: &str = "clearSearchButton";
pub(crate) const BBS_ID_HIDDEN_ID: &str = "bbsIdHidden";
pub(crate) const SEARCH_INFO_ID: &str = "searchInfo";
pub(crate) const SEARCH_KEYWORD_DISPLAY_ID: &str = "searchKeywordDisplay";
pub(crate) const EMOJI_BUTTON_ID: &str = "emojiButton";
pub(crate) const EMOJI_DIALOG_ID: &str = "emojiDialog";
pub(crate) const CLOSE_EMOJI_DIALOG_ID: &str = "closeEmojiDialog";
pub(crate) const EMOJI_GRID_ID: &str = "emojiGrid";
pub(crate) const POST_FORM_ID: &str = "postForm";
pub(crate) const NAME_INPUT_ID: &str = "nameInput";
pub(crate) const MESSAGE_INPUT_ID: &str = "messageInput";

pub(crate) const DIALOG_ACTIVE_CLASS: &str = "active";
pub(crate) const EMOJI_BUTTON_CLASS: &str = "emoji-button";

pub(crate) const POST_LIST_SELECTOR: &str = ".posts-list";
pub(crate) const POST_ITEM_SELECTOR: &str = ".post-item";
pub(crate) const POST_DATE_SELECTOR: &str = ".post-date";
pub(crate) const LIKE_BUTTON_SELECTOR: &str = ".btn-good";
pub(crate) const DISLIKE_BUTTON_SELECTOR: &str = ".btn-bad";
pub(crate) const SORT_OPTION_SELECTOR: &str = "input[name=\"sort\"]";

/// Delay before focusing the keyword input, so the dialog's open
/// transition gets a frame to render first.
pub(crate) const KEYWORD_FOCUS_DELAY_MS: u32 = 100;

pub(crate) const EMPTY_KEYWORD_NOTICE: &str = "検索キーワードを入力してください";
pub(crate) const LIKE_PRESSED_LOG: &str = "いいね！が押されました";
pub(crate) const DISLIKE_PRESSED_LOG: &str = "よくないねが押されました";
