//! Client-side ordering of the rendered post list.
//!
//! The sorter never touches post content; it reads the displayed
//! timestamp of each item and tells the shell in which order to
//! re-append the existing nodes.

use chrono::NaiveDateTime;

const POST_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Sort direction carried by the `sort` radio controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortDirection::Ascending),
            "desc" => Some(SortDirection::Descending),
            _ => None,
        }
    }
}

/// Parse a displayed post timestamp (`YYYY/MM/DD HH:MM`). Slashes are
/// normalized to dashes first, so timestamps already rendered with
/// dashes parse the same way. Returns `None` for malformed text.
pub fn parse_post_timestamp(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&text.trim().replace('/', "-"), POST_DATE_FORMAT).ok()
}

/// Item indexes in display order for the given direction.
///
/// A malformed timestamp sorts as the earliest possible instant, so
/// malformed rows lead in ascending order and trail in descending
/// order. Ties keep their current relative order (stable sort).
pub fn ordered_indices(
    timestamps: &[Option<NaiveDateTime>],
    direction: SortDirection,
) -> Vec<usize> {
    let key = |index: usize| timestamps[index].unwrap_or(NaiveDateTime::MIN);
    let mut indices: Vec<usize> = (0..timestamps.len()).collect();
    match direction {
        SortDirection::Ascending => indices.sort_by(|&a, &b| key(a).cmp(&key(b))),
        SortDirection::Descending => indices.sort_by(|&a, &b| key(b).cmp(&key(a))),
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamps(texts: &[&str]) -> Vec<Option<NaiveDateTime>> {
        texts.iter().map(|text| parse_post_timestamp(text)).collect()
    }

    #[test]
    fn sort_values_map_to_directions() {
        assert_eq!(
            SortDirection::from_value("asc"),
            Some(SortDirection::Ascending)
        );
        assert_eq!(
            SortDirection::from_value("desc"),
            Some(SortDirection::Descending)
        );
        assert_eq!(SortDirection::from_value("newest"), None);
    }

    #[test]
    fn parses_slash_and_dash_timestamps() {
        let slashed = parse_post_timestamp("2024/01/01 10:00");
        let dashed = parse_post_timestamp("2024-01-01 10:00");
        assert!(slashed.is_some());
        assert_eq!(slashed, dashed);
        assert_eq!(parse_post_timestamp("first post!"), None);
        assert_eq!(parse_post_timestamp("2024/13/40 99:99"), None);
    }

    #[test]
    fn ascending_order_puts_earlier_posts_first() {
        let stamps = stamps(&[
            "2024/01/01 10:00",
            "2024/03/01 09:00",
            "2024/02/01 08:00",
        ]);
        assert_eq!(
            ordered_indices(&stamps, SortDirection::Ascending),
            vec![0, 2, 1]
        );
    }

    #[test]
    fn descending_order_is_the_reverse_of_ascending() {
        let stamps = stamps(&[
            "2024/01/01 10:00",
            "2024/03/01 09:00",
            "2024/02/01 08:00",
        ]);
        assert_eq!(
            ordered_indices(&stamps, SortDirection::Descending),
            vec![1, 2, 0]
        );
    }

    #[test]
    fn malformed_dates_sort_as_earliest() {
        let stamps = stamps(&["2024/01/01 10:00", "not a date", "2024/02/01 08:00"]);
        assert_eq!(
            ordered_indices(&stamps, SortDirection::Ascending),
            vec![1, 0, 2]
        );
        assert_eq!(
            ordered_indices(&stamps, SortDirection::Descending),
            vec![2, 0, 1]
        );
    }

    #[test]
    fn equal_timestamps_keep_their_relative_order() {
        let stamps = stamps(&[
            "2024/01/01 10:00",
            "2024/01/01 10:00",
            "2023/12/31 23:59",
        ]);
        assert_eq!(
            ordered_indices(&stamps, SortDirection::Ascending),
            vec![2, 0, 1]
        );
        assert_eq!(
            ordered_indices(&stamps, SortDirection::Descending),
            vec![0, 1, 2]
        );
    }
}
