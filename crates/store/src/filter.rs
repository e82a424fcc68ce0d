use analysis::StringProperties;
use nlquery::StringFilters;

/// The filter engine: does `props` satisfy every present constraint?
///
/// Absent fields never reject; an all-absent filter set accepts everything.
/// Length bounds are inclusive, word count is exact, and the character
/// check is a case-sensitive key lookup in the frequency map (which never
/// contains the ASCII space).
pub fn matches(props: &StringProperties, filters: &StringFilters) -> bool {
    if let Some(want) = filters.is_palindrome {
        if props.is_palindrome != want {
            return false;
        }
    }
    if let Some(min) = filters.min_length {
        if props.length < min {
            return false;
        }
    }
    if let Some(max) = filters.max_length {
        if props.length > max {
            return false;
        }
    }
    if let Some(count) = filters.word_count {
        if props.word_count != count {
            return false;
        }
    }
    if let Some(ch) = filters.contains_character {
        if !props.character_frequency_map.contains_key(&ch) {
            return false;
        }
    }
    true
}
