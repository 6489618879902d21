//! Splitting, joining and tokenizing for textkit.
//!
//! `split` keeps empty elements and supports a part cap whose final element
//! carries the unsplit remainder. Multi-delimiter splitting is
//! order-dependent by contract: delimiters apply in the order supplied, and
//! once the cap is reached later delimiters never run. `tokenize` treats
//! its delimiters as a character set and drops empty tokens.

use itertools::Itertools;

/// Splits on a delimiter string, keeping empty elements.
///
/// Empty input yields an empty vector (not one empty element); an empty
/// delimiter yields the whole input as one element. With `max_parts` > 0
/// the result holds at most that many elements, the last one containing
/// the rest of the input unsplit.
pub fn split(input: &str, delimiter: &str, max_parts: usize) -> Vec<String> {
    let mut result = Vec::new();
    if input.is_empty() {
        return result;
    }
    if delimiter.is_empty() {
        result.push(input.to_string());
        return result;
    }

    let mut remaining = max_parts;
    let mut pos = 0;
    loop {
        if max_parts != 0 {
            remaining -= 1;
            if remaining == 0 {
                result.push(input[pos..].to_string());
                break;
            }
        }
        match input[pos..].find(delimiter) {
            Some(found) => {
                let at = pos + found;
                result.push(input[pos..at].to_string());
                pos = at + delimiter.len();
            }
            None => {
                result.push(input[pos..].to_string());
                break;
            }
        }
    }
    result
}

/// Splits on several delimiter strings at once by first normalizing every
/// delimiter after the first into the first, then splitting on that.
/// Adjacent matches of different delimiters interact exactly as that
/// normalization implies.
pub fn split_any<S: AsRef<str>>(input: &str, delimiters: &[S]) -> Vec<String> {
    let mut result = Vec::new();
    if input.is_empty() {
        return result;
    }
    let Some(first) = delimiters.first() else {
        result.push(input.to_string());
        return result;
    };
    let mut normalized = input.to_string();
    for delimiter in &delimiters[1..] {
        normalized = normalized.replace(delimiter.as_ref(), first.as_ref());
    }
    split(&normalized, first.as_ref(), 0)
}

/// Splits a list of strings by several delimiters, applying the delimiters
/// in order over the whole list.
///
/// With a part cap, splitting stops as soon as the list reaches
/// `max_parts` items; later strings pass through unsplit and later
/// delimiters are skipped. This is deliberately different from splitting by
/// all delimiters at once: with a cap of 3, `"a/b#c/d"` over `["/", "#"]`
/// yields `a`, `b#c`, `d` — not `a`, `b`, `c/d`.
pub fn split_multi<S1, S2>(input: &[S1], delimiters: &[S2], max_parts: usize) -> Vec<String>
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    if input.is_empty() {
        return Vec::new();
    }
    let mut results: Vec<String> = input.iter().map(|s| s.as_ref().to_string()).collect();
    if delimiters.is_empty() || (max_parts > 0 && max_parts <= input.len()) {
        return results;
    }

    if max_parts == 0 {
        for delimiter in delimiters {
            let mut next = Vec::new();
            for s in &results {
                next.extend(split(s, delimiter.as_ref(), 0));
            }
            results = next;
        }
        return results;
    }

    // capped: track how many new items may still be produced, keeping
    // strings whole once the budget is spent
    let mut budget = max_parts - results.len();
    for delimiter in delimiters {
        let mut next = Vec::new();
        for s in &results {
            if budget > 0 {
                let parts = split(s, delimiter.as_ref(), budget + 1);
                budget = budget + 1 - parts.len();
                next.extend(parts);
            } else {
                next.push(s.clone());
            }
        }
        results = next;
        budget = max_parts.saturating_sub(results.len());
        if budget == 0 {
            break;
        }
    }
    results
}

/// Concatenates with the delimiter between elements and no trailing
/// delimiter. An empty collection joins to an empty string.
pub fn join<I>(strings: I, delimiter: &str) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    strings
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .join(delimiter)
}

/// Splits on a set of single delimiter characters, dropping empty tokens.
pub fn tokenize(input: &str, delimiters: &str) -> Vec<String> {
    input
        .split(|c: char| delimiters.contains(c))
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        assert_eq!(
            split("g,h,ij,k,lm,,n", ",", 0),
            vec!["g", "h", "ij", "k", "lm", "", "n"]
        );
    }

    #[test]
    fn test_split_empty_input() {
        assert_eq!(split("", ",", 0), Vec::<String>::new());
    }

    #[test]
    fn test_split_empty_delimiter() {
        assert_eq!(split("abc", "", 0), vec!["abc"]);
    }

    #[test]
    fn test_split_edge_delimiters() {
        assert_eq!(split(",a,", ",", 0), vec!["", "a", ""]);
        assert_eq!(split(",,", ",", 0), vec!["", "", ""]);
    }

    #[test]
    fn test_split_max_parts() {
        assert_eq!(split("a,b,c,d", ",", 2), vec!["a", "b,c,d"]);
        assert_eq!(split("a,b,c,d", ",", 1), vec!["a,b,c,d"]);
        assert_eq!(split("a,b,c,d", ",", 10), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_split_multichar_delimiter() {
        assert_eq!(split("a::b::c", "::", 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_any() {
        assert_eq!(split_any("a/b#c", &["/", "#"]), vec!["a", "b", "c"]);
        assert_eq!(split_any("abc", &[] as &[&str]), vec!["abc"]);
        assert_eq!(split_any("", &["/"]), Vec::<String>::new());
    }

    #[test]
    fn test_split_multi_uncapped() {
        let parts = split_multi(&["a/b#c/d"], &["/", "#"], 0);
        assert_eq!(parts, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_split_multi_cap_is_order_dependent() {
        // the cap stops the first delimiter before the second ever runs
        let parts = split_multi(&["a/b#c/d"], &["/", "#"], 3);
        assert_eq!(parts, vec!["a", "b#c", "d"]);
    }

    #[test]
    fn test_split_multi_cap_at_input_size() {
        let input = vec!["a/b".to_string(), "c/d".to_string()];
        assert_eq!(split_multi(&input, &["/"], 2), vec!["a/b", "c/d"]);
    }

    #[test]
    fn test_split_multi_empty() {
        assert_eq!(
            split_multi(&[] as &[&str], &["/"], 0),
            Vec::<String>::new()
        );
        assert_eq!(split_multi(&["a/b"], &[] as &[&str], 0), vec!["a/b"]);
    }

    #[test]
    fn test_join() {
        assert_eq!(join(["a", "b", "c"], ","), "a,b,c");
        assert_eq!(join(["a", "b", "c", "de", ",", "fg", ","], ","), "a,b,c,de,,,fg,,");
        assert_eq!(join([] as [&str; 0], ","), "");
        assert_eq!(join(["solo"], ","), "solo");
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("a,,b", ","), vec!["a", "b"]);
        assert_eq!(tokenize(",a,b,", ","), vec!["a", "b"]);
        assert_eq!(tokenize("a,b;c", ",;"), vec!["a", "b", "c"]);
        assert_eq!(tokenize("", ","), Vec::<String>::new());
        assert_eq!(tokenize(",,,", ","), Vec::<String>::new());
    }

    #[test]
    fn test_split_join_round_trip() {
        let original = "g,h,ij,k,lm,,n";
        assert_eq!(join(split(original, ",", 0), ","), original);
    }
}
