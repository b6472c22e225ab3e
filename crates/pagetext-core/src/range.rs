use thiserror::Error;

/// Zero-based page indices selected by a range expression, in encounter
/// order. Duplicates are preserved: `"1,1,1"` selects page one three
/// times, and assembly will emit that page's text three times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSelection(Vec<usize>);

impl PageSelection {
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeParseError {
    #[error("invalid page range token {0:?}")]
    InvalidToken(String),
}

/// Resolve a user-supplied page-range expression such as `"1-3,5"` into a
/// [`PageSelection`], or `None` for an absent/blank expression ("all
/// pages").
///
/// The grammar is a comma-separated list of 1-based tokens, each either a
/// single integer or an inclusive `A-B` range. Values not strictly
/// greater than zero are dropped before the 0-based conversion. The
/// selection is NOT bounds-checked against any document here: the same
/// selection is shared by every file in a batch, and indices past the end
/// of a particular document are skipped silently at extraction time.
pub fn resolve_page_range(expr: Option<&str>) -> Result<Option<PageSelection>, RangeParseError> {
    match expr {
        Some(raw) if !raw.trim().is_empty() => parse_expression(raw).map(Some),
        _ => Ok(None),
    }
}

fn parse_expression(raw: &str) -> Result<PageSelection, RangeParseError> {
    let mut pages: Vec<i64> = Vec::new();

    for token in raw.split(',') {
        if token.contains('-') {
            let bounds: Vec<&str> = token.split('-').collect();
            if bounds.len() != 2 {
                return Err(RangeParseError::InvalidToken(token.trim().to_string()));
            }
            let start = parse_page(bounds[0], token)?;
            let end = parse_page(bounds[1], token)?;
            // An inverted range (start > end) expands to nothing, it is
            // not an error.
            pages.extend(start..=end);
        } else {
            pages.push(parse_page(token, token)?);
        }
    }

    let indices = pages
        .into_iter()
        .filter(|&page| page > 0)
        .map(|page| (page - 1) as usize)
        .collect();

    Ok(PageSelection(indices))
}

fn parse_page(value: &str, token: &str) -> Result<i64, RangeParseError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| RangeParseError::InvalidToken(token.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(expr: &str) -> Vec<usize> {
        resolve_page_range(Some(expr))
            .unwrap()
            .expect("selection")
            .indices()
            .to_vec()
    }

    #[test]
    fn mixed_ranges_and_singles_preserve_order() {
        assert_eq!(indices("1-3,5"), vec![0, 1, 2, 4]);
        assert_eq!(indices("5,1-2"), vec![4, 0, 1]);
    }

    #[test]
    fn absent_or_blank_means_all_pages() {
        assert_eq!(resolve_page_range(None).unwrap(), None);
        assert_eq!(resolve_page_range(Some("")).unwrap(), None);
        assert_eq!(resolve_page_range(Some("   ")).unwrap(), None);
    }

    #[test]
    fn duplicates_are_preserved() {
        assert_eq!(indices("1,1,1"), vec![0, 0, 0]);
    }

    #[test]
    fn non_positive_pages_are_dropped() {
        assert_eq!(indices("0,2"), vec![1]);
        assert_eq!(indices("0-2"), vec![0, 1]);
    }

    #[test]
    fn inverted_range_is_empty_not_an_error() {
        let selection = resolve_page_range(Some("3-1")).unwrap().unwrap();
        assert!(selection.is_empty());
    }

    #[test]
    fn whitespace_around_tokens_is_tolerated() {
        assert_eq!(indices(" 2 , 4 "), vec![1, 3]);
        assert_eq!(indices("1 - 3"), vec![0, 1, 2]);
    }

    #[test]
    fn malformed_tokens_fail_the_whole_expression() {
        assert!(resolve_page_range(Some("abc")).is_err());
        assert!(resolve_page_range(Some("1,,3")).is_err());
        assert!(resolve_page_range(Some("1-2-3")).is_err());
        assert!(resolve_page_range(Some("-3")).is_err());
        assert!(resolve_page_range(Some("1.5")).is_err());
    }

    #[test]
    fn error_names_the_offending_token() {
        let err = resolve_page_range(Some("1,x-2")).unwrap_err();
        assert_eq!(err, RangeParseError::InvalidToken("x-2".to_string()));
    }
}
