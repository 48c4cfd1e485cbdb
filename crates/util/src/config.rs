//! Parsing for the host-supplied word-count configuration.

use thiserror::Error;

/// Errors produced while parsing a `--word-counts` style list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordCountsError {
    #[error("word count list is empty")]
    Empty,
    #[error("invalid word count '{0}': expected a positive integer")]
    Invalid(String),
    #[error("duplicate word count {0}")]
    Duplicate(usize),
}

/// Parses a comma-separated list of phrase lengths, preserving order.
///
/// Counts must be positive integers and unique; surrounding whitespace per
/// entry is tolerated. The recognized set is open-ended on purpose, so an
/// 18-word option is as valid as the common 12/15/24.
pub fn parse_word_counts(input: &str) -> Result<Vec<usize>, WordCountsError> {
    let mut counts = Vec::new();
    for entry in input.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let count: usize = entry
            .parse()
            .map_err(|_| WordCountsError::Invalid(entry.to_string()))?;
        if count == 0 {
            return Err(WordCountsError::Invalid(entry.to_string()));
        }
        if counts.contains(&count) {
            return Err(WordCountsError::Duplicate(count));
        }
        counts.push(count);
    }
    if counts.is_empty() {
        return Err(WordCountsError::Empty);
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_shape_in_order() {
        assert_eq!(parse_word_counts("24,15,12"), Ok(vec![24, 15, 12]));
        assert_eq!(parse_word_counts(" 12 , 18 "), Ok(vec![12, 18]));
    }

    #[test]
    fn rejects_garbage_zero_and_duplicates() {
        assert_eq!(
            parse_word_counts("24,abc"),
            Err(WordCountsError::Invalid("abc".to_string()))
        );
        assert_eq!(parse_word_counts("0"), Err(WordCountsError::Invalid("0".to_string())));
        assert_eq!(parse_word_counts("12,12"), Err(WordCountsError::Duplicate(12)));
        assert_eq!(parse_word_counts(" , "), Err(WordCountsError::Empty));
    }
}
