//! Split a normalized line at sentence-final punctuation.

/// Split `line` at every run of spaces that directly follows `.`, `!` or `?`.
///
/// The punctuation stays with the sentence it ends. Pieces are returned
/// untrimmed and may be empty; callers filter them. Only the ASCII space
/// separates sentences; tabs do not.
pub fn split_sentences(line: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let bytes = line.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let is_terminal = matches!(bytes[i], b'.' | b'!' | b'?');
        if is_terminal && i + 1 < bytes.len() && bytes[i + 1] == b' ' {
            pieces.push(&line[start..=i]);
            // Swallow the whole run of spaces.
            let mut j = i + 1;
            while j < bytes.len() && bytes[j] == b' ' {
                j += 1;
            }
            start = j;
            i = j;
            continue;
        }
        i += 1;
    }

    pieces.push(&line[start..]);
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_basic_sentences() {
        let pieces = split_sentences("hello world. this is a test. final sentence.");
        assert_eq!(
            pieces,
            vec!["hello world.", "this is a test.", "final sentence."]
        );
    }

    #[test]
    fn handles_empty_string() {
        assert_eq!(split_sentences(""), vec![""]);
    }

    #[test]
    fn handles_no_punctuation() {
        assert_eq!(
            split_sentences("this has no ending punctuation"),
            vec!["this has no ending punctuation"]
        );
    }

    #[test]
    fn handles_question_and_exclamation() {
        let pieces = split_sentences("is this working?  yes it is! great.");
        assert_eq!(pieces, vec!["is this working?", "yes it is!", "great."]);
    }

    #[test]
    fn trailing_space_leaves_an_empty_piece() {
        assert_eq!(split_sentences("done. "), vec!["done.", ""]);
    }

    #[test]
    fn punctuation_without_space_does_not_split() {
        assert_eq!(split_sentences("version 3.5 is out"), vec!["version 3.5 is out"]);
    }

    #[test]
    fn tab_after_period_does_not_split() {
        assert_eq!(split_sentences("one.\ttwo"), vec!["one.\ttwo"]);
    }
}
