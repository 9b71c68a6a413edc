/// Average silent reading speed used for estimates.
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimate reading time in whole minutes, never less than one.
///
/// Words are whitespace-delimited tokens. Halfway values round to the
/// nearest even minute, so 500 words reads as 2 minutes and 700 as 4.
pub fn reading_time(text: &str) -> u32 {
    let words = text.split_whitespace().count();
    let minutes = (words as f64 / WORDS_PER_MINUTE as f64).round_ties_even() as u32;
    minutes.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[rstest]
    #[case(0, 1)]
    #[case(50, 1)]
    #[case(299, 1)]
    #[case(300, 2)]
    #[case(400, 2)]
    #[case(500, 2)]
    #[case(700, 4)]
    #[case(1000, 5)]
    fn minutes_for_word_count(#[case] count: usize, #[case] expected: u32) {
        assert_eq!(reading_time(&words(count)), expected);
    }

    #[test]
    fn any_whitespace_separates_words() {
        let text = format!("{}\n\t{}", words(200), words(200));
        assert_eq!(reading_time(&text), 2);
    }
}
