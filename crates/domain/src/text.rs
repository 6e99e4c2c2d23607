//! Word-level text helpers shared by the catalog, classifier, and deviation detector.

/// Splits text into lowercase alphanumeric words.
#[must_use]
pub fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[must_use]
pub fn normalize(text: &str) -> String {
    words(text).join(" ")
}

#[must_use]
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a = a.chars().collect::<Vec<_>>();
    let b = b.chars().collect::<Vec<_>>();
    let mut previous = (0..=b.len()).collect::<Vec<_>>();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

/// Edit distance scaled to a similarity in [0, 1], where 1 means identical.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn similarity(a: &str, b: &str) -> f32 {
    let len = a.chars().count().max(b.chars().count());
    if len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f32 / len as f32
}

/// Checks whether a keyword matches a single word, allowing plural forms.
#[must_use]
pub fn word_matches(word: &str, keyword: &str) -> bool {
    word == keyword
        || word
            .strip_prefix(keyword)
            .is_some_and(|suffix| suffix == "s" || suffix == "es")
}

/// Checks whether the words of `phrase` occur as a contiguous run in `haystack`.
///
/// The last word of the phrase may appear in plural form.
#[must_use]
pub fn contains_phrase(haystack: &[String], phrase: &str) -> bool {
    position_of_phrase(haystack, phrase).is_some()
}

#[must_use]
pub fn position_of_phrase(haystack: &[String], phrase: &str) -> Option<usize> {
    let needle = words(phrase);
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    let last = needle.len() - 1;
    haystack.windows(needle.len()).position(|window| {
        window
            .iter()
            .zip(&needle)
            .enumerate()
            .all(|(i, (word, keyword))| {
                if i == last {
                    word_matches(word, keyword)
                } else {
                    word == keyword
                }
            })
    })
}

#[must_use]
pub fn contains_any(haystack: &[String], phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| contains_phrase(haystack, phrase))
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Pull-Up Bar", vec!["pull", "up", "bar"])]
    #[case("  DB   bench, press ", vec!["db", "bench", "press"])]
    #[case("", vec![])]
    fn test_words(#[case] text: &str, #[case] expected: Vec<&str>) {
        assert_eq!(words(text), expected);
    }

    #[rstest]
    #[case("leg extension machine", "Leg Extension Machine")]
    #[case("BARBELL row", "Barbell Row")]
    #[case("  z-bar press ", "Z-bar Press")]
    fn test_title_case(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(title_case(text), expected);
    }

    #[rstest]
    #[case("kitten", "sitting", 3)]
    #[case("squat", "squat", 0)]
    #[case("", "row", 3)]
    #[case("barbell bench press", "dumbbell bench press", 4)]
    fn test_levenshtein(#[case] a: &str, #[case] b: &str, #[case] expected: usize) {
        assert_eq!(levenshtein(a, b), expected);
    }

    #[rstest]
    #[case("barbell bench press", "dumbbell bench press", 0.8)]
    #[case("squat", "squat", 1.0)]
    #[case("", "", 1.0)]
    #[case("abc", "xyz", 0.0)]
    fn test_similarity(#[case] a: &str, #[case] b: &str, #[case] expected: f32) {
        assert_approx_eq!(similarity(a, b), expected, 0.001);
    }

    #[rstest]
    #[case("Walking Lunges", "lunge", true)]
    #[case("Pull Up Bar Hang", "pull up", true)]
    #[case("Pull Ups", "pull up", true)]
    #[case("Pullover", "pull up", false)]
    #[case("Leg Press", "press leg", false)]
    #[case("Dips", "dip", true)]
    #[case("Dipper", "dip", false)]
    fn test_contains_phrase(#[case] text: &str, #[case] phrase: &str, #[case] expected: bool) {
        assert_eq!(contains_phrase(&words(text), phrase), expected);
    }
}
