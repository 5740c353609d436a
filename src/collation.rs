// Name ordering for roster sorting
//
// Three comparison levels over the canonical decomposition (NFD) of each name:
// 1. base letters, case-folded, combining marks stripped ("Flabébé" ~ "flabebe")
// 2. accents, per base letter; an unaccented letter sorts before an accented one
// 3. case; lowercase sorts before uppercase
//
// A later level only decides when every earlier level is equal.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// One base character plus the combining marks that follow it
struct Element {
    base: char,
    marks: Vec<char>,
}

struct CollationKey {
    primary: Vec<char>,
    secondary: Vec<Vec<char>>,
    tertiary: Vec<(bool, char)>,
}

impl CollationKey {
    fn new(name: &str) -> Self {
        let mut elements: Vec<Element> = Vec::new();
        for c in name.nfd() {
            match elements.last_mut() {
                Some(last) if is_combining_mark(c) => last.marks.push(c),
                _ => elements.push(Element {
                    base: c,
                    marks: Vec::new(),
                }),
            }
        }

        CollationKey {
            primary: elements
                .iter()
                .flat_map(|e| e.base.to_lowercase())
                .collect(),
            secondary: elements.iter().map(|e| e.marks.clone()).collect(),
            // `false` sorts first, so lowercase wins the case tiebreak
            tertiary: elements
                .iter()
                .map(|e| (!e.base.is_lowercase(), e.base))
                .collect(),
        }
    }

    fn compare(&self, other: &CollationKey) -> Ordering {
        self.primary
            .cmp(&other.primary)
            .then_with(|| self.secondary.cmp(&other.secondary))
            .then_with(|| self.tertiary.cmp(&other.tertiary))
    }
}

/// Compare two names in ascending collation order
pub fn compare_names(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).compare(&CollationKey::new(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabetical_order() {
        assert_eq!(compare_names("Bulbasaur", "Charmander"), Ordering::Less);
        assert_eq!(compare_names("Squirtle", "Pikachu"), Ordering::Greater);
        assert_eq!(compare_names("Pikachu", "Pikachu"), Ordering::Equal);
    }

    #[test]
    fn test_case_insensitive_primary() {
        // Byte order would put "Zubat" before "abra"
        assert_eq!(compare_names("abra", "Zubat"), Ordering::Less);
        assert_eq!(compare_names("Mew", "mewtwo"), Ordering::Less);
    }

    #[test]
    fn test_lowercase_before_uppercase_on_case_tie() {
        assert_eq!(compare_names("eevee", "Eevee"), Ordering::Less);
        assert_eq!(compare_names("Eevee", "eevee"), Ordering::Greater);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(compare_names("Porygon", "Porygon2"), Ordering::Less);
        assert_eq!(compare_names("", "Ditto"), Ordering::Less);
    }

    #[test]
    fn test_accented_letter_sorts_with_its_base() {
        // Code point order would put 'É' (U+00C9) after every ASCII letter
        assert_eq!(compare_names("Éevee", "Ferret"), Ordering::Less);
        assert_eq!(compare_names("Zubat", "Éevee"), Ordering::Greater);
        assert_eq!(compare_names("Flabébé", "Flabebf"), Ordering::Less);
    }

    #[test]
    fn test_accent_breaks_tie_after_base_letters() {
        assert_eq!(compare_names("Flabebe", "Flabébé"), Ordering::Less);
        assert_eq!(compare_names("Flabébe", "Flabébé"), Ordering::Less);
        // Accent outranks case
        assert_eq!(compare_names("Flabebe", "flabébé"), Ordering::Less);
        assert_eq!(compare_names("éevee", "Éevee"), Ordering::Less);
    }

    #[test]
    fn test_precomposed_and_decomposed_are_equal() {
        assert_eq!(compare_names("Flab\u{e9}b\u{e9}", "Flabe\u{301}be\u{301}"), Ordering::Equal);
    }
}
