//! Display languages, their string tables and the persisted language choice.

pub mod dates;
pub mod language;
pub mod store;
pub mod strings;

pub use language::{Language, UnknownLanguageError};
pub use store::{LANGUAGE_KEY, LocaleStorage, LocaleStore};
pub use strings::Translations;

/// A text split around its first occurrence of a phrase to emphasise.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Highlighted<'a> {
    pub before: &'a str,
    pub highlight: Option<&'a str>,
    pub after: &'a str,
}

#[must_use]
pub fn split_highlight<'a>(text: &'a str, phrase: &str) -> Highlighted<'a> {
    match text.find(phrase).filter(|_| !phrase.is_empty()) {
        Some(start) => {
            let end = start + phrase.len();
            Highlighted {
                before: &text[..start],
                highlight: Some(&text[start..end]),
                after: &text[end..],
            }
        }
        None => Highlighted {
            before: text,
            highlight: None,
            after: "",
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::i18n::{Highlighted, Language, split_highlight};

    #[test]
    fn highlight_is_found_in_both_languages() {
        for language in Language::ALL {
            let about = &language.strings().about;
            let split = split_highlight(about.description, about.cbt_highlight);
            assert_eq!(split.highlight, Some(about.cbt_highlight));
            assert_eq!(
                format!("{}{}{}", split.before, about.cbt_highlight, split.after),
                about.description
            );
        }
    }

    #[test]
    fn missing_phrase_keeps_text_whole() {
        assert_eq!(
            split_highlight("plain text", "absent"),
            Highlighted {
                before: "plain text",
                highlight: None,
                after: "",
            }
        );
        assert_eq!(split_highlight("plain", "").highlight, None);
    }
}
