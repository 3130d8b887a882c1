//! Plain-text composition of a lesson's spoken rendition.

use crate::catalog::Lesson;
use once_cell::sync::Lazy;
use regex::Regex;

static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Build the text handed to the speech engine: the lesson body with markup
/// tags removed, followed by the enumerated key takeaways when present.
///
/// Tag removal only; entities are left as written. Pure function of the
/// lesson.
pub fn compose(lesson: &Lesson) -> String {
    let mut text = MARKUP_TAG.replace_all(&lesson.content, "").into_owned();

    if !lesson.key_takeaways.is_empty() {
        let takeaways = lesson
            .key_takeaways
            .iter()
            .enumerate()
            .map(|(i, point)| format!("{}. {}", i + 1, point))
            .collect::<Vec<_>>()
            .join(". ");
        if !text.is_empty() {
            text.push_str(". ");
        }
        text.push_str("Key takeaways: ");
        text.push_str(&takeaways);
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(content: &str, takeaways: &[&str]) -> Lesson {
        Lesson {
            id: "l1".to_string(),
            title: "Test".to_string(),
            content: content.to_string(),
            key_takeaways: takeaways.iter().map(|s| s.to_string()).collect(),
            quiz: None,
        }
    }

    #[test]
    fn test_strips_markup_and_appends_takeaways() {
        let composed = compose(&lesson("<p>Hello <b>world</b></p>", &["Be kind"]));
        assert_eq!(composed, "Hello world. Key takeaways: 1. Be kind");
    }

    #[test]
    fn test_plain_content_passes_through() {
        assert_eq!(compose(&lesson("Just text", &[])), "Just text");
    }

    #[test]
    fn test_no_tag_characters_survive() {
        let composed = compose(&lesson("<div><ul><li>a</li><li>b</li></ul></div>", &[]));
        assert!(!composed.contains('<'));
        assert!(!composed.contains('>'));
        assert_eq!(composed, "ab");
    }

    #[test]
    fn test_takeaways_enumerated_in_order() {
        let composed = compose(&lesson("Body", &["first", "second", "third"]));
        assert_eq!(
            composed,
            "Body. Key takeaways: 1. first. 2. second. 3. third"
        );
    }

    #[test]
    fn test_empty_content_yields_takeaways_only() {
        let composed = compose(&lesson("", &["Only point"]));
        assert_eq!(composed, "Key takeaways: 1. Only point");
    }

    #[test]
    fn test_empty_lesson_yields_empty_string() {
        assert_eq!(compose(&lesson("", &[])), "");
    }
}
