//! Plain-text rendering of lookup results

use hazard_lookup::{DetailView, Suggestion};

/// One line per suggestion, highlighted head in brackets: `[1.1]A`
pub(crate) fn suggestions(list: &[Suggestion]) -> String {
    list.iter()
        .map(|suggestion| {
            let (head, rest) = suggestion.parts();
            format!("[{head}]{rest}\n")
        })
        .collect()
}

/// Detail panel: title, description, compatibility
pub(crate) fn detail(view: &DetailView) -> String {
    format!(
        "{}\n\nDescription:\n  {}\n\nCompatibility:\n  {}\n",
        view.title,
        view.description(),
        view.compatibility()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hazard_test_utils::record;
    use pretty_assertions::assert_eq;

    #[test]
    fn suggestions_bracket_the_highlight() {
        let list = [
            Suggestion {
                code: "1.1A".into(),
                highlight_split: 3,
            },
            Suggestion {
                code: "1.1B".into(),
                highlight_split: 4,
            },
        ];
        assert_eq!(suggestions(&list), "[1.1]A\n[1.1B]\n");
        assert_eq!(suggestions(&[]), "");
    }

    #[test]
    fn detail_uses_placeholder() {
        let view = DetailView::from(record("1.6N", "Extremely insensitive articles.", ""));
        assert_eq!(
            detail(&view),
            "Hazard Division 1.6N\n\nDescription:\n  Extremely insensitive articles.\n\nCompatibility:\n  None\n"
        );
    }
}
