use once_cell::sync::Lazy;
use regex::Regex;

static URL_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[url=[^\]]*\](.*?)\[/url\]").expect("valid url tag pattern"));
static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.*?\]").expect("valid tag pattern"));

/// Reduces VNDB's BBCode-flavoured descriptions to plain text.
///
/// Linked text keeps its label, every other `[...]` markup token is dropped.
pub fn clean_description(raw: &str) -> String {
    let unlinked = URL_TAG.replace_all(raw, "$1");
    ANY_TAG.replace_all(&unlinked, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_link_labels() {
        assert_eq!(
            clean_description("Based on [url=/v17]the original game[/url]."),
            "Based on the original game."
        );
    }

    #[test]
    fn strips_other_markup() {
        assert_eq!(
            clean_description("[b]Bold[/b] and [i]italic[/i]."),
            "Bold and italic."
        );
        assert_eq!(
            clean_description("Ending:\n[spoiler]twist[/spoiler]"),
            "Ending:\ntwist"
        );
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(clean_description("No markup here."), "No markup here.");
    }
}
