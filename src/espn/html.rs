//! DOM helpers over `scraper`.

use scraper::{ElementRef, Html, Selector};

use crate::{espn::rules::collapse_whitespace, PrError, Result};

/// Parse page bytes leniently; invalid UTF-8 is replaced rather than rejected.
pub fn parse_page(bytes: &[u8]) -> Html {
    Html::parse_document(&String::from_utf8_lossy(bytes))
}

#[inline]
pub fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| PrError::InvalidSelector {
        selector: sel_str.into(),
    })
}

/// Visible text of an element with whitespace collapsed.
///
/// Only text nodes contribute, so link destinations never leak into it.
pub fn visible_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// Element children of `element` with the given tag name
pub fn child_elements<'a>(
    element: ElementRef<'a>,
    tag: &'a str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |child| child.value().name() == tag)
}

pub fn has_child(element: ElementRef<'_>, tag: &str) -> bool {
    child_elements(element, tag).next().is_some()
}

/// Nearest ancestor with the given tag name
pub fn enclosing<'a>(element: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| ancestor.value().name() == tag)
}

/// The `href` of `element`'s parent, when that parent is a link
pub fn parent_link_href<'a>(element: ElementRef<'a>) -> Option<&'a str> {
    let parent = element.parent().and_then(ElementRef::wrap)?;
    if parent.value().name() != "a" {
        return None;
    }
    parent.value().attr("href")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_text_ignores_link_destinations() {
        let doc = parse_page(
            br#"<b>12. <a href="http://www.espn.com/nba/team/_/name/dal">Dallas</a> Mavericks</b>"#,
        );
        let b = doc.select(&create_selector("b").unwrap()).next().unwrap();

        assert_eq!(visible_text(b), "12. Dallas Mavericks");
    }

    #[test]
    fn test_invalid_selector() {
        let err = create_selector("p[[").unwrap_err();
        assert!(matches!(err, PrError::InvalidSelector { ref selector } if selector == "p[["));
    }

    #[test]
    fn test_parent_link_href() {
        let doc = parse_page(
            br#"<a href="/nba/rankings"><span class="link-text">Rankings</span></a>
                <div><span class="link-text">Scores</span></div>"#,
        );
        let spans: Vec<_> = doc.select(&create_selector("span").unwrap()).collect();

        assert_eq!(parent_link_href(spans[0]), Some("/nba/rankings"));
        assert_eq!(parent_link_href(spans[1]), None);
    }

    #[test]
    fn test_enclosing_and_children() {
        let doc = parse_page(
            br#"<p><em><strong>Previous rankings:</strong></em> <a href="/1">Week 1</a> | <a href="/2">2</a></p>"#,
        );
        let strong = doc.select(&create_selector("strong").unwrap()).next().unwrap();
        let p = enclosing(strong, "p").unwrap();

        let links: Vec<String> = child_elements(p, "a").map(visible_text).collect();
        assert_eq!(links, ["Week 1", "2"]);
        assert!(has_child(p, "em"));
        assert!(!has_child(p, "strong"));
    }

    #[test]
    fn test_parse_page_tolerates_invalid_utf8() {
        let doc = parse_page(b"<h2>1. Caf\xe9</h2>");
        let h2 = doc.select(&create_selector("h2").unwrap()).next().unwrap();
        assert!(visible_text(h2).starts_with("1. Caf"));
    }
}
