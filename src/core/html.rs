// src/core/html.rs
//
// Markup query helpers: parse once, then look elements up by tag+class and
// read their text. Nothing here mutates the document.

use scraper::{ElementRef, Html, Selector};

use crate::config::selectors::TagClass;
use crate::error::SelectorError;

use super::sanitize::normalize_ws;

/// A compiled tag+class pattern.
#[derive(Clone, Debug)]
pub struct Query {
    selector: Selector,
}

impl Query {
    pub fn compile(pattern: TagClass) -> Result<Self, SelectorError> {
        let css = pattern.to_css();
        let selector = Selector::parse(&css).map_err(|e| SelectorError {
            selector: css.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self { selector })
    }
}

pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(markup: &str) -> Self {
        Self { html: Html::parse_document(markup) }
    }

    pub fn find_first(&self, query: &Query) -> Option<ElementRef<'_>> {
        self.html.select(&query.selector).next()
    }

    /// All matches, in document order.
    pub fn find_all(&self, query: &Query) -> Vec<ElementRef<'_>> {
        self.html.select(&query.selector).collect()
    }

    pub fn contains(&self, query: &Query) -> bool {
        self.find_first(query).is_some()
    }
}

/// First descendant of `scope` matching `query`.
pub fn find_first_in<'a>(scope: ElementRef<'a>, query: &Query) -> Option<ElementRef<'a>> {
    scope.select(&query.selector).next()
}

/// All descendant text, whitespace-normalized.
pub fn text_of(element: ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    normalize_ws(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(tag: &'static str, class: &'static str) -> Query {
        Query::compile(TagClass::new(tag, class)).expect("valid selector")
    }

    #[test]
    fn multi_class_matches_whole_attribute_only() {
        let doc = Document::parse(r#"
            <div class="a">only a</div>
            <div class="b a">reordered</div>
            <div class="a b c">extra</div>
            <div class="a b">exact</div>
        "#);
        let hits: Vec<String> = doc.find_all(&q("div", "a b")).into_iter().map(text_of).collect();
        assert_eq!(hits, vec!["exact"]);
    }

    #[test]
    fn single_class_matches_among_others() {
        let doc = Document::parse(r#"<h2 class="big doctor-name">Dr. X</h2>"#);
        assert!(doc.contains(&q("h2", "doctor-name")));
    }

    #[test]
    fn tag_must_match_too() {
        let doc = Document::parse(r#"<span class="doctor-name">x</span>"#);
        assert!(!doc.contains(&q("h2", "doctor-name")));
    }

    #[test]
    fn text_of_joins_nested_nodes() {
        let doc = Document::parse(r#"<h2 class="n">  Dr. <b>Asha</b>
            Rao &amp; Co</h2>"#);
        let el = doc.find_first(&q("h2", "n")).expect("present");
        assert_eq!(text_of(el), "Dr. Asha Rao & Co");
    }

    #[test]
    fn find_first_in_stays_inside_scope() {
        let doc = Document::parse(r#"
            <div class="card"><p class="x">inside</p></div>
            <p class="x">outside</p>
        "#);
        let card = doc.find_first(&q("div", "card")).expect("card");
        let p = find_first_in(card, &q("p", "x")).map(text_of);
        assert_eq!(p.as_deref(), Some("inside"));
        assert_eq!(doc.find_all(&q("p", "x")).len(), 2);
    }

    #[test]
    fn bad_selector_is_an_error() {
        let err = Query::compile(TagClass::new("div", "[[")).unwrap_err();
        assert!(err.selector.starts_with("div."));
    }
}
