// src/config/selectors.rs
//
// Every tag+class pattern the extractor relies on. When the site's markup
// drifts, this table is the only place that needs to change.

/// An element tag plus a class attribute. A single class matches any element
/// carrying it; a multi-class value must equal the element's whole `class`
/// attribute, order included.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagClass {
    pub tag: &'static str,
    pub class: &'static str,
}

impl TagClass {
    pub const fn new(tag: &'static str, class: &'static str) -> Self {
        Self { tag, class }
    }

    /// CSS form: `div.a` for one class, `div[class="a b"]` for several.
    pub fn to_css(&self) -> String {
        let mut css = s!(self.tag);
        let classes: Vec<&str> = self.class.split_whitespace().collect();
        match classes.as_slice() {
            [] => {}
            [one] => {
                css.push('.');
                css.push_str(one);
            }
            _ => {
                let exact = self.class.trim().replace('\\', "\\\\").replace('"', "\\\"");
                css.push_str(&format!("[class=\"{exact}\"]"));
            }
        }
        css
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectorTable {
    /// Summary line with the total number of doctors.
    pub total_count: TagClass,
    /// One listing card per doctor.
    pub card: TagClass,
    /// Within a card.
    pub name: TagClass,
    pub specialty: TagClass,
    pub rating: TagClass,
    /// "Next page" link; its presence means more pages exist.
    pub next_button: TagClass,
}

pub const PRACTO: SelectorTable = SelectorTable {
    total_count: TagClass::new("div", "u-d-flex flex-ai-center u-spacer--top-md"),
    card:        TagClass::new("div", "listing-doctor-card"),
    name:        TagClass::new("h2", "doctor-name"),
    specialty:   TagClass::new("div", "u-grey_3-text"),
    rating:      TagClass::new("a", "uv2-spacer--md-right"),
    next_button: TagClass::new("a", "c-next-btn"),
};

impl Default for SelectorTable {
    fn default() -> Self {
        PRACTO
    }
}
