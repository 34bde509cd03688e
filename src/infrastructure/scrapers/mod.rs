use crate::config::CardSelectorConfig;
use crate::error::{Result, ScrapeError};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Selector};

pub(crate) mod cards;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Parsed selectors for every field of a match card.
pub struct CardSelectors {
    pub card: Selector,
    pub league: Selector,
    pub home: Selector,
    pub away: Selector,
    pub time: Selector,
    pub link: Selector,
    pub link_attr: String,
}

impl CardSelectors {
    pub fn new(config: &CardSelectorConfig) -> Result<Self> {
        Ok(Self {
            card: parse(&config.card)?,
            league: parse(&config.league)?,
            home: parse(&config.home)?,
            away: parse(&config.away)?,
            time: parse(&config.time)?,
            link: parse(&config.link)?,
            link_attr: config.link_attr.clone(),
        })
    }
}

fn parse(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| ScrapeError::Selector(format!("{}: {}", selector, e)))
}

/// Collapses whitespace runs to a single space and trims the ends.
pub fn normalize_text(raw: &str) -> String {
    WHITESPACE.replace_all(raw, " ").trim().to_string()
}

/// Removes every whitespace character.
pub fn strip_whitespace(raw: &str) -> String {
    WHITESPACE.replace_all(raw, "").into_owned()
}

/// Elements whose text never shows up on the rendered page.
const HIDDEN_TEXT: [&str; 4] = ["script", "style", "noscript", "template"];

/// Rendered text of an element: descendant text outside [`HIDDEN_TEXT`] elements.
fn visible_text(el: ElementRef<'_>) -> String {
    el.descendants()
        .filter(|node| {
            node.parent()
                .and_then(|parent| parent.value().as_element())
                .map_or(true, |parent| !HIDDEN_TEXT.contains(&parent.name()))
        })
        .filter_map(|node| node.value().as_text().map(|text| &**text))
        .collect()
}

/// Text of the first descendant matching `selector`, if there is one.
pub fn field_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .next()
        .map(|el| normalize_text(&visible_text(el)))
}

/// Attribute value of the first descendant matching `selector`, as written.
pub fn field_attr(scope: ElementRef<'_>, selector: &Selector, attr: &str) -> Option<String> {
    scope
        .select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(str::to_string)
}
