//! Structured deck container parser (.dek format)
//!
//! The .dek format is an XML-like tree of `superzone` groups, each holding
//! `card` elements with a `name` child. Only that narrow subset is
//! accepted; a full XML parser is deliberately not used.

use super::deck::{RawEntry, Zone};
use super::normalize_apostrophes;
use crate::{DeckError, Result};

/// Deck list loader for the structured .dek container
pub struct DekLoader;

impl DekLoader {
    /// Parse .dek content into raw entries.
    ///
    /// A superzone named `Tokens` is skipped entirely; `Reserve` maps its
    /// cards to the reserve zone; every other group is main. Each `card`
    /// element contributes one entry with quantity 1 — repeated cards
    /// appear as repeated elements.
    pub fn parse(content: &str) -> Result<Vec<RawEntry>> {
        let mut entries = Vec::new();
        let mut rest = content;

        while let Some(pos) = rest.find("<superzone") {
            rest = &rest[pos..];
            let tag_end = rest
                .find('>')
                .ok_or_else(|| DeckError::ParseError("unterminated <superzone> tag".to_string()))?;
            let zone_name = attr_value(&rest[..tag_end], "name").unwrap_or("");

            let body_rest = &rest[tag_end + 1..];
            let close = body_rest
                .find("</superzone>")
                .ok_or_else(|| DeckError::ParseError("missing </superzone>".to_string()))?;
            let body = &body_rest[..close];

            if zone_name != "Tokens" {
                let zone = if zone_name == "Reserve" {
                    Zone::Reserve
                } else {
                    Zone::Main
                };
                for name in card_names(body)? {
                    entries.push(RawEntry {
                        quantity: 1,
                        name,
                        zone,
                    });
                }
            }

            rest = &body_rest[close + "</superzone>".len()..];
        }

        if !entries.iter().any(|e| e.zone == Zone::Main) {
            return Err(DeckError::EmptyMainDeck);
        }

        Ok(entries)
    }
}

/// Extract the text of each card's `name` child within a superzone body.
fn card_names(body: &str) -> Result<Vec<String>> {
    let mut names = Vec::new();
    let mut rest = body;

    while let Some(pos) = rest.find("<card") {
        let card_rest = &rest[pos..];
        let end = card_rest
            .find("</card>")
            .ok_or_else(|| DeckError::ParseError("missing </card>".to_string()))?;
        let card = &card_rest[..end];

        if let Some(open) = card.find("<name>") {
            let text_start = open + "<name>".len();
            let text_end = card[text_start..]
                .find("</name>")
                .ok_or_else(|| DeckError::ParseError("missing </name>".to_string()))?
                + text_start;
            let raw = unescape(&card[text_start..text_end]);
            names.push(normalize_apostrophes(raw.trim()));
        }

        rest = &card_rest[end + "</card>".len()..];
    }

    Ok(names)
}

/// Pull a double-quoted attribute value out of an opening tag.
fn attr_value<'a>(tag: &'a str, attr: &str) -> Option<&'a str> {
    let needle = format!("{attr}=\"");
    let start = tag.find(&needle)? + needle.len();
    let end = tag[start..].find('"')? + start;
    Some(&tag[start..end])
}

/// Decode the XML entities that can occur in card names.
fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
