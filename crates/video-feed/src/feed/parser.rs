//! Channel feed XML parser.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use super::types::{FeedEntry, MediaContent};
use crate::error::{FeedError, Result};

/// Parse feed entries from raw XML bytes.
///
/// Reads Atom `<entry>` elements (what channel feeds serve) and, for
/// robustness, RSS `<item>` elements. Fields are captured only when they are
/// direct children of the entry, so channel-level titles and links never leak
/// into entries.
pub fn parse_feed(xml: &[u8]) -> Result<Vec<FeedEntry>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut buf = Vec::new();

    let mut stack: Vec<String> = Vec::new();
    let mut current: Option<EntryBuilder> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = element_name(&e);
                if is_entry_tag(&name) {
                    current = Some(EntryBuilder::default());
                } else if let Some(builder) = current.as_mut() {
                    builder.on_element(&name, stack.last().map(String::as_str), &e)?;
                }
                stack.push(name);
            }
            Ok(Event::Empty(e)) => {
                if let Some(builder) = current.as_mut() {
                    let name = element_name(&e);
                    builder.on_element(&name, stack.last().map(String::as_str), &e)?;
                }
            }
            Ok(Event::End(_)) => {
                if let Some(name) = stack.pop() {
                    if is_entry_tag(&name) {
                        if let Some(builder) = current.take() {
                            entries.push(builder.build());
                        }
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(builder) = current.as_mut() {
                    let text = e
                        .unescape()
                        .map_err(|err| FeedError::Parse(format!("Bad text content: {err}")))?;
                    builder.on_text(&stack, &text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(builder) = current.as_mut() {
                    let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                    builder.on_text(&stack, &text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(FeedError::Parse(format!(
                    "XML parse error at byte {}: {e}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    tracing::debug!(count = entries.len(), "Parsed feed entries");
    Ok(entries)
}

fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).to_string()
}

fn is_entry_tag(name: &str) -> bool {
    name == "entry" || name == "item"
}

fn attribute(e: &BytesStart<'_>, key: &str) -> Result<Option<String>> {
    let Some(attr) = e
        .try_get_attribute(key)
        .map_err(|err| FeedError::Parse(format!("Bad attribute `{key}`: {err}")))?
    else {
        return Ok(None);
    };

    let value = attr
        .unescape_value()
        .map_err(|err| FeedError::Parse(format!("Bad attribute `{key}`: {err}")))?;
    Ok(Some(value.into_owned()))
}

fn append(field: &mut Option<String>, text: &str) {
    field.get_or_insert_with(String::new).push_str(text);
}

#[derive(Default)]
struct EntryBuilder {
    entry: FeedEntry,
    alternate: Option<String>,
    media_description: Option<String>,
}

impl EntryBuilder {
    fn on_element(&mut self, name: &str, parent: Option<&str>, e: &BytesStart<'_>) -> Result<()> {
        match name {
            "link" if parent.is_some_and(is_entry_tag) => {
                if let Some(href) = attribute(e, "href")? {
                    let rel = attribute(e, "rel")?;
                    if self.alternate.is_none() && rel.as_deref().is_none_or(|r| r == "alternate")
                    {
                        self.alternate = Some(href.clone());
                    }
                    self.entry.links.push(href);
                }
            }
            "media:content" => {
                self.entry.media.push(MediaContent {
                    duration: attribute(e, "duration")?,
                });
            }
            "yt:duration" => {
                self.entry.media.push(MediaContent {
                    duration: attribute(e, "seconds")?,
                });
            }
            _ => {}
        }
        Ok(())
    }

    fn on_text(&mut self, stack: &[String], text: &str) {
        let Some((name, ancestors)) = stack.split_last() else {
            return;
        };
        let entry_level = ancestors.last().is_some_and(|p| is_entry_tag(p));

        match name.as_str() {
            "media:description" => append(&mut self.media_description, text),
            _ if !entry_level => {}
            "title" => append(&mut self.entry.title, text),
            "published" | "pubDate" => append(&mut self.entry.published, text),
            "updated" => append(&mut self.entry.updated, text),
            "summary" | "description" => append(&mut self.entry.summary, text),
            "link" => {
                let href = text.trim().to_string();
                if self.alternate.is_none() {
                    self.alternate = Some(href.clone());
                }
                self.entry.links.push(href);
            }
            _ => {}
        }
    }

    fn build(self) -> FeedEntry {
        let mut entry = self.entry;
        entry.link = self.alternate.or_else(|| entry.links.first().cloned());
        if entry.summary.is_none() {
            entry.summary = self.media_description;
        }
        entry
    }
}
