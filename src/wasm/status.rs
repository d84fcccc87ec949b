use log::info;
use web_sys::{Document, Element};

use crate::config::STATUS_IDS;
use crate::gesture::{StatusLine, StatusSink};

/// Writes status lines into the page's `status-N` elements, or the log when a
/// page has none.
pub struct DomStatus {
    lines: [Option<Element>; 3],
}

impl DomStatus {
    pub fn new(document: &Document) -> Self {
        Self {
            lines: STATUS_IDS.map(|id| document.get_element_by_id(id)),
        }
    }
}

impl StatusSink for DomStatus {
    fn update(&mut self, line: StatusLine, text: &str) {
        match &self.lines[line.index()] {
            Some(element) => element.set_text_content(Some(text)),
            None => info!("[{}] {}", line.index() + 1, text),
        }
    }
}
