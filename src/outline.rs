use pdf_writer::{Finish, Name, Pdf, Ref, TextStr};

use crate::refs::{ObjectReferences, RefType};

/// The document outline (bookmarks), one flat list of entries in document order
#[derive(Default, Debug)]
pub struct Outline {
    pub entries: Vec<OutlineEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
    pub page_index: usize,
    pub title: String,
}

impl Outline {
    pub fn add_bookmark(&mut self, page_index: usize, title: String) {
        self.entries.push(OutlineEntry { page_index, title });
    }

    /// Writes the outline and returns its root reference, or [None] when there
    /// is nothing to bookmark
    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) -> Option<Ref> {
        if self.entries.is_empty() {
            return None;
        }

        // generate IDs for everything
        let outlines_id = refs.gen(RefType::Outlines);
        let entry_ids: Vec<Ref> = (0..self.entries.len())
            .map(|i| refs.gen(RefType::OutlineEntry(i)))
            .collect();

        let mut outline = writer.outline(outlines_id);
        outline.first(entry_ids[0]);
        outline.last(entry_ids[entry_ids.len() - 1]);
        outline.count(entry_ids.len() as i32);
        outline.finish();

        for (i, entry) in self.entries.iter().enumerate() {
            let mut item = writer.outline_item(entry_ids[i]);
            item.parent(outlines_id);
            item.title(TextStr(entry.title.as_str()));
            if i > 0 {
                item.prev(entry_ids[i - 1]);
            }
            if i + 1 < entry_ids.len() {
                item.next(entry_ids[i + 1]);
            }
            if let Some(page_ref) = refs.get(RefType::Page(entry.page_index)) {
                item.insert(Name(b"Dest"))
                    .array()
                    .item(page_ref)
                    .item(Name(b"Fit"));
            }
        }

        Some(outlines_id)
    }
}
