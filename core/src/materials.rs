//! Ordered, capped list of study materials.
//!
//! Each render pass hands out [`RemoveHandle`]s tagged with the list revision.
//! Any mutation bumps the revision, so a handle kept across a mutation is
//! refused instead of silently removing the wrong entry.

use serde::Serialize;

use crate::error::{ListError, ListResult};
use crate::models::FileRef;

/// Positional removal key, valid for one revision of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RemoveHandle {
    pub index: usize,
    pub revision: u64,
}

/// One rendered row of the list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialEntry {
    pub handle: RemoveHandle,
    pub name: String,
    /// Row text, e.g. `📄 Week 1.pdf`
    pub label: String,
    /// Accessible label of the remove button
    pub remove_label: String,
}

/// Full rendering of the list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialsView {
    pub entries: Vec<MaterialEntry>,
    /// `n/cap files added`, absent when the list is empty
    pub count_info: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MaterialList {
    items: Vec<FileRef>,
    cap: usize,
    revision: u64,
}

impl MaterialList {
    pub fn new(cap: usize) -> Self {
        Self { items: Vec::new(), cap, revision: 0 }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.cap
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn items(&self) -> &[FileRef] {
        &self.items
    }

    /// Append files in order until the cap is reached.
    ///
    /// Returns how many files did not fit.
    pub fn extend(&mut self, files: impl IntoIterator<Item = FileRef>) -> usize {
        let mut overflow = 0;
        let mut changed = false;

        for file in files {
            if self.is_full() {
                overflow += 1;
            } else {
                self.items.push(file);
                changed = true;
            }
        }

        if changed {
            self.revision += 1;
        }
        overflow
    }

    /// Remove the entry a handle points to.
    pub fn remove(&mut self, handle: RemoveHandle) -> ListResult<FileRef> {
        if handle.revision != self.revision {
            return Err(ListError::StaleHandle {
                index: handle.index,
                rendered: handle.revision,
                current: self.revision,
            });
        }
        self.remove_at(handle.index)
    }

    /// Remove by current position.
    pub fn remove_at(&mut self, index: usize) -> ListResult<FileRef> {
        if index >= self.items.len() {
            return Err(ListError::OutOfRange { index, len: self.items.len() });
        }
        let removed = self.items.remove(index);
        self.revision += 1;
        Ok(removed)
    }

    /// Render every row from current state.
    pub fn render(&self) -> MaterialsView {
        let entries = self
            .items
            .iter()
            .enumerate()
            .map(|(index, file)| MaterialEntry {
                handle: RemoveHandle { index, revision: self.revision },
                name: file.name.clone(),
                label: format!("📄 {}", file.name),
                remove_label: format!("Remove {}", file.name),
            })
            .collect();

        let count_info = (!self.items.is_empty())
            .then(|| format!("{}/{} files added", self.items.len(), self.cap));

        MaterialsView { entries, count_info }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(names: &[&str]) -> Vec<FileRef> {
        names.iter().map(|n| FileRef::new(*n, 1)).collect()
    }

    fn names(list: &MaterialList) -> Vec<&str> {
        list.items().iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_extend_keeps_selection_order_and_duplicates() {
        let mut list = MaterialList::new(50);
        assert_eq!(list.extend(files(&["b.pdf", "a.pdf", "b.pdf"])), 0);
        assert_eq!(names(&list), vec!["b.pdf", "a.pdf", "b.pdf"]);
    }

    #[test]
    fn test_extend_stops_at_cap() {
        let mut list = MaterialList::new(50);
        let batch: Vec<_> = (0..48).map(|i| FileRef::new(format!("{}.pdf", i), 1)).collect();
        assert_eq!(list.extend(batch), 0);

        let overflow = list.extend(files(&["x.pdf", "y.pdf", "z.pdf", "w.pdf"]));
        assert_eq!(overflow, 2);
        assert_eq!(list.len(), 50);
        assert_eq!(list.items()[49].name, "y.pdf");

        assert_eq!(list.extend(files(&["again.pdf"])), 1);
        assert_eq!(list.len(), 50);
    }

    #[test]
    fn test_remove_at_preserves_relative_order() {
        let mut list = MaterialList::new(50);
        list.extend(files(&["a.pdf", "b.pdf", "c.pdf", "d.pdf"]));

        let removed = list.remove_at(1).unwrap();
        assert_eq!(removed.name, "b.pdf");
        assert_eq!(names(&list), vec!["a.pdf", "c.pdf", "d.pdf"]);
    }

    #[test]
    fn test_remove_out_of_range_leaves_list() {
        let mut list = MaterialList::new(50);
        list.extend(files(&["a.pdf"]));
        let revision = list.revision();

        assert_eq!(list.remove_at(1), Err(ListError::OutOfRange { index: 1, len: 1 }));
        assert_eq!(list.len(), 1);
        assert_eq!(list.revision(), revision);
    }

    #[test]
    fn test_stale_handle_is_refused() {
        let mut list = MaterialList::new(50);
        list.extend(files(&["a.pdf", "b.pdf", "c.pdf"]));

        let view = list.render();
        let first = view.entries[0].handle;
        let last = view.entries[2].handle;

        list.remove(first).unwrap();
        // Index 2 no longer exists, and would have been "c.pdf" anyway
        assert!(matches!(list.remove(last), Err(ListError::StaleHandle { .. })));
        assert_eq!(names(&list), vec!["b.pdf", "c.pdf"]);

        // A fresh render pass yields usable handles again
        let fresh = list.render().entries[1].handle;
        assert_eq!(list.remove(fresh).unwrap().name, "c.pdf");
    }

    #[test]
    fn test_render_labels_and_count() {
        let mut list = MaterialList::new(50);
        assert_eq!(list.render().count_info, None);

        list.extend(files(&["Week 1.pdf", "notes.txt"]));
        let view = list.render();
        assert_eq!(view.entries[0].label, "📄 Week 1.pdf");
        assert_eq!(view.entries[0].remove_label, "Remove Week 1.pdf");
        assert_eq!(view.entries[1].handle.index, 1);
        assert_eq!(view.count_info.as_deref(), Some("2/50 files added"));
    }
}
