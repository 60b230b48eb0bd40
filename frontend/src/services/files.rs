//! Browser file lists to session file references.

use notesynth::FileRef;
use web_sys::{DragEvent, FileList, HtmlInputElement};

/// Name and size of every file in a list, in selection order.
pub fn file_refs(files: &FileList) -> Vec<FileRef> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| FileRef::new(file.name(), file.size() as u64))
        .collect()
}

/// Files chosen in a picker.
pub fn picked_files(input: &HtmlInputElement) -> Vec<FileRef> {
    input.files().map(|list| file_refs(&list)).unwrap_or_default()
}

/// Files carried by a drop event.
pub fn dropped_files(ev: &DragEvent) -> Vec<FileRef> {
    ev.data_transfer()
        .and_then(|dt| dt.files())
        .map(|list| file_refs(&list))
        .unwrap_or_default()
}
