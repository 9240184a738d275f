use crate::{Change, ModifyTable, Rename};

/// Patches a DROP/ADD column pair into a single rename.
///
/// A diff of two schemas renders a column rename as a drop of the old column
/// followed (not necessarily adjacently) by an add of the new one. Given the
/// caller-declared rename hint, this splices the pair into one
/// [`Change::RenameColumn`]. The merged change takes the later of the two
/// original slots, so unrelated changes keep their relative order. If either
/// half of the pair is absent the sequence is left untouched; a non-rename
/// diff is a legitimate outcome, not an error.
pub fn rename_column(modify: &mut ModifyTable, rename: &Rename) {
    let changes = &mut modify.changes;
    let i = changes
        .iter()
        .position(|c| matches!(c, Change::DropColumn(col) if col.name == rename.from));
    let j = changes
        .iter()
        .position(|c| matches!(c, Change::AddColumn(col) if col.name == rename.to));
    if let (Some(i), Some(j)) = (i, j) {
        let Change::DropColumn(from) = changes[i].clone() else {
            return;
        };
        let Change::AddColumn(to) = changes[j].clone() else {
            return;
        };
        // Overwrite before removing so i and j stay valid.
        changes[i.max(j)] = Change::RenameColumn { from, to };
        changes.remove(i.min(j));
    }
}

/// Patches a DROP/ADD index pair into a single rename. Same splice rule as
/// [`rename_column`].
pub fn rename_index(modify: &mut ModifyTable, rename: &Rename) {
    let changes = &mut modify.changes;
    let i = changes
        .iter()
        .position(|c| matches!(c, Change::DropIndex(idx) if idx.name == rename.from));
    let j = changes
        .iter()
        .position(|c| matches!(c, Change::AddIndex(idx) if idx.name == rename.to));
    if let (Some(i), Some(j)) = (i, j) {
        let Change::DropIndex(from) = changes[i].clone() else {
            return;
        };
        let Change::AddIndex(to) = changes[j].clone() else {
            return;
        };
        changes[i.max(j)] = Change::RenameIndex { from, to };
        changes.remove(i.min(j));
    }
}

/// Patches a DROP/ADD table pair into a single rename. Table changes are not
/// scoped to a modify container, so the sequence is taken and returned.
pub fn rename_table(mut changes: Vec<Change>, rename: &Rename) -> Vec<Change> {
    let i = changes
        .iter()
        .position(|c| matches!(c, Change::DropTable(t) if t.name == rename.from));
    let j = changes
        .iter()
        .position(|c| matches!(c, Change::AddTable(t) if t.name == rename.to));
    if let (Some(i), Some(j)) = (i, j) {
        let Change::DropTable(from) = changes[i].clone() else {
            return changes;
        };
        let Change::AddTable(to) = changes[j].clone() else {
            return changes;
        };
        changes[i.max(j)] = Change::RenameTable { from, to };
        changes.remove(i.min(j));
    }
    changes
}
