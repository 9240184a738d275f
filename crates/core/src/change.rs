#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub data_type: Option<String>,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDef {
    pub name: String,
    pub columns: Vec<String>,
    pub unique: bool,
}

impl IndexDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            unique: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }
}

/// One atomic schema-modification operation, in emission order within its
/// owning sequence. Order is meaningful: downstream statement generation
/// follows it, so transformations must preserve the relative order of
/// untouched changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    AddColumn(Column),
    DropColumn(Column),
    RenameColumn { from: Column, to: Column },
    AddIndex(IndexDef),
    DropIndex(IndexDef),
    RenameIndex { from: IndexDef, to: IndexDef },
    AddTable(Table),
    DropTable(Table),
    RenameTable { from: Table, to: Table },
}

/// Ordered changes scoped to a single table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifyTable {
    pub table: Table,
    pub changes: Vec<Change>,
}

/// A caller-declared rename hint: the old and new identifier of a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub from: String,
    pub to: String,
}

impl Rename {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}
