use crate::{LocateError, LocateResult};

/// A migration statement's text paired with its byte offset in the owning
/// file. `pos` is the offset of the first occurrence of `text` in the file's
/// raw content, an approximation rather than a true parse position: a text
/// that repeats verbatim resolves to its first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stmt {
    pub pos: usize,
    pub text: String,
}

/// A migration file as seen by the locator: raw content plus the executable
/// statement texts in execution order.
pub trait MigrationFile {
    fn bytes(&self) -> &[u8];

    /// Ordered statement texts. Implementations surface read or parse
    /// failures here.
    fn stmts(&self) -> LocateResult<Vec<String>>;

    /// Optional capability: files that already know exact statement positions
    /// return them here and the locator delegates entirely, errors included.
    fn stmt_decls(&self) -> Option<LocateResult<Vec<Stmt>>> {
        None
    }
}

/// A migration file backed by in-memory content and a caller-supplied
/// statement list. Statement texts are opaque; no SQL parsing happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptFile {
    content: String,
    statements: Vec<String>,
}

impl ScriptFile {
    pub fn new(content: impl Into<String>, statements: Vec<String>) -> Self {
        Self {
            content: content.into(),
            statements,
        }
    }
}

impl MigrationFile for ScriptFile {
    fn bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }

    fn stmts(&self) -> LocateResult<Vec<String>> {
        Ok(self.statements.clone())
    }
}

/// Returns the position-tagged statement declarations of a file, in statement
/// order. Any statement text missing from the raw content fails the whole
/// call; partial results are never returned.
pub fn stmt_decls<F: MigrationFile + ?Sized>(file: &F) -> LocateResult<Vec<Stmt>> {
    if let Some(decls) = file.stmt_decls() {
        return decls;
    }
    file.stmts()?
        .into_iter()
        .map(|text| {
            let pos = position(file.bytes(), &text)?;
            Ok(Stmt { pos, text })
        })
        .collect()
}

fn position(content: &[u8], stmt: &str) -> LocateResult<usize> {
    let needle = stmt.as_bytes();
    if needle.is_empty() {
        return Ok(0);
    }
    content
        .windows(needle.len())
        .position(|window| window == needle)
        .ok_or_else(|| LocateError::StatementNotFound {
            statement: stmt.to_string(),
            content: String::from_utf8_lossy(content).into_owned(),
        })
}
