use crate::{LocateResult, MigrationFile, Stmt, stmt_decls};

/// Reports whether any statement strictly before byte offset `pos` satisfies
/// the predicate, scanning in file order.
///
/// The declarations come from [`stmt_decls`] and are position-sorted for
/// well-formed files; everything from the first statement at or past `pos`
/// onward is excluded before scanning. The scan short-circuits on the first
/// match or the first predicate failure, which propagates unchanged.
pub fn match_stmt_before<F, P>(file: &F, pos: usize, mut predicate: P) -> LocateResult<bool>
where
    F: MigrationFile + ?Sized,
    P: FnMut(&Stmt) -> LocateResult<bool>,
{
    let mut stmts = stmt_decls(file)?;
    if let Some(i) = stmts.iter().position(|s| s.pos >= pos) {
        stmts.truncate(i);
    }
    for stmt in &stmts {
        if predicate(stmt)? {
            return Ok(true);
        }
    }
    Ok(false)
}
