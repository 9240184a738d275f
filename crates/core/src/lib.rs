mod change;
mod error;
mod rename;
mod scan;
mod statement;

pub use change::{Change, Column, IndexDef, ModifyTable, Rename, Table};
pub use error::{LocateError, LocateResult};
pub use rename::{rename_column, rename_index, rename_table};
pub use scan::match_stmt_before;
pub use statement::{MigrationFile, ScriptFile, Stmt, stmt_decls};

#[cfg(test)]
mod tests {
    use super::{
        Change, Column, ModifyTable, Rename, ScriptFile, Table, match_stmt_before, rename_column,
    };

    #[test]
    fn smoke_coalesce_and_scan() {
        let mut modify = ModifyTable {
            table: Table::new("users"),
            changes: vec![
                Change::DropColumn(Column::new("nickname")),
                Change::AddColumn(Column::new("handle")),
            ],
        };
        rename_column(&mut modify, &Rename::new("nickname", "handle"));
        assert_eq!(
            modify.changes,
            vec![Change::RenameColumn {
                from: Column::new("nickname"),
                to: Column::new("handle"),
            }],
        );

        let file = ScriptFile::new(
            "CREATE TABLE users (id int);\nDROP TABLE legacy;\n",
            vec![
                "CREATE TABLE users (id int);".to_string(),
                "DROP TABLE legacy;".to_string(),
            ],
        );
        let matched = match_stmt_before(&file, 29, |stmt| Ok(stmt.text.starts_with("CREATE")))
            .expect("scan should succeed");
        assert!(matched);
    }
}
