//! INSERT and DDL statements for the `users_*` tables.

use idbench_generator::{GeneratedId, IdKind, UserRow};
use mysql_async::{Params, Value};

/// Table a run of `kind` writes to.
pub fn table_name(kind: IdKind) -> &'static str {
    match kind {
        IdKind::Uuid => "users_uuid",
        IdKind::Snowflake => "users_snowflake",
        IdKind::Ulid => "users_ulid",
    }
}

/// Column holding the generated identifier.
pub fn id_column(kind: IdKind) -> &'static str {
    match kind {
        IdKind::Uuid => "uuid",
        IdKind::Snowflake => "snowflake_id",
        IdKind::Ulid => "ulid",
    }
}

fn id_column_type(kind: IdKind) -> &'static str {
    match kind {
        IdKind::Uuid => "CHAR(36)",
        IdKind::Snowflake => "BIGINT UNSIGNED",
        IdKind::Ulid => "CHAR(26)",
    }
}

/// Parameterized INSERT for the table of `kind`, prepared once per run.
pub fn insert_sql(kind: IdKind) -> String {
    format!(
        "INSERT INTO `{}` (`{}`, `name`) VALUES (?, ?)",
        table_name(kind),
        id_column(kind)
    )
}

/// Positional parameters matching [`insert_sql`].
pub fn insert_params(row: &UserRow) -> Params {
    let id = match &row.id {
        GeneratedId::Uuid(s) | GeneratedId::Ulid(s) => Value::Bytes(s.as_bytes().to_vec()),
        GeneratedId::Snowflake(id) => Value::UInt(*id),
    };
    Params::Positional(vec![id, Value::Bytes(row.name.as_bytes().to_vec())])
}

/// Generate the CREATE TABLE statement for the table of `kind`.
///
/// The surrogate key is an auto-increment integer; the generated identifier
/// only gets a secondary index.
pub fn generate_create_table(kind: IdKind) -> String {
    let table = table_name(kind);
    let column = id_column(kind);
    format!(
        "CREATE TABLE IF NOT EXISTS `{table}` (\n  \
         `id` BIGINT UNSIGNED NOT NULL AUTO_INCREMENT,\n  \
         `{column}` {column_type} NOT NULL,\n  \
         `name` VARCHAR(255) NOT NULL,\n  \
         PRIMARY KEY (`id`),\n  \
         KEY `idx_{column}` (`{column}`)\n\
         ) ENGINE=InnoDB",
        column_type = id_column_type(kind)
    )
}

/// Generate DROP TABLE statement.
pub fn generate_drop_table(kind: IdKind) -> String {
    format!("DROP TABLE IF EXISTS `{}`", table_name(kind))
}
