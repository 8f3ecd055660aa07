//! Insert and schema command runners.

use anyhow::Context;
use idbench_generator::IdKind;
use idbench_populate_mysql::{
    build_generator, generate_create_table, generate_drop_table, insert_sql, run_populate,
    table_name, MySQLPopulateArgs,
};
use std::path::Path;

use super::mask_connection_password;

/// Run the insert command: fill the mode's table with `count` generated rows.
pub async fn run_insert(args: MySQLPopulateArgs) -> anyhow::Result<()> {
    let kind = args.common.mode;

    if args.common.dry_run {
        let generator =
            build_generator(&args.common).context("Invalid generator configuration")?;

        tracing::info!(
            "[DRY-RUN] Would insert {} rows into `{}` (mode={})",
            args.common.count,
            table_name(kind),
            kind
        );
        tracing::info!(
            "[DRY-RUN] Connection: {}",
            mask_connection_password(&args.mysql_connection_string)
        );
        tracing::info!("[DRY-RUN] Statement: {}", insert_sql(kind));
        if let Some(node) = generator.snowflake_node() {
            tracing::info!("[DRY-RUN] Snowflake node: {}", node);
        }
        return Ok(());
    }

    tracing::info!(
        "Connecting to {}",
        mask_connection_password(&args.mysql_connection_string)
    );

    let metrics = run_populate(&args)
        .await
        .with_context(|| format!("Failed to populate table '{}'", table_name(kind)))?;

    tracing::debug!("Populate metrics: {:?}", metrics);
    Ok(())
}

/// Render the DDL for `mode`, or for every table when `mode` is `None`.
pub fn render_schema(mode: Option<IdKind>, drop: bool) -> String {
    let kinds: Vec<IdKind> = match mode {
        Some(kind) => vec![kind],
        None => IdKind::ALL.to_vec(),
    };

    let mut statements = Vec::new();
    for kind in kinds {
        if drop {
            statements.push(generate_drop_table(kind));
        }
        statements.push(generate_create_table(kind));
    }

    let mut ddl = statements.join(";\n\n");
    ddl.push_str(";\n");
    ddl
}

/// Run the schema command: print or write the DDL.
pub fn run_schema(mode: Option<IdKind>, drop: bool, output: Option<&Path>) -> anyhow::Result<()> {
    let ddl = render_schema(mode, drop);
    match output {
        Some(path) => {
            std::fs::write(path, ddl)
                .with_context(|| format!("Failed to write schema to {path:?}"))?;
            tracing::info!("Wrote schema to {:?}", path);
        }
        None => print!("{ddl}"),
    }
    Ok(())
}
