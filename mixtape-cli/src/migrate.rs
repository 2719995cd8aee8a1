use anyhow::Result;
use mixtape_core::{
    migrate_operation, render_result, MigrateOptions, OutputFormat, OutputTarget,
};
use std::path::Path;

#[allow(clippy::too_many_arguments)]
pub fn handle_migrate(
    input: &Path,
    changes: &Path,
    output: &str,
    dry_run: bool,
    indent: usize,
    report: OutputFormat,
    quiet: bool,
    use_color: bool,
) -> Result<()> {
    let target = OutputTarget::parse(output);
    let options = MigrateOptions { dry_run, indent };

    let result = migrate_operation(input, changes, &target, &options)?;

    // The report goes to stderr so stdout can carry the dataset itself
    match report {
        OutputFormat::Json => {
            eprintln!("{}", render_result(&result, report, use_color));
        },
        OutputFormat::Summary | OutputFormat::Table => {
            if !quiet {
                eprint!("{}", render_result(&result, report, use_color));
            }
        },
    }

    Ok(())
}
