use std::io;

use anyhow::Result;
use comfy_table::Table;
use tracing::info_span;

use patmap_cli::pipeline::{OutputConfig, check_transforms, convert, load_inputs, output};
use patmap_transform::{BuiltinTransform, ResolutionContext, default_registry};

use crate::cli::ConvertArgs;
use crate::summary::apply_table_style;
use crate::types::RunResult;

pub fn run_transforms() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Transform", "Description"]);
    apply_table_style(&mut table);
    for transform in BuiltinTransform::ALL {
        table.add_row(vec![transform.as_str(), transform.description()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_convert(args: &ConvertArgs) -> Result<RunResult> {
    let run_span = info_span!("convert");
    let _run_guard = run_span.enter();

    let registry = default_registry();
    let context = args
        .today
        .map_or_else(ResolutionContext::today, ResolutionContext::at)
        .with_log_data(args.log_data);

    let inputs = load_inputs(&args.input, &args.config)?;
    let unknown_transforms = check_transforms(&inputs.config, registry);
    let document = convert(&inputs, registry, context);

    let output_config = OutputConfig {
        path: args.output.clone(),
        print: !args.quiet_json,
    };
    let stdout = io::stdout();
    output(&document, &output_config, &mut stdout.lock())?;

    Ok(RunResult {
        input: args.input.clone(),
        config: args.config.clone(),
        output: args.output.clone(),
        records: document.len(),
        top_level_rules: inputs.config.mappings.len(),
        total_rules: inputs.config.rule_count(),
        unknown_transforms,
    })
}
