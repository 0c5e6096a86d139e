//! Reads a release context from stdin, normalizes it, and writes it to stdout.
use log::*;
use serde::Deserialize;
use serde_json::Value;
use std::io::{self, Read, Write};

use crate::{
    ContextError, Result,
    cli::{Args, OutputFormat},
    context,
};

/// Run against the process' standard streams.
pub fn execute(args: &Args) -> Result<()> {
    run(io::stdin().lock(), io::stdout().lock(), args.output_format())
}

/// Read one JSON document from `input`, normalize it and write it to
/// `output`. Nothing is written unless the whole document was processed.
pub fn run<R: Read, W: Write>(
    input: R,
    mut output: W,
    format: OutputFormat,
) -> Result<()> {
    let content = io::read_to_string(input).map_err(ContextError::Read)?;
    debug!("read {} bytes from input", content.len());

    let mut context = parse(&content)?;

    let summary = context::normalize(&mut context)?;
    debug!(
        "visited {} releases, inspected {} commits, trimmed {}",
        summary.releases, summary.commits, summary.truncated
    );

    let rendered = render(&context, format)?;
    output
        .write_all(rendered.as_bytes())
        .and_then(|_| output.flush())
        .map_err(ContextError::Write)?;

    Ok(())
}

/// Parse exactly one JSON document.
///
/// Nesting depth is unlimited: the parser's recursion limit is lifted and the
/// stack is grown on demand while deserializing.
pub fn parse(content: &str) -> Result<Value> {
    let mut de = serde_json::Deserializer::from_str(content);
    de.disable_recursion_limit();

    let context =
        Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;

    Ok(context)
}

/// Serialize the context in the requested layout.
pub fn render(context: &Value, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(context),
        OutputFormat::Compact => serde_json::to_string(context),
    };

    rendered.map_err(ContextError::Serialize)
}
