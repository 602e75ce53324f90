pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;
pub mod text;

use loan_calc_core::{CalculationOutput, ComputationOutput};

use crate::OutputFormat;

/// Render the complete output as one string. Printing is left to the caller.
pub fn render(
    format: OutputFormat,
    output: &ComputationOutput<CalculationOutput>,
) -> Result<String, Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Text => Ok(text::render_text(&output.result)),
        OutputFormat::Json => json::render_json(&serde_json::to_value(output)?),
        OutputFormat::Table => Ok(table::render_table(&serde_json::to_value(output)?)),
        OutputFormat::Csv => csv_out::render_csv(&serde_json::to_value(output)?),
        OutputFormat::Minimal => Ok(minimal::render_minimal(&serde_json::to_value(output)?)),
    }
}

fn format_value(value: &serde_json::Value) -> String {
    use serde_json::Value;

    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
