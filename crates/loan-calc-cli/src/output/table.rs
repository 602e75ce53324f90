use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::format_value;

/// Field/value table of the result, followed by the payment schedule (if
/// any), warnings and methodology.
pub fn render_table(value: &Value) -> String {
    let mut sections: Vec<String> = Vec::new();

    match value.as_object() {
        Some(envelope) => match envelope.get("result") {
            Some(Value::Object(result)) => {
                sections.push(field_table(result));
                if let Some(Value::Array(schedule)) = result.get("schedule") {
                    sections.push(array_table(schedule));
                }
                sections.extend(footer(envelope));
            }
            _ => sections.push(field_table(envelope)),
        },
        None => sections.push(format_value(value)),
    }

    sections.join("\n\n")
}

fn field_table(map: &Map<String, Value>) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        if val.is_array() {
            continue;
        }
        builder.push_record([key.as_str(), &format_value(val)]);
    }
    Table::from(builder).to_string()
}

fn array_table(arr: &[Value]) -> String {
    let Some(Value::Object(first)) = arr.first() else {
        return "(empty)".to_string();
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);

    for item in arr {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                .collect();
            builder.push_record(row);
        }
    }

    Table::from(builder).to_string()
}

fn footer(envelope: &Map<String, Value>) -> Vec<String> {
    let mut out = Vec::new();

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            let lines: Vec<String> = warnings
                .iter()
                .filter_map(Value::as_str)
                .map(|w| format!("  - {w}"))
                .collect();
            out.push(format!("Warnings:\n{}", lines.join("\n")));
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        out.push(format!("Methodology: {meth}"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schedule_gets_its_own_table() {
        let value = json!({
            "result": {
                "mode": "differentiated",
                "schedule": [
                    { "month": 1, "payment": "1010" },
                    { "month": 2, "payment": "505" }
                ],
                "total_paid": "1515",
                "overpayment": "15"
            },
            "methodology": "Differentiated loan - declining payment schedule",
            "warnings": []
        });

        let out = render_table(&value);
        assert!(out.contains("overpayment"));
        assert!(out.contains("month"));
        assert!(out.contains("1010"));
        assert!(out.contains("Methodology: Differentiated loan"));
        assert!(!out.contains("Warnings"));
    }
}
