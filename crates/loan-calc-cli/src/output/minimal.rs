use serde_json::Value;

use super::format_value;

/// Just the key figure of the result.
///
/// Looks for the solved quantity first and falls back to the overpayment,
/// which every mode reports.
pub fn render_minimal(value: &Value) -> String {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let priority_keys = ["payment", "principal", "total_months", "overpayment"];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    return format_value(val);
                }
            }
        }
    }

    format_value(result_obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_solved_quantity_wins() {
        let value = json!({
            "result": { "mode": "annuity", "payment": "21248", "overpayment": "274880" }
        });
        assert_eq!(render_minimal(&value), "21248");
    }

    #[test]
    fn test_schedule_falls_back_to_overpayment() {
        let value = json!({
            "result": { "mode": "differentiated", "schedule": [], "overpayment": "14628" }
        });
        assert_eq!(render_minimal(&value), "14628");
    }
}
