use serde_json::Value;

use super::format_value;

/// CSV of the result: the payment schedule as `month,payment` rows followed
/// by the totals for differentiated loans, otherwise two-column `field,value`.
pub fn render_csv(value: &Value) -> Result<String, Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match result {
        Value::Object(map) => {
            if let Some(Value::Array(schedule)) = map.get("schedule") {
                write_array_csv(&mut wtr, schedule)?;
                for key in ["total_paid", "overpayment"] {
                    if let Some(val) = map.get(key) {
                        wtr.write_record([key, &format_value(val)])?;
                    }
                }
            } else {
                wtr.write_record(["field", "value"])?;
                for (key, val) in map {
                    wtr.write_record([key.as_str(), &format_value(val)])?;
                }
            }
        }
        Value::Array(arr) => write_array_csv(&mut wtr, arr)?,
        _ => wtr.write_record([&format_value(result)])?,
    }

    let bytes = wtr.into_inner().map_err(|e| e.to_string())?;
    Ok(String::from_utf8(bytes)?.trim_end().to_string())
}

fn write_array_csv(wtr: &mut csv::Writer<Vec<u8>>, arr: &[Value]) -> csv::Result<()> {
    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            wtr.write_record([&format_value(item)])?;
        }
        return Ok(());
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    wtr.write_record(&headers)?;

    for item in arr {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(format_value).unwrap_or_default())
                .collect();
            wtr.write_record(&row)?;
        }
    }

    Ok(())
}
