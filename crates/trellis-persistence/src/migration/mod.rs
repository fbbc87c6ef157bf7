use serde_json::{json, Value};
use trellis_domain::default_status_catalog;

/// Minimum viable blob: a JSON object whose `lists` and `labels` are both
/// arrays. Anything less is treated as corrupt and replaced wholesale by
/// the seeded board; anything more is repaired field by field.
pub fn has_required_shape(value: &Value) -> bool {
    value.get("lists").is_some_and(Value::is_array)
        && value.get("labels").is_some_and(Value::is_array)
}

/// Forward-compatible backfill of an otherwise-valid blob. Returns true
/// when anything was rewritten. This never resets user data; it only
/// fills holes left by older schema generations:
///
/// - `activeFilters` absent -> empty set
/// - `taskStatuses` absent -> the fixed six-entry catalog
/// - cards carrying the oldest shape's embedded `labels` objects ->
///   rewritten to `labelIds`, with the objects hoisted into the
///   board-level label set
pub fn backfill(value: &mut Value) -> bool {
    let mut changed = false;

    let Some(root) = value.as_object_mut() else {
        return false;
    };

    if !root.get("activeFilters").is_some_and(Value::is_array) {
        root.insert("activeFilters".to_string(), json!([]));
        changed = true;
    }

    if !root.get("taskStatuses").is_some_and(Value::is_array) {
        let catalog = serde_json::to_value(default_status_catalog()).unwrap_or_else(|_| json!([]));
        root.insert("taskStatuses".to_string(), catalog);
        changed = true;
    }

    changed |= hoist_embedded_labels(root);

    changed
}

/// The first released schema stored full label objects inline on each
/// card (`card.labels: [{id, color, name}]`) with no board-level label
/// set. Rewrite those cards to id references and lift the objects up,
/// deduplicated by id, renaming the old `name` field to `text`.
fn hoist_embedded_labels(root: &mut serde_json::Map<String, Value>) -> bool {
    let mut hoisted: Vec<Value> = Vec::new();
    let mut changed = false;

    if let Some(lists) = root.get_mut("lists").and_then(Value::as_array_mut) {
        for list in lists {
            let Some(cards) = list.get_mut("cards").and_then(Value::as_array_mut) else {
                continue;
            };
            for card in cards {
                let Some(card) = card.as_object_mut() else {
                    continue;
                };
                let Some(Value::Array(embedded)) = card.remove("labels") else {
                    continue;
                };
                changed = true;

                let mut label_ids: Vec<Value> = card
                    .get("labelIds")
                    .and_then(Value::as_array)
                    .cloned()
                    .unwrap_or_default();

                for label in embedded {
                    let Some(id) = label.get("id").and_then(Value::as_str) else {
                        continue;
                    };
                    if !label_ids.iter().any(|v| v.as_str() == Some(id)) {
                        label_ids.push(Value::String(id.to_string()));
                    }
                    let text = label
                        .get("text")
                        .or_else(|| label.get("name"))
                        .and_then(Value::as_str)
                        .unwrap_or_default();
                    let color = label
                        .get("color")
                        .and_then(Value::as_str)
                        .unwrap_or("gray");
                    hoisted.push(json!({ "id": id, "color": color, "text": text }));
                }

                card.insert("labelIds".to_string(), Value::Array(label_ids));
            }
        }
    }

    if !hoisted.is_empty() {
        let labels = root
            .entry("labels".to_string())
            .or_insert_with(|| json!([]));
        if let Some(labels) = labels.as_array_mut() {
            for label in hoisted {
                let id = label.get("id").and_then(Value::as_str);
                let exists = labels
                    .iter()
                    .any(|existing| existing.get("id").and_then(Value::as_str) == id);
                if !exists {
                    labels.push(label);
                }
            }
        }
    }

    changed
}
