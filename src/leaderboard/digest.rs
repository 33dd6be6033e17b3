//! Keyed SHA-256 digest over the leaderboard entries.
//!
//! The digest is `sha256(canonical_json(entries) || secret)`, hex encoded.
//! Canonical JSON is compact with object keys sorted at every depth, so the
//! digest does not depend on how the file happened to be formatted.
//!
//! This is tamper evidence, not authentication: the secret ships inside the
//! binary and anyone who extracts it can forge a matching digest. It only
//! stops casual hand-edits of the file.

use super::types::LeaderboardEntry;
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Serialize a JSON value with sorted object keys and no whitespace.
pub fn canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            let mut fields: Vec<(&String, &Value)> = map.iter().collect();
            fields.sort_by(|a, b| a.0.cmp(b.0));
            out.push('{');
            for (i, (key, field)) in fields.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String(key.clone()).to_string());
                out.push(':');
                write_canonical(field, out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

/// Digest over exactly these entries, in this order.
pub fn compute_digest(entries: &[LeaderboardEntry], secret: &str) -> Result<String, serde_json::Error> {
    let value = serde_json::to_value(entries)?;
    Ok(digest_value(&value, secret))
}

/// Digest over an already-parsed `entries` value.
pub fn digest_value(entries: &Value, secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical_json(entries).as_bytes());
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(name: &str, score: u64) -> LeaderboardEntry {
        LeaderboardEntry {
            name: name.to_string(),
            score,
            level: 1,
            date: "2024-01-01 00:00:00".to_string(),
        }
    }

    #[test]
    fn test_canonical_json_sorts_keys() {
        let v = json!({"score": 5, "name": "a", "nested": {"z": 1, "a": [true, null]}});
        assert_eq!(
            canonical_json(&v),
            r#"{"name":"a","nested":{"a":[true,null],"z":1},"score":5}"#
        );
    }

    #[test]
    fn test_canonical_json_escapes_strings() {
        let v = json!({"name": "quote\"d"});
        assert_eq!(canonical_json(&v), r#"{"name":"quote\"d"}"#);
    }

    #[test]
    fn test_digest_is_hex_sha256() {
        let d = compute_digest(&[entry("ann", 10)], "secret").unwrap();
        assert_eq!(d.len(), 64);
        assert!(d.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_digest_depends_on_secret_and_content() {
        let entries = vec![entry("ann", 10), entry("bob", 7)];
        let base = compute_digest(&entries, "secret").unwrap();
        assert_eq!(base, compute_digest(&entries, "secret").unwrap());
        assert_ne!(base, compute_digest(&entries, "other").unwrap());

        let mut changed = entries.clone();
        changed[1].score = 8;
        assert_ne!(base, compute_digest(&changed, "secret").unwrap());
    }

    #[test]
    fn test_digest_ignores_key_order() {
        let a = json!([{"name": "ann", "score": 10, "level": 1, "date": "d"}]);
        let b = json!([{"date": "d", "level": 1, "score": 10, "name": "ann"}]);
        assert_eq!(digest_value(&a, "k"), digest_value(&b, "k"));
    }
}
