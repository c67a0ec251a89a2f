/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Serde helper telling "field absent" apart from "field is null".
///
/// Use with `#[serde(default, deserialize_with = "double_option")]`:
/// - absent → `None`
/// - `null` → `Some(None)`
/// - value → `Some(Some(value))`
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        salary: Option<Option<f64>>,
    }

    #[test]
    fn test_double_option_distinguishes_null_and_absent() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.salary, None);

        let null: Patch = serde_json::from_str(r#"{"salary": null}"#).unwrap();
        assert_eq!(null.salary, Some(None));

        let value: Patch = serde_json::from_str(r#"{"salary": 1200}"#).unwrap();
        assert_eq!(value.salary, Some(Some(1200.0)));
    }

    #[test]
    fn test_now_millis_is_recent() {
        // 2024-01-01 00:00:00 UTC
        assert!(now_millis() > 1_704_067_200_000);
    }
}
