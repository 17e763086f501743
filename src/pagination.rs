use serde::Deserialize;

/// Query-string pagination shared by the list endpoints.
#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_absent() {
        let p: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(p.limit, 20);
        assert_eq!(p.offset, 0);
    }

    #[test]
    fn explicit_values_win() {
        let p: Pagination = serde_json::from_str(r#"{"limit":5,"offset":40}"#).unwrap();
        assert_eq!(p.limit, 5);
        assert_eq!(p.offset, 40);
    }
}
