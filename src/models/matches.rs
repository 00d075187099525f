use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registro de partido.
/// `is_complate` es el nombre real del campo en el backend; no corregir.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: i64,
    pub home_name: String,
    pub away_name: String,
    pub begin_date: DateTime<Utc>,
    pub date: DateTime<Utc>,
    pub is_current: bool,
    pub match_id: String,
    pub round: i64,
    pub is_complate: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_names() {
        let body = r#"{
            "id": 7,
            "home_name": "Arsenal",
            "away_name": "Chelsea",
            "begin_date": "2024-08-10T14:00:00Z",
            "date": "2024-08-10T16:00:00Z",
            "is_current": true,
            "match_id": "EPL-2024-07",
            "round": 1,
            "is_complate": false
        }"#;
        let record: MatchRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.match_id, "EPL-2024-07");
        assert!(record.is_current);
        assert!(!record.is_complate);
    }
}
