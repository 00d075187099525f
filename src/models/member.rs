use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Perfil de miembro devuelto por GET /member/info/{license}.
/// Los nombres de campo son los del wire format del backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberProfile {
    pub id: i64,
    pub member_key: String,
    pub member_status: String,
    pub member_name: String,
    pub description: String,
    pub phone: String,
    pub email: String,
    pub mac_address: String,
    pub create_at: DateTime<Utc>,
    pub update_at: DateTime<Utc>,
    pub email_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_body() -> &'static str {
        r#"{
            "id": 1,
            "member_key": "MK-0001",
            "member_status": "active",
            "member_name": "Alice",
            "description": "vip",
            "phone": "13800000000",
            "email": "alice@example.com",
            "mac_address": "00:11:22:33:44:55",
            "create_at": "2024-01-01T00:00:00Z",
            "update_at": "2024-06-01T12:30:00Z",
            "email_count": 3
        }"#
    }

    #[test]
    fn deserializes_success_body() {
        let profile: MemberProfile = serde_json::from_str(sample_body()).unwrap();
        assert_eq!(profile.id, 1);
        assert_eq!(profile.member_name, "Alice");
        assert_eq!(profile.member_key, "MK-0001");
        assert_eq!(profile.email_count, 3);
        assert_eq!(profile.create_at.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn persisted_copy_reproduces_profile() {
        // El store persiste el perfil como JSON y lo rehidrata al arrancar
        let profile: MemberProfile = serde_json::from_str(sample_body()).unwrap();
        let persisted = serde_json::to_string(&profile).unwrap();
        let rehydrated: MemberProfile = serde_json::from_str(&persisted).unwrap();
        assert_eq!(rehydrated, profile);
    }
}
