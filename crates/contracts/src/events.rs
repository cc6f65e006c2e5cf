use serde::{Deserialize, Serialize};

/// Who can see an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Private,
    OnlyMe,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::OnlyMe => "only_me",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "private" => Visibility::Private,
            "only_me" => Visibility::OnlyMe,
            _ => Visibility::Public,
        }
    }
}

/// An event as the backend returns it. `status` is an open set owned by the
/// backend (`active`, `cancelled`, ...) and is never interpreted client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub status: String,
    pub visibility: Visibility,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub user_id: String,
}

/// Client-side payload for creating an event. Id, owner and status are
/// assigned server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub date: String,
    pub visibility: Visibility,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// `POST /events/` body: the draft plus the authenticated user's id.
#[derive(Debug, Clone, Serialize)]
pub struct CreateEventRequest {
    #[serde(flatten)]
    pub draft: EventDraft,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// `PUT /events/{id}` body; `None` fields are left untouched server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// `POST /events/favorites` body.
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteRequest {
    pub event_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_accepts_minimal_payload() {
        let body = r#"{"id":"7","title":"Meetup","description":"Monthly","date":"2026-09-01","status":"active","visibility":"only_me","user_id":"3"}"#;
        let event: Event = serde_json::from_str(body).unwrap();
        assert_eq!(event.visibility, Visibility::OnlyMe);
        assert_eq!(event.time, None);
        assert_eq!(event.status, "active");
    }

    #[test]
    fn test_create_request_flattens_draft() {
        let req = CreateEventRequest {
            draft: EventDraft {
                title: "T".into(),
                description: "D".into(),
                date: "2026-09-01".into(),
                visibility: Visibility::Public,
                ..Default::default()
            },
            user_id: Some("42".into()),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["title"], "T");
        assert_eq!(json["visibility"], "public");
        assert_eq!(json["user_id"], "42");
        assert!(json.get("image_url").is_none());
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let patch = EventPatch {
            title: Some("New".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({"title": "New"}));
    }
}
