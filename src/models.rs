use chrono::Utc;
use sqlx::prelude::FromRow;

#[derive(Debug, FromRow, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub mobile: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: String,
}

#[derive(Debug, FromRow, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub date: String,
    pub time: String,
    pub total_seats: i32,
    pub left_seats: i32,
    pub location: Option<String>,
    pub tags: Option<String>,
    pub highlights: Option<String>,
    pub organizer: Option<String>,
    pub description: Option<String>,
    pub banner_image: Option<String>,
}

#[derive(Debug, FromRow, serde::Serialize, serde::Deserialize)]
pub struct Registration {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub message: Option<String>,
    pub created_at: chrono::DateTime<Utc>,
}
