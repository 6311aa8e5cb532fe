use serde::{Deserialize, Serialize};

use crate::errors::ApiError;

/// A text field is missing when absent, `null` or empty; whitespace counts as a value.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewUserDto {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
    pub role: String,
}

impl SignupRequest {
    pub fn validate(self) -> Result<NewUserDto, ApiError> {
        match (
            present(&self.name),
            present(&self.email),
            present(&self.mobile),
            present(&self.password),
            present(&self.role),
        ) {
            (Some(name), Some(email), Some(mobile), Some(password), Some(role)) => Ok(NewUserDto {
                name: name.to_string(),
                email: email.to_string(),
                mobile: mobile.to_string(),
                password: password.to_string(),
                role: role.to_string(),
            }),
            _ => Err(ApiError::validation("All fields are required")),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(self) -> Result<Credentials, ApiError> {
        match (present(&self.email), present(&self.password)) {
            (Some(email), Some(password)) => Ok(Credentials {
                email: email.to_string(),
                password: password.to_string(),
            }),
            _ => Err(ApiError::validation("Email and password are required")),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct NewEventRequest {
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub total_seats: Option<i32>,
    pub left_seats: Option<i32>,
    pub location: Option<String>,
    pub tags: Option<String>,
    pub highlights: Option<String>,
    pub organizer: Option<String>,
    pub description: Option<String>,
    pub banner_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEventDto {
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

impl NewEventRequest {
    /// Required text is passed through untouched so it reads back byte for byte.
    pub fn validate(self) -> Result<NewEventDto, ApiError> {
        if present(&self.title).is_none()
            || present(&self.date).is_none()
            || present(&self.time).is_none()
        {
            return Err(Self::missing());
        }
        match (self.title, self.date, self.time, self.total_seats, self.left_seats) {
            (Some(title), Some(date), Some(time), Some(total_seats), Some(left_seats)) => {
                Ok(NewEventDto {
                    title,
                    date,
                    time,
                    total_seats,
                    left_seats,
                    location: self.location,
                    tags: self.tags,
                    highlights: self.highlights,
                    organizer: self.organizer,
                    description: self.description,
                    banner_image: self.banner_image,
                })
            }
            _ => Err(Self::missing()),
        }
    }

    fn missing() -> ApiError {
        ApiError::validation("Title, date, time, total_seats and left_seats are required")
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct NewRegistrationRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewRegistrationDto {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub message: Option<String>,
}

impl NewRegistrationRequest {
    pub fn validate(self) -> Result<NewRegistrationDto, ApiError> {
        match (present(&self.name), present(&self.email), present(&self.mobile)) {
            (Some(name), Some(email), Some(mobile)) => Ok(NewRegistrationDto {
                name: name.to_string(),
                email: email.to_string(),
                mobile: mobile.to_string(),
                message: self.message,
            }),
            _ => Err(ApiError::validation("Name, email, and mobile are required")),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Claims {
    pub id: i32,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub iat: usize,
    pub exp: usize,
}

impl Claims {
    pub fn new(id: i32, email: &str, role: Option<&str>, iat: usize, ttl: usize) -> Self {
        Self {
            id,
            email: email.to_string(),
            role: role.map(str::to_string),
            iat,
            exp: iat + ttl,
        }
    }
}
