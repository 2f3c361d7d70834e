use serde::Deserialize;

/// Request body for user registration.
///
/// `role` and `bio` are deliberately absent: both are server-assigned at
/// creation and silently dropped if a client sends them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreateDto {
    pub username: String,
    pub email: String,
    pub password: String,
    pub avatar: String,
    pub location: String,
    pub birth_date_string: String,
    pub gender: String,
}

/// Partial update payload; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateDto {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub avatar: Option<String>,
    pub location: Option<String>,
    pub birth_date_string: Option<String>,
    pub gender: Option<String>,
    pub bio: Option<String>,
}
