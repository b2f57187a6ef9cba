//! Request payloads for the simulated endpoints.
//!
//! No backend exists. These are the bodies a real integration would send:
//!
//! | Payload | Endpoint |
//! |---------|----------|
//! | [`LoginRequest`] | `POST /auth/login` |
//! | [`SignupRequest`] | `POST /auth/signup` |
//! | [`OtpVerifyRequest`] | `POST /auth/otp/verify` |
//! | [`PasswordResetRequest`] | `POST /auth/password/reset` |
//! | [`CheckoutRequest`] | `POST /checkout` |
//!
//! Each is built from a validated [`FormValues`] snapshot.

use serde::{Deserialize, Serialize};

use crate::validation::{FieldValues, FormValues};

fn field(values: &FormValues, name: &str) -> String {
    values.value(name).unwrap_or("").to_string()
}

fn flag(values: &FormValues, name: &str) -> bool {
    values.value(name) == Some("true")
}

fn optional(values: &FormValues, name: &str) -> Option<String> {
    values
        .value(name)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginRequest {
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            email: field(values, "email"),
            password: field(values, "password"),
            remember_me: flag(values, "rememberMe"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl SignupRequest {
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            first_name: field(values, "firstName"),
            last_name: field(values, "lastName"),
            email: field(values, "email"),
            password: field(values, "password"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OtpVerifyRequest {
    pub otp: String,
}

impl OtpVerifyRequest {
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            otp: field(values, "otp"),
        }
    }
}

/// Sent both for reset requests and OTP resends.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PasswordResetRequest {
    pub email: String,
}

impl PasswordResetRequest {
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            email: field(values, "email"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub full_name: String,
    pub email: String,
    pub course: String,
    pub gender: String,
    pub phone: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CheckoutRequest {
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            full_name: field(values, "fullName"),
            email: field(values, "email"),
            course: field(values, "course"),
            gender: field(values, "gender"),
            phone: field(values, "phone"),
            location: field(values, "location"),
            description: optional(values, "description"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub location: String,
}

impl ProfileUpdateRequest {
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            first_name: field(values, "firstName"),
            last_name: field(values, "lastName"),
            phone: field(values, "phone"),
            location: field(values, "location"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeRequest {
    pub new_password: String,
}

impl PasswordChangeRequest {
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            new_password: field(values, "newPassword"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn login_uses_camel_case_keys() {
        let req = LoginRequest::from_values(&values(&[
            ("email", "a@b.com"),
            ("password", "abcdef"),
            ("rememberMe", "true"),
        ]));
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["rememberMe"], true);
        assert_eq!(json["email"], "a@b.com");
    }

    #[test]
    fn checkout_omits_empty_description() {
        let req = CheckoutRequest::from_values(&values(&[("fullName", "Kofi"), ("description", "")]));
        assert_eq!(req.description, None);
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("description"));
        assert!(json.contains("\"fullName\":\"Kofi\""));
    }
}
