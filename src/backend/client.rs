use std::time::Duration;

use chrono::NaiveDateTime;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde_json::Value;

use super::normalize;
use super::wire::{
    AppointmentPayload, LoginPayload, PasswordPayload, ProfilePayload, PropertyPayload,
    RawLoginResponse, RawProfile, RawProperty, RawUser, RegisterPayload,
};
use crate::config::Config;
use crate::entities::{
    Appointment, AppointmentId, DashboardStats, PasswordChange, Profile, Property,
    PropertyDetail, PropertyId, PropertyInput, Registration, SessionUser, UserAccount, UserId,
};
use crate::error::{AppError, AppResult};
use crate::pagination::{backend_page, Page};

/// Successful login as reported by the backend
#[derive(Debug, Clone)]
pub struct LoginGrant {
    pub token: String,
    pub username: String,
    pub roles: Vec<String>,
}

/// HTTP client for the external listings backend
#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.backend_timeout_secs))
            .user_agent(concat!("prona-portal/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build http client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.backend_api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}{}", self.base_url, path));
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> AppResult<Response> {
        let request = builder.build()?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        let response = self.http.execute(request).await.map_err(|e| {
            tracing::warn!(method = %method, path = %path, error = %e, "Backend unreachable");
            AppError::from(e)
        })?;

        let status = response.status();
        tracing::debug!(method = %method, path = %path, status = %status, "Backend call");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(AppError::from_backend_status(status, backend_message(&body)))
    }

    async fn send_json(&self, builder: RequestBuilder) -> AppResult<Value> {
        let response = self.send(builder).await?;
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes)
            .map_err(|e| AppError::Upstream(format!("Malformed backend response: {}", e)))
    }

    // ============ Properties ============

    pub async fn list_properties(
        &self,
        page: u32,
        size: u32,
        token: Option<&str>,
    ) -> AppResult<Page<Property>> {
        let body = self
            .send_json(
                self.request(Method::GET, "/properties", token)
                    .query(&[("page", backend_page(page)), ("size", size)]),
            )
            .await?;

        Ok(normalize::page(body, page, normalize::property))
    }

    pub async fn get_property(&self, id: PropertyId) -> AppResult<PropertyDetail> {
        let body = self
            .send_json(self.request(Method::GET, &format!("/properties/{}", id), None))
            .await?;

        decode_property(body)
    }

    /// Properties near `id`, never including `id` itself
    pub async fn nearby_properties(&self, id: PropertyId, radius_km: f64) -> AppResult<Vec<Property>> {
        let body = self
            .send_json(
                self.request(Method::GET, &format!("/properties/{}/nearby", id), None)
                    .query(&[("radiusKm", radius_km)]),
            )
            .await?;

        let mut nearby = normalize::page(body, 1, normalize::property).items;
        nearby.retain(|p| p.id != id);
        Ok(nearby)
    }

    pub async fn create_property(&self, input: &PropertyInput, token: &str) -> AppResult<PropertyDetail> {
        let body = self
            .send_json(
                self.request(Method::POST, "/properties", Some(token))
                    .json(&PropertyPayload::from(input)),
            )
            .await?;

        decode_property(body)
    }

    /// Updates go to the collection of the property's type
    pub async fn update_property(
        &self,
        id: PropertyId,
        input: &PropertyInput,
        token: &str,
    ) -> AppResult<PropertyDetail> {
        let path = format!("/{}/{}", input.property_type.endpoint(), id);
        let body = self
            .send_json(
                self.request(Method::PUT, &path, Some(token))
                    .json(&PropertyPayload::from(input)),
            )
            .await?;

        match body {
            Value::Null => self.get_property(id).await,
            body => decode_property(body),
        }
    }

    pub async fn delete_property(&self, id: PropertyId, token: &str) -> AppResult<()> {
        self.send(self.request(Method::DELETE, &format!("/properties/{}", id), Some(token)))
            .await?;
        Ok(())
    }

    // ============ Auth ============

    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginGrant> {
        let body = self
            .send_json(
                self.request(Method::POST, "/auth/login", None)
                    .json(&LoginPayload { username, password }),
            )
            .await?;

        let raw: RawLoginResponse = serde_json::from_value(body).unwrap_or_default();
        let token = raw
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Upstream("Login response carried no token".to_string()))?;

        Ok(LoginGrant {
            token,
            username: raw.username.unwrap_or_else(|| username.to_string()),
            roles: raw.roles.unwrap_or_default(),
        })
    }

    pub async fn register(&self, form: &Registration) -> AppResult<()> {
        self.send(
            self.request(Method::POST, "/auth/register", None)
                .json(&RegisterPayload::from(form)),
        )
        .await?;
        Ok(())
    }

    pub async fn current_user(&self, token: &str) -> AppResult<SessionUser> {
        let body = self
            .send_json(self.request(Method::GET, "/auth/me", Some(token)))
            .await?;

        let raw: RawUser = serde_json::from_value(body)
            .map_err(|e| AppError::Upstream(format!("Malformed profile: {}", e)))?;

        Ok(SessionUser {
            username: raw.username.unwrap_or_default(),
            email: raw.email,
            roles: raw.roles.unwrap_or_default(),
        })
    }

    pub async fn forgot_password(&self, email: &str) -> AppResult<()> {
        self.send(
            self.request(Method::POST, "/auth/forgot-password", None)
                .query(&[("email", email)]),
        )
        .await?;
        Ok(())
    }

    pub async fn reset_password(&self, reset_token: &str, new_password: &str) -> AppResult<()> {
        self.send(
            self.request(Method::POST, "/auth/reset-password", None)
                .query(&[("token", reset_token), ("newPassword", new_password)]),
        )
        .await?;
        Ok(())
    }

    pub async fn verify_email(&self, verification_token: &str) -> AppResult<()> {
        self.send(
            self.request(Method::GET, "/auth/verify", None)
                .query(&[("token", verification_token)]),
        )
        .await?;
        Ok(())
    }

    // ============ Profile ============

    pub async fn get_profile(&self, token: &str) -> AppResult<Profile> {
        let body = self
            .send_json(self.request(Method::GET, "/profile", Some(token)))
            .await?;

        decode_profile(body)
    }

    /// Returns the stored profile, or `profile` itself when the backend answers with no body
    pub async fn update_profile(&self, profile: &Profile, token: &str) -> AppResult<Profile> {
        let body = self
            .send_json(
                self.request(Method::PUT, "/profile", Some(token))
                    .json(&ProfilePayload::from(profile)),
            )
            .await?;

        match body {
            Value::Object(_) => decode_profile(body),
            _ => Ok(profile.clone()),
        }
    }

    pub async fn change_password(&self, change: &PasswordChange, token: &str) -> AppResult<()> {
        self.send(
            self.request(Method::PUT, "/profile/password", Some(token))
                .json(&PasswordPayload::from(change)),
        )
        .await?;
        Ok(())
    }

    // ============ Appointments ============

    pub async fn list_appointments(&self, page: u32, size: u32, token: &str) -> AppResult<Page<Appointment>> {
        let body = self
            .send_json(
                self.request(Method::GET, "/appointments", Some(token))
                    .query(&[("page", backend_page(page)), ("size", size)]),
            )
            .await?;

        Ok(normalize::page(body, page, normalize::appointment))
    }

    pub async fn request_appointment(
        &self,
        property_id: PropertyId,
        date: NaiveDateTime,
        token: &str,
    ) -> AppResult<()> {
        let payload = AppointmentPayload {
            property_id,
            date: date.format("%Y-%m-%dT%H:%M").to_string(),
        };
        self.send(
            self.request(Method::POST, "/appointments", Some(token))
                .json(&payload),
        )
        .await?;
        Ok(())
    }

    pub async fn approve_appointment(&self, id: AppointmentId, token: &str) -> AppResult<()> {
        self.send(self.request(Method::PUT, &format!("/appointments/{}/approve", id), Some(token)))
            .await?;
        Ok(())
    }

    pub async fn reject_appointment(&self, id: AppointmentId, token: &str) -> AppResult<()> {
        self.send(self.request(Method::PUT, &format!("/appointments/{}/reject", id), Some(token)))
            .await?;
        Ok(())
    }

    // ============ Users ============

    pub async fn list_users(
        &self,
        page: u32,
        size: u32,
        search: Option<&str>,
        token: &str,
    ) -> AppResult<Page<UserAccount>> {
        let mut builder = self
            .request(Method::GET, "/users", Some(token))
            .query(&[("page", backend_page(page)), ("size", size)]);
        if let Some(search) = search.filter(|s| !s.trim().is_empty()) {
            builder = builder.query(&[("search", search.trim())]);
        }

        let body = self.send_json(builder).await?;
        Ok(normalize::page(body, page, normalize::user))
    }

    pub async fn toggle_user_status(&self, id: UserId, token: &str) -> AppResult<()> {
        self.send(self.request(Method::PUT, &format!("/users/{}/toggle-status", id), Some(token)))
            .await?;
        Ok(())
    }

    pub async fn update_user_email(&self, id: UserId, email: &str, token: &str) -> AppResult<()> {
        self.send(
            self.request(Method::PUT, &format!("/users/{}/email", id), Some(token))
                .query(&[("email", email)]),
        )
        .await?;
        Ok(())
    }

    pub async fn update_user_roles(&self, id: UserId, roles: &[String], token: &str) -> AppResult<()> {
        self.send(
            self.request(Method::PUT, &format!("/users/{}/roles", id), Some(token))
                .json(roles),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_user(&self, id: UserId, token: &str) -> AppResult<()> {
        self.send(self.request(Method::DELETE, &format!("/users/{}", id), Some(token)))
            .await?;
        Ok(())
    }

    pub async fn dashboard_stats(&self, token: &str) -> AppResult<DashboardStats> {
        let body = self
            .send_json(self.request(Method::GET, "/users/stats", Some(token)))
            .await?;

        serde_json::from_value(body)
            .map_err(|e| AppError::Upstream(format!("Malformed stats: {}", e)))
    }
}

fn decode_property(body: Value) -> AppResult<PropertyDetail> {
    let raw: RawProperty = serde_json::from_value(body)
        .map_err(|e| AppError::Upstream(format!("Malformed property: {}", e)))?;

    normalize::property_detail(raw)
        .ok_or_else(|| AppError::Upstream("Property response carried no id".to_string()))
}

fn decode_profile(body: Value) -> AppResult<Profile> {
    let raw: RawProfile = serde_json::from_value(body)
        .map_err(|e| AppError::Upstream(format!("Malformed profile: {}", e)))?;

    Ok(Profile {
        username: raw.username.unwrap_or_default(),
        first_name: raw.first_name.unwrap_or_default(),
        last_name: raw.last_name.unwrap_or_default(),
        phone_number: raw.phone_number.unwrap_or_default(),
    })
}

/// Prefer the `message` of a JSON error body over the raw text
fn backend_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => ["message", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(String::from)
            .unwrap_or_else(|| body.to_string()),
        _ => body.to_string(),
    }
}
