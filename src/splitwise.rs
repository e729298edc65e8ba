// Copyright (c) 2025 Spendlog Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Deserialize;
use std::time::Duration;

pub const BASE_URL: &str = "https://secure.splitwise.com/api/v3.0";

const UA: &str = concat!(
    "spendlog/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/spendlog/spendlog)"
);

#[derive(Debug, thiserror::Error)]
pub enum SplitwiseError {
    #[error("SPLITWISE_ACCESS_TOKEN is not set")]
    MissingToken,
    #[error("SPLITWISE_USER_ID is not set or not a number")]
    MissingUserId,
    #[error("Splitwise request failed: {0}")]
    Http(#[from] reqwest::Error),
}

// Wire types. Splitwise serializes monetary fields as strings ("25.0"); they
// are parsed into Decimal by the mapper.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteExpense {
    pub id: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub date: Option<String>, // extended ISO-8601, possibly trailing 'Z'
    #[serde(default)]
    pub currency_code: Option<String>,
    #[serde(default)]
    pub cost: Option<String>,
    #[serde(default)]
    pub users: Vec<UserShare>,
    #[serde(default)]
    pub group_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRef {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserShare {
    pub user_id: i64,
    #[serde(default)]
    pub owed_share: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentUser {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExpensesPayload {
    #[serde(default)]
    expenses: Vec<RemoteExpense>,
}

#[derive(Debug, Deserialize)]
struct GroupPayload {
    group: GroupInfo,
}

#[derive(Debug, Deserialize)]
struct GroupInfo {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub user: CurrentUser,
}

/// Read surface of the Splitwise API consumed by the sync orchestrator.
/// Split out as a trait so sync can be exercised against a fake in tests.
pub trait SplitwiseApi {
    fn recent_expenses(&self, limit: usize) -> Result<Vec<RemoteExpense>, SplitwiseError>;
    fn group_name(&self, group_id: i64) -> Result<String, SplitwiseError>;
}

pub struct SplitwiseClient {
    http: reqwest::blocking::Client,
    token: String,
}

impl SplitwiseClient {
    pub fn from_env() -> Result<Self, SplitwiseError> {
        let token =
            std::env::var("SPLITWISE_ACCESS_TOKEN").map_err(|_| SplitwiseError::MissingToken)?;
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(15))
            .user_agent(UA)
            .build()?;
        Ok(Self { http, token })
    }

    fn get(&self, path: &str) -> Result<reqwest::blocking::Response, SplitwiseError> {
        let resp = self
            .http
            .get(format!("{}/{}", BASE_URL, path))
            .bearer_auth(&self.token)
            .send()?
            .error_for_status()?;
        Ok(resp)
    }

    pub fn current_user(&self) -> Result<CurrentUser, SplitwiseError> {
        let payload: UserPayload = self.get("get_current_user")?.json()?;
        Ok(payload.user)
    }
}

impl SplitwiseApi for SplitwiseClient {
    fn recent_expenses(&self, limit: usize) -> Result<Vec<RemoteExpense>, SplitwiseError> {
        let payload: ExpensesPayload = self
            .get(&format!("get_expenses?limit={}", limit))?
            .json()?;
        Ok(payload.expenses)
    }

    fn group_name(&self, group_id: i64) -> Result<String, SplitwiseError> {
        let payload: GroupPayload = self.get(&format!("get_group/{}", group_id))?.json()?;
        Ok(payload.group.name.unwrap_or_else(|| "Unknown".to_string()))
    }
}

/// The viewer's own Splitwise user id, from the environment.
pub fn viewer_id_from_env() -> Result<i64, SplitwiseError> {
    std::env::var("SPLITWISE_USER_ID")
        .ok()
        .and_then(|s| s.trim().parse::<i64>().ok())
        .ok_or(SplitwiseError::MissingUserId)
}
