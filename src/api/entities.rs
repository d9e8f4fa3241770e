use chrono::{DateTime, Utc};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Me {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub email: String,
    pub region: String,
    #[serde(default)]
    pub new_region: Option<String>,
    pub shard: u32,
    #[serde(default)]
    pub has_avatar: bool,
    #[serde(default)]
    pub is_user: bool,
    pub language: String,
    pub theme: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub created_on: DateTime<Utc>,
    pub region: String,
    #[serde(default)]
    pub new_region: Option<String>,
    pub shard: u32,
    #[serde(default)]
    pub has_avatar: bool,
    #[serde(default)]
    pub is_user: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub has_avatar: bool,
    pub role: u8,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMember {
    pub id: String,
    pub role: u8,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub total_remaining_time: u64,
    #[serde(default)]
    pub total_logged_time: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Authenticated {
    pub me: Me,
    pub my_accounts: Page<Account>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub occurred_on: DateTime<Utc>,
    pub member: String,
    pub item: String,
    pub item_type: String,
    pub action: String,
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub extra_info: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_on: DateTime<Utc>,
    #[serde(default)]
    pub start_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub due_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_remaining_time: u64,
    #[serde(default)]
    pub total_logged_time: u64,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub is_parallel: bool,
    #[serde(default)]
    pub is_public: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub parent: Option<String>,
    #[serde(default)]
    pub first_child: Option<String>,
    #[serde(default)]
    pub next_sibling: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_on: DateTime<Utc>,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub is_parallel: Option<bool>,
    #[serde(default)]
    pub member: Option<String>,
    #[serde(default)]
    pub total_remaining_time: u64,
    #[serde(default)]
    pub total_logged_time: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLog {
    pub id: String,
    pub project: String,
    pub task: String,
    pub member: String,
    pub logged_on: DateTime<Utc>,
    #[serde(default)]
    pub task_has_been_deleted: bool,
    pub task_name: String,
    pub duration: u64,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ancestor {
    pub id: String,
    pub name: String,
}

/// One page of a listing endpoint. Each endpoint names its list after
/// what it holds (`members`, `projects`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(
        alias = "accounts",
        alias = "members",
        alias = "projects",
        alias = "timeLogs"
    )]
    pub results: Vec<T>,
    #[serde(default)]
    pub more: bool,
}
