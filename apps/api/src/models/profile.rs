#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Row of the hosted `profiles` table. `role` is one of
/// `job_seeker | company | admin`; only job seekers carry skills.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub full_name: String,
    pub role: String,
}
