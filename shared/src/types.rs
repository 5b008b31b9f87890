//! API request and response types
//!
//! Every type here mirrors the JSON exchanged over the wire. Field names
//! are camelCase on the wire; the upstream platform owns the entity ids,
//! which are treated as opaque strings throughout.

use crate::exercises::Exercises;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// API error response body: `{error, details?}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

// ============================================================================
// Users
// ============================================================================

/// Flat user identity record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl UserView {
    /// Display name as rendered by the dashboard ("First Last")
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// Response for login/signup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: UserView,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Signup request (self-service trainer registration)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

// ============================================================================
// Clients
// ============================================================================

/// Placeholder shown when a client has no assigned trainer
pub const UNASSIGNED_TRAINER: &str = "Unassigned";

/// Flat client view model with rolled-up counts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub trainer_id: Option<String>,
    /// `"Unassigned"` when no trainer is linked
    pub trainer_name: String,
    pub workout_count: i64,
    pub meal_plan_count: i64,
    pub weight_trend_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientsResponse {
    pub clients: Vec<ClientSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientResponse {
    pub client: ClientSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// Defaults server-side when absent
    pub password: Option<String>,
    pub trainer_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientRequest {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignTrainerRequest {
    pub client_id: Option<String>,
    pub trainer_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveTrainerRequest {
    pub client_id: Option<String>,
}

// ============================================================================
// Trainers
// ============================================================================

/// Flat trainer view model
///
/// `phone`, `specialization` and `rating` are carried for the dashboard but
/// the upstream schema never populates them; they serialize as empty/zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerSummary {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialization: String,
    pub rating: f64,
    pub client_count: i64,
    pub clients: Vec<ClientSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainersResponse {
    pub trainers: Vec<TrainerSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerResponse {
    pub trainer: TrainerSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrainerRequest {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

// ============================================================================
// Role resolution
// ============================================================================

/// Who a given email acts as, with the payload the dashboard renders.
///
/// Discriminated by the `kind` tag. A user linked to both a client and a
/// trainer record resolves as a client; the client lookup runs first and
/// short-circuits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RoleProfile {
    Admin {
        name: String,
        email: String,
        clients: Vec<ClientSummary>,
    },
    Client {
        #[serde(flatten)]
        profile: ClientSummary,
        /// Always empty: a client manages no one
        clients: Vec<ClientSummary>,
    },
    Trainer {
        #[serde(flatten)]
        profile: TrainerSummary,
    },
}

// ============================================================================
// Workouts
// ============================================================================

/// Flat workout view model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutView {
    pub id: String,
    pub name: String,
    pub exercises: Exercises,
    pub completed: bool,
    pub client_id: Option<String>,
    pub trainer_id: Option<String>,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutsResponse {
    pub workouts: Vec<WorkoutView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutResponse {
    pub workout: WorkoutView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub exercises: Option<Exercises>,
    /// Single-client form
    pub client_id: Option<String>,
    /// Multi-client form: one workout is created per listed client
    pub client_ids: Option<Vec<String>>,
    pub trainer_id: Option<String>,
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub completed: bool,
}

/// Outcome of workout creation; `failed` counts clients whose per-client
/// mutation did not persist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkoutsResponse {
    pub workouts: Vec<WorkoutView>,
    pub created: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkoutRequest {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub exercises: Option<Exercises>,
    pub completed: Option<bool>,
    pub due_date: Option<NaiveDate>,
}

// ============================================================================
// Meal plans
// ============================================================================

/// A single meal with macro totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub calories: f64,
    pub carbs: f64,
    pub fats: f64,
    pub protein: f64,
}

/// Flat meal plan view model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub client_id: Option<String>,
    pub trainer_id: Option<String>,
    pub meals: Vec<Meal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlansResponse {
    pub meal_plans: Vec<MealPlanView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanResponse {
    pub meal_plan: MealPlanView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMealPlanRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub client_id: Option<String>,
    pub trainer_id: Option<String>,
    #[serde(default)]
    pub meals: Vec<Meal>,
}

/// Outcome of meal plan creation; the meal fan-out is awaited before the
/// response is produced, so the counts reflect what was actually persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMealPlanResponse {
    pub meal_plan: MealPlanView,
    pub meals_created: usize,
    pub meals_failed: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMealPlanRequest {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

// ============================================================================
// Deletion
// ============================================================================

/// Body for the DELETE routes: `{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub id: Option<String>,
}

/// Outcome of a delete. Cascading deletes report a secondary failure
/// (an orphaned user account) through `warning` without failing the
/// primary operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
