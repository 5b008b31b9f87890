//! Graph-shaped upstream records and their flattening into view models
//!
//! The upstream returns connections (`edges`/`node`) with nested
//! user/trainer/client objects. Everything the dashboard consumes is flat,
//! so each record knows how to collapse itself: counts come from counting
//! edges (0 when the connection is absent), and a client with no trainer
//! renders `"Unassigned"`.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use studio_admin_shared::exercises::Exercises;
use studio_admin_shared::types::{
    ClientSummary, Meal, MealPlanView, TrainerSummary, UserView, WorkoutView, UNASSIGNED_TRAINER,
};

/// A GraphQL connection: `{edges: [{node: ...}]}`
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Connection<T> {
    #[serde(default)]
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

impl<T> Connection<T> {
    pub fn count(&self) -> i64 {
        self.edges.len() as i64
    }

    pub fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

/// Edge count of an optional connection; absent connections count as 0.
fn count_or_zero<T>(connection: &Option<Connection<T>>) -> i64 {
    connection.as_ref().map(Connection::count).unwrap_or(0)
}

/// A node queried only for its id, for edge counting.
#[derive(Debug, Clone, Deserialize)]
pub struct IdNode {
    pub id: String,
}

// ============================================================================
// Users
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    /// Requested only by the login lookup; never echoed downstream.
    #[serde(default)]
    pub password: Option<String>,
}

impl UserRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn into_view(self) -> UserView {
        UserView {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}

/// (user_id, name, email) of an optional nested user.
fn flatten_user(user: Option<UserRecord>) -> (String, String, String) {
    match user {
        Some(user) => {
            let name = user.full_name();
            (user.id, name, user.email)
        }
        None => (String::new(), String::new(), String::new()),
    }
}

// ============================================================================
// Clients
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub id: String,
    #[serde(default)]
    pub user: Option<UserRecord>,
    #[serde(default)]
    pub trainer: Option<TrainerLink>,
    #[serde(default)]
    pub workouts: Option<Connection<IdNode>>,
    #[serde(default)]
    pub meal_plans: Option<Connection<IdNode>>,
    #[serde(default)]
    pub weight_trends: Option<Connection<IdNode>>,
}

/// The trainer object nested inside a client record.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainerLink {
    pub id: String,
    #[serde(default)]
    pub user: Option<UserRecord>,
}

impl ClientRecord {
    /// Linked user id, empty when the user object was not returned.
    pub fn user_id(&self) -> &str {
        self.user.as_ref().map(|u| u.id.as_str()).unwrap_or("")
    }

    pub fn into_summary(self) -> ClientSummary {
        let (trainer_id, trainer_name) = match self.trainer {
            Some(trainer) => {
                let name = trainer
                    .user
                    .map(|user| user.full_name())
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| UNASSIGNED_TRAINER.to_string());
                (Some(trainer.id), name)
            }
            None => (None, UNASSIGNED_TRAINER.to_string()),
        };

        let workout_count = count_or_zero(&self.workouts);
        let meal_plan_count = count_or_zero(&self.meal_plans);
        let weight_trend_count = count_or_zero(&self.weight_trends);

        let (user_id, name, email) = flatten_user(self.user);

        ClientSummary {
            id: self.id,
            user_id,
            name,
            email,
            trainer_id,
            trainer_name,
            workout_count,
            meal_plan_count,
            weight_trend_count,
        }
    }
}

// ============================================================================
// Trainers
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct TrainerRecord {
    pub id: String,
    #[serde(default)]
    pub user: Option<UserRecord>,
    #[serde(default)]
    pub clients: Option<Connection<ClientRecord>>,
}

impl TrainerRecord {
    pub fn user_id(&self) -> &str {
        self.user.as_ref().map(|u| u.id.as_str()).unwrap_or("")
    }

    pub fn into_summary(self) -> TrainerSummary {
        let clients: Vec<ClientSummary> = self
            .clients
            .map(Connection::into_nodes)
            .unwrap_or_default()
            .into_iter()
            .map(ClientRecord::into_summary)
            .collect();

        let (user_id, name, email) = flatten_user(self.user);

        TrainerSummary {
            id: self.id,
            user_id,
            name,
            email,
            // The upstream schema carries no contact or rating fields for
            // trainers; the dashboard still expects the keys.
            phone: String::new(),
            specialization: String::new(),
            rating: 0.0,
            client_count: clients.len() as i64,
            clients,
        }
    }
}

// ============================================================================
// Workouts
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Array or pre-serialized JSON string; normalized on flattening.
    #[serde(default)]
    pub exercises: Value,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub trainer_id: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

impl WorkoutRecord {
    pub fn into_view(self) -> WorkoutView {
        WorkoutView {
            id: self.id,
            name: self.name,
            exercises: Exercises::parse(self.exercises),
            completed: self.completed,
            client_id: self.client_id,
            trainer_id: self.trainer_id,
            due_date: self.due_date,
        }
    }
}

// ============================================================================
// Meal plans
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub trainer_id: Option<String>,
    #[serde(default)]
    pub meals: Option<Connection<MealRecord>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MealRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fats: f64,
    #[serde(default)]
    pub protein: f64,
}

impl MealPlanRecord {
    pub fn into_view(self) -> MealPlanView {
        let meals = self
            .meals
            .map(Connection::into_nodes)
            .unwrap_or_default()
            .into_iter()
            .map(|meal| Meal {
                name: meal.name,
                calories: meal.calories,
                carbs: meal.carbs,
                fats: meal.fats,
                protein: meal.protein,
            })
            .collect();

        MealPlanView {
            id: self.id,
            name: self.name,
            description: self.description.unwrap_or_default(),
            client_id: self.client_id,
            trainer_id: self.trainer_id,
            meals,
        }
    }
}
