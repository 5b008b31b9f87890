//! Typed API client for the Studio Admin backend
//!
//! One async method per route. On a non-OK status the response body is
//! parsed for its `error` field, with a hardcoded fallback message per
//! wrapper. No retries, no caching; timeouts are whatever reqwest
//! defaults to.

use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use studio_admin_shared::types::{
    AssignTrainerRequest, ClientResponse, ClientSummary, ClientsResponse, CreateClientRequest,
    CreateMealPlanRequest, CreateMealPlanResponse, CreateWorkoutRequest, CreateWorkoutsResponse,
    DeleteRequest, DeleteResponse, ErrorBody, LoginRequest, MealPlanResponse, MealPlanView,
    MealPlansResponse, RemoveTrainerRequest, RoleProfile, SignupRequest, TrainerResponse,
    TrainerSummary, TrainersResponse, UpdateClientRequest, UpdateMealPlanRequest,
    UpdateTrainerRequest, UpdateWorkoutRequest, UserResponse, UserView, WorkoutResponse,
    WorkoutView, WorkoutsResponse,
};

/// Error type for API client operations
#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-OK status; `message` is the body's
    /// `error` field or the wrapper's fallback.
    #[error("{message}")]
    Api { status: u16, message: String },
}

type Result<T> = std::result::Result<T, ApiClientError>;

/// Client for the Studio Admin backend API
#[derive(Debug, Clone)]
pub struct AdminApi {
    http: reqwest::Client,
    base_url: String,
}

impl AdminApi {
    /// Create a client for the given base URL (e.g. `http://localhost:8080`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        fallback: &str,
    ) -> Result<T> {
        let request = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(query);
        Self::finish(request.send().await?, fallback).await
    }

    async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T> {
        let request = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .json(body);
        Self::finish(request.send().await?, fallback).await
    }

    async fn finish<T: DeserializeOwned>(response: reqwest::Response, fallback: &str) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .map(|body| body.error)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| fallback.to_string());

        Err(ApiClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    // ========================================================================
    // Trainers
    // ========================================================================

    pub async fn get_all_trainers(&self) -> Result<Vec<TrainerSummary>> {
        let data: TrainersResponse = self
            .get("/api/trainers/getAll", &[], "Failed to fetch trainers")
            .await?;
        Ok(data.trainers)
    }

    pub async fn get_trainer_by_id(&self, id: &str) -> Result<TrainerSummary> {
        let data: TrainerResponse = self
            .get("/api/trainers/getById", &[("id", id)], "Failed to fetch trainer")
            .await?;
        Ok(data.trainer)
    }

    /// Resolve who an email acts as; the payload is tagged
    /// `admin`/`client`/`trainer`.
    pub async fn get_trainer_by_email(&self, email: &str) -> Result<RoleProfile> {
        self.get(
            "/api/trainers/getByEmail",
            &[("email", email)],
            "Failed to resolve profile",
        )
        .await
    }

    pub async fn update_trainer(&self, req: &UpdateTrainerRequest) -> Result<TrainerSummary> {
        let data: TrainerResponse = self
            .send(Method::PUT, "/api/trainers/update", req, "Failed to update trainer")
            .await?;
        Ok(data.trainer)
    }

    pub async fn delete_trainer(&self, id: &str) -> Result<DeleteResponse> {
        let body = DeleteRequest {
            id: Some(id.to_string()),
        };
        self.send(
            Method::DELETE,
            "/api/trainers/delete",
            &body,
            "Failed to delete trainer",
        )
        .await
    }

    // ========================================================================
    // Clients
    // ========================================================================

    pub async fn get_all_clients(&self) -> Result<Vec<ClientSummary>> {
        let data: ClientsResponse = self
            .get("/api/clients/getAll", &[], "Failed to fetch clients")
            .await?;
        Ok(data.clients)
    }

    pub async fn get_client_by_id(&self, id: &str) -> Result<ClientSummary> {
        let data: ClientResponse = self
            .get("/api/clients/getById", &[("id", id)], "Failed to fetch client")
            .await?;
        Ok(data.client)
    }

    pub async fn get_clients_by_trainer(&self, trainer_id: &str) -> Result<Vec<ClientSummary>> {
        let data: ClientsResponse = self
            .get(
                "/api/clients/getByTrainer",
                &[("trainerId", trainer_id)],
                "Failed to fetch clients",
            )
            .await?;
        Ok(data.clients)
    }

    pub async fn create_client(&self, req: &CreateClientRequest) -> Result<ClientSummary> {
        let data: ClientResponse = self
            .send(Method::POST, "/api/clients/create", req, "Failed to create client")
            .await?;
        Ok(data.client)
    }

    pub async fn update_client(&self, req: &UpdateClientRequest) -> Result<ClientSummary> {
        let data: ClientResponse = self
            .send(Method::PUT, "/api/clients/update", req, "Failed to update client")
            .await?;
        Ok(data.client)
    }

    pub async fn delete_client(&self, id: &str) -> Result<DeleteResponse> {
        let body = DeleteRequest {
            id: Some(id.to_string()),
        };
        self.send(
            Method::DELETE,
            "/api/clients/delete",
            &body,
            "Failed to delete client",
        )
        .await
    }

    pub async fn assign_trainer(&self, client_id: &str, trainer_id: &str) -> Result<ClientSummary> {
        let body = AssignTrainerRequest {
            client_id: Some(client_id.to_string()),
            trainer_id: Some(trainer_id.to_string()),
        };
        let data: ClientResponse = self
            .send(
                Method::PUT,
                "/api/clients/assignTrainer",
                &body,
                "Failed to assign trainer",
            )
            .await?;
        Ok(data.client)
    }

    pub async fn remove_trainer(&self, client_id: &str) -> Result<ClientSummary> {
        let body = RemoveTrainerRequest {
            client_id: Some(client_id.to_string()),
        };
        let data: ClientResponse = self
            .send(
                Method::PUT,
                "/api/clients/removeTrainer",
                &body,
                "Failed to remove trainer",
            )
            .await?;
        Ok(data.client)
    }

    // ========================================================================
    // Workouts
    // ========================================================================

    pub async fn get_all_workouts(&self, client_id: Option<&str>) -> Result<Vec<WorkoutView>> {
        let mut query = Vec::new();
        if let Some(client_id) = client_id {
            query.push(("clientId", client_id));
        }
        let data: WorkoutsResponse = self
            .get("/api/workouts/getAll", &query, "Failed to fetch workouts")
            .await?;
        Ok(data.workouts)
    }

    pub async fn get_workout_by_id(&self, id: &str) -> Result<WorkoutView> {
        let data: WorkoutResponse = self
            .get("/api/workouts/getById", &[("id", id)], "Failed to fetch workout")
            .await?;
        Ok(data.workout)
    }

    pub async fn create_workout(&self, req: &CreateWorkoutRequest) -> Result<CreateWorkoutsResponse> {
        self.send(Method::POST, "/api/workouts/create", req, "Failed to create workout")
            .await
    }

    pub async fn update_workout(&self, req: &UpdateWorkoutRequest) -> Result<WorkoutView> {
        let data: WorkoutResponse = self
            .send(Method::PUT, "/api/workouts/update", req, "Failed to update workout")
            .await?;
        Ok(data.workout)
    }

    pub async fn delete_workout(&self, id: &str) -> Result<DeleteResponse> {
        let body = DeleteRequest {
            id: Some(id.to_string()),
        };
        self.send(
            Method::DELETE,
            "/api/workouts/delete",
            &body,
            "Failed to delete workout",
        )
        .await
    }

    // ========================================================================
    // Meal plans
    // ========================================================================

    pub async fn get_all_meal_plans(&self, client_id: Option<&str>) -> Result<Vec<MealPlanView>> {
        let mut query = Vec::new();
        if let Some(client_id) = client_id {
            query.push(("clientId", client_id));
        }
        let data: MealPlansResponse = self
            .get("/api/mealPlans/getAll", &query, "Failed to fetch meal plans")
            .await?;
        Ok(data.meal_plans)
    }

    pub async fn get_meal_plan_by_id(&self, id: &str) -> Result<MealPlanView> {
        let data: MealPlanResponse = self
            .get("/api/mealPlans/getById", &[("id", id)], "Failed to fetch meal plan")
            .await?;
        Ok(data.meal_plan)
    }

    pub async fn create_meal_plan(
        &self,
        req: &CreateMealPlanRequest,
    ) -> Result<CreateMealPlanResponse> {
        self.send(
            Method::POST,
            "/api/mealPlans/create",
            req,
            "Failed to create meal plan",
        )
        .await
    }

    pub async fn update_meal_plan(&self, req: &UpdateMealPlanRequest) -> Result<MealPlanView> {
        let data: MealPlanResponse = self
            .send(
                Method::PUT,
                "/api/mealPlans/update",
                req,
                "Failed to update meal plan",
            )
            .await?;
        Ok(data.meal_plan)
    }

    pub async fn delete_meal_plan(&self, id: &str) -> Result<DeleteResponse> {
        let body = DeleteRequest {
            id: Some(id.to_string()),
        };
        self.send(
            Method::DELETE,
            "/api/mealPlans/delete",
            &body,
            "Failed to delete meal plan",
        )
        .await
    }

    // ========================================================================
    // Auth
    // ========================================================================

    pub async fn login(&self, email: &str, password: &str) -> Result<UserView> {
        let body = LoginRequest {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        };
        let data: UserResponse = self
            .send(Method::POST, "/api/login", &body, "Login failed")
            .await?;
        Ok(data.user)
    }

    pub async fn signup(&self, req: &SignupRequest) -> Result<UserView> {
        let data: UserResponse = self
            .send(Method::POST, "/api/signup", req, "Signup failed")
            .await?;
        Ok(data.user)
    }
}
