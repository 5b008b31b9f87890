//! Business logic services
//!
//! Services encapsulate the proxy layer's logic and coordinate the
//! sequential upstream calls each operation needs.

pub mod auth;
pub mod clients;
pub mod meal_plans;
pub mod roles;
pub mod trainers;
pub mod workouts;

pub use auth::AuthService;
pub use clients::ClientService;
pub use meal_plans::MealPlanService;
pub use roles::RoleService;
pub use trainers::TrainerService;
pub use workouts::WorkoutService;
