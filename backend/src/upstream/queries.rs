//! GraphQL operation documents
//!
//! Conventions shared by every document so the generic wrappers in
//! [`super::graphql`] can deserialize any of them:
//! - query roots are aliased `items`
//! - mutation roots are aliased `payload`, their entity aliased `record`
//! - mutation payloads expose `{success, errors { message }}`

// ============================================================================
// Users
// ============================================================================

pub const USER_BY_EMAIL: &str = r#"
query UserByEmail($email: String!) {
  items: users(filter: { email: { eq: $email } }) {
    edges {
      node { id firstName lastName email }
    }
  }
}
"#;

/// Same lookup, plus the stored password for credential checks.
pub const USER_FOR_LOGIN: &str = r#"
query UserForLogin($email: String!) {
  items: users(filter: { email: { eq: $email } }) {
    edges {
      node { id firstName lastName email password }
    }
  }
}
"#;

pub const CREATE_USER: &str = r#"
mutation CreateUser($firstName: String, $lastName: String, $email: String!, $password: String!) {
  payload: userCreate(input: { firstName: $firstName, lastName: $lastName, email: $email, password: $password }) {
    success
    errors { message }
    record: user { id firstName lastName email }
  }
}
"#;

pub const UPDATE_USER: &str = r#"
mutation UpdateUser($id: ID!, $firstName: String, $lastName: String, $email: String) {
  payload: userUpdate(input: { id: $id, firstName: $firstName, lastName: $lastName, email: $email }) {
    success
    errors { message }
    record: user { id firstName lastName email }
  }
}
"#;

pub const DELETE_USER: &str = r#"
mutation DeleteUser($id: ID!) {
  payload: userDelete(id: $id) {
    success
    errors { message }
  }
}
"#;

// ============================================================================
// Clients
// ============================================================================
// Client nodes always carry the nested user, the trainer link, and the
// id-only connections the counts are rolled up from.

pub const CLIENTS_ALL: &str = r#"
query ClientsAll {
  items: clients {
    edges {
      node {
        id
        user { id firstName lastName email }
        trainer { id user { id firstName lastName email } }
        workouts { edges { node { id } } }
        mealPlans { edges { node { id } } }
        weightTrends { edges { node { id } } }
      }
    }
  }
}
"#;

pub const CLIENT_BY_ID: &str = r#"
query ClientById($id: ID!) {
  items: clients(filter: { id: { eq: $id } }) {
    edges {
      node {
        id
        user { id firstName lastName email }
        trainer { id user { id firstName lastName email } }
        workouts { edges { node { id } } }
        mealPlans { edges { node { id } } }
        weightTrends { edges { node { id } } }
      }
    }
  }
}
"#;

pub const CLIENT_BY_USER: &str = r#"
query ClientByUser($userId: ID!) {
  items: clients(filter: { userId: { eq: $userId } }) {
    edges {
      node {
        id
        user { id firstName lastName email }
        trainer { id user { id firstName lastName email } }
        workouts { edges { node { id } } }
        mealPlans { edges { node { id } } }
        weightTrends { edges { node { id } } }
      }
    }
  }
}
"#;

pub const CLIENTS_BY_TRAINER: &str = r#"
query ClientsByTrainer($trainerId: ID!) {
  items: clients(filter: { trainerId: { eq: $trainerId } }) {
    edges {
      node {
        id
        user { id firstName lastName email }
        trainer { id user { id firstName lastName email } }
        workouts { edges { node { id } } }
        mealPlans { edges { node { id } } }
        weightTrends { edges { node { id } } }
      }
    }
  }
}
"#;

pub const CREATE_CLIENT: &str = r#"
mutation CreateClient($userId: ID!, $trainerId: ID) {
  payload: clientCreate(input: { userId: $userId, trainerId: $trainerId }) {
    success
    errors { message }
    record: client {
      id
      user { id firstName lastName email }
      trainer { id user { id firstName lastName email } }
      workouts { edges { node { id } } }
      mealPlans { edges { node { id } } }
      weightTrends { edges { node { id } } }
    }
  }
}
"#;

/// Assign (trainerId set) or remove (trainerId null) a client's trainer.
pub const SET_CLIENT_TRAINER: &str = r#"
mutation SetClientTrainer($id: ID!, $trainerId: ID) {
  payload: clientUpdate(input: { id: $id, trainerId: $trainerId }) {
    success
    errors { message }
    record: client {
      id
      user { id firstName lastName email }
      trainer { id user { id firstName lastName email } }
      workouts { edges { node { id } } }
      mealPlans { edges { node { id } } }
      weightTrends { edges { node { id } } }
    }
  }
}
"#;

pub const DELETE_CLIENT: &str = r#"
mutation DeleteClient($id: ID!) {
  payload: clientDelete(id: $id) {
    success
    errors { message }
  }
}
"#;

// ============================================================================
// Trainers
// ============================================================================

pub const TRAINERS_ALL: &str = r#"
query TrainersAll {
  items: trainers {
    edges {
      node {
        id
        user { id firstName lastName email }
        clients {
          edges {
            node {
              id
              user { id firstName lastName email }
              trainer { id user { id firstName lastName email } }
              workouts { edges { node { id } } }
              mealPlans { edges { node { id } } }
              weightTrends { edges { node { id } } }
            }
          }
        }
      }
    }
  }
}
"#;

pub const TRAINER_BY_ID: &str = r#"
query TrainerById($id: ID!) {
  items: trainers(filter: { id: { eq: $id } }) {
    edges {
      node {
        id
        user { id firstName lastName email }
        clients {
          edges {
            node {
              id
              user { id firstName lastName email }
              trainer { id user { id firstName lastName email } }
              workouts { edges { node { id } } }
              mealPlans { edges { node { id } } }
              weightTrends { edges { node { id } } }
            }
          }
        }
      }
    }
  }
}
"#;

pub const TRAINER_BY_USER: &str = r#"
query TrainerByUser($userId: ID!) {
  items: trainers(filter: { userId: { eq: $userId } }) {
    edges {
      node {
        id
        user { id firstName lastName email }
        clients {
          edges {
            node {
              id
              user { id firstName lastName email }
              trainer { id user { id firstName lastName email } }
              workouts { edges { node { id } } }
              mealPlans { edges { node { id } } }
              weightTrends { edges { node { id } } }
            }
          }
        }
      }
    }
  }
}
"#;

pub const CREATE_TRAINER: &str = r#"
mutation CreateTrainer($userId: ID!) {
  payload: trainerCreate(input: { userId: $userId }) {
    success
    errors { message }
    record: trainer {
      id
      user { id firstName lastName email }
    }
  }
}
"#;

pub const DELETE_TRAINER: &str = r#"
mutation DeleteTrainer($id: ID!) {
  payload: trainerDelete(id: $id) {
    success
    errors { message }
  }
}
"#;

// ============================================================================
// Workouts
// ============================================================================

pub const WORKOUTS_ALL: &str = r#"
query WorkoutsAll {
  items: workouts {
    edges {
      node { id name exercises completed clientId trainerId dueDate }
    }
  }
}
"#;

pub const WORKOUTS_BY_CLIENT: &str = r#"
query WorkoutsByClient($clientId: ID!) {
  items: workouts(filter: { clientId: { eq: $clientId } }) {
    edges {
      node { id name exercises completed clientId trainerId dueDate }
    }
  }
}
"#;

pub const WORKOUT_BY_ID: &str = r#"
query WorkoutById($id: ID!) {
  items: workouts(filter: { id: { eq: $id } }) {
    edges {
      node { id name exercises completed clientId trainerId dueDate }
    }
  }
}
"#;

pub const CREATE_WORKOUT: &str = r#"
mutation CreateWorkout($name: String!, $exercises: JSON, $completed: Boolean, $clientId: ID, $trainerId: ID, $dueDate: Date) {
  payload: workoutCreate(input: { name: $name, exercises: $exercises, completed: $completed, clientId: $clientId, trainerId: $trainerId, dueDate: $dueDate }) {
    success
    errors { message }
    record: workout { id name exercises completed clientId trainerId dueDate }
  }
}
"#;

pub const UPDATE_WORKOUT: &str = r#"
mutation UpdateWorkout($id: ID!, $name: String, $exercises: JSON, $completed: Boolean, $dueDate: Date) {
  payload: workoutUpdate(input: { id: $id, name: $name, exercises: $exercises, completed: $completed, dueDate: $dueDate }) {
    success
    errors { message }
    record: workout { id name exercises completed clientId trainerId dueDate }
  }
}
"#;

pub const DELETE_WORKOUT: &str = r#"
mutation DeleteWorkout($id: ID!) {
  payload: workoutDelete(id: $id) {
    success
    errors { message }
  }
}
"#;

// ============================================================================
// Meal plans
// ============================================================================

pub const MEAL_PLANS_ALL: &str = r#"
query MealPlansAll {
  items: mealPlans {
    edges {
      node {
        id name description clientId trainerId
        meals { edges { node { name calories carbs fats protein } } }
      }
    }
  }
}
"#;

pub const MEAL_PLANS_BY_CLIENT: &str = r#"
query MealPlansByClient($clientId: ID!) {
  items: mealPlans(filter: { clientId: { eq: $clientId } }) {
    edges {
      node {
        id name description clientId trainerId
        meals { edges { node { name calories carbs fats protein } } }
      }
    }
  }
}
"#;

pub const MEAL_PLAN_BY_ID: &str = r#"
query MealPlanById($id: ID!) {
  items: mealPlans(filter: { id: { eq: $id } }) {
    edges {
      node {
        id name description clientId trainerId
        meals { edges { node { name calories carbs fats protein } } }
      }
    }
  }
}
"#;

pub const CREATE_MEAL_PLAN: &str = r#"
mutation CreateMealPlan($name: String!, $description: String, $clientId: ID, $trainerId: ID) {
  payload: mealPlanCreate(input: { name: $name, description: $description, clientId: $clientId, trainerId: $trainerId }) {
    success
    errors { message }
    record: mealPlan { id name description clientId trainerId }
  }
}
"#;

/// One meal row attached to an existing plan; fired once per submitted meal.
pub const CREATE_MEAL: &str = r#"
mutation CreateMeal($mealPlanId: ID!, $name: String!, $calories: Float, $carbs: Float, $fats: Float, $protein: Float) {
  payload: mealCreate(input: { mealPlanId: $mealPlanId, name: $name, calories: $calories, carbs: $carbs, fats: $fats, protein: $protein }) {
    success
    errors { message }
  }
}
"#;

pub const UPDATE_MEAL_PLAN: &str = r#"
mutation UpdateMealPlan($id: ID!, $name: String, $description: String) {
  payload: mealPlanUpdate(input: { id: $id, name: $name, description: $description }) {
    success
    errors { message }
    record: mealPlan {
      id name description clientId trainerId
      meals { edges { node { name calories carbs fats protein } } }
    }
  }
}
"#;

pub const DELETE_MEAL_PLAN: &str = r#"
mutation DeleteMealPlan($id: ID!) {
  payload: mealPlanDelete(id: $id) {
    success
    errors { message }
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    // The generic deserializers depend on these aliases being present in
    // every document.
    #[test]
    fn test_queries_alias_their_root_as_items() {
        for document in [
            USER_BY_EMAIL,
            USER_FOR_LOGIN,
            CLIENTS_ALL,
            CLIENT_BY_ID,
            CLIENT_BY_USER,
            CLIENTS_BY_TRAINER,
            TRAINERS_ALL,
            TRAINER_BY_ID,
            TRAINER_BY_USER,
            WORKOUTS_ALL,
            WORKOUTS_BY_CLIENT,
            WORKOUT_BY_ID,
            MEAL_PLANS_ALL,
            MEAL_PLANS_BY_CLIENT,
            MEAL_PLAN_BY_ID,
        ] {
            assert!(document.contains("items:"), "missing items alias: {document}");
        }
    }

    #[test]
    fn test_mutations_alias_their_root_as_payload() {
        for document in [
            CREATE_USER,
            UPDATE_USER,
            DELETE_USER,
            CREATE_CLIENT,
            SET_CLIENT_TRAINER,
            DELETE_CLIENT,
            CREATE_TRAINER,
            DELETE_TRAINER,
            CREATE_WORKOUT,
            UPDATE_WORKOUT,
            DELETE_WORKOUT,
            CREATE_MEAL_PLAN,
            CREATE_MEAL,
            UPDATE_MEAL_PLAN,
            DELETE_MEAL_PLAN,
        ] {
            assert!(document.contains("payload:"), "missing payload alias: {document}");
            assert!(document.contains("success"), "missing success field: {document}");
        }
    }
}
