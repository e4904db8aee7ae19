use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub display_name: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_sessions::Entity")]
    UserSessions,
    #[sea_orm(has_many = "super::branch_reps::Entity")]
    BranchReps,
}

impl Related<super::user_sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserSessions.def()
    }
}

impl Related<super::branch_reps::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BranchReps.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Roles stored in `users.role`. Only `ADMIN` grants write access to
/// branch representatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::User => "USER",
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(UserRole::Admin),
            "USER" => Ok(UserRole::User),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ActiveModel {
    pub fn new(email: String, display_name: String, role: UserRole) -> Self {
        Self {
            id: ActiveValue::NotSet,
            email: Set(email),
            display_name: Set(display_name),
            role: Set(role.to_string()),
            is_active: Set(true),
            created_at: Set(chrono::Utc::now()),
        }
    }
}

impl Model {
    /// Exact, case-sensitive comparison against `ADMIN`; unknown role text
    /// is never treated as admin.
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_parse_from_stored_text() {
        assert_eq!("ADMIN".parse::<UserRole>(), Ok(UserRole::Admin));
        assert_eq!("USER".parse::<UserRole>(), Ok(UserRole::User));
        assert!("admin".parse::<UserRole>().is_err());
        assert_eq!(UserRole::Admin.to_string(), "ADMIN");
    }
}
