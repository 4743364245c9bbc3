//! User domain models and parameters.
//!
//! Group membership is the only authorization signal, so a [`User`] always carries the
//! names of the groups it belongs to.

use chrono::{DateTime, Utc};

use crate::model::user::{GroupMemberDto, RegisterUserDto, UserDto};

/// Staff roles, each backed by a group of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Manager,
    DeliveryCrew,
}

impl Role {
    /// Name of the group backing the role.
    pub fn group_name(&self) -> &'static str {
        match self {
            Self::Manager => "Manager",
            Self::DeliveryCrew => "Delivery crew",
        }
    }
}

/// Authenticated user with their group names.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub date_joined: DateTime<Utc>,
    pub groups: Vec<String>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            date_joined: self.date_joined,
            groups: self.groups,
        }
    }

    /// Converts a user row and the names of its groups at the repository boundary.
    pub fn from_entity(entity: entity::user::Model, groups: Vec<String>) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            date_joined: entity.date_joined,
            groups,
        }
    }

    /// Whether the user is a member of the group backing `role`.
    pub fn has_role(&self, role: Role) -> bool {
        self.groups.iter().any(|group| group == role.group_name())
    }
}

/// A member listed by the group management endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMember {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl GroupMember {
    pub fn into_dto(self) -> GroupMemberDto {
        GroupMemberDto {
            id: self.id,
            username: self.username,
            email: self.email,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterUserParams {
    pub fn from_dto(dto: RegisterUserDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            email: dto.email.trim().to_string(),
            password: dto.password,
        }
    }
}

/// Row values for inserting a user whose password has already been hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
