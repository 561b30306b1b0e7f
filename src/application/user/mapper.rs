//! User <-> transfer object conversion

use crate::domain::{User, UserDto, UserSimpleDto};

pub fn to_dto(user: &User) -> UserDto {
    UserDto {
        id: user.id(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        birthdate: user.birthdate,
        email: user.email.clone(),
    }
}

pub fn to_simple_dto(user: &User) -> UserSimpleDto {
    UserSimpleDto {
        id: user.id(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
    }
}

/// Builds a fresh, unsaved user. Any id on the DTO is ignored.
pub fn to_entity(dto: &UserDto) -> User {
    User::new(
        dto.first_name.clone(),
        dto.last_name.clone(),
        dto.birthdate,
        dto.email.clone(),
    )
}
