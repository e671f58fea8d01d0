pub mod desk_service;
pub mod dto;
