pub mod error;
pub mod security;
pub mod tags;

pub mod health {
    pub mod routes;
}
pub mod shopping_list {
    pub mod error_mapper;
    pub mod routes;
}
pub mod short_link {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
