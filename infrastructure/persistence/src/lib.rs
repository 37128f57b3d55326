pub mod db;
pub mod recipe {
    pub mod entity;
    pub mod repository;
}
pub mod shopping_list {
    pub mod entity;
    pub mod repository;
}
