pub mod db;
mod error;
pub mod seed;
pub mod brand {
    pub mod entity;
    pub mod repository;
}
pub mod category {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod query;
    pub mod repository;
}
