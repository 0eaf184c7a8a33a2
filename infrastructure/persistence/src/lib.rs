pub mod blob_store;
pub mod collection;
mod lenient;
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod cart {
    pub mod entity;
    pub mod repository;
}
