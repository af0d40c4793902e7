pub mod dispatch;
pub mod models;
pub mod project;
pub mod projects;
pub mod query;
pub mod schema;
