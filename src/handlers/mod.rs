pub mod auth;
pub mod forms;
pub mod helpers;
pub mod middleware;
pub mod pages;
