#![doc = "The `taskhive` library crate."]
#![doc = ""]
#![doc = "This crate contains the core business logic for the taskhive API: the"]
#![doc = "in-memory user and task registries, the credential and token services,"]
#![doc = "request/response models, routing configuration and error handling. It is"]
#![doc = "used by the main binary (`main.rs`) to construct and run the application."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod routes;
