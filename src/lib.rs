pub mod configuration;
pub mod database;
pub mod domain;
pub mod module;
pub mod routes;
pub mod service;
pub mod startup;
pub mod telemetry;
