//! Template catalog: [`ProjectConfig`] → [`TemplateSet`].
//!
//! Pure and deterministic: the same configuration always yields a
//! byte-identical set. No clock, randomness, or environment is consulted.
//!
//! Each generated file has its own content builder in a sibling module.
//! This module only decides *which* files exist for a configuration.

pub mod app;
pub mod builder;
pub mod controllers;
pub mod environment;
pub mod manifest;
pub mod middlewares;
pub mod models;
pub mod orm;
pub mod routes;

use crate::domain::entities::{ProjectConfig, TemplateSet, common::RelativePath};

/// Files that only exist when authentication is enabled.
pub const AUTH_FILES: [&str; 3] = [
    "src/controllers/AuthController.js",
    "src/middlewares/auth.js",
    "src/routes/auth.js",
];

/// Directories in the fixed skeleton that receive no generated source.
pub const PLACEHOLDER_DIRS: [&str; 4] = [
    "src/migrations",
    "src/seeders",
    "src/services",
    "src/utils",
];

/// Build the complete file set for a configuration.
pub fn build(config: &ProjectConfig) -> TemplateSet {
    let auth = config.auth_enabled();

    let mut entries: Vec<(&str, String)> = vec![
        ("package.json", manifest::package_json(config)),
        (".env.example", environment::env_example(config)),
        (".gitignore", environment::gitignore(config)),
        (".sequelizerc", orm::sequelizerc()),
        ("README.md", app::readme(config)),
        ("src/app.js", app::app_entry()),
        ("src/config/database.js", orm::database_config(config)),
        ("src/models/index.js", orm::models_index()),
        ("src/models/User.js", models::user_model(config)),
        ("src/controllers/UserController.js", controllers::user_controller(config)),
        ("src/middlewares/validators.js", middlewares::validators(config)),
        ("src/routes/index.js", routes::index(config)),
        ("src/routes/health.js", routes::health()),
        ("src/routes/users.js", routes::users(config)),
    ];

    if auth {
        entries.extend([
            (AUTH_FILES[0], controllers::auth_controller()),
            (AUTH_FILES[1], middlewares::auth_middleware()),
            (AUTH_FILES[2], routes::auth()),
        ]);
    }

    let placeholders = PLACEHOLDER_DIRS
        .iter()
        .map(|dir| (RelativePath::new(format!("{dir}/.gitkeep")), String::new()));

    entries
        .into_iter()
        .map(|(path, content)| (RelativePath::new(path), content))
        .chain(placeholders)
        .collect()
}
