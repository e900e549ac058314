//! Environment example and ignore file.

use super::builder::ContentBuilder;
use crate::domain::entities::ProjectConfig;

/// Database name derived from the package name (`my-api` → `my_api_db`).
pub fn database_name(config: &ProjectConfig) -> String {
    format!("{}_db", config.package_name().replace(['-', '.'], "_"))
}

pub fn env_example(config: &ProjectConfig) -> String {
    let db = config.database();

    ContentBuilder::new()
        .line("NODE_ENV=development")
        .line("PORT=3000")
        .blank()
        .line(format!("# Database ({})", db.display_name()))
        .line(format!("DB_DIALECT={}", db.as_str()))
        .section_if(!db.is_file_backed(), |b| {
            b.line("DB_HOST=localhost")
                .line_if_some(db.default_port(), |port| format!("DB_PORT={port}"))
                .line(format!("DB_NAME={}", database_name(config)))
                .line_if_some(db.default_user(), |user| format!("DB_USER={user}"))
                .line("DB_PASS=change-me")
        })
        .line_if(db.is_file_backed(), "DB_STORAGE=./database.sqlite")
        .section_if(config.auth_enabled(), |b| {
            b.blank()
                .line("# JWT")
                .line("JWT_SECRET=change-this-secret-in-production")
                .line("JWT_EXPIRES_IN=7d")
        })
        .build()
}

pub fn gitignore(config: &ProjectConfig) -> String {
    ContentBuilder::new()
        .line("node_modules/")
        .line(".env")
        .line("*.log")
        .line(".DS_Store")
        .line("coverage/")
        .line_if(config.database().is_file_backed(), "database.sqlite")
        .build()
}
