//! `package.json` generation.

use std::collections::BTreeMap;

use serde_json::{Map, Value, json};

use crate::domain::{entities::ProjectConfig, value_objects::Dependency};

const BASE_DEPENDENCIES: &[Dependency] = &[
    ("cors", "^2.8.5"),
    ("dotenv", "^16.3.1"),
    ("express", "^4.18.2"),
    ("express-validator", "^7.0.1"),
    ("helmet", "^7.1.0"),
    ("morgan", "^1.10.1"),
    ("sequelize", "^6.35.2"),
];

const AUTH_DEPENDENCIES: &[Dependency] = &[("bcryptjs", "^2.4.3"), ("jsonwebtoken", "^9.0.2")];

const DEV_DEPENDENCIES: &[Dependency] = &[("nodemon", "^3.0.2"), ("sequelize-cli", "^6.6.2")];

/// Runtime dependencies selected by the configuration, sorted by name.
pub fn dependencies(config: &ProjectConfig) -> BTreeMap<&'static str, &'static str> {
    let auth: &[Dependency] = if config.auth_enabled() {
        AUTH_DEPENDENCIES
    } else {
        &[]
    };

    BASE_DEPENDENCIES
        .iter()
        .chain(config.database().drivers())
        .chain(auth)
        .copied()
        .collect()
}

fn to_object<'a>(entries: impl IntoIterator<Item = (&'a &'static str, &'a &'static str)>) -> Value {
    Value::Object(
        entries
            .into_iter()
            .map(|(name, version)| ((*name).to_string(), Value::from(*version)))
            .collect::<Map<_, _>>(),
    )
}

pub fn package_json(config: &ProjectConfig) -> String {
    let dev: BTreeMap<_, _> = DEV_DEPENDENCIES.iter().copied().collect();

    let manifest = json!({
        "name": config.package_name(),
        "version": "1.0.0",
        "description": "REST API built with Express and Sequelize",
        "main": "src/app.js",
        "private": true,
        "scripts": {
            "start": "node src/app.js",
            "dev": "nodemon src/app.js",
            "db:migrate": "npx sequelize-cli db:migrate",
            "db:seed": "npx sequelize-cli db:seed:all"
        },
        "dependencies": to_object(&dependencies(config)),
        "devDependencies": to_object(&dev),
    });

    format!("{manifest:#}\n")
}
