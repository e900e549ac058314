//! Sequelize configuration and bootstrap files.

use super::builder::ContentBuilder;
use crate::domain::entities::ProjectConfig;

pub fn database_config(config: &ProjectConfig) -> String {
    let db = config.database();
    let networked = !db.is_file_backed();

    ContentBuilder::new()
        .line("require('dotenv').config();")
        .blank()
        .line("const base = {")
        .section_if(networked, |b| {
            b.line("  username: process.env.DB_USER,")
                .line("  password: process.env.DB_PASS,")
                .line("  database: process.env.DB_NAME,")
                .line("  host: process.env.DB_HOST,")
                .line("  port: process.env.DB_PORT,")
        })
        .line(format!(
            "  dialect: process.env.DB_DIALECT || '{}',",
            db.as_str()
        ))
        .line_if(
            !networked,
            "  storage: process.env.DB_STORAGE || './database.sqlite',",
        )
        .line("  logging: false")
        .line("};")
        .blank()
        .line("module.exports = {")
        .line("  development: { ...base },")
        .line_if(
            networked,
            "  test: { ...base, database: `${process.env.DB_NAME}_test` },",
        )
        .line_if(!networked, "  test: { ...base, storage: ':memory:' },")
        .line("  production: { ...base }")
        .line("};")
        .build()
}

pub fn sequelizerc() -> String {
    ContentBuilder::new()
        .block(
            r#"
const path = require('path');

module.exports = {
  'config': path.resolve('src', 'config', 'database.js'),
  'models-path': path.resolve('src', 'models'),
  'seeders-path': path.resolve('src', 'seeders'),
  'migrations-path': path.resolve('src', 'migrations')
};
"#,
        )
        .build()
}

pub fn models_index() -> String {
    ContentBuilder::new()
        .block(
            r#"
const fs = require('fs');
const path = require('path');
const Sequelize = require('sequelize');

const basename = path.basename(__filename);
const env = process.env.NODE_ENV || 'development';
const config = require('../config/database')[env];
const db = {};

const sequelize = config.use_env_variable
  ? new Sequelize(process.env[config.use_env_variable], config)
  : new Sequelize(config.database, config.username, config.password, config);

fs.readdirSync(__dirname)
  .filter((file) => file.indexOf('.') !== 0 && file !== basename && file.slice(-3) === '.js')
  .forEach((file) => {
    const model = require(path.join(__dirname, file))(sequelize, Sequelize.DataTypes);
    db[model.name] = model;
  });

Object.keys(db).forEach((modelName) => {
  if (db[modelName].associate) {
    db[modelName].associate(db);
  }
});

db.sequelize = sequelize;
db.Sequelize = Sequelize;

module.exports = db;
"#,
        )
        .build()
}
