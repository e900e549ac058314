//! Sequelize model definitions.

use super::builder::ContentBuilder;
use crate::domain::entities::ProjectConfig;

pub fn user_model(config: &ProjectConfig) -> String {
    let auth = config.auth_enabled();

    ContentBuilder::new()
        .block(
            r#"
module.exports = (sequelize, DataTypes) => {
  const User = sequelize.define('User', {
    id: {
      type: DataTypes.UUID,
      defaultValue: DataTypes.UUIDV4,
      primaryKey: true
    },
    name: {
      type: DataTypes.STRING,
      allowNull: false
    },
    email: {
      type: DataTypes.STRING,
      allowNull: false,
      unique: true,
      validate: {
        isEmail: true
      }
    },"#,
        )
        .block_if(
            auth,
            r#"
    password: {
      type: DataTypes.STRING,
      allowNull: false
    },"#,
        )
        .block(
            r#"
    isActive: {
      type: DataTypes.BOOLEAN,
      defaultValue: true
    }
  }, {
    tableName: 'users',
    timestamps: true
  });"#,
        )
        .block_if(
            auth,
            r#"

  User.prototype.toJSON = function toJSON() {
    const values = { ...this.get() };
    delete values.password;
    return values;
  };"#,
        )
        .blank()
        .line("  return User;")
        .line("};")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(auth: bool) -> ProjectConfig {
        ProjectConfig::builder().name("api").auth(auth).build().unwrap()
    }

    #[test]
    fn password_field_only_with_auth() {
        assert!(user_model(&config(true)).contains("    password: {"));
        assert!(!user_model(&config(false)).contains("password"));
    }

    #[test]
    fn serializer_strips_password() {
        let text = user_model(&config(true));
        assert!(text.contains("delete values.password;"));
    }

    #[test]
    fn model_closes_cleanly_without_auth() {
        let text = user_model(&config(false));
        assert!(text.contains("timestamps: true\n  });\n\n  return User;\n};\n"));
    }
}
