//! Request handlers.

use super::builder::ContentBuilder;
use crate::domain::entities::ProjectConfig;

pub fn user_controller(config: &ProjectConfig) -> String {
    let auth = config.auth_enabled();
    let read_options = if auth {
        ", {\n        attributes: { exclude: ['password'] }\n      }"
    } else {
        ""
    };

    ContentBuilder::new()
        .line("const { User } = require('../models');")
        .line_if(auth, "const bcrypt = require('bcryptjs');")
        .blank()
        .line_if(auth, "const SALT_ROUNDS = 10;")
        .line_if(auth, "")
        .line("const toResponse = (user) => {")
        .line("  const data = user.toJSON();")
        .line_if(auth, "  delete data.password;")
        .line("  return data;")
        .line("};")
        .blank()
        .line("class UserController {")
        .line("  async index(req, res) {")
        .line("    try {")
        .line(format!("      const users = await User.findAll({});", read_options.trim_start_matches(", ")))
        .block(
            r#"
      return res.json(users);
    } catch (error) {
      return res.status(500).json({ error: 'Failed to list users' });
    }
  }

  async show(req, res) {
    try {
      const { id } = req.params;"#,
        )
        .line(format!("      const user = await User.findByPk(id{read_options});"))
        .block(
            r#"

      if (!user) {
        return res.status(404).json({ error: 'User not found' });
      }

      return res.json(user);
    } catch (error) {
      return res.status(500).json({ error: 'Failed to fetch user' });
    }
  }

  async store(req, res) {
    try {"#,
        )
        .section_if(!auth, |b| {
            b.line("      const { name, email } = req.body;")
                .blank()
                .line("      const user = await User.create({ name, email });")
        })
        .section_if(auth, |b| {
            b.block(
                r#"
      const { name, email, password } = req.body;
      const hashedPassword = await bcrypt.hash(password, SALT_ROUNDS);

      const user = await User.create({
        name,
        email,
        password: hashedPassword
      });"#,
            )
        })
        .block(
            r#"

      return res.status(201).json(toResponse(user));
    } catch (error) {
      if (error.name === 'SequelizeUniqueConstraintError') {
        return res.status(400).json({ error: 'Email already registered' });
      }
      return res.status(500).json({ error: 'Failed to create user' });
    }
  }

  async update(req, res) {
    try {
      const { id } = req.params;"#,
        )
        .line_if(!auth, "      const { name, email } = req.body;")
        .line_if(auth, "      const { name, email, password } = req.body;")
        .block(
            r#"

      const user = await User.findByPk(id);

      if (!user) {
        return res.status(404).json({ error: 'User not found' });
      }

      const changes = { name, email };"#,
        )
        .block_if(
            auth,
            r#"
      if (password) {
        changes.password = await bcrypt.hash(password, SALT_ROUNDS);
      }"#,
        )
        .block(
            r#"
      await user.update(changes);

      return res.json(toResponse(user));
    } catch (error) {
      return res.status(500).json({ error: 'Failed to update user' });
    }
  }

  async destroy(req, res) {
    try {
      const { id } = req.params;
      const user = await User.findByPk(id);

      if (!user) {
        return res.status(404).json({ error: 'User not found' });
      }

      await user.destroy();

      return res.status(204).send();
    } catch (error) {
      return res.status(500).json({ error: 'Failed to delete user' });
    }
  }
}

module.exports = new UserController();
"#,
        )
        .build()
}

/// Login and current-user handlers. Only generated with auth enabled.
pub fn auth_controller() -> String {
    ContentBuilder::new()
        .block(
            r#"
const { User } = require('../models');
const bcrypt = require('bcryptjs');
const jwt = require('jsonwebtoken');

class AuthController {
  async login(req, res) {
    try {
      const { email, password } = req.body;

      const user = await User.findOne({ where: { email } });

      if (!user) {
        return res.status(401).json({ error: 'Invalid credentials' });
      }

      const isValidPassword = await bcrypt.compare(password, user.password);

      if (!isValidPassword) {
        return res.status(401).json({ error: 'Invalid credentials' });
      }

      const token = jwt.sign(
        { id: user.id, email: user.email },
        process.env.JWT_SECRET,
        { expiresIn: process.env.JWT_EXPIRES_IN }
      );

      const data = user.toJSON();
      delete data.password;

      return res.json({ user: data, token });
    } catch (error) {
      return res.status(500).json({ error: 'Failed to log in' });
    }
  }

  async me(req, res) {
    try {
      const user = await User.findByPk(req.userId, {
        attributes: { exclude: ['password'] }
      });

      if (!user) {
        return res.status(404).json({ error: 'User not found' });
      }

      return res.json(user);
    } catch (error) {
      return res.status(500).json({ error: 'Failed to fetch current user' });
    }
  }
}

module.exports = new AuthController();
"#,
        )
        .build()
}
