//! Router modules.

use super::builder::{ContentBuilder, join_present};
use crate::domain::entities::ProjectConfig;

/// Render one route registration with its optional handler chain.
fn route(method: &str, path: &str, handlers: &[Option<&str>]) -> String {
    format!(
        "router.{method}('{path}', {});",
        join_present(", ", handlers.iter().copied())
    )
}

pub fn index(config: &ProjectConfig) -> String {
    let auth = config.auth_enabled();

    ContentBuilder::new()
        .line("const express = require('express');")
        .blank()
        .line("const healthRouter = require('./health');")
        .line("const usersRouter = require('./users');")
        .line_if(auth, "const authRouter = require('./auth');")
        .blank()
        .line("const router = express.Router();")
        .blank()
        .line("router.use('/health', healthRouter);")
        .line("router.use('/users', usersRouter);")
        .line_if(auth, "router.use('/auth', authRouter);")
        .blank()
        .line("module.exports = router;")
        .build()
}

pub fn health() -> String {
    ContentBuilder::new()
        .block(
            r#"
const express = require('express');
const { sequelize } = require('../models');

const router = express.Router();

router.get('/', async (req, res) => {
  try {
    await sequelize.authenticate();
    return res.json({ status: 'OK', database: 'up', timestamp: new Date().toISOString() });
  } catch (error) {
    return res.status(503).json({ status: 'DEGRADED', database: 'down', timestamp: new Date().toISOString() });
  }
});

module.exports = router;
"#,
        )
        .build()
}

pub fn users(config: &ProjectConfig) -> String {
    let auth = config.auth_enabled();
    let guard = auth.then_some("auth");
    let create_validator = if auth {
        "createUserValidator"
    } else {
        "userValidator"
    };

    ContentBuilder::new()
        .line("const express = require('express');")
        .line("const UserController = require('../controllers/UserController');")
        .line(format!(
            "const {{ {} }} = require('../middlewares/validators');",
            join_present(", ", [Some("userValidator"), auth.then_some("createUserValidator")])
        ))
        .line_if(auth, "const auth = require('../middlewares/auth');")
        .blank()
        .line("const router = express.Router();")
        .blank()
        .line(route("get", "/", &[guard, Some("UserController.index")]))
        .line(route("get", "/:id", &[guard, Some("UserController.show")]))
        .line(route("post", "/", &[Some(create_validator), Some("UserController.store")]))
        .line(route(
            "put",
            "/:id",
            &[guard, Some("userValidator"), Some("UserController.update")],
        ))
        .line(route("delete", "/:id", &[guard, Some("UserController.destroy")]))
        .blank()
        .line("module.exports = router;")
        .build()
}

/// Login routes. Only generated with auth enabled.
pub fn auth() -> String {
    ContentBuilder::new()
        .block(
            r#"
const express = require('express');
const AuthController = require('../controllers/AuthController');
const { authValidator } = require('../middlewares/validators');
const auth = require('../middlewares/auth');

const router = express.Router();

router.post('/login', authValidator, AuthController.login);
router.get('/me', auth, AuthController.me);

module.exports = router;
"#,
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(auth: bool) -> ProjectConfig {
        ProjectConfig::builder().name("api").auth(auth).build().unwrap()
    }

    #[test]
    fn protected_routes_are_guarded() {
        let text = users(&config(true));
        assert!(text.contains("const auth = require('../middlewares/auth');"));
        assert!(text.contains("router.get('/', auth, UserController.index);"));
        assert!(text.contains("router.get('/:id', auth, UserController.show);"));
        assert!(text.contains("router.put('/:id', auth, userValidator, UserController.update);"));
        assert!(text.contains("router.delete('/:id', auth, UserController.destroy);"));
        assert!(text.contains("router.post('/', createUserValidator, UserController.store);"));
    }

    #[test]
    fn open_routes_without_auth() {
        let text = users(&config(false));
        assert!(!text.contains("auth"));
        assert!(text.contains("const { userValidator } = require('../middlewares/validators');"));
        assert!(text.contains("router.get('/', UserController.index);"));
        assert!(text.contains("router.post('/', userValidator, UserController.store);"));
    }

    #[test]
    fn index_mounts_auth_router_only_with_auth() {
        assert!(index(&config(true)).contains("router.use('/auth', authRouter);"));
        let open = index(&config(false));
        assert!(!open.contains("authRouter"));
        assert!(open.contains("router.use('/health', healthRouter);"));
    }
}
