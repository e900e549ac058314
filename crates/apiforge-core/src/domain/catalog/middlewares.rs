//! Express middlewares: request validation and token authentication.

use super::builder::{ContentBuilder, join_present};
use crate::domain::entities::ProjectConfig;

pub fn validators(config: &ProjectConfig) -> String {
    let auth = config.auth_enabled();

    ContentBuilder::new()
        .block(
            r#"
const { body, validationResult } = require('express-validator');

const validate = (req, res, next) => {
  const errors = validationResult(req);
  if (!errors.isEmpty()) {
    return res.status(400).json({ errors: errors.array() });
  }
  return next();
};

const userRules = [
  body('name').trim().notEmpty().withMessage('Name is required'),
  body('email').isEmail().withMessage('Invalid email')
];

const userValidator = [
  ...userRules,"#,
        )
        .line_if(
            auth,
            "  body('password').optional().isLength({ min: 6 }).withMessage('Password must be at least 6 characters'),",
        )
        .line("  validate")
        .line("];")
        .block_if(
            auth,
            r#"

const createUserValidator = [
  ...userRules,
  body('password').isLength({ min: 6 }).withMessage('Password must be at least 6 characters'),
  validate
];

const authValidator = [
  body('email').isEmail().withMessage('Invalid email'),
  body('password').notEmpty().withMessage('Password is required'),
  validate
];"#,
        )
        .blank()
        .line(format!(
            "module.exports = {{ {} }};",
            join_present(
                ", ",
                [
                    Some("userValidator"),
                    auth.then_some("createUserValidator"),
                    auth.then_some("authValidator"),
                    Some("validate"),
                ]
            )
        ))
        .build()
}

/// Bearer-token guard. Only generated with auth enabled.
pub fn auth_middleware() -> String {
    ContentBuilder::new()
        .block(
            r#"
const jwt = require('jsonwebtoken');

module.exports = (req, res, next) => {
  const authHeader = req.headers.authorization;

  if (!authHeader) {
    return res.status(401).json({ error: 'Token not provided' });
  }

  const parts = authHeader.split(' ');

  if (parts.length !== 2) {
    return res.status(401).json({ error: 'Malformed token' });
  }

  const [scheme, token] = parts;

  if (!/^Bearer$/i.test(scheme)) {
    return res.status(401).json({ error: 'Malformed token' });
  }

  try {
    const decoded = jwt.verify(token, process.env.JWT_SECRET);
    req.userId = decoded.id;
    return next();
  } catch (error) {
    return res.status(401).json({ error: 'Invalid token' });
  }
};
"#,
        )
        .build()
}
