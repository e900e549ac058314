//! Application entry point and project README.

use super::builder::ContentBuilder;
use crate::domain::entities::ProjectConfig;

pub fn app_entry() -> String {
    ContentBuilder::new()
        .block(
            r#"
require('dotenv').config();
const express = require('express');
const cors = require('cors');
const helmet = require('helmet');
const morgan = require('morgan');
const routes = require('./routes');
const { sequelize } = require('./models');

const app = express();

// Middlewares
app.use(morgan('dev'));
app.use(helmet());
app.use(cors());
app.use(express.json());
app.use(express.urlencoded({ extended: true }));

// Routes
app.use('/api', routes);

// 404 handler
app.use((req, res) => {
  res.status(404).json({ error: 'Route not found' });
});

// Error handler
app.use((err, req, res, next) => {
  console.error(err.stack);
  res.status(500).json({ error: 'Internal server error' });
});

const PORT = process.env.PORT || 3000;

sequelize
  .sync()
  .then(() => {
    app.listen(PORT, () => {
      console.log(`Server listening on port ${PORT}`);
      console.log(`Environment: ${process.env.NODE_ENV || 'development'}`);
    });
  })
  .catch((err) => {
    console.error('Unable to connect to the database:', err);
    process.exit(1);
  });

module.exports = app;
"#,
        )
        .build()
}

pub fn readme(config: &ProjectConfig) -> String {
    let db = config.database();
    let auth = config.auth_enabled();

    ContentBuilder::new()
        .line(format!("# {}", config.name()))
        .blank()
        .line("REST API built with Express and Sequelize.")
        .blank()
        .line("## Stack")
        .blank()
        .line("- Node.js")
        .line("- Express")
        .line("- Sequelize ORM")
        .line(format!("- {}", db.display_name()))
        .line_if(auth, "- JWT authentication")
        .blank()
        .line("## Setup")
        .blank()
        .block(
            r#"
```bash
npm install
cp .env.example .env
```

Then adjust the variables in `.env`."#,
        )
        .section_if(!db.is_file_backed(), |b| {
            b.blank()
                .line("Create the database before the first run:")
                .blank()
                .line("```bash")
                .line(create_database_command(config))
                .line("```")
        })
        .section_if(db.is_file_backed(), |b| {
            b.blank()
                .line("The database file is created at `DB_STORAGE` on first run.")
        })
        .blank()
        .block(
            r#"
## Usage

```bash
npm run dev   # development, restarts on change
npm start     # production
```

## Endpoints

### Health
- `GET /api/health` - API and database status

### Users
- `GET /api/users` - List users
- `GET /api/users/:id` - Get a user
- `POST /api/users` - Create a user
- `PUT /api/users/:id` - Update a user
- `DELETE /api/users/:id` - Delete a user"#,
        )
        .section_if(auth, |b| {
            b.blank().block(
                r#"
All user routes except `POST /api/users` require a token.

### Authentication
- `POST /api/auth/login` - Log in and receive a token
- `GET /api/auth/me` - Current user

Send the token as:

```
Authorization: Bearer <token>
```"#,
            )
        })
        .blank()
        .block(
            r#"
## Migrations

```bash
npx sequelize-cli migration:generate --name create-something
npm run db:migrate
```

## License

MIT
"#,
        )
        .build()
}

fn create_database_command(config: &ProjectConfig) -> String {
    let name = super::environment::database_name(config);
    let user = config.database().default_user().unwrap_or_default();
    match config.database() {
        crate::domain::value_objects::Database::Mysql => {
            format!("mysql -u {user} -p -e \"CREATE DATABASE {name};\"")
        }
        _ => format!("createdb -U {user} {name}"),
    }
}
