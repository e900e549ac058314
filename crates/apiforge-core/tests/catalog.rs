//! Generated-project checks through the public API.

use apiforge_core::domain::{Database, DomainValidator, ProjectConfig, catalog};
use serde_json::Value;

fn config(name: &str, database: Database, auth: bool) -> ProjectConfig {
    ProjectConfig::builder()
        .name(name)
        .database(database)
        .auth(auth)
        .install_deps(false)
        .build()
        .unwrap()
}

fn manifest(config: &ProjectConfig) -> Value {
    let set = catalog::build(config);
    serde_json::from_str(set.get("package.json").unwrap()).unwrap()
}

#[test]
fn mysql_without_auth() {
    let cfg = config("api1", Database::Mysql, false);
    let set = catalog::build(&cfg);
    let pkg = manifest(&cfg);

    assert_eq!(pkg["name"], "api1");
    assert_eq!(pkg["dependencies"]["mysql2"], "^3.6.5");
    assert!(pkg["dependencies"].get("pg").is_none());
    assert!(pkg["dependencies"].get("jsonwebtoken").is_none());
    assert!(pkg["dependencies"].get("bcryptjs").is_none());

    let env = set.get(".env.example").unwrap();
    assert!(env.contains("DB_DIALECT=mysql"));
    assert!(env.contains("DB_PORT=3306"));
    assert!(!env.contains("JWT_SECRET"));

    assert!(!set.contains("src/routes/auth.js"));
    assert!(!set.get("src/routes/index.js").unwrap().contains("auth"));
}

#[test]
fn postgres_with_auth() {
    let cfg = config("api2", Database::Postgres, true);
    let set = catalog::build(&cfg);
    let pkg = manifest(&cfg);

    assert_eq!(pkg["dependencies"]["pg"], "^8.11.3");
    assert_eq!(pkg["dependencies"]["pg-hstore"], "^2.3.4");
    assert_eq!(pkg["dependencies"]["jsonwebtoken"], "^9.0.2");
    assert_eq!(pkg["dependencies"]["bcryptjs"], "^2.4.3");

    let env = set.get(".env.example").unwrap();
    assert!(env.contains("DB_PORT=5432"));
    assert!(env.contains("JWT_SECRET="));
    assert!(env.contains("JWT_EXPIRES_IN=7d"));

    for file in catalog::AUTH_FILES {
        assert!(set.contains(file), "{file}");
    }
    assert!(
        set.get("src/routes/users.js")
            .unwrap()
            .contains("router.get('/', auth, UserController.index);")
    );
}

#[test]
fn manifest_keys_keep_declaration_order() {
    let text = catalog::build(&config("api", Database::Sqlite, false))
        .get("package.json")
        .unwrap()
        .to_string();

    let name = text.find("\"name\"").unwrap();
    let scripts = text.find("\"scripts\"").unwrap();
    let deps = text.find("\"dependencies\"").unwrap();
    let dev = text.find("\"devDependencies\"").unwrap();
    assert!(name < scripts && scripts < deps && deps < dev);
    assert!(text.ends_with("}\n"));
}

#[test]
fn package_name_is_npm_safe() {
    let pkg = manifest(&config("My Shop API", Database::Postgres, false));
    assert_eq!(pkg["name"], "my-shop-api");
}

#[test]
fn all_combinations_are_consistent() {
    for database in Database::ALL {
        for auth in [true, false] {
            let cfg = config("orders", database, auth);
            let set = catalog::build(&cfg);
            assert!(
                DomainValidator::validate_template_set(&set, &cfg).is_ok(),
                "{cfg}"
            );
            assert_eq!(set, catalog::build(&cfg));
        }
    }
}
