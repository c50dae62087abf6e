//! Tests for repository selection and configuration sources.

mod support;

use std::io::Write;
use std::str::FromStr;

use bookshelf::config::ServerConfig;
use bookshelf::db::factory::{RepositoryFactory, RepositoryType};
use bookshelf::db::repository::BookRepository;
use bookshelf::db::{database_url_from_env, is_test_env, test_database_url, RepositoryError};
use bookshelf::models::{BookFilter, NewBook};

#[test]
fn test_repository_type_from_str() {
    assert_eq!(RepositoryType::from_str("POSTGRES").unwrap(), RepositoryType::Postgres);
    assert_eq!(RepositoryType::from_str("pg").unwrap(), RepositoryType::Postgres);
    assert_eq!(RepositoryType::from_str("Local").unwrap(), RepositoryType::Local);

    let err = RepositoryType::from_str("mongodb").unwrap_err();
    assert!(err.contains("Unknown repository type"));
}

#[test]
fn test_repository_type_from_env_default() {
    support::with_scoped_env(
        &[
            ("REPOSITORY_TYPE", None),
            ("DATABASE_URL", None),
            ("PG_DATABASE_URL", None),
            ("ENV", None),
        ],
        || {
            assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
        },
    );
}

#[test]
fn test_repository_type_from_env_with_database_url() {
    support::with_scoped_env(
        &[
            ("REPOSITORY_TYPE", None),
            ("DATABASE_URL", Some("postgres://localhost/bookAPI")),
        ],
        || {
            assert_eq!(RepositoryType::from_env(), RepositoryType::Postgres);
        },
    );
}

#[test]
fn test_repository_type_explicit_override() {
    support::with_scoped_env(
        &[
            ("REPOSITORY_TYPE", Some("local")),
            ("DATABASE_URL", Some("postgres://localhost/bookAPI")),
        ],
        || {
            assert_eq!(RepositoryType::from_env(), RepositoryType::Local);
        },
    );
}

#[test]
fn test_test_env_prefers_test_database_url() {
    support::with_scoped_env(
        &[
            ("ENV", Some("Test")),
            ("DATABASE_URL", Some("postgres://localhost/bookAPI")),
            ("TEST_DATABASE_URL", Some("postgres://localhost/bookAPI-Test")),
        ],
        || {
            assert!(is_test_env());
            assert_eq!(
                database_url_from_env().as_deref(),
                Some("postgres://localhost/bookAPI-Test")
            );
        },
    );
}

#[test]
fn test_database_url_outside_test_env() {
    support::with_scoped_env(
        &[
            ("ENV", None),
            ("DATABASE_URL", None),
            ("PG_DATABASE_URL", Some("postgres://localhost/fallback")),
            ("TEST_DATABASE_URL", Some("postgres://localhost/bookAPI-Test")),
        ],
        || {
            assert!(!is_test_env());
            assert_eq!(
                database_url_from_env().as_deref(),
                Some("postgres://localhost/fallback")
            );
        },
    );
}

#[test]
fn test_destructive_suites_never_see_the_regular_database() {
    support::with_scoped_env(
        &[
            ("ENV", None),
            ("DATABASE_URL", Some("postgres://localhost/bookAPI")),
            ("TEST_DATABASE_URL", Some("postgres://localhost/bookAPI-Test")),
        ],
        || assert_eq!(test_database_url(), None),
    );

    support::with_scoped_env(
        &[
            ("ENV", Some("Test")),
            ("DATABASE_URL", Some("postgres://localhost/bookAPI")),
            ("TEST_DATABASE_URL", None),
        ],
        || assert_eq!(test_database_url(), None),
    );

    support::with_scoped_env(
        &[
            ("ENV", Some("test")),
            ("TEST_DATABASE_URL", Some("postgres://localhost/bookAPI-Test")),
        ],
        || {
            assert_eq!(
                test_database_url().as_deref(),
                Some("postgres://localhost/bookAPI-Test")
            )
        },
    );
}

#[test]
fn test_server_config_from_env() {
    support::with_scoped_env(&[("HOST", None), ("PORT", None)], || {
        assert_eq!(ServerConfig::from_env(), ServerConfig::default());
    });

    support::with_scoped_env(&[("HOST", Some("127.0.0.1")), ("PORT", Some("4000"))], || {
        let config = ServerConfig::from_env();
        assert_eq!(config.port, 4000);
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:4000");
    });

    support::with_scoped_env(&[("PORT", Some("not-a-port"))], || {
        assert_eq!(ServerConfig::from_env().port, 3000);
    });
}

#[tokio::test]
async fn test_from_config_file_local() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[repository]\ntype = \"local\"").unwrap();

    let repo = RepositoryFactory::from_config_file(file.path()).await.unwrap();
    repo.create(&NewBook::new("Dune")).await.unwrap();
    assert_eq!(repo.find_all(&BookFilter::default()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_from_config_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let result = RepositoryFactory::from_config_file(dir.path().join("repository.toml")).await;
    assert!(matches!(
        result,
        Err(RepositoryError::ConfigurationError { .. })
    ));
}

#[test]
fn test_startup_config_file_wins_over_environment() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[repository]\ntype = \"local\"").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    support::with_scoped_env(
        &[
            ("REPOSITORY_CONFIG", Some(path.as_str())),
            ("REPOSITORY_TYPE", Some("postgres")),
            ("DATABASE_URL", None),
            ("PG_DATABASE_URL", None),
        ],
        || {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            let repo = runtime
                .block_on(RepositoryFactory::from_startup_config())
                .unwrap();
            runtime.block_on(async {
                repo.create(&NewBook::new("Dune")).await.unwrap();
                assert_eq!(repo.find_all(&BookFilter::default()).await.unwrap().len(), 1);
            });
        },
    );
}

#[test]
fn test_startup_config_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("repository.toml");

    support::with_scoped_env(
        &[
            ("REPOSITORY_CONFIG", Some(missing.to_str().unwrap())),
            ("REPOSITORY_TYPE", Some("local")),
        ],
        || {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            let result = runtime.block_on(RepositoryFactory::from_startup_config());
            assert!(matches!(
                result,
                Err(RepositoryError::ConfigurationError { .. })
            ));
        },
    );
}

#[test]
fn test_startup_config_falls_back_to_environment() {
    support::with_scoped_env(
        &[("REPOSITORY_CONFIG", None), ("REPOSITORY_TYPE", Some("local"))],
        || {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            let repo = runtime
                .block_on(RepositoryFactory::from_startup_config())
                .unwrap();
            assert!(runtime.block_on(repo.health_check()).unwrap());
        },
    );
}

#[tokio::test]
async fn test_from_config_file_invalid_type() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[repository]\ntype = \"mongodb\"").unwrap();

    let err = RepositoryFactory::from_config_file(file.path())
        .await
        .err()
        .expect("invalid type must fail");
    assert!(err.to_string().contains("Invalid repository type"));
}
