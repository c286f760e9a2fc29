// ABOUTME: Environment configuration for the todos server
// ABOUTME: Reads the listen port and database location from the environment

use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

use todos::DatabaseLocation;

const DEFAULT_PORT: &str = "3000";
const DEFAULT_DATABASE: &str = "todos.db";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
}

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub database: DatabaseLocation,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port_str = env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());

        let port = port_str.parse::<u16>()?;

        // Validate port is in valid range
        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        // The literal ":memory:" selects the ephemeral in-memory database
        let database_str = env::var("TODOS_DB").unwrap_or_else(|_| DEFAULT_DATABASE.to_string());
        let database = if database_str == ":memory:" {
            DatabaseLocation::InMemory
        } else {
            DatabaseLocation::File(PathBuf::from(database_str))
        };

        Ok(Config { port, database })
    }
}
