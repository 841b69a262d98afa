/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of gearshift.
 *
 * gearshift is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * gearshift is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with gearshift. If not, see <https://www.gnu.org/licenses/>.
 */

use std::{error, fmt, io, result};
use std::fmt::{Display, Formatter};
use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
pub struct Error{
    kind: ErrorKind,
    details: String
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, details: String) -> Error {
        Error{ kind, details }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn details(&self) -> &str {
        &self.details
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.kind.as_str(), self.details)
    }
}

impl error::Error for Error {}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::new(ErrorKind::IOError, format!("{}. {}", e.to_string(), e.kind().to_string()))
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::new(ErrorKind::TomlDecodeError, e.to_string())
    }
}

impl From<ConfigurationError> for Error {
    fn from(e: ConfigurationError) -> Self {
        Error::new(ErrorKind::InvalidConfiguration, e.to_string())
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ErrorKind {
    InvalidConfiguration,
    IOError,
    TomlDecodeError
}

impl ErrorKind {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidConfiguration => "invalid configuration",
            ErrorKind::IOError => "io error",
            ErrorKind::TomlDecodeError => "toml decode error"
        }
    }
}

/// Reasons a vehicle refuses to be constructed
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("cannot be set below {minimum} hp (requested {requested})")]
    HorsePowerTooLow {
        minimum: i32,
        requested: i32
    },
    #[error("cannot be set below {minimum} gears (requested {requested})")]
    GearCountTooLow {
        minimum: i32,
        requested: i32
    }
}
