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

pub mod error;
pub mod traits;
pub mod gearing;
pub mod vehicle;
pub mod kinds;
pub mod definition;

pub use error::{Error, ErrorKind, Result};
pub use gearing::{GearSelector, ShiftTable};
pub use vehicle::{Car, ShiftPolicy, Vehicle};
pub use definition::{Garage, VehicleDefinition};
