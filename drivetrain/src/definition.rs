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

use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use crate::error::{ConfigurationError, Result};
use crate::traits::{DriveAction, Transmission};
use crate::vehicle::{Car, ShiftPolicy, Vehicle, GENERIC_MIN_GEAR_COUNT};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyStyle {
    #[default]
    Generic,
    Car
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDefinition {
    pub name: String,
    #[serde(default)]
    pub body: BodyStyle,
    pub horse_power: i32,
    #[serde(default)]
    pub max_gear: Option<i32>,
    #[serde(default)]
    pub policy: ShiftPolicy,
    #[serde(default)]
    pub speeds: Vec<i32>,
    /// Run after `speeds`, e.g. `actions = [{ speed = 30 }, "gear_up", "release"]`
    #[serde(default)]
    pub actions: Vec<DriveAction>
}

impl VehicleDefinition {
    pub fn build(&self) -> Result<Box<dyn Transmission>> {
        match self.body {
            BodyStyle::Generic => {
                if let Some(max_gear) = self.max_gear.filter(|max_gear| *max_gear < GENERIC_MIN_GEAR_COUNT) {
                    return Err(ConfigurationError::GearCountTooLow {
                        minimum: GENERIC_MIN_GEAR_COUNT,
                        requested: max_gear
                    }.into());
                }
                Ok(Box::new(Vehicle::with_policy(self.horse_power, self.max_gear, self.policy)))
            }
            BodyStyle::Car => {
                Ok(Box::new(Car::with_policy(self.horse_power, self.max_gear, self.policy)?))
            }
        }
    }

    /// Every speed in `speeds` followed by the explicit `actions`
    pub fn drive_plan(&self) -> Vec<DriveAction> {
        self.speeds.iter()
            .map(|speed| DriveAction::Speed(*speed))
            .chain(self.actions.iter().copied())
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Garage {
    #[serde(default)]
    pub vehicle: Vec<VehicleDefinition>
}

impl Garage {
    pub fn from_toml_str(data: &str) -> Result<Garage> {
        Ok(toml::from_str(data)?)
    }

    pub fn load(path: &Path) -> Result<Garage> {
        let data = fs::read_to_string(path)?;
        let garage = Garage::from_toml_str(&data)?;
        info!("Loaded {} vehicle definitions from {}", garage.vehicle.len(), path.display());
        Ok(garage)
    }

    /// Load the garage at `path`, falling back to [`Garage::builtin`] if it isn't there
    pub fn load_or_builtin(path: &Path) -> Result<Garage> {
        if !path.is_file() {
            warn!("No garage found at {}. Using built-in vehicles", path.display());
            return Ok(Garage::builtin());
        }
        Garage::load(path)
    }

    pub fn builtin() -> Garage {
        Garage {
            vehicle: vec![
                VehicleDefinition {
                    name: "Economy hatchback".to_string(),
                    body: BodyStyle::Car,
                    horse_power: 100,
                    max_gear: Some(5),
                    policy: ShiftPolicy::Automatic,
                    speeds: vec![180],
                    actions: Vec::new()
                },
                VehicleDefinition {
                    name: "Grand tourer".to_string(),
                    body: BodyStyle::Car,
                    horse_power: 250,
                    max_gear: None,
                    policy: ShiftPolicy::Automatic,
                    speeds: vec![180],
                    actions: Vec::new()
                }
            ]
        }
    }
}
