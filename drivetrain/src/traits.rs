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

use std::fmt::{self, Debug, Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::gearing::GearSelector;
use crate::vehicle::ShiftPolicy;

/// Anything with a speed driven gearbox
pub trait Transmission: Debug {
    fn selector(&self) -> &GearSelector;
    fn speed(&self) -> i32;
    fn gear(&self) -> i32;

    /// Update the speed and return the gear that is engaged afterwards
    fn set_speed(&mut self, speed: i32) -> i32;
    fn gear_up(&mut self) -> i32;
    fn gear_down(&mut self) -> i32;

    fn policy(&self) -> ShiftPolicy;
    fn is_manual_hold(&self) -> bool;

    /// Drop any held manual gear and go back to the gear for the current speed
    fn release_manual(&mut self) -> i32;

    fn horse_power(&self) -> i32 {
        self.selector().horse_power()
    }

    fn max_gear(&self) -> i32 {
        self.selector().max_gear()
    }
}

pub fn apply_speeds<T: Transmission + ?Sized>(transmission: &mut T, speeds: &[i32]) -> Vec<(i32, i32)> {
    speeds.iter().map(|speed| (*speed, transmission.set_speed(*speed))).collect()
}

/// A single thing a driver can do to a [`Transmission`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveAction {
    Speed(i32),
    GearUp,
    GearDown,
    Release
}

impl Display for DriveAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DriveAction::Speed(speed) => write!(f, "speed {}", speed),
            DriveAction::GearUp => write!(f, "gear up"),
            DriveAction::GearDown => write!(f, "gear down"),
            DriveAction::Release => write!(f, "release")
        }
    }
}

/// Perform each action in order, returning the speed and gear after every one
pub fn apply_actions<T: Transmission + ?Sized>(transmission: &mut T, actions: &[DriveAction]) -> Vec<(DriveAction, i32, i32)> {
    actions.iter().map(|action| {
        let gear = match action {
            DriveAction::Speed(speed) => transmission.set_speed(*speed),
            DriveAction::GearUp => transmission.gear_up(),
            DriveAction::GearDown => transmission.gear_down(),
            DriveAction::Release => transmission.release_manual()
        };
        (*action, transmission.speed(), gear)
    }).collect()
}
