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

/// Vehicles at or above this rating use the [`ShiftTable::HighPower`] thresholds
pub const HIGH_POWER_THRESHOLD_HP: i32 = 180;

const STANDARD_UPPER_BOUNDS: [i32; 4] = [40, 70, 80, 100];
const HIGH_POWER_UPPER_BOUNDS: [i32; 4] = [80, 120, 180, 220];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShiftTable {
    Standard,
    HighPower
}

impl ShiftTable {
    pub fn for_horse_power(horse_power: i32) -> ShiftTable {
        match horse_power < HIGH_POWER_THRESHOLD_HP {
            true => ShiftTable::Standard,
            false => ShiftTable::HighPower
        }
    }

    /// The inclusive top speed of gears 1 through 4. Anything faster than
    /// the last bound is in the top gear
    pub fn upper_bounds(&self) -> &'static [i32; 4] {
        match self {
            ShiftTable::Standard => &STANDARD_UPPER_BOUNDS,
            ShiftTable::HighPower => &HIGH_POWER_UPPER_BOUNDS
        }
    }

    /// Get the gear the table puts `speed` in, capped to `max_gear`
    ///
    /// - `speed`: The current speed. Negative values fall into the first gear
    /// - `max_gear`: The highest gear the vehicle has
    pub fn gear_for_speed(&self, speed: i32, max_gear: i32) -> i32 {
        let table_gear = self.upper_bounds()
            .iter()
            .position(|upper_bound| speed <= *upper_bound)
            .map(|idx| idx as i32 + 1)
            .unwrap_or(max_gear);
        table_gear.min(max_gear)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GearSelector {
    horse_power: i32,
    max_gear: i32,
    table: ShiftTable
}

impl GearSelector {
    pub fn new(horse_power: i32, max_gear: i32) -> GearSelector {
        GearSelector {
            horse_power,
            max_gear,
            table: ShiftTable::for_horse_power(horse_power)
        }
    }

    pub fn horse_power(&self) -> i32 {
        self.horse_power
    }

    pub fn max_gear(&self) -> i32 {
        self.max_gear
    }

    pub fn table(&self) -> ShiftTable {
        self.table
    }

    pub fn select(&self, speed: i32) -> i32 {
        self.table.gear_for_speed(speed, self.max_gear)
    }
}
