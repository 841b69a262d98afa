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

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use crate::error::{ConfigurationError, Result};
use crate::gearing::GearSelector;
use crate::traits::Transmission;

pub const DEFAULT_MAX_GEAR: i32 = 5;
pub const GENERIC_MIN_GEAR_COUNT: i32 = 1;
pub const CAR_DEFAULT_MAX_GEAR: i32 = 6;
pub const CAR_MIN_HORSE_POWER: i32 = 30;
pub const CAR_MIN_GEAR_COUNT: i32 = 2;

/// Controls what happens to a manual shift when the speed next changes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftPolicy {
    /// Every speed update recomputes the gear, discarding manual shifts
    #[default]
    Automatic,
    /// A manual shift holds its gear until [`Transmission::release_manual`] is called
    HoldManual
}

#[derive(Debug, Clone)]
pub struct Vehicle {
    selector: GearSelector,
    policy: ShiftPolicy,
    speed: i32,
    gear: i32,
    manual_hold: bool
}

impl Vehicle {
    pub fn new(horse_power: i32, max_gear: Option<i32>) -> Vehicle {
        Vehicle::with_policy(horse_power, max_gear, ShiftPolicy::default())
    }

    pub fn with_policy(horse_power: i32, max_gear: Option<i32>, policy: ShiftPolicy) -> Vehicle {
        let selector = GearSelector::new(horse_power, max_gear.unwrap_or(DEFAULT_MAX_GEAR));
        Vehicle {
            selector,
            policy,
            speed: 0,
            gear: selector.select(0),
            manual_hold: false
        }
    }

    fn note_manual_shift(&mut self) {
        if self.policy == ShiftPolicy::HoldManual {
            self.manual_hold = true;
        }
    }
}

impl Transmission for Vehicle {
    fn selector(&self) -> &GearSelector {
        &self.selector
    }

    fn speed(&self) -> i32 {
        self.speed
    }

    fn gear(&self) -> i32 {
        self.gear
    }

    fn set_speed(&mut self, speed: i32) -> i32 {
        self.speed = speed;
        if self.manual_hold {
            debug!("Holding manual gear {} at speed {}", self.gear, speed);
            return self.gear;
        }
        let new_gear = self.selector.select(speed);
        if new_gear != self.gear {
            debug!("Speed {} moved gear {} -> {}", speed, self.gear, new_gear);
        }
        self.gear = new_gear;
        self.gear
    }

    fn gear_up(&mut self) -> i32 {
        if self.gear < self.selector.max_gear() {
            self.gear += 1;
            self.note_manual_shift();
        }
        self.gear
    }

    fn gear_down(&mut self) -> i32 {
        if self.gear > 0 {
            self.gear -= 1;
            self.note_manual_shift();
        }
        self.gear
    }

    fn policy(&self) -> ShiftPolicy {
        self.policy
    }

    fn is_manual_hold(&self) -> bool {
        self.manual_hold
    }

    fn release_manual(&mut self) -> i32 {
        self.manual_hold = false;
        self.gear = self.selector.select(self.speed);
        self.gear
    }
}

/// A [`Vehicle`] that insists on a minimum power and gear count
#[derive(Debug, Clone)]
pub struct Car {
    vehicle: Vehicle
}

impl Car {
    pub fn new(horse_power: i32, max_gear: Option<i32>) -> Result<Car> {
        Car::with_policy(horse_power, max_gear, ShiftPolicy::default())
    }

    pub fn with_policy(horse_power: i32, max_gear: Option<i32>, policy: ShiftPolicy) -> Result<Car> {
        let max_gear = max_gear.unwrap_or(CAR_DEFAULT_MAX_GEAR);
        if horse_power < CAR_MIN_HORSE_POWER {
            return Err(ConfigurationError::HorsePowerTooLow {
                minimum: CAR_MIN_HORSE_POWER,
                requested: horse_power
            }.into());
        }
        if max_gear < CAR_MIN_GEAR_COUNT {
            return Err(ConfigurationError::GearCountTooLow {
                minimum: CAR_MIN_GEAR_COUNT,
                requested: max_gear
            }.into());
        }
        info!("Car created with {}hp and {} gears", horse_power, max_gear);
        Ok(Car { vehicle: Vehicle::with_policy(horse_power, Some(max_gear), policy) })
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn vehicle_mut(&mut self) -> &mut Vehicle {
        &mut self.vehicle
    }
}

impl Transmission for Car {
    fn selector(&self) -> &GearSelector {
        self.vehicle.selector()
    }

    fn speed(&self) -> i32 {
        self.vehicle.speed()
    }

    fn gear(&self) -> i32 {
        self.vehicle.gear()
    }

    fn set_speed(&mut self, speed: i32) -> i32 {
        self.vehicle.set_speed(speed)
    }

    fn gear_up(&mut self) -> i32 {
        self.vehicle.gear_up()
    }

    fn gear_down(&mut self) -> i32 {
        self.vehicle.gear_down()
    }

    fn policy(&self) -> ShiftPolicy {
        self.vehicle.policy()
    }

    fn is_manual_hold(&self) -> bool {
        self.vehicle.is_manual_hold()
    }

    fn release_manual(&mut self) -> i32 {
        self.vehicle.release_manual()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::traits::{apply_speeds, Transmission};
    use crate::vehicle::{Car, ShiftPolicy, Vehicle};

    #[test]
    fn generic_vehicle_defaults() {
        let vehicle = Vehicle::new(100, None);
        assert_eq!(vehicle.max_gear(), 5);
        assert_eq!(vehicle.horse_power(), 100);
        assert_eq!(vehicle.speed(), 0);
        assert_eq!(vehicle.gear(), 1);
        assert_eq!(vehicle.policy(), ShiftPolicy::Automatic);
    }

    #[test]
    fn speed_write_recomputes_gear() {
        let mut car = Car::new(100, Some(5)).unwrap();
        assert_eq!(car.set_speed(180), 5);
        assert_eq!(car.gear(), 5);
        assert_eq!(car.set_speed(180), 5);
        assert_eq!(car.set_speed(60), 2);
    }

    #[test]
    fn high_power_car_with_three_gears() {
        let mut car = Car::new(250, Some(3)).unwrap();
        assert_eq!(car.set_speed(180), 3);
    }

    #[test]
    fn car_defaults_to_six_gears() {
        let mut car = Car::new(250, None).unwrap();
        assert_eq!(car.max_gear(), 6);
        assert_eq!(car.set_speed(180), 3);
        assert_eq!(car.set_speed(300), 6);
    }

    #[test]
    fn car_horse_power_validation() {
        let err = Car::new(29, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
        assert!(err.details().contains("30 hp"));
        assert!(Car::new(30, None).is_ok());
    }

    #[test]
    fn car_gear_count_validation() {
        let err = Car::new(100, Some(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
        assert!(err.details().contains("2 gears"));
        assert!(Car::new(100, Some(2)).is_ok());
    }

    #[test]
    fn gear_up_stops_at_max_gear() {
        let mut vehicle = Vehicle::new(100, Some(3));
        assert_eq!(vehicle.gear_up(), 2);
        assert_eq!(vehicle.gear_up(), 3);
        assert_eq!(vehicle.gear_up(), 3);
    }

    #[test]
    fn gear_down_stops_at_zero() {
        let mut vehicle = Vehicle::new(100, None);
        assert_eq!(vehicle.gear_down(), 0);
        assert_eq!(vehicle.gear_down(), 0);
    }

    #[test]
    fn automatic_policy_discards_manual_shift() {
        let mut vehicle = Vehicle::new(100, None);
        vehicle.set_speed(30);
        assert_eq!(vehicle.gear_up(), 2);
        assert!(!vehicle.is_manual_hold());
        assert_eq!(vehicle.set_speed(35), 1);
    }

    #[test]
    fn hold_manual_policy_keeps_gear_until_released() {
        let mut vehicle = Vehicle::with_policy(100, None, ShiftPolicy::HoldManual);
        vehicle.set_speed(30);
        assert_eq!(vehicle.gear_up(), 2);
        assert!(vehicle.is_manual_hold());
        assert_eq!(vehicle.set_speed(95), 2);
        assert_eq!(vehicle.speed(), 95);
        assert_eq!(vehicle.release_manual(), 4);
        assert!(!vehicle.is_manual_hold());
        assert_eq!(vehicle.set_speed(10), 1);
    }

    #[test]
    fn shift_at_bound_does_not_engage_hold() {
        let mut vehicle = Vehicle::with_policy(100, Some(2), ShiftPolicy::HoldManual);
        vehicle.set_speed(150);
        assert_eq!(vehicle.gear_up(), 2);
        assert!(!vehicle.is_manual_hold());
    }

    #[test]
    fn apply_speeds_reports_each_gear() {
        let mut car = Car::new(100, Some(5)).unwrap();
        assert_eq!(apply_speeds(&mut car, &[0, 45, 75, 95, 150]),
                   vec![(0, 1), (45, 2), (75, 3), (95, 4), (150, 5)]);
    }
}
