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

pub trait Mobile {
    fn name(&self) -> &'static str;
    fn movement(&self) -> String;

    fn start(&self) -> String {
        format!("The {} started", self.name())
    }
}

pub trait Swimmable: Mobile {
    fn swim(&self) -> String {
        format!("The {} is swimming...", self.name())
    }
}

pub trait Flyable: Mobile {
    fn fly(&self) -> String {
        format!("The {} is flying...", self.name())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoadCar;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Boat;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Plane;

impl Mobile for RoadCar {
    fn name(&self) -> &'static str {
        "Car"
    }

    fn movement(&self) -> String {
        format!("The {} is moving on the highway", self.name())
    }
}

impl Mobile for Boat {
    fn name(&self) -> &'static str {
        "Boat"
    }

    fn movement(&self) -> String {
        format!("The {} is moving in the sea", self.name())
    }
}

impl Swimmable for Boat {}

impl Mobile for Plane {
    fn name(&self) -> &'static str {
        "Plane"
    }

    fn movement(&self) -> String {
        format!("The {} is moving on the runway", self.name())
    }
}

impl Flyable for Plane {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    Car,
    Boat,
    Plane
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 3] = [VehicleKind::Car, VehicleKind::Boat, VehicleKind::Plane];

    pub fn as_mobile(&self) -> &'static dyn Mobile {
        match self {
            VehicleKind::Car => &RoadCar,
            VehicleKind::Boat => &Boat,
            VehicleKind::Plane => &Plane
        }
    }

    pub fn as_swimmable(&self) -> Option<&'static dyn Swimmable> {
        match self {
            VehicleKind::Boat => Some(&Boat),
            _ => None
        }
    }

    pub fn as_flyable(&self) -> Option<&'static dyn Flyable> {
        match self {
            VehicleKind::Plane => Some(&Plane),
            _ => None
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UsageType {
    #[default]
    None,
    Private,
    Commercial
}

#[derive(Clone, Debug, PartialEq)]
pub enum VehicleClass {
    Light { model: String },
    Heavy { model: String, max_payload: f64 }
}

impl VehicleClass {
    pub fn car(model: &str) -> VehicleClass {
        VehicleClass::Light { model: model.to_owned() }
    }

    pub fn truck(model: &str, max_payload: f64) -> VehicleClass {
        VehicleClass::Heavy { model: model.to_owned(), max_payload }
    }

    pub fn model(&self) -> &str {
        match self {
            VehicleClass::Light { model } | VehicleClass::Heavy { model, .. } => model
        }
    }

    pub fn usage_type(&self) -> UsageType {
        match self {
            VehicleClass::Light { .. } => UsageType::Private,
            VehicleClass::Heavy { .. } => UsageType::Commercial
        }
    }

    pub fn max_payload(&self) -> Option<f64> {
        match self {
            VehicleClass::Light { .. } => None,
            VehicleClass::Heavy { max_payload, .. } => Some(*max_payload)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::kinds::{UsageType, VehicleClass, VehicleKind};

    #[test]
    fn start_and_move_lines() {
        let car = VehicleKind::Car.as_mobile();
        assert_eq!(car.start(), "The Car started");
        assert_eq!(car.movement(), "The Car is moving on the highway");
        assert_eq!(VehicleKind::Boat.as_mobile().movement(), "The Boat is moving in the sea");
        assert_eq!(VehicleKind::Plane.as_mobile().start(), "The Plane started");
    }

    #[test]
    fn capabilities() {
        assert!(VehicleKind::Car.as_swimmable().is_none());
        assert!(VehicleKind::Car.as_flyable().is_none());
        assert_eq!(VehicleKind::Boat.as_swimmable().map(|b| b.swim()),
                   Some("The Boat is swimming...".to_string()));
        assert!(VehicleKind::Boat.as_flyable().is_none());
        assert_eq!(VehicleKind::Plane.as_flyable().map(|p| p.fly()),
                   Some("The Plane is flying...".to_string()));
    }

    #[test]
    fn class_usage() {
        let car = VehicleClass::car("Hatchback");
        assert_eq!(car.usage_type(), UsageType::Private);
        assert_eq!(car.max_payload(), None);
        let truck = VehicleClass::truck("Hauler", 18000.0);
        assert_eq!(truck.usage_type(), UsageType::Commercial);
        assert_eq!(truck.model(), "Hauler");
        assert_eq!(truck.max_payload(), Some(18000.0));
        assert_eq!(UsageType::default(), UsageType::None);
    }
}
