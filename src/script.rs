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

use tracing::{error, info};
use drivetrain::Garage;
use drivetrain::kinds::VehicleKind;
use drivetrain::traits::{apply_actions, DriveAction};

/// One independent piece of the demonstration
pub trait DemoStep {
    fn title(&self) -> &'static str;
    fn run(&self) -> Vec<String>;
}

pub struct GearingStep<'a> {
    garage: &'a Garage
}

impl<'a> GearingStep<'a> {
    pub fn new(garage: &'a Garage) -> GearingStep<'a> {
        GearingStep { garage }
    }
}

impl DemoStep for GearingStep<'_> {
    fn title(&self) -> &'static str {
        "GEARING"
    }

    fn run(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for definition in &self.garage.vehicle {
            match definition.build() {
                Ok(mut vehicle) => {
                    for (action, speed, gear) in apply_actions(vehicle.as_mut(), &definition.drive_plan()) {
                        lines.push(match action {
                            DriveAction::Speed(_) => {
                                format!("{} - Speed : {} km/h, Gear : {}", definition.name, speed, gear)
                            }
                            _ => {
                                format!("{} - {}, Speed : {} km/h, Gear : {}", definition.name, action, speed, gear)
                            }
                        });
                    }
                }
                Err(e) => {
                    error!("Couldn't build {}. {}", definition.name, e.to_string());
                    lines.push(format!("{} - {}", definition.name, e.to_string()));
                }
            }
        }
        lines
    }
}

pub struct KindsStep;

impl DemoStep for KindsStep {
    fn title(&self) -> &'static str {
        "VEHICLE KINDS"
    }

    fn run(&self) -> Vec<String> {
        let mut lines: Vec<String> = VehicleKind::ALL.iter().map(|k| k.as_mobile().start()).collect();
        lines.extend(VehicleKind::ALL.iter().map(|k| k.as_mobile().movement()));
        for kind in VehicleKind::ALL {
            if let Some(swimmer) = kind.as_swimmable() {
                lines.push(swimmer.swim());
            }
            if let Some(flyer) = kind.as_flyable() {
                lines.push(flyer.fly());
            }
        }
        lines
    }
}

/// Run each step in order, returning the printable output
pub fn run_script(steps: &[&dyn DemoStep]) -> Vec<String> {
    let mut out = Vec::new();
    for step in steps {
        info!("Running demo step {}", step.title());
        out.push(format!("**************** {} ****************", step.title()));
        out.extend(step.run());
        out.push(String::new());
    }
    out
}
