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

mod settings;
mod script;

use std::error::Error;
use tracing_subscriber;
use tracing_appender;
use tracing::{info, warn};

use drivetrain::Garage;
use crate::script::{run_script, DemoStep, GearingStep, KindsStep};
use crate::settings::DemoSettings;


fn init_logging(settings: &DemoSettings) {
    let file_appender = tracing_appender::rolling::never(settings.log_directory(), settings.log_filename());
    let subscriber = tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_ansi(false)
        .compact()
        .finish();
    match tracing::subscriber::set_global_default(subscriber) {
        Ok(_) => {
            info!("Logging initialised");
        }
        Err(e) => {
            eprintln!("Failed to init logging. {}", e.to_string());
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let (settings, settings_error) = match DemoSettings::load() {
        Ok(settings) => (settings, None),
        Err(e) => (DemoSettings::default(), Some(e))
    };
    init_logging(&settings);
    if let Some(e) = settings_error {
        warn!("Failed to load settings, using defaults. {}", e.to_string());
        eprintln!("Failed to load settings, using defaults. {}", e.to_string());
    }

    let garage = Garage::load_or_builtin(&settings.garage_path())?;

    let gearing = GearingStep::new(&garage);
    let steps: [&dyn DemoStep; 2] = [&gearing, &KindsStep];
    for line in run_script(&steps) {
        println!("{}", line);
    }
    info!("Demo complete");
    Ok(())
}
