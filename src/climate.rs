// Copyright (c) 2018-2022  Ministerio de Fomento
//                          Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

// Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>,
//            Daniel Jiménez González <dani@ietcc.csic.es>,
//            Marta Sorribes Gil <msorribes@ietcc.csic.es>

/*!
Auslegungstemperaturen
======================

- Aussentemperatur in Abhängigkeit der Höhe über Meer
- Raumtemperatur in Abhängigkeit der Raumnutzung
*/

use std::fmt;
use std::str;

use strum_macros::EnumIter;

use crate::error::HeizlastError;

/// Norm-Aussentemperatur auf der Referenzhöhe [°C]
pub const OUTDOOR_TEMPERATURE_REF: f32 = -8.0;
/// Referenzhöhe [m]
pub const ALTITUDE_REF: f32 = 400.0;
/// Abnahme der Aussentemperatur mit der Höhe [K/m]
pub const OUTDOOR_TEMPERATURE_GRADIENT: f32 = 0.005;
/// Raumtemperatur für nicht erkannte Nutzungen [°C]
pub const INDOOR_TEMPERATURE_DEFAULT: f32 = 21.0;

/// Norm-Aussentemperatur [°C] für eine Höhe über Meer [m]
///
/// Linear in the altitude, without any bounds: extreme altitudes give extrapolated values.
pub fn outdoor_design_temperature(altitude: f32) -> f32 {
    OUTDOOR_TEMPERATURE_REF - (altitude - ALTITUDE_REF) * OUTDOOR_TEMPERATURE_GRADIENT
}

/// Raumtemperatur [°C] für eine Raumnutzung
///
/// Unknown usages fall back to `INDOOR_TEMPERATURE_DEFAULT`.
pub fn indoor_design_temperature(usage: &str) -> f32 {
    usage
        .parse::<Usage>()
        .map(Usage::design_temperature)
        .unwrap_or(INDOOR_TEMPERATURE_DEFAULT)
}

/// Raumnutzung
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
pub enum Usage {
    /// Living room
    WOHNZIMMER,
    /// Bedroom
    SCHLAFZIMMER,
    /// Bathroom
    BAD,
    /// Kitchen
    KUECHE,
    /// Children's room
    KINDERZIMMER,
    /// Office
    BUERO,
    /// Hallway
    FLUR,
}

impl Usage {
    /// Raumtemperatur [°C]
    pub fn design_temperature(self) -> f32 {
        match self {
            Usage::WOHNZIMMER => 21.0,
            Usage::SCHLAFZIMMER => 18.0,
            Usage::BAD => 22.0,
            Usage::KUECHE => 21.0,
            Usage::KINDERZIMMER => 20.0,
            Usage::BUERO => 20.0,
            Usage::FLUR => 18.0,
        }
    }
}

impl str::FromStr for Usage {
    type Err = HeizlastError;

    fn from_str(s: &str) -> Result<Usage, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wohnzimmer" | "wohnen" | "living room" => Ok(Usage::WOHNZIMMER),
            "schlafzimmer" | "bedroom" => Ok(Usage::SCHLAFZIMMER),
            "bad" | "badezimmer" | "bathroom" => Ok(Usage::BAD),
            "küche" | "kueche" | "kitchen" => Ok(Usage::KUECHE),
            "kinderzimmer" | "children's room" => Ok(Usage::KINDERZIMMER),
            "büro" | "buero" | "office" => Ok(Usage::BUERO),
            "flur" | "korridor" | "hallway" => Ok(Usage::FLUR),
            _ => Err(HeizlastError::UnknownKey("usage", s.into())),
        }
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Usage::WOHNZIMMER => "Wohnzimmer",
            Usage::SCHLAFZIMMER => "Schlafzimmer",
            Usage::BAD => "Bad",
            Usage::KUECHE => "Küche",
            Usage::KINDERZIMMER => "Kinderzimmer",
            Usage::BUERO => "Büro",
            Usage::FLUR => "Flur",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn outdoor_temperature() {
        assert!(approx(outdoor_design_temperature(400.0), -8.0));
        assert!(approx(outdoor_design_temperature(540.0), -8.7));
        assert!(approx(outdoor_design_temperature(0.0), -6.0));
        // Ohne Begrenzung
        assert!(approx(outdoor_design_temperature(-1600.0), 2.0));
        assert!(approx(outdoor_design_temperature(4400.0), -28.0));
    }

    #[test]
    fn indoor_temperature() {
        assert_eq!(indoor_design_temperature("Wohnzimmer"), 21.0);
        assert_eq!(indoor_design_temperature("living room"), 21.0);
        assert_eq!(indoor_design_temperature("SCHLAFZIMMER"), 18.0);
        assert_eq!(indoor_design_temperature("Bad"), 22.0);
        assert_eq!(indoor_design_temperature("Küche"), 21.0);
        assert_eq!(indoor_design_temperature("Weinkeller"), 21.0);
        assert_eq!(indoor_design_temperature(""), 21.0);
    }

    #[test]
    fn usage_names_roundtrip() {
        for usage in Usage::iter() {
            assert_eq!(format!("{}", usage).parse::<Usage>().unwrap(), usage);
        }
    }
}
