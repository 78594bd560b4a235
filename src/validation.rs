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
Plausibilitätsprüfung
=====================

Prüfung der Raumdaten vor der Berechnung. Fehler verhindern eine sinnvolle Berechnung,
Warnungen weisen auf ungewöhnliche, aber berechenbare Eingaben hin.

Input checks done before computing. The computation itself never validates its inputs.
*/

use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::types::{LoadResult, Room};

/// Schweregrad eines Befundes
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Severity {
    /// Invalid input
    FEHLER,
    /// Unusual input
    WARNUNG,
}

/// Befund der Prüfung
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Severity
    pub severity: Severity,
    /// Message, in German
    pub message: String,
}

impl Issue {
    fn error<T: Into<String>>(message: T) -> Self {
        Self {
            severity: Severity::FEHLER,
            message: message.into(),
        }
    }

    fn warning<T: Into<String>>(message: T) -> Self {
        Self {
            severity: Severity::WARNUNG,
            message: message.into(),
        }
    }

    /// Is this an error?
    pub fn is_error(&self) -> bool {
        self.severity == Severity::FEHLER
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Prüft einen Raum
///
/// Returns the list of issues found, empty for valid rooms.
pub fn check_room(room: &Room) -> Vec<Issue> {
    let mut issues = Vec::new();

    if room.name.trim().is_empty() {
        issues.push(Issue::warning("Raum ohne Namen"));
    }

    positive(&mut issues, "Grundfläche", room.floor_area);
    positive(&mut issues, "Raumhöhe", room.ceiling_height);
    if !room.altitude.is_finite() {
        issues.push(Issue::error("Höhe über Meer ist keine Zahl"));
    }

    for (i, wall) in room.walls.iter().enumerate() {
        not_negative(&mut issues, &format!("Aussenwand {}: Fläche", i + 1), wall.area);
        not_negative(
            &mut issues,
            &format!("Aussenwand {}: Fensterfläche", i + 1),
            wall.window_area,
        );
    }

    for (i, wall) in room.interior_walls.iter().enumerate() {
        not_negative(&mut issues, &format!("Innenwand {}: Fläche", i + 1), wall.area);
    }

    if let Some(dims) = room.dimensions {
        let walls: f32 = room.walls.iter().map(|w| w.area + w.window_area).sum::<f32>()
            + room.interior_walls.iter().map(|w| w.area).sum::<f32>();
        if walls > dims.wall_area() + 0.01 {
            issues.push(Issue::warning(format!(
                "Wandflächen ({:.2} m2) grösser als die Wandfläche des Raumes ({:.2} m2)",
                walls,
                dims.wall_area()
            )));
        }
    }

    for (i, floor) in room.floors.iter().enumerate() {
        if !floor.share.is_finite() || floor.share < 0.0 || floor.share > 100.0 {
            issues.push(Issue::error(format!(
                "Boden {}: Anteil {} % ausserhalb von 0 bis 100 %",
                i + 1,
                floor.share
            )));
        }
    }
    if !room.floors.is_empty() {
        let sum: f32 = room.floors.iter().map(|f| f.share).sum();
        if (sum - 100.0).abs() > 0.01 {
            issues.push(Issue::warning(format!(
                "Summe der Bodenanteile ist {:.1} % statt 100 %",
                sum
            )));
        }
    }

    issues
}

/// Prüft ein Berechnungsergebnis
///
/// A non positive temperature difference gives zero or negative heating loads.
pub fn check_load(load: &LoadResult) -> Vec<Issue> {
    let mut issues = Vec::new();
    if load.delta_t <= 0.0 {
        issues.push(Issue::warning(format!(
            "Raumtemperatur {:.1} °C nicht über der Aussentemperatur {:.1} °C",
            load.indoor_temperature, load.outdoor_temperature
        )));
    }
    issues
}

fn positive(issues: &mut Vec<Issue>, what: &str, value: f32) {
    if !value.is_finite() || value <= 0.0 {
        issues.push(Issue::error(format!("{} muss grösser als 0 sein ({})", what, value)));
    }
}

fn not_negative(issues: &mut Vec<Issue>, what: &str, value: f32) {
    if !value.is_finite() || value < 0.0 {
        issues.push(Issue::error(format!("{} darf nicht negativ sein ({})", what, value)));
    }
}
