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
Textausgabe
===========

Kompakte Darstellung der Ergebnisse als Text, für die Konsole.

Compact plain text rendering of the results, with German labels.
*/

use itertools::Itertools;

use crate::types::{BuildingLoad, ElementLoss, LoadResult, RoomLoad};

// ==================== Konvertierung in Textformat

/// Darstellung im Textformat
pub trait AsPlain {
    /// Get in plain format
    fn to_plain(&self) -> String;
}

// ================= Implementierungen ====================

/// Zeile eines Bauteils mit Fläche, U-Wert, Temperaturfaktor und Verlust
fn element2string(e: &ElementLoss) -> String {
    format!(
        "- {}: A = {:.2} m2, U = {:.2} W/m2K, f = {:.1}, Q = {:.1} W",
        e.description, e.area, e.u_value, e.factor, e.loss
    )
}

impl AsPlain for LoadResult {
    fn to_plain(&self) -> String {
        let LoadResult {
            transmission,
            ventilation,
            total,
            specific,
            indoor_temperature,
            outdoor_temperature,
            delta_t,
            volume,
            air_change_rate,
            ..
        } = self;
        let elements = if self.elements.is_empty() {
            "- keine".to_string()
        } else {
            self.elements.iter().map(element2string).join("\n")
        };

        format!(
            "Raumtemperatur: {indoor_temperature:.1} °C
Aussentemperatur: {outdoor_temperature:.1} °C
Temperaturdifferenz: {delta_t:.1} K
Volumen: {volume:.1} m3, Luftwechsel: {air_change_rate:.2} 1/h

* Bauteile:
{elements}

Transmissionsverluste: {transmission:.1} W
Lüftungsverluste: {ventilation:.1} W
Heizlast: {total:.0} W
Spezifische Heizlast: {specific:.1} W/m2"
        )
    }
}

impl AsPlain for RoomLoad {
    fn to_plain(&self) -> String {
        let name = if self.name.is_empty() {
            "(ohne Namen)"
        } else {
            &self.name
        };
        format!("** Raum: {}\n\n{}", name, self.load.to_plain())
    }
}

impl AsPlain for BuildingLoad {
    fn to_plain(&self) -> String {
        let rooms = self.rooms.iter().map(RoomLoad::to_plain).join("\n\n");
        format!(
            "{}\n\n** Gebäude\n\nGesamtheizlast: {:.0} W ({:.2} kW)\n",
            rooms,
            self.total,
            self.total_kw()
        )
    }
}
