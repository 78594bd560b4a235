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
Ergebnisse der Heizlastberechnung
=================================

Die Ergebnisse werden bei jeder Berechnung neu erzeugt und nicht gespeichert. Es wird weder
gerundet noch formatiert.
*/

use serde::{Deserialize, Serialize};

use super::{Boundary, Element};

/// Wärmeverlust eines einzelnen Bauteils
///
/// Transmission loss of a single building element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementLoss {
    /// Descriptive label
    pub description: String,
    /// Element kind whose U-value table was used
    pub element: Element,
    /// Zone on the other side
    pub boundary: Boundary,
    /// Area [m2]
    pub area: f32,
    /// U-value [W/m2K]
    pub u_value: f32,
    /// Fraction of the temperature difference acting across the element [-]
    pub factor: f32,
    /// Heat loss [W]
    pub loss: f32,
}

impl ElementLoss {
    /// Loss U x A x (factor x dT)
    pub fn new<T: Into<String>>(
        description: T,
        element: Element,
        boundary: Boundary,
        area: f32,
        u_value: f32,
        delta_t: f32,
    ) -> Self {
        let factor = boundary.temperature_factor();
        Self {
            description: description.into(),
            element,
            boundary,
            area,
            u_value,
            factor,
            loss: u_value * area * (delta_t * factor),
        }
    }
}

/// Heizlast eines Raumes
///
/// Heating load of a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadResult {
    /// Transmission heat loss [W]
    pub transmission: f32,
    /// Ventilation heat loss [W]
    pub ventilation: f32,
    /// Total heating load [W]
    pub total: f32,
    /// Heating load per floor area [W/m2]
    pub specific: f32,
    /// Indoor design temperature [°C]
    pub indoor_temperature: f32,
    /// Outdoor design temperature [°C]
    pub outdoor_temperature: f32,
    /// Design temperature difference [K]
    pub delta_t: f32,
    /// Room volume [m3]
    pub volume: f32,
    /// Air change rate [1/h]
    pub air_change_rate: f32,
    /// Transmission losses by element
    pub elements: Vec<ElementLoss>,
}

/// Heizlast eines benannten Raumes innerhalb eines Gebäudes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomLoad {
    /// Room name
    pub name: String,
    /// Room heating load
    pub load: LoadResult,
}

/// Heizlast aller Räume
///
/// Building heating load: plain sum of the room loads, without any shared wall correction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingLoad {
    /// Results by room
    pub rooms: Vec<RoomLoad>,
    /// Total heating load [W]
    pub total: f32,
}

impl BuildingLoad {
    /// Total heating load [kW]
    pub fn total_kw(&self) -> f32 {
        self.total / 1000.0
    }
}

/// Vorgegebene Auslegungswerte, die für alle Räume gelten
///
/// Fixed design values replacing the values resolved for each room
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Overrides {
    /// Indoor design temperature [°C]
    #[serde(default)]
    pub indoor_temperature: Option<f32>,
    /// Outdoor design temperature [°C]
    #[serde(default)]
    pub outdoor_temperature: Option<f32>,
    /// Air change rate [1/h]
    #[serde(default)]
    pub air_change_rate: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn element_loss_factor() {
        let e = ElementLoss::new("Boden", Element::BODEN, Boundary::UNBEHEIZT, 20.0, 0.2, 30.0);
        assert_eq!(e.factor, 0.5);
        assert!((e.loss - 60.0).abs() < 1e-4);
        let e = ElementLoss::new("Boden", Element::BODEN, Boundary::BEHEIZT, 20.0, 0.2, 30.0);
        assert_eq!(e.loss, 0.0);
    }

    #[test]
    fn overrides_from_json() {
        let o: Overrides = serde_json::from_str(r#"{ "outdoor_temperature": -10 }"#).unwrap();
        assert_eq!(
            o,
            Overrides {
                indoor_temperature: None,
                outdoor_temperature: Some(-10.0),
                air_change_rate: None,
            }
        );
    }
}
