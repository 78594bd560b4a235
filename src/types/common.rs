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
Aufzählungen
============

Schlüssel der Kataloge und Randbedingungen der Bauteile.

Die textuelle Darstellung (`Display`, `FromStr`) entspricht den Schlüsseln im U-Wert-Katalog
und in den Projektdateien.
*/

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

// ==================== Catalog keys

// -------------------- Element

/// Bauteilart mit eigener U-Wert-Tabelle
///
/// Building element kind with its own U-value table
#[allow(non_camel_case_types)]
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum Element {
    /// Roof or top floor ceiling
    DACH,
    /// Exterior wall (also used for interior walls)
    AUSSENWAND,
    /// Window
    FENSTER,
    /// Floor or ground slab
    BODEN,
}

// -------------------- Period

/// Bauperiode (Baujahr oder Sanierungsjahr) eines Bauteils
///
/// Construction or renovation period of a building element
#[allow(non_camel_case_types)]
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum Period {
    /// Before 1900
    #[strum(serialize = "bis 1900")]
    #[serde(rename = "bis 1900")]
    BIS_1900,
    /// 1900 - 1920
    #[strum(serialize = "1900-1920")]
    #[serde(rename = "1900-1920")]
    P_1900_1920,
    /// 1920 - 1960
    #[strum(serialize = "1920-1960")]
    #[serde(rename = "1920-1960")]
    P_1920_1960,
    /// 1960 - 1970
    #[strum(serialize = "1960-1970")]
    #[serde(rename = "1960-1970")]
    P_1960_1970,
    /// 1970 - 1980
    #[strum(serialize = "1970-1980")]
    #[serde(rename = "1970-1980")]
    P_1970_1980,
    /// 1980 - 1990
    #[strum(serialize = "1980-1990")]
    #[serde(rename = "1980-1990")]
    P_1980_1990,
    /// 1990 - 2000
    #[strum(serialize = "1990-2000")]
    #[serde(rename = "1990-2000")]
    P_1990_2000,
    /// 2000 - 2015
    #[strum(serialize = "2000-2015")]
    #[serde(rename = "2000-2015")]
    P_2000_2015,
    /// From 2015 on
    #[strum(serialize = "ab 2015")]
    #[serde(rename = "ab 2015")]
    AB_2015,
    /// New construction to current standards
    #[strum(serialize = "Neubau")]
    #[serde(rename = "Neubau")]
    NEUBAU,
}

impl Default for Period {
    fn default() -> Period {
        Period::P_1960_1970
    }
}

// -------------------- RoofType

/// Dachtyp
///
/// Each type, except `GEGEN_BEHEIZT`, has an area factor in the catalog that converts the room
/// floor area into the roof area.
#[allow(non_camel_case_types)]
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum RoofType {
    /// Pitched roof
    STEILDACH,
    /// Flat roof
    FLACHDACH,
    /// Ceiling against an unheated attic
    ESTRICHBODEN,
    /// Heated space above, no heat loss
    GEGEN_BEHEIZT,
}

impl RoofType {
    /// Is there a heated space on the other side?
    pub fn is_against_heated(self) -> bool {
        self == RoofType::GEGEN_BEHEIZT
    }
}

impl Default for RoofType {
    fn default() -> RoofType {
        RoofType::GEGEN_BEHEIZT
    }
}

// -------------------- Ventilation

/// Lüftungsart
///
/// Each method has an air change rate [1/h] in the catalog.
#[allow(non_camel_case_types)]
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum Ventilation {
    /// Manual window ventilation
    FENSTERLUEFTUNG,
    /// Exhaust air system
    ABLUFTANLAGE,
    /// Balanced ventilation with heat recovery
    KOMFORTLUEFTUNG,
    /// Leaky old building envelope
    UNDICHT,
}

impl Default for Ventilation {
    fn default() -> Ventilation {
        Ventilation::FENSTERLUEFTUNG
    }
}

// ==================== Element boundaries

// -------------------- Boundary

/// Angrenzender Bereich auf der anderen Seite eines Bauteils
///
/// What lies on the other side of a floor or interior wall.
#[allow(non_camel_case_types)]
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum Boundary {
    /// Outside air
    AUSSEN,
    /// Unheated space (e.g. cellar)
    UNBEHEIZT,
    /// Ground
    ERDREICH,
    /// Heated space
    BEHEIZT,
}

impl Boundary {
    /// Anteil der Temperaturdifferenz, der über das Bauteil wirkt
    ///
    /// Fraction of the design temperature difference acting across the element
    pub fn temperature_factor(self) -> f32 {
        match self {
            Boundary::AUSSEN => 1.0,
            Boundary::UNBEHEIZT | Boundary::ERDREICH => 0.5,
            Boundary::BEHEIZT => 0.0,
        }
    }

    /// Is there a heated space on the other side?
    pub fn is_heated(self) -> bool {
        self == Boundary::BEHEIZT
    }
}

impl Default for Boundary {
    fn default() -> Boundary {
        Boundary::UNBEHEIZT
    }
}

// -------------------- Orientation

/// Himmelsrichtung einer Wand (nur informativ)
#[allow(non_camel_case_types)]
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum Orientation {
    /// North
    N,
    /// North east
    NO,
    /// East
    O,
    /// South east
    SO,
    /// South
    S,
    /// South west
    SW,
    /// West
    W,
    /// North west
    NW,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn period_keys() {
        assert_eq!("bis 1900".parse::<Period>().unwrap(), Period::BIS_1900);
        assert_eq!("Neubau".parse::<Period>().unwrap(), Period::NEUBAU);
        assert_eq!(format!("{}", Period::P_1970_1980), "1970-1980");
        assert!("1850".parse::<Period>().is_err());
        assert_eq!(Period::iter().count(), 10);
    }

    #[test]
    fn period_json() {
        let json = serde_json::to_string(&Period::AB_2015).unwrap();
        assert_eq!(json, "\"ab 2015\"");
        let p: Period = serde_json::from_str("\"1900-1920\"").unwrap();
        assert_eq!(p, Period::P_1900_1920);
    }

    #[test]
    fn boundary_factors() {
        assert_eq!(Boundary::AUSSEN.temperature_factor(), 1.0);
        assert_eq!(Boundary::UNBEHEIZT.temperature_factor(), 0.5);
        assert_eq!(Boundary::ERDREICH.temperature_factor(), 0.5);
        assert_eq!(Boundary::BEHEIZT.temperature_factor(), 0.0);
        assert!(Boundary::BEHEIZT.is_heated());
        assert!(!Boundary::ERDREICH.is_heated());
    }

    #[test]
    fn roof_types() {
        assert_eq!(
            "GEGEN_BEHEIZT".parse::<RoofType>().unwrap(),
            RoofType::GEGEN_BEHEIZT
        );
        assert!(RoofType::GEGEN_BEHEIZT.is_against_heated());
        assert!(!RoofType::FLACHDACH.is_against_heated());
        assert_eq!(format!("{}", RoofType::STEILDACH), "STEILDACH");
    }
}
