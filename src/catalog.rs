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
U-Wert-Katalog
==============

Statische Tabellen der Heizlastberechnung:

- U-Werte nach Bauteil und Bauperiode
- Flächenfaktoren der Dachtypen (Dachfläche / Grundfläche)
- Luftwechselraten der Lüftungsarten

Katalogdateien verwenden ein einfaches Zeilenformat:

```text
#META QUELLE: suissetec
U, AUSSENWAND, bis 1900, 1.20 # Kommentar
DACHFAKTOR, STEILDACH, 1.15
LUFTWECHSEL, FENSTERLUEFTUNG, 0.50
```

Ein fehlender Schlüssel ist ein Fehler und wird nie durch einen Ersatzwert ersetzt.
*/

use std::fmt;
use std::str;

use itertools::Itertools;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::{
    error::{HeizlastError, Result},
    types::{Element, Meta, MetaVec, Period, RoofType, Ventilation},
};

mod data;

pub use data::*;

lazy_static! {
    /// Eingebauter Katalog, einmal beim ersten Zugriff eingelesen
    ///
    /// Built-in catalog, parsed once on first use and never modified
    pub static ref CATALOG_DEFAULT: Catalog = CATALOG_SUISSETEC
        .parse()
        .expect("Eingebauter U-Wert-Katalog fehlerhaft");
}

/// Trennt Daten und Kommentar einer Katalogzeile
fn split_line(s: &str) -> (Vec<&str>, String) {
    let items: Vec<&str> = s.trim().splitn(2, '#').map(str::trim).collect();
    let comment = items.get(1).unwrap_or(&"").to_string();
    let fields = items[0].split(',').map(str::trim).collect();
    (fields, comment)
}

/// Zahl mit zwei Nachkommastellen, wenn sie damit exakt wieder eingelesen wird
fn number(value: f32) -> String {
    let short = format!("{:.2}", value);
    if short.parse::<f32>() == Ok(value) {
        short
    } else {
        value.to_string()
    }
}

fn comment_suffix(comment: &str) -> String {
    if comment.is_empty() {
        String::new()
    } else {
        format!(" # {}", comment)
    }
}

// -------------------- UValue

/// U-Wert eines Bauteils für eine Bauperiode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UValue {
    /// Element kind
    pub element: Element,
    /// Construction period
    pub period: Period,
    /// U-value [W/m2K]
    pub u: f32,
    /// Descriptive comment
    pub comment: String,
}

impl fmt::Display for UValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "U, {}, {}, {}{}",
            self.element,
            self.period,
            number(self.u),
            comment_suffix(&self.comment)
        )
    }
}

impl str::FromStr for UValue {
    type Err = HeizlastError;

    fn from_str(s: &str) -> Result<UValue> {
        let (items, comment) = split_line(s);
        if items.len() != 4 || items[0] != "U" {
            return Err(HeizlastError::CatalogParseError(s.into()));
        }
        let element: Element = items[1]
            .parse()
            .map_err(|_| HeizlastError::UnknownKey("element", items[1].into()))?;
        let period: Period = items[2]
            .parse()
            .map_err(|_| HeizlastError::UnknownKey("period", items[2].into()))?;
        let u: f32 = items[3].parse()?;
        Ok(UValue {
            element,
            period,
            u,
            comment,
        })
    }
}

// -------------------- RoofFactor

/// Flächenfaktor eines Dachtyps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoofFactor {
    /// Roof type
    pub roof: RoofType,
    /// Roof area / floor area [-]
    pub factor: f32,
    /// Descriptive comment
    pub comment: String,
}

impl fmt::Display for RoofFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DACHFAKTOR, {}, {}{}",
            self.roof,
            number(self.factor),
            comment_suffix(&self.comment)
        )
    }
}

impl str::FromStr for RoofFactor {
    type Err = HeizlastError;

    fn from_str(s: &str) -> Result<RoofFactor> {
        let (items, comment) = split_line(s);
        if items.len() != 3 || items[0] != "DACHFAKTOR" {
            return Err(HeizlastError::CatalogParseError(s.into()));
        }
        let roof: RoofType = items[1]
            .parse()
            .map_err(|_| HeizlastError::UnknownKey("roof type", items[1].into()))?;
        let factor: f32 = items[2].parse()?;
        Ok(RoofFactor {
            roof,
            factor,
            comment,
        })
    }
}

// -------------------- AirChange

/// Luftwechselrate einer Lüftungsart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirChange {
    /// Ventilation method
    pub ventilation: Ventilation,
    /// Air change rate [1/h]
    pub rate: f32,
    /// Descriptive comment
    pub comment: String,
}

impl fmt::Display for AirChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LUFTWECHSEL, {}, {}{}",
            self.ventilation,
            number(self.rate),
            comment_suffix(&self.comment)
        )
    }
}

impl str::FromStr for AirChange {
    type Err = HeizlastError;

    fn from_str(s: &str) -> Result<AirChange> {
        let (items, comment) = split_line(s);
        if items.len() != 3 || items[0] != "LUFTWECHSEL" {
            return Err(HeizlastError::CatalogParseError(s.into()));
        }
        let ventilation: Ventilation = items[1]
            .parse()
            .map_err(|_| HeizlastError::UnknownKey("ventilation method", items[1].into()))?;
        let rate: f32 = items[2].parse()?;
        Ok(AirChange {
            ventilation,
            rate,
            comment,
        })
    }
}

// -------------------- Catalog

/// Katalog mit Metadaten, U-Werten, Dachfaktoren und Luftwechselraten
///
/// Read-only lookup tables of the heating load computation
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Metadata
    pub meta: Vec<Meta>,
    /// U-values by element kind and period
    pub uvalues: Vec<UValue>,
    /// Area factors by roof type
    pub roof_factors: Vec<RoofFactor>,
    /// Air change rates by ventilation method
    pub air_changes: Vec<AirChange>,
}

impl Catalog {
    /// U-Wert [W/m2K] eines Bauteils für eine Bauperiode
    ///
    /// # Errors
    ///
    /// `MissingUValue` when the catalog has no value for the key
    pub fn u_value(&self, element: Element, period: Period) -> Result<f32> {
        self.uvalues
            .iter()
            .find(|v| v.element == element && v.period == period)
            .map(|v| v.u)
            .ok_or(HeizlastError::MissingUValue(element, period))
    }

    /// Flächenfaktor [-] eines Dachtyps
    ///
    /// # Errors
    ///
    /// `MissingRoofFactor` when the catalog has no value for the roof type
    pub fn roof_factor(&self, roof: RoofType) -> Result<f32> {
        self.roof_factors
            .iter()
            .find(|v| v.roof == roof)
            .map(|v| v.factor)
            .ok_or(HeizlastError::MissingRoofFactor(roof))
    }

    /// Luftwechselrate [1/h] einer Lüftungsart
    ///
    /// # Errors
    ///
    /// `MissingAirChangeRate` when the catalog has no value for the ventilation method
    pub fn air_change_rate(&self, ventilation: Ventilation) -> Result<f32> {
        self.air_changes
            .iter()
            .find(|v| v.ventilation == ventilation)
            .map(|v| v.rate)
            .ok_or(HeizlastError::MissingAirChangeRate(ventilation))
    }
}

impl MetaVec for Catalog {
    fn get_metavec(&self) -> &Vec<Meta> {
        &self.meta
    }
    fn get_mut_metavec(&mut self) -> &mut Vec<Meta> {
        &mut self.meta
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .meta
            .iter()
            .map(|v| v.to_string())
            .chain(self.uvalues.iter().map(|v| v.to_string()))
            .chain(self.roof_factors.iter().map(|v| v.to_string()))
            .chain(self.air_changes.iter().map(|v| v.to_string()))
            .join("\n");
        write!(f, "{}", lines)
    }
}

impl str::FromStr for Catalog {
    type Err = HeizlastError;

    fn from_str(s: &str) -> Result<Catalog> {
        let s_nobom = s.trim_start_matches('\u{feff}');
        let mut catalog = Catalog::default();
        for line in s_nobom.lines().map(str::trim) {
            if line.starts_with("#META") {
                catalog.meta.push(line.parse()?);
                continue;
            }
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line.splitn(2, ',').next().map(str::trim) {
                Some("U") => catalog.uvalues.push(line.parse()?),
                Some("DACHFAKTOR") => catalog.roof_factors.push(line.parse()?),
                Some("LUFTWECHSEL") => catalog.air_changes.push(line.parse()?),
                _ => return Err(HeizlastError::CatalogParseError(line.into())),
            }
        }
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    const TESTCATALOG: &str = "#META QUELLE: Test
U, AUSSENWAND, Neubau, 0.15 # Neubau
U, FENSTER, Neubau, 0.80
DACHFAKTOR, FLACHDACH, 1.00
LUFTWECHSEL, FENSTERLUEFTUNG, 0.50 # Fensterlüftung";

    #[test]
    fn catalog_roundtrip() {
        let catalog: Catalog = TESTCATALOG.parse().unwrap();
        assert_eq!(catalog.meta.len(), 1);
        assert_eq!(catalog.uvalues.len(), 2);
        assert_eq!(format!("{}", catalog), TESTCATALOG);
    }

    #[test]
    fn catalog_roundtrip_keeps_precision() {
        let catalog: Catalog = "U, AUSSENWAND, Neubau, 0.125\nDACHFAKTOR, STEILDACH, 1.1547"
            .parse()
            .unwrap();
        let catalogstr = format!("{}", catalog);
        assert_eq!(
            catalogstr,
            "U, AUSSENWAND, Neubau, 0.125\nDACHFAKTOR, STEILDACH, 1.1547"
        );
        let back: Catalog = catalogstr.parse().unwrap();
        assert_eq!(back, catalog);
        assert_eq!(back.u_value(Element::AUSSENWAND, Period::NEUBAU).unwrap(), 0.125);
    }

    #[test]
    fn catalog_ignores_comments_and_blank_lines() {
        let catalog: Catalog = "\u{feff}# U-Werte\n\nU, DACH, ab 2015, 0.17\n"
            .parse()
            .unwrap();
        assert_eq!(catalog.u_value(Element::DACH, Period::AB_2015).unwrap(), 0.17);
    }

    #[test]
    fn catalog_lookups() {
        let catalog: Catalog = TESTCATALOG.parse().unwrap();
        assert_eq!(
            catalog
                .u_value(Element::AUSSENWAND, Period::NEUBAU)
                .unwrap(),
            0.15
        );
        assert_eq!(catalog.roof_factor(RoofType::FLACHDACH).unwrap(), 1.0);
        assert_eq!(
            catalog
                .air_change_rate(Ventilation::FENSTERLUEFTUNG)
                .unwrap(),
            0.5
        );
    }

    #[test]
    fn catalog_missing_keys() {
        let catalog: Catalog = TESTCATALOG.parse().unwrap();
        match catalog.u_value(Element::BODEN, Period::NEUBAU) {
            Err(HeizlastError::MissingUValue(Element::BODEN, Period::NEUBAU)) => (),
            other => panic!("Unerwartetes Ergebnis: {:?}", other),
        }
        assert!(catalog.roof_factor(RoofType::STEILDACH).is_err());
        assert!(catalog.air_change_rate(Ventilation::UNDICHT).is_err());
    }

    #[test]
    fn catalog_bad_lines() {
        assert!("U, AUSSENWAND, 1850, 1.2".parse::<Catalog>().is_err());
        assert!("U, KELLER, bis 1900, 1.2".parse::<Catalog>().is_err());
        assert!("U, DACH, bis 1900, viel".parse::<Catalog>().is_err());
        assert!("X, DACH, bis 1900, 1.2".parse::<Catalog>().is_err());
        assert!("DACHFAKTOR, STEILDACH".parse::<Catalog>().is_err());
    }

    #[test]
    fn default_catalog_is_complete() {
        let catalog = &*CATALOG_DEFAULT;
        assert!(catalog.has_meta("QUELLE"));
        for element in Element::iter() {
            for period in Period::iter() {
                assert!(catalog.u_value(element, period).is_ok());
            }
        }
        for roof in RoofType::iter().filter(|r| !r.is_against_heated()) {
            assert!(catalog.roof_factor(roof).is_ok());
        }
        for vent in Ventilation::iter() {
            assert!(catalog.air_change_rate(vent).is_ok());
        }
    }

    #[test]
    fn default_catalog_values() {
        let catalog = &*CATALOG_DEFAULT;
        assert_eq!(catalog.u_value(Element::AUSSENWAND, Period::NEUBAU).unwrap(), 0.15);
        assert_eq!(catalog.u_value(Element::FENSTER, Period::NEUBAU).unwrap(), 0.80);
        assert_eq!(catalog.u_value(Element::DACH, Period::NEUBAU).unwrap(), 0.15);
        assert_eq!(catalog.u_value(Element::BODEN, Period::NEUBAU).unwrap(), 0.20);
        assert_eq!(catalog.u_value(Element::FENSTER, Period::BIS_1900).unwrap(), 3.0);
        assert_eq!(catalog.roof_factor(RoofType::FLACHDACH).unwrap(), 1.0);
        assert_eq!(
            catalog
                .air_change_rate(Ventilation::FENSTERLUEFTUNG)
                .unwrap(),
            0.5
        );
    }
}
