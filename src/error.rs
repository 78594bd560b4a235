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
Fehler
======

Fehlertypen der Bibliothek

Error types of the library
*/

use std::fmt;

use crate::types::{Element, Period, RoofType, Ventilation};

/// Fehler der Heizlastberechnung
///
/// Heating load library error
#[derive(Debug)]
pub enum HeizlastError {
    /// Generic parse error
    ParseError(String),
    /// Wrong line in a U-value catalog
    CatalogParseError(String),
    /// Unknown key for an enumeration (kind of key, key)
    UnknownKey(&'static str, String),
    /// The catalog has no U-value for this element and period
    MissingUValue(Element, Period),
    /// The catalog has no area factor for this roof type
    MissingRoofFactor(RoofType),
    /// The catalog has no air change rate for this ventilation method
    MissingAirChangeRate(Ventilation),
    /// Wrong input data
    WrongInput(String),
}

impl fmt::Display for HeizlastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use HeizlastError::*;
        match self {
            ParseError(s) => write!(f, "Could not parse \"{}\"", s),
            CatalogParseError(s) => write!(f, "Could not parse catalog line \"{}\"", s),
            UnknownKey(kind, key) => write!(f, "Unknown {} \"{}\"", kind, key),
            MissingUValue(element, period) => write!(
                f,
                "No U-value found in catalog for element {} and period \"{}\"",
                element, period
            ),
            MissingRoofFactor(roof) => {
                write!(f, "No area factor found in catalog for roof type {}", roof)
            }
            MissingAirChangeRate(vent) => write!(
                f,
                "No air change rate found in catalog for ventilation method {}",
                vent
            ),
            WrongInput(desc) => write!(f, "Wrong input data: {}", desc),
        }
    }
}

impl std::error::Error for HeizlastError {}

impl From<std::num::ParseFloatError> for HeizlastError {
    fn from(err: std::num::ParseFloatError) -> Self {
        HeizlastError::ParseError(err.to_string())
    }
}

impl From<serde_json::Error> for HeizlastError {
    fn from(err: serde_json::Error) -> Self {
        HeizlastError::ParseError(err.to_string())
    }
}

/// Ergebnis mit Fehlertyp HeizlastError
///
/// Result type with HeizlastError error
pub type Result<T> = std::result::Result<T, HeizlastError>;
