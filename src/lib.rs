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
Heizlast
========

Dieses *crate* enthält eine Bibliothek und ein Programm zur **vereinfachten Heizlastberechnung
je Raum**, angelehnt an die EN 12831. Die Heizlast eines Raumes setzt sich aus den
Transmissionsverlusten der Bauteile und den Lüftungsverlusten zusammen.

Dabei gelten die folgenden Annahmen:

- Norm-Aussentemperatur linear abhängig von der Höhe über Meer (-8 °C auf 400 m, -0.5 K je 100 m)
- Raumtemperatur nach Raumnutzung (21 °C, wenn die Nutzung unbekannt ist)
- U-Werte nach Bauteil und Bauperiode aus einem Katalog (Vorgabe: Werte nach suissetec)
- Temperaturfaktor 1 gegen aussen, 0.5 gegen unbeheizte Räume und Erdreich, 0 gegen beheizte Räume
- Lüftungsverluste 0.34 · V · n · ΔT, mit der Luftwechselrate n nach Lüftungsart
- Gebäudeheizlast als Summe der Raumheizlasten, ohne Abzug gemeinsamer Bauteile

This crate provides a library and binary for a **simplified room by room heating load estimate**,
loosely following EN 12831. The heating load of a room is the sum of the transmission losses of
its building elements and its ventilation losses.

It holds the following assumptions:

- outdoor design temperature linear in the altitude (-8 °C at 400 m, -0.5 K each 100 m)
- indoor design temperature by room usage (21 °C for unknown usages)
- U-values by element kind and construction period taken from a catalog (default: suissetec values)
- temperature factor 1 to the outside, 0.5 to unheated spaces and ground, 0 to heated spaces
- ventilation losses 0.34 · V · n · ΔT, with the air change rate n set by the ventilation method
- building load as plain sum of the room loads, without shared element deductions

# Beispiel

```rust
use heizlast::*;

// Wohnzimmer in einem Neubau auf 540 m ü. M.
let room = Room::new("Wohnzimmer", "Wohnzimmer", 20.0, 2.4, 540.0)
    .with_wall(Wall::new(Period::NEUBAU, 12.0, Period::NEUBAU, 3.0).facing(Orientation::S))
    .with_roof(Roof::new(RoofType::FLACHDACH, Period::NEUBAU))
    .with_floor(FloorSegment::new(Boundary::UNBEHEIZT, Period::NEUBAU));

// Prüfung der Eingabedaten
assert!(check_room(&room).is_empty());

// Heizlast mit dem eingebauten U-Wert-Katalog
let load = heat_load(&room, &catalog::CATALOG_DEFAULT).unwrap();
assert!((load.total - 515.59).abs() < 0.01);

// Kompakte Darstellung
println!("{}", load.to_plain());
```

*/

#![deny(missing_docs)]

mod asplain;
mod heatload;
mod project;
mod validation;

pub mod catalog;
pub mod climate;
pub mod error;
pub mod types;

pub use asplain::*;
pub use catalog::Catalog;
pub use heatload::*;
pub use project::*;
pub use types::*;
pub use validation::*;

/// Versionsnummer der Bibliothek
///
/// Version number
pub static VERSION: &str = env!("CARGO_PKG_VERSION");
