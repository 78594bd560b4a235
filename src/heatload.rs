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
Heizlastberechnung
==================

Vereinfachte Heizlast eines Raumes (Transmission + Lüftung), angelehnt an die EN 12831:

- Transmission: Σ U · A · f · ΔT, mit f = 1 gegen aussen, 0.5 gegen unbeheizt oder Erdreich und
  0 gegen beheizte Räume (diese Bauteile werden nicht berücksichtigt)
- Lüftung: 0.34 · V · n · ΔT
- Heizlast: Transmission + Lüftung

Simplified room heating load (transmission + ventilation) loosely after EN 12831. This is a pure
function of the room, the catalog and the optional overrides. Results are neither rounded nor
clamped: a negative temperature difference gives negative losses.
*/

use crate::{
    catalog::Catalog,
    climate::{indoor_design_temperature, outdoor_design_temperature},
    error::Result,
    types::{
        Boundary, BuildingLoad, Element, ElementLoss, LoadResult, Overrides, Room, RoomLoad,
    },
};

/// Volumetric heat capacity of air [Wh/(m3·K)]
pub const AIR_HEAT_CAPACITY: f32 = 0.34;

/// Heizlast eines Raumes
///
/// Compute the heating load of a room with the resolved design temperatures and catalog values.
///
/// # Errors
///
/// * Missing U-value, roof factor or air change rate in the catalog for a key used by the room
pub fn heat_load(room: &Room, catalog: &Catalog) -> Result<LoadResult> {
    heat_load_with(room, catalog, &Overrides::default())
}

/// Heizlast eines Raumes mit vorgegebenen Auslegungswerten
///
/// Each value set in `overrides` replaces the value resolved for the room (indoor temperature
/// from usage, outdoor temperature from altitude, air change rate from the ventilation method).
///
/// # Errors
///
/// * Missing U-value, roof factor or air change rate in the catalog for a key used by the room
pub fn heat_load_with(room: &Room, catalog: &Catalog, overrides: &Overrides) -> Result<LoadResult> {
    let indoor_temperature = overrides
        .indoor_temperature
        .unwrap_or_else(|| indoor_design_temperature(&room.usage));
    let outdoor_temperature = overrides
        .outdoor_temperature
        .unwrap_or_else(|| outdoor_design_temperature(room.altitude));
    let delta_t = indoor_temperature - outdoor_temperature;

    let elements = transmission_losses(room, catalog, delta_t)?;
    let transmission = elements.iter().map(|e| e.loss).sum::<f32>();

    let volume = room.volume();
    let air_change_rate = match overrides.air_change_rate {
        Some(rate) => rate,
        None => catalog.air_change_rate(room.ventilation)?,
    };
    let ventilation = AIR_HEAT_CAPACITY * volume * air_change_rate * delta_t;

    let total = transmission + ventilation;
    let specific = if room.floor_area == 0.0 {
        0.0
    } else {
        total / room.floor_area
    };

    Ok(LoadResult {
        transmission,
        ventilation,
        total,
        specific,
        indoor_temperature,
        outdoor_temperature,
        delta_t,
        volume,
        air_change_rate,
        elements,
    })
}

/// Transmissionsverluste der einzelnen Bauteile
///
/// Elements against heated spaces are skipped before any catalog lookup.
fn transmission_losses(room: &Room, catalog: &Catalog, delta_t: f32) -> Result<Vec<ElementLoss>> {
    let u_value = |element: Element, period| catalog.u_value(element, room.u_period(element, period));
    let mut losses = Vec::new();

    for wall in &room.walls {
        let label = match wall.orientation {
            Some(o) => format!(" {}", o),
            None => String::new(),
        };
        losses.push(ElementLoss::new(
            format!("Aussenwand{}", label),
            Element::AUSSENWAND,
            Boundary::AUSSEN,
            wall.area,
            u_value(Element::AUSSENWAND, wall.period)?,
            delta_t,
        ));
        losses.push(ElementLoss::new(
            format!("Fenster{}", label),
            Element::FENSTER,
            Boundary::AUSSEN,
            wall.window_area,
            u_value(Element::FENSTER, wall.window_period)?,
            delta_t,
        ));
    }

    for wall in room.interior_walls.iter().filter(|w| !w.boundary.is_heated()) {
        losses.push(ElementLoss::new(
            format!("Innenwand gegen {}", wall.boundary),
            Element::AUSSENWAND,
            wall.boundary,
            wall.area,
            u_value(Element::AUSSENWAND, wall.period)?,
            delta_t,
        ));
    }

    if !room.roof.kind.is_against_heated() {
        let area = room.floor_area * catalog.roof_factor(room.roof.kind)?;
        losses.push(ElementLoss::new(
            format!("Dach ({})", room.roof.kind),
            Element::DACH,
            Boundary::AUSSEN,
            area,
            u_value(Element::DACH, room.roof.period)?,
            delta_t,
        ));
    }

    for floor in room.floors.iter().filter(|f| !f.boundary.is_heated()) {
        let area = room.floor_area * floor.share / 100.0;
        losses.push(ElementLoss::new(
            format!("Boden gegen {}", floor.boundary),
            Element::BODEN,
            floor.boundary,
            area,
            u_value(Element::BODEN, floor.period)?,
            delta_t,
        ));
    }

    Ok(losses)
}

/// Heizlast aller Räume eines Gebäudes
///
/// The building total is the plain sum of the room totals. The computation fails as a whole
/// with the first room error.
///
/// # Errors
///
/// * Any error found while computing a room
pub fn building_load(rooms: &[Room], catalog: &Catalog, overrides: &Overrides) -> Result<BuildingLoad> {
    let rooms = rooms
        .iter()
        .map(|room| {
            heat_load_with(room, catalog, overrides).map(|load| RoomLoad {
                name: room.name.clone(),
                load,
            })
        })
        .collect::<Result<Vec<RoomLoad>>>()?;
    let total = rooms.iter().map(|r| r.load.total).sum();
    Ok(BuildingLoad { rooms, total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG_DEFAULT;
    use crate::error::HeizlastError;
    use crate::types::{FloorSegment, InteriorWall, Period, Renovation, Roof, RoofType, Wall};
    use pretty_assertions::assert_eq;

    fn approx(expected: f32, got: f32) -> bool {
        let res = (expected - got).abs() < 0.01;
        if !res {
            eprintln!("Erwartet: {}, Erhalten: {}", expected, got);
        }
        res
    }

    #[test]
    fn interior_walls() {
        let room = Room::new("Flur", "Flur", 8.0, 2.5, 400.0)
            .with_interior_wall(InteriorWall {
                boundary: Boundary::UNBEHEIZT,
                period: Period::P_1970_1980,
                area: 10.0,
            })
            .with_interior_wall(InteriorWall {
                boundary: Boundary::BEHEIZT,
                period: Period::P_1970_1980,
                area: 50.0,
            });
        let load = heat_load(&room, &CATALOG_DEFAULT).unwrap();
        // 18 - (-8) = 26 K, 0.70 * 10 * 13
        assert_eq!(load.elements.len(), 1);
        assert!(approx(91.0, load.transmission));
    }

    #[test]
    fn renovated_windows() {
        let room = Room::new("Wohnzimmer", "Wohnzimmer", 20.0, 2.5, 400.0)
            .with_wall(Wall::new(Period::P_1960_1970, 10.0, Period::P_1960_1970, 2.0));
        let load = heat_load(&room, &CATALOG_DEFAULT).unwrap();
        // 29 K: 0.80 * 10 * 29 + 2.60 * 2 * 29
        assert!(approx(382.8, load.transmission));
        let renovated = room.with_renovation(Renovation {
            period: Period::AB_2015,
            elements: vec![Element::FENSTER],
        });
        let load = heat_load(&renovated, &CATALOG_DEFAULT).unwrap();
        // 0.80 * 10 * 29 + 0.90 * 2 * 29
        assert!(approx(284.2, load.transmission));
    }

    #[test]
    fn roof_area_factor() {
        let room = Room::new("Kinderzimmer", "Kinderzimmer", 10.0, 2.4, 400.0)
            .with_roof(Roof::new(RoofType::STEILDACH, Period::AB_2015));
        let load = heat_load(&room, &CATALOG_DEFAULT).unwrap();
        // 28 K: 0.17 * 10 * 1.15 * 28
        assert!(approx(11.5, load.elements[0].area));
        assert!(approx(54.74, load.transmission));
    }

    #[test]
    fn against_heated_needs_no_catalog_entries() {
        let catalog: Catalog = "LUFTWECHSEL, FENSTERLUEFTUNG, 0.5".parse().unwrap();
        let room = Room::new("Büro", "Büro", 10.0, 2.5, 400.0)
            .with_roof(Roof::new(RoofType::GEGEN_BEHEIZT, Period::BIS_1900))
            .with_floor(FloorSegment::new(Boundary::BEHEIZT, Period::BIS_1900));
        let load = heat_load(&room, &catalog).unwrap();
        assert_eq!(load.transmission, 0.0);
        assert!(load.elements.is_empty());
    }

    #[test]
    fn missing_catalog_key_is_an_error() {
        let catalog: Catalog = "LUFTWECHSEL, FENSTERLUEFTUNG, 0.5".parse().unwrap();
        let room = Room::new("Bad", "Bad", 5.0, 2.4, 400.0)
            .with_floor(FloorSegment::new(Boundary::ERDREICH, Period::P_1980_1990));
        match heat_load(&room, &catalog) {
            Err(HeizlastError::MissingUValue(Element::BODEN, Period::P_1980_1990)) => (),
            other => panic!("Unerwartetes Ergebnis: {:?}", other),
        }
        let room = Room::new("Bad", "Bad", 5.0, 2.4, 400.0)
            .with_ventilation(crate::types::Ventilation::KOMFORTLUEFTUNG);
        assert!(heat_load(&room, &catalog).is_err());
    }

    #[test]
    fn overrides_replace_resolved_values() {
        let room = Room::new("Schlafzimmer", "Schlafzimmer", 10.0, 2.5, 1400.0);
        let overrides = Overrides {
            indoor_temperature: Some(20.0),
            outdoor_temperature: Some(-10.0),
            air_change_rate: Some(1.0),
        };
        let load = heat_load_with(&room, &CATALOG_DEFAULT, &overrides).unwrap();
        assert_eq!(load.delta_t, 30.0);
        assert_eq!(load.air_change_rate, 1.0);
        // 0.34 * 25 * 1.0 * 30
        assert!(approx(255.0, load.ventilation));
    }
}
