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
Räume und Bauteile
==================

Ein Raum ist ein unveränderlicher Wert: jede Änderung erzeugt mit den Methoden `with_*` einen
neuen Raum.

A room is an immutable value: every edit produces a new room through the `with_*` methods.
*/

use serde::{Deserialize, Deserializer, Serialize};

use super::{Boundary, Element, Orientation, Period, RoofType, Ventilation};

/// Raum (room)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Room name
    #[serde(default)]
    pub name: String,
    /// Usage category, selects the indoor design temperature
    #[serde(default)]
    pub usage: String,
    /// Floor area [m2]
    #[serde(default)]
    pub floor_area: f32,
    /// Ceiling height [m]
    #[serde(default)]
    pub ceiling_height: f32,
    /// Room dimensions, replace floor area and ceiling height when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    /// Altitude of the location [m]
    pub altitude: f32,
    /// Exterior walls with their windows
    #[serde(default)]
    pub walls: Vec<Wall>,
    /// Interior walls against unheated or heated zones
    #[serde(default)]
    pub interior_walls: Vec<InteriorWall>,
    /// Roof or top ceiling
    #[serde(default)]
    pub roof: Roof,
    /// Floor segments. A single object is read as one segment.
    #[serde(default, alias = "floor", deserialize_with = "one_or_many")]
    pub floors: Vec<FloorSegment>,
    /// Ventilation method
    #[serde(default)]
    pub ventilation: Ventilation,
    /// Renovation of some element kinds
    #[serde(default)]
    pub renovation: Option<Renovation>,
}

impl Room {
    /// Raum ohne Bauteile, mit Fensterlüftung
    pub fn new<T, U>(name: T, usage: U, floor_area: f32, ceiling_height: f32, altitude: f32) -> Self
    where
        T: Into<String>,
        U: Into<String>,
    {
        Self {
            name: name.into(),
            usage: usage.into(),
            floor_area,
            ceiling_height,
            dimensions: None,
            altitude,
            walls: vec![],
            interior_walls: vec![],
            roof: Roof::default(),
            floors: vec![],
            ventilation: Ventilation::default(),
            renovation: None,
        }
    }

    /// Raumvolumen [m3]
    pub fn volume(&self) -> f32 {
        self.floor_area * self.ceiling_height
    }

    /// Bauperiode, mit der der U-Wert eines Bauteils bestimmt wird
    ///
    /// Renovated element kinds use the renovation period instead of their own.
    pub fn u_period(&self, element: Element, declared: Period) -> Period {
        match &self.renovation {
            Some(r) if r.elements.contains(&element) => r.period,
            _ => declared,
        }
    }

    /// New room with floor area and ceiling height taken from its dimensions
    pub fn with_dimensions(self, dims: Dimensions) -> Self {
        Self {
            floor_area: dims.floor_area(),
            ceiling_height: dims.height,
            dimensions: Some(dims),
            ..self
        }
    }

    /// New room with an additional exterior wall
    pub fn with_wall(mut self, wall: Wall) -> Self {
        self.walls.push(wall);
        self
    }

    /// New room with an additional interior wall
    pub fn with_interior_wall(mut self, wall: InteriorWall) -> Self {
        self.interior_walls.push(wall);
        self
    }

    /// New room with another roof
    pub fn with_roof(self, roof: Roof) -> Self {
        Self { roof, ..self }
    }

    /// New room with an additional floor segment
    pub fn with_floor(mut self, floor: FloorSegment) -> Self {
        self.floors.push(floor);
        self
    }

    /// New room with another ventilation method
    pub fn with_ventilation(self, ventilation: Ventilation) -> Self {
        Self {
            ventilation,
            ..self
        }
    }

    /// New room with a renovation
    pub fn with_renovation(self, renovation: Renovation) -> Self {
        Self {
            renovation: Some(renovation),
            ..self
        }
    }
}

/// Aussenwand mit Fenstern
///
/// Wall and window areas are independent inputs: the window area is not subtracted from the
/// wall area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    /// Orientation, informative
    #[serde(default)]
    pub orientation: Option<Orientation>,
    /// Construction period of the wall
    #[serde(default)]
    pub period: Period,
    /// Construction period of the windows
    #[serde(default)]
    pub window_period: Period,
    /// Wall area [m2]
    pub area: f32,
    /// Window area [m2]
    #[serde(default)]
    pub window_area: f32,
}

impl Wall {
    /// Constructor
    pub fn new(period: Period, area: f32, window_period: Period, window_area: f32) -> Self {
        Self {
            orientation: None,
            period,
            window_period,
            area,
            window_area,
        }
    }

    /// Same wall with the given orientation
    pub fn facing(self, orientation: Orientation) -> Self {
        Self {
            orientation: Some(orientation),
            ..self
        }
    }
}

/// Innenwand gegen einen angrenzenden Bereich
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteriorWall {
    /// Zone on the other side
    pub boundary: Boundary,
    /// Construction period
    #[serde(default)]
    pub period: Period,
    /// Wall area [m2]
    pub area: f32,
}

/// Dach
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roof {
    /// Roof type
    pub kind: RoofType,
    /// Construction period, irrelevant against heated spaces
    #[serde(default)]
    pub period: Period,
}

impl Roof {
    /// Constructor
    pub fn new(kind: RoofType, period: Period) -> Self {
        Self { kind, period }
    }
}

/// Bodenabschnitt mit Anteil an der Grundfläche
///
/// Shares of the segments of a room are not required to sum up to 100%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorSegment {
    /// Zone on the other side
    pub boundary: Boundary,
    /// Construction period
    #[serde(default)]
    pub period: Period,
    /// Share of the room floor area [%]
    #[serde(default = "full_share")]
    pub share: f32,
}

impl FloorSegment {
    /// Segment covering the whole floor area
    pub fn new(boundary: Boundary, period: Period) -> Self {
        Self {
            boundary,
            period,
            share: full_share(),
        }
    }

    /// Same segment covering a percentage of the floor area
    pub fn with_share(self, share: f32) -> Self {
        Self { share, ..self }
    }
}

fn full_share() -> f32 {
    100.0
}

/// Sanierung einzelner Bauteilarten
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Renovation {
    /// Renovation period
    pub period: Period,
    /// Renovated element kinds
    pub elements: Vec<Element>,
}

/// Raumabmessungen (Länge x Breite x Höhe)
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Length [m]
    pub length: f32,
    /// Width [m]
    pub width: f32,
    /// Height [m]
    pub height: f32,
}

impl Dimensions {
    /// Grundfläche [m2]
    pub fn floor_area(&self) -> f32 {
        self.length * self.width
    }

    /// Gesamte Wandfläche des Raumes [m2]
    pub fn wall_area(&self) -> f32 {
        2.0 * (self.length + self.width) * self.height
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<FloorSegment>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::<FloorSegment>::deserialize(deserializer)? {
        OneOrMany::One(segment) => vec![segment],
        OneOrMany::Many(segments) => segments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dimensions() {
        let dims = Dimensions {
            length: 5.0,
            width: 4.0,
            height: 2.5,
        };
        assert_eq!(dims.floor_area(), 20.0);
        assert_eq!(dims.wall_area(), 45.0);
        let room = Room::new("Büro", "Büro", 1.0, 1.0, 400.0).with_dimensions(dims);
        assert_eq!(room.floor_area, 20.0);
        assert_eq!(room.ceiling_height, 2.5);
        assert_eq!(room.volume(), 50.0);
        assert_eq!(room.dimensions, Some(dims));
    }

    #[test]
    fn dimensions_from_json() {
        let json = r#"{
            "name": "Büro",
            "altitude": 450.0,
            "dimensions": { "length": 5.0, "width": 3.0, "height": 2.6 }
        }"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.floor_area, 0.0);
        assert_eq!(room.dimensions.map(|d| d.floor_area()), Some(15.0));
    }

    #[test]
    fn edits_produce_new_rooms() {
        let base = Room::new("Bad", "Bad", 6.0, 2.4, 500.0);
        let edited = base
            .clone()
            .with_wall(Wall::new(Period::NEUBAU, 8.0, Period::NEUBAU, 1.0))
            .with_ventilation(Ventilation::ABLUFTANLAGE);
        assert!(base.walls.is_empty());
        assert_eq!(base.ventilation, Ventilation::FENSTERLUEFTUNG);
        assert_eq!(edited.walls.len(), 1);
        assert_eq!(edited.ventilation, Ventilation::ABLUFTANLAGE);
    }

    #[test]
    fn renovation_period() {
        let room = Room::new("Wohnzimmer", "Wohnzimmer", 20.0, 2.4, 540.0).with_renovation(
            Renovation {
                period: Period::AB_2015,
                elements: vec![Element::FENSTER],
            },
        );
        assert_eq!(
            room.u_period(Element::FENSTER, Period::P_1960_1970),
            Period::AB_2015
        );
        assert_eq!(
            room.u_period(Element::AUSSENWAND, Period::P_1960_1970),
            Period::P_1960_1970
        );
    }

    #[test]
    fn single_floor_object() {
        let json = r#"{
            "name": "Küche",
            "usage": "Küche",
            "floor_area": 12.0,
            "ceiling_height": 2.5,
            "altitude": 450.0,
            "floor": { "boundary": "ERDREICH", "period": "1980-1990" }
        }"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(
            room.floors,
            vec![FloorSegment::new(Boundary::ERDREICH, Period::P_1980_1990)]
        );
        assert_eq!(room.roof.kind, RoofType::GEGEN_BEHEIZT);
        assert_eq!(room.ventilation, Ventilation::FENSTERLUEFTUNG);
    }

    #[test]
    fn floor_segments_list() {
        let json = r#"{
            "floor_area": 30.0,
            "ceiling_height": 2.5,
            "altitude": 450.0,
            "floors": [
                { "boundary": "UNBEHEIZT", "period": "1970-1980", "share": 60 },
                { "boundary": "ERDREICH", "period": "1970-1980", "share": 30 }
            ]
        }"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.floors.len(), 2);
        assert_eq!(room.floors[0].share, 60.0);
        assert_eq!(room.floors[1].boundary, Boundary::ERDREICH);
        assert_eq!(room.name, "");
    }
}
