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
Projektdatei
============

Ein Projekt fasst die Räume eines Gebäudes und die optionalen Auslegungswerte zusammen. Es wird
als JSON gelesen:

```json
{
    "name": "Wohnung",
    "overrides": { "outdoor_temperature": -10 },
    "rooms": [ { "name": "Bad", "usage": "Bad", "floor_area": 6, "ceiling_height": 2.4, "altitude": 450 } ]
}
```
*/

use std::str;

use serde::{Deserialize, Serialize};

use crate::{
    catalog::Catalog,
    error::{HeizlastError, Result},
    heatload::building_load,
    types::{BuildingLoad, Overrides, Room},
    validation::{check_room, Issue},
};

/// Projekt mit Räumen und Auslegungswerten
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project name
    #[serde(default)]
    pub name: String,
    /// Design values used for every room
    #[serde(default)]
    pub overrides: Overrides,
    /// Rooms
    pub rooms: Vec<Room>,
}

impl Project {
    /// Heizlast aller Räume mit den Auslegungswerten des Projekts
    pub fn building_load(&self, catalog: &Catalog) -> Result<BuildingLoad> {
        building_load(&self.rooms, catalog, &self.overrides)
    }

    /// Befunde aller Räume, mit dem Raumnamen als Präfix
    pub fn check(&self) -> Vec<Issue> {
        self.rooms
            .iter()
            .flat_map(|room| {
                check_room(room).into_iter().map(move |issue| Issue {
                    message: format!("{}: {}", room_label(room), issue.message),
                    ..issue
                })
            })
            .collect()
    }
}

fn room_label(room: &Room) -> &str {
    if room.name.is_empty() {
        "(ohne Namen)"
    } else {
        &room.name
    }
}

impl str::FromStr for Project {
    type Err = HeizlastError;

    fn from_str(s: &str) -> Result<Project> {
        let mut project: Project = serde_json::from_str(s.trim_start_matches('\u{feff}'))?;
        if project.rooms.is_empty() {
            return Err(HeizlastError::WrongInput(
                "Das Projekt enthält keine Räume".into(),
            ));
        }
        // Abmessungen ersetzen Grundfläche und Raumhöhe
        project.rooms = project
            .rooms
            .into_iter()
            .map(|room| match room.dimensions {
                Some(dims) => room.with_dimensions(dims),
                None => room,
            })
            .collect();
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG_DEFAULT;
    use pretty_assertions::assert_eq;

    const PROJECT: &str = r#"{
        "name": "Testwohnung",
        "overrides": { "indoor_temperature": 20 },
        "rooms": [
            { "name": "Bad", "usage": "Bad", "floor_area": 6, "ceiling_height": 2.5, "altitude": 400 },
            { "usage": "Flur", "floor_area": 4, "ceiling_height": 2.5, "altitude": 400 }
        ]
    }"#;

    #[test]
    fn parse_project() {
        let project: Project = PROJECT.parse().unwrap();
        assert_eq!(project.name, "Testwohnung");
        assert_eq!(project.rooms.len(), 2);
        assert_eq!(project.overrides.indoor_temperature, Some(20.0));
        assert_eq!(project.overrides.air_change_rate, None);
    }

    #[test]
    fn project_load_uses_overrides() {
        let project: Project = PROJECT.parse().unwrap();
        let load = project.building_load(&CATALOG_DEFAULT).unwrap();
        assert_eq!(load.rooms.len(), 2);
        assert_eq!(load.rooms[0].load.indoor_temperature, 20.0);
        assert_eq!(load.rooms[1].load.indoor_temperature, 20.0);
        // 0.34 * 25 * 0.5 * 28
        assert!((load.total - 119.0).abs() < 0.01);
    }

    #[test]
    fn project_check_prefixes_room() {
        let project: Project = PROJECT.parse().unwrap();
        let issues = project.check();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "(ohne Namen): Raum ohne Namen");
    }

    #[test]
    fn room_dimensions_are_resolved() {
        let project: Project = r#"{
            "rooms": [
                {
                    "name": "Büro",
                    "usage": "Büro",
                    "altitude": 400,
                    "dimensions": { "length": 5, "width": 4, "height": 2.5 }
                }
            ]
        }"#
        .parse()
        .unwrap();
        assert_eq!(project.rooms[0].floor_area, 20.0);
        assert_eq!(project.rooms[0].ceiling_height, 2.5);
        assert!(project.check().is_empty());
        let load = project.building_load(&CATALOG_DEFAULT).unwrap();
        // 0.34 * 50 * 0.5 * 28
        assert!((load.total - 238.0).abs() < 0.01);
    }

    #[test]
    fn bad_projects() {
        assert!("{ \"rooms\": [] }".parse::<Project>().is_err());
        assert!("{ \"name\": \"x\" }".parse::<Project>().is_err());
        assert!("kein JSON".parse::<Project>().is_err());
    }
}
