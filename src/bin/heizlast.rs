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

#[macro_use]
extern crate clap;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::process::exit;

use clap::{App, AppSettings, Arg};
use failure::Error;
use failure::ResultExt;
use itertools::Itertools;
use strum::IntoEnumIterator;

use heizlast::*;

// Hilfsfunktionen ---------------------------------------------------------------------------

fn readfile(path: &Path) -> Result<String, Error> {
    let mut f = File::open(path).context(format!("Datei {} nicht gefunden", path.display()))?;
    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .context("Fehler beim Lesen der Datei")?;
    Ok(contents)
}

fn writefile(path: &Path, content: &[u8]) -> Result<(), Error> {
    let mut file = File::create(&path)
        .context(format!("Datei {} kann nicht erstellt werden", path.display()))?;
    file.write_all(content)
        .context(format!("Fehler beim Schreiben in {}", path.display()))?;
    Ok(())
}

fn write_or_exit(path: &Path, content: &[u8]) {
    if let Err(err) = writefile(path, content) {
        eprintln!("FEHLER: {}", err);
        exit(exitcode::IOERR);
    }
}

/// Liste der zulässigen Schlüssel einer Aufzählung
fn keys<T>() -> String
where
    T: IntoEnumIterator + std::fmt::Display,
    T::Iterator: Iterator<Item = T>,
{
    T::iter().map(|v| format!("\"{}\"", v)).join(", ")
}

fn print_keys() {
    println!("** Zulässige Schlüssel");
    println!("Bauteile: {}", keys::<Element>());
    println!("Bauperioden: {}", keys::<Period>());
    println!("Dachtypen: {}", keys::<RoofType>());
    println!("Lüftungsarten: {}", keys::<Ventilation>());
    println!("Angrenzende Bereiche: {}", keys::<Boundary>());
    println!("Orientierungen: {}", keys::<Orientation>());
    println!("Raumnutzungen: {}", keys::<climate::Usage>());
}

/// Lädt den Katalog aus einer Datei oder liefert den eingebauten Katalog
fn get_catalog(archivo: Option<&str>, verbosity: u64) -> Catalog {
    let catalog = if let Some(archivo_katalog) = archivo {
        let path = Path::new(archivo_katalog);
        let catalogstring = readfile(path).unwrap_or_else(|err| {
            eprintln!(
                "FEHLER: Die U-Wert-Datei \"{}\" kann nicht gelesen werden ({})",
                path.display(),
                err
            );
            exit(exitcode::IOERR);
        });
        println!("U-Wert-Katalog (Datei): \"{}\"", path.display());
        let mut catalog = catalogstring.parse::<Catalog>().unwrap_or_else(|err| {
            eprintln!(
                "FEHLER: Falsches Format der U-Wert-Datei \"{}\" ({})",
                path.display(),
                err
            );
            exit(exitcode::DATAERR);
        });
        catalog.set_meta("DATEI", &path.display().to_string());
        catalog
    } else {
        let catalog = catalog::CATALOG_DEFAULT.clone();
        println!(
            "U-Wert-Katalog (vordefiniert): {}",
            catalog.get_meta("QUELLE").unwrap_or_default()
        );
        catalog
    };
    if verbosity > 1 && !catalog.meta.is_empty() {
        println!("Metadaten des Katalogs:");
        for meta in &catalog.meta {
            println!("  {}: {}", meta.key, meta.value);
        }
    }
    catalog
}

/// Lädt das Projekt aus einer Datei
fn get_project(archivo: &str) -> Project {
    let path = Path::new(archivo);
    let projectstring = readfile(path).unwrap_or_else(|err| {
        eprintln!(
            "FEHLER: Die Projektdatei \"{}\" kann nicht gelesen werden ({})",
            path.display(),
            err
        );
        exit(exitcode::IOERR);
    });
    println!("Projektdatei: \"{}\"", path.display());
    projectstring.parse::<Project>().unwrap_or_else(|err| {
        eprintln!(
            "FEHLER: Falsches Format der Projektdatei \"{}\" ({})",
            path.display(),
            err
        );
        exit(exitcode::DATAERR);
    })
}

/// Auslegungswert: Befehlszeile > Projektdatei > je Raum ermittelt
fn get_override(
    matches: &clap::ArgMatches<'_>,
    name: &str,
    project_value: Option<f32>,
    descr: &str,
    resolved: &str,
) -> Option<f32> {
    if matches.occurrences_of(name) != 0 {
        let value = value_t!(matches, name, f32).unwrap_or_else(|error| {
            eprintln!("FEHLER: {} ist keine gültige Zahl", descr);
            eprintln!("{}", error);
            exit(exitcode::DATAERR);
        });
        if !value.is_finite() {
            eprintln!("FEHLER: {} ist keine endliche Zahl ({})", descr, value);
            exit(exitcode::DATAERR);
        }
        if let Some(pvalue) = project_value {
            if (pvalue - value).abs() > 1e-3 {
                println!(
                    "WARNUNG: {} der Projektdatei ({:.2}) weicht vom Benutzerwert ({:.2}) ab",
                    descr, pvalue, value
                );
            }
        }
        println!("{} (Benutzer): {:.2}", descr, value);
        Some(value)
    } else if let Some(value) = project_value {
        println!("{} (Projekt): {:.2}", descr, value);
        Some(value)
    } else {
        println!("{}: {}", descr, resolved);
        None
    }
}

// Hauptfunktion ---------------------------------------------------------------------------------

fn main() {
    let matches = App::new("Heizlast")
        .bin_name("heizlast")
        .version(env!("CARGO_PKG_VERSION"))
        .author("
Copyright (c) 2018-2022 Ministerio de Fomento,
                        Instituto de CC. de la Construcción Eduardo Torroja (IETcc-CSIC)

Autoren: Rafael Villar Burke <pachi@ietcc.csic.es>,
         Daniel Jiménez González <dani@ietcc.csic.es>
         Marta Sorribes Gil <msorribes@ietcc.csic.es>

Lizenz: Veröffentlicht unter der MIT-Lizenz.

")
        .about("Heizlast - Vereinfachte Heizlastberechnung je Raum (Transmission und Lüftung).")
        .setting(AppSettings::NextLineHelp)
        .arg(Arg::with_name("raeume")
            .short("r")
            .long("raeume")
            .value_name("PROJEKTDATEI")
            .required_unless_one(&["liste", "gen_katalog", "showlicense"])
            .help("Projektdatei mit den Räumen (JSON)")
            .takes_value(true)
            .display_order(1))
        .arg(Arg::with_name("uwerte")
            .short("u")
            .long("uwerte")
            .value_name("U_WERT_DATEI")
            .help("Datei mit U-Werten, Dachfaktoren und Luftwechselraten")
            .takes_value(true)
            .display_order(2))
        .arg(Arg::with_name("ti")
            .long("ti")
            .value_name("TI")
            .allow_hyphen_values(true)
            .help("Raumtemperatur für alle Räume [°C]")
            .takes_value(true)
            .display_order(3))
        .arg(Arg::with_name("ta")
            .long("ta")
            .value_name("TA")
            .allow_hyphen_values(true)
            .help("Norm-Aussentemperatur für alle Räume [°C]")
            .takes_value(true)
            .display_order(4))
        .arg(Arg::with_name("n")
            .long("n")
            .value_name("N")
            .help("Luftwechselrate für alle Räume [1/h]")
            .takes_value(true)
            .display_order(5))
        .arg(Arg::with_name("archivo_salida_json")
            .long("json")
            .value_name("JSON_DATEI")
            .help("Ausgabedatei der detaillierten Ergebnisse im JSON-Format")
            .takes_value(true))
        .arg(Arg::with_name("gen_katalog")
            .long("ok")
            .value_name("KATALOG_DATEI")
            .help("Ausgabedatei des verwendeten U-Wert-Katalogs")
            .takes_value(true))
        .arg(Arg::with_name("liste")
            .long("liste")
            .help("Zeigt die zulässigen Schlüssel der Eingabedaten"))
        .arg(Arg::with_name("showlicense")
            .short("L")
            .long("lizenz")
            .help("Zeigt die Lizenz des Programms (MIT)"))
        .arg(Arg::with_name("v")
            .short("v")
            .multiple(true)
            .help("Sets the level of verbosity"))
        .get_matches();

    if matches.is_present("showlicense") {
        println!(
            "
Copyright (c) 2018-2022 Ministerio de Fomento
                        Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the 'Software'), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED 'AS IS', WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.

Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>
           Daniel Jiménez González <dani@ietcc.csic.es>
           Marta Sorribes Gil <msorribes@ietcc.csic.es>"
        );
        exit(exitcode::OK);
    }

    // Prolog ---------------------------------------------------------------------------------------

    let verbosity = matches.occurrences_of("v");

    if verbosity > 2 {
        println!("Angegebene Optionen: ----------");
        println!("{:#?}", matches);
        println!("-------------------------------");
    }

    if matches.is_present("liste") {
        print_keys();
        exit(exitcode::OK);
    }

    println!("** Eingabedaten");

    // U-Wert-Katalog ------------------------------------------------------------------------------
    let catalog = get_catalog(matches.value_of("uwerte"), verbosity);

    if let Some(archivo) = matches.value_of("gen_katalog") {
        let path = Path::new(archivo);
        let catalogstring = format!("{}\n", catalog);
        if verbosity > 2 {
            println!("U-Wert-Katalog:\n{}", catalogstring);
        }
        write_or_exit(path, catalogstring.as_bytes());
        if verbosity > 0 {
            println!("U-Wert-Katalog gespeichert: {}", path.display());
        }
    }

    // Projekt -------------------------------------------------------------------------------------
    let archivo_projekt = match matches.value_of("raeume") {
        Some(archivo) => archivo,
        None => {
            println!("Keine Projektdatei angegeben, es wird keine Heizlast berechnet");
            exit(exitcode::OK);
        }
    };
    let mut project = get_project(archivo_projekt);
    if !project.name.is_empty() {
        println!("Projekt: {}", project.name);
    }
    if verbosity > 0 {
        println!("Anzahl Räume: {}", project.rooms.len());
    }

    // Auslegungswerte: Befehlszeile > Projektdatei > je Raum ------------------------------------
    let indoor_temperature = get_override(
        &matches,
        "ti",
        project.overrides.indoor_temperature,
        "Raumtemperatur [°C]",
        "je Raum nach Nutzung",
    );
    let outdoor_temperature = get_override(
        &matches,
        "ta",
        project.overrides.outdoor_temperature,
        "Aussentemperatur [°C]",
        "je Raum nach Höhe über Meer",
    );
    let air_change_rate = get_override(
        &matches,
        "n",
        project.overrides.air_change_rate,
        "Luftwechselrate [1/h]",
        "je Raum nach Lüftungsart",
    );
    if let Some(n) = air_change_rate {
        if n < 0.0 {
            eprintln!("FEHLER: Die Luftwechselrate darf nicht negativ sein ({:.2})", n);
            exit(exitcode::DATAERR);
        }
    }
    project.overrides = Overrides {
        indoor_temperature,
        outdoor_temperature,
        air_change_rate,
    };

    // Prüfung der Eingabedaten --------------------------------------------------------------------
    let issues = project.check();
    for issue in &issues {
        eprintln!("{}", issue);
    }
    if issues.iter().any(Issue::is_error) {
        eprintln!("FEHLER: Ungültige Raumdaten, die Heizlast wird nicht berechnet");
        exit(exitcode::DATAERR);
    }

    // Berechnung ----------------------------------------------------------------------------------
    let building = project.building_load(&catalog).unwrap_or_else(|error| {
        eprintln!("FEHLER: Die Heizlast kann nicht berechnet werden ({})", error);
        exit(exitcode::DATAERR);
    });

    for room in &building.rooms {
        for issue in check_load(&room.load) {
            eprintln!("{}: {}", room.name, issue);
        }
    }

    // Ausgabe der Ergebnisse ----------------------------------------------------------------------
    if let Some(archivo) = matches.value_of("archivo_salida_json") {
        let path = Path::new(archivo);
        if verbosity > 0 {
            println!("Ergebnisse im JSON-Format: {:?}", path.display());
        }
        let json = serde_json::to_string_pretty(&building).unwrap_or_else(|error| {
            eprintln!("FEHLER: Die Ergebnisse können nicht ins JSON-Format umgewandelt werden");
            if verbosity > 2 {
                println!("{}", error)
            };
            exit(exitcode::DATAERR);
        });
        write_or_exit(path, json.as_bytes());
    }

    println!("** Heizlast");
    println!("{}", building.to_plain());
}
