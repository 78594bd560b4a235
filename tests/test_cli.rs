#[test]
fn wohnung_default_catalog() {
    assert_cli::Assert::main_binary()
        .with_args(&["-r", "test_data/wohnung.json"])
        .stdout()
        .contains("U-Wert-Katalog (vordefiniert): suissetec")
        .stdout()
        .contains("** Raum: Wohnzimmer")
        .stdout()
        .contains("Heizlast: 516 W")
        .stdout()
        .contains("Heizlast: 415 W")
        .stdout()
        .contains("Gesamtheizlast: 931 W (0.93 kW)")
        .unwrap();
}

#[test]
fn wohnung_catalog_file() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-r",
            "test_data/wohnung.json",
            "-u",
            "test_data/uwerte_test.txt",
        ])
        .stdout()
        .contains("U-Wert-Katalog (Datei): \"test_data/uwerte_test.txt\"")
        .stdout()
        .contains("Heizlast: 596 W")
        .stdout()
        .contains("Gesamtheizlast: 1011 W (1.01 kW)")
        .unwrap();
}

#[test]
fn wohnung_outdoor_temperature_from_cli() {
    assert_cli::Assert::main_binary()
        .with_args(&["-r", "test_data/wohnung.json", "--ta", "-10"])
        .stdout()
        .contains("Aussentemperatur [°C] (Benutzer): -10.00")
        .stdout()
        .contains("Raumtemperatur [°C]: je Raum nach Nutzung")
        .stdout()
        .contains("Gesamtheizlast: 974 W (0.97 kW)")
        .unwrap();
}

#[test]
fn altbau_overrides_from_project() {
    assert_cli::Assert::main_binary()
        .with_args(&["-r", "test_data/altbau.json"])
        .stdout()
        .contains("Projekt: Altbau mit Sanierung")
        .stdout()
        .contains("Aussentemperatur [°C] (Projekt): -10.00")
        .stdout()
        .contains("- Fenster W: A = 1.50 m2, U = 0.90 W/m2K, f = 1.0")
        .stdout()
        .contains("Gesamtheizlast: 1000 W (1.00 kW)")
        .unwrap();
}

#[test]
fn invalid_room_data() {
    assert_cli::Assert::main_binary()
        .with_args(&["-r", "test_data/ungueltig.json"])
        .fails_with(65)
        .stderr()
        .contains("FEHLER: Abstellraum: Grundfläche muss grösser als 0 sein")
        .unwrap();
}

#[test]
fn missing_catalog_key() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-r",
            "test_data/altbau.json",
            "-u",
            "test_data/uwerte_test.txt",
        ])
        .fails_with(65)
        .stderr()
        .contains("FEHLER: Die Heizlast kann nicht berechnet werden")
        .unwrap();
}

#[test]
fn missing_project_file() {
    assert_cli::Assert::main_binary()
        .with_args(&["-r", "test_data/gibtesnicht.json"])
        .fails_with(74)
        .stderr()
        .contains("FEHLER: Die Projektdatei")
        .unwrap();
}

#[test]
fn bad_air_change_rate() {
    assert_cli::Assert::main_binary()
        .with_args(&["-r", "test_data/wohnung.json", "--n", "viel"])
        .fails_with(65)
        .stderr()
        .contains("FEHLER: Luftwechselrate [1/h] ist keine gültige Zahl")
        .unwrap();
}

#[test]
fn list_keys() {
    assert_cli::Assert::main_binary()
        .with_args(&["--liste"])
        .stdout()
        .contains("Bauperioden: \"bis 1900\", \"1900-1920\"")
        .stdout()
        .contains("Dachtypen: \"STEILDACH\", \"FLACHDACH\", \"ESTRICHBODEN\", \"GEGEN_BEHEIZT\"")
        .unwrap();
}

#[test]
fn no_project_needs_list_or_catalog_output() {
    assert_cli::Assert::main_binary()
        .with_args(&["-v"])
        .fails()
        .unwrap();
}

#[test]
fn license() {
    assert_cli::Assert::main_binary()
        .with_args(&["-L"])
        .stdout()
        .contains("Permission is hereby granted")
        .unwrap();
}

#[test]
fn non_finite_temperature() {
    assert_cli::Assert::main_binary()
        .with_args(&["-r", "test_data/wohnung.json", "--ti", "NaN"])
        .fails_with(65)
        .stderr()
        .contains("FEHLER: Raumtemperatur [°C] ist keine endliche Zahl")
        .unwrap();
    assert_cli::Assert::main_binary()
        .with_args(&["-r", "test_data/wohnung.json", "--n", "inf"])
        .fails_with(65)
        .stderr()
        .contains("FEHLER: Luftwechselrate [1/h] ist keine endliche Zahl")
        .unwrap();
}

#[test]
fn write_catalog_in_use() {
    let path = "target/uwerte_test_ausgabe.txt";
    assert_cli::Assert::main_binary()
        .with_args(&["-u", "test_data/uwerte_test.txt", "--ok", path, "-v"])
        .stdout()
        .contains("U-Wert-Katalog gespeichert: target/uwerte_test_ausgabe.txt")
        .unwrap();
    let written = std::fs::read_to_string(path).unwrap();
    assert!(written.contains("#META DATEI: test_data/uwerte_test.txt"));
    assert!(written.contains("U, AUSSENWAND, Neubau, 0.20"));
    let catalog: heizlast::Catalog = written.parse().unwrap();
    let original: heizlast::Catalog = std::fs::read_to_string("test_data/uwerte_test.txt")
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(catalog.uvalues, original.uvalues);
}
