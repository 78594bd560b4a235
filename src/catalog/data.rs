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
Eingebaute Katalogdaten
=======================

U-Werte nach Bauperiode gemäss suissetec-Merkblatt, ergänzt um die Perioden 2000-2015 und Neubau.
*/

/// U-Werte, Dachfaktoren und Luftwechselraten (suissetec, vereinfachtes Verfahren).
pub const CATALOG_SUISSETEC: &str = "
#META QUELLE: suissetec
#META QUELLE_KOMMENTAR: U-Werte nach Bauperiode, vereinfachte Richtwerte ohne Normnachweis
# Bauteil, Bauperiode, U [W/m2K]
U, DACH, bis 1900, 0.70
U, AUSSENWAND, bis 1900, 1.20
U, FENSTER, bis 1900, 3.00
U, BODEN, bis 1900, 0.80
U, DACH, 1900-1920, 0.50
U, AUSSENWAND, 1900-1920, 1.10
U, FENSTER, 1900-1920, 3.00
U, BODEN, 1900-1920, 1.30
U, DACH, 1920-1960, 0.80
U, AUSSENWAND, 1920-1960, 1.00
U, FENSTER, 1920-1960, 2.60
U, BODEN, 1920-1960, 1.40
U, DACH, 1960-1970, 0.80
U, AUSSENWAND, 1960-1970, 0.80
U, FENSTER, 1960-1970, 2.60
U, BODEN, 1960-1970, 1.30
U, DACH, 1970-1980, 0.70
U, AUSSENWAND, 1970-1980, 0.70
U, FENSTER, 1970-1980, 2.80
U, BODEN, 1970-1980, 0.70
U, DACH, 1980-1990, 0.40
U, AUSSENWAND, 1980-1990, 0.40
U, FENSTER, 1980-1990, 1.50
U, BODEN, 1980-1990, 0.60
U, DACH, 1990-2000, 0.30
U, AUSSENWAND, 1990-2000, 0.30
U, FENSTER, 1990-2000, 1.30
U, BODEN, 1990-2000, 0.35
U, DACH, 2000-2015, 0.20
U, AUSSENWAND, 2000-2015, 0.25
U, FENSTER, 2000-2015, 1.10
U, BODEN, 2000-2015, 0.25
U, DACH, ab 2015, 0.17
U, AUSSENWAND, ab 2015, 0.17
U, FENSTER, ab 2015, 0.90
U, BODEN, ab 2015, 0.20
U, DACH, Neubau, 0.15
U, AUSSENWAND, Neubau, 0.15
U, FENSTER, Neubau, 0.80
U, BODEN, Neubau, 0.20
# Dachtyp, Dachfläche / Grundfläche [-]
DACHFAKTOR, STEILDACH, 1.15 # Dachneigung ca. 30°
DACHFAKTOR, FLACHDACH, 1.00
DACHFAKTOR, ESTRICHBODEN, 1.00 # Decke gegen unbeheizten Estrich
# Lüftungsart, Luftwechsel [1/h]
LUFTWECHSEL, FENSTERLUEFTUNG, 0.50 # Manuelle Fensterlüftung
LUFTWECHSEL, ABLUFTANLAGE, 0.40 # Abluftanlage mit Nachströmöffnungen
LUFTWECHSEL, KOMFORTLUEFTUNG, 0.20 # Komfortlüftung mit Wärmerückgewinnung, wirksamer Luftwechsel
LUFTWECHSEL, UNDICHT, 0.80 # Altbau mit undichter Gebäudehülle
";
