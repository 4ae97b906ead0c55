//! The five pieces, one per level in a repeating cycle.
//!
//! Each piece is 32 bars of one-bar sections. The note tables are bulk data;
//! `_` is a rest.

use super::notes::*;
use super::{Composition, Section};

/// All pieces, in level order.
pub static CATALOG: [&Composition; 5] = [&SERENADE, &TURKISH_MARCH, &SONATA, &SYMPHONY, &OVERTURE];

pub static SERENADE: Composition = Composition {
    name: "Serenade",
    tonal_center: "G major",
    structure: &[
        "A", "A", "A2", "A2", "B", "B", "B2", "B2",
        "A", "A", "A2", "A2", "C", "C", "C2", "C2",
        "A", "A", "A2", "A2", "B", "B", "B2", "B2",
        "D", "D", "D2", "D2", "A", "A", "A3", "A3",
    ],
    sections: &[
        (
            "A",
            Section {
                melody: notes![
                    G4, D5, G4, D5, G4, B4, D5, G5,
                    FS5, E5, D5, C5, B4, A4, G4, _,
                ],
                bass: notes![G3, _, G3, _, G3, _, D3, _],
                harmony: Some(notes![B3, _, B3, _, B3, _, FS3, _]),
            },
        ),
        (
            "A2",
            Section {
                melody: notes![
                    G4, D5, G4, D5, G4, B4, D5, G5,
                    A5, G5, FS5, E5, D5, C5, B4, A4,
                ],
                bass: notes![G3, _, B3, _, D3, _, G3, _],
                harmony: Some(notes![D4, _, D4, _, FS3, _, B3, _]),
            },
        ),
        (
            "A3",
            Section {
                melody: notes![
                    G5, FS5, G5, A5, G5, FS5, E5, D5,
                    D5, C5, B4, A4, G4, FS4, G4, _,
                ],
                bass: notes![G3, _, D3, _, G3, _, D3, G3],
                harmony: Some(notes![B3, _, FS3, _, B3, _, FS3, G3]),
            },
        ),
        (
            "B",
            Section {
                melody: notes![
                    D5, D5, E5, FS5, G5, _, G5, A5,
                    B5, A5, G5, FS5, G5, A5, FS5, D5,
                ],
                bass: notes![D3, _, D3, _, G3, _, D3, _],
                harmony: Some(notes![FS3, _, A3, _, B3, _, A3, _]),
            },
        ),
        (
            "B2",
            Section {
                melody: notes![
                    E5, E5, FS5, G5, A5, _, A5, B5,
                    C6, B5, A5, G5, FS5, E5, D5, _,
                ],
                bass: notes![C3, _, G3, _, D3, _, A3, _],
                harmony: Some(notes![E3, _, B3, _, FS3, _, E3, _]),
            },
        ),
        (
            "C",
            Section {
                melody: notes![
                    B4, C5, D5, E5, D5, C5, B4, A4,
                    G4, A4, B4, C5, D5, E5, FS5, G5,
                ],
                bass: notes![G3, _, E3, _, C3, _, D3, _],
                harmony: Some(notes![B3, _, G3, _, E3, _, FS3, _]),
            },
        ),
        (
            "C2",
            Section {
                melody: notes![
                    A5, G5, FS5, E5, D5, C5, B4, A4,
                    B4, A4, G4, FS4, E4, D4, C4, B3,
                ],
                bass: notes![A3, _, D3, _, G3, _, C3, _],
                harmony: Some(notes![E3, _, FS3, _, B3, _, E3, _]),
            },
        ),
        (
            "D",
            Section {
                melody: notes![
                    G5, D5, B4, G4, D5, B4, G4, D4,
                    G4, B4, D5, G5, B5, D6, G5, D5,
                ],
                bass: notes![G3, G3, G3, G3, D3, D3, G3, G3],
                harmony: Some(notes![B3, D4, B3, D4, FS3, A3, B3, D4]),
            },
        ),
        (
            "D2",
            Section {
                melody: notes![
                    G5, FS5, G5, A5, B5, A5, G5, FS5,
                    G5, _, D5, _, G4, _, _, _,
                ],
                bass: notes![G3, _, D3, _, G3, D3, G3, _],
                harmony: Some(notes![B3, _, FS3, _, B3, FS3, G3, _]),
            },
        ),
    ],
};

pub static TURKISH_MARCH: Composition = Composition {
    name: "Turkish March",
    tonal_center: "A minor",
    structure: &[
        "A", "A", "B", "B", "A", "A", "C", "C",
        "D", "D", "D2", "D2", "A", "A", "B", "B",
        "E", "E", "E2", "E2", "F", "F", "F2", "F2",
        "A", "A", "B", "B", "G", "G", "G2", "G2",
    ],
    sections: &[
        (
            "A",
            Section {
                melody: notes![
                    B4, A4, GS4, A4, C5, _, D5, C5,
                    B4, C5, E5, _, F5, E5, D5, C5,
                ],
                bass: notes![A3, _, A3, _, A3, _, E3, _],
                harmony: Some(notes![C4, _, E4, _, A3, _, GS3, _]),
            },
        ),
        (
            "B",
            Section {
                melody: notes![
                    B4, A4, GS4, A4, C5, _, B4, A4,
                    GS4, A4, B4, _, A4, _, _, _,
                ],
                bass: notes![A3, _, E3, _, A3, _, A3, _],
                harmony: Some(notes![C4, _, GS3, _, E4, _, A3, _]),
            },
        ),
        (
            "C",
            Section {
                melody: notes![
                    A4, B4, C5, D5, E5, D5, C5, B4,
                    C5, D5, E5, F5, E5, D5, C5, B4,
                ],
                bass: notes![A3, _, E3, _, C3, _, G3, _],
                harmony: Some(notes![E4, _, A3, _, G3, _, E3, _]),
            },
        ),
        (
            "D",
            Section {
                melody: notes![
                    A5, GS5, A5, B5, C6, B5, A5, GS5,
                    A5, B5, C6, D6, E6, D6, C6, B5,
                ],
                bass: notes![A3, _, A3, _, A3, _, E3, _],
                harmony: Some(notes![E4, _, C4, _, A3, _, GS3, _]),
            },
        ),
        (
            "D2",
            Section {
                melody: notes![
                    C6, B5, A5, GS5, A5, E5, C5, A4,
                    B4, C5, D5, E5, A4, _, _, _,
                ],
                bass: notes![A3, _, C3, _, E3, _, A3, _],
                harmony: Some(notes![E4, _, E3, _, GS3, _, A3, _]),
            },
        ),
        (
            "E",
            Section {
                melody: notes![
                    A4, B4, C5, D5, E5, F5, E5, D5,
                    C5, D5, E5, F5, G5, A5, B5, C6,
                ],
                bass: notes![A3, _, C3, _, E3, _, A3, _],
                harmony: Some(notes![E4, _, E3, _, G3, _, C4, _]),
            },
        ),
        (
            "E2",
            Section {
                melody: notes![
                    D6, C6, B5, A5, G5, F5, E5, D5,
                    C5, B4, A4, GS4, A4, _, _, _,
                ],
                bass: notes![D3, _, E3, _, A3, _, A3, _],
                harmony: Some(notes![F3, _, GS3, _, E4, _, A3, _]),
            },
        ),
        (
            "F",
            Section {
                melody: notes![
                    E5, _, E5, _, E5, D5, C5, B4,
                    A4, _, A4, _, A4, B4, C5, D5,
                ],
                bass: notes![A3, E3, A3, E3, A3, _, A3, _],
                harmony: Some(notes![C4, A3, C4, A3, E4, _, E4, _]),
            },
        ),
        (
            "F2",
            Section {
                melody: notes![
                    E5, _, F5, _, E5, D5, C5, B4,
                    C5, D5, E5, F5, E5, D5, C5, B4,
                ],
                bass: notes![C3, _, D3, _, E3, _, E3, _],
                harmony: Some(notes![E3, _, F3, _, GS3, _, GS3, _]),
            },
        ),
        (
            "G",
            Section {
                melody: notes![
                    A5, E5, C5, A4, E5, C5, A4, E4,
                    A4, C5, E5, A5, C6, E6, A5, E5,
                ],
                bass: notes![A3, A3, A3, A3, E3, E3, A3, A3],
                harmony: Some(notes![C4, E4, C4, E4, A3, C4, E4, C4]),
            },
        ),
        (
            "G2",
            Section {
                melody: notes![
                    A5, GS5, A5, B5, C6, B5, A5, GS5,
                    A5, _, E5, _, A4, _, _, _,
                ],
                bass: notes![A3, _, E3, _, A3, E3, A3, _],
                harmony: Some(notes![C4, _, GS3, _, C4, GS3, A3, _]),
            },
        ),
    ],
};

pub static SONATA: Composition = Composition {
    name: "Sonata",
    tonal_center: "A major",
    structure: &[
        "A", "A", "A2", "A2", "B", "B", "B2", "B2",
        "C", "C", "C2", "C2", "A", "A", "A2", "A2",
        "D", "D", "D2", "D2", "E", "E", "E2", "E2",
        "F", "F", "F2", "F2", "A", "A", "G", "G",
    ],
    sections: &[
        (
            "A",
            Section {
                melody: notes![
                    CS5, E5, A5, GS5, A5, FS5, E5, D5,
                    CS5, B4, A4, B4, CS5, D5, E5, FS5,
                ],
                bass: notes![A3, _, A3, _, D3, _, E3, _],
                harmony: Some(notes![E4, _, CS4, _, FS3, _, GS3, _]),
            },
        ),
        (
            "A2",
            Section {
                melody: notes![
                    GS5, A5, B5, A5, GS5, FS5, E5, D5,
                    CS5, D5, E5, D5, CS5, B4, A4, _,
                ],
                bass: notes![E3, _, CS3, _, A3, _, A3, _],
                harmony: Some(notes![B3, _, A3, _, E4, _, A3, _]),
            },
        ),
        (
            "B",
            Section {
                melody: notes![
                    E5, FS5, GS5, A5, B5, A5, GS5, FS5,
                    E5, D5, CS5, D5, E5, FS5, GS5, A5,
                ],
                bass: notes![E3, _, E3, _, A3, _, E3, _],
                harmony: Some(notes![GS3, _, B3, _, CS4, _, B3, _]),
            },
        ),
        (
            "B2",
            Section {
                melody: notes![
                    B5, A5, GS5, A5, FS5, E5, D5, CS5,
                    B4, CS5, D5, E5, FS5, E5, D5, CS5,
                ],
                bass: notes![GS3, _, A3, _, D3, _, E3, _],
                harmony: Some(notes![B3, _, E4, _, FS3, _, GS3, _]),
            },
        ),
        (
            "C",
            Section {
                melody: notes![
                    A4, CS5, E5, A5, GS5, FS5, E5, D5,
                    CS5, E5, A5, CS6, B5, A5, GS5, FS5,
                ],
                bass: notes![A3, _, CS3, _, E3, _, A3, _],
                harmony: Some(notes![E4, _, A3, _, B3, _, CS4, _]),
            },
        ),
        (
            "C2",
            Section {
                melody: notes![
                    E5, FS5, GS5, A5, B5, CS6, B5, A5,
                    GS5, FS5, E5, D5, CS5, B4, A4, _,
                ],
                bass: notes![E3, _, FS3, _, GS3, _, A3, _],
                harmony: Some(notes![GS3, _, A3, _, B3, _, A3, _]),
            },
        ),
        (
            "D",
            Section {
                melody: notes![
                    FS5, E5, D5, CS5, D5, E5, FS5, GS5,
                    A5, B5, A5, GS5, FS5, E5, D5, CS5,
                ],
                bass: notes![D3, _, A3, _, E3, _, A3, _],
                harmony: Some(notes![FS3, _, CS4, _, B3, _, E4, _]),
            },
        ),
        (
            "D2",
            Section {
                melody: notes![
                    D5, E5, FS5, GS5, A5, GS5, FS5, E5,
                    D5, CS5, B4, A4, GS4, A4, B4, CS5,
                ],
                bass: notes![D3, _, E3, _, FS3, _, E3, _],
                harmony: Some(notes![FS3, _, GS3, _, A3, _, GS3, _]),
            },
        ),
        (
            "E",
            Section {
                melody: notes![
                    A5, GS5, A5, B5, A5, GS5, FS5, E5,
                    FS5, GS5, A5, B5, CS6, B5, A5, GS5,
                ],
                bass: notes![A3, _, E3, _, FS3, _, CS3, _],
                harmony: Some(notes![CS4, _, B3, _, A3, _, E3, _]),
            },
        ),
        (
            "E2",
            Section {
                melody: notes![
                    A5, B5, CS6, B5, A5, GS5, FS5, E5,
                    D5, CS5, B4, A4, GS4, FS4, E4, _,
                ],
                bass: notes![A3, _, FS3, _, D3, _, E3, _],
                harmony: Some(notes![E4, _, A3, _, FS3, _, GS3, _]),
            },
        ),
        (
            "F",
            Section {
                melody: notes![
                    CS5, D5, E5, FS5, E5, D5, CS5, B4,
                    A4, B4, CS5, D5, E5, FS5, GS5, A5,
                ],
                bass: notes![A3, _, D3, _, A3, _, E3, _],
                harmony: Some(notes![E4, _, FS3, _, CS4, _, B3, _]),
            },
        ),
        (
            "F2",
            Section {
                melody: notes![
                    B5, A5, GS5, FS5, E5, D5, CS5, B4,
                    A4, GS4, FS4, E4, A4, _, _, _,
                ],
                bass: notes![E3, _, CS3, _, A3, _, A3, _],
                harmony: Some(notes![GS3, _, E3, _, E4, _, A3, _]),
            },
        ),
        (
            "G",
            Section {
                melody: notes![
                    A5, E5, CS5, A4, E5, CS5, A4, E4,
                    A4, CS5, E5, A5, A4, _, _, _,
                ],
                bass: notes![A3, A3, A3, A3, E3, E3, A3, A3],
                harmony: Some(notes![CS4, E4, CS4, E4, A3, CS4, E4, A3]),
            },
        ),
    ],
};

pub static SYMPHONY: Composition = Composition {
    name: "Symphony",
    tonal_center: "G minor",
    structure: &[
        "A", "A", "A2", "A2", "B", "B", "B2", "B2",
        "C", "C", "C2", "C2", "D", "D", "D2", "D2",
        "A", "A", "A2", "A2", "E", "E", "E2", "E2",
        "F", "F", "F2", "F2", "G", "G", "G2", "G2",
    ],
    sections: &[
        (
            "A",
            Section {
                melody: notes![
                    _, D5, D5, EB5, D5, D5, D5, G5,
                    FS5, _, _, A4, A4, BB4, A4, A4,
                ],
                bass: notes![G3, _, G3, _, G3, _, D3, _],
                harmony: Some(notes![BB3, _, D4, _, BB3, _, FS3, _]),
            },
        ),
        (
            "A2",
            Section {
                melody: notes![
                    A4, D5, C5, _, _, BB4, BB4, C5,
                    BB4, BB4, BB4, EB5, D5, _, _, _,
                ],
                bass: notes![D3, _, EB3, _, BB3, _, G3, _],
                harmony: Some(notes![FS3, _, G3, _, D4, _, BB3, _]),
            },
        ),
        (
            "B",
            Section {
                melody: notes![
                    D5, EB5, D5, C5, BB4, A4, G4, FS4,
                    G4, A4, BB4, C5, D5, EB5, F5, G5,
                ],
                bass: notes![G3, _, BB3, _, C3, _, D3, _],
                harmony: Some(notes![D4, _, D4, _, EB3, _, FS3, _]),
            },
        ),
        (
            "B2",
            Section {
                melody: notes![
                    G5, F5, EB5, D5, C5, BB4, A4, G4,
                    FS4, G4, A4, BB4, A4, G4, FS4, _,
                ],
                bass: notes![EB3, _, C3, _, D3, _, G3, _],
                harmony: Some(notes![G3, _, EB3, _, FS3, _, G3, _]),
            },
        ),
        (
            "C",
            Section {
                melody: notes![
                    BB5, A5, BB5, G5, FS5, G5, EB5, D5,
                    EB5, C5, BB4, A4, G4, FS4, G4, A4,
                ],
                bass: notes![G3, _, EB3, _, C3, _, D3, _],
                harmony: Some(notes![D4, _, G3, _, EB3, _, FS3, _]),
            },
        ),
        (
            "C2",
            Section {
                melody: notes![
                    BB4, C5, D5, EB5, F5, G5, A5, BB5,
                    A5, G5, FS5, G5, D5, _, _, _,
                ],
                bass: notes![BB3, _, C3, _, D3, _, G3, _],
                harmony: Some(notes![D4, _, EB3, _, FS3, _, BB3, _]),
            },
        ),
        (
            "D",
            Section {
                melody: notes![
                    G5, G5, G5, G5, G5, FS5, G5, A5,
                    BB5, A5, G5, FS5, EB5, D5, C5, BB4,
                ],
                bass: notes![G3, G3, EB3, EB3, D3, _, BB3, _],
                harmony: Some(notes![BB3, D4, G3, BB3, FS3, _, D4, _]),
            },
        ),
        (
            "D2",
            Section {
                melody: notes![
                    A4, BB4, C5, D5, EB5, F5, EB5, D5,
                    C5, BB4, A4, G4, FS4, G4, _, _,
                ],
                bass: notes![F3, _, EB3, _, D3, _, G3, _],
                harmony: Some(notes![A3, _, G3, _, FS3, _, G3, _]),
            },
        ),
        (
            "E",
            Section {
                melody: notes![
                    D5, D5, D5, EB5, D5, C5, BB4, A4,
                    BB4, C5, D5, EB5, D5, C5, BB4, A4,
                ],
                bass: notes![BB3, _, A3, _, G3, _, D3, _],
                harmony: Some(notes![D4, _, C4, _, BB3, _, FS3, _]),
            },
        ),
        (
            "E2",
            Section {
                melody: notes![
                    G4, A4, BB4, C5, D5, EB5, F5, G5,
                    F5, EB5, D5, C5, BB4, A4, G4, _,
                ],
                bass: notes![G3, _, EB3, _, BB3, _, G3, _],
                harmony: Some(notes![BB3, _, G3, _, D4, _, G3, _]),
            },
        ),
        (
            "F",
            Section {
                melody: notes![
                    G5, D5, BB4, G4, D5, BB4, G4, D4,
                    G4, BB4, D5, G5, BB5, G5, D5, BB4,
                ],
                bass: notes![G3, G3, G3, G3, D3, D3, G3, G3],
                harmony: Some(notes![BB3, D4, BB3, D4, FS3, A3, BB3, D4]),
            },
        ),
        (
            "F2",
            Section {
                melody: notes![
                    G4, BB4, D5, G5, FS5, G5, A5, BB5,
                    A5, G5, FS5, G5, D5, _, _, _,
                ],
                bass: notes![G3, _, D3, _, G3, D3, G3, _],
                harmony: Some(notes![BB3, _, FS3, _, BB3, FS3, G3, _]),
            },
        ),
        (
            "G",
            Section {
                melody: notes![
                    G5, FS5, G5, A5, BB5, A5, G5, FS5,
                    G5, D5, BB4, G4, G4, _, _, _,
                ],
                bass: notes![G3, _, D3, _, G3, G3, G3, _],
                harmony: Some(notes![BB3, _, FS3, _, BB3, D4, G3, _]),
            },
        ),
        (
            "G2",
            Section {
                melody: notes![
                    _, D5, D5, EB5, D5, D5, D5, G5,
                    G5, _, D5, _, G4, _, _, _,
                ],
                bass: notes![G3, _, G3, _, G3, D3, G3, _],
                harmony: Some(notes![BB3, _, D4, _, BB3, FS3, G3, _]),
            },
        ),
    ],
};

pub static OVERTURE: Composition = Composition {
    name: "Overture",
    tonal_center: "Eb major",
    structure: &[
        "A", "A", "A2", "A2", "B", "B", "B2", "B2",
        "C", "C", "C2", "C2", "D", "D", "D2", "D2",
        "E", "E", "E2", "E2", "F", "F", "F2", "F2",
        "G", "G", "G2", "G2", "H", "H", "H2", "H2",
    ],
    sections: &[
        (
            "A",
            Section {
                melody: notes![
                    EB5, G5, BB5, EB6, D6, C6, BB5, AB5,
                    G5, F5, EB5, D5, EB5, F5, G5, AB5,
                ],
                bass: notes![EB3, _, EB3, _, BB3, _, EB3, _],
                harmony: Some(notes![G3, _, BB3, _, D4, _, G3, _]),
            },
        ),
        (
            "A2",
            Section {
                melody: notes![
                    BB5, AB5, G5, F5, EB5, D5, C5, BB4,
                    AB4, BB4, C5, D5, EB5, _, _, _,
                ],
                bass: notes![EB3, _, AB3, _, BB3, _, EB3, _],
                harmony: Some(notes![G3, _, C4, _, D4, _, EB3, _]),
            },
        ),
        (
            "B",
            Section {
                melody: notes![
                    G5, AB5, BB5, C6, BB5, AB5, G5, F5,
                    EB5, F5, G5, AB5, BB5, C6, D6, EB6,
                ],
                bass: notes![EB3, _, AB3, _, EB3, _, BB3, _],
                harmony: Some(notes![BB3, _, C4, _, G3, _, D4, _]),
            },
        ),
        (
            "B2",
            Section {
                melody: notes![
                    D6, C6, BB5, AB5, G5, F5, EB5, D5,
                    C5, D5, EB5, F5, G5, AB5, BB5, _,
                ],
                bass: notes![F3, _, EB3, _, AB3, _, BB3, _],
                harmony: Some(notes![AB3, _, G3, _, C4, _, D4, _]),
            },
        ),
        (
            "C",
            Section {
                melody: notes![
                    EB5, EB5, EB5, F5, G5, AB5, BB5, C6,
                    BB5, AB5, G5, F5, EB5, D5, C5, BB4,
                ],
                bass: notes![EB3, EB3, C3, C3, AB3, _, BB3, _],
                harmony: Some(notes![G3, BB3, EB3, G3, C4, _, D4, _]),
            },
        ),
        (
            "C2",
            Section {
                melody: notes![
                    AB4, BB4, C5, D5, EB5, F5, G5, AB5,
                    BB5, AB5, G5, F5, EB5, _, _, _,
                ],
                bass: notes![AB3, _, EB3, _, BB3, _, EB3, _],
                harmony: Some(notes![C4, _, G3, _, D4, _, EB3, _]),
            },
        ),
        (
            "D",
            Section {
                melody: notes![
                    BB5, C6, D6, EB6, D6, C6, BB5, AB5,
                    G5, AB5, BB5, C6, D6, EB6, F6, G6,
                ],
                bass: notes![BB3, _, AB3, _, G3, _, BB3, _],
                harmony: Some(notes![D4, _, C4, _, BB3, _, D4, _]),
            },
        ),
        (
            "D2",
            Section {
                melody: notes![
                    F6, EB6, D6, C6, BB5, AB5, G5, F5,
                    EB5, F5, G5, AB5, BB5, _, _, _,
                ],
                bass: notes![F3, _, G3, _, AB3, _, BB3, _],
                harmony: Some(notes![AB3, _, BB3, _, C4, _, D4, _]),
            },
        ),
        (
            "E",
            Section {
                melody: notes![
                    EB5, G5, BB5, G5, EB5, G5, BB5, G5,
                    F5, AB5, C6, AB5, F5, AB5, C6, AB5,
                ],
                bass: notes![EB3, _, EB3, _, F3, _, F3, _],
                harmony: Some(notes![G3, _, BB3, _, AB3, _, C4, _]),
            },
        ),
        (
            "E2",
            Section {
                melody: notes![
                    G5, BB5, D6, BB5, G5, BB5, D6, BB5,
                    EB5, G5, BB5, G5, EB5, _, _, _,
                ],
                bass: notes![G3, _, G3, _, EB3, _, EB3, _],
                harmony: Some(notes![BB3, _, D4, _, G3, _, BB3, _]),
            },
        ),
        (
            "F",
            Section {
                melody: notes![
                    BB5, AB5, G5, F5, EB5, F5, G5, AB5,
                    BB5, C6, D6, EB6, D6, C6, BB5, AB5,
                ],
                bass: notes![BB3, _, EB3, _, BB3, _, AB3, _],
                harmony: Some(notes![D4, _, G3, _, D4, _, C4, _]),
            },
        ),
        (
            "F2",
            Section {
                melody: notes![
                    G5, AB5, BB5, C6, D6, C6, BB5, AB5,
                    G5, F5, EB5, D5, EB5, _, _, _,
                ],
                bass: notes![G3, _, AB3, _, BB3, _, EB3, _],
                harmony: Some(notes![BB3, _, C4, _, D4, _, EB3, _]),
            },
        ),
        (
            "G",
            Section {
                melody: notes![
                    EB6, BB5, G5, EB5, BB5, G5, EB5, BB4,
                    EB5, G5, BB5, EB6, G6, EB6, BB5, G5,
                ],
                bass: notes![EB3, EB3, EB3, EB3, BB3, BB3, EB3, EB3],
                harmony: Some(notes![G3, BB3, G3, BB3, D4, F4, G3, BB3]),
            },
        ),
        (
            "G2",
            Section {
                melody: notes![
                    EB5, F5, G5, AB5, BB5, C6, D6, EB6,
                    D6, C6, BB5, AB5, G5, F5, EB5, _,
                ],
                bass: notes![EB3, _, AB3, _, BB3, _, EB3, _],
                harmony: Some(notes![G3, _, C4, _, D4, _, EB3, _]),
            },
        ),
        (
            "H",
            Section {
                melody: notes![
                    EB5, G5, BB5, EB6, BB5, G5, EB5, BB4,
                    G4, BB4, EB5, G5, BB5, G5, EB5, BB4,
                ],
                bass: notes![EB3, _, EB3, _, EB3, _, EB3, _],
                harmony: Some(notes![G3, _, BB3, _, G3, _, BB3, _]),
            },
        ),
        (
            "H2",
            Section {
                melody: notes![
                    EB5, D5, EB5, F5, G5, AB5, BB5, C6,
                    BB5, AB5, G5, F5, EB5, _, _, _,
                ],
                bass: notes![EB3, _, BB3, _, EB3, BB3, EB3, _],
                harmony: Some(notes![G3, _, D4, _, G3, D4, EB3, _]),
            },
        ),
    ],
};
