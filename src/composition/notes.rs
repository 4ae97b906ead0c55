//! Equal-tempered note frequencies in Hz (A4 = 440), octaves 3 to 6.
//!
//! Sharps are spelled `S` and flats `B`: `FS5` is F♯5, `EB5` is E♭5. G♯ and
//! A♭ are both provided since the pieces use either spelling.

// Octave 3
pub const C3: f32 = 130.81;
pub const CS3: f32 = 138.59;
pub const D3: f32 = 146.83;
pub const EB3: f32 = 155.56;
pub const E3: f32 = 164.81;
pub const F3: f32 = 174.61;
pub const FS3: f32 = 185.00;
pub const G3: f32 = 196.00;
pub const GS3: f32 = 207.65;
pub const AB3: f32 = 207.65;
pub const A3: f32 = 220.00;
pub const BB3: f32 = 233.08;
pub const B3: f32 = 246.94;

// Octave 4
pub const C4: f32 = 261.63;
pub const CS4: f32 = 277.18;
pub const D4: f32 = 293.66;
pub const EB4: f32 = 311.13;
pub const E4: f32 = 329.63;
pub const F4: f32 = 349.23;
pub const FS4: f32 = 369.99;
pub const G4: f32 = 392.00;
pub const GS4: f32 = 415.30;
pub const AB4: f32 = 415.30;
pub const A4: f32 = 440.00;
pub const BB4: f32 = 466.16;
pub const B4: f32 = 493.88;

// Octave 5
pub const C5: f32 = 523.25;
pub const CS5: f32 = 554.37;
pub const D5: f32 = 587.33;
pub const EB5: f32 = 622.25;
pub const E5: f32 = 659.26;
pub const F5: f32 = 698.46;
pub const FS5: f32 = 739.99;
pub const G5: f32 = 783.99;
pub const GS5: f32 = 830.61;
pub const AB5: f32 = 830.61;
pub const A5: f32 = 880.00;
pub const BB5: f32 = 932.33;
pub const B5: f32 = 987.77;

// Octave 6
pub const C6: f32 = 1046.50;
pub const CS6: f32 = 1108.73;
pub const D6: f32 = 1174.66;
pub const EB6: f32 = 1244.51;
pub const E6: f32 = 1318.51;
pub const F6: f32 = 1396.91;
pub const FS6: f32 = 1479.98;
pub const G6: f32 = 1567.98;
pub const GS6: f32 = 1661.22;
pub const AB6: f32 = 1661.22;
pub const A6: f32 = 1760.00;
pub const BB6: f32 = 1864.66;
pub const B6: f32 = 1975.53;
