//! Nakshatra (lunar mansion) determination.
//!
//! The ecliptic is divided into 27 equal sectors of 13 deg 20' starting at
//! longitude 0. The Moon's longitude selects the sector.

use serde::Serialize;
use std::fmt;

/// Span of one nakshatra: 360/27 = 13.333... degrees.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

impl Nakshatra {
    /// All nakshatras in sky order (index 0 = Ashwini).
    pub const ALL: [Nakshatra; 27] = [
        Nakshatra::Ashwini,
        Nakshatra::Bharani,
        Nakshatra::Krittika,
        Nakshatra::Rohini,
        Nakshatra::Mrigashira,
        Nakshatra::Ardra,
        Nakshatra::Punarvasu,
        Nakshatra::Pushya,
        Nakshatra::Ashlesha,
        Nakshatra::Magha,
        Nakshatra::PurvaPhalguni,
        Nakshatra::UttaraPhalguni,
        Nakshatra::Hasta,
        Nakshatra::Chitra,
        Nakshatra::Swati,
        Nakshatra::Vishakha,
        Nakshatra::Anuradha,
        Nakshatra::Jyeshtha,
        Nakshatra::Mula,
        Nakshatra::PurvaAshadha,
        Nakshatra::UttaraAshadha,
        Nakshatra::Shravana,
        Nakshatra::Dhanishta,
        Nakshatra::Shatabhisha,
        Nakshatra::PurvaBhadrapada,
        Nakshatra::UttaraBhadrapada,
        Nakshatra::Revati,
    ];

    /// Nakshatra containing the given ecliptic longitude.
    ///
    /// `sector = floor(lon / (360/27)) + 1`, taken modulo 27 so any finite
    /// longitude maps to a valid sector.
    pub fn from_longitude(longitude_deg: f64) -> Self {
        Self::ALL[usize::from(sector_of(longitude_deg) - 1)]
    }

    /// 1-based sector number (Ashwini = 1, Revati = 27).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }
}

impl fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 1-based sector in `1..=27` for a longitude in degrees.
pub fn sector_of(longitude_deg: f64) -> u8 {
    let lon = longitude_deg.rem_euclid(360.0);
    let sector = (lon / NAKSHATRA_SPAN_DEG).floor() as usize + 1;
    ((sector - 1) % 27 + 1) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_and_last_sector() {
        assert_eq!(Nakshatra::from_longitude(0.0), Nakshatra::Ashwini);
        assert_eq!(Nakshatra::from_longitude(13.3), Nakshatra::Ashwini);
        assert_eq!(Nakshatra::from_longitude(13.34), Nakshatra::Bharani);
        assert_eq!(Nakshatra::from_longitude(359.99), Nakshatra::Revati);
    }

    #[test]
    fn test_uttara_ashadha_span() {
        // Sector 21 covers 266 deg 40' to 280 deg
        assert_eq!(Nakshatra::from_longitude(270.0), Nakshatra::UttaraAshadha);
        assert_eq!(Nakshatra::UttaraAshadha.number(), 21);
        assert_eq!(Nakshatra::UttaraAshadha.name(), "Uttara Ashadha");
    }

    #[test]
    fn test_sector_always_in_range() {
        let mut lon = 0.0;
        while lon < 360.0 {
            let sector = sector_of(lon);
            assert!((1..=27).contains(&sector), "lon {lon} -> {sector}");
            lon += 0.1;
        }
        assert_eq!(sector_of(360.0), 1);
        assert_eq!(sector_of(-0.5), 27);
    }

    #[test]
    fn test_numbers_follow_order() {
        for (i, nakshatra) in Nakshatra::ALL.iter().enumerate() {
            assert_eq!(usize::from(nakshatra.number()), i + 1);
        }
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Nakshatra::PurvaBhadrapada.to_string(), "Purva Bhadrapada");
    }
}
