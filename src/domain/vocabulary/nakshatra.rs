//! The 27 Vedic lunar mansions.

canonical_vocabulary! {
    /// Lunar mansion occupied by the Moon, in zodiacal order from 0° Aries.
    Nakshatra => Vocabulary::Nakshatra {
        Ashwini = "Ashwini",
        Bharani = "Bharani",
        Krittika = "Krittika",
        Rohini = "Rohini",
        Mrigashira = "Mrigashira",
        Ardra = "Ardra",
        Punarvasu = "Punarvasu",
        Pushya = "Pushya",
        Ashlesha = "Ashlesha",
        Magha = "Magha",
        PurvaPhalguni = "Purva Phalguni",
        UttaraPhalguni = "Uttara Phalguni",
        Hasta = "Hasta",
        Chitra = "Chitra",
        Swati = "Swati",
        Vishakha = "Vishakha",
        Anuradha = "Anuradha",
        Jyeshtha = "Jyeshtha",
        Mula = "Mula",
        PurvaAshadha = "Purva Ashadha",
        UttaraAshadha = "Uttara Ashadha",
        Shravana = "Shravana",
        Dhanishta = "Dhanishta",
        Shatabhisha = "Shatabhisha",
        PurvaBhadrapada = "Purva Bhadrapada",
        UttaraBhadrapada = "Uttara Bhadrapada",
        Revati = "Revati",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vocabulary::VocabularyToken;

    #[test]
    fn there_are_twenty_seven_mansions() {
        assert_eq!(Nakshatra::all().len(), 27);
        assert_eq!(Nakshatra::all()[26], Nakshatra::Revati);
    }

    #[test]
    fn compound_names_keep_their_space() {
        assert_eq!(Nakshatra::PurvaPhalguni.as_token(), "Purva Phalguni");
        assert_eq!(Nakshatra::from_token("Purva_Phalguni"), None);
        assert_eq!(
            serde_json::to_string(&Nakshatra::UttaraBhadrapada).unwrap(),
            r#""Uttara Bhadrapada""#
        );
    }
}
