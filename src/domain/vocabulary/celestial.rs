//! Astrological vocabularies used by transit maps.

canonical_vocabulary! {
    /// Bodies that can take part in an aspect, including the Vedic lunar nodes.
    Planet => Vocabulary::Planet {
        Sun = "Sun",
        Moon = "Moon",
        Mercury = "Mercury",
        Venus = "Venus",
        Mars = "Mars",
        Jupiter = "Jupiter",
        Saturn = "Saturn",
        Uranus = "Uranus",
        Neptune = "Neptune",
        Pluto = "Pluto",
        /// North lunar node.
        Rahu = "Rahu",
        /// South lunar node.
        Ketu = "Ketu",
    }
}

canonical_vocabulary! {
    /// Major Ptolemaic aspects.
    AspectType => Vocabulary::AspectType {
        Conjunction = "conjunction",
        Sextile = "sextile",
        Square = "square",
        Trine = "trine",
        Opposition = "opposition",
    }
}

canonical_vocabulary! {
    /// Psychological effect attributed to a planetary combination.
    PsychologicalPressure => Vocabulary::PsychologicalPressure {
        Friction = "friction",
        Flow = "flow",
        Restriction = "restriction",
        Expansion = "expansion",
        Disruption = "disruption",
        Dissolution = "dissolution",
    }
}
