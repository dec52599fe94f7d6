//! Declarative macro for canonical vocabulary enums.

/// Declares a closed token enum bound to a [`Vocabulary`](super::Vocabulary).
///
/// Generates the enum (with serde names equal to the canonical tokens), its
/// `VocabularyToken` implementation, `all()`, `TOKENS`, and `Display`.
///
/// # Example
///
/// ```ignore
/// canonical_vocabulary! {
///     /// Source of the dream text.
///     InputModality => Vocabulary::InputModality {
///         Text = "text",
///         VoiceTranscript = "voice_transcript",
///     }
/// }
/// ```
macro_rules! canonical_vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident => Vocabulary::$vocab:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            /// Canonical tokens in declaration order.
            pub const TOKENS: &'static [&'static str] = &[$($token),+];

            /// Returns every member in canonical order.
            pub fn all() -> &'static [$name] {
                &[$($name::$variant),+]
            }
        }

        impl $crate::domain::vocabulary::VocabularyToken for $name {
            const VOCABULARY: $crate::domain::vocabulary::Vocabulary =
                $crate::domain::vocabulary::Vocabulary::$vocab;

            fn from_token(token: &str) -> Option<Self> {
                match token {
                    $($token => Some($name::$variant),)+
                    _ => None,
                }
            }

            fn as_token(&self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                use $crate::domain::vocabulary::VocabularyToken;
                write!(f, "{}", self.as_token())
            }
        }
    };
}
