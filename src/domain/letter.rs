/// Structural family of a beat's letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum LetterType {
    /// Both roles shift.
    Type1,
    /// One shift, one static.
    Type2,
    /// One shift, one dash.
    Type3,
    /// One dash, one static.
    Type4,
    /// Both roles dash.
    Type5,
    /// Both roles static.
    Type6,
}

const TYPE1: &[&str] = &[
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V",
];
const TYPE2: &[&str] = &["W", "X", "Y", "Z", "Σ", "Δ", "θ", "Ω"];
const TYPE3: &[&str] = &["W-", "X-", "Y-", "Z-", "Σ-", "Δ-", "θ-", "Ω-"];
const TYPE4: &[&str] = &["Φ", "Ψ", "Λ"];
const TYPE5: &[&str] = &["Φ-", "Ψ-", "Λ-"];
const TYPE6: &[&str] = &["α", "β", "Γ"];

impl LetterType {
    /// Family of `letter`, or `None` for an unknown glyph.
    pub fn classify(letter: &str) -> Option<Self> {
        [
            (TYPE1, LetterType::Type1),
            (TYPE2, LetterType::Type2),
            (TYPE3, LetterType::Type3),
            (TYPE4, LetterType::Type4),
            (TYPE5, LetterType::Type5),
            (TYPE6, LetterType::Type6),
        ]
        .into_iter()
        .find(|(letters, _)| letters.contains(&letter))
        .map(|(_, ty)| ty)
    }
}

/// Letter families that change how a zero-turn dash is located.
///
/// Resolved once per pictograph and handed down to the dash resolver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub enum LetterCategory {
    /// Φ- and Ψ-: two dashes whose zero-turn locations are chosen per role.
    BothZeroTurnSpecial,
    /// Λ: a zero-turn dash sits opposite the static partner's end.
    LambdaZeroTurn,
    /// Cross-shift letters: a zero-turn dash steps away from the partner's shift.
    Type3,
    /// Every other letter, or no letter at all.
    #[default]
    Standard,
}

impl LetterCategory {
    /// Category of an already normalized letter; no letter is [`LetterCategory::Standard`].
    pub fn classify(letter: Option<&str>) -> Self {
        let Some(letter) = letter else {
            return LetterCategory::Standard;
        };
        match letter {
            "Φ-" | "Ψ-" => LetterCategory::BothZeroTurnSpecial,
            "Λ" => LetterCategory::LambdaZeroTurn,
            _ if LetterType::classify(letter) == Some(LetterType::Type3) => LetterCategory::Type3,
            _ => LetterCategory::Standard,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/domain/letter.rs"]
mod tests;
