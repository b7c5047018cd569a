use super::*;

#[test]
fn letter_types_cover_the_alphabet() {
    assert_eq!(LetterType::classify("A"), Some(LetterType::Type1));
    assert_eq!(LetterType::classify("V"), Some(LetterType::Type1));
    assert_eq!(LetterType::classify("Σ"), Some(LetterType::Type2));
    assert_eq!(LetterType::classify("θ-"), Some(LetterType::Type3));
    assert_eq!(LetterType::classify("Λ"), Some(LetterType::Type4));
    assert_eq!(LetterType::classify("Ψ-"), Some(LetterType::Type5));
    assert_eq!(LetterType::classify("β"), Some(LetterType::Type6));
    assert_eq!(LetterType::classify("?"), None);
}

#[test]
fn categories_single_out_dash_special_cases() {
    assert_eq!(
        LetterCategory::classify(Some("Φ-")),
        LetterCategory::BothZeroTurnSpecial
    );
    assert_eq!(
        LetterCategory::classify(Some("Ψ-")),
        LetterCategory::BothZeroTurnSpecial
    );
    assert_eq!(
        LetterCategory::classify(Some("Λ")),
        LetterCategory::LambdaZeroTurn
    );
    assert_eq!(
        LetterCategory::classify(Some("Λ-")),
        LetterCategory::Standard
    );
    assert_eq!(LetterCategory::classify(Some("W-")), LetterCategory::Type3);
    assert_eq!(LetterCategory::classify(Some("W")), LetterCategory::Standard);
    assert_eq!(LetterCategory::classify(None), LetterCategory::Standard);
}
