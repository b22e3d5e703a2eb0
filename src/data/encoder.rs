// ============================================================
// Layer 4 — Feature Encoder
// ============================================================
// Turns the raw form selections into the 11-column FeatureVector.
//
// Categorical fields are one-hot encoded by plain equality:
//   Geography::Germany → Geography_Germany = 1, Geography_Spain = 0
//   Geography::Spain   → Geography_Germany = 0, Geography_Spain = 1
//   Geography::Other   → both 0 (the model's baseline country)
//   Gender::Male       → Gender_Male = 1
//   YesNo::Yes         → 1
//
// Balance and NumOfProducts are not collected by the form.
// They are always emitted as the placeholder constants below,
// whatever the real customer looks like.
//
// Reference: Rust Book §6 (match), §13 (Closures)

use crate::domain::customer::{CustomerInput, Gender, Geography, YesNo};
use crate::domain::features::FeatureVector;

/// Placeholder account balance.
pub const PLACEHOLDER_BALANCE: f64 = 0.0;

/// Placeholder number of products held.
pub const PLACEHOLDER_NUM_OF_PRODUCTS: f64 = 1.0;

fn indicator(flag: bool) -> f64 {
    if flag { 1.0 } else { 0.0 }
}

fn yes_no(answer: YesNo) -> f64 {
    indicator(answer.is_yes())
}

/// Encode one customer. Pure and deterministic.
pub fn encode(input: &CustomerInput) -> FeatureVector {
    let vector = FeatureVector {
        credit_score:      f64::from(input.credit_score),
        age:               f64::from(input.age),
        tenure:            f64::from(input.tenure),
        balance:           PLACEHOLDER_BALANCE,
        num_of_products:   PLACEHOLDER_NUM_OF_PRODUCTS,
        has_cr_card:       yes_no(input.has_cr_card),
        is_active_member:  yes_no(input.is_active_member),
        estimated_salary:  input.estimated_salary,
        geography_germany: indicator(input.geography == Geography::Germany),
        geography_spain:   indicator(input.geography == Geography::Spain),
        gender_male:       indicator(input.gender == Gender::Male),
    };
    debug_assert!(vector.has_valid_geography());
    vector
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn input(geography: Geography, gender: Gender, card: YesNo, active: YesNo) -> CustomerInput {
        CustomerInput {
            credit_score:     600,
            age:              30,
            tenure:           2,
            estimated_salary: 50_000.0,
            geography,
            gender,
            has_cr_card:      card,
            is_active_member: active,
        }
    }

    #[test]
    fn test_reference_customer() {
        let v = encode(&input(Geography::Germany, Gender::Male, YesNo::Yes, YesNo::No));
        assert_eq!(
            v.to_array(),
            [600.0, 30.0, 2.0, 0.0, 1.0, 1.0, 0.0, 50_000.0, 1.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_geography_indicators_never_both_set() {
        // Exhaustive over every enumerated choice
        for g in [Geography::Germany, Geography::Spain, Geography::Other] {
            for s in [Gender::Male, Gender::Female] {
                for c in [YesNo::Yes, YesNo::No] {
                    for a in [YesNo::Yes, YesNo::No] {
                        let v = encode(&input(g, s, c, a));
                        assert!(v.has_valid_geography(), "{g:?} {s:?} {c:?} {a:?}");
                        assert!(v.geography_germany + v.geography_spain <= 1.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_other_geography_is_all_zero() {
        let v = encode(&input(Geography::Other, Gender::Female, YesNo::No, YesNo::No));
        assert_eq!(v.geography_germany, 0.0);
        assert_eq!(v.geography_spain, 0.0);
        assert_eq!(v.gender_male, 0.0);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let raw = input(Geography::Spain, Gender::Female, YesNo::No, YesNo::Yes);
        assert_eq!(encode(&raw), encode(&raw));
    }

    #[test]
    fn test_placeholders_ignore_input() {
        let mut raw = CustomerInput::default();
        raw.credit_score = 850;
        raw.estimated_salary = 123_456.0;
        let v = encode(&raw);
        assert_eq!(v.balance, PLACEHOLDER_BALANCE);
        assert_eq!(v.num_of_products, PLACEHOLDER_NUM_OF_PRODUCTS);
    }
}
