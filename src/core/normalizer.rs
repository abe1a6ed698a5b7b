//! Equipment label normalization.
//!
//! Resolves a free-form label to a catalog entry by exact canonical match,
//! then alias lookup, then alias lookup with all whitespace removed. There
//! is no edit-distance matching: a label that matches nothing is dropped
//! rather than guessed.

use super::catalog::Equipment;
use super::types::EquipmentSet;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// Lowercased alias → canonical id. Every canonical spelling appears here
/// lowercased so the whitespace-stripped pass also covers it.
const ALIAS_TABLE: &[(&str, Equipment)] = &[
    ("barbell", Equipment::Barbell),
    ("olympic barbell", Equipment::Barbell),
    ("olympic bar", Equipment::Barbell),
    ("squatrack", Equipment::SquatRack),
    ("squat rack", Equipment::SquatRack),
    ("power rack", Equipment::SquatRack),
    ("powerrack", Equipment::SquatRack),
    ("squat cage", Equipment::SquatRack),
    ("smithmachine", Equipment::SmithMachine),
    ("smith machine", Equipment::SmithMachine),
    ("smith", Equipment::SmithMachine),
    ("cablemachine", Equipment::CableMachine),
    ("cable machine", Equipment::CableMachine),
    ("cable crossover", Equipment::CableMachine),
    ("cable station", Equipment::CableMachine),
    ("latpulldown", Equipment::LatPulldown),
    ("lat pulldown", Equipment::LatPulldown),
    ("lat pull-down", Equipment::LatPulldown),
    ("lat pulldown machine", Equipment::LatPulldown),
    ("legpress", Equipment::LegPress),
    ("leg press", Equipment::LegPress),
    ("leg press machine", Equipment::LegPress),
    ("dumbbell", Equipment::Dumbbells),
    ("dumbbells", Equipment::Dumbbells),
    ("dumbbell rack", Equipment::Dumbbells),
    ("kettlebell", Equipment::Kettlebells),
    ("kettlebells", Equipment::Kettlebells),
    ("kettle bell", Equipment::Kettlebells),
    ("flat bench", Equipment::BenchFlat),
    ("benchflat", Equipment::BenchFlat),
    ("bench flat", Equipment::BenchFlat),
    ("incline bench", Equipment::BenchIncline),
    ("benchincline", Equipment::BenchIncline),
    ("bench incline", Equipment::BenchIncline),
    ("adjustable bench", Equipment::BenchIncline),
    ("pullupbar", Equipment::PullupBar),
    ("pull-up bar", Equipment::PullupBar),
    ("pull up bar", Equipment::PullupBar),
    ("chin-up bar", Equipment::PullupBar),
    ("chin up bar", Equipment::PullupBar),
    ("treadmill", Equipment::Treadmill),
    ("rower", Equipment::Rower),
    ("rowing machine", Equipment::Rower),
    ("rowing ergometer", Equipment::Rower),
    ("bike", Equipment::Bike),
    ("exercise bike", Equipment::Bike),
    ("stationary bike", Equipment::Bike),
    ("spin bike", Equipment::Bike),
    ("stairclimber", Equipment::StairClimber),
    ("stair climber", Equipment::StairClimber),
    ("stairmaster", Equipment::StairClimber),
    ("trapbar", Equipment::TrapBar),
    ("trap bar", Equipment::TrapBar),
    ("hex bar", Equipment::TrapBar),
    ("assisteddipchin", Equipment::AssistedDipChin),
    ("assisted dip", Equipment::AssistedDipChin),
    ("assisted dip/chin", Equipment::AssistedDipChin),
    ("assisted pull-up machine", Equipment::AssistedDipChin),
    ("pecdeck", Equipment::PecDeck),
    ("pec deck", Equipment::PecDeck),
    ("pec fly machine", Equipment::PecDeck),
    ("hacksquat", Equipment::HackSquat),
    ("hack squat", Equipment::HackSquat),
    ("preachercurl", Equipment::PreacherCurl),
    ("preacher curl", Equipment::PreacherCurl),
    ("preacher bench", Equipment::PreacherCurl),
    ("hipabductor", Equipment::HipAbductor),
    ("hip abductor", Equipment::HipAbductor),
    ("hip abduction", Equipment::HipAbductor),
    ("hipadductor", Equipment::HipAdductor),
    ("hip adductor", Equipment::HipAdductor),
    ("hip adduction", Equipment::HipAdductor),
    ("calfraise", Equipment::CalfRaise),
    ("calf raise", Equipment::CalfRaise),
    ("calf raise machine", Equipment::CalfRaise),
    ("landmine", Equipment::Landmine),
    ("land mine", Equipment::Landmine),
    ("sled", Equipment::Sled),
    ("prowler", Equipment::Sled),
    ("pulleysingle", Equipment::PulleySingle),
    ("pulley", Equipment::PulleySingle),
    ("single pulley", Equipment::PulleySingle),
];

static ALIASES: LazyLock<FxHashMap<&'static str, Equipment>> =
    LazyLock::new(|| ALIAS_TABLE.iter().copied().collect());

/// Resolve a label to a catalog entry. `None` means "drop it".
pub fn normalize(raw: &str) -> Option<Equipment> {
    let key = raw.trim().to_lowercase();
    if let Some(eq) = Equipment::from_canonical(&key) {
        return Some(eq);
    }
    if let Some(eq) = ALIASES.get(key.as_str()) {
        return Some(*eq);
    }
    let compact: String = key.chars().filter(|c| !c.is_whitespace()).collect();
    let found = ALIASES.get(compact.as_str()).copied();
    if found.is_none() {
        tracing::trace!(label = raw, "unrecognized equipment label");
    }
    found
}

/// Normalize many labels into an ordered set; first occurrence wins.
pub fn normalize_all<'a>(labels: impl IntoIterator<Item = &'a str>) -> EquipmentSet {
    labels.into_iter().filter_map(normalize).collect()
}

/// Aliases that resolve to `equipment`, sorted.
pub fn aliases_for(equipment: Equipment) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = ALIAS_TABLE
        .iter()
        .filter(|(_, eq)| *eq == equipment)
        .map(|(alias, _)| *alias)
        .collect();
    out.sort_unstable();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_canonical_any_case() {
        assert_eq!(normalize("squatRack"), Some(Equipment::SquatRack));
        assert_eq!(normalize("SQUATRACK"), Some(Equipment::SquatRack));
        assert_eq!(normalize("  latpulldown\n"), Some(Equipment::LatPulldown));
    }

    #[test]
    fn test_normalize_alias_phrases() {
        assert_eq!(normalize("Squat Rack"), Some(Equipment::SquatRack));
        assert_eq!(normalize("Incline bench"), Some(Equipment::BenchIncline));
        assert_eq!(normalize("Cable Machine"), Some(Equipment::CableMachine));
        assert_eq!(normalize("Pull-Up Bar"), Some(Equipment::PullupBar));
        assert_eq!(normalize("dumbbell"), Some(Equipment::Dumbbells));
        assert_eq!(normalize("Assisted Dip/Chin"), Some(Equipment::AssistedDipChin));
    }

    #[test]
    fn test_normalize_strips_inner_whitespace() {
        assert_eq!(normalize("Squat   Rack"), Some(Equipment::SquatRack));
        assert_eq!(normalize("stair\tclimber"), Some(Equipment::StairClimber));
        assert_eq!(normalize("Hack Squat"), Some(Equipment::HackSquat));
        assert_eq!(normalize("Pulley Single"), Some(Equipment::PulleySingle));
    }

    #[test]
    fn test_normalize_unrecognized() {
        assert_eq!(normalize("unknownThing"), None);
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize("squat rakc"), None);
        assert_eq!(normalize("bench"), None);
    }

    #[test]
    fn test_every_canonical_spelling_is_an_alias() {
        for eq in Equipment::ALL {
            let lower = eq.as_str().to_lowercase();
            assert_eq!(ALIASES.get(lower.as_str()), Some(&eq), "missing alias {}", lower);
        }
    }

    #[test]
    fn test_alias_keys_are_lowercase_and_trimmed() {
        for (alias, _) in ALIAS_TABLE {
            assert_eq!(*alias, alias.trim().to_lowercase());
        }
    }

    #[test]
    fn test_normalize_all_dedupes_in_order() {
        let set = normalize_all(["barbell", "Barbell", "rower", "nope", "BARBELL"]);
        let v: Vec<_> = set.into_iter().collect();
        assert_eq!(v, vec![Equipment::Barbell, Equipment::Rower]);
    }

    #[test]
    fn test_aliases_for_sorted() {
        let a = aliases_for(Equipment::Sled);
        assert_eq!(a, vec!["prowler", "sled"]);
    }

    proptest! {
        #[test]
        fn prop_case_and_padding_invariant(
            idx in 0usize..Equipment::ALL.len(),
            upper in any::<bool>(),
            left in "[ \t]{0,3}",
            right in "[ \t\n]{0,3}",
        ) {
            let eq = Equipment::ALL[idx];
            let body = if upper { eq.as_str().to_uppercase() } else { eq.as_str().to_string() };
            let label = format!("{left}{body}{right}");
            prop_assert_eq!(normalize(&label), Some(eq));
        }

        #[test]
        fn prop_digits_never_match(s in "[0-9]{1,12}") {
            prop_assert_eq!(normalize(&s), None);
        }
    }
}
