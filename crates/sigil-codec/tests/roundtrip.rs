use sigil_codec::{Generator, GeneratorSettings};
use sigil_core::Alphabet;
use std::collections::HashSet;
use std::sync::Arc;

const CHARSET: &str = "97FEMpQdLjq2ca3yGU5ZrHB84bDznYkWeRSgKoXmJh6itCuNvATsPxwVf";

fn invite_generator() -> Generator {
    let settings = GeneratorSettings::builder()
        .alphabet(Alphabet::new(CHARSET).unwrap())
        .length(6)
        .build();
    Generator::new(settings).unwrap()
}

#[test]
fn invite_codes_round_trip_for_the_first_ids() {
    let generator = invite_generator();
    assert_eq!(generator.max_support_id(), 58u64.pow(6) - 1);

    let mut codes = HashSet::new();
    for id in 0..=20u64 {
        let code = generator.encode(id).unwrap();
        assert_eq!(code.as_str().chars().count(), 6);
        assert!(codes.insert(code.clone()), "duplicate code for id {id}");
        assert_eq!(generator.decode(code.as_str()), Ok(id));
    }
}

#[test]
fn ids_zero_and_one_produce_distinct_codes() {
    let generator = invite_generator();
    let zero = generator.encode(0).unwrap();
    let one = generator.encode(1).unwrap();
    assert_ne!(zero, one);
    assert_eq!(generator.decode(zero.as_str()), Ok(0));
    assert_eq!(generator.decode(one.as_str()), Ok(1));
}

#[test]
fn boundary_ids_round_trip() {
    let generator = invite_generator();
    let max = generator.max_support_id();
    for id in [0, 1, max - 1, max] {
        let code = generator.encode(id).unwrap();
        assert_eq!(generator.decode(code.as_str()), Ok(id));
    }
    assert!(generator.encode(max + 1).is_err());
}

#[test]
fn codes_are_injective_over_a_dense_range() {
    let generator = invite_generator();
    let mut seen = HashSet::new();
    for id in 0..10_000u64 {
        let code = generator.encode(id).unwrap();
        assert!(seen.insert(code), "collision at id {id}");
    }
}

#[test]
fn shared_generator_encodes_correctly_across_threads() {
    let generator = Arc::new(invite_generator());

    let handles: Vec<_> = (0..4u64)
        .map(|worker| {
            let generator = Arc::clone(&generator);
            std::thread::spawn(move || {
                for id in (worker * 1_000)..(worker * 1_000 + 1_000) {
                    let code = generator.encode(id).unwrap();
                    assert_eq!(generator.decode(code.as_str()), Ok(id));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
