mod common;

use rand::SeedableRng;
use rand::rngs::StdRng;
use receipt_points::application::processor::ReceiptProcessor;
use receipt_points::domain::scoring::{self, Rule};
use receipt_points::domain::validator;

#[test]
fn test_random_receipts_validate_and_score_deterministically() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..500 {
        let receipt = common::random_receipt(&mut rng);

        assert!(validator::validate(&receipt).is_ok(), "{receipt:?}");

        let first = scoring::score(&receipt);
        let second = scoring::score(&receipt.clone());
        assert_eq!(first, second);
        assert_eq!(ReceiptProcessor::evaluate(&receipt).unwrap(), first);
        assert!(first >= 0);

        let summed: i64 = Rule::ALL.iter().map(|rule| rule.points(&receipt)).sum();
        assert_eq!(summed, first);
    }
}
