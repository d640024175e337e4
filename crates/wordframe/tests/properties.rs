#![allow(missing_docs)]

use std::sync::Arc;

use proptest::prelude::*;
use wordframe::{
    SequenceEncoderOptions,
    SequencePolicy,
    Side,
    Vocabulary,
    VocabularyBuilder,
    VocabularyOptions,
};

fn side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Head), Just(Side::Tail)]
}

fn policy() -> impl Strategy<Value = SequencePolicy> {
    (side(), side()).prop_map(|(truncation, padding)| SequencePolicy::new(truncation, padding))
}

/// Documents over a small alphabet, so counts collide and ties happen.
fn corpus() -> impl Strategy<Value = Vec<Vec<String>>> {
    proptest::collection::vec(
        proptest::collection::vec("[a-h]{1,2}", 0..30),
        0..12,
    )
}

fn count(docs: &[Vec<String>]) -> VocabularyBuilder {
    let mut builder = VocabularyOptions::new(1).init();
    builder.update_from_documents(docs);
    builder
}

fn build_with(
    builder: &VocabularyBuilder,
    max_size: usize,
) -> Vocabulary<u32> {
    let mut builder = builder.clone();
    builder.options = builder.options.with_max_size(max_size);
    builder.build().unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn vocab_size_is_bounded(docs in corpus(), max_size in 1..40usize) {
        let builder = count(&docs);
        let vocab = build_with(&builder, max_size);

        prop_assert!(vocab.len() <= max_size);
        prop_assert_eq!(vocab.len(), builder.num_distinct().min(max_size));
    }

    #[test]
    fn vocab_grows_monotonically(docs in corpus(), small in 1..20usize, extra in 0..20usize) {
        let builder = count(&docs);
        let smaller = build_with(&builder, small);
        let larger = build_with(&builder, small + extra);

        // The smaller vocabulary is a prefix of the larger, ids included.
        for (id, token) in smaller.iter() {
            prop_assert_eq!(larger.lookup_id(token), Some(id));
        }
    }

    #[test]
    fn vocab_ranks_by_count(docs in corpus(), max_size in 1..40usize) {
        let builder = count(&docs);
        let vocab = build_with(&builder, max_size);

        let counts: Vec<u64> = vocab.tokens().iter().map(|t| builder.count(t)).collect();
        prop_assert!(counts.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn encoding_has_exact_length(
        docs in corpus(),
        doc in proptest::collection::vec("[a-j]{1,2}", 0..80),
        length in 1..64usize,
        policy in policy(),
    ) {
        let vocab = Arc::new(build_with(&count(&docs), 10));
        let encoder = SequenceEncoderOptions::new(length)
            .with_policy(policy)
            .build(vocab)
            .unwrap();

        let encoded = encoder.encode(&doc);
        prop_assert_eq!(encoded.len(), length);

        // Deterministic.
        prop_assert_eq!(encoded.clone(), encoder.encode(&doc));

        // The non-padding region is the kept window of the document.
        let kept = doc.len().min(length);
        let window = match policy.padding {
            Side::Tail => &encoded[..kept],
            Side::Head => &encoded[length - kept..],
        };
        let padding: Vec<u32> = match policy.padding {
            Side::Tail => encoded[kept..].to_vec(),
            Side::Head => encoded[..length - kept].to_vec(),
        };
        prop_assert!(padding.iter().all(|&id| id == 0));

        let source = match policy.truncation {
            Side::Tail => &doc[..kept],
            Side::Head => &doc[doc.len() - kept..],
        };
        for (id, token) in window.iter().zip(source) {
            prop_assert_eq!(*id, encoder.vocab().id_or_unknown(token));
        }
    }

    #[test]
    fn batch_matches_single(
        docs in corpus(),
        length in 1..16usize,
        policy in policy(),
        parallel in any::<bool>(),
    ) {
        let vocab = Arc::new(build_with(&count(&docs), 6));
        let encoder = SequenceEncoderOptions::new(length)
            .with_policy(policy)
            .with_parallel(parallel)
            .build(vocab)
            .unwrap();

        let batch = encoder.encode_batch(&docs);
        prop_assert_eq!(batch.shape(), (docs.len(), length));
        for (row, doc) in batch.iter_rows().zip(&docs) {
            prop_assert_eq!(row.to_vec(), encoder.encode(doc));
        }
    }
}
