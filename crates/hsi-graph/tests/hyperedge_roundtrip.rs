use hsi_core::rng::RngHandle;
use hsi_core::NodeId;
use hsi_graph::{canonical_hash, gen_regular, GenerationOutcome, HyperedgeList};

#[test]
fn hyperedge_list_round_trips_json() {
    let list = HyperedgeList::new(
        5,
        3,
        vec![
            vec![NodeId::from_raw(0), NodeId::from_raw(1), NodeId::from_raw(2)],
            vec![NodeId::from_raw(2), NodeId::from_raw(3), NodeId::from_raw(4)],
        ],
    )
    .unwrap();

    let json = serde_json::to_string(&list).expect("serialize");
    let decoded: HyperedgeList = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(decoded, list);
    assert_eq!(canonical_hash(&decoded), canonical_hash(&list));
}

#[test]
fn generation_outcome_round_trips_json() {
    let mut rng = RngHandle::from_seed(8);
    let outcome = gen_regular(12, 3, 3, &mut rng).unwrap();

    let json = serde_json::to_string_pretty(&outcome).expect("serialize");
    let decoded: GenerationOutcome = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(decoded, outcome);
    assert_eq!(decoded.total_blocks(), outcome.total_blocks());
}
