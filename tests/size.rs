//! Transaction size estimates for common spends.

use secp256k1::rand::{self, seq::SliceRandom};
use tx_size::bitcoin::{ScriptBuf, Weight};
use tx_size::{
    to_bytes, CostModel, InputSizeError, PreviousOutput, ScriptType, TargetOutput,
    TransactionSizeCalculator,
};

fn spend(types: &[ScriptType]) -> Vec<PreviousOutput> {
    types.iter().copied().map(PreviousOutput::new).collect()
}

#[test]
fn legacy_size_is_plain_sum() {
    let calc = TransactionSizeCalculator::default();
    let inputs = [ScriptType::P2pkh, ScriptType::P2pk, ScriptType::P2pkh];
    let outputs = [ScriptType::P2pkh, ScriptType::P2sh, ScriptType::P2wpkh, ScriptType::P2tr];

    let expected = CostModel::BITCOIN.legacy_tx_overhead
        + inputs.iter().map(|ty| calc.nominal_input_size(*ty)).sum::<usize>()
        + outputs.iter().map(|ty| calc.output_size(*ty)).sum::<usize>();

    assert_eq!(calc.transaction_size(&spend(&inputs), &outputs, None).unwrap(), expected);
}

#[test]
fn segwit_p2wpkh_spend_grows_from_legacy() {
    let calc = TransactionSizeCalculator::default();
    let targets = [ScriptType::P2pkh, ScriptType::P2pkh];

    let legacy = calc.transaction_size(&spend(&[ScriptType::P2pkh]), &targets, None).unwrap();
    let segwit = calc.transaction_size(&spend(&[ScriptType::P2wpkh]), &targets, None).unwrap();

    assert_eq!(legacy, 256);
    // (42 + 41 + 68) * 4 + 108 = 712 weight units.
    assert_eq!(segwit, 178);
}

#[test]
fn size_does_not_depend_on_input_order() {
    let calc = TransactionSizeCalculator::default();
    let mut types = vec![
        ScriptType::P2pkh,
        ScriptType::P2wpkh,
        ScriptType::P2tr,
        ScriptType::P2pk,
        ScriptType::P2wpkhSh,
        ScriptType::P2pkh,
        ScriptType::Unknown,
    ];
    let outputs = [ScriptType::P2wpkh, ScriptType::P2pkh];
    let expected = calc.transaction_size(&spend(&types), &outputs, Some("memo")).unwrap();

    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        types.shuffle(&mut rng);
        let size = calc.transaction_size(&spend(&types), &outputs, Some("memo")).unwrap();
        assert_eq!(size, expected, "order {:?}", types);
    }
}

#[test]
fn repeated_calls_are_deterministic() {
    let calc = TransactionSizeCalculator::default();
    let prev = spend(&[ScriptType::P2tr, ScriptType::P2pkh]);

    let first = calc.transaction_size_with_plugin_data(&prev, &[ScriptType::P2tr], Some("x"), 12);
    for _ in 0..10 {
        let again =
            calc.transaction_size_with_plugin_data(&prev, &[ScriptType::P2tr], Some("x"), 12);
        assert_eq!(again, first);
    }
}

#[test]
fn p2sh_multisig_spend() {
    let calc = TransactionSizeCalculator::default();

    // 2-of-3 CHECKMULTISIG script_sig: OP_0 <sig> <sig> <redeem_script>
    let builder = |placeholders: &[&[u8]]| {
        let redeem_script_push = 2 + 105;
        let sig = placeholders[0];
        ScriptBuf::from_bytes(vec![0; 1 + 2 * sig.len() + redeem_script_push])
    };
    let prev = vec![PreviousOutput::p2sh_with_builder(None, builder)];

    let size = calc.transaction_size(&prev, &[ScriptType::P2pkh], None).unwrap();
    assert_eq!(size, 40 + (41 + 1 + 2 * 73 + 107) + 34);
}

#[test]
fn p2sh_needs_redeem_info() {
    let calc = TransactionSizeCalculator::default();
    let prev = spend(&[ScriptType::P2sh]);

    let err = calc.transaction_size(&prev, &[], None).unwrap_err();
    assert_eq!(err, InputSizeError::MissingRedeemInfo);
}

#[test]
fn weight_can_be_combined_by_caller() {
    let calc = TransactionSizeCalculator::default();
    let prev = spend(&[ScriptType::P2wpkh]);

    let weight = calc.transaction_weight(&prev, &[ScriptType::P2wpkh], None, 0).unwrap();
    let memo_output = calc.output_size(TargetOutput::LockingScript(3));
    let extra = Weight::from_non_witness_data_size(memo_output as u64);

    let combined = calc.transaction_weight(&prev, &[ScriptType::P2wpkh], Some("abc"), 0).unwrap();
    assert_eq!(weight + extra, combined);
    let size = calc.transaction_size(&prev, &[ScriptType::P2wpkh], Some("abc")).unwrap();
    assert_eq!(to_bytes(combined), size);
}

#[test]
fn estimator_is_shareable_across_threads() {
    let calc = TransactionSizeCalculator::default();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(move || {
                calc.transaction_size(&spend(&[ScriptType::P2pkh]), &[ScriptType::P2pkh], None)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(222));
    }
}
