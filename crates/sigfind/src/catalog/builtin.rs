//! Built-in signature catalog for the YWP arm64 build

use crate::resolver::Group;

use super::{SignatureCatalog, SignatureEntry};

pub const BUILTIN_VERSION: &str = "ywp-arm64";

/// (label, pattern, group, patch)
///
/// Labels are kept exactly as the earlier tool printed them so that
/// `label: offset` output can be compared line for line.
const BUILTIN_ENTRIES: &[(&str, &str, Group, &str)] = &[
    ("HP", "69029f1a", Group::A, "49010a4b"),
    // double speed
    ("倍速", "28070034A102472D", Group::A, "0010281E"),
    // delay
    ("遅延", "08011F32E80200B9", Group::A, "0010281E"),
    // invincible
    ("無敵", "e103271e284c201ee10740b9", Group::B, "76070091"),
    // 1M damage
    (
        "100万ダメージ",
        "EB2BC56CC0035FD6F44FBEA9FD7B01A9fd430091f30301aa",
        Group::A,
        "F31772B2",
    ),
    // result skip
    ("リザルトスキップ", "0D6C0054", Group::A, "1F040071"),
    // guaranteed drop
    ("確定ドロップ", "1800805237008052E81f4139", Group::A, "20008052"),
    // disable yokai drops
    ("妖怪ドロップ無効", "E81f413928fe3f36", Group::A, "00008052"),
    // score
    ("スコア", "0100f09206000014", Group::A, "01c8158b"),
    // instant skill
    ("即技", "7fc233eb60029f1a", Group::A, "e103261e"),
    // single-color puni
    ("ぷに一色", "F70304aaF40303aaF90302aa2840201e", Group::A, "fa031faa"),
    // 90k damage
    ("9万ダメージ", "081040b91f050071", Group::C, "f3071132"),
    // straight stage
    ("ステージ直線", "01102e1e2018201e0218281e", Group::B, "E203271E"),
    // everything connects
    ("全部繋がる", "80080034c21a40b9", Group::A, "E1000054"),
    // instant fever
    ("即フィーバー", "e00314aa00013fd60859a8520101271e", Group::D, "e8031f2a"),
    // bonus orb
    ("ボーナス玉", "080140b91f01016b", Group::F, "3f00086b"),
];

/// Catalog shipped with the tool, in display order.
pub fn builtin_catalog() -> SignatureCatalog {
    SignatureCatalog {
        version: BUILTIN_VERSION.to_string(),
        entries: BUILTIN_ENTRIES
            .iter()
            .map(|&(label, pattern, group, patch)| SignatureEntry {
                label: label.to_string(),
                pattern: pattern.to_string(),
                group,
                patch: Some(patch.to_string()),
            })
            .collect(),
    }
}
