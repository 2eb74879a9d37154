use std::fs;
use std::path::PathBuf;

use receiptgen::labels::{BundledLabels, Language};
use receiptgen::record::{ReceiptKind, ReceiptRecord};
use receiptgen::rendering::document::{render_receipt, ReceiptDocument};
use receiptgen::rendering::{RenderTarget, Screenshot};
use receiptgen::RECEIPT_WIDTH;
use sha2::{Digest, Sha256};

const GOLDEN_KINDS: [ReceiptKind; 3] = [ReceiptKind::Sleep, ReceiptKind::Coffee, ReceiptKind::Shopping];

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

fn document(kind: ReceiptKind) -> ReceiptDocument {
    let record = ReceiptRecord::seeded(kind, "2025/01/01");
    render_receipt(&record, &BundledLabels, Language::En, 1_700_000_000_000)
}

fn render(kind: ReceiptKind, ratio: f64) -> Screenshot {
    RenderTarget::mount(document(kind), RECEIPT_WIDTH)
        .rasterize(ratio, 50_000_000)
        .expect("rasterize")
}

fn digest(shot: &Screenshot) -> String {
    hex::encode(Sha256::digest(&shot.png_data))
}

#[test]
fn rendering_is_byte_for_byte_deterministic() {
    let a = render(ReceiptKind::Sleep, 2.0);
    let b = render(ReceiptKind::Sleep, 2.0);
    assert_eq!(digest(&a), digest(&b));
}

#[test]
fn golden_documents_match_fixtures() {
    for kind in GOLDEN_KINDS {
        let actual = serde_json::to_value(document(kind)).expect("serialize document");
        let expected_path = golden_path(&format!("{}.json", kind.slug()));

        if std::env::var("UPDATE_GOLDENS").is_ok() {
            fs::create_dir_all("tests/goldens/expected").ok();
            let pretty = serde_json::to_string_pretty(&actual).expect("pretty json");
            fs::write(&expected_path, pretty + "\n").expect("write golden");
            println!("Updated golden: {:?}", expected_path);
            continue;
        }

        let text = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("unable to read golden {:?}: {}", expected_path, e));
        let expected: serde_json::Value = serde_json::from_str(&text).expect("golden is json");
        assert_eq!(actual, expected, "{} document changed", kind);
    }
}

#[test]
fn golden_images_match_recorded_digests() {
    for kind in GOLDEN_KINDS {
        let shot = render(kind, 2.0);
        let expected_path = golden_path(&format!("{}.sha256", kind.slug()));

        if std::env::var("UPDATE_GOLDENS").is_ok() {
            fs::create_dir_all("tests/goldens/expected").ok();
            fs::write(&expected_path, digest(&shot)).expect("write golden");
            println!("Updated golden: {:?}", expected_path);
            continue;
        }

        // image digests are recorded with UPDATE_GOLDENS=1
        if !expected_path.exists() {
            println!("No golden at {:?}; skipping image digest.", expected_path);
            continue;
        }

        let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
        assert_eq!(digest(&shot), exp.trim(), "{} receipt changed", kind);
    }
}
