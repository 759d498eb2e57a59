//! WASM API smoke tests
//!
//! Exercise the JavaScript-facing endpoints in a browser environment;
//! the core logic has its own native tests.

#![cfg(target_arch = "wasm32")]

use scorescan_wasm::api::{format_output, preprocess_image, process_score};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_preprocess_roundtrips_buffer_size() {
    let rgba = vec![255u8; 8 * 8 * 4];
    let gray = preprocess_image(rgba, 8, 8).unwrap();
    assert_eq!(gray.len(), 8 * 8);
}

#[wasm_bindgen_test]
fn test_preprocess_rejects_bad_buffer() {
    assert!(preprocess_image(vec![0u8; 10], 8, 8).is_err());
}

#[wasm_bindgen_test]
fn test_process_score_empty_image() {
    let rgba = vec![255u8; 16 * 16 * 4];
    let detections = serde_wasm_bindgen::to_value(&Vec::<scorescan_wasm::Detection>::new()).unwrap();
    let json = process_score(rgba, 16, 16, detections).unwrap();
    assert!(json.starts_with(r#"{"staff_lines":"#));
}

#[wasm_bindgen_test]
fn test_format_output_shape() {
    let lines = serde_wasm_bindgen::to_value(&vec![10u32, 30, 50]).unwrap();
    let notes = serde_wasm_bindgen::to_value(&Vec::<scorescan_wasm::DetectedNote>::new()).unwrap();
    let json = format_output(lines, notes).unwrap();
    assert_eq!(
        json,
        r#"{"staff_lines":[{"y_position":10},{"y_position":30},{"y_position":50}],"notes":[]}"#
    );
}
