//! JavaScript-facing recognition endpoints
//!
//! The browser decodes the uploaded image to RGBA (canvas `ImageData`)
//! and runs the pretrained note detector in its own inference runtime;
//! these endpoints cover everything in between: preprocessing, staff
//! line location, pitch assignment, overlay geometry, and the final
//! JSON document. Each call is a complete, stateless request.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, scan_error, serialize};
use crate::detector::{assign_pitches, Detection};
use crate::models::{DetectedNote, StaffLineSet};
use crate::processing::{find_staff_lines, preprocess};
use crate::renderers::{format_detection_output, overlay_rects};
use crate::{wasm_info, wasm_log};

/// Binarize an uploaded image for staff line detection
///
/// Takes canvas RGBA bytes; returns grayscale bytes (one per pixel,
/// 0 or 255) with ink as foreground.
#[wasm_bindgen(js_name = preprocessImage)]
pub fn preprocess_image(rgba: Vec<u8>, width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    wasm_info!("preprocessImage called for {}x{} image", width, height);

    let rgba = preprocess::rgba_from_raw(rgba, width, height)
        .map_err(|e| scan_error("preprocessImage", e))?;
    let binarized = preprocess::binarize(&preprocess::to_grayscale(&rgba));

    Ok(binarized.into_raw())
}

/// Locate staff lines in a binarized grayscale image
///
/// Returns the ascending y-coordinates as a JS array. An empty array is
/// a valid result, not an error.
#[wasm_bindgen(js_name = detectStaffLines)]
pub fn detect_staff_lines(gray: Vec<u8>, width: u32, height: u32) -> Result<JsValue, JsValue> {
    wasm_info!("detectStaffLines called for {}x{} image", width, height);

    let image = image::GrayImage::from_raw(width, height, gray).ok_or_else(|| {
        let msg = format!(
            "detectStaffLines: pixel buffer does not match {}x{} grayscale dimensions",
            width, height
        );
        crate::api::helpers::log_error(&msg);
        JsValue::from_str(&msg)
    })?;

    let lines = find_staff_lines(&image).map_err(|e| scan_error("detectStaffLines", e))?;
    wasm_log!("  found {} staff lines", lines.len());

    serialize(&lines, "detectStaffLines: serialization failed")
}

/// Assign pitches to raw detections using located staff lines
///
/// `detections` is an array of `{bbox: [x1,y1,x2,y2], confidence, class}`;
/// `staff_lines` is the array returned by `detectStaffLines`. Returns
/// full note records with pitch and duration.
#[wasm_bindgen(js_name = assignPitches)]
pub fn assign_pitches_js(detections: JsValue, staff_lines: JsValue) -> Result<JsValue, JsValue> {
    wasm_info!("assignPitches called");

    let detections: Vec<Detection> =
        deserialize(detections, "assignPitches: invalid detections")?;
    let staff_lines: StaffLineSet =
        deserialize(staff_lines, "assignPitches: invalid staff lines")?;

    let notes = assign_pitches(&detections, &staff_lines)
        .map_err(|e| scan_error("assignPitches", e))?;
    wasm_log!("  assigned pitches to {} notes", notes.len());

    serialize(&notes, "assignPitches: serialization failed")
}

/// Overlay rectangles (box, per-class color, caption) for the display
#[wasm_bindgen(js_name = overlayInstructions)]
pub fn overlay_instructions(notes: JsValue) -> Result<JsValue, JsValue> {
    let notes: Vec<DetectedNote> = deserialize(notes, "overlayInstructions: invalid notes")?;
    serialize(
        &overlay_rects(&notes),
        "overlayInstructions: serialization failed",
    )
}

/// Format located lines and pitched notes as the output JSON document
#[wasm_bindgen(js_name = formatOutput)]
pub fn format_output(staff_lines: JsValue, notes: JsValue) -> Result<String, JsValue> {
    wasm_info!("formatOutput called");

    let staff_lines: StaffLineSet =
        deserialize(staff_lines, "formatOutput: invalid staff lines")?;
    let notes: Vec<DetectedNote> = deserialize(notes, "formatOutput: invalid notes")?;

    Ok(format_detection_output(&staff_lines, &notes))
}

/// Full pipeline: RGBA image + host-side detections → JSON document
#[wasm_bindgen(js_name = processScore)]
pub fn process_score(
    rgba: Vec<u8>,
    width: u32,
    height: u32,
    detections: JsValue,
) -> Result<String, JsValue> {
    wasm_info!("processScore called for {}x{} image", width, height);

    let detections: Vec<Detection> = deserialize(detections, "processScore: invalid detections")?;

    let rgba = preprocess::rgba_from_raw(rgba, width, height)
        .map_err(|e| scan_error("processScore", e))?;
    let binarized = preprocess::binarize(&preprocess::to_grayscale(&rgba));

    let staff_lines = find_staff_lines(&binarized).map_err(|e| scan_error("processScore", e))?;
    wasm_log!(
        "  {} staff lines, {} detections",
        staff_lines.len(),
        detections.len()
    );

    let notes =
        assign_pitches(&detections, &staff_lines).map_err(|e| scan_error("processScore", e))?;

    wasm_info!("processScore completed successfully");
    Ok(format_detection_output(&staff_lines, &notes))
}
