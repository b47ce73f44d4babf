//! Browser tests for the wasm bindings
//!
//! Run with `wasm-pack test --headless --chrome crates/vidwall-web`.

#![cfg(target_arch = "wasm32")]

use vidwall_board::{Storage, StorageError};
use vidwall_web::{BoardController, LocalStorage};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const KEY: &str = "vidwall.test.cards";

fn clear() {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(KEY);
    }
}

fn config() -> Option<String> {
    Some(format!(r#"{{"storageKey":"{}","confirmDelete":false}}"#, KEY))
}

#[wasm_bindgen_test]
fn local_storage_round_trip() {
    clear();
    let mut storage = LocalStorage::new();
    assert_eq!(storage.read(KEY), Ok(None));
    storage.write(KEY, "[]").unwrap();
    assert_eq!(storage.read(KEY), Ok(Some("[]".to_string())));
    clear();
}

#[wasm_bindgen_test]
fn quota_errors_are_classified() {
    let mut storage = LocalStorage::new();
    let huge = "x".repeat(16 * 1024 * 1024);
    match storage.write(KEY, &huge) {
        Ok(()) => clear(),
        Err(e) => assert_eq!(e, StorageError::QuotaExceeded),
    }
}

#[wasm_bindgen_test]
fn controller_persists_across_instances() {
    clear();
    {
        let mut controller = BoardController::new(config());
        let added = controller.add_card("https://youtu.be/dQw4w9WgXcQ");
        assert!(added.contains(r#""ok":true"#));
        assert!(controller.add_card("nope").contains(r#""ok":false"#));
    }

    let controller = BoardController::new(config());
    let cards = controller.get_cards_json();
    assert!(cards.contains(r#""contentRef":"dQw4w9WgXcQ""#));
    assert!(cards.contains(r#""elementId":"vidwall-player-1""#));
    clear();
}

#[wasm_bindgen_test]
fn pointer_round_trip() {
    clear();
    let mut controller = BoardController::new(config());
    controller.add_card("dQw4w9WgXcQ");

    assert!(controller.start_resize_drag(1, "se", 420.0, 280.0));
    assert_eq!(controller.pointer_move(620.0, 280.0), r#"{"type":"handled"}"#);
    assert!(controller.get_overlay_json().contains("520 × 290"));
    assert_eq!(controller.pointer_up(), r#"{"type":"handled"}"#);
    assert_eq!(controller.pointer_up(), r#"{"type":"unhandled"}"#);
    assert_eq!(controller.key_down("k", true, false).as_deref(), Some("toggle_panel"));
    clear();
}

#[wasm_bindgen_test]
fn invalid_config_falls_back_to_defaults() {
    let controller = BoardController::new(Some("{not json".to_string()));
    assert_eq!(controller.cursor_at(-10.0, -10.0), "default");
}
