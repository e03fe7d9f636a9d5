// Browser tests: `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn start_game_builds_missing_controls() {
    silhouette_guess::start_game_with_config(r#"{"api_base_url":"http://127.0.0.1:9/"}"#).unwrap();

    let doc = web_sys::window().unwrap().document().unwrap();
    for id in [
        "pokemon-image",
        "guess-input",
        "submit-guess",
        "hint-type",
        "hint-habitat",
        "hint-height",
        "hint-weight",
        "hint-gen",
        "new-game",
        "result-message",
        "reveal-name",
        "attempts",
        "hints-used",
    ] {
        assert!(doc.get_element_by_id(id).is_some(), "missing #{id}");
    }
    assert_eq!(
        doc.get_element_by_id("hint-types-value").unwrap().text_content().as_deref(),
        Some("????")
    );
    assert_eq!(
        doc.get_element_by_id("attempts").unwrap().text_content().as_deref(),
        Some("Attempts: 0")
    );

    // No subject loaded yet: hints and guesses are refused.
    assert!(!silhouette_guess::reveal_hint("type"));
    silhouette_guess::submit_guess("pikachu");
    assert_eq!(
        doc.get_element_by_id("attempts").unwrap().text_content().as_deref(),
        Some("Attempts: 0")
    );
}
