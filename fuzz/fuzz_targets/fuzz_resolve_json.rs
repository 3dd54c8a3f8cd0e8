#![no_main]

use dashtheme_palette::resolve_json;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    // Any input either resolves or reports an error; it must never panic.
    if let Ok(colors) = resolve_json(json) {
        assert!(colors.tonal_offset.is_finite());
        let _ = colors.get_contrast_text(colors.primary.main);
    }
});
